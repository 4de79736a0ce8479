use crate::StaleAdvisory;
use simple_fs::SPath;

/// What a successful `apply_edits` did.
#[derive(Debug, Clone, Default)]
pub struct ApplyReport {
	pub created: Vec<SPath>,
	pub modified: Vec<ModifiedFile>,
	pub deleted: Vec<SPath>,
	/// Deletes skipped because the file was already gone.
	pub skipped_deletes: Vec<SPath>,
	pub advisories: Vec<StaleAdvisory>,
}

#[derive(Debug, Clone)]
pub struct ModifiedFile {
	pub path: SPath,
	/// Edits applied in the single batched change for this file.
	pub applied: usize,
	/// Edits collapsed into another one by dedup.
	pub collapsed: usize,
}

impl ApplyReport {
	/// Number of edits actually carried out.
	pub fn applied_count(&self) -> usize {
		self.created.len() + self.modified.iter().map(|m| m.applied).sum::<usize>() + self.deleted.len()
	}

	pub fn summary(&self) -> String {
		let mut summary = format!("Successfully applied {} edit(s)", self.applied_count());
		if !self.skipped_deletes.is_empty() {
			summary.push_str(&format!(", skipped {} missing delete(s)", self.skipped_deletes.len()));
		}
		if !self.advisories.is_empty() {
			summary.push_str(&format!(", {} advisory warning(s)", self.advisories.len()));
		}
		summary
	}
}
