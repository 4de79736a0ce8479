use crate::TextDocument;
use crate::text_norm::normalize;
use std::fmt;

/// Non-fatal warning: the proposed `old_text` does not match the current block at the declared lines.
///
/// The same check runs in preview and apply, and never blocks either.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaleAdvisory {
	pub file_path: String,
	pub start_line: usize,
	pub end_line: usize,
}

impl fmt::Display for StaleAdvisory {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"Proposed edit may be out-of-date: oldText does not match current lines {}-{} of '{}'.",
			self.start_line, self.end_line, self.file_path
		)
	}
}

/// Compares `old_text` with the current inclusive block `[start_line, end_line]` (normalized).
pub fn check_stale<D: TextDocument + ?Sized>(
	doc: &D,
	file_path: &str,
	(start_line, end_line): (usize, usize),
	old_text: &str,
) -> Option<StaleAdvisory> {
	let actual = (start_line..=end_line)
		.filter_map(|line| doc.line_at(line))
		.collect::<Vec<_>>()
		.join("\n");

	if normalize(&actual) == normalize(old_text) {
		return None;
	}

	Some(StaleAdvisory {
		file_path: file_path.to_string(),
		start_line,
		end_line,
	})
}

// region:    --- Tests


// endregion: --- Tests
