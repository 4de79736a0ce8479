use crate::replacement::splice;
use crate::{Error, MemDocument, Replacement, Result, TextDocument};
use simple_fs::{SPath, ensure_file_dir, read_to_string, safer_trash_file};
use std::collections::HashMap;
use std::fs;

/// Host capabilities the edit engine needs.
///
/// Paths given to these methods are already resolved (absolute).
pub trait Workspace {
	type Document: TextDocument;

	/// Root used to resolve relative edit paths. `None` when no workspace is open.
	fn root(&self) -> Option<&SPath>;

	fn exists(&self, path: &SPath) -> bool;

	/// Current content of `path`, including staged but unsaved changes.
	fn open_document(&self, path: &SPath) -> Result<Self::Document>;

	/// Writes a new file, creating parent directories as needed.
	fn create_file(&mut self, path: &SPath, content: &str) -> Result<()>;

	/// Applies all `replacements` to `path` as one atomic change.
	///
	/// Returns `false` when the host refuses the batch (nothing is changed).
	fn apply_replacements(&mut self, path: &SPath, replacements: &[Replacement]) -> Result<bool>;

	/// Persists any staged change for `path`.
	fn save(&mut self, path: &SPath) -> Result<()>;

	fn delete_file(&mut self, path: &SPath, use_trash: bool) -> Result<()>;
}

// region:    --- FsWorkspace

/// `Workspace` over the real file system.
///
/// Batched replacements are staged in memory and written by `save`, one write per file.
#[derive(Debug, Default)]
pub struct FsWorkspace {
	root: Option<SPath>,
	staged: HashMap<String, String>,
}

impl FsWorkspace {
	/// Workspace rooted at `root`. A relative root is taken from the current directory.
	pub fn new(root: impl Into<SPath>) -> Result<Self> {
		let root: SPath = root.into();
		let root = if root.is_absolute() {
			root.into_collapsed()
		} else {
			let cwd = std::env::current_dir()?;
			SPath::from_std_path(cwd)?.join(root.as_str()).into_collapsed()
		};

		Ok(Self {
			root: Some(root),
			staged: HashMap::new(),
		})
	}

	/// Workspace with no root; only absolute edit paths resolve.
	pub fn without_root() -> Self {
		Self::default()
	}
}

impl Workspace for FsWorkspace {
	type Document = MemDocument;

	fn root(&self) -> Option<&SPath> {
		self.root.as_ref()
	}

	fn exists(&self, path: &SPath) -> bool {
		path.exists()
	}

	fn open_document(&self, path: &SPath) -> Result<MemDocument> {
		if let Some(staged) = self.staged.get(path.as_str()) {
			return Ok(MemDocument::new(staged.clone()));
		}
		let content = read_to_string(path)?;
		Ok(MemDocument::new(content))
	}

	fn create_file(&mut self, path: &SPath, content: &str) -> Result<()> {
		ensure_file_dir(path)?;
		fs::write(path.std_path(), content).map_err(|err| Error::io_file(path.to_string(), err))?;
		Ok(())
	}

	fn apply_replacements(&mut self, path: &SPath, replacements: &[Replacement]) -> Result<bool> {
		let doc = self.open_document(path)?;
		let Some(new_content) = splice(&doc, replacements) else {
			return Ok(false);
		};
		self.staged.insert(path.as_str().to_string(), new_content);
		Ok(true)
	}

	fn save(&mut self, path: &SPath) -> Result<()> {
		if let Some(content) = self.staged.remove(path.as_str()) {
			fs::write(path.std_path(), content).map_err(|err| Error::io_file(path.to_string(), err))?;
		}
		Ok(())
	}

	fn delete_file(&mut self, path: &SPath, use_trash: bool) -> Result<()> {
		self.staged.remove(path.as_str());
		if use_trash {
			safer_trash_file(path, ())?;
		} else {
			fs::remove_file(path.std_path()).map_err(|err| Error::io_file(path.to_string(), err))?;
		}
		Ok(())
	}
}

// endregion: --- FsWorkspace
