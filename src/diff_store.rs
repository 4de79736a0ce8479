use crate::EditPreview;
use simple_fs::SPath;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hasher;
use twox_hash::XxHash32;

const DIFF_SCHEME: &str = "editx-diff";

/// Deterministic key of a virtual diff document: same kind, path and content give the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DiffKey(String);

impl DiffKey {
	pub fn new(kind: &str, path: &SPath, content: &str) -> Self {
		let mut hasher = XxHash32::with_seed(0);
		hasher.write(content.as_bytes());
		let hash = hasher.finish() as u32;

		Self(format!("{DIFF_SCHEME}:{path}?kind={kind}&h={hash:08x}"))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for DiffKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// Contents of the virtual before/after documents of one review session.
#[derive(Debug, Default)]
pub struct DiffContentStore {
	entries: HashMap<DiffKey, String>,
}

impl DiffContentStore {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn put(&mut self, key: DiffKey, content: impl Into<String>) {
		self.entries.insert(key, content.into());
	}

	pub fn get(&self, key: &DiffKey) -> Option<&str> {
		self.entries.get(key).map(String::as_str)
	}

	pub fn clear(&mut self) {
		self.entries.clear();
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Stores both sides of `preview`, returning `(before_key, after_key)`.
	pub fn put_preview(&mut self, preview: &EditPreview) -> (DiffKey, DiffKey) {
		let op = preview.op.as_str();
		let before_key = DiffKey::new(&format!("{op}-before"), &preview.path, &preview.before);
		let after_key = DiffKey::new(&format!("{op}-after"), &preview.path, &preview.after);

		self.put(before_key.clone(), preview.before.as_str());
		self.put(after_key.clone(), preview.after.as_str());

		(before_key, after_key)
	}
}

// region:    --- Tests


// endregion: --- Tests
