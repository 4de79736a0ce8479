/// Options shared by preview and apply.
#[derive(Debug, Clone)]
pub struct EditOptions {
	/// Move deleted files to the platform trash instead of removing them.
	pub use_trash: bool,
	/// Refuse any resolved path outside the workspace root.
	pub confine_to_root: bool,
}

impl Default for EditOptions {
	fn default() -> Self {
		Self {
			use_trash: true,
			confine_to_root: false,
		}
	}
}

impl EditOptions {
	pub fn with_use_trash(mut self, use_trash: bool) -> Self {
		self.use_trash = use_trash;
		self
	}

	pub fn with_confine_to_root(mut self, confine_to_root: bool) -> Self {
		self.confine_to_root = confine_to_root;
		self
	}
}
