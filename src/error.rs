use derive_more::{Display, From};

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Display, From)]
pub enum Error {
	#[from(String, &String, &str)]
	Custom(String),

	// -- Input
	#[display("Invalid input: {_0}")]
	InvalidInput(String),

	// -- Apply
	#[display("{what} not found: {path}")]
	NotFound { what: &'static str, path: String },

	#[display("Cannot create '{path}' because it already exists.")]
	AlreadyExists { path: String },

	#[display("Invalid startLine {start_line} for '{path}'. File has {line_count} lines.")]
	InvalidRange {
		path: String,
		start_line: usize,
		line_count: usize,
	},

	#[display("Host failed to apply the batched edits for '{path}'.")]
	ApplyRejected { path: String },

	#[display("Path '{path}' is outside of the workspace root '{root}'.")]
	OutsideWorkspace { path: String, root: String },

	#[display("IO error on '{path}': {cause}")]
	IoFile { path: String, cause: std::io::Error },

	// -- Externals
	#[from]
	Io(std::io::Error),

	#[from]
	SimpleFs(simple_fs::Error),

	#[from]
	SerdeJson(serde_json::Error),
}

// region:    --- Constructors

impl Error {
	pub fn invalid_input(msg: impl Into<String>) -> Self {
		Self::InvalidInput(msg.into())
	}

	pub fn not_found(what: &'static str, path: impl Into<String>) -> Self {
		Self::NotFound {
			what,
			path: path.into(),
		}
	}

	pub fn already_exists(path: impl Into<String>) -> Self {
		Self::AlreadyExists { path: path.into() }
	}

	pub fn invalid_range(path: impl Into<String>, start_line: usize, line_count: usize) -> Self {
		Self::InvalidRange {
			path: path.into(),
			start_line,
			line_count,
		}
	}

	pub fn apply_rejected(path: impl Into<String>) -> Self {
		Self::ApplyRejected { path: path.into() }
	}

	pub fn io_file(path: impl Into<String>, cause: std::io::Error) -> Self {
		Self::IoFile {
			path: path.into(),
			cause,
		}
	}

	pub fn outside_workspace(path: impl Into<String>, root: impl Into<String>) -> Self {
		Self::OutsideWorkspace {
			path: path.into(),
			root: root.into(),
		}
	}
}

// endregion: --- Constructors

// region:    --- Error Boilerplate

impl std::error::Error for Error {}

// endregion: --- Error Boilerplate
