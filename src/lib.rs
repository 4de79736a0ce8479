//! Preview and apply AI-proposed edits (create / modify / delete) to workspace files.
//!
//! Modify edits are located by their `oldText` anchor first and by line numbers second,
//! deduplicated per file, and committed as one batched change per file.

// region:    --- Modules

mod advisory;
mod applier;
mod apply_report;
mod dedupe;
mod diff_store;
mod document;
mod edit;
mod error;
mod extract;
mod file_context;
mod options;
mod path_resolve;
mod preview;
mod range_resolver;
mod replacement;
mod session;
mod text_norm;
mod workspace;

pub use advisory::*;
pub use applier::*;
pub use apply_report::*;
pub use dedupe::*;
pub use diff_store::*;
pub use document::*;
pub use edit::*;
pub use error::*;
pub use extract::*;
pub use file_context::*;
pub use options::*;
pub use path_resolve::*;
pub use preview::*;
pub use range_resolver::*;
pub use replacement::*;
pub use session::*;
pub use text_norm::*;
pub use workspace::*;


// endregion: --- Modules
