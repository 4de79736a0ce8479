use crate::{Result, TextDocument, TextRange, Workspace};
use serde::Serialize;
use simple_fs::SPath;

/// Lines captured on each side of the cursor for a snippet.
pub const SNIPPET_RADIUS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContextMode {
	File,
	#[default]
	Snippet,
	Selection,
}

/// The slice of a document sent along with a prompt.
///
/// `snippet_start_line`/`snippet_end_line` are the line numbers an AI later echoes back
/// as `startLine`/`endLine`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileContext {
	pub file_path: String,
	pub mode: ContextMode,
	pub selected_text: String,
	pub snippet_text: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub full_text: Option<String>,
	pub snippet_start_line: usize,
	pub snippet_end_line: usize,
	pub cursor_line: usize,
	pub line_count: usize,
}

impl FileContext {
	pub fn to_json(&self) -> Result<String> {
		Ok(serde_json::to_string(self)?)
	}
}

/// Captures the context around `cursor_line` (clamped) of `doc`.
pub fn capture_file_context<D: TextDocument + ?Sized>(
	doc: &D,
	file_path: &str,
	mode: ContextMode,
	cursor_line: usize,
	selection: Option<&TextRange>,
) -> FileContext {
	let line_count = doc.line_count();
	let last_line = line_count.saturating_sub(1);
	let cursor_line = cursor_line.min(last_line);

	let snippet_start_line = cursor_line.saturating_sub(SNIPPET_RADIUS);
	let snippet_end_line = (cursor_line + SNIPPET_RADIUS).min(last_line);
	let snippet_text = (snippet_start_line..=snippet_end_line)
		.filter_map(|line| doc.line_at(line))
		.collect::<Vec<_>>()
		.join(doc.eol());

	let selected_text = selection.map(|range| doc.get_text(Some(range))).unwrap_or_default();
	let full_text = (mode == ContextMode::File).then(|| doc.get_text(None));

	FileContext {
		file_path: file_path.to_string(),
		mode,
		selected_text,
		snippet_text,
		full_text,
		snippet_start_line,
		snippet_end_line,
		cursor_line,
		line_count,
	}
}

/// Opens `path` in `ws` and captures its context, reporting the path relative to the workspace root.
pub fn load_file_context<W: Workspace + ?Sized>(
	ws: &W,
	path: &SPath,
	mode: ContextMode,
	cursor_line: usize,
) -> Result<FileContext> {
	let doc = ws.open_document(path)?;

	let rel_path = ws
		.root()
		.and_then(|root| path.as_str().strip_prefix(root.as_str()))
		.and_then(|rest| rest.strip_prefix('/'))
		.filter(|rest| !rest.is_empty())
		.unwrap_or(path.as_str());

	Ok(capture_file_context(&doc, rel_path, mode, cursor_line, None))
}

// region:    --- Tests


// endregion: --- Tests
