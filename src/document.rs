//! Minimal text document capability needed by the edit engine.
//!
//! Offsets and columns are byte offsets into the raw document text.

/// A zero-based line/column position. `column` is a byte offset within the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
	pub line: usize,
	pub column: usize,
}

impl Position {
	pub fn new(line: usize, column: usize) -> Self {
		Self { line, column }
	}
}

/// A half-open `[start, end)` range between two positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextRange {
	pub start: Position,
	pub end: Position,
}

impl TextRange {
	pub fn new(start: Position, end: Position) -> Self {
		Self { start, end }
	}
}

/// What the engine needs from a live document.
///
/// Any host can supply one: an in-memory buffer for tests, or a real editor document.
pub trait TextDocument {
	/// Number of lines. A trailing line terminator yields a last, empty line.
	fn line_count(&self) -> usize;

	/// Content of line `line`, without its line terminator.
	fn line_at(&self, line: usize) -> Option<&str>;

	fn text(&self) -> &str;

	fn position_at(&self, offset: usize) -> Position;

	fn offset_at(&self, position: Position) -> usize;

	/// Full text, or the text covered by `range`.
	fn get_text(&self, range: Option<&TextRange>) -> String {
		match range {
			None => self.text().to_string(),
			Some(range) => {
				let text = self.text();
				let start = self.offset_at(range.start).min(text.len());
				let end = self.offset_at(range.end).clamp(start, text.len());
				text[start..end].to_string()
			}
		}
	}

	/// Line terminator used by the document (`"\r\n"` when any CRLF is present).
	fn eol(&self) -> &'static str {
		if self.text().contains("\r\n") { "\r\n" } else { "\n" }
	}
}

/// In-memory `TextDocument` over an owned string.
#[derive(Debug, Clone)]
pub struct MemDocument {
	text: String,
	line_starts: Vec<usize>,
}

impl MemDocument {
	pub fn new(text: impl Into<String>) -> Self {
		let text = text.into();
		let mut line_starts = vec![0];
		line_starts.extend(text.match_indices('\n').map(|(idx, _)| idx + 1));
		Self { text, line_starts }
	}

	pub fn into_text(self) -> String {
		self.text
	}

	/// Byte range of line `line` including its terminator.
	fn line_bounds(&self, line: usize) -> (usize, usize) {
		let start = self.line_starts[line];
		let end = self.line_starts.get(line + 1).copied().unwrap_or(self.text.len());
		(start, end)
	}
}

impl TextDocument for MemDocument {
	fn line_count(&self) -> usize {
		self.line_starts.len()
	}

	fn line_at(&self, line: usize) -> Option<&str> {
		if line >= self.line_starts.len() {
			return None;
		}
		let (start, end) = self.line_bounds(line);
		let content = &self.text[start..end];
		let content = content.strip_suffix('\n').unwrap_or(content);
		Some(content.strip_suffix('\r').unwrap_or(content))
	}

	fn text(&self) -> &str {
		&self.text
	}

	fn position_at(&self, offset: usize) -> Position {
		let offset = offset.min(self.text.len());
		let line = match self.line_starts.binary_search(&offset) {
			Ok(line) => line,
			Err(next) => next - 1,
		};
		Position::new(line, offset - self.line_starts[line])
	}

	fn offset_at(&self, position: Position) -> usize {
		if position.line >= self.line_starts.len() {
			return self.text.len();
		}
		let start = self.line_starts[position.line];
		let content_len = self.line_at(position.line).map(str::len).unwrap_or(0);
		start + position.column.min(content_len)
	}
}

// region:    --- Tests


// endregion: --- Tests
