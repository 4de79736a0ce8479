//! Text normalization used only for comparing AI-captured snippets with live documents.
//!
//! Normalized text is never written back to disk. Production content always comes from the raw text.

/// Canonical form for comparison:
/// - CRLF (and any stray trailing `\r`) folded to LF,
/// - trailing spaces/tabs removed from every line,
/// - trailing whitespace and newlines removed from the whole string.
///
/// Idempotent: `normalize(&normalize(s)) == normalize(s)`.
pub fn normalize(text: &str) -> String {
	NormalizedText::new(text).text
}

/// A normalized text along with, for each normalized byte, the raw byte offset it came from.
///
/// Used to translate a match found in normalized space back to the raw document.
#[derive(Debug, Clone)]
pub struct NormalizedText {
	pub text: String,
	raw_offsets: Vec<usize>,
	raw_len: usize,
}

impl NormalizedText {
	pub fn new(raw: &str) -> Self {
		let mut text = String::with_capacity(raw.len());
		let mut raw_offsets = Vec::with_capacity(raw.len());

		let mut line_start = 0;
		let mut lines = raw.split('\n').peekable();

		while let Some(line) = lines.next() {
			let kept = line.trim_end_matches(is_line_trailing_ws);
			text.push_str(kept);
			raw_offsets.extend(line_start..line_start + kept.len());

			if lines.peek().is_some() {
				// The LF of a CRLF pair maps to the position of the CR (the start of the line break).
				text.push('\n');
				raw_offsets.push(line_start + line.trim_end_matches('\r').len());
			}
			line_start += line.len() + 1;
		}

		let trimmed_len = text.trim_end().len();
		text.truncate(trimmed_len);
		raw_offsets.truncate(trimmed_len);

		Self {
			text,
			raw_offsets,
			raw_len: raw.len(),
		}
	}

	/// Maps a normalized byte offset to the raw byte offset of the same character.
	/// An offset at (or past) the end maps to the end of the raw text.
	pub fn raw_start(&self, normalized_offset: usize) -> usize {
		self.raw_offsets.get(normalized_offset).copied().unwrap_or(self.raw_len)
	}

	/// Maps an exclusive normalized end offset to the exclusive raw end offset.
	pub fn raw_end(&self, normalized_end: usize) -> usize {
		if normalized_end == 0 {
			return self.raw_start(0);
		}
		match self.raw_offsets.get(normalized_end - 1) {
			Some(last) => last + 1,
			None => self.raw_len,
		}
	}
}

// region:    --- Support

fn is_line_trailing_ws(c: char) -> bool {
	c == ' ' || c == '\t' || c == '\r'
}

// endregion: --- Support

// region:    --- Tests


// endregion: --- Tests
