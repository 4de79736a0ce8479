//! Locates the region of a live document an edit targets.
//!
//! Content anchors (`old_text`) are tried first since line numbers captured earlier may be stale.
//! Nothing here fails: "not found" is `None` and the caller falls back to the declared lines.

use crate::text_norm::{NormalizedText, normalize};
use crate::{Edit, Position, TextDocument, TextRange};

/// Finds the first occurrence of `needle` in `doc`, comparing normalized text.
///
/// Returns the raw range of the match, or `None` for an empty (or all-whitespace) needle or no match.
pub fn find_range<D: TextDocument + ?Sized>(doc: &D, needle: &str) -> Option<TextRange> {
	let needle = normalize(needle);
	if needle.is_empty() {
		return None;
	}

	let full = NormalizedText::new(doc.text());

	// Retry without a single trailing newline (capture artifact).
	let candidates = [Some(needle.as_str()), needle.strip_suffix('\n')];

	for candidate in candidates.into_iter().flatten().filter(|c| !c.is_empty()) {
		if let Some(idx) = full.text.find(candidate) {
			let start = doc.position_at(full.raw_start(idx));
			let end = doc.position_at(full.raw_end(idx + candidate.len()));
			return Some(TextRange::new(start, end));
		}
	}

	None
}

/// How a resolved range was located.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeAnchor {
	OldText,
	LineRange,
}

/// A whole-line replacement span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSpan {
	pub start_line: usize,
	pub end_line: usize,
	pub range: TextRange,
	/// True when the span runs to the start of the next line, swallowing the line terminator.
	pub consumes_eol: bool,
}

impl LineSpan {
	/// Span covering the inclusive lines `[start_line, end_line]`.
	///
	/// Ends at column 0 of the following line, or at end-of-line when `end_line` is the last line.
	pub fn new<D: TextDocument + ?Sized>(doc: &D, start_line: usize, end_line: usize) -> Self {
		let start = Position::new(start_line, 0);
		let (end, consumes_eol) = if end_line + 1 < doc.line_count() {
			(Position::new(end_line + 1, 0), true)
		} else {
			let eol_col = doc.line_at(end_line).map(str::len).unwrap_or(0);
			(Position::new(end_line, eol_col), false)
		};

		Self {
			start_line,
			end_line,
			range: TextRange::new(start, end),
			consumes_eol,
		}
	}

	/// Text to put in place of this span.
	///
	/// Line breaks inside `new_text` are converted to the document `eol`.
	/// When the span swallows a line terminator, a non-empty `new_text` gets one back
	/// so the following line is not joined. Empty `new_text` removes the lines.
	pub fn replacement_text(&self, new_text: &str, eol: &str) -> String {
		let mut text = with_eol(new_text, eol);
		if self.consumes_eol && !text.is_empty() && !text.ends_with('\n') {
			text.push_str(eol);
		}
		text
	}
}

/// Region an edit resolves to in the current document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedRange {
	pub span: LineSpan,
	pub anchor: RangeAnchor,
}

impl ResolvedRange {
	pub fn lines(&self) -> (usize, usize) {
		(self.span.start_line, self.span.end_line)
	}
}

/// Resolves `edit` against `doc`: `old_text` anchor first, clamped declared lines second.
pub fn resolve_edit_range<D: TextDocument + ?Sized>(doc: &D, edit: &Edit) -> ResolvedRange {
	if let Some(found) = edit.anchor().and_then(|anchor| find_range(doc, anchor)) {
		return ResolvedRange {
			span: LineSpan::new(doc, found.start.line, found.end.line),
			anchor: RangeAnchor::OldText,
		};
	}

	let (start_line, end_line) = edit.clamped_lines(doc.line_count());
	ResolvedRange {
		span: LineSpan::new(doc, start_line, end_line),
		anchor: RangeAnchor::LineRange,
	}
}

// region:    --- Support

fn with_eol(text: &str, eol: &str) -> String {
	if !text.contains('\n') {
		return text.to_string();
	}
	text.replace("\r\n", "\n").replace('\n', eol)
}

// endregion: --- Support

// region:    --- Tests


// endregion: --- Tests
