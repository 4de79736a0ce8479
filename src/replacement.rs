use crate::{TextDocument, TextRange};

/// One staged text replacement in a per-file batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
	pub range: TextRange,
	pub text: String,
}

impl Replacement {
	pub fn new(range: TextRange, text: impl Into<String>) -> Self {
		Self {
			range,
			text: text.into(),
		}
	}
}

/// Applies all `replacements` to `doc` at once, against the original offsets.
///
/// Returns `None` when two replacements overlap (the batch cannot be applied atomically).
pub fn splice<D: TextDocument + ?Sized>(doc: &D, replacements: &[Replacement]) -> Option<String> {
	let text = doc.text();

	let mut spans: Vec<(usize, usize, &str)> = replacements
		.iter()
		.map(|r| {
			let start = doc.offset_at(r.range.start);
			let end = doc.offset_at(r.range.end).max(start);
			(start, end, r.text.as_str())
		})
		.collect();
	spans.sort_by_key(|(start, end, _)| (*start, *end));

	let mut out = String::with_capacity(text.len());
	let mut cursor = 0;
	for (start, end, new_text) in spans {
		if start < cursor {
			return None;
		}
		out.push_str(&text[cursor..start]);
		out.push_str(new_text);
		cursor = end;
	}
	out.push_str(&text[cursor..]);

	Some(out)
}

// region:    --- Tests

#[cfg(test)]
mod tests {
	type Result<T> = core::result::Result<T, Box<dyn std::error::Error>>; // For tests.

	use super::*;
	use crate::{LineSpan, MemDocument};

	#[test]
	fn test_replacement_splice_non_overlapping() -> Result<()> {
		// -- Setup & Fixtures
		let doc = MemDocument::new("l0\nl1\nl2\nl3\n");
		let second = LineSpan::new(&doc, 3, 3);
		let first = LineSpan::new(&doc, 0, 0);
		let replacements = [
			Replacement::new(second.range, second.replacement_text("B", "\n")),
			Replacement::new(first.range, first.replacement_text("A", "\n")),
		];

		// -- Exec
		let out = splice(&doc, &replacements).ok_or("should splice")?;

		// -- Check
		assert_eq!(out, "A\nl1\nl2\nB\n");

		Ok(())
	}

	#[test]
	fn test_replacement_splice_overlap_refused() -> Result<()> {
		// -- Setup & Fixtures
		let doc = MemDocument::new("l0\nl1\nl2\nl3\n");
		let replacements = [
			Replacement::new(LineSpan::new(&doc, 0, 2).range, "A\n"),
			Replacement::new(LineSpan::new(&doc, 1, 3).range, "B\n"),
		];

		// -- Exec & Check
		assert!(splice(&doc, &replacements).is_none());

		Ok(())
	}
}

// endregion: --- Tests
