use crate::range_resolver::find_range;
use crate::{Edit, TextDocument};
use std::borrow::Borrow;
use std::collections::HashMap;
use tracing::debug;

/// Inclusive `(start_line, end_line)` an edit targets, used as its dedup key.
pub type RangeKey = (usize, usize);

/// Range key of `edit`: the lines its `old_text` resolves to, or its clamped declared lines.
pub fn range_key<D: TextDocument + ?Sized>(doc: &D, edit: &Edit) -> RangeKey {
	match edit.anchor().and_then(|anchor| find_range(doc, anchor)) {
		Some(found) => (found.start.line, found.end.line),
		None => edit.clamped_lines(doc.line_count()),
	}
}

/// Collapses edits (all for the same file) that share a range key.
///
/// The last edit for a key wins. Output follows first-seen key order.
pub fn dedupe<D, E>(doc: &D, edits: Vec<E>) -> Vec<E>
where
	D: TextDocument + ?Sized,
	E: Borrow<Edit>,
{
	if edits.len() <= 1 {
		return edits;
	}

	let input_len = edits.len();
	let mut slots: Vec<E> = Vec::with_capacity(input_len);
	let mut slot_by_key: HashMap<RangeKey, usize> = HashMap::new();

	for edit in edits {
		let key = range_key(doc, edit.borrow());
		match slot_by_key.get(&key) {
			Some(&idx) => slots[idx] = edit,
			None => {
				slot_by_key.insert(key, slots.len());
				slots.push(edit);
			}
		}
	}

	if slots.len() < input_len {
		debug!(from = input_len, to = slots.len(), "deduplicated edits for file");
	}

	slots
}

// region:    --- Tests

#[cfg(test)]
mod tests {
	type Result<T> = core::result::Result<T, Box<dyn std::error::Error>>; // For tests.

	use super::*;
	use crate::MemDocument;

	fn fixture_doc() -> MemDocument {
		MemDocument::new("l0\nl1\nl2\nl3\nl4\nl5\nl6\nl7\n")
	}

	#[test]
	fn test_dedupe_collapses_same_range_keeps_last() -> Result<()> {
		// -- Setup & Fixtures
		let doc = fixture_doc();
		let edits = vec![
			Edit::modify_lines("f.txt", 2, 4, "first"),
			Edit::modify_lines("f.txt", 2, 4, "second"),
		];

		// -- Exec
		let out = dedupe(&doc, edits);

		// -- Check
		assert_eq!(out.len(), 1);
		assert_eq!(out[0].new_text, "second");

		Ok(())
	}

	#[test]
	fn test_dedupe_preserves_distinct_ranges_in_order() -> Result<()> {
		// -- Setup & Fixtures
		let doc = fixture_doc();
		let edits = vec![
			Edit::modify_lines("f.txt", 0, 1, "a"),
			Edit::modify_lines("f.txt", 5, 6, "b"),
		];

		// -- Exec
		let out = dedupe(&doc, edits);

		// -- Check
		assert_eq!(out.len(), 2);
		assert_eq!(out[0].new_text, "a");
		assert_eq!(out[1].new_text, "b");

		Ok(())
	}

	#[test]
	fn test_dedupe_anchor_and_lines_share_key() -> Result<()> {
		// -- Setup & Fixtures
		let doc = fixture_doc();
		// stale line numbers but an anchor resolving to lines 2..=4
		let anchored = Edit::modify_lines("f.txt", 0, 0, "anchored").with_old_text("l2\nl3\nl4");
		let by_lines = Edit::modify_lines("f.txt", 2, 4, "by_lines");
		let other = Edit::modify_lines("f.txt", 6, 6, "other");
		let edits = vec![&anchored, &other, &by_lines];

		// -- Exec
		let out = dedupe(&doc, edits);

		// -- Check
		assert_eq!(out.len(), 2);
		assert_eq!(out[0].new_text, "by_lines");
		assert_eq!(out[1].new_text, "other");

		Ok(())
	}

	#[test]
	fn test_dedupe_clamped_key() -> Result<()> {
		// -- Setup & Fixtures
		let doc = MemDocument::new("a\nb");
		let edits = vec![
			Edit::modify_lines("f.txt", 1, 50, "x"),
			Edit::modify_lines("f.txt", 9, 1, "y"),
		];

		// -- Exec
		let out = dedupe(&doc, edits);

		// -- Check
		assert_eq!(out.len(), 1);
		assert_eq!(out[0].new_text, "y");

		Ok(())
	}
}

// endregion: --- Tests
