//! Integration tests for read-only previews.

type Result<T> = core::result::Result<T, Box<dyn std::error::Error>>; // For tests.

use assertables::assert_contains;
use editx::for_test::MemWorkspace;
use editx::{Edit, EditBatch, EditOp, EditOptions, Error, FsWorkspace, apply_edits, build_preview, preview_edits};

mod test_support;

#[test]
fn test_preview_modify_does_not_touch_file() -> Result<()> {
	// -- Setup & Fixtures
	let base_dir = test_support::new_out_dir_path("test_preview_modify_does_not_touch_file")?;
	test_support::write_file(&base_dir, "notes.txt", "line0\nline1\nline2\nline3\n")?;
	let ws = FsWorkspace::new(&base_dir)?;
	let edit = Edit::modify_lines("notes.txt", 1, 2, "X\nY");

	// -- Exec
	let preview = build_preview(&ws, &edit, &EditOptions::default())?;

	// -- Check
	assert_eq!(preview.before, "line0\nline1\nline2\nline3\n");
	assert_eq!(preview.after, "line0\nX\nY\nline3\n");
	assert_eq!(preview.label, "notes.txt (Proposed Changes)");
	assert!(preview.advisory.is_none());
	assert_eq!(test_support::read_file(&base_dir, "notes.txt")?, "line0\nline1\nline2\nline3\n");

	let diff = preview.unified_diff();
	assert_contains!(diff, "-line1");
	assert_contains!(diff, "+X");

	Ok(())
}

#[test]
fn test_preview_create_and_delete() -> Result<()> {
	// -- Setup & Fixtures
	let ws = MemWorkspace::new("/proj").with_file("old.txt", "bye\n");
	let create = Edit::create("src/new.rs", "fn main() {}\n");
	let delete = Edit::delete("old.txt");

	// -- Exec
	let created = build_preview(&ws, &create, &EditOptions::default())?;
	let deleted = build_preview(&ws, &delete, &EditOptions::default())?;

	// -- Check
	assert_eq!(created.op, EditOp::Create);
	assert_eq!(created.before, "");
	assert_eq!(created.after, "fn main() {}\n");
	assert_eq!(created.label, "new.rs (New File)");
	assert_eq!(deleted.before, "bye\n");
	assert_eq!(deleted.after, "");
	assert_eq!(deleted.label, "old.txt (Delete File)");

	Ok(())
}

#[test]
fn test_preview_delete_missing_not_found() -> Result<()> {
	// -- Setup & Fixtures
	let ws = MemWorkspace::new("/proj");

	// -- Exec
	let res = build_preview(&ws, &Edit::delete("ghost.txt"), &EditOptions::default());

	// -- Check
	assert!(matches!(res, Err(Error::NotFound { .. })), "got: {res:?}");

	Ok(())
}

#[test]
fn test_preview_stale_old_text_is_advisory() -> Result<()> {
	// -- Setup & Fixtures
	let ws = MemWorkspace::new("/proj").with_file("app.py", "a = 1\nb = 2\nc = 3\n");
	let edit = Edit::modify_lines("app.py", 1, 1, "b = 20").with_old_text("b = 3");

	// -- Exec
	let preview = build_preview(&ws, &edit, &EditOptions::default())?;

	// -- Check
	let advisory = preview.advisory.ok_or("should have an advisory")?;
	assert_eq!((advisory.start_line, advisory.end_line), (1, 1));
	assert_eq!(preview.after, "a = 1\nb = 20\nc = 3\n");

	Ok(())
}

#[test]
fn test_preview_edits_independent_per_edit() -> Result<()> {
	// -- Setup & Fixtures
	let ws = MemWorkspace::new("/proj").with_file("f.txt", "0\n1\n2\n");
	let batch = EditBatch::new(vec![
		Edit::modify_lines("f.txt", 0, 0, "zero"),
		Edit::modify_lines("missing.txt", 0, 0, "x"),
		Edit::modify_lines("f.txt", 2, 2, "two"),
	]);

	// -- Exec
	let previews = preview_edits(&ws, &batch, &EditOptions::default())?;

	// -- Check
	assert_eq!(previews.len(), 3);
	let first = previews[0].as_ref().map_err(|err| err.to_string())?;
	let third = previews[2].as_ref().map_err(|err| err.to_string())?;
	// not stacked: each preview starts from the current content
	assert_eq!(first.after, "zero\n1\n2\n");
	assert_eq!(third.after, "0\n1\ntwo\n");
	assert!(previews[1].is_err());

	let empty = preview_edits(&ws, &EditBatch::default(), &EditOptions::default());
	assert!(matches!(empty, Err(Error::InvalidInput(_))));

	Ok(())
}

#[test]
fn test_preview_anchor_only_edit() -> Result<()> {
	// -- Setup & Fixtures
	let ws = MemWorkspace::new("/proj").with_file("f.txt", "alpha\nbeta\ngamma");
	let edit = Edit::modify_text("f.txt", "gamma", "GAMMA");

	// -- Exec
	let preview = build_preview(&ws, &edit, &EditOptions::default())?;

	// -- Check
	assert_eq!(preview.after, "alpha\nbeta\nGAMMA");
	assert!(preview.advisory.is_none());

	Ok(())
}

#[test]
fn test_preview_indented_anchor_no_advisory() -> Result<()> {
	// -- Setup & Fixtures
	let mut ws = MemWorkspace::new("/proj").with_file("main.rs", "fn main() {\n    println!(\"hello\");\n}\n");
	let edit = Edit::modify_text("main.rs", "println!(\"hello\");", "    println!(\"hello, world\");");

	// -- Exec
	let preview = build_preview(&ws, &edit, &EditOptions::default())?;
	let report = apply_edits(&mut ws, &EditBatch::new(vec![edit]), &EditOptions::default())?;

	// -- Check
	assert!(preview.advisory.is_none(), "got: {:?}", preview.advisory);
	assert!(report.advisories.is_empty());
	assert_eq!(preview.after, "fn main() {\n    println!(\"hello, world\");\n}\n");
	assert_eq!(ws.content("main.rs"), Some(preview.after.as_str()));

	Ok(())
}

#[test]
fn test_preview_anchor_only_missing_anchor_has_advisory() -> Result<()> {
	// -- Setup & Fixtures
	let ws = MemWorkspace::new("/proj").with_file("f.txt", "alpha\nbeta\n");
	let edit = Edit::modify_text("f.txt", "gamma", "GAMMA");

	// -- Exec
	let preview = build_preview(&ws, &edit, &EditOptions::default())?;

	// -- Check
	let advisory = preview.advisory.ok_or("should have an advisory")?;
	assert_eq!((advisory.start_line, advisory.end_line), (0, 0));

	Ok(())
}
