use crate::advisory::check_stale;
use crate::dedupe::dedupe;
use crate::path_resolve::resolve_edit_path;
use crate::range_resolver::{RangeAnchor, resolve_edit_range};
use crate::{
	ApplyReport, Edit, EditBatch, EditOp, EditOptions, Error, ModifiedFile, Replacement, Result, StaleAdvisory,
	TextDocument, Workspace,
};
use simple_fs::SPath;
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Applies `batch` to `ws`: all creates, then all modifies, then all deletes.
///
/// - Modifies are grouped per file, deduplicated, and applied as one batched change per file.
/// - Any create/modify failure aborts the batch. Files already written stay written.
/// - A delete of a missing file is logged and skipped.
pub fn apply_edits<W: Workspace + ?Sized>(ws: &mut W, batch: &EditBatch, options: &EditOptions) -> Result<ApplyReport> {
	if batch.is_empty() {
		return Err(Error::invalid_input("No edits to apply"));
	}

	let root = ws.root().cloned();
	let resolve = |edit: &Edit| resolve_edit_path(root.as_ref(), &edit.file_path, options);

	// -- Group modifies by resolved path (first-seen order)
	let mut modify_groups: Vec<(SPath, Vec<&Edit>)> = Vec::new();
	let mut group_idx_by_path: HashMap<String, usize> = HashMap::new();
	for edit in batch.of_op(EditOp::Modify) {
		let path = resolve(edit)?;
		match group_idx_by_path.get(path.as_str()) {
			Some(&idx) => modify_groups[idx].1.push(edit),
			None => {
				group_idx_by_path.insert(path.as_str().to_string(), modify_groups.len());
				modify_groups.push((path, vec![edit]));
			}
		}
	}

	let mut report = ApplyReport::default();

	// -- 1) Create
	for edit in batch.of_op(EditOp::Create) {
		let path = resolve(edit)?;
		if ws.exists(&path) {
			return Err(Error::already_exists(path.to_string()));
		}
		ws.create_file(&path, &edit.new_text)?;
		ws.save(&path)?;
		info!(path = %path, "created file");
		report.created.push(path);
	}

	// -- 2) Modify
	for (path, edits) in modify_groups {
		let modified = apply_file_edits(ws, &path, edits, &mut report.advisories)?;
		report.modified.push(modified);
	}

	// -- 3) Delete
	for edit in batch.of_op(EditOp::Delete) {
		let path = resolve(edit)?;
		if !ws.exists(&path) {
			warn!(path = %path, "delete skipped, file missing");
			report.skipped_deletes.push(path);
			continue;
		}
		ws.delete_file(&path, options.use_trash)?;
		info!(path = %path, trash = options.use_trash, "deleted file");
		report.deleted.push(path);
	}

	Ok(report)
}

// region:    --- Support

/// Stages and commits all modify edits of one file as a single batched change.
fn apply_file_edits<W: Workspace + ?Sized>(
	ws: &mut W,
	path: &SPath,
	edits: Vec<&Edit>,
	advisories: &mut Vec<StaleAdvisory>,
) -> Result<ModifiedFile> {
	if !ws.exists(path) {
		return Err(Error::not_found("File to modify", path.to_string()));
	}

	let doc = ws.open_document(path)?;
	let line_count = doc.line_count();
	let eol = doc.eol();

	let input_len = edits.len();
	let edits = dedupe(&doc, edits);

	let mut replacements = Vec::with_capacity(edits.len());
	for edit in &edits {
		let (start_line, _) = edit.declared_lines();
		if start_line >= line_count {
			return Err(Error::invalid_range(path.to_string(), start_line, line_count));
		}

		let resolved = resolve_edit_range(&doc, edit);
		match resolved.anchor {
			RangeAnchor::OldText => {
				debug!(path = %path, lines = ?resolved.lines(), "oldText anchor match");
			}
			RangeAnchor::LineRange => {
				debug!(path = %path, lines = ?resolved.lines(), "line-range apply");
				if let Some(advisory) = edit
					.anchor()
					.and_then(|anchor| check_stale(&doc, &edit.file_path, resolved.lines(), anchor))
				{
					warn!(path = %path, "{advisory}");
					advisories.push(advisory);
				}
			}
		}

		let text = resolved.span.replacement_text(&edit.new_text, eol);
		replacements.push(Replacement::new(resolved.span.range, text));
	}

	if !ws.apply_replacements(path, &replacements)? {
		return Err(Error::apply_rejected(path.to_string()));
	}
	ws.save(path)?;
	info!(path = %path, edits = edits.len(), "applied and saved edits");

	Ok(ModifiedFile {
		path: path.clone(),
		applied: edits.len(),
		collapsed: input_len - edits.len(),
	})
}

// endregion: --- Support
