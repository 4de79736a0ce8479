use crate::advisory::check_stale;
use crate::path_resolve::resolve_edit_path;
use crate::range_resolver::{LineSpan, RangeAnchor, resolve_edit_range};
use crate::replacement::splice;
use crate::{
	Edit, EditBatch, EditOp, EditOptions, Error, Replacement, Result, StaleAdvisory, TextDocument, Workspace,
};
use simple_fs::SPath;
use tracing::{debug, warn};

/// Before/after pair for reviewing one edit. Computing it never writes anything.
#[derive(Debug, Clone)]
pub struct EditPreview {
	pub op: EditOp,
	pub path: SPath,
	pub label: String,
	pub before: String,
	pub after: String,
	pub advisory: Option<StaleAdvisory>,
}

impl EditPreview {
	/// Unified diff of `before` → `after`.
	pub fn unified_diff(&self) -> String {
		diffy::create_patch(&self.before, &self.after).to_string()
	}
}

/// Builds the preview of a single edit from the current on-disk (or staged) content.
///
/// Previews are independent: several edits to the same file are not stacked.
pub fn build_preview<W: Workspace + ?Sized>(ws: &W, edit: &Edit, options: &EditOptions) -> Result<EditPreview> {
	let path = resolve_edit_path(ws.root(), &edit.file_path, options)?;
	let name = path.name().to_string();

	let preview = match edit.op {
		EditOp::Create => EditPreview {
			op: edit.op,
			label: format!("{name} (New File)"),
			before: String::new(),
			after: edit.new_text.clone(),
			advisory: None,
			path,
		},

		EditOp::Delete => {
			if !ws.exists(&path) {
				return Err(Error::not_found("File to delete", path.to_string()));
			}
			let doc = ws.open_document(&path)?;
			EditPreview {
				op: edit.op,
				label: format!("{name} (Delete File)"),
				before: doc.get_text(None),
				after: String::new(),
				advisory: None,
				path,
			}
		}

		EditOp::Modify => {
			if !ws.exists(&path) {
				return Err(Error::not_found("File", path.to_string()));
			}
			let doc = ws.open_document(&path)?;

			// Declared lines drive the preview. Anchor-only edits use the anchor.
			// A resolved anchor already matches the document, so only line-addressed spans are checked.
			let ((start_line, end_line), anchored) = match edit.start_line {
				Some(_) => (edit.clamped_lines(doc.line_count()), false),
				None => {
					let resolved = resolve_edit_range(&doc, edit);
					(resolved.lines(), resolved.anchor == RangeAnchor::OldText)
				}
			};

			let advisory = edit
				.anchor()
				.filter(|_| !anchored)
				.and_then(|anchor| check_stale(&doc, &edit.file_path, (start_line, end_line), anchor));
			if let Some(advisory) = &advisory {
				warn!(path = %path, "{advisory}");
			}

			let span = LineSpan::new(&doc, start_line, end_line);
			let replacement = Replacement::new(span.range, span.replacement_text(&edit.new_text, doc.eol()));
			let after = splice(&doc, &[replacement])
				.ok_or_else(|| Error::from(format!("Could not build preview for '{path}'")))?;

			EditPreview {
				op: edit.op,
				label: format!("{name} (Proposed Changes)"),
				before: doc.get_text(None),
				after,
				advisory,
				path,
			}
		}
	};

	debug!(op = preview.op.as_str(), path = %preview.path, "preview built");

	Ok(preview)
}

/// Previews every edit of `batch`. A failing edit does not stop the others.
pub fn preview_edits<W: Workspace + ?Sized>(
	ws: &W,
	batch: &EditBatch,
	options: &EditOptions,
) -> Result<Vec<Result<EditPreview>>> {
	if batch.is_empty() {
		return Err(Error::invalid_input("No edits to preview"));
	}

	let previews = batch
		.iter()
		.map(|edit| {
			let res = build_preview(ws, edit, options);
			if let Err(err) = &res {
				warn!(file_path = %edit.file_path, "failed to preview: {err}");
			}
			res
		})
		.collect();

	Ok(previews)
}
