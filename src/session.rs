use crate::{
	ApplyReport, DiffContentStore, DiffKey, EditBatch, EditOptions, EditPreview, Error, Result, Workspace, apply_edits,
	preview_edits,
};
use tracing::info;

/// A preview whose before/after contents live in the session `DiffContentStore`.
#[derive(Debug, Clone)]
pub struct StoredPreview {
	pub preview: EditPreview,
	pub before_key: DiffKey,
	pub after_key: DiffKey,
}

/// Review lifecycle of the last previewed batch: preview, then accept or reject.
///
/// The pending batch and the diff contents are cleared after accept, reject, a direct apply,
/// or when a new batch is previewed.
#[derive(Debug, Default)]
pub struct EditSession {
	options: EditOptions,
	pending: Option<EditBatch>,
	store: DiffContentStore,
}

impl EditSession {
	pub fn new(options: EditOptions) -> Self {
		Self {
			options,
			pending: None,
			store: DiffContentStore::new(),
		}
	}

	pub fn options(&self) -> &EditOptions {
		&self.options
	}

	pub fn pending(&self) -> Option<&EditBatch> {
		self.pending.as_ref()
	}

	pub fn diff_store(&self) -> &DiffContentStore {
		&self.store
	}

	/// Previews `batch` and makes it the pending batch, replacing any previous one.
	pub fn preview<W: Workspace + ?Sized>(&mut self, ws: &W, batch: EditBatch) -> Result<Vec<Result<StoredPreview>>> {
		self.store.clear();
		self.pending = None;

		let previews = preview_edits(ws, &batch, &self.options)?;
		let stored = previews
			.into_iter()
			.map(|res| {
				res.map(|preview| {
					let (before_key, after_key) = self.store.put_preview(&preview);
					StoredPreview {
						preview,
						before_key,
						after_key,
					}
				})
			})
			.collect();

		info!(edits = batch.len(), "previewing edits");
		self.pending = Some(batch);

		Ok(stored)
	}

	/// Applies the pending batch.
	pub fn accept<W: Workspace + ?Sized>(&mut self, ws: &mut W) -> Result<ApplyReport> {
		let batch = self
			.pending
			.take()
			.ok_or_else(|| Error::invalid_input("No pending edits to accept"))?;
		self.store.clear();

		info!(edits = batch.len(), "accepting pending edits");
		apply_edits(ws, &batch, &self.options)
	}

	/// Drops the pending batch, returning it if there was one.
	pub fn reject(&mut self) -> Option<EditBatch> {
		self.store.clear();
		let rejected = self.pending.take();
		if let Some(batch) = &rejected {
			info!(edits = batch.len(), "rejected pending edits");
		}
		rejected
	}

	/// Applies `batch` directly, without preview. Any pending batch is dropped.
	pub fn apply<W: Workspace + ?Sized>(&mut self, ws: &mut W, batch: &EditBatch) -> Result<ApplyReport> {
		self.pending = None;
		self.store.clear();
		apply_edits(ws, batch, &self.options)
	}
}
