//! The table data controller
//!
//! One controller is owned by each entity screen. It translates
//! grid-native state (pagination, sort, filters, search) into the REST
//! list contract, exposes the fetched page as [`TableRow`]s, and
//! mediates inline edits and deletes with server-truth reconciliation:
//! optimistic local patches with rollback, last-intent-wins sequencing
//! per row, latest-request-wins for list responses, and the
//! step-back-a-page policy when the sole row of a non-first page is
//! deleted.

use crate::error::{GridError, Result};
use crate::options::GridOptions;
use crate::row::{PatchTransform, RowTransform, SelectionHooks, TableRow};
use crate::transport::{DeleteMutation, DetailQuery, ListQuery, UpdateMutation};
use collegia_types::{ListQueryParams, Pagination, SortSpec};
use parking_lot::{Mutex, RwLock};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, warn};

/// Fetch lifecycle of the current page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchPhase {
	/// Nothing fetched yet
	Idle,
	/// A list query is in flight
	Loading,
	/// The current page is live
	Loaded,
	/// The last fetch failed; `retry` re-issues the same params
	Error(String),
}

/// Callback receiving user-facing notification messages
pub type NotifyHook = Arc<dyn Fn(&str) + Send + Sync>;

struct PendingEdit {
	field: String,
	previous: Option<Value>,
}

struct GridData {
	params: ListQueryParams,
	rows: Vec<TableRow>,
	count: u64,
	phase: FetchPhase,
}

struct Inner {
	list: Arc<dyn ListQuery>,
	detail: Option<Arc<dyn DetailQuery>>,
	update: Option<Arc<dyn UpdateMutation>>,
	delete: Option<Arc<dyn DeleteMutation>>,
	to_rows: RowTransform,
	to_patch: Option<PatchTransform>,
	hooks: SelectionHooks,
	notify: Option<NotifyHook>,
	state: RwLock<GridData>,
	/// Monotonic list-request generation; only the newest response lands
	generation: AtomicU64,
	/// Latest edit-intent sequence number per row
	intents: Mutex<HashMap<String, u64>>,
	intent_seq: AtomicU64,
	/// Per-row mutation locks; edits on the same row never interleave
	row_locks: Mutex<HashMap<String, Arc<tokio::sync::Mutex<()>>>>,
	/// Optimistic-edit overlay: row id -> value to restore on rollback
	pending: Mutex<HashMap<String, PendingEdit>>,
}

/// Builder for [`TableController`]
///
/// The list query and row transform are mandatory. Updates, deletes
/// and conflict checks are enabled per entity by supplying the
/// corresponding mutation; enabling updates without a patch transform
/// is a configuration error caught by [`build`](Self::build).
pub struct TableControllerBuilder {
	list: Arc<dyn ListQuery>,
	detail: Option<Arc<dyn DetailQuery>>,
	update: Option<Arc<dyn UpdateMutation>>,
	delete: Option<Arc<dyn DeleteMutation>>,
	to_rows: RowTransform,
	to_patch: Option<PatchTransform>,
	hooks: SelectionHooks,
	notify: Option<NotifyHook>,
	options: GridOptions,
}

impl TableControllerBuilder {
	/// Starts a builder from the two mandatory pieces
	pub fn new(list: Arc<dyn ListQuery>, to_rows: RowTransform) -> Self {
		Self {
			list,
			detail: None,
			update: None,
			delete: None,
			to_rows,
			to_patch: None,
			hooks: SelectionHooks::default(),
			notify: None,
			options: GridOptions::default(),
		}
	}

	/// Enables inline editing
	pub fn update_mutation(mut self, update: Arc<dyn UpdateMutation>) -> Self {
		self.update = Some(update);
		self
	}

	/// Supplies the row-to-patch transform required for updates
	pub fn patch_transform(mut self, to_patch: PatchTransform) -> Self {
		self.to_patch = Some(to_patch);
		self
	}

	/// Enables deleting
	pub fn delete_mutation(mut self, delete: Arc<dyn DeleteMutation>) -> Self {
		self.delete = Some(delete);
		self
	}

	/// Enables conflict checks against the live record
	pub fn detail_query(mut self, detail: Arc<dyn DetailQuery>) -> Self {
		self.detail = Some(detail);
		self
	}

	/// Wires row selection into external modal/selection state
	pub fn selection_hooks(mut self, hooks: SelectionHooks) -> Self {
		self.hooks = hooks;
		self
	}

	/// Receives user-facing notifications (rollbacks, flat errors)
	pub fn notify_hook(mut self, notify: NotifyHook) -> Self {
		self.notify = Some(notify);
		self
	}

	/// Seeds the initial query parameters
	pub fn options(mut self, options: GridOptions) -> Self {
		self.options = options;
		self
	}

	/// Validates the configuration and builds the controller
	pub fn build(self) -> Result<TableController> {
		if self.update.is_some() && self.to_patch.is_none() {
			return Err(GridError::MissingPatchTransform);
		}
		let params = self.options.initial_params()?;
		Ok(TableController {
			inner: Arc::new(Inner {
				list: self.list,
				detail: self.detail,
				update: self.update,
				delete: self.delete,
				to_rows: self.to_rows,
				to_patch: self.to_patch,
				hooks: self.hooks,
				notify: self.notify,
				state: RwLock::new(GridData {
					params,
					rows: Vec::new(),
					count: 0,
					phase: FetchPhase::Idle,
				}),
				generation: AtomicU64::new(0),
				intents: Mutex::new(HashMap::new()),
				intent_seq: AtomicU64::new(0),
				row_locks: Mutex::new(HashMap::new()),
				pending: Mutex::new(HashMap::new()),
			}),
		})
	}
}

/// Per-entity adapter between grid state and the REST list contract
///
/// Cheap to clone; clones share state. Dropping every clone abandons
/// whatever was in flight: a late list response only updates state no
/// view reads anymore, and a late mutation completion no-ops the same
/// way, so unmounting a screen never surfaces a dangling resolution.
#[derive(Clone)]
pub struct TableController {
	inner: Arc<Inner>,
}

impl std::fmt::Debug for TableController {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("TableController").finish_non_exhaustive()
	}
}

impl TableController {
	/// Current query parameters
	pub fn params(&self) -> ListQueryParams {
		self.inner.state.read().params.clone()
	}

	/// Rows of the current page
	pub fn rows(&self) -> Vec<TableRow> {
		self.inner.state.read().rows.clone()
	}

	/// Server total across all pages
	pub fn count(&self) -> u64 {
		self.inner.state.read().count
	}

	/// Current fetch phase
	pub fn phase(&self) -> FetchPhase {
		self.inner.state.read().phase.clone()
	}

	/// Whether an update mutation was supplied
	pub fn editing_enabled(&self) -> bool {
		self.inner.update.is_some()
	}

	/// Whether a delete mutation was supplied
	pub fn deleting_enabled(&self) -> bool {
		self.inner.delete.is_some()
	}

	/// Issues the list query for the current parameters
	///
	/// Latest request wins: if a newer query was issued while this one
	/// was in flight, this response is discarded so the grid never
	/// flickers back to superseded data.
	pub async fn load(&self) {
		let params = self.inner.state.read().params.clone();
		let generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;
		self.inner.state.write().phase = FetchPhase::Loading;
		debug!(query = %params.to_query_string(), generation, "issuing list query");

		let outcome = self.inner.list.fetch(&params).await;

		let mut state = self.inner.state.write();
		if self.inner.generation.load(Ordering::SeqCst) != generation {
			debug!(generation, "discarding stale list response");
			return;
		}
		match outcome {
			Ok(response) => {
				state.rows = (self.inner.to_rows)(&response.results);
				state.count = response.count;
				state.phase = FetchPhase::Loaded;
			}
			Err(err) => {
				warn!(error = %err, "list query failed");
				state.phase = FetchPhase::Error(err.to_string());
			}
		}
	}

	/// Re-issues the last query unchanged (error-state retry)
	pub async fn retry(&self) {
		self.load().await;
	}

	/// Goes to a page, keeping the page size
	pub async fn set_page(&self, page: u64) -> Result<()> {
		{
			let mut state = self.inner.state.write();
			state.params.pagination = state.params.pagination.with_page(page)?;
		}
		self.load().await;
		Ok(())
	}

	/// Changes the page size, resetting to the first page
	pub async fn set_page_size(&self, page_size: u64) -> Result<()> {
		{
			let mut state = self.inner.state.write();
			state.params.pagination = Pagination::new(0, page_size)?;
		}
		self.load().await;
		Ok(())
	}

	/// Changes the search text, resetting to the first page
	pub async fn set_search(&self, search: impl Into<String>) -> Result<()> {
		{
			let mut state = self.inner.state.write();
			state.params.search = search.into();
			state.params.pagination = state.params.pagination.with_page(0)?;
		}
		self.load().await;
		Ok(())
	}

	/// Changes the sort entry
	pub async fn set_sort(&self, sort: Option<SortSpec>) {
		self.inner.state.write().params.sort = sort;
		self.load().await;
	}

	/// Sets a filter value, resetting to the first page
	pub async fn set_filter(
		&self,
		field: impl Into<String>,
		value: impl Into<String>,
	) -> Result<()> {
		{
			let mut state = self.inner.state.write();
			state.params.set_filter(field, value);
			state.params.pagination = state.params.pagination.with_page(0)?;
		}
		self.load().await;
		Ok(())
	}

	/// Clears a filter, resetting to the first page
	pub async fn clear_filter(&self, field: &str) -> Result<()> {
		{
			let mut state = self.inner.state.write();
			state.params.clear_filter(field);
			state.params.pagination = state.params.pagination.with_page(0)?;
		}
		self.load().await;
		Ok(())
	}

	/// Applies an inline edit to one cell
	///
	/// The change is applied locally first (optimistic), then the merged
	/// row is run through the patch transform and sent to the update
	/// mutation. On success the optimistic row is kept; no refetch is
	/// needed. On failure the patch is reverted to the pre-edit value
	/// and the error returned.
	///
	/// Edits to the same row are sequenced: a second edit issued while
	/// the first is in flight waits, and if a newer intent arrives
	/// before a waiter runs, the superseded waiter skips its mutation
	/// entirely (last-intent-wins).
	pub async fn inline_edit(&self, row_id: &str, field: &str, value: Value) -> Result<()> {
		let update = self
			.inner
			.update
			.clone()
			.ok_or(GridError::EditingDisabled)?;
		let to_patch = self
			.inner
			.to_patch
			.clone()
			.ok_or(GridError::EditingDisabled)?;

		let seq = self.inner.intent_seq.fetch_add(1, Ordering::SeqCst) + 1;
		self.inner.intents.lock().insert(row_id.to_string(), seq);

		let row_lock = {
			let mut locks = self.inner.row_locks.lock();
			Arc::clone(locks.entry(row_id.to_string()).or_default())
		};
		let _guard = row_lock.lock().await;

		// A newer intent for this row arrived while this one waited
		if self.inner.intents.lock().get(row_id) != Some(&seq) {
			debug!(row_id, seq, "skipping superseded edit intent");
			return Ok(());
		}

		let (merged, previous) = {
			let mut state = self.inner.state.write();
			let row = state
				.rows
				.iter_mut()
				.find(|r| r.id == row_id)
				.ok_or_else(|| GridError::RowNotFound(row_id.to_string()))?;
			let previous = row.fields.get(field).cloned();
			row.fields.insert(field.to_string(), value);
			(row.clone(), previous)
		};
		self.inner.pending.lock().insert(
			row_id.to_string(),
			PendingEdit {
				field: field.to_string(),
				previous,
			},
		);

		let patch = (to_patch)(&merged);
		match update.update(row_id, &patch).await {
			Ok(response) => {
				// The server echoed success; the optimistic row is trusted
				self.inner.pending.lock().remove(row_id);
				debug!(row_id, message = %response.message, "inline edit committed");
				Ok(())
			}
			Err(err) => {
				self.rollback(row_id);
				warn!(row_id, error = %err, "inline edit rejected, rolled back");
				self.notify(&format!("Update failed: {err}"));
				Err(err.into())
			}
		}
	}

	/// Restores the pre-edit value recorded in the pending overlay
	fn rollback(&self, row_id: &str) {
		let Some(pending) = self.inner.pending.lock().remove(row_id) else {
			return;
		};
		let mut state = self.inner.state.write();
		if let Some(row) = state.rows.iter_mut().find(|r| r.id == row_id) {
			match pending.previous {
				Some(value) => {
					row.fields.insert(pending.field, value);
				}
				None => {
					row.fields.remove(&pending.field);
				}
			}
		}
	}

	/// Deletes a row
	///
	/// The caller must have obtained explicit user confirmation first.
	/// After a successful delete the page is refetched; if the deleted
	/// row was the sole row on a non-first page, the previous page is
	/// requested instead of leaving the grid on an empty page.
	pub async fn delete(&self, row_id: &str) -> Result<()> {
		let delete = self
			.inner
			.delete
			.clone()
			.ok_or(GridError::DeletingDisabled)?;
		let response = delete.delete(row_id).await.map_err(GridError::from)?;
		debug!(row_id, message = %response.message, "row deleted");
		{
			let mut state = self.inner.state.write();
			let was_sole_row = state.rows.len() == 1
				&& state.rows.first().map(|r| r.id == row_id).unwrap_or(false);
			let page = state.params.pagination.page();
			if was_sole_row && page > 0 {
				state.params.pagination = state.params.pagination.with_page(page - 1)?;
			}
		}
		self.load().await;
		Ok(())
	}

	/// Fetch-and-compare conflict check for status-sensitive writes
	///
	/// Re-fetches the record and compares `field` to the locally held
	/// value; a mismatch blocks the write with
	/// [`GridError::StaleRecord`] so the user can refresh instead of
	/// silently overwriting.
	pub async fn check_unchanged(&self, row_id: &str, field: &str, expected: &Value) -> Result<()> {
		let detail = self
			.inner
			.detail
			.clone()
			.ok_or(GridError::ConflictCheckUnavailable)?;
		let current = detail.fetch_one(row_id).await.map_err(GridError::from)?;
		if current.get(field) != Some(expected) {
			warn!(row_id, field, "stale record detected, blocking write");
			return Err(GridError::StaleRecord(row_id.to_string()));
		}
		Ok(())
	}

	/// Fires the `set_id` hook for an edit-row click
	pub fn notify_edit_click(&self, row_id: &str) {
		if let Some(hook) = &self.inner.hooks.set_id {
			hook(row_id);
		}
	}

	/// Fires the `set_view_id` hook for a view-row click
	pub fn notify_view_click(&self, row_id: &str) {
		if let Some(hook) = &self.inner.hooks.set_view_id {
			hook(row_id);
		}
	}

	/// Fires the `set_edit` hook (driven by the container's modal)
	pub fn set_edit_mode(&self, editing: bool) {
		if let Some(hook) = &self.inner.hooks.set_edit {
			hook(editing);
		}
	}

	fn notify(&self, message: &str) {
		if let Some(hook) = &self.inner.notify {
			hook(message);
		}
	}
}
