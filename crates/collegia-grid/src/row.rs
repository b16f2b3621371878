//! Table rows and the raw-record transforms

use serde_json::{Map, Value};
use std::sync::Arc;

/// One row of the grid, as transformed for display
///
/// Fields used for select/boolean rendering are normalized to discrete
/// string values (booleans become the literal strings
/// `"true"`/`"false"`) by the entity's row transform. Rows are rebuilt
/// from scratch on every fetch and only patched transiently during an
/// inline edit, until the mutation resolves or rolls back.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
	/// Server record id
	pub id: String,
	/// Normalized field values
	pub fields: Map<String, Value>,
}

impl TableRow {
	/// Creates a row
	pub fn new(id: impl Into<String>, fields: Map<String, Value>) -> Self {
		Self {
			id: id.into(),
			fields,
		}
	}

	/// Reads one field
	pub fn field(&self, name: &str) -> Option<&Value> {
		self.fields.get(name)
	}
}

/// Maps one page of raw server records to table rows
///
/// Must be total: any record shape the list contract can produce maps
/// to a row without panicking.
pub type RowTransform = Arc<dyn Fn(&[Value]) -> Vec<TableRow> + Send + Sync>;

/// Maps a (locally merged) row back to an update patch
///
/// The patch carries only fields declared editable, with
/// boolean-as-string fields converted back to their original boolean
/// type. Required only when updates are enabled.
pub type PatchTransform = Arc<dyn Fn(&TableRow) -> Value + Send + Sync>;

/// Callback receiving a row id (`set_id` / `set_view_id` wiring)
pub type RowIdHook = Arc<dyn Fn(&str) + Send + Sync>;

/// Callback receiving the edit-mode flag (`set_edit` wiring)
pub type EditModeHook = Arc<dyn Fn(bool) + Send + Sync>;

/// Pure notification callbacks wiring row selection into external
/// modal/selection state
///
/// The controller fires exactly one id hook per user-initiated
/// selection event: `set_id` on an edit-row click, `set_view_id` on a
/// view-row click. `set_edit` is driven by the container's modal
/// lifecycle, not by clicks.
#[derive(Clone, Default)]
pub struct SelectionHooks {
	/// Receives the row id when an edit action is clicked
	pub set_id: Option<RowIdHook>,
	/// Receives the edit-mode flag when the editor opens or closes
	pub set_edit: Option<EditModeHook>,
	/// Receives the row id when a view action is clicked
	pub set_view_id: Option<RowIdHook>,
}

impl std::fmt::Debug for SelectionHooks {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("SelectionHooks")
			.field("set_id", &self.set_id.is_some())
			.field("set_edit", &self.set_edit.is_some())
			.field("set_view_id", &self.set_view_id.is_some())
			.finish()
	}
}
