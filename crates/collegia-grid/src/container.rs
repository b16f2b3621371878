//! The grid state container
//!
//! Owns one entity screen's UI state: the fetch phase (driven by the
//! controller) and which modal, if any, is open. Create/edit/view
//! modals are rendered by externally supplied factory functions; the
//! container only drives their open/close contract and gates every
//! affordance on the capabilities computed by the access-control
//! layer.

use crate::confirm::ConfirmDelete;
use crate::controller::{FetchPhase, TableController};
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::warn;

/// Capability flags for one entity screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
	/// User may create records
	pub can_create: bool,
	/// User may edit records
	pub can_edit: bool,
	/// User may delete records
	pub can_delete: bool,
}

/// Which modal is open, independent of the fetch phase
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
	/// The create form is open
	Creating,
	/// The edit form is open for a row
	Editing(String),
	/// The detail view is open for a row
	Viewing(String),
}

/// Combined view of the container's state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridState {
	/// Nothing fetched yet
	Idle,
	/// A fetch is in flight and no modal is open
	Loading,
	/// The page is live
	Loaded,
	/// The last fetch failed
	Error(String),
	/// The create form is open
	Creating,
	/// The edit form is open for a row
	Editing(String),
	/// The detail view is open for a row
	Viewing(String),
}

/// Close handle passed to modal factories; calling it returns the
/// container to `Loaded`
pub type OnClose = Arc<dyn Fn() + Send + Sync>;

/// Factory rendering the create form
pub type CreateFormFactory = Arc<dyn Fn(OnClose) + Send + Sync>;

/// Factory rendering the edit form, keyed by the current row id
pub type EditFormFactory = Arc<dyn Fn(&str, OnClose) + Send + Sync>;

/// Factory rendering the detail view, keyed by the viewed row id
pub type DetailViewFactory = Arc<dyn Fn(&str, OnClose) + Send + Sync>;

/// Externally supplied modal factories; all optional
#[derive(Clone, Default)]
pub struct ModalFactories {
	/// Renders the create form (absence disables "add new")
	pub create_form: Option<CreateFormFactory>,
	/// Renders the edit form
	pub edit_form: Option<EditFormFactory>,
	/// Renders the detail view
	pub detail_view: Option<DetailViewFactory>,
}

/// Which affordances the screen should show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Affordances {
	/// Show the "add new" button
	pub show_add: bool,
	/// Show per-row edit actions
	pub show_edit: bool,
	/// Show per-row delete actions
	pub show_delete: bool,
}

/// Stateful shell composing the controller, modal lifecycle, and
/// capability-gated affordances for one entity's grid
pub struct GridStateContainer {
	controller: TableController,
	capabilities: Capabilities,
	factories: ModalFactories,
	modal: Mutex<Option<Modal>>,
	confirm: Arc<ConfirmDelete>,
}

impl GridStateContainer {
	/// Creates a container around a controller
	pub fn new(
		controller: TableController,
		capabilities: Capabilities,
		factories: ModalFactories,
	) -> Arc<Self> {
		Arc::new(Self {
			controller,
			capabilities,
			factories,
			modal: Mutex::new(None),
			confirm: ConfirmDelete::new(),
		})
	}

	/// The wrapped controller
	pub fn controller(&self) -> &TableController {
		&self.controller
	}

	/// Capability flags supplied at construction
	pub fn capabilities(&self) -> Capabilities {
		self.capabilities
	}

	/// The delete-confirmation modal
	pub fn confirm_modal(&self) -> &Arc<ConfirmDelete> {
		&self.confirm
	}

	/// Combined state: an open modal takes precedence for display,
	/// while the fetch phase keeps advancing underneath it
	pub fn state(&self) -> GridState {
		if let Some(modal) = self.modal.lock().clone() {
			return match modal {
				Modal::Creating => GridState::Creating,
				Modal::Editing(id) => GridState::Editing(id),
				Modal::Viewing(id) => GridState::Viewing(id),
			};
		}
		match self.controller.phase() {
			FetchPhase::Idle => GridState::Idle,
			FetchPhase::Loading => GridState::Loading,
			FetchPhase::Loaded => GridState::Loaded,
			FetchPhase::Error(message) => GridState::Error(message),
		}
	}

	/// The fetch phase alone, unaffected by any open modal
	pub fn fetch_phase(&self) -> FetchPhase {
		self.controller.phase()
	}

	/// Which modal is open, if any
	pub fn modal(&self) -> Option<Modal> {
		self.modal.lock().clone()
	}

	/// Affordances for the current capabilities and configuration
	pub fn affordances(&self) -> Affordances {
		Affordances {
			show_add: self.capabilities.can_create && self.factories.create_form.is_some(),
			show_edit: self.capabilities.can_edit
				&& (self.factories.edit_form.is_some() || self.controller.editing_enabled()),
			show_delete: self.capabilities.can_delete && self.controller.deleting_enabled(),
		}
	}

	/// Opens the create form; no-op without the capability or factory
	pub fn open_create(self: &Arc<Self>) -> bool {
		if !self.capabilities.can_create {
			return false;
		}
		let Some(factory) = self.factories.create_form.clone() else {
			return false;
		};
		*self.modal.lock() = Some(Modal::Creating);
		factory(self.close_handle());
		true
	}

	/// Opens the edit form for a row; fires `set_id` exactly once
	pub fn open_editor(self: &Arc<Self>, row_id: &str) -> bool {
		if !self.capabilities.can_edit {
			return false;
		}
		let Some(factory) = self.factories.edit_form.clone() else {
			return false;
		};
		self.controller.notify_edit_click(row_id);
		*self.modal.lock() = Some(Modal::Editing(row_id.to_string()));
		self.controller.set_edit_mode(true);
		factory(row_id, self.close_handle());
		true
	}

	/// Opens the detail view for a row; fires `set_view_id` exactly once
	pub fn open_viewer(self: &Arc<Self>, row_id: &str) -> bool {
		let Some(factory) = self.factories.detail_view.clone() else {
			return false;
		};
		self.controller.notify_view_click(row_id);
		*self.modal.lock() = Some(Modal::Viewing(row_id.to_string()));
		factory(row_id, self.close_handle());
		true
	}

	/// Closes whatever modal is open, returning the grid to `Loaded`
	pub fn close_modal(&self) {
		let closed = self.modal.lock().take();
		if matches!(closed, Some(Modal::Editing(_))) {
			self.controller.set_edit_mode(false);
		}
	}

	fn close_handle(self: &Arc<Self>) -> OnClose {
		let container = Arc::clone(self);
		Arc::new(move || container.close_modal())
	}

	/// Shows the delete confirmation for a row
	///
	/// On confirmation the delete mutation runs as a detached task;
	/// its failure is logged and surfaced through the controller's
	/// notify hook, never panicked.
	pub fn request_delete(self: &Arc<Self>, row_id: &str, display_name: Option<String>) -> bool {
		if !self.capabilities.can_delete || !self.controller.deleting_enabled() {
			return false;
		}
		let controller = self.controller.clone();
		let id = row_id.to_string();
		let display = display_name.unwrap_or_else(|| format!("ID: {id}"));
		self.confirm.show(
			"Delete record?",
			format!("Are you sure you want to delete \"{display}\"? This action cannot be undone."),
			move || {
				let controller = controller.clone();
				let id = id.clone();
				tokio::spawn(async move {
					if let Err(err) = controller.delete(&id).await {
						warn!(row_id = %id, error = %err, "delete failed");
					}
				});
			},
		);
		true
	}
}
