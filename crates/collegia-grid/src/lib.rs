//! Table data controller and grid state container for Collegia
//!
//! This crate is the stateful half of the grid core. A
//! [`TableController`] binds one entity's grid state (pagination,
//! sorting, filtering, search) to an injected REST list query and
//! optional update/delete mutations, translating request and response
//! shapes in both directions and reconciling optimistic edits with
//! server truth. A [`GridStateContainer`] wraps the controller with the
//! screen-level state machine: fetch phase, open modal, capability-gated
//! affordances, and delete confirmation.
//!
//! Ordering guarantees:
//!
//! - list responses land latest-request-wins; a stale response for
//!   superseded params is discarded, never rendered
//! - inline edits on one row are sequenced last-intent-wins and never
//!   interleave two mutations for the same row
//! - mutations on different rows are independent

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod confirm;
pub mod container;
pub mod controller;
pub mod error;
pub mod options;
pub mod row;
pub mod transport;

pub use confirm::ConfirmDelete;
pub use container::{
	Affordances, Capabilities, CreateFormFactory, DetailViewFactory, EditFormFactory, GridState,
	GridStateContainer, Modal, ModalFactories, OnClose,
};
pub use controller::{FetchPhase, NotifyHook, TableController, TableControllerBuilder};
pub use error::{GridError, Result};
pub use options::GridOptions;
pub use row::{
	EditModeHook, PatchTransform, RowIdHook, RowTransform, SelectionHooks, TableRow,
};
pub use transport::{DeleteMutation, DetailQuery, ListQuery, TransportError, UpdateMutation};
