//! # Collegia
//!
//! Headless grid orchestration for admin-style data tables over a REST
//! list/mutation contract.
//!
//! Collegia splits one entity screen's grid into three layers, each a
//! member crate re-exported here:
//!
//! - [`types`]: the wire-facing vocabulary — validated pagination,
//!   sort and filter specs with a deterministic query-string encoding,
//!   list/detail/mutation response envelopes, and field-error
//!   flattening
//! - [`columns`]: declarative column schemas with fail-fast validation,
//!   headless cell rendering and cell editors, and HTML sanitization
//!   for rich-text content
//! - [`grid`]: the stateful half — a [`TableController`] binding grid
//!   state to injected transport seams with optimistic edits, rollback
//!   and ordering guarantees, and a [`GridStateContainer`] running the
//!   screen-level modal and affordance state machine
//!
//! The crate is presentation-agnostic: it owns state and sequencing
//! while rendering stays behind injected factories and hooks.
//!
//! ## Quick start
//!
//! ```no_run
//! use collegia::{Capabilities, GridStateContainer, ModalFactories, TableControllerBuilder};
//! # use std::sync::Arc;
//! # use collegia::ListQuery;
//! # fn transport() -> Arc<dyn ListQuery> { unimplemented!() }
//! # fn to_rows() -> collegia::grid::RowTransform { unimplemented!() }
//!
//! # async fn run() -> Result<(), collegia::GridError> {
//! let controller = TableControllerBuilder::new(transport(), to_rows()).build()?;
//! let screen = GridStateContainer::new(
//! 	controller,
//! 	Capabilities { can_create: true, can_edit: true, can_delete: false },
//! 	ModalFactories::default(),
//! );
//! screen.controller().load().await;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub use collegia_columns as columns;
pub use collegia_grid as grid;
pub use collegia_types as types;

pub use collegia_columns::{
	CellEditor, CellView, ColumnConfig, ColumnKind, ColumnSchema, RowAction, RowCapabilities,
	SelectOptions, Theme, ValueOption, render_cell,
};
pub use collegia_grid::{
	Capabilities, ConfirmDelete, DeleteMutation, DetailQuery, FetchPhase, GridError, GridOptions,
	GridState, GridStateContainer, ListQuery, Modal, ModalFactories, SelectionHooks,
	TableController, TableControllerBuilder, TableRow, UpdateMutation,
};
pub use collegia_types::{
	FieldError, FilterSpec, ListQueryParams, ListResponse, MutationResponse, Pagination, SortSpec,
};
