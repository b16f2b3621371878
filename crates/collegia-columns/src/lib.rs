//! Declarative column schema and cell rendering for Collegia
//!
//! A grid screen describes each of its columns once, as a
//! [`ColumnConfig`] whose [`ColumnKind`] selects the cell renderer and
//! inline editor: text, number, boolean, date, select (with value
//! options and a color map), image, rich text, or row actions.
//! [`ColumnSchema::new`] validates the whole configuration up front, so
//! a malformed column is a construction-time error and can never crash
//! the grid at render time.
//!
//! Rendering is headless: [`render_cell`] resolves one column/value
//! pair into a [`CellView`] the presentation layer draws however it
//! likes, and [`editor_for`] yields the matching inline [`CellEditor`].

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod editor;
pub mod error;
pub mod render;
pub mod sanitize;
pub mod schema;
pub mod theme;

pub use editor::{
	CellEditor, SelectChangeHook, commit_date_input, commit_select_input, editor_for,
};
pub use error::{ColumnError, Result};
pub use render::{CellView, RowAction, RowCapabilities, parse_date_value, render_cell};
pub use sanitize::{detect_xss_patterns, escape_html, sanitize_richtext};
pub use schema::{ColumnConfig, ColumnKind, ColumnSchema, SelectOptions, ValueOption};
pub use theme::{ColorPair, Theme};
