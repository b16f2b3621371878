//! Column configuration and schema validation

use crate::editor::SelectChangeHook;
use crate::error::{ColumnError, Result};
use crate::theme::ColorPair;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// One choice in a select column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueOption {
	/// Label shown to the user
	pub label: String,
	/// Stored value
	pub value: String,
}

impl ValueOption {
	/// Creates a value option
	pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			label: label.into(),
			value: value.into(),
		}
	}
}

/// Configuration specific to select columns
///
/// `color_map` is keyed by the UPPERCASED option label; labels without
/// an entry render with the theme's muted pair. `on_change` fires in
/// addition to the grid's own value commit when the inline editor
/// selects a value, so external state can track the change immediately.
#[derive(Clone)]
pub struct SelectOptions {
	/// Closed set of choices
	pub value_options: Vec<ValueOption>,
	/// Uppercased label -> colors
	pub color_map: HashMap<String, ColorPair>,
	/// Side-effect invoked with the newly selected value
	pub on_change: Option<SelectChangeHook>,
}

impl SelectOptions {
	/// Creates select options with no colors and no change hook
	pub fn new(value_options: Vec<ValueOption>) -> Self {
		Self {
			value_options,
			color_map: HashMap::new(),
			on_change: None,
		}
	}

	/// Sets the label color map
	pub fn color_map(mut self, color_map: HashMap<String, ColorPair>) -> Self {
		self.color_map = color_map;
		self
	}

	/// Sets the selection change hook
	pub fn on_change(mut self, hook: SelectChangeHook) -> Self {
		self.on_change = Some(hook);
		self
	}

	/// The options for a boolean column rendered as a closed choice
	pub fn boolean() -> Self {
		Self::new(vec![
			ValueOption::new("Yes", "true"),
			ValueOption::new("No", "false"),
		])
	}
}

impl fmt::Debug for SelectOptions {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SelectOptions")
			.field("value_options", &self.value_options)
			.field("color_map", &self.color_map)
			.field("on_change", &self.on_change.as_ref().map(|_| "…"))
			.finish()
	}
}

/// The column type, carrying type-specific configuration
#[derive(Debug, Clone)]
pub enum ColumnKind {
	/// Plain text display
	Text,
	/// Numeric display
	Number,
	/// Boolean display (values normalized to `"true"`/`"false"`)
	Boolean,
	/// Calendar date; accepts ISO strings and bare year numbers
	Date,
	/// Closed-choice value resolved against options, with badge colors
	Select(SelectOptions),
	/// Thumbnail with a placeholder fallback
	Image,
	/// Sanitized HTML display; never editable inline
	RichText,
	/// Per-row edit/view/delete affordances
	Actions,
}

impl ColumnKind {
	/// The kind's name, for error messages
	pub fn name(&self) -> &'static str {
		match self {
			ColumnKind::Text => "text",
			ColumnKind::Number => "number",
			ColumnKind::Boolean => "boolean",
			ColumnKind::Date => "date",
			ColumnKind::Select(_) => "select",
			ColumnKind::Image => "image",
			ColumnKind::RichText => "richtext",
			ColumnKind::Actions => "actions",
		}
	}
}

/// Declarative description of one grid column
#[derive(Debug, Clone)]
pub struct ColumnConfig {
	/// Row field this column reads
	pub field: String,
	/// Header text
	pub header_name: String,
	/// Column type and type-specific configuration
	pub kind: ColumnKind,
	/// Whether the cell offers an inline editor
	pub editable: bool,
	/// Whether the column can drive server-side sorting
	pub sortable: bool,
	/// Whether the column can drive server-side filtering
	pub filterable: bool,
}

impl ColumnConfig {
	/// Creates a column; sortable and filterable by default, not editable
	pub fn new(
		field: impl Into<String>,
		header_name: impl Into<String>,
		kind: ColumnKind,
	) -> Self {
		Self {
			field: field.into(),
			header_name: header_name.into(),
			kind,
			editable: false,
			sortable: true,
			filterable: true,
		}
	}

	/// Sets whether the column is inline-editable
	pub fn editable(mut self, editable: bool) -> Self {
		self.editable = editable;
		self
	}

	/// Sets whether the column is sortable
	pub fn sortable(mut self, sortable: bool) -> Self {
		self.sortable = sortable;
		self
	}

	/// Sets whether the column is filterable
	pub fn filterable(mut self, filterable: bool) -> Self {
		self.filterable = filterable;
		self
	}
}

/// A validated set of columns for one entity's grid
///
/// Construction fails fast on malformed configuration: duplicate
/// fields, select columns without options, or inline editing on a kind
/// that cannot support it.
#[derive(Debug, Clone)]
pub struct ColumnSchema {
	columns: Vec<ColumnConfig>,
}

impl ColumnSchema {
	/// Validates and builds a schema
	pub fn new(columns: Vec<ColumnConfig>) -> Result<Self> {
		let mut seen = HashSet::new();
		for column in &columns {
			if !seen.insert(column.field.clone()) {
				return Err(ColumnError::DuplicateField(column.field.clone()));
			}
			match &column.kind {
				ColumnKind::Select(options) if options.value_options.is_empty() => {
					return Err(ColumnError::EmptyValueOptions(column.field.clone()));
				}
				ColumnKind::RichText | ColumnKind::Actions | ColumnKind::Image
					if column.editable =>
				{
					return Err(ColumnError::NotEditable {
						field: column.field.clone(),
						kind: column.kind.name(),
					});
				}
				_ => {}
			}
		}
		Ok(Self { columns })
	}

	/// All columns, in declaration order
	pub fn columns(&self) -> &[ColumnConfig] {
		&self.columns
	}

	/// Looks up a column by field name
	pub fn column(&self, field: &str) -> Option<&ColumnConfig> {
		self.columns.iter().find(|c| c.field == field)
	}

	/// Fields that declare `editable`
	pub fn editable_fields(&self) -> Vec<&str> {
		self.columns
			.iter()
			.filter(|c| c.editable)
			.map(|c| c.field.as_str())
			.collect()
	}
}
