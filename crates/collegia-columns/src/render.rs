//! Cell rendering: one dispatch from column kind to a headless view

use crate::sanitize::sanitize_richtext;
use crate::schema::{ColumnConfig, ColumnKind, SelectOptions};
use crate::theme::{ColorPair, Theme};
use chrono::{DateTime, NaiveDate};
use serde_json::Value;

/// Per-row capability flags gating the actions column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowCapabilities {
	/// Row may be edited
	pub can_edit: bool,
	/// Row may be opened in a detail view
	pub can_view: bool,
	/// Row may be deleted
	pub can_delete: bool,
}

/// One affordance in the actions column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
	/// Open the inline/form editor
	Edit,
	/// Open the detail view
	View,
	/// Request deletion (confirmation is the caller's job)
	Delete,
}

/// A rendered cell, ready for the presentation layer to draw
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellView {
	/// Nothing to show
	Empty,
	/// Plain text
	Text(String),
	/// Calendar date
	Date(NaiveDate),
	/// Colored label (select columns)
	Badge {
		/// Resolved label
		label: String,
		/// Badge colors
		colors: ColorPair,
	},
	/// Image thumbnail; `None` means render the placeholder
	Thumbnail(Option<String>),
	/// Sanitized HTML, safe to embed as-is
	Html(String),
	/// Row action affordances, already capability-filtered
	Actions(Vec<RowAction>),
}

/// Parses a date cell value
///
/// Accepts an RFC 3339 timestamp, a `YYYY-MM-DD` date, or a bare year
/// (number or numeric string) interpreted as January 1 of that year.
/// Anything else yields `None`; never panics.
pub fn parse_date_value(value: Option<&Value>) -> Option<NaiveDate> {
	match value? {
		Value::Number(n) => {
			let year = i32::try_from(n.as_i64()?).ok()?;
			NaiveDate::from_ymd_opt(year, 1, 1)
		}
		Value::String(s) => {
			let s = s.trim();
			if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
				return Some(ts.date_naive());
			}
			if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
				return Some(date);
			}
			let year: i32 = s.parse().ok()?;
			NaiveDate::from_ymd_opt(year, 1, 1)
		}
		_ => None,
	}
}

fn display_value(value: &Value) -> String {
	match value {
		Value::String(s) => s.clone(),
		Value::Bool(b) => b.to_string(),
		Value::Number(n) => n.to_string(),
		Value::Null => String::new(),
		other => other.to_string(),
	}
}

fn resolve_select(options: &SelectOptions, raw: &str, theme: &Theme) -> (String, ColorPair) {
	let label = options
		.value_options
		.iter()
		.find(|option| option.value == raw)
		.map(|option| option.label.clone())
		.unwrap_or_else(|| raw.to_string());
	let colors = options
		.color_map
		.get(&label.to_uppercase())
		.cloned()
		.unwrap_or_else(|| theme.muted.clone());
	(label, colors)
}

/// Renders one cell
///
/// Total over any value shape: missing or malformed values render as
/// [`CellView::Empty`] (or a placeholder thumbnail), never a panic.
pub fn render_cell(
	config: &ColumnConfig,
	value: Option<&Value>,
	theme: &Theme,
	capabilities: &RowCapabilities,
) -> CellView {
	match &config.kind {
		ColumnKind::Text | ColumnKind::Number => match value {
			None | Some(Value::Null) => CellView::Empty,
			Some(v) => CellView::Text(display_value(v)),
		},
		ColumnKind::Boolean => match value {
			None | Some(Value::Null) => CellView::Empty,
			Some(Value::Bool(b)) => CellView::Text(b.to_string()),
			Some(v) => CellView::Text(display_value(v)),
		},
		ColumnKind::Date => match parse_date_value(value) {
			Some(date) => CellView::Date(date),
			None => CellView::Empty,
		},
		ColumnKind::Select(options) => match value {
			None | Some(Value::Null) => CellView::Empty,
			Some(v) => {
				let raw = display_value(v);
				let (label, colors) = resolve_select(options, &raw, theme);
				CellView::Badge { label, colors }
			}
		},
		ColumnKind::Image => {
			let url = value.and_then(Value::as_str).map(str::trim);
			match url {
				Some(u) if !u.is_empty() => CellView::Thumbnail(Some(u.to_string())),
				_ => CellView::Thumbnail(None),
			}
		}
		ColumnKind::RichText => match value.and_then(Value::as_str) {
			Some(markup) => CellView::Html(sanitize_richtext(markup)),
			None => CellView::Empty,
		},
		ColumnKind::Actions => {
			let mut actions = Vec::new();
			if capabilities.can_edit {
				actions.push(RowAction::Edit);
			}
			if capabilities.can_view {
				actions.push(RowAction::View);
			}
			if capabilities.can_delete {
				actions.push(RowAction::Delete);
			}
			CellView::Actions(actions)
		}
	}
}
