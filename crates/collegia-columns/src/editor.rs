//! Inline cell editors

use crate::render::parse_date_value;
use crate::schema::{ColumnConfig, ColumnKind, SelectOptions, ValueOption};
use serde_json::Value;
use std::sync::Arc;

/// Side-effect fired when a select editor commits a value
pub type SelectChangeHook = Arc<dyn Fn(&str) + Send + Sync>;

/// The inline editor for one editable column
#[derive(Debug, Clone)]
pub enum CellEditor {
	/// Free text input
	Text,
	/// Numeric input
	Number,
	/// Native date control; commits normalize to `YYYY-MM-DD`
	Date,
	/// Closed-choice control constrained to the column's options
	Select {
		/// Choices offered by the control
		value_options: Vec<ValueOption>,
	},
}

/// Resolves the inline editor for a column
///
/// `None` when the column is not editable or its kind has no inline
/// editor. Boolean columns edit through a closed yes/no choice, since
/// their values are normalized to the literal strings
/// `"true"`/`"false"`.
pub fn editor_for(config: &ColumnConfig) -> Option<CellEditor> {
	if !config.editable {
		return None;
	}
	match &config.kind {
		ColumnKind::Text => Some(CellEditor::Text),
		ColumnKind::Number => Some(CellEditor::Number),
		ColumnKind::Date => Some(CellEditor::Date),
		ColumnKind::Select(options) => Some(CellEditor::Select {
			value_options: options.value_options.clone(),
		}),
		ColumnKind::Boolean => Some(CellEditor::Select {
			value_options: SelectOptions::boolean().value_options,
		}),
		ColumnKind::Image | ColumnKind::RichText | ColumnKind::Actions => None,
	}
}

/// Normalizes a date editor's raw input to an ISO calendar date
///
/// Returns `Some("YYYY-MM-DD")` for anything [`parse_date_value`]
/// accepts, `None` otherwise.
pub fn commit_date_input(input: &str) -> Option<String> {
	let value = Value::String(input.to_string());
	parse_date_value(Some(&value)).map(|date| date.format("%Y-%m-%d").to_string())
}

/// Commits a select editor's choice
///
/// The choice must be one of the column's option values (closed
/// choice); on success the column's change hook fires before the value
/// is returned for the grid's own commit.
pub fn commit_select_input(options: &SelectOptions, chosen: &str) -> Option<String> {
	if !options
		.value_options
		.iter()
		.any(|option| option.value == chosen)
	{
		return None;
	}
	if let Some(hook) = &options.on_change {
		hook(chosen);
	}
	Some(chosen.to_string())
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::sync::atomic::{AtomicUsize, Ordering};

	#[test]
	fn date_commits_normalize_to_iso() {
		assert_eq!(
			commit_date_input("2023-06-15T00:00:00Z").as_deref(),
			Some("2023-06-15")
		);
		assert_eq!(commit_date_input("2023").as_deref(), Some("2023-01-01"));
		assert_eq!(commit_date_input("not a date"), None);
	}

	#[test]
	fn select_commit_is_closed_choice() {
		let options = SelectOptions::new(vec![
			ValueOption::new("Draft", "draft"),
			ValueOption::new("Published", "published"),
		]);
		assert_eq!(
			commit_select_input(&options, "draft").as_deref(),
			Some("draft")
		);
		assert_eq!(commit_select_input(&options, "archived"), None);
	}

	#[test]
	fn select_commit_fires_change_hook() {
		let calls = Arc::new(AtomicUsize::new(0));
		let seen = Arc::clone(&calls);
		let options = SelectOptions::new(vec![ValueOption::new("Yes", "true")])
			.on_change(Arc::new(move |_| {
				seen.fetch_add(1, Ordering::SeqCst);
			}));
		commit_select_input(&options, "true");
		assert_eq!(calls.load(Ordering::SeqCst), 1);
	}

	#[test]
	fn non_editable_column_has_no_editor() {
		let config = ColumnConfig::new("title", "Title", ColumnKind::Text);
		assert!(editor_for(&config).is_none());
	}
}
