
use chrono::NaiveDate;
use collegia_columns::{
	CellView, ColumnConfig, ColumnKind, ColumnSchema, RowAction, RowCapabilities, Theme,
	parse_date_value, render_cell,
};
use fixtures::{notice_schema, status_column, theme};
use rstest::*;
use serde_json::{Value, json};

fn caps_all() -> RowCapabilities {
	RowCapabilities {
		can_edit: true,
		can_view: true,
		can_delete: true,
	}
}

#[rstest]
fn date_column_accepts_bare_year(theme: Theme) {
	let column = ColumnConfig::new("founded", "Founded", ColumnKind::Date);
	let view = render_cell(&column, Some(&json!(2023)), &theme, &caps_all());
	assert_eq!(
		view,
		CellView::Date(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap())
	);
}

#[rstest]
fn date_column_accepts_rfc3339_timestamps(theme: Theme) {
	let column = ColumnConfig::new("founded", "Founded", ColumnKind::Date);
	let view = render_cell(
		&column,
		Some(&json!("2023-06-15T00:00:00Z")),
		&theme,
		&caps_all(),
	);
	assert_eq!(
		view,
		CellView::Date(NaiveDate::from_ymd_opt(2023, 6, 15).unwrap())
	);
}

#[rstest]
#[case(None)]
#[case(Some(json!(null)))]
#[case(Some(json!("not a date")))]
#[case(Some(json!(true)))]
fn invalid_date_renders_empty(theme: Theme, #[case] value: Option<Value>) {
	let column = ColumnConfig::new("founded", "Founded", ColumnKind::Date);
	let view = render_cell(&column, value.as_ref(), &theme, &caps_all());
	assert_eq!(view, CellView::Empty);
}

#[rstest]
fn parse_date_value_never_throws_on_junk() {
	assert!(parse_date_value(Some(&json!({"nested": true}))).is_none());
	assert!(parse_date_value(Some(&json!(f64::MAX))).is_none());
	assert!(parse_date_value(None).is_none());
}

#[rstest]
fn select_resolves_label_and_color(theme: Theme, status_column: ColumnConfig) {
	let view = render_cell(&status_column, Some(&json!("published")), &theme, &caps_all());
	match view {
		CellView::Badge { label, colors } => {
			assert_eq!(label, "Published");
			assert_eq!(colors.background, "#2e7d32");
		}
		other => panic!("expected a badge, got {other:?}"),
	}
}

#[rstest]
fn select_without_color_entry_uses_theme_muted(theme: Theme, status_column: ColumnConfig) {
	// "Archived" is a valid option but has no color_map entry
	let view = render_cell(&status_column, Some(&json!("archived")), &theme, &caps_all());
	match view {
		CellView::Badge { label, colors } => {
			assert_eq!(label, "Archived");
			assert_eq!(colors, theme.muted);
		}
		other => panic!("expected a badge, got {other:?}"),
	}
}

#[rstest]
fn select_with_unknown_value_shows_raw_value(theme: Theme, status_column: ColumnConfig) {
	let view = render_cell(&status_column, Some(&json!("legacy")), &theme, &caps_all());
	match view {
		CellView::Badge { label, colors } => {
			assert_eq!(label, "legacy");
			assert_eq!(colors, theme.muted);
		}
		other => panic!("expected a badge, got {other:?}"),
	}
}

#[rstest]
fn richtext_is_sanitized_before_rendering(theme: Theme) {
	let column = ColumnConfig::new("body", "Body", ColumnKind::RichText);
	let view = render_cell(
		&column,
		Some(&json!("<script>alert(1)</script><p>Welcome</p>")),
		&theme,
		&caps_all(),
	);
	match view {
		CellView::Html(html) => {
			assert!(!html.contains('<'));
			assert!(html.contains("&lt;p&gt;Welcome"));
		}
		other => panic!("expected html, got {other:?}"),
	}
}

#[rstest]
fn image_falls_back_to_placeholder(theme: Theme) {
	let column = ColumnConfig::new("photo", "Photo", ColumnKind::Image);
	assert_eq!(
		render_cell(&column, Some(&json!("")), &theme, &caps_all()),
		CellView::Thumbnail(None)
	);
	assert_eq!(
		render_cell(&column, None, &theme, &caps_all()),
		CellView::Thumbnail(None)
	);
	assert_eq!(
		render_cell(&column, Some(&json!("/media/staff/7.jpg")), &theme, &caps_all()),
		CellView::Thumbnail(Some("/media/staff/7.jpg".to_string()))
	);
}

#[rstest]
fn actions_respect_row_capabilities(theme: Theme) {
	let column = ColumnConfig::new("actions", "Actions", ColumnKind::Actions);
	let caps = RowCapabilities {
		can_edit: false,
		can_view: true,
		can_delete: true,
	};
	assert_eq!(
		render_cell(&column, None, &theme, &caps),
		CellView::Actions(vec![RowAction::View, RowAction::Delete])
	);
	assert_eq!(
		render_cell(&column, None, &theme, &RowCapabilities::default()),
		CellView::Actions(Vec::new())
	);
}

#[rstest]
fn boolean_values_render_as_literal_strings(theme: Theme) {
	let column = ColumnConfig::new("is_active", "Active", ColumnKind::Boolean);
	assert_eq!(
		render_cell(&column, Some(&json!(true)), &theme, &caps_all()),
		CellView::Text("true".to_string())
	);
	assert_eq!(
		render_cell(&column, Some(&json!("false")), &theme, &caps_all()),
		CellView::Text("false".to_string())
	);
}

#[rstest]
fn schema_lookup_finds_editable_fields(notice_schema: ColumnSchema) {
	assert!(notice_schema.column("status").is_some());
	assert!(notice_schema.column("missing").is_none());
	assert_eq!(
		notice_schema.editable_fields(),
		vec!["title", "published_on", "status", "is_active"]
	);
}
