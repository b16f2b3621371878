//! Flattening of nested mutation-error payloads
//!
//! Rejected mutations carry a nested JSON body mapping field names to
//! messages, possibly through array-indexed sub-objects for multi-row
//! nested editors:
//!
//! ```json
//! {"isActive": ["Cannot deactivate a record with dependents"],
//!  "members": [{"email": "Invalid email"}]}
//! ```
//!
//! [`flatten_field_errors`] turns such a payload into a flat list of
//! `(field-path, message)` pairs so each message can be routed to its
//! form field. Payloads with no recognizable field structure collapse
//! to a single entry with an empty path, which callers surface as a
//! generic notification.

use serde_json::Value;

/// One field-level error extracted from a mutation-rejection payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
	/// Dotted field path, with `[i]` segments for array indices
	/// (e.g. `members[0].email`); empty for flat/unrecognized errors
	pub path: String,
	/// Error message for that field
	pub message: String,
}

impl FieldError {
	/// A generic error with no field path
	pub fn generic(message: impl Into<String>) -> Self {
		Self {
			path: String::new(),
			message: message.into(),
		}
	}
}

/// Flattens a nested error payload into `(field-path, message)` pairs
///
/// Total over any JSON shape; an unrecognized payload yields a single
/// generic entry rather than an empty list.
pub fn flatten_field_errors(payload: &Value) -> Vec<FieldError> {
	let mut out = Vec::new();
	collect(payload, "", &mut out);
	if out.is_empty() {
		out.push(FieldError::generic(match payload {
			Value::Null => "The request was rejected".to_string(),
			other => other.to_string(),
		}));
	}
	out
}

fn collect(value: &Value, path: &str, out: &mut Vec<FieldError>) {
	match value {
		Value::String(message) => out.push(FieldError {
			path: path.to_string(),
			message: message.clone(),
		}),
		Value::Array(items) => {
			for (index, item) in items.iter().enumerate() {
				match item {
					// ["msg a", "msg b"] attaches every message to the field itself
					Value::String(message) => out.push(FieldError {
						path: path.to_string(),
						message: message.clone(),
					}),
					// [{"email": "..."}] descends with an indexed path segment
					Value::Object(_) => collect(item, &format!("{path}[{index}]"), out),
					_ => {}
				}
			}
		}
		Value::Object(map) => {
			for (key, item) in map {
				let child = if path.is_empty() {
					key.clone()
				} else {
					format!("{path}.{key}")
				};
				collect(item, &child, out);
			}
		}
		_ => {}
	}
}
