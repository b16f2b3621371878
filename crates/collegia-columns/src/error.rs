//! Error types for column schema construction

use thiserror::Error;

/// Configuration errors caught when a schema is built
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColumnError {
	/// A select column was declared without any value options
	#[error("select column '{0}' has no value options")]
	EmptyValueOptions(String),

	/// Two columns share the same field name
	#[error("duplicate column field '{0}'")]
	DuplicateField(String),

	/// The column kind does not support inline editing
	#[error("column '{field}' of kind {kind} cannot be editable")]
	NotEditable {
		/// Offending column field
		field: String,
		/// Column kind name
		kind: &'static str,
	},
}

/// Result type for schema operations
pub type Result<T> = std::result::Result<T, ColumnError>;
