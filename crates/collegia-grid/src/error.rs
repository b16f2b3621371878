//! Error types for the grid controller and container

use collegia_types::{FieldError, TypesError};
use thiserror::Error;

/// Errors surfaced by the table controller
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
	/// No update mutation was supplied at construction
	#[error("inline editing is not enabled for this table")]
	EditingDisabled,

	/// No delete mutation was supplied at construction
	#[error("deleting is not enabled for this table")]
	DeletingDisabled,

	/// The row is not on the current page
	#[error("row '{0}' is not present on the current page")]
	RowNotFound(String),

	/// Invalid pagination parameters
	#[error(transparent)]
	Params(#[from] TypesError),

	/// The transport failed outright
	#[error("request failed: {0}")]
	Transport(String),

	/// The server rejected the mutation with field errors
	#[error("the server rejected the change")]
	Rejected {
		/// Flattened `(field-path, message)` pairs
		field_errors: Vec<FieldError>,
	},

	/// The record changed on the server since it was loaded
	#[error("record '{0}' changed on the server; refresh before saving")]
	StaleRecord(String),

	/// No detail query was supplied, so conflicts cannot be checked
	#[error("a detail query is required for conflict checks")]
	ConflictCheckUnavailable,

	/// Updates were enabled without a patch transform
	#[error("an update transform is required when updates are enabled")]
	MissingPatchTransform,
}

/// Result type for grid operations
pub type Result<T> = std::result::Result<T, GridError>;
