//! Error types for the grid wire contract

use thiserror::Error;

/// Errors raised while constructing query parameters
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypesError {
	/// Page size must be strictly positive
	#[error("page size must be greater than zero")]
	ZeroPageSize,

	/// `page * page_size` does not fit in a u64 offset
	#[error("offset overflow: page {page} with page size {page_size}")]
	OffsetOverflow {
		/// Requested page (0-indexed)
		page: u64,
		/// Requested page size
		page_size: u64,
	},
}

/// Result type for wire-contract operations
pub type Result<T> = std::result::Result<T, TypesError>;
