//! Response envelopes for the REST list and mutation endpoints

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Paginated list response
///
/// `count` is the server's total across all pages; `results` holds at
/// most one page of records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
	/// Total number of records matching the query
	pub count: u64,
	/// URL of the next page, if any
	pub next: Option<String>,
	/// URL of the previous page, if any
	pub previous: Option<String>,
	/// Records on this page
	pub results: Vec<T>,
}

impl<T> ListResponse<T> {
	/// An empty response with a zero count
	pub fn empty() -> Self {
		Self {
			count: 0,
			next: None,
			previous: None,
			results: Vec::new(),
		}
	}
}

/// Response for a single-record detail endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailResponse {
	/// Record data
	pub data: Value,
}

/// Response for update/delete mutations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MutationResponse {
	/// Human-readable outcome
	pub message: String,
}
