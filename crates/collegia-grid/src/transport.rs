//! Transport seams: the injected REST layer
//!
//! The core never issues HTTP itself. Each entity screen supplies
//! implementations of these traits backed by whatever query layer the
//! application uses; the query layer owns caching and request dedup,
//! keyed by the deterministic query string of [`ListQueryParams`].

use crate::error::GridError;
use async_trait::async_trait;
use collegia_types::{ListQueryParams, ListResponse, MutationResponse, flatten_field_errors};
use serde_json::Value;
use thiserror::Error;

/// Errors produced by the transport layer
#[derive(Debug, Error, Clone)]
pub enum TransportError {
	/// Network or server failure; no structured body
	#[error("request failed: {0}")]
	Request(String),

	/// The server rejected the request with a structured error body
	#[error("request rejected")]
	Rejected(Value),
}

impl From<TransportError> for GridError {
	fn from(err: TransportError) -> Self {
		match err {
			TransportError::Request(message) => GridError::Transport(message),
			TransportError::Rejected(payload) => GridError::Rejected {
				field_errors: flatten_field_errors(&payload),
			},
		}
	}
}

/// Paginated list query for one resource
#[async_trait]
pub trait ListQuery: Send + Sync {
	/// Fetches one page of raw records
	async fn fetch(&self, params: &ListQueryParams)
	-> Result<ListResponse<Value>, TransportError>;
}

/// Single-record fetch, used by the conflict check
#[async_trait]
pub trait DetailQuery: Send + Sync {
	/// Fetches the current server state of one record
	async fn fetch_one(&self, id: &str) -> Result<Value, TransportError>;
}

/// `PATCH <resource>/<id>` with a body of changed fields
#[async_trait]
pub trait UpdateMutation: Send + Sync {
	/// Applies a partial update
	async fn update(&self, id: &str, patch: &Value) -> Result<MutationResponse, TransportError>;
}

/// `DELETE <resource>/<id>`
#[async_trait]
pub trait DeleteMutation: Send + Sync {
	/// Deletes one record
	async fn delete(&self, id: &str) -> Result<MutationResponse, TransportError>;
}
