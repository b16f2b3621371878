//! Common test fixtures for collegia-grid tests
//!
//! Mock transports implement the query/mutation seams with scripted
//! responses; a response can carry a oneshot gate so a test can hold a
//! request in flight and control completion order.

use async_trait::async_trait;
use collegia_grid::{
	DeleteMutation, DetailQuery, ListQuery, PatchTransform, RowTransform, TableRow,
	TransportError, UpdateMutation,
};
use collegia_types::{ListQueryParams, ListResponse, MutationResponse};
use parking_lot::Mutex;
use serde_json::{Map, Value, json};
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::oneshot;

/// One scripted list response, optionally gated
pub struct ScriptedResponse {
	pub gate: Option<oneshot::Receiver<()>>,
	pub result: Result<ListResponse<Value>, TransportError>,
}

impl ScriptedResponse {
	pub fn ok(count: u64, results: Vec<Value>) -> Self {
		Self {
			gate: None,
			result: Ok(ListResponse {
				count,
				next: None,
				previous: None,
				results,
			}),
		}
	}

	pub fn err(message: &str) -> Self {
		Self {
			gate: None,
			result: Err(TransportError::Request(message.to_string())),
		}
	}

	/// Holds the response until the returned sender fires
	pub fn gated(mut self) -> (Self, oneshot::Sender<()>) {
		let (tx, rx) = oneshot::channel();
		self.gate = Some(rx);
		(self, tx)
	}
}

/// Scripted list query recording every issued query string
#[derive(Default)]
pub struct MockListQuery {
	pub calls: Mutex<Vec<String>>,
	pub responses: Mutex<VecDeque<ScriptedResponse>>,
}

impl MockListQuery {
	pub fn new() -> Arc<Self> {
		Arc::new(Self::default())
	}

	pub fn push(&self, response: ScriptedResponse) {
		self.responses.lock().push_back(response);
	}

	pub fn call_count(&self) -> usize {
		self.calls.lock().len()
	}

	pub fn last_call(&self) -> Option<String> {
		self.calls.lock().last().cloned()
	}
}

#[async_trait]
impl ListQuery for MockListQuery {
	async fn fetch(
		&self,
		params: &ListQueryParams,
	) -> Result<ListResponse<Value>, TransportError> {
		self.calls.lock().push(params.to_query_string());
		let scripted = self
			.responses
			.lock()
			.pop_front()
			.expect("unexpected list fetch");
		if let Some(gate) = scripted.gate {
			let _ = gate.await;
		}
		scripted.result
	}
}

/// Scripted update mutation recording `(id, patch)` pairs
#[derive(Default)]
pub struct MockUpdate {
	pub calls: Mutex<Vec<(String, Value)>>,
	pub responses: Mutex<VecDeque<(Option<oneshot::Receiver<()>>, Result<(), Value>)>>,
}

impl MockUpdate {
	pub fn new() -> Arc<Self> {
		Arc::new(Self::default())
	}

	pub fn push_ok(&self) {
		self.responses.lock().push_back((None, Ok(())));
	}

	pub fn push_ok_gated(&self) -> oneshot::Sender<()> {
		let (tx, rx) = oneshot::channel();
		self.responses.lock().push_back((Some(rx), Ok(())));
		tx
	}

	pub fn push_rejected(&self, payload: Value) {
		self.responses.lock().push_back((None, Err(payload)));
	}

	pub fn call_count(&self) -> usize {
		self.calls.lock().len()
	}
}

#[async_trait]
impl UpdateMutation for MockUpdate {
	async fn update(&self, id: &str, patch: &Value) -> Result<MutationResponse, TransportError> {
		self.calls.lock().push((id.to_string(), patch.clone()));
		let (gate, result) = self
			.responses
			.lock()
			.pop_front()
			.unwrap_or((None, Ok(())));
		if let Some(gate) = gate {
			let _ = gate.await;
		}
		match result {
			Ok(()) => Ok(MutationResponse {
				message: "Record updated".to_string(),
			}),
			Err(payload) => Err(TransportError::Rejected(payload)),
		}
	}
}

/// Scripted delete mutation recording deleted ids
#[derive(Default)]
pub struct MockDelete {
	pub calls: Mutex<Vec<String>>,
}

impl MockDelete {
	pub fn new() -> Arc<Self> {
		Arc::new(Self::default())
	}

	pub fn call_count(&self) -> usize {
		self.calls.lock().len()
	}
}

#[async_trait]
impl DeleteMutation for MockDelete {
	async fn delete(&self, id: &str) -> Result<MutationResponse, TransportError> {
		self.calls.lock().push(id.to_string());
		Ok(MutationResponse {
			message: "Record deleted".to_string(),
		})
	}
}

/// Detail query serving a fixed record
pub struct MockDetail {
	pub record: Value,
}

impl MockDetail {
	pub fn new(record: Value) -> Arc<Self> {
		Arc::new(Self { record })
	}
}

#[async_trait]
impl DetailQuery for MockDetail {
	async fn fetch_one(&self, _id: &str) -> Result<Value, TransportError> {
		Ok(self.record.clone())
	}
}

/// A raw notice record as the server would return it
pub fn raw_notice(id: &str, title: &str, is_active: bool) -> Value {
	json!({
		"id": id,
		"title": title,
		"is_active": is_active,
		"status": "published",
		"created_at": "2024-03-10T09:00:00Z",
	})
}

/// Row transform for notices: booleans become `"true"`/`"false"`
pub fn notice_row_transform() -> RowTransform {
	Arc::new(|raw: &[Value]| {
		raw.iter()
			.map(|record| {
				let id = record
					.get("id")
					.and_then(Value::as_str)
					.unwrap_or_default()
					.to_string();
				let mut fields = Map::new();
				if let Some(object) = record.as_object() {
					for (key, value) in object {
						let normalized = match value {
							Value::Bool(flag) => Value::String(flag.to_string()),
							other => other.clone(),
						};
						fields.insert(key.clone(), normalized);
					}
				}
				TableRow::new(id, fields)
			})
			.collect()
	})
}

/// Patch transform for notices: only editable fields, booleans restored
pub fn notice_patch_transform() -> PatchTransform {
	Arc::new(|row: &TableRow| {
		let mut patch = Map::new();
		if let Some(Value::String(title)) = row.field("title") {
			patch.insert("title".to_string(), Value::String(title.clone()));
		}
		if let Some(Value::String(status)) = row.field("status") {
			patch.insert("status".to_string(), Value::String(status.clone()));
		}
		if let Some(Value::String(flag)) = row.field("is_active") {
			patch.insert("is_active".to_string(), Value::Bool(flag == "true"));
		}
		Value::Object(patch)
	})
}
