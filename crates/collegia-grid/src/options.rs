//! Initial grid options

use collegia_types::{
	DEFAULT_PAGE_SIZE, FilterSpec, ListQueryParams, Pagination, Result, SortSpec,
};
use serde::Deserialize;

/// Initial query state for a grid, typically deserialized from an
/// entity screen's configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GridOptions {
	/// Initial page size
	pub page_size: u64,
	/// Initial search text
	pub search: String,
	/// Initial sort entry
	pub sort: Option<SortSpec>,
	/// Initial filters
	pub filters: Vec<FilterSpec>,
}

impl Default for GridOptions {
	fn default() -> Self {
		Self {
			page_size: DEFAULT_PAGE_SIZE,
			search: String::new(),
			sort: None,
			filters: Vec::new(),
		}
	}
}

impl GridOptions {
	/// Builds the first-page query parameters
	pub fn initial_params(&self) -> Result<ListQueryParams> {
		Ok(ListQueryParams {
			search: self.search.clone(),
			pagination: Pagination::new(0, self.page_size)?,
			sort: self.sort.clone(),
			filters: self.filters.clone(),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_start_on_first_page() {
		let params = GridOptions::default().initial_params().unwrap();
		assert_eq!(params.pagination.page(), 0);
		assert_eq!(params.pagination.page_size(), DEFAULT_PAGE_SIZE);
	}

	#[test]
	fn deserializes_partial_config() {
		let options: GridOptions =
			serde_json::from_str(r#"{"page_size": 50, "search": "physics"}"#).unwrap();
		assert_eq!(options.page_size, 50);
		assert_eq!(options.search, "physics");
		assert!(options.sort.is_none());
	}

	#[test]
	fn zero_page_size_is_a_config_error() {
		let options = GridOptions {
			page_size: 0,
			..Default::default()
		};
		assert!(options.initial_params().is_err());
	}
}
