//! List query parameters and their query-string encoding

use crate::error::{Result, TypesError};
use crate::limits::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use serde::{Deserialize, Serialize};

/// Sort direction for a single ordering entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
	/// Ascending order
	Asc,
	/// Descending order
	Desc,
}

/// A single sort entry: field name plus direction
///
/// The list contract honors at most one entry; the `ordering` query
/// parameter carries the field name, prefixed with `-` for descending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
	/// Field to sort by
	pub field: String,
	/// Sort direction
	pub direction: SortDirection,
}

impl SortSpec {
	/// Creates an ascending sort entry
	pub fn asc(field: impl Into<String>) -> Self {
		Self {
			field: field.into(),
			direction: SortDirection::Asc,
		}
	}

	/// Creates a descending sort entry
	pub fn desc(field: impl Into<String>) -> Self {
		Self {
			field: field.into(),
			direction: SortDirection::Desc,
		}
	}

	/// Renders the `ordering` parameter value (`field` or `-field`)
	pub fn ordering_param(&self) -> String {
		match self.direction {
			SortDirection::Asc => self.field.clone(),
			SortDirection::Desc => format!("-{}", self.field),
		}
	}
}

/// Validated pagination window
///
/// `page` is 0-indexed so that `offset = page * page_size` holds
/// literally. Construction guarantees `page_size > 0` (clamped to
/// [`MAX_PAGE_SIZE`]) and that the offset cannot overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
	page: u64,
	page_size: u64,
}

impl Pagination {
	/// Creates a pagination window
	///
	/// Fails on a zero page size or an offset that would overflow u64.
	/// Page sizes above [`MAX_PAGE_SIZE`] are clamped.
	pub fn new(page: u64, page_size: u64) -> Result<Self> {
		if page_size == 0 {
			return Err(TypesError::ZeroPageSize);
		}
		let page_size = page_size.min(MAX_PAGE_SIZE);
		page.checked_mul(page_size)
			.ok_or(TypesError::OffsetOverflow { page, page_size })?;
		Ok(Self { page, page_size })
	}

	/// Current page (0-indexed)
	pub fn page(&self) -> u64 {
		self.page
	}

	/// Records per page
	pub fn page_size(&self) -> u64 {
		self.page_size
	}

	/// Request offset: `page * page_size`
	pub fn offset(&self) -> u64 {
		// Checked at construction
		self.page * self.page_size
	}

	/// Same page size, different page
	pub fn with_page(&self, page: u64) -> Result<Self> {
		Self::new(page, self.page_size)
	}
}

impl Default for Pagination {
	fn default() -> Self {
		Self {
			page: 0,
			page_size: DEFAULT_PAGE_SIZE,
		}
	}
}

/// A single equality filter (`<field>=<value>` on the wire)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
	/// Field to filter on
	pub field: String,
	/// Value the field must equal
	pub value: String,
}

impl FilterSpec {
	/// Creates a filter entry
	pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			field: field.into(),
			value: value.into(),
		}
	}
}

/// Query parameters for the paginated list endpoint
///
/// Two values with equal content always render the same query string:
/// filters are sorted by field name before encoding, so the string can
/// serve as a cache/dedup key for the transport layer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListQueryParams {
	/// Free-text search (omitted from the query string when empty)
	pub search: String,
	/// Pagination window
	pub pagination: Pagination,
	/// Sort entry; at most one is honored
	pub sort: Option<SortSpec>,
	/// Equality filters
	pub filters: Vec<FilterSpec>,
}

impl ListQueryParams {
	/// Encodes the parameters as a query string
	///
	/// Shape: `offset=..&limit=..[&search=..][&ordering=[-]field][&field=value…]`
	pub fn to_query_string(&self) -> String {
		let mut parts = vec![
			format!("offset={}", self.pagination.offset()),
			format!("limit={}", self.pagination.page_size()),
		];
		if !self.search.is_empty() {
			parts.push(format!("search={}", urlencoding::encode(&self.search)));
		}
		if let Some(sort) = &self.sort {
			parts.push(format!(
				"ordering={}",
				urlencoding::encode(&sort.ordering_param())
			));
		}
		let mut filters: Vec<&FilterSpec> = self.filters.iter().collect();
		filters.sort_by(|a, b| a.field.cmp(&b.field));
		for filter in filters {
			parts.push(format!(
				"{}={}",
				urlencoding::encode(&filter.field),
				urlencoding::encode(&filter.value)
			));
		}
		parts.join("&")
	}

	/// Replaces the value of a filter, adding it if absent
	pub fn set_filter(&mut self, field: impl Into<String>, value: impl Into<String>) {
		let field = field.into();
		let value = value.into();
		match self.filters.iter_mut().find(|f| f.field == field) {
			Some(existing) => existing.value = value,
			None => self.filters.push(FilterSpec { field, value }),
		}
	}

	/// Removes a filter by field name
	pub fn clear_filter(&mut self, field: &str) {
		self.filters.retain(|f| f.field != field);
	}
}
