//! Resource limits for grid list requests
//!
//! These limits keep a single list request from exhausting memory on
//! either side of the wire.

/// Maximum page size for list views
///
/// Requested page sizes above this are clamped, never rejected.
/// Default: 500 records per page
pub const MAX_PAGE_SIZE: u64 = 500;

/// Default page size when not specified
pub const DEFAULT_PAGE_SIZE: u64 = 25;

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn default_page_size_is_within_max() {
		assert!(DEFAULT_PAGE_SIZE <= MAX_PAGE_SIZE);
		assert!(DEFAULT_PAGE_SIZE > 0);
	}
}
