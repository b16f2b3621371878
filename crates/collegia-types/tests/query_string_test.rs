use collegia_types::{
	FilterSpec, ListQueryParams, MAX_PAGE_SIZE, Pagination, SortSpec, flatten_field_errors,
};
use proptest::prelude::*;
use rstest::*;
use serde_json::json;

#[rstest]
fn search_sort_and_pagination_encode_as_offset_limit_ordering() {
	// search="physics", page=2, pageSize=10, sort name desc
	let params = ListQueryParams {
		search: "physics".to_string(),
		pagination: Pagination::new(2, 10).unwrap(),
		sort: Some(SortSpec::desc("name")),
		filters: Vec::new(),
	};
	assert_eq!(
		params.to_query_string(),
		"offset=20&limit=10&search=physics&ordering=-name"
	);
}

#[rstest]
fn empty_search_is_omitted() {
	let params = ListQueryParams::default();
	assert_eq!(params.to_query_string(), "offset=0&limit=25");
}

#[rstest]
fn search_values_are_percent_encoded() {
	let params = ListQueryParams {
		search: "fine arts & music".to_string(),
		..Default::default()
	};
	assert!(
		params
			.to_query_string()
			.contains("search=fine%20arts%20%26%20music")
	);
}

#[rstest]
fn filters_append_as_field_value_pairs() {
	let params = ListQueryParams {
		filters: vec![
			FilterSpec::new("department", "physics"),
			FilterSpec::new("is_active", "true"),
		],
		..Default::default()
	};
	assert_eq!(
		params.to_query_string(),
		"offset=0&limit=25&department=physics&is_active=true"
	);
}

#[rstest]
fn equal_params_encode_identically_regardless_of_filter_order() {
	let forward = ListQueryParams {
		filters: vec![
			FilterSpec::new("a", "1"),
			FilterSpec::new("b", "2"),
		],
		..Default::default()
	};
	let reversed = ListQueryParams {
		filters: vec![
			FilterSpec::new("b", "2"),
			FilterSpec::new("a", "1"),
		],
		..Default::default()
	};
	assert_eq!(forward.to_query_string(), reversed.to_query_string());
}

#[rstest]
fn generic_fallback_for_unstructured_payload() {
	let errors = flatten_field_errors(&json!(null));
	assert_eq!(errors.len(), 1);
	assert!(errors[0].path.is_empty());
}

proptest! {
	// offset is always page * page_size for any valid window
	#[test]
	fn offset_is_page_times_page_size(page in 0u64..100_000, page_size in 1u64..=MAX_PAGE_SIZE) {
		let pagination = Pagination::new(page, page_size).unwrap();
		prop_assert_eq!(pagination.offset(), page * page_size);
		let query = ListQueryParams {
			pagination,
			..Default::default()
		}
		.to_query_string();
		let expected_prefix = format!("offset={}&limit={}", page * page_size, page_size);
		prop_assert!(query.starts_with(&expected_prefix));
	}

	// Encoding is a pure function of content
	#[test]
	fn encoding_is_deterministic(search in "[a-z ]{0,12}", page in 0u64..1000) {
		let params = ListQueryParams {
			search,
			pagination: Pagination::new(page, 10).unwrap(),
			..Default::default()
		};
		prop_assert_eq!(params.to_query_string(), params.clone().to_query_string());
	}
}
