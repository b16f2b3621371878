//! Shared wire and data types for the Collegia grid core
//!
//! This crate defines the REST list contract consumed by the grid:
//! query parameters (pagination, sorting, filtering, search) and their
//! deterministic query-string encoding, the paginated list response
//! envelope, mutation responses, and the flattening of nested
//! field-error payloads returned by rejected mutations.
//!
//! The contract is offset-based:
//!
//! ```text
//! GET <resource>?offset=<page*page_size>&limit=<page_size>&search=<text>&ordering=<[-]field>&<field>=<value>
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod field_errors;
pub mod limits;
pub mod params;
pub mod response;

pub use error::{Result, TypesError};
pub use field_errors::{FieldError, flatten_field_errors};
pub use limits::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use params::{FilterSpec, ListQueryParams, Pagination, SortDirection, SortSpec};
pub use response::{DetailResponse, ListResponse, MutationResponse};
