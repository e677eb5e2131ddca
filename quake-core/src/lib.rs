//! Core types for the Chile earthquake finder: region lookup, earthquake
//! records, result paging and the API client (behind the `api` feature).

#[cfg(feature = "api")]
pub mod client;
pub mod earthquake;
pub mod error;
pub mod export;
pub mod pagination;
pub mod region;
pub mod response;
pub mod search;
pub mod session;

pub use error::{QuakeError, Result};
pub use pagination::RESULTS_PER_PAGE;
pub use search::DEFAULT_API_URL;
