//! Fantasy Premier League data source: HTTP fetches and wire types.

pub mod http;
pub mod types;

pub use http::{fetch_dataset, FPL_BASE_URL};
pub use types::Dataset;
