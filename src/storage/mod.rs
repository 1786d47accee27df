//! Storage layer for the cached FPL dataset
//!
//! - `schema`: Database connection and schema management
//! - `queries`: Whole-dataset replacement and snapshot loading

pub mod queries;
pub mod schema;


pub use queries::RefreshCounts;
pub use schema::PlayerDatabase;
