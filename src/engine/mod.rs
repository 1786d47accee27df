//! Recommendation engine: formation parsing, scoring, squad selection.
//!
//! Everything here is synchronous and CPU-only. It reads a
//! [`PlayerStore`](crate::snapshot::PlayerStore) and never performs I/O.

pub mod formation;
pub mod scorer;
pub mod selector;
pub mod view;

pub use formation::{parse_formation, Formation};
pub use scorer::{score, Recommendation, ScoredPlayer};
pub use selector::{rank_players, select, Selection, SquadRequest};
