//! Type-safe wrappers and enums for Fantasy Premier League data.

pub mod ids;
pub mod position;
pub mod status;

pub use ids::{FixtureId, Gameweek, PlayerId, TeamId};
pub use position::Position;
pub use status::PlayerStatus;
