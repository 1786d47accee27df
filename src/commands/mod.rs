//! Command implementations for the FPL MVP CLI

pub mod common;
pub mod gameweek;
pub mod refresh;
pub mod squad;
pub mod top_players;

#[cfg(test)]
mod tests;
