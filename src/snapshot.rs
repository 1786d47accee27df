//! Read-only view of players, teams and fixtures.
//!
//! A [`Snapshot`] is built once per data refresh and never mutated. Requests
//! borrow the current snapshot through a [`SnapshotHandle`] for their whole
//! duration; a refresh swaps in a new `Arc<Snapshot>` without disturbing
//! requests that still hold the old one.

use parking_lot::RwLock;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;

use crate::cli::types::{Gameweek, PlayerId, Position, TeamId};
use crate::models::{Fixture, Player, Team};


/// Lookups the engine needs from the data collaborator.
pub trait PlayerStore {
    /// All players at `position`, ordered by id.
    fn find_by_position(&self, position: Position) -> Vec<Player>;

    /// Players at `position` costing at most `max_price` tenths, highest
    /// total points first.
    fn find_affordable_by_position(&self, max_price: i64, position: Position) -> Vec<Player>;

    fn find_by_id(&self, id: PlayerId) -> Option<Player>;

    /// Up to `count` unfinished fixtures for `team` from the current
    /// gameweek onwards, in calendar order.
    fn upcoming_fixtures(&self, team: TeamId, count: usize) -> Vec<Fixture>;

    fn find_team(&self, team: TeamId) -> Option<Team>;

    fn all_player_ids(&self) -> BTreeSet<PlayerId>;

    /// Smallest gameweek with an unfinished fixture, or 1.
    fn current_gameweek(&self) -> Gameweek;
}

/// Immutable, indexed dataset
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    players: BTreeMap<PlayerId, Player>,
    teams: HashMap<TeamId, Team>,
    fixtures: Vec<Fixture>,
    current_gameweek: Gameweek,
}

impl Snapshot {
    pub fn new(players: Vec<Player>, teams: Vec<Team>, mut fixtures: Vec<Fixture>) -> Self {
        fixtures.sort_by_key(|f| (f.gameweek, f.id));

        let current_gameweek = fixtures
            .iter()
            .filter(|f| !f.finished)
            .map(|f| f.gameweek)
            .min()
            .unwrap_or_default();

        Self {
            players: players.into_iter().map(|p| (p.id, p)).collect(),
            teams: teams.into_iter().map(|t| (t.id, t)).collect(),
            fixtures,
            current_gameweek,
        }
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    pub fn fixture_count(&self) -> usize {
        self.fixtures.len()
    }
}

impl PlayerStore for Snapshot {
    fn find_by_position(&self, position: Position) -> Vec<Player> {
        self.players
            .values()
            .filter(|p| p.position == position)
            .cloned()
            .collect()
    }

    fn find_affordable_by_position(&self, max_price: i64, position: Position) -> Vec<Player> {
        let mut players: Vec<Player> = self
            .players
            .values()
            .filter(|p| p.position == position && i64::from(p.now_cost) <= max_price)
            .cloned()
            .collect();
        players.sort_by(|a, b| b.points().cmp(&a.points()).then(a.id.cmp(&b.id)));
        players
    }

    fn find_by_id(&self, id: PlayerId) -> Option<Player> {
        self.players.get(&id).cloned()
    }

    fn upcoming_fixtures(&self, team: TeamId, count: usize) -> Vec<Fixture> {
        let start = self.current_gameweek.as_u16();
        let end = start.saturating_add(u16::try_from(count).unwrap_or(u16::MAX));

        self.fixtures
            .iter()
            .filter(|f| f.involves(team) && !f.finished)
            .filter(|f| (start..=end).contains(&f.gameweek.as_u16()))
            .take(count)
            .cloned()
            .collect()
    }

    fn find_team(&self, team: TeamId) -> Option<Team> {
        self.teams.get(&team).cloned()
    }

    fn all_player_ids(&self) -> BTreeSet<PlayerId> {
        self.players.keys().copied().collect()
    }

    fn current_gameweek(&self) -> Gameweek {
        self.current_gameweek
    }
}

/// Shared slot holding the current snapshot.
///
/// Readers clone the `Arc` and release the lock immediately; the refresh path
/// replaces the whole `Arc`.
#[derive(Debug, Default)]
pub struct SnapshotHandle {
    current: RwLock<Arc<Snapshot>>,
}

impl SnapshotHandle {
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            current: RwLock::new(Arc::new(snapshot)),
        }
    }

    /// The snapshot requests should work against.
    pub fn load(&self) -> Arc<Snapshot> {
        Arc::clone(&self.current.read())
    }

    /// Swap in a freshly built snapshot, returning the previous one.
    pub fn replace(&self, snapshot: Snapshot) -> Arc<Snapshot> {
        std::mem::replace(&mut *self.current.write(), Arc::new(snapshot))
    }
}
