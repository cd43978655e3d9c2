//! Session and statistics persistence
//!
//! All of a player's sessions and their statistics live in one
//! [`PlayerRecord`]. A session belongs to exactly one player, so locking the
//! record for a whole read-check-mutate sequence makes guess submission and
//! forced termination atomic per session.

use super::session::{PlayerId, Session, SessionId};
use super::stats::PlayerStatistics;
use parking_lot::{Mutex, RwLock};
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Everything stored for one player
#[derive(Debug, Clone, Default)]
pub struct PlayerRecord {
    /// Sessions in creation order
    pub sessions: Vec<Session>,
    pub statistics: PlayerStatistics,
}

impl PlayerRecord {
    /// Most recently created active session
    #[must_use]
    pub fn active_session(&self) -> Option<&Session> {
        self.sessions.iter().rev().find(|s| s.is_active())
    }

    pub fn active_session_mut(&mut self) -> Option<&mut Session> {
        self.sessions.iter_mut().rev().find(|s| s.is_active())
    }

    #[must_use]
    pub fn session(&self, id: SessionId) -> Option<&Session> {
        self.sessions.iter().find(|s| s.id() == id)
    }

    pub fn session_mut(&mut self, id: SessionId) -> Option<&mut Session> {
        self.sessions.iter_mut().find(|s| s.id() == id)
    }
}

/// Atomic per-player load/modify/store
pub trait GameStore: Send + Sync {
    /// Run `f` with exclusive access to the player's record, creating it if
    /// needed. No other update for the same player interleaves with `f`.
    fn update<R>(&self, player: &PlayerId, f: impl FnOnce(&mut PlayerRecord) -> R) -> R;

    /// Like [`GameStore::update`] but only for a player that already has a
    /// record; returns `None` without creating one otherwise.
    fn update_existing<R>(
        &self,
        player: &PlayerId,
        f: impl FnOnce(&mut PlayerRecord) -> R,
    ) -> Option<R>;

    /// Run `f` against the player's record, or an empty record if the player
    /// is unknown. Never creates a record.
    fn read<R>(&self, player: &PlayerId, f: impl FnOnce(&PlayerRecord) -> R) -> R;

    /// Every player with a stored record
    fn players(&self) -> Vec<PlayerId>;
}

/// Process-local store keyed by player
#[derive(Debug, Default)]
pub struct InMemoryStore {
    players: RwLock<FxHashMap<PlayerId, Arc<Mutex<PlayerRecord>>>>,
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, player: &PlayerId) -> Arc<Mutex<PlayerRecord>> {
        if let Some(record) = self.players.read().get(player) {
            return Arc::clone(record);
        }
        Arc::clone(self.players.write().entry(player.clone()).or_default())
    }
}

impl GameStore for InMemoryStore {
    fn update<R>(&self, player: &PlayerId, f: impl FnOnce(&mut PlayerRecord) -> R) -> R {
        let record = self.record(player);
        let mut guard = record.lock();
        f(&mut guard)
    }

    fn update_existing<R>(
        &self,
        player: &PlayerId,
        f: impl FnOnce(&mut PlayerRecord) -> R,
    ) -> Option<R> {
        let record = self.players.read().get(player).cloned()?;
        let mut guard = record.lock();
        Some(f(&mut guard))
    }

    fn read<R>(&self, player: &PlayerId, f: impl FnOnce(&PlayerRecord) -> R) -> R {
        let record = self.players.read().get(player).cloned();
        match record {
            Some(record) => {
                let guard = record.lock();
                f(&guard)
            }
            None => f(&PlayerRecord::default()),
        }
    }

    fn players(&self) -> Vec<PlayerId> {
        self.players.read().keys().cloned().collect()
    }
}
