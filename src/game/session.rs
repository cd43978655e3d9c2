//! Game session state machine
//!
//! `Active -> Won | Lost | ForciblyEnded`. Terminal states are sticky.

use crate::core::{Evaluation, Word, evaluate};
use crate::error::{GameError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Guesses allowed per session
pub const MAX_GUESSES: usize = 6;

/// Opaque, already-resolved player identity
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unique session identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for SessionId {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| GameError::SessionNotFound)
    }
}

/// Lifecycle state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Active,
    Won,
    Lost,
    /// Ended because the player started a new session; not a win or a loss
    ForciblyEnded,
}

impl SessionStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Active)
    }
}

/// One submitted guess and its feedback. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuessRecord {
    pub word: Word,
    pub evaluation: Evaluation,
    pub submitted_at: DateTime<Utc>,
}

/// One play-through from word selection to terminal outcome
#[derive(Debug, Clone)]
pub struct Session {
    id: SessionId,
    player: PlayerId,
    target: Word,
    guesses: Vec<GuessRecord>,
    status: SessionStatus,
    created_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl Session {
    pub(crate) fn new(player: PlayerId, target: Word, now: DateTime<Utc>) -> Self {
        Self {
            id: SessionId::new(),
            player,
            target,
            guesses: Vec::with_capacity(MAX_GUESSES),
            status: SessionStatus::Active,
            created_at: now,
            completed_at: None,
        }
    }

    #[must_use]
    pub const fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub const fn player(&self) -> &PlayerId {
        &self.player
    }

    /// The hidden word. API layers should prefer [`Session::revealed_target`].
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    /// The target word, only once the session is over
    #[must_use]
    pub fn revealed_target(&self) -> Option<&Word> {
        self.status.is_terminal().then_some(&self.target)
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.target.length()
    }

    /// Guesses in submission order
    #[must_use]
    pub fn guesses(&self) -> &[GuessRecord] {
        &self.guesses
    }

    #[must_use]
    pub const fn status(&self) -> SessionStatus {
        self.status
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == SessionStatus::Active
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.status == SessionStatus::Won
    }

    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        MAX_GUESSES.saturating_sub(self.guesses.len())
    }

    /// Record a guess and advance the state machine
    ///
    /// Nothing is mutated unless the guess is accepted.
    ///
    /// # Errors
    /// - `SessionFinished` if the session is no longer active
    /// - `LengthMismatch` if the guess length differs from the target's
    pub(crate) fn apply_guess(&mut self, word: Word, now: DateTime<Utc>) -> Result<Evaluation> {
        if self.status.is_terminal() {
            return Err(GameError::SessionFinished);
        }

        let evaluation = evaluate(&word, &self.target)?;
        let won = evaluation.is_perfect();

        self.guesses.push(GuessRecord {
            word,
            evaluation: evaluation.clone(),
            submitted_at: now,
        });

        if won {
            self.finish(SessionStatus::Won, now);
        } else if self.guesses.len() >= MAX_GUESSES {
            self.finish(SessionStatus::Lost, now);
        }

        Ok(evaluation)
    }

    /// End an active session without a win or a loss
    ///
    /// Returns false if the session had already ended.
    pub(crate) fn force_end(&mut self, now: DateTime<Utc>) -> bool {
        if self.status.is_terminal() {
            return false;
        }
        self.finish(SessionStatus::ForciblyEnded, now);
        true
    }

    fn finish(&mut self, status: SessionStatus, now: DateTime<Utc>) {
        debug_assert!(self.status == SessionStatus::Active);
        self.status = status;
        self.completed_at = Some(now);
    }
}
