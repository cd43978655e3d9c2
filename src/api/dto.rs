//! Request and response payloads
//!
//! The target word only appears in responses for sessions that have ended.

use crate::core::{Evaluation, Word};
use crate::game::{
    GuessOutcome, GuessRecord, MAX_GUESSES, PlayerStatistics, Session, SessionId, SessionStatus,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `POST /game/guess` body
#[derive(Debug, Clone, Deserialize)]
pub struct GuessRequest {
    pub guess: String,
    /// Session to guess into; the caller's active session when omitted
    #[serde(default)]
    pub game_id: Option<String>,
}

/// `POST /game/start` response
#[derive(Debug, Clone, Serialize)]
pub struct StartGameResponse {
    pub game_id: SessionId,
    pub word_length: usize,
    pub max_guesses: usize,
}

impl From<&Session> for StartGameResponse {
    fn from(session: &Session) -> Self {
        Self {
            game_id: session.id(),
            word_length: session.word_length(),
            max_guesses: MAX_GUESSES,
        }
    }
}

/// `POST /game/guess` response
#[derive(Debug, Clone, Serialize)]
pub struct GuessResponse {
    pub game_id: SessionId,
    pub evaluation: Evaluation,
    pub guesses: Vec<GuessRecord>,
    pub status: SessionStatus,
    pub is_won: bool,
    pub is_active: bool,
    pub remaining_guesses: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<Word>,
}

impl From<GuessOutcome> for GuessResponse {
    fn from(outcome: GuessOutcome) -> Self {
        Self {
            is_won: outcome.is_won(),
            is_active: outcome.is_active(),
            game_id: outcome.session_id,
            evaluation: outcome.evaluation,
            guesses: outcome.guesses,
            status: outcome.status,
            remaining_guesses: outcome.remaining_guesses,
            target: outcome.target,
        }
    }
}

/// Snapshot of one session
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub game_id: SessionId,
    pub guesses: Vec<GuessRecord>,
    pub status: SessionStatus,
    pub is_won: bool,
    pub is_active: bool,
    pub remaining_guesses: usize,
    pub word_length: usize,
    pub max_guesses: usize,
    pub created_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<Word>,
}

impl From<&Session> for SessionView {
    fn from(session: &Session) -> Self {
        Self {
            game_id: session.id(),
            guesses: session.guesses().to_vec(),
            status: session.status(),
            is_won: session.is_won(),
            is_active: session.is_active(),
            remaining_guesses: session.remaining_guesses(),
            word_length: session.word_length(),
            max_guesses: MAX_GUESSES,
            created_at: session.created_at(),
            finished_at: session.completed_at(),
            target: session.revealed_target().cloned(),
        }
    }
}

/// `GET /player/stats` response
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub games_played: u32,
    pub games_won: u32,
    pub games_lost: u32,
    pub win_rate: f64,
    pub win_percentage: u32,
    pub average_guesses_per_win: f64,
    pub current_streak: u32,
    pub max_streak: u32,
    /// Wins keyed by number of guesses, "1" through "6"
    pub guess_distribution: BTreeMap<usize, u32>,
}

impl From<&PlayerStatistics> for StatsResponse {
    fn from(stats: &PlayerStatistics) -> Self {
        Self {
            games_played: stats.games_played(),
            games_won: stats.games_won(),
            games_lost: stats.games_lost(),
            win_rate: stats.win_rate(),
            win_percentage: stats.win_percentage(),
            average_guesses_per_win: stats.average_guesses_per_win(),
            current_streak: stats.current_streak(),
            max_streak: stats.max_streak(),
            guess_distribution: (1..=MAX_GUESSES)
                .map(|guesses| (guesses, stats.wins_in(guesses)))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guess_request_game_id_is_optional() {
        let request: GuessRequest = serde_json::from_str(r#"{"guess": "crane"}"#).unwrap();
        assert_eq!(request.guess, "crane");
        assert!(request.game_id.is_none());
    }

    #[test]
    fn fresh_stats_serialize_with_zeroes() {
        let json = serde_json::to_value(StatsResponse::from(&PlayerStatistics::default())).unwrap();

        assert_eq!(json["games_played"], 0);
        assert_eq!(json["win_rate"], 0.0);
        assert_eq!(json["average_guesses_per_win"], 0.0);
        assert_eq!(json["guess_distribution"]["1"], 0);
        assert_eq!(json["guess_distribution"]["6"], 0);
    }
}
