//! Per-player aggregate statistics
//!
//! Updated exactly once per session, on its transition to `Won` or `Lost`.
//! A forcibly ended session never touches these counters.

use super::session::MAX_GUESSES;

/// Aggregate record for one player
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerStatistics {
    games_won: u32,
    games_lost: u32,
    total_guesses_in_wins: u32,
    /// Wins by guess count; index 0 is a first-guess win
    guess_distribution: [u32; MAX_GUESSES],
    current_streak: u32,
    max_streak: u32,
}

impl PlayerStatistics {
    /// Always `games_won + games_lost`
    #[must_use]
    pub const fn games_played(&self) -> u32 {
        self.games_won + self.games_lost
    }

    #[must_use]
    pub const fn games_won(&self) -> u32 {
        self.games_won
    }

    #[must_use]
    pub const fn games_lost(&self) -> u32 {
        self.games_lost
    }

    #[must_use]
    pub const fn total_guesses_in_wins(&self) -> u32 {
        self.total_guesses_in_wins
    }

    #[must_use]
    pub const fn current_streak(&self) -> u32 {
        self.current_streak
    }

    #[must_use]
    pub const fn max_streak(&self) -> u32 {
        self.max_streak
    }

    #[must_use]
    pub const fn guess_distribution(&self) -> &[u32; MAX_GUESSES] {
        &self.guess_distribution
    }

    /// Wins that took exactly `guesses` guesses
    #[must_use]
    pub fn wins_in(&self, guesses: usize) -> u32 {
        guesses
            .checked_sub(1)
            .and_then(|i| self.guess_distribution.get(i))
            .copied()
            .unwrap_or(0)
    }

    /// Fraction of played games won, 0.0 for a player with no games
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        ratio(self.games_won, self.games_played())
    }

    /// Win rate as a whole percentage
    #[must_use]
    pub fn win_percentage(&self) -> u32 {
        (self.win_rate() * 100.0).round() as u32
    }

    /// Mean guesses per won game, 0.0 for a player with no wins
    #[must_use]
    pub fn average_guesses_per_win(&self) -> f64 {
        ratio(self.total_guesses_in_wins, self.games_won)
    }

    pub(crate) fn record_win(&mut self, guesses: usize) {
        self.games_won += 1;
        self.total_guesses_in_wins += guesses as u32;
        if let Some(slot) = guesses
            .checked_sub(1)
            .and_then(|i| self.guess_distribution.get_mut(i))
        {
            *slot += 1;
        }
        self.current_streak += 1;
        self.max_streak = self.max_streak.max(self.current_streak);
    }

    pub(crate) fn record_loss(&mut self) {
        self.games_lost += 1;
        self.current_streak = 0;
    }
}

fn ratio(numerator: u32, denominator: u32) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        f64::from(numerator) / f64::from(denominator)
    }
}
