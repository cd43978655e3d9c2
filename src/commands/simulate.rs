//! Concurrent simulation
//!
//! Simulated players play many games in parallel through one shared session
//! manager, then every player's statistics are checked against their
//! finished sessions.

use crate::core::{Evaluation, Word, is_consistent};
use crate::game::{GameStore, MAX_GUESSES, PlayerId, SessionManager, SessionStatus};
use crate::wordlists::RandomWordList;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Simulation parameters
#[derive(Debug, Clone, Copy)]
pub struct SimulationConfig {
    pub games: usize,
    pub players: usize,
    /// Seed for the simulated players' guess choices
    pub seed: u64,
    pub show_progress: bool,
}

impl SimulationConfig {
    #[must_use]
    pub const fn new(games: usize, players: usize) -> Self {
        Self {
            games,
            players,
            seed: 0,
            show_progress: false,
        }
    }
}

/// Aggregated outcome of a simulation run
#[derive(Debug, Clone)]
pub struct SimulationResult {
    pub players: usize,
    pub won: u32,
    pub lost: u32,
    /// Wins by guess count; index 0 is a first-guess win
    pub guess_distribution: [u32; MAX_GUESSES],
    pub average_guesses: f64,
    pub duration: Duration,
    /// Players whose statistics disagree with their finished sessions
    pub violations: Vec<PlayerId>,
}

impl SimulationResult {
    #[must_use]
    pub const fn games_played(&self) -> u32 {
        self.won + self.lost
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played() == 0 {
            0.0
        } else {
            f64::from(self.won) / f64::from(self.games_played())
        }
    }
}

/// Play `config.games` games spread across `config.players` players
///
/// Players run in parallel; each player's games run one after another.
pub fn run_simulation<S: GameStore>(
    manager: &SessionManager<S, RandomWordList>,
    config: SimulationConfig,
) -> SimulationResult {
    let players: Vec<PlayerId> = (0..config.players.max(1))
        .map(|i| PlayerId::new(format!("sim-{i:04}")))
        .collect();

    let pb = if config.show_progress {
        let pb = ProgressBar::new(config.games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let candidates = manager.words().words();

    players.par_iter().enumerate().for_each(|(index, player)| {
        let share = games_for_player(config.games, players.len(), index);
        let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(index as u64));
        for _ in 0..share {
            play_one(manager, player, candidates, &mut rng);
            pb.inc(1);
        }
    });

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let mut won = 0;
    let mut lost = 0;
    let mut total_guesses = 0;
    let mut guess_distribution = [0; MAX_GUESSES];
    let mut violations = Vec::new();

    for player in &players {
        let stats = manager.statistics(player);
        let sessions = manager.sessions(player);
        let won_sessions = sessions
            .iter()
            .filter(|s| s.status() == SessionStatus::Won)
            .count();
        let lost_sessions = sessions
            .iter()
            .filter(|s| s.status() == SessionStatus::Lost)
            .count();

        if stats.games_won() as usize != won_sessions
            || stats.games_lost() as usize != lost_sessions
        {
            tracing::error!(player = %player, "statistics disagree with finished sessions");
            violations.push(player.clone());
        }

        won += stats.games_won();
        lost += stats.games_lost();
        total_guesses += stats.total_guesses_in_wins();
        for (slot, count) in guess_distribution.iter_mut().zip(stats.guess_distribution()) {
            *slot += count;
        }
    }

    SimulationResult {
        players: players.len(),
        won,
        lost,
        guess_distribution,
        average_guesses: if won == 0 {
            0.0
        } else {
            f64::from(total_guesses) / f64::from(won)
        },
        duration,
        violations,
    }
}

/// Games assigned to player `index` when `games` are dealt round-robin
fn games_for_player(games: usize, players: usize, index: usize) -> usize {
    games / players + usize::from(index < games % players)
}

/// Play one session by guessing words consistent with all feedback so far
fn play_one<S: GameStore>(
    manager: &SessionManager<S, RandomWordList>,
    player: &PlayerId,
    candidates: &[Word],
    rng: &mut StdRng,
) {
    let Ok(session) = manager.start_session(player) else {
        return;
    };

    let mut history: Vec<(Word, Evaluation)> = Vec::with_capacity(MAX_GUESSES);
    loop {
        let remaining: Vec<&Word> = candidates
            .iter()
            .filter(|candidate| is_consistent(candidate, &history))
            .collect();
        let Some(&guess) = remaining.choose(rng) else {
            return;
        };

        match manager.submit_guess(player, Some(session.id()), guess.text()) {
            Ok(outcome) if outcome.is_active() => {
                history.push((guess.clone(), outcome.evaluation));
            }
            Ok(_) => return,
            Err(err) => {
                tracing::warn!(player = %player, error = %err, "simulated guess rejected");
                return;
            }
        }
    }
}
