//! Session manager
//!
//! Owns the session lifecycle and derives statistics updates from guess
//! evaluations. This is the whole surface a front-end (HTTP, terminal,
//! simulator) drives.

use super::session::{GuessRecord, PlayerId, Session, SessionId, SessionStatus};
use super::stats::PlayerStatistics;
use super::store::{GameStore, PlayerRecord};
use crate::core::{CharacterPolicy, Evaluation, Word};
use crate::error::{GameError, Result};
use crate::wordlists::WordSource;
use chrono::Utc;

/// Whether guesses must be known dictionary words
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GuessPolicy {
    /// Any correctly sized word is accepted
    #[default]
    AnyWord,
    /// Guesses must be in the word source's dictionary
    RequireKnownWord,
}

/// Result of an accepted guess
#[derive(Debug, Clone)]
pub struct GuessOutcome {
    pub session_id: SessionId,
    pub evaluation: Evaluation,
    pub guesses: Vec<GuessRecord>,
    pub status: SessionStatus,
    pub remaining_guesses: usize,
    /// Target word, present once the session has ended
    pub target: Option<Word>,
}

impl GuessOutcome {
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.status == SessionStatus::Won
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == SessionStatus::Active
    }
}

/// Drives sessions and statistics over a store and a word source
pub struct SessionManager<S, W> {
    store: S,
    words: W,
    character_policy: CharacterPolicy,
    guess_policy: GuessPolicy,
}

impl<S: GameStore, W: WordSource> SessionManager<S, W> {
    pub const fn new(store: S, words: W) -> Self {
        Self {
            store,
            words,
            character_policy: CharacterPolicy::Alphabetic,
            guess_policy: GuessPolicy::AnyWord,
        }
    }

    #[must_use]
    pub fn with_character_policy(mut self, policy: CharacterPolicy) -> Self {
        self.character_policy = policy;
        self
    }

    #[must_use]
    pub fn with_guess_policy(mut self, policy: GuessPolicy) -> Self {
        self.guess_policy = policy;
        self
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    pub const fn words(&self) -> &W {
        &self.words
    }

    /// Start a new session for `player`
    ///
    /// Any active session the player owns is ended first as
    /// `ForciblyEnded`, without touching statistics.
    ///
    /// # Errors
    /// Returns `NoWordsAvailable` if the word source is empty; in that case
    /// the player's existing sessions are left as they were.
    pub fn start_session(&self, player: &PlayerId) -> Result<Session> {
        let target = self.words.next_target_word()?;

        Ok(self.store.update(player, |record| {
            let now = Utc::now();
            for previous in record.sessions.iter_mut().filter(|s| s.is_active()) {
                previous.force_end(now);
                tracing::info!(
                    player = %player,
                    session = %previous.id(),
                    guesses = previous.guesses().len(),
                    "active session forcibly ended by new game"
                );
            }

            let session = Session::new(player.clone(), target, now);
            tracing::info!(
                player = %player,
                session = %session.id(),
                word_length = session.word_length(),
                "session started"
            );
            record.sessions.push(session.clone());
            session
        }))
    }

    /// Submit a guess to one of `player`'s sessions
    ///
    /// With `session_id` of `None` the player's active session is used.
    /// The whole check-and-update runs under the player's record lock, and
    /// every failure is detected before anything is mutated. A player with
    /// no record gets `SessionNotFound` and no record is created.
    ///
    /// # Errors
    /// - `SessionNotFound` if the session does not exist or is not owned by `player`
    /// - `SessionFinished` if the session is no longer active
    /// - `LengthMismatch` if the guess length differs from the target's
    /// - `InvalidCharacter` if the guess violates the character policy
    /// - `UnknownWord` if dictionary checking is on and the guess is unknown
    pub fn submit_guess(
        &self,
        player: &PlayerId,
        session_id: Option<SessionId>,
        guess_text: &str,
    ) -> Result<GuessOutcome> {
        self.store
            .update_existing(player, |record| {
                self.guess_in_record(record, player, session_id, guess_text)
            })
            .unwrap_or(Err(GameError::SessionNotFound))
    }

    fn guess_in_record(
        &self,
        record: &mut PlayerRecord,
        player: &PlayerId,
        session_id: Option<SessionId>,
        guess_text: &str,
    ) -> Result<GuessOutcome> {
        let PlayerRecord {
            sessions,
            statistics,
        } = record;

        let session = match session_id {
            Some(id) => sessions.iter_mut().find(|s| s.id() == id),
            None => sessions.iter_mut().rev().find(|s| s.is_active()),
        }
        .ok_or(GameError::SessionNotFound)?;

        if session.status().is_terminal() {
            return Err(GameError::SessionFinished);
        }

        let word = self.parse_guess(guess_text, session.word_length())?;
        let evaluation = session.apply_guess(word, Utc::now())?;

        tracing::debug!(
            player = %player,
            session = %session.id(),
            guess = session.guesses().len(),
            feedback = %evaluation.to_emoji(),
            "guess evaluated"
        );

        match session.status() {
            SessionStatus::Won => {
                statistics.record_win(session.guesses().len());
                tracing::info!(
                    player = %player,
                    session = %session.id(),
                    guesses = session.guesses().len(),
                    streak = statistics.current_streak(),
                    "session won"
                );
            }
            SessionStatus::Lost => {
                statistics.record_loss();
                tracing::info!(
                    player = %player,
                    session = %session.id(),
                    target = %session.target(),
                    "session lost"
                );
            }
            SessionStatus::Active | SessionStatus::ForciblyEnded => {}
        }

        Ok(GuessOutcome {
            session_id: session.id(),
            evaluation,
            guesses: session.guesses().to_vec(),
            status: session.status(),
            remaining_guesses: session.remaining_guesses(),
            target: session.revealed_target().cloned(),
        })
    }

    /// Most recently created active session, if any
    pub fn active_session(&self, player: &PlayerId) -> Option<Session> {
        self.store
            .read(player, |record| record.active_session().cloned())
    }

    /// Look up one of `player`'s sessions by id
    ///
    /// # Errors
    /// Returns `SessionNotFound` if `player` owns no session with that id.
    pub fn session(&self, player: &PlayerId, id: SessionId) -> Result<Session> {
        self.store
            .read(player, |record| record.session(id).cloned())
            .ok_or(GameError::SessionNotFound)
    }

    /// All of `player`'s sessions in creation order
    pub fn sessions(&self, player: &PlayerId) -> Vec<Session> {
        self.store.read(player, |record| record.sessions.clone())
    }

    /// Aggregate statistics; all zero for a player with no finished games
    pub fn statistics(&self, player: &PlayerId) -> PlayerStatistics {
        self.store.read(player, |record| record.statistics.clone())
    }

    fn parse_guess(&self, text: &str, expected: usize) -> Result<Word> {
        let text = text.trim();
        let actual = text.chars().count();
        if actual != expected {
            return Err(GameError::LengthMismatch { expected, actual });
        }

        let word = Word::with_policy(text, self.character_policy).map_err(|err| match err {
            GameError::EmptyWord => GameError::LengthMismatch {
                expected,
                actual: 0,
            },
            other => other,
        })?;

        if self.guess_policy == GuessPolicy::RequireKnownWord && !self.words.contains(&word) {
            return Err(GameError::UnknownWord(word.text().to_string()));
        }
        Ok(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::session::MAX_GUESSES;
    use crate::game::store::InMemoryStore;
    use crate::wordlists::RandomWordList;
    use crate::wordlists::loader::words_from_slice;

    type Manager = SessionManager<InMemoryStore, RandomWordList>;

    /// Manager whose only target word is `target`
    fn manager(target: &str) -> Manager {
        manager_with_words(&[target])
    }

    fn manager_with_words(words: &[&str]) -> Manager {
        let words = words_from_slice(words, CharacterPolicy::Alphabetic);
        SessionManager::new(InMemoryStore::new(), RandomWordList::seeded(words, 3))
    }

    fn alice() -> PlayerId {
        PlayerId::new("alice")
    }

    const MISSES: [&str; 6] = ["slate", "irate", "grate", "plate", "skate", "spate"];

    #[test]
    fn start_session_creates_active_session() {
        let m = manager("crane");
        let session = m.start_session(&alice()).unwrap();

        assert!(session.is_active());
        assert!(session.guesses().is_empty());
        assert_eq!(session.target().text(), "CRANE");
        assert_eq!(m.active_session(&alice()).map(|s| s.id()), Some(session.id()));
    }

    #[test]
    fn no_active_session_is_none() {
        let m = manager("crane");
        assert!(m.active_session(&alice()).is_none());
    }

    #[test]
    fn win_in_one_updates_statistics() {
        let m = manager("crane");
        m.start_session(&alice()).unwrap();

        let outcome = m.submit_guess(&alice(), None, "crane").unwrap();
        assert!(outcome.is_won());
        assert!(!outcome.is_active());
        assert_eq!(outcome.remaining_guesses, MAX_GUESSES - 1);
        assert_eq!(outcome.target.as_ref().map(Word::text), Some("CRANE"));

        let stats = m.statistics(&alice());
        assert_eq!(stats.games_played(), 1);
        assert_eq!(stats.games_won(), 1);
        assert_eq!(stats.current_streak(), 1);
        assert_eq!(stats.max_streak(), 1);
        assert_eq!(stats.wins_in(1), 1);
        assert!(m.active_session(&alice()).is_none());
    }

    #[test]
    fn six_misses_lose() {
        let m = manager("crane");
        m.start_session(&alice()).unwrap();

        let mut last = None;
        for (i, word) in MISSES.iter().enumerate() {
            let outcome = m.submit_guess(&alice(), None, word).unwrap();
            assert_eq!(outcome.guesses.len(), i + 1);
            assert_eq!(outcome.target.is_some(), i + 1 == MAX_GUESSES);
            last = Some(outcome);
        }
        let last = last.unwrap();
        assert_eq!(last.status, SessionStatus::Lost);
        assert_eq!(last.remaining_guesses, 0);

        let stats = m.statistics(&alice());
        assert_eq!(stats.games_played(), 1);
        assert_eq!(stats.games_won(), 0);
        assert_eq!(stats.games_lost(), 1);
        assert_eq!(stats.current_streak(), 0);
    }

    #[test]
    fn loss_resets_streak_after_wins() {
        let m = manager("crane");
        for _ in 0..2 {
            m.start_session(&alice()).unwrap();
            m.submit_guess(&alice(), None, "crane").unwrap();
        }
        m.start_session(&alice()).unwrap();
        for word in MISSES {
            m.submit_guess(&alice(), None, word).unwrap();
        }

        let stats = m.statistics(&alice());
        assert_eq!(stats.games_played(), 3);
        assert_eq!(stats.current_streak(), 0);
        assert_eq!(stats.max_streak(), 2);
    }

    #[test]
    fn guesses_after_end_are_rejected() {
        let m = manager("crane");
        let session = m.start_session(&alice()).unwrap();
        m.submit_guess(&alice(), None, "crane").unwrap();

        assert_eq!(
            m.submit_guess(&alice(), Some(session.id()), "slate").unwrap_err(),
            GameError::SessionFinished
        );
        // Without an id there is no active session to guess into
        assert_eq!(
            m.submit_guess(&alice(), None, "slate").unwrap_err(),
            GameError::SessionNotFound
        );
        assert_eq!(m.statistics(&alice()).games_played(), 1);
    }

    #[test]
    fn forced_restart_does_not_touch_statistics() {
        let m = manager("crane");
        let first = m.start_session(&alice()).unwrap();
        m.submit_guess(&alice(), None, "slate").unwrap();
        let before = m.statistics(&alice());

        let second = m.start_session(&alice()).unwrap();

        let first = m.session(&alice(), first.id()).unwrap();
        assert_eq!(first.status(), SessionStatus::ForciblyEnded);
        assert!(first.completed_at().is_some());
        assert_eq!(m.statistics(&alice()), before);
        assert_eq!(m.active_session(&alice()).map(|s| s.id()), Some(second.id()));
        assert_eq!(m.sessions(&alice()).len(), 2);
    }

    #[test]
    fn forced_end_preserves_streak() {
        let m = manager("crane");
        m.start_session(&alice()).unwrap();
        m.submit_guess(&alice(), None, "crane").unwrap();
        m.start_session(&alice()).unwrap();
        m.start_session(&alice()).unwrap();
        m.submit_guess(&alice(), None, "crane").unwrap();

        let stats = m.statistics(&alice());
        assert_eq!(stats.games_played(), 2);
        assert_eq!(stats.current_streak(), 2);
    }

    #[test]
    fn at_most_one_active_session() {
        let m = manager("crane");
        for _ in 0..4 {
            m.start_session(&alice()).unwrap();
        }
        let active = m
            .sessions(&alice())
            .iter()
            .filter(|s| s.is_active())
            .count();
        assert_eq!(active, 1);
    }

    #[test]
    fn failed_guesses_change_nothing() {
        let m = manager("crane");
        let session = m.start_session(&alice()).unwrap();

        for (text, expected) in [
            (
                "cranes",
                GameError::LengthMismatch {
                    expected: 5,
                    actual: 6,
                },
            ),
            (
                "",
                GameError::LengthMismatch {
                    expected: 5,
                    actual: 0,
                },
            ),
            (
                "cr4ne",
                GameError::InvalidCharacter {
                    character: '4',
                    position: 2,
                },
            ),
        ] {
            assert_eq!(m.submit_guess(&alice(), None, text).unwrap_err(), expected);
        }

        let session = m.session(&alice(), session.id()).unwrap();
        assert!(session.guesses().is_empty());
        assert!(session.is_active());
        assert_eq!(m.statistics(&alice()), PlayerStatistics::default());
    }

    #[test]
    fn guess_is_trimmed_and_uppercased() {
        let m = manager("crane");
        m.start_session(&alice()).unwrap();
        let outcome = m.submit_guess(&alice(), None, "  Crane\n").unwrap();
        assert!(outcome.is_won());
        assert_eq!(outcome.guesses[0].word.text(), "CRANE");
    }

    #[test]
    fn sessions_are_not_shared_between_players() {
        let m = manager("crane");
        let session = m.start_session(&alice()).unwrap();
        let bob = PlayerId::new("bob");

        assert_eq!(
            m.submit_guess(&bob, Some(session.id()), "crane").unwrap_err(),
            GameError::SessionNotFound
        );
        assert_eq!(
            m.session(&bob, session.id()).unwrap_err(),
            GameError::SessionNotFound
        );
        assert!(m.active_session(&alice()).is_some());
    }

    #[test]
    fn failed_guess_from_unknown_player_creates_no_record() {
        let m = manager("crane");
        let ghost = PlayerId::new("ghost");

        assert_eq!(
            m.submit_guess(&ghost, None, "crane").unwrap_err(),
            GameError::SessionNotFound
        );
        assert_eq!(
            m.submit_guess(&ghost, Some(SessionId::new()), "crane").unwrap_err(),
            GameError::SessionNotFound
        );
        assert!(m.store().players().is_empty());
    }

    #[test]
    fn fresh_player_statistics_are_zero() {
        let m = manager("crane");
        let stats = m.statistics(&PlayerId::new("nobody"));
        assert_eq!(stats.games_played(), 0);
        assert_eq!(stats.win_rate(), 0.0);
        assert!(m.store().players().is_empty());
    }

    #[test]
    fn empty_word_list_fails_without_ending_active_session() {
        let m = manager("crane");
        let session = m.start_session(&alice()).unwrap();

        let empty = SessionManager::new(
            InMemoryStore::new(),
            RandomWordList::new(Vec::new()),
        );
        assert_eq!(
            empty.start_session(&alice()).unwrap_err(),
            GameError::NoWordsAvailable
        );
        assert!(empty.active_session(&alice()).is_none());
        assert!(m.session(&alice(), session.id()).unwrap().is_active());
    }

    #[test]
    fn dictionary_policy_rejects_unknown_words() {
        let m = manager_with_words(&["crane", "slate"])
            .with_guess_policy(GuessPolicy::RequireKnownWord);
        m.start_session(&alice()).unwrap();

        assert_eq!(
            m.submit_guess(&alice(), None, "zzzzz").unwrap_err(),
            GameError::UnknownWord("ZZZZZ".to_string())
        );
        assert!(m.submit_guess(&alice(), None, "slate").is_ok());
    }

    #[test]
    fn any_character_policy_accepts_symbols() {
        let m = manager("crane").with_character_policy(CharacterPolicy::Any);
        m.start_session(&alice()).unwrap();
        let outcome = m.submit_guess(&alice(), None, "cr4ne").unwrap();
        assert_eq!(outcome.evaluation.count_correct(), 4);

        let outcome = m.submit_guess(&alice(), None, "\u{df}rane").unwrap();
        assert_eq!(outcome.guesses[1].word.length(), 5);
        assert_eq!(outcome.evaluation.count_correct(), 4);
    }

    #[test]
    fn non_ascii_letters_are_rejected_by_default() {
        let m = manager("slate");
        m.start_session(&alice()).unwrap();

        for text in ["\u{17f}late", "\u{df}late"] {
            assert!(matches!(
                m.submit_guess(&alice(), None, text).unwrap_err(),
                GameError::InvalidCharacter { position: 0, .. }
            ));
        }
        assert!(m.active_session(&alice()).unwrap().guesses().is_empty());
    }

    #[test]
    fn concurrent_misses_accept_exactly_six() {
        let m = manager("crane");
        m.start_session(&alice()).unwrap();

        let results: Vec<Result<GuessOutcome>> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..24)
                .map(|_| scope.spawn(|| m.submit_guess(&alice(), None, "slate")))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let accepted = results.iter().filter(|r| r.is_ok()).count();
        assert_eq!(accepted, MAX_GUESSES);
        let lost = results
            .iter()
            .filter(|r| matches!(r, Ok(o) if o.status == SessionStatus::Lost))
            .count();
        assert_eq!(lost, 1);
        assert_eq!(m.statistics(&alice()).games_lost(), 1);
    }

    #[test]
    fn concurrent_winning_guesses_count_once() {
        let m = manager("crane");
        let session = m.start_session(&alice()).unwrap();

        let wins = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..16)
                .map(|_| scope.spawn(|| m.submit_guess(&alice(), Some(session.id()), "crane")))
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().unwrap())
                .filter(Result::is_ok)
                .count()
        });

        assert_eq!(wins, 1);
        let stats = m.statistics(&alice());
        assert_eq!(stats.games_won(), 1);
        assert_eq!(stats.games_played(), 1);
    }
}
