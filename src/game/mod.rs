//! Game sessions, player statistics and their persistence
//!
//! [`SessionManager`] is the entry point: it exposes starting a session,
//! submitting a guess, fetching the active session and fetching statistics.

mod manager;
mod session;
mod stats;
mod store;

pub use manager::{GuessOutcome, GuessPolicy, SessionManager};
pub use session::{GuessRecord, MAX_GUESSES, PlayerId, Session, SessionId, SessionStatus};
pub use stats::PlayerStatistics;
pub use store::{GameStore, InMemoryStore, PlayerRecord};
