//! Runtime configuration
//!
//! Every option is a command-line flag with an environment variable
//! fallback; `main` loads a `.env` file first if one exists.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `WORDLE_WORDLIST` | `embedded` | Target list: `embedded` or a file path |
//! | `WORDLE_STRICT_DICTIONARY` | `false` | Reject guesses not in the word list |
//! | `WORDLE_ANY_CHARACTERS` | `false` | Accept non-letter characters in guesses |
//! | `WORDLE_SEED` | random | Seed for target word selection |
//! | `WORDLE_HOST` | `0.0.0.0` | Server bind address |
//! | `WORDLE_PORT` | `8000` | Server port |
//! | `WORDLE_GUEST_PLAYER` | `guest` | Identity for requests without `X-Player-Id` |
//! | `RUST_LOG` | per command | Log filter |

use crate::core::{CharacterPolicy, Word};
use crate::game::{GuessPolicy, InMemoryStore, SessionManager};
use crate::wordlists::loader::{load_from_file, words_from_slice};
use crate::wordlists::{RandomWordList, TARGETS};
use anyhow::{Context, Result};
use clap::Args;

/// Session manager as wired by the binaries
pub type GameService = SessionManager<InMemoryStore, RandomWordList>;

/// Options shared by every command that plays games
#[derive(Debug, Clone, Args)]
pub struct GameConfig {
    /// Target word list: 'embedded' or path to a file with one word per line
    #[arg(
        short = 'w',
        long,
        global = true,
        env = "WORDLE_WORDLIST",
        default_value = "embedded"
    )]
    pub wordlist: String,

    /// Reject guesses that are not in the word list
    #[arg(long, global = true, env = "WORDLE_STRICT_DICTIONARY")]
    pub strict_dictionary: bool,

    /// Accept any characters in guesses, not only ASCII letters
    #[arg(long, global = true, env = "WORDLE_ANY_CHARACTERS")]
    pub any_characters: bool,

    /// Seed for target word selection
    #[arg(long, global = true, env = "WORDLE_SEED")]
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            wordlist: "embedded".to_string(),
            strict_dictionary: false,
            any_characters: false,
            seed: None,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub const fn character_policy(&self) -> CharacterPolicy {
        if self.any_characters {
            CharacterPolicy::Any
        } else {
            CharacterPolicy::Alphabetic
        }
    }

    #[must_use]
    pub const fn guess_policy(&self) -> GuessPolicy {
        if self.strict_dictionary {
            GuessPolicy::RequireKnownWord
        } else {
            GuessPolicy::AnyWord
        }
    }

    /// Load the configured target words
    ///
    /// # Errors
    /// Returns an error if a word list file cannot be read.
    pub fn load_words(&self) -> Result<Vec<Word>> {
        let policy = self.character_policy();
        match self.wordlist.as_str() {
            "embedded" => Ok(words_from_slice(TARGETS, policy)),
            path => load_from_file(path, policy)
                .with_context(|| format!("failed to read word list {path}")),
        }
    }

    /// Build the session manager described by this configuration
    ///
    /// An empty word list is not an error here: starting a session reports
    /// `NoWordsAvailable` instead.
    ///
    /// # Errors
    /// Returns an error if a word list file cannot be read.
    pub fn build_service(&self) -> Result<GameService> {
        let words = self.load_words()?;
        if words.is_empty() {
            tracing::warn!(wordlist = %self.wordlist, "word list is empty");
        } else {
            tracing::info!(
                wordlist = %self.wordlist,
                words = words.len(),
                "word list loaded"
            );
        }

        let source = match self.seed {
            Some(seed) => RandomWordList::seeded(words, seed),
            None => RandomWordList::new(words),
        };

        Ok(SessionManager::new(InMemoryStore::new(), source)
            .with_character_policy(self.character_policy())
            .with_guess_policy(self.guess_policy()))
    }
}

/// HTTP server options
#[derive(Debug, Clone, Args)]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "WORDLE_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "WORDLE_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Player identity for requests without an X-Player-Id header
    #[arg(long, env = "WORDLE_GUEST_PLAYER", default_value = "guest")]
    pub guest_player: String,
}

impl ServerConfig {
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
