//! Interactive terminal game
//!
//! Plays sessions through the same [`SessionManager`] the HTTP API uses.

use crate::game::{
    GameStore, GuessOutcome, MAX_GUESSES, PlayerId, SessionId, SessionManager, SessionStatus,
};
use crate::output::formatters::guesses_label;
use crate::output::{write_board, write_statistics};
use crate::wordlists::WordSource;
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

/// Run the interactive game until the player quits or input ends
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or if no
/// session can be started (empty word list).
pub fn run_play<S, W, R, O>(
    manager: &SessionManager<S, W>,
    player: &PlayerId,
    mut input: R,
    out: &mut O,
) -> Result<()>
where
    S: GameStore,
    W: WordSource,
    R: BufRead,
    O: Write,
{
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                    Word Guessing Game                        ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Guess the hidden word in {MAX_GUESSES} tries.")?;
    writeln!(out, "  🟩 right letter, right spot")?;
    writeln!(out, "  🟨 letter is in the word, wrong spot")?;
    writeln!(out, "  ⬜ letter is not in the word\n")?;
    writeln!(out, "Commands: 'quit' to exit, 'new' for a new game, 'stats' for statistics\n")?;

    let (mut session_id, mut word_length) = start(manager, player, out)?;

    loop {
        let Some(line) = read_input(&mut input, out, "Guess")? else {
            writeln!(out)?;
            return Ok(());
        };

        match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            "new" | "n" => {
                (session_id, word_length) = start(manager, player, out)?;
            }
            "stats" | "s" => {
                write_statistics(out, &manager.statistics(player))?;
                writeln!(out)?;
            }
            "" => {}
            _ => match manager.submit_guess(player, Some(session_id), &line) {
                Ok(outcome) => {
                    writeln!(out)?;
                    write_board(out, &outcome.guesses, word_length)?;
                    writeln!(out)?;

                    if outcome.is_active() {
                        continue;
                    }
                    write_result(out, &outcome)?;

                    let again = read_input(&mut input, out, "Play again? (yes/no)")?;
                    let again = again.as_deref().map(str::to_lowercase);
                    if matches!(again.as_deref(), Some("yes" | "y")) {
                        (session_id, word_length) = start(manager, player, out)?;
                    } else {
                        write_statistics(out, &manager.statistics(player))?;
                        writeln!(out, "\n👋 Thanks for playing!\n")?;
                        return Ok(());
                    }
                }
                Err(err) => writeln!(out, "❌ {err}\n")?,
            },
        }
    }
}

fn start<S: GameStore, W: WordSource, O: Write>(
    manager: &SessionManager<S, W>,
    player: &PlayerId,
    out: &mut O,
) -> Result<(SessionId, usize)> {
    let session = manager.start_session(player)?;
    writeln!(
        out,
        "🔄 New game: {} letters, {MAX_GUESSES} guesses\n",
        session.word_length()
    )?;
    Ok((session.id(), session.word_length()))
}

fn write_result<O: Write>(out: &mut O, outcome: &GuessOutcome) -> Result<()> {
    let target = outcome
        .target
        .as_ref()
        .map_or_else(String::new, |word| word.text().to_string());
    let used = outcome.guesses.len();

    if outcome.status == SessionStatus::Won {
        writeln!(out, "{}", "═".repeat(60).bright_cyan())?;
        writeln!(out, "{}", "    🎉  S O L V E D !  🎉".bright_green().bold())?;
        writeln!(out, "{}", "═".repeat(60).bright_cyan())?;
        writeln!(
            out,
            "\n  Solved {} in {} {}\n",
            target.bright_yellow().bold(),
            used.to_string().bright_cyan().bold(),
            guesses_label(used)
        )?;
    } else {
        writeln!(
            out,
            "{} The word was {}\n",
            "Out of guesses!".red().bold(),
            target.bright_yellow().bold()
        )?;
    }
    Ok(())
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_input<R: BufRead, O: Write>(
    input: &mut R,
    out: &mut O,
    prompt: &str,
) -> Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
