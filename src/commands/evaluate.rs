//! Single evaluation command
//!
//! Shows the feedback a guess would receive against a given target.

use crate::core::{CharacterPolicy, Evaluation, Word, evaluate};
use crate::error::Result;

/// Result of evaluating one guess against one target
pub struct EvaluationResult {
    pub guess: Word,
    pub target: Word,
    pub evaluation: Evaluation,
}

/// Evaluate `guess` against `target`
///
/// # Errors
///
/// Returns an error if either word is rejected by `policy` or the lengths
/// differ.
pub fn evaluate_pair(
    guess: &str,
    target: &str,
    policy: CharacterPolicy,
) -> Result<EvaluationResult> {
    let guess = Word::with_policy(guess.trim(), policy)?;
    let target = Word::with_policy(target.trim(), policy)?;
    let evaluation = evaluate(&guess, &target)?;

    Ok(EvaluationResult {
        guess,
        target,
        evaluation,
    })
}
