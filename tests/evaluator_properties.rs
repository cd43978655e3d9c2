//! Property tests for guess evaluation

use proptest::prelude::*;
use wordle_service::core::{Evaluation, LetterStatus, Word, evaluate, is_consistent};

fn word_pair() -> impl Strategy<Value = (String, String)> {
    (1usize..=8).prop_flat_map(|len| {
        (
            proptest::string::string_regex(&format!("[A-F]{{{len}}}")).unwrap(),
            proptest::string::string_regex(&format!("[A-F]{{{len}}}")).unwrap(),
        )
    })
}

fn evaluate_texts(guess: &str, target: &str) -> Evaluation {
    evaluate(&Word::new(guess).unwrap(), &Word::new(target).unwrap()).unwrap()
}

proptest! {
    #[test]
    fn word_matches_itself(text in "[A-Z]{1,8}") {
        let word = Word::new(&text).unwrap();
        let evaluation = evaluate(&word, &word).unwrap();
        prop_assert!(evaluation.is_perfect());
    }

    #[test]
    fn disjoint_letters_are_all_absent(guess in "[A-M]{5}", target in "[N-Z]{5}") {
        let evaluation = evaluate_texts(&guess, &target);
        prop_assert!(evaluation.statuses().all(|s| s == LetterStatus::Absent));
    }

    #[test]
    fn marks_never_exceed_target_occurrences((guess, target) in word_pair()) {
        let evaluation = evaluate_texts(&guess, &target);

        for letter in guess.chars() {
            let marked = evaluation
                .letters()
                .iter()
                .filter(|f| f.letter == letter && f.status != LetterStatus::Absent)
                .count();
            let in_target = target.chars().filter(|&c| c == letter).count();
            let in_guess = guess.chars().filter(|&c| c == letter).count();
            prop_assert_eq!(marked, in_target.min(in_guess));
        }
    }

    #[test]
    fn correct_means_same_letter_same_position((guess, target) in word_pair()) {
        let evaluation = evaluate_texts(&guess, &target);

        for (feedback, expected) in evaluation.letters().iter().zip(target.chars()) {
            prop_assert_eq!(feedback.status == LetterStatus::Correct, feedback.letter == expected);
        }
    }

    #[test]
    fn evaluation_preserves_guess_and_is_deterministic((guess, target) in word_pair()) {
        let g = Word::new(&guess).unwrap();
        let t = Word::new(&target).unwrap();
        let first = evaluate(&g, &t).unwrap();

        prop_assert_eq!(first.letters().len(), guess.len());
        prop_assert_eq!(first.letters().iter().map(|f| f.letter).collect::<String>(), guess);
        prop_assert_eq!(evaluate(&g, &t).unwrap(), first);
    }

    #[test]
    fn target_is_consistent_with_its_own_feedback((guess, target) in word_pair()) {
        let g = Word::new(&guess).unwrap();
        let t = Word::new(&target).unwrap();
        let evaluation = evaluate(&g, &t).unwrap();
        prop_assert!(is_consistent(&t, &[(g, evaluation)]));
    }
}
