//! Tests for the Hangman round state machine.

use gallows::{GameStatus, MAX_WRONG_GUESSES, Party, Round};

fn play(round: Round, letters: &str) -> Round {
    letters.chars().fold(round, |round, letter| round.guess(letter))
}

#[test]
fn test_new_round_starts_playing() {
    let round = Round::new("rust");

    assert_eq!(round.word(), "RUST");
    assert!(round.guessed_letters().is_empty());
    assert_eq!(round.wrong_guesses(), 0);
    assert_eq!(round.max_wrong_guesses(), MAX_WRONG_GUESSES);
    assert_eq!(round.status(), GameStatus::Playing);
    assert_eq!(round.winner(), None);
    assert!(!round.is_over());
}

#[test]
fn test_wrong_count_tracks_letters_missing_from_word() {
    let round = play(Round::new("RUST"), "abr");

    assert_eq!(round.wrong_guesses(), 2);
    assert_eq!(round.incorrect_guesses().len(), 2);
    assert_eq!(round.guessed_letters(), &['A', 'B', 'R']);
    assert_eq!(round.status(), GameStatus::Playing);
}

#[test]
fn test_guesses_are_case_insensitive() {
    let round = Round::new("Dog").guess('d');

    assert_eq!(round.masked_word(), "D__");
    assert_eq!(round.wrong_guesses(), 0);
}

#[test]
fn test_duplicate_guess_is_a_free_no_op() {
    let once = Round::new("CAT").guess('x');
    let twice = once.guess('x');
    let twice_lower = once.guess('X');

    assert_eq!(once, twice);
    assert_eq!(once, twice_lower);
    assert_eq!(twice.wrong_guesses(), 1);
}

#[test]
fn test_guess_does_not_mutate_its_input() {
    let round = Round::new("CAT");
    let _next = round.guess('c');

    assert!(round.guessed_letters().is_empty());
    assert_eq!(round.status(), GameStatus::Playing);
}

#[test]
fn test_dog_scenario() {
    // Guess sequence A,B,D,O,G against DOG, step by step.
    let round = play(Round::new("DOG"), "ab");
    assert_eq!(round.wrong_guesses(), 2);
    assert_eq!(round.status(), GameStatus::Playing);

    let round = round.guess('d');
    assert_eq!(round.wrong_guesses(), 2);
    assert_eq!(round.masked_word(), "D__");

    let round = round.guess('o');
    assert_eq!(round.wrong_guesses(), 2);

    let round = round.guess('g');
    assert_eq!(round.status(), GameStatus::Won);
    assert_eq!(round.winner(), Some(Party::Guesser));
    assert_eq!(round.masked_word(), "DOG");
}

#[test]
fn test_six_wrong_guesses_lose_the_round() {
    let round = play(Round::new("CAT"), "bdefh");
    assert_eq!(round.wrong_guesses(), 5);
    assert_eq!(round.status(), GameStatus::Playing);

    let round = round.guess('i');
    assert_eq!(round.wrong_guesses(), 6);
    assert_eq!(round.status(), GameStatus::Lost);
    assert_eq!(round.winner(), Some(Party::Setter));
}

#[test]
fn test_completion_wins_at_the_budget_boundary() {
    // Five wrong guesses in, the completing guess still wins the round.
    let round = play(Round::new("CAB"), "xyzqw");
    assert_eq!(round.wrong_guesses(), 5);

    let round = play(round, "cab");
    assert_eq!(round.status(), GameStatus::Won);
    assert_eq!(round.winner(), Some(Party::Guesser));
    assert_eq!(round.wrong_guesses(), 5);
}

#[test]
fn test_terminal_round_is_frozen() {
    let lost = play(Round::new("CAT"), "bdefhi");
    assert_eq!(lost.status(), GameStatus::Lost);

    let after = play(lost.clone(), "cat");
    assert_eq!(lost, after);

    let won = play(Round::new("DOG"), "dog");
    let after = won.guess('z');
    assert_eq!(won, after);
    assert_eq!(after.wrong_guesses(), 0);
}

#[test]
fn test_masked_word_reveals_guessed_positions() {
    let round = play(Round::new("CAT"), "ct");

    assert_eq!(round.masked_word(), "C_T");
}

#[test]
fn test_masked_word_handles_repeated_letters() {
    let round = Round::new("NOON").guess('o');

    assert_eq!(round.masked_word(), "_OO_");
}

#[test]
fn test_incorrect_guesses_keep_guess_order() {
    let round = play(Round::new("CAT"), "xcy");

    assert_eq!(round.incorrect_guesses(), vec!['X', 'Y']);
}

#[test]
fn test_wrong_count_matches_incorrect_projection_after_every_guess() {
    let mut round = Round::new("TELESCOPE");
    for letter in "TABLESXYZ".chars() {
        round = round.guess(letter);
        assert_eq!(
            usize::from(round.wrong_guesses()),
            round.incorrect_guesses().len()
        );
    }
}
