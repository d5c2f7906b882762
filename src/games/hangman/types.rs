//! Core domain types for Hangman.

use serde::{Deserialize, Serialize};

/// Number of wrong guesses that ends a round.
pub const MAX_WRONG_GUESSES: u8 = 6;

/// Party in a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Party {
    /// Chose the secret word; wins if the guesser runs out of guesses.
    Setter,
    /// Guesses letters; wins by completing the word.
    Guesser,
}

impl std::fmt::Display for Party {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Party::Setter => write!(f, "Setter"),
            Party::Guesser => write!(f, "Guesser"),
        }
    }
}

/// Current status of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Round is ongoing.
    Playing,
    /// Guesser completed the word.
    Won,
    /// Guesser used up the wrong-guess budget.
    Lost,
}

/// Complete state of one Hangman round.
///
/// A round is a plain value: [`Round::guess`] returns a fresh `Round` and
/// never mutates in place, so a screen can hold one and replace it
/// wholesale after each guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    /// Uppercase secret word, fixed for the round.
    pub(crate) word: String,
    /// Letters guessed so far, in guess order, each at most once.
    pub(crate) guessed_letters: Vec<char>,
    /// Count of guessed letters absent from the word.
    pub(crate) wrong_guesses: u8,
    /// Wrong guesses that end the round.
    pub(crate) max_wrong_guesses: u8,
    /// Round status.
    pub(crate) status: GameStatus,
    /// Winning party, set on the terminal transition.
    pub(crate) winner: Option<Party>,
}

impl Round {
    /// Returns the secret word.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Returns the letters guessed so far, in guess order.
    pub fn guessed_letters(&self) -> &[char] {
        &self.guessed_letters
    }

    /// Returns the number of wrong guesses.
    pub fn wrong_guesses(&self) -> u8 {
        self.wrong_guesses
    }

    /// Returns the wrong-guess budget.
    pub fn max_wrong_guesses(&self) -> u8 {
        self.max_wrong_guesses
    }

    /// Returns the round status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the winning party, if the round is over.
    pub fn winner(&self) -> Option<Party> {
        self.winner
    }

    /// Returns true once the round has reached a terminal status.
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::Playing
    }

    /// Returns the word with unguessed letters replaced by `_`.
    ///
    /// One character per position; spacing between positions is left to
    /// the caller.
    pub fn masked_word(&self) -> String {
        self.word
            .chars()
            .map(|letter| {
                if self.guessed_letters.contains(&letter) {
                    letter
                } else {
                    '_'
                }
            })
            .collect()
    }

    /// Returns the guessed letters absent from the word, in guess order.
    pub fn incorrect_guesses(&self) -> Vec<char> {
        self.guessed_letters
            .iter()
            .copied()
            .filter(|letter| !self.word.contains(*letter))
            .collect()
    }

    /// Returns true if the letter has already been guessed (any case).
    pub fn has_guessed(&self, letter: char) -> bool {
        self.guessed_letters.contains(&letter.to_ascii_uppercase())
    }
}
