//! Round construction and the guess transition.

use super::rules;
use super::types::{GameStatus, MAX_WRONG_GUESSES, Party, Round};
use tracing::{debug, instrument};

impl Round {
    /// Starts a round for the given secret word.
    ///
    /// The word is uppercased for internal comparison. The machine does
    /// not re-validate it: the setup flow only hands over trimmed,
    /// alphabetic words of at least three letters.
    #[instrument(skip(word))]
    pub fn new(word: &str) -> Self {
        Self {
            word: word.to_uppercase(),
            guessed_letters: Vec::new(),
            wrong_guesses: 0,
            max_wrong_guesses: MAX_WRONG_GUESSES,
            status: GameStatus::Playing,
            winner: None,
        }
    }

    /// Applies a letter guess, returning the next round state.
    ///
    /// Pure transition: `self` is left untouched. Duplicate guesses are
    /// free no-ops, as are guesses once the round is over. Completion is
    /// checked before the loss threshold, so a guess that finishes the
    /// word wins even at the budget boundary.
    #[instrument(skip(self), fields(letter = %letter, status = ?self.status))]
    pub fn guess(&self, letter: char) -> Self {
        let letter = letter.to_ascii_uppercase();

        if self.status != GameStatus::Playing {
            debug!("round already over, guess ignored");
            return self.clone();
        }

        if self.guessed_letters.contains(&letter) {
            debug!("duplicate guess, no penalty");
            return self.clone();
        }

        let mut guessed_letters = self.guessed_letters.clone();
        guessed_letters.push(letter);

        let wrong_guesses = if self.word.contains(letter) {
            self.wrong_guesses
        } else {
            self.wrong_guesses + 1
        };

        let (status, winner) = if rules::word_complete(&self.word, &guessed_letters) {
            (GameStatus::Won, Some(Party::Guesser))
        } else if rules::out_of_guesses(wrong_guesses, self.max_wrong_guesses) {
            (GameStatus::Lost, Some(Party::Setter))
        } else {
            (GameStatus::Playing, None)
        };

        Self {
            word: self.word.clone(),
            guessed_letters,
            wrong_guesses,
            max_wrong_guesses: self.max_wrong_guesses,
            status,
            winner,
        }
    }
}
