//! Gallows library - Hangman round logic and word supply.
//!
//! # Architecture
//!
//! - **Core** ([`Round`]): pure state machine for one Hangman round.
//!   Guesses produce fresh values; the round is never mutated in place.
//! - **Words** ([`WordSupplier`]): best-effort random-word fetch with a
//!   local fallback list for single-player mode.
//! - **TUI**: ratatui screens (home, setup, play, result), in the binary.
//!
//! # Example
//!
//! ```
//! use gallows::{GameStatus, Party, Round};
//!
//! let round = Round::new("dog").guess('d').guess('o').guess('g');
//! assert_eq!(round.status(), GameStatus::Won);
//! assert_eq!(round.winner(), Some(Party::Guesser));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod games;
mod words;

// Crate-level exports - Hangman round state machine
pub use games::hangman::{GameStatus, MAX_WRONG_GUESSES, Party, Round};

// Crate-level exports - Word supply
pub use words::{FALLBACK_WORDS, WordSupplier};
