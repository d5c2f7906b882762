mod round;
mod rules;
mod types;

pub use types::{GameStatus, MAX_WRONG_GUESSES, Party, Round};
