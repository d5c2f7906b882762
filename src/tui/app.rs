//! Application state: screens and key routing.

use crate::games::hangman::{Party, Round};
use crate::words::WordSupplier;
use crossterm::event::KeyCode;
use tracing::{debug, info};

/// Maximum secret word length accepted by the setup screen.
pub const MAX_WORD_LEN: usize = 15;

/// Minimum secret word length accepted by the setup screen.
pub const MIN_WORD_LEN: usize = 3;

/// Play mode chosen on the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// One player guessing a fetched word.
    SinglePlayer,
    /// Player 1 sets the word, player 2 guesses.
    TwoPlayer,
}

/// Secret-word entry state for the setup screen.
#[derive(Debug, Default)]
pub struct SetupState {
    /// Input so far, uppercased as typed.
    pub input: String,
    /// Show the word instead of masking the input.
    pub reveal: bool,
    /// Last validation failure, if any.
    pub error: Option<String>,
}

/// Finished-round summary for the result screen.
#[derive(Debug)]
pub struct ResultState {
    /// Who won the round.
    pub winner: Party,
    /// The revealed secret word.
    pub word: String,
}

/// Current screen.
#[derive(Debug)]
pub enum Screen {
    /// Title and mode selection.
    Home,
    /// Two-player secret word entry.
    Setup(SetupState),
    /// Single-player word fetch in flight.
    Loading,
    /// A round in progress, or just finished and waiting for a key.
    Play(Round),
    /// Round summary and replay options.
    Result(ResultState),
}

/// Main application state.
pub struct App {
    screen: Screen,
    mode: GameMode,
    supplier: WordSupplier,
}

impl App {
    /// Creates the application on the home screen.
    pub fn new(supplier: WordSupplier) -> Self {
        Self {
            screen: Screen::Home,
            mode: GameMode::TwoPlayer,
            supplier,
        }
    }

    /// Gets the current screen.
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Gets the current play mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Fetches the single-player word and enters the play screen.
    ///
    /// Called by the event loop while the loading frame is on screen.
    /// The supplier absorbs every failure, so this always starts a round.
    pub async fn resolve_word(&mut self) {
        let word = self.supplier.random_word().await;
        info!(word_length = word.len(), "Starting single-player round");
        self.screen = Screen::Play(Round::new(&word));
    }

    /// Routes a key press. Returns true when the app should exit.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match &self.screen {
            Screen::Home => self.home_key(code),
            Screen::Setup(_) => self.setup_key(code),
            Screen::Loading => false,
            Screen::Play(_) => self.play_key(code),
            Screen::Result(_) => self.result_key(code),
        }
    }

    fn home_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('1') => {
                self.mode = GameMode::SinglePlayer;
                self.screen = Screen::Loading;
                false
            }
            KeyCode::Char('2') => {
                self.mode = GameMode::TwoPlayer;
                self.screen = Screen::Setup(SetupState::default());
                false
            }
            KeyCode::Char('q') | KeyCode::Esc => true,
            _ => false,
        }
    }

    fn setup_key(&mut self, code: KeyCode) -> bool {
        let Screen::Setup(setup) = &mut self.screen else {
            return false;
        };

        match code {
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                if setup.input.len() < MAX_WORD_LEN {
                    setup.input.push(c.to_ascii_uppercase());
                    setup.error = None;
                }
            }
            KeyCode::Backspace => {
                setup.input.pop();
                setup.error = None;
            }
            KeyCode::Tab => setup.reveal = !setup.reveal,
            KeyCode::Enter => match validate_secret_word(&setup.input) {
                Ok(word) => {
                    info!(word_length = word.len(), "Starting two-player round");
                    self.screen = Screen::Play(Round::new(&word));
                }
                Err(message) => {
                    debug!(%message, "Rejected secret word");
                    setup.error = Some(message);
                }
            },
            KeyCode::Esc => self.screen = Screen::Home,
            _ => {}
        }
        false
    }

    fn play_key(&mut self, code: KeyCode) -> bool {
        let Screen::Play(round) = &mut self.screen else {
            return false;
        };

        if round.is_over() {
            // Any key advances from the end-of-round banner.
            let result = ResultState {
                winner: round.winner().expect("finished round has a winner"),
                word: round.word().to_string(),
            };
            self.screen = Screen::Result(result);
            return false;
        }

        match code {
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                let next = round.guess(c);
                debug!(
                    guessed = next.guessed_letters().len(),
                    wrong = next.wrong_guesses(),
                    status = ?next.status(),
                    "Applied guess"
                );
                *round = next;
            }
            KeyCode::Esc => {
                info!("Round abandoned");
                self.screen = Screen::Home;
            }
            _ => {}
        }
        false
    }

    fn result_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('p') => {
                match self.mode {
                    GameMode::SinglePlayer => self.screen = Screen::Loading,
                    GameMode::TwoPlayer => self.screen = Screen::Setup(SetupState::default()),
                }
                false
            }
            KeyCode::Char('h') | KeyCode::Esc => {
                self.screen = Screen::Home;
                false
            }
            KeyCode::Char('q') => true,
            _ => false,
        }
    }
}

/// Validates setup input: trimmed, uppercased, 3-15 letters.
///
/// Owned by the setup flow; the round itself never re-checks.
fn validate_secret_word(input: &str) -> Result<String, String> {
    let word = input.trim().to_uppercase();

    if word.len() < MIN_WORD_LEN {
        return Err("Enter a word with at least 3 letters".to_string());
    }
    if word.len() > MAX_WORD_LEN {
        return Err("Enter a word with at most 15 letters".to_string());
    }
    if !word.chars().all(|c| c.is_ascii_uppercase()) {
        return Err("Letters only, no numbers or special characters".to_string());
    }

    Ok(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_trimmed_lowercase() {
        assert_eq!(validate_secret_word("  rust "), Ok("RUST".to_string()));
    }

    #[test]
    fn test_validate_rejects_short_words() {
        assert!(validate_secret_word("hi").is_err());
    }

    #[test]
    fn test_validate_rejects_non_letters() {
        assert!(validate_secret_word("abc123").is_err());
    }

    #[test]
    fn test_validate_rejects_empty() {
        assert!(validate_secret_word("   ").is_err());
    }
}
