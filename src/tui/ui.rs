//! Stateless screen rendering.

use super::app::{App, GameMode, ResultState, Screen, SetupState};
use crate::games::hangman::{GameStatus, Party, Round};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Gallows drawing, one stage per wrong guess.
const GALLOWS: [&str; 7] = [
    "  +---+\n  |   |\n      |\n      |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n      |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n  |   |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|   |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n /    |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n / \\  |\n      |\n=========",
];

/// Renders the current screen.
pub fn draw(frame: &mut Frame, app: &App) {
    match app.screen() {
        Screen::Home => draw_home(frame),
        Screen::Setup(setup) => draw_setup(frame, setup),
        Screen::Loading => draw_loading(frame),
        Screen::Play(round) => draw_play(frame, round),
        Screen::Result(result) => draw_result(frame, result, app.mode()),
    }
}

fn draw_home(frame: &mut Frame) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(8),    // Menu
            Constraint::Length(3), // Footer
        ])
        .split(area);

    frame.render_widget(title("Gallows"), chunks[0]);

    let menu = vec![
        Line::from(""),
        Line::from(Span::styled(
            "1 - Single player (we pick the word)",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "2 - Two players (player 1 sets the word)",
            Style::default().fg(Color::White),
        )),
    ];
    let menu = Paragraph::new(menu)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("New game"));
    frame.render_widget(menu, center_rect(chunks[1], 48, 8));

    frame.render_widget(footer("q quit"), chunks[2]);
}

fn draw_setup(frame: &mut Frame, setup: &SetupState) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Player banner
            Constraint::Length(3), // Input
            Constraint::Min(4),    // Hint / error
            Constraint::Length(3), // Footer
        ])
        .split(area);

    frame.render_widget(title("Game Setup"), chunks[0]);

    let banner = Paragraph::new("Player 1: enter a secret word for player 2 to guess")
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center);
    frame.render_widget(banner, chunks[1]);

    // Word stays hidden from player 2 unless revealed.
    let shown: String = if setup.reveal {
        setup.input.clone()
    } else {
        setup.input.chars().map(|_| '*').collect()
    };
    let input = Paragraph::new(shown)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Secret word"));
    frame.render_widget(input, center_rect(chunks[2], 30, 3));

    let detail = match &setup.error {
        Some(message) => Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        None => Line::from(Span::styled(
            "3-15 letters, no numbers or special characters",
            Style::default().fg(Color::DarkGray),
        )),
    };
    let detail = Paragraph::new(detail).alignment(Alignment::Center);
    frame.render_widget(detail, chunks[3]);

    frame.render_widget(footer("Enter start · Tab show/hide · Esc back"), chunks[4]);
}

fn draw_loading(frame: &mut Frame) {
    let area = frame.area();

    let loading = Paragraph::new("Fetching a word...")
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(loading, center_rect(area, 30, 3));
}

fn draw_play(frame: &mut Frame, round: &Round) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(8), // Gallows
            Constraint::Length(3), // Masked word
            Constraint::Length(3), // Wrong-guess status
            Constraint::Min(5),    // Keyboard or end banner
            Constraint::Length(3), // Footer
        ])
        .split(area);

    frame.render_widget(title("Hangman"), chunks[0]);

    let stage = usize::from(round.wrong_guesses()).min(GALLOWS.len() - 1);
    let gallows = Paragraph::new(GALLOWS[stage])
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center);
    frame.render_widget(gallows, chunks[1]);

    let spaced: String = round
        .masked_word()
        .chars()
        .map(|c| format!("{} ", c))
        .collect();
    let word = Paragraph::new(vec![
        Line::from(Span::styled(
            spaced.trim_end().to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{} letters", round.word().len()),
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(word, chunks[2]);

    let wrong = round.incorrect_guesses();
    let mut status_lines = vec![Line::from(format!(
        "Wrong guesses: {} / {}",
        round.wrong_guesses(),
        round.max_wrong_guesses()
    ))];
    if !wrong.is_empty() {
        let list: Vec<String> = wrong.iter().map(char::to_string).collect();
        status_lines.push(Line::from(Span::styled(
            format!("Wrong letters: {}", list.join(", ")),
            Style::default().fg(Color::Red),
        )));
    }
    let status = Paragraph::new(status_lines).alignment(Alignment::Center);
    frame.render_widget(status, chunks[3]);

    if round.is_over() {
        draw_end_banner(frame, chunks[4], round);
        frame.render_widget(footer("press any key"), chunks[5]);
    } else {
        draw_keyboard(frame, chunks[4], round);
        frame.render_widget(footer("a-z guess · Esc quit round"), chunks[5]);
    }
}

/// A-Z keys in the original's 9/9/8 rows, guessed letters dimmed.
fn draw_keyboard(frame: &mut Frame, area: Rect, round: &Round) {
    let alphabet: Vec<char> = ('A'..='Z').collect();
    let rows = [&alphabet[0..9], &alphabet[9..18], &alphabet[18..26]];

    let lines: Vec<Line> = rows
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .map(|&letter| {
                    let style = if round.has_guessed(letter) {
                        Style::default().fg(Color::DarkGray)
                    } else {
                        Style::default()
                            .fg(Color::Blue)
                            .add_modifier(Modifier::BOLD)
                    };
                    Span::styled(format!(" {} ", letter), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(keyboard, area);
}

fn draw_end_banner(frame: &mut Frame, area: Rect, round: &Round) {
    let (message, color) = match round.status() {
        GameStatus::Won => ("The guesser wins!", Color::Green),
        GameStatus::Lost => ("Out of guesses - the setter wins!", Color::Red),
        GameStatus::Playing => ("", Color::White),
    };

    let banner = Paragraph::new(vec![
        Line::from(Span::styled(
            message,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("The word was: {}", round.word())),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(banner, center_rect(area, 44, 5));
}

fn draw_result(frame: &mut Frame, result: &ResultState, mode: GameMode) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(7),    // Outcome
            Constraint::Length(3), // Footer
        ])
        .split(area);

    frame.render_widget(title("Game Over"), chunks[0]);

    let (headline, color) = match (mode, result.winner) {
        (GameMode::SinglePlayer, Party::Guesser) => ("You guessed it!", Color::Green),
        (GameMode::SinglePlayer, Party::Setter) => ("The word beat you!", Color::Red),
        (GameMode::TwoPlayer, Party::Guesser) => ("Player 2 (guesser) wins!", Color::Green),
        (GameMode::TwoPlayer, Party::Setter) => ("Player 1 (setter) wins!", Color::Red),
    };

    let outcome = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            headline,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("The word was: {}", result.word)),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(outcome, center_rect(chunks[1], 44, 7));

    frame.render_widget(footer("p play again · h home · q quit"), chunks[2]);
}

fn title(text: &str) -> Paragraph<'_> {
    Paragraph::new(text)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
}

fn footer(text: &str) -> Paragraph<'_> {
    Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
