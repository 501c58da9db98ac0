//! TUI rendering with ratatui
//!
//! Menu, board, keyboard and game-over screens.

use super::app::{App, MenuField, MessageStyle, Screen};
use crate::core::Feedback;
use crate::game::{Round, RoundOutcome};
use crate::output::formatters::KEYBOARD_ROWS;
use crate::wordlists::DictionarySource;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};
use std::time::Instant;

/// Main UI rendering function
pub fn ui<S: DictionarySource>(f: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Message
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    match (app.screen, app.engine.round()) {
        (Screen::Playing, Some(round)) => render_game(f, round, chunks[1]),
        (Screen::GameOver, Some(round)) => {
            render_game(f, round, chunks[1]);
            render_game_over(f, round, chunks[1]);
        }
        _ => render_menu(f, app, chunks[1]),
    }

    render_message(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE CLONE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_menu<S: DictionarySource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let option = |label: &str, value: usize, field: MenuField| {
        let focused = app.menu.field == field;
        let value_style = if focused {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Yellow)
        };
        Line::from(vec![
            Span::raw(format!("{label:<20}")),
            Span::styled(format!(" ◀ {value} ▶ "), value_style),
        ])
    };

    let mut content = vec![
        Line::from(""),
        option("Letters in word:", app.menu.word_length, MenuField::WordLength),
        Line::from(""),
        option(
            "Amount of guesses:",
            app.menu.guess_allowance,
            MenuField::GuessAllowance,
        ),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to play",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    if app.stats.total_games > 0 {
        content.push(Line::from(""));
        content.push(Line::from(format!(
            "Games: {} | Won: {} | Best score: {}",
            app.stats.total_games,
            app.stats.games_won,
            app.stats.best_score.unwrap_or_default()
        )));
    }

    let menu = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(" Main Menu ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(menu, area);
}

/// Tile colour for a feedback value
const fn feedback_color(feedback: Feedback) -> Color {
    match feedback {
        Feedback::Exact => Color::Green,
        Feedback::Present => Color::Yellow,
        Feedback::Absent => Color::DarkGray,
    }
}

fn tile(letter: char, feedback: Option<Feedback>) -> Span<'static> {
    let style = match feedback {
        Some(fb) => Style::default()
            .fg(Color::Black)
            .bg(feedback_color(fb))
            .add_modifier(Modifier::BOLD),
        None => Style::default()
            .fg(Color::White)
            .bg(Color::Indexed(236))
            .add_modifier(Modifier::BOLD),
    };
    Span::styled(format!(" {letter} "), style)
}

fn board_lines(round: &Round) -> Vec<Line<'static>> {
    let width = round.config().word_length();
    let mut lines = Vec::with_capacity(round.grid().height() * 2);

    for index in 0..round.grid().height() {
        let typed: Vec<char> = match round.guesses().get(index) {
            Some(guess) => guess.text().chars().collect(),
            None if index == round.current_row() => round.in_progress().chars().collect(),
            None => Vec::new(),
        };

        let spans: Vec<Span> = (0..width)
            .flat_map(|column| {
                let letter = typed.get(column).copied().unwrap_or(' ');
                [
                    tile(letter, round.grid().cell(index, column)),
                    Span::raw(" "),
                ]
            })
            .collect();

        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    lines
}

fn keyboard_lines(round: &Round) -> Vec<Line<'static>> {
    KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|letter| {
                    let style = match round.hints().get(letter) {
                        Some(fb) => Style::default()
                            .fg(Color::Black)
                            .bg(feedback_color(fb))
                            .add_modifier(Modifier::BOLD),
                        None => Style::default().fg(Color::White),
                    };
                    Span::styled(format!(" {letter} "), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn render_game(f: &mut Frame, round: &Round, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // Board
            Constraint::Length(5), // Keyboard
        ])
        .split(area);

    let board = Paragraph::new(board_lines(round))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(
                    " {} letters | {} guesses left ",
                    round.config().word_length(),
                    round.remaining_guesses()
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(board, chunks[0]);

    let keyboard = Paragraph::new(keyboard_lines(round))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Keyboard ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(keyboard, chunks[1]);
}

fn render_game_over(f: &mut Frame, round: &Round, area: Rect) {
    let (headline, color) = match round.outcome() {
        RoundOutcome::Won => ("You've guessed the right word!", Color::Green),
        _ => ("You failed to guess the right word!", Color::Red),
    };

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            headline,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
    ];

    if round.outcome() == RoundOutcome::Lost
        && let Some(target) = round.revealed_target()
    {
        content.push(Line::from(vec![
            Span::raw("The right word was: "),
            Span::styled(
                target.text().to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    content.push(Line::from(format!(
        "Score: {}",
        round.score().unwrap_or_default()
    )));
    content.push(Line::from(""));
    content.push(Line::from(Span::styled(
        "Enter: Main menu | Esc: Quit",
        Style::default().fg(Color::DarkGray),
    )));

    let popup = centered_rect(area, 44, 9);
    f.render_widget(Clear, popup);
    f.render_widget(
        Paragraph::new(content).alignment(Alignment::Center).block(
            Block::default()
                .title(" Game over ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        ),
        popup,
    );
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn render_message<S: DictionarySource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let (text, style) = match app.visible_message(Instant::now()) {
        Some(msg) => {
            let color = match msg.style {
                MessageStyle::Info => Color::White,
                MessageStyle::Advisory => Color::Yellow,
                MessageStyle::Error => Color::Red,
            };
            (msg.text.as_str(), Style::default().fg(color))
        }
        None => ("", Style::default()),
    };

    let message = Paragraph::new(text)
        .style(style.add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, area);
}

fn render_status<S: DictionarySource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let help_text = match app.screen {
        Screen::Menu => "↑↓: Select | ←→: Change | Enter: Play | Esc: Quit",
        Screen::Playing => "Type letters | Backspace: Delete | Enter: Submit | Esc: Quit",
        Screen::GameOver => "Enter: Main menu | Esc: Quit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
