//! Display functions for the line-mode game and command results

use super::formatters::{
    KEYBOARD_ROWS, feedback_to_emoji, format_guess_row, format_keyboard_row, format_open_row,
};
use crate::commands::LengthReport;
use crate::game::{Round, RoundOutcome, Statistics};
use colored::Colorize;
use std::io::{self, Write};

/// Write the board: submitted rows, the row being typed, then empty rows
///
/// # Errors
/// Returns any error from the writer.
pub fn write_board<W: Write>(out: &mut W, round: &Round) -> io::Result<()> {
    let width = round.config().word_length();

    for index in 0..round.grid().height() {
        let line = match (round.guesses().get(index), round.grid().row(index)) {
            (Some(guess), Some(feedback)) => format_guess_row(guess.text(), feedback),
            _ if index == round.current_row() && !round.outcome().is_finished() => {
                format_open_row(round.in_progress(), width)
            }
            _ => format_open_row("", width),
        };
        writeln!(out, "  {line}")?;
    }

    Ok(())
}

/// Write the keyboard with hint colours
///
/// # Errors
/// Returns any error from the writer.
pub fn write_keyboard<W: Write>(out: &mut W, round: &Round) -> io::Result<()> {
    writeln!(out)?;
    for (indent, row) in KEYBOARD_ROWS.iter().enumerate() {
        writeln!(
            out,
            "  {}{}",
            " ".repeat(indent),
            format_keyboard_row(row, round.hints())
        )?;
    }
    writeln!(out)
}

/// Write the game-over summary for an ended round
///
/// # Errors
/// Returns any error from the writer.
pub fn write_round_summary<W: Write>(
    out: &mut W,
    round: &Round,
    stats: &Statistics,
) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(40).cyan())?;
    writeln!(out, "  {}", "Game over".bright_white().bold())?;

    match round.outcome() {
        RoundOutcome::Won => {
            writeln!(out, "  {}", "You've guessed the right word!".green().bold())?;
        }
        RoundOutcome::Lost => {
            writeln!(
                out,
                "  {}",
                "You failed to guess the right word!".red().bold()
            )?;
            if let Some(target) = round.revealed_target() {
                writeln!(
                    out,
                    "  The right word was: {}",
                    target.text().bright_yellow().bold()
                )?;
            }
        }
        RoundOutcome::InProgress => {}
    }

    if let Some(score) = round.score() {
        writeln!(out, "  Score: {}", score.to_string().bright_cyan().bold())?;
    }

    writeln!(out, "\n  Guess history:")?;
    for (index, guess) in round.guesses().iter().enumerate() {
        if let Some(feedback) = round.grid().row(index) {
            writeln!(
                out,
                "    {}. {} {}",
                (index + 1).to_string().bright_black(),
                guess.text().bright_white().bold(),
                feedback_to_emoji(feedback)
            )?;
        }
    }

    writeln!(
        out,
        "  Games: {} | Won: {} | Win rate: {:.0}%{}",
        stats.total_games,
        stats.games_won,
        stats.win_rate(),
        stats
            .best_score
            .map(|best| format!(" | Best score: {best}"))
            .unwrap_or_default()
    )?;
    writeln!(out, "{}\n", "═".repeat(40).cyan())
}

/// Print the dictionary check report
pub fn print_dictionary_report(source: &str, reports: &[LengthReport]) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Dictionary check: {}", source.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for report in reports {
        match &report.result {
            Ok(counts) => println!(
                "  {} letters: {} acceptable, {} candidates {}",
                report.word_length,
                counts.acceptable,
                counts.candidates,
                "✓".green()
            ),
            Err(err) => println!(
                "  {} letters: {} {}",
                report.word_length,
                "unavailable".red().bold(),
                err.reason
            ),
        }
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Engine, GameConfig};
    use crate::wordlists::MemoryWords;

    fn engine() -> Engine<MemoryWords> {
        let source = MemoryWords::new().with_length(4, &["tree", "moon", "book"], &["moon"]);
        Engine::with_seed(source, GameConfig::new(4, 3).unwrap(), 5)
    }

    fn render(f: impl Fn(&mut Vec<u8>) -> io::Result<()>) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn board_shows_guess_typing_and_blank_rows() {
        let mut engine = engine();
        engine.start_round().unwrap();
        for ch in "tree".chars() {
            engine.append_letter(ch).unwrap();
        }
        engine.submit_guess().unwrap();
        engine.append_letter('m').unwrap();

        let round = engine.round().unwrap();
        let board = render(|out| write_board(out, round));
        let lines: Vec<&str> = board.lines().collect();

        assert_eq!(lines, ["   T  R  E  E ", "   M  _  _  _ ", "   _  _  _  _ "]);
    }

    #[test]
    fn summary_reveals_target_on_loss() {
        let mut engine = engine();
        engine.configure(4, 2).unwrap();
        engine.start_round().unwrap();
        for word in ["tree", "book"] {
            for ch in word.chars() {
                engine.append_letter(ch).unwrap();
            }
            engine.submit_guess().unwrap();
        }

        let round = engine.round().unwrap();
        let mut stats = Statistics::default();
        stats.record(round);
        let summary = render(|out| write_round_summary(out, round, &stats));

        assert!(summary.contains("You failed to guess the right word!"));
        assert!(summary.contains("The right word was: MOON"));
        assert!(summary.contains("Score: 400"));
        assert!(summary.contains("1. TREE ⬜⬜⬜⬜"));
        assert!(summary.contains("2. BOOK ⬜🟩🟩⬜"));
    }
}
