//! Simple line-mode game
//!
//! Text-based game without the TUI: one guess per line.

use crate::game::{Engine, Statistics};
use crate::output::{write_board, write_keyboard, write_round_summary};
use crate::wordlists::DictionarySource;
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

/// Run the line-mode game until the input ends or the player quits
///
/// Every line is fed to the engine letter by letter and then submitted, so
/// validation and advisories are the same as in the TUI. Commands start with
/// `:` so they never collide with a word: `:new` starts a fresh round and
/// `:quit` stops. Returns the statistics of the session.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or if no
/// dictionary is available for the configured word length.
pub fn run_simple<S, R, W>(engine: &mut Engine<S>, mut input: R, mut out: W) -> Result<Statistics>
where
    S: DictionarySource,
    R: BufRead,
    W: Write,
{
    let mut stats = Statistics::default();

    writeln!(out, "\n╔══════════════════════════════════════╗")?;
    writeln!(out, "║      Wordle Clone - Simple Mode      ║")?;
    writeln!(out, "╚══════════════════════════════════════╝\n")?;
    writeln!(
        out,
        "Guess the {}-letter word in {} tries.",
        engine.config().word_length(),
        engine.config().guess_allowance()
    )?;
    writeln!(out, "Words: {}", engine.source().describe())?;
    writeln!(out, "Commands: ':new' for a new round, ':quit' to exit\n")?;

    engine.start_round()?;

    loop {
        let Some(round) = engine.round() else {
            break;
        };

        if round.outcome().is_finished() {
            stats.record(round);
            write_board(&mut out, round)?;
            write_round_summary(&mut out, round, &stats)?;

            match read_line(&mut input, &mut out, "Play again? (yes/no)")?.as_deref() {
                Some("yes" | "y") => {
                    engine.start_round()?;
                    continue;
                }
                _ => break,
            }
        }

        write_board(&mut out, round)?;
        write_keyboard(&mut out, round)?;
        let prompt = format!(
            "Guess {}/{}",
            round.current_row() + 1,
            round.config().guess_allowance()
        );

        let Some(line) = read_line(&mut input, &mut out, &prompt)? else {
            break;
        };

        match line.as_str() {
            ":quit" | ":q" => break,
            ":new" | ":n" => {
                engine.start_round()?;
                writeln!(out, "\n🔄 New round started!\n")?;
            }
            guess => play_guess(engine, guess, &mut out)?,
        }
    }

    writeln!(out, "\n👋 Thanks for playing!\n")?;
    Ok(stats)
}

fn play_guess<S: DictionarySource, W: Write>(
    engine: &mut Engine<S>,
    guess: &str,
    out: &mut W,
) -> Result<()> {
    clear_row(engine);

    for ch in guess.chars() {
        if let Err(advisory) = engine.append_letter(ch) {
            writeln!(out, "{}\n", advisory.to_string().yellow())?;
            clear_row(engine);
            return Ok(());
        }
    }

    let submission = engine.submit_guess()?;
    if let Some(advisory) = submission.advisory {
        writeln!(out, "{}\n", advisory.to_string().yellow())?;
        clear_row(engine);
    }

    Ok(())
}

fn clear_row<S: DictionarySource>(engine: &mut Engine<S>) {
    while engine
        .round()
        .is_some_and(|round| !round.in_progress().is_empty())
    {
        engine.remove_last_letter();
    }
}

/// Prompt and read one trimmed, lowercased line; `None` at end of input
fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_lowercase()))
}
