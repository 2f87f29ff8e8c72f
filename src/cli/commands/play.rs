//! Play command - interactive two-player game in the terminal

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use tracing::warn;

use crate::{
    analysis::analyze,
    app::AnalysisConfig,
    cli::output::{format_number, format_sequence},
    tictactoe::{GameSession, LineAnalyzer, TurnOutcome},
};

#[derive(Parser, Debug)]
#[command(about = "Play tic-tac-toe in the terminal")]
pub struct PlayArgs {
    /// Number of sequences shown by `hint`
    #[arg(long, short = 'n', default_value_t = crate::app::DEFAULT_DISPLAY_LIMIT)]
    pub limit: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    Place(usize),
    Hint,
    Reset,
    Quit,
    Unknown,
}

fn parse_input(line: &str) -> Input {
    match line.trim().to_ascii_lowercase().as_str() {
        "hint" | "h" => Input::Hint,
        "reset" | "r" => Input::Reset,
        "quit" | "q" | "exit" => Input::Quit,
        other => other.parse().map(Input::Place).unwrap_or(Input::Unknown),
    }
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = AnalysisConfig::new().with_display_limit(args.limit);
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(stdin.lock(), stdout.lock(), &config)
}

/// Drive a game session from line-based input until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(input: R, mut out: W, config: &AnalysisConfig) -> Result<()> {
    let mut session = GameSession::new();
    writeln!(
        out,
        "Cells are numbered 0-8, left to right, top to bottom. Commands: hint, reset, quit."
    )?;
    prompt(&mut out, &session)?;

    for line in input.lines() {
        match parse_input(&line?) {
            Input::Place(position) => match session.play(position) {
                Ok(TurnOutcome::Continue { .. }) => {}
                Ok(TurnOutcome::Won { winner, board }) => {
                    writeln!(out, "{board}\n{winner} wins!")?;
                    if let Some(line) = LineAnalyzer::winning_line(board.cells(), winner) {
                        writeln!(out, "Winning line: {line:?}")?;
                    }
                }
                Ok(TurnOutcome::Draw { board }) => {
                    writeln!(out, "{board}\nDraw!")?;
                }
                Err(err) => {
                    warn!(position, "rejected move");
                    writeln!(out, "{err}")?;
                }
            },
            Input::Hint => print_hint(&mut out, &session, config)?,
            Input::Reset => session.reset(),
            Input::Quit => return Ok(()),
            Input::Unknown => writeln!(out, "Enter a cell 0-8, hint, reset or quit.")?,
        }
        prompt(&mut out, &session)?;
    }

    Ok(())
}

fn prompt<W: Write>(out: &mut W, session: &GameSession) -> Result<()> {
    writeln!(out, "\n{}", session.board())?;
    write!(out, "{} to move> ", session.to_move())?;
    out.flush()?;
    Ok(())
}

fn print_hint<W: Write>(out: &mut W, session: &GameSession, config: &AnalysisConfig) -> Result<()> {
    let to_move = session.to_move();
    let config = config.clone().with_maximizing(to_move);
    let report = analyze(session.board(), to_move, &config);

    writeln!(
        out,
        "{} possible continuations, showing {}:",
        format_number(report.total_sequences),
        report.sequences.len()
    )?;
    for (i, sequence) in report.sequences.iter().enumerate() {
        writeln!(out, "{}\n", format_sequence(i, sequence))?;
    }
    match report.best_position() {
        Some(position) => writeln!(out, "Best move for {to_move}: cell {position}")?,
        None => writeln!(out, "No moves left.")?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(script: &str) -> String {
        let mut out = Vec::new();
        run(script.as_bytes(), &mut out, &AnalysisConfig::new().with_display_limit(1)).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parses_commands_and_cells() {
        assert_eq!(parse_input(" 4 "), Input::Place(4));
        assert_eq!(parse_input("HINT"), Input::Hint);
        assert_eq!(parse_input("r"), Input::Reset);
        assert_eq!(parse_input("quit"), Input::Quit);
        assert_eq!(parse_input("nine"), Input::Unknown);
    }

    #[test]
    fn announces_a_win() {
        let transcript = play("0\n3\n1\n4\n2\nquit\n");
        assert!(transcript.contains("X X X\nO O -\n- - -\nX wins!"));
        assert!(transcript.contains("Winning line: [0, 1, 2]"));
        assert!(transcript.trim_end().ends_with("X to move>"));
    }

    #[test]
    fn occupied_cell_is_reported() {
        let transcript = play("4\n4\n");
        assert!(transcript.contains("already occupied"));
        assert!(transcript.trim_end().ends_with("O to move>"));
    }

    #[test]
    fn hint_suggests_the_winning_cell() {
        let transcript = play("0\n3\n1\n4\nhint\n");
        assert!(transcript.contains("Best move for X: cell 2"));
        assert!(transcript.contains("Sequence 1:"));
        assert!(transcript.contains("120 possible continuations, showing 1:"));
    }
}
