//! Output formatting and progress indicators for the CLI

use anyhow::{Result, anyhow};
use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    analysis::{AnalysisReport, MoveSequence},
    tictactoe::Board,
};

/// Create a spinner for long-running tree construction
pub fn create_spinner(message: &str) -> Result<ProgressBar> {
    let style = ProgressStyle::default_spinner()
        .template("{spinner:.green} {msg} [{elapsed_precise}]")
        .map_err(|e| anyhow!("invalid spinner template: {e}"))?;
    let pb = ProgressBar::new_spinner();
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    Ok(pb)
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(40));
    println!("{title}");
    println!("{}", "=".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Format a number with thousands separators
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Render one sequence as a numbered block of boards separated by blank lines
pub fn format_sequence(index: usize, sequence: &MoveSequence) -> String {
    let boards: Vec<String> = sequence.boards.iter().map(Board::to_string).collect();
    format!("Sequence {}:\n{}", index + 1, boards.join("\n\n"))
}

/// Print the text form of an analysis report
pub fn print_report(report: &AnalysisReport) {
    print_section("Position");
    println!("{}", report.root);
    print_kv("To move", &report.to_move.to_string());
    print_kv("Maximizing", &report.maximizing.to_string());
    print_kv("Sequences", &format_number(report.total_sequences));

    if !report.sequences.is_empty() {
        print_section(&format!(
            "First {} of {} sequences",
            report.sequences.len(),
            format_number(report.total_sequences)
        ));
        let blocks: Vec<String> = report
            .sequences
            .iter()
            .enumerate()
            .map(|(i, seq)| format_sequence(i, seq))
            .collect();
        println!("{}", blocks.join("\n\n"));
    }

    print_section("Candidate moves");
    if report.candidates.is_empty() {
        println!("  (board is full)");
    }
    for candidate in &report.candidates {
        print_kv(
            &format!("Cell {}", candidate.position),
            &format!("{:+}", candidate.value),
        );
    }

    print_section("Best move");
    match (report.best_position(), report.best_move) {
        (Some(position), Some(board)) => {
            println!("Cell {position}");
            println!("{board}");
        }
        _ => println!("none"),
    }
}
