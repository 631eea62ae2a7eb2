//! Display functions for game output

use super::formatters::{length_badge, score_line};
use crate::commands::{CheckResult, HintsResult};
use crate::game::Snapshot;
use crate::rules::Rejection;
use colored::Colorize;

/// Print the session banner
pub fn print_banner() {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "WORD SCRAMBLE".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!("\nSpell as many words as you can from the root word's letters.");
    println!("Commands: 'new' for a fresh root, 'quit' to exit\n");
}

/// Print the round: root word, score, and accepted words (most recent first)
pub fn print_round(snapshot: &Snapshot<'_>) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Root word: {}",
        snapshot.root_word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", score_line(snapshot.score).bright_white().bold());

    for word in snapshot.used_words {
        println!("  {} {}", length_badge(word).bright_black(), word);
    }
    println!("{}", "─".repeat(60).cyan());
}

/// Print a rejection's title and message, the terminal analog of the
/// reference UI's alert
pub fn print_rejection(rejection: &Rejection) {
    println!(
        "\n{} {}",
        rejection.title().red().bold(),
        rejection.message()
    );
}

/// Print the parting score line
pub fn print_goodbye(score: usize) {
    println!("\nFinal {}. Thanks for playing!\n", score_line(score));
}

/// Print the verdict of a one-shot check
pub fn print_check_result(result: &CheckResult) {
    match &result.verdict {
        Ok(points) => {
            println!(
                "{} '{}' plays from '{}' for {} points",
                "✓".green().bold(),
                result.word,
                result.root,
                points
            );
        }
        Err(rejection) => {
            println!(
                "{} '{}' rejected: {}",
                "✗".red().bold(),
                result.word,
                rejection
            );
        }
    }
}

/// Print the hint scan results
pub fn print_hints(result: &HintsResult, limit: Option<usize>) {
    let shown = limit.unwrap_or(result.hints.len()).min(result.hints.len());

    println!(
        "\n{} playable words from '{}' ({} scanned):",
        result.hints.len(),
        result.root.bright_yellow().bold(),
        result.scanned
    );

    for hint in &result.hints[..shown] {
        println!("  {} {}", length_badge(hint).bright_black(), hint);
    }

    if shown < result.hints.len() {
        println!("  ...and {} more", result.hints.len() - shown);
    }
}
