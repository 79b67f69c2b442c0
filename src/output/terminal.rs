// Colored terminal output for summaries and keyword tables.
//
// The display line itself is printed plain so it can be piped; everything
// around it (headers, score bars) is decoration for humans.

use colored::Colorize;

use crate::digest::ScoredKeyword;

/// Width of the widest score bar.
const BAR_WIDTH: usize = 20;

/// Print a summary line, with the source utterance dimmed above it.
pub fn display_summary(text: &str, summary: &str) {
    println!("{}", super::truncate_chars(text.trim(), 72).dimmed());
    println!("{}", summary.bold());
}

/// Print ranked keywords, optionally with their counts and score bars.
pub fn display_keywords(keywords: &[ScoredKeyword], show_scores: bool) {
    if keywords.is_empty() {
        println!("{}", "No keywords found.".yellow());
        return;
    }

    if !show_scores {
        for kw in keywords {
            println!("{}", kw.token);
        }
        return;
    }

    println!(
        "\n{}",
        format!("=== Keywords ({}) ===", keywords.len()).bold()
    );
    println!();
    println!(
        "  {:>4}  {:<24} {:>5}  {:>6}",
        "Rank".dimmed(),
        "Keyword".dimmed(),
        "Count".dimmed(),
        "Score".dimmed(),
    );
    println!("  {}", "-".repeat(64).dimmed());

    let max_score = keywords.first().map(|k| k.score).unwrap_or(1.0);

    for (i, kw) in keywords.iter().enumerate() {
        let filled = if max_score > 0.0 {
            ((kw.score / max_score) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        let bar = format!(
            "[{}{}]",
            "=".repeat(filled),
            " ".repeat(BAR_WIDTH.saturating_sub(filled))
        );

        let colored_bar = if kw.count >= 3 {
            bar.bright_green()
        } else if kw.count == 2 {
            bar.bright_yellow()
        } else {
            bar.bright_blue()
        };

        println!(
            "  {:>4}. {:<24} {:>5}  {:>6.1}  {}",
            i + 1,
            kw.token,
            kw.count,
            kw.score,
            colored_bar
        );
    }
    println!();
}
