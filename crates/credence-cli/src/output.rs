//! Terminal output formatting.

use colored::{ColoredString, Colorize};
use credence_core::analysis::model::{AnalysisResult, Verdict};

/// Print a single analysis result.
pub fn print_result(result: &AnalysisResult) {
    println!();
    println!("{}     {}", "Verdict".bold(), verdict_colored(result.verdict));
    println!("{}       {}/10", "Score".bold(), score_colored(result.score));
    println!("{}  {}%", "Confidence".bold(), result.confidence);
    println!();
    println!("{}", result.explanation);

    print_list("Red Flags", &result.red_flags);
    print_list("Credibility Factors", &result.credibility_factors);
    print_list("Verification Tips", &result.tips);
}

fn print_list(title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }

    println!();
    println!("{}", title.bold());
    for item in items {
        println!("  {} {}", "·".dimmed(), item);
    }
}

fn verdict_colored(verdict: Verdict) -> ColoredString {
    match verdict {
        Verdict::Credible => "CREDIBLE".green().bold(),
        Verdict::Suspicious => "SUSPICIOUS".yellow().bold(),
        Verdict::Fake => "FAKE".red().bold(),
        Verdict::Mixed => "MIXED".magenta().bold(),
        Verdict::Unknown => "UNKNOWN".dimmed(),
    }
}

fn score_colored(score: u8) -> ColoredString {
    let s = score.to_string();
    match score {
        0..=3 => s.red(),
        4..=6 => s.yellow(),
        _ => s.green(),
    }
}
