use std::io::IsTerminal;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::grading::{ComputationResult, Remark, SubjectContribution};

/// Which average a result represents; the engine itself does not care
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreKind {
    Gpa,
    Cgpa,
}

impl ScoreKind {
    pub fn label(self) -> &'static str {
        match self {
            ScoreKind::Gpa => "GPA",
            ScoreKind::Cgpa => "CGPA",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Result card, colored when stdout is a terminal
    #[default]
    Human,
    Json,
    /// Tab-separated: kind, score, total credits, message
    Tsv,
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Two-decimal rendering used for scores and credit totals
pub fn format_score(value: f64) -> String {
    format!("{:.2}", value)
}

/// Format a result as the three-line card:
/// "Your GPA: 9.57", "Performance: ...", "Total Credits: 7.00"
pub fn format_result(kind: ScoreKind, result: &ComputationResult, use_colors: bool) -> String {
    let score = format_score(result.score);
    let credits = format_score(result.total_weight);
    let message = result.remark.message();

    if use_colors {
        let colored_message = match result.remark {
            Remark::Outstanding | Remark::Excellent => message.green().to_string(),
            Remark::Good | Remark::Satisfactory => message.yellow().to_string(),
            Remark::NeedsImprovement => message.red().to_string(),
        };
        format!(
            "Your {}: {}\nPerformance: {}\nTotal Credits: {}",
            kind.label(),
            score.bold(),
            colored_message,
            credits.cyan()
        )
    } else {
        format!(
            "Your {}: {}\nPerformance: {}\nTotal Credits: {}",
            kind.label(),
            score,
            message,
            credits
        )
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    kind: ScoreKind,
    score: f64,
    total_weight: f64,
    remark: Remark,
    message: &'a str,
}

pub fn format_json(kind: ScoreKind, result: &ComputationResult) -> Result<String> {
    let report = JsonReport {
        kind,
        score: result.score,
        total_weight: result.total_weight,
        remark: result.remark,
        message: result.remark.message(),
    };
    serde_json::to_string(&report).context("Failed to serialize result")
}

/// Format a result as tab-separated values for scripting (no headers, no colors)
pub fn format_tsv(kind: ScoreKind, result: &ComputationResult) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        kind.label().to_lowercase(),
        format_score(result.score),
        format_score(result.total_weight),
        result.remark.message()
    )
}

/// Per-subject table shown in verbose mode
pub fn format_breakdown(rows: &[SubjectContribution], use_colors: bool) -> String {
    if rows.is_empty() {
        return "No subjects.".to_string();
    }

    rows.iter()
        .enumerate()
        .map(|(idx, row)| {
            let index_str = format!("{:>2}.", idx + 1);
            let line = format!(
                "{:>6} credits  {}  ({:>2} pts)  {:>7}",
                format_score(row.credit),
                row.grade,
                row.points,
                format_score(row.weighted_points)
            );
            if use_colors {
                format!("{} {}", index_str.dimmed(), line)
            } else {
                format!("{} {}", index_str, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grading::{compute_gpa, gpa_breakdown, Grade, SubjectEntry};

    fn sample_result() -> ComputationResult {
        compute_gpa(&[
            SubjectEntry::new(3.0, Grade::A),
            SubjectEntry::new(4.0, Grade::S),
        ])
        .unwrap()
    }

    #[test]
    fn test_format_score_pads_decimals() {
        assert_eq!(format_score(7.0), "7.00");
        assert_eq!(format_score(9.5), "9.50");
        assert_eq!(format_score(8.25), "8.25");
    }

    #[test]
    fn test_format_result_plain() {
        let result = format_result(ScoreKind::Gpa, &sample_result(), false);
        assert_eq!(
            result,
            "Your GPA: 9.57\nPerformance: Outstanding Performance!\nTotal Credits: 7.00"
        );
    }

    #[test]
    fn test_format_result_cgpa_label() {
        let result = format_result(ScoreKind::Cgpa, &sample_result(), false);
        assert!(result.starts_with("Your CGPA: 9.57"));
    }

    #[test]
    fn test_format_result_colored_keeps_text() {
        let result = format_result(ScoreKind::Gpa, &sample_result(), true);
        assert!(result.contains("Outstanding Performance!"));
        assert!(result.contains("9.57"));
    }

    #[test]
    fn test_format_json() {
        let json = format_json(ScoreKind::Gpa, &sample_result()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["kind"], "gpa");
        assert_eq!(value["score"], 9.57);
        assert_eq!(value["total_weight"], 7.0);
        assert_eq!(value["remark"], "outstanding");
        assert_eq!(value["message"], "Outstanding Performance!");
    }

    #[test]
    fn test_format_tsv() {
        assert_eq!(
            format_tsv(ScoreKind::Cgpa, &sample_result()),
            "cgpa\t9.57\t7.00\tOutstanding Performance!"
        );
    }

    #[test]
    fn test_format_breakdown() {
        let rows = gpa_breakdown(&[
            SubjectEntry::new(3.0, Grade::A),
            SubjectEntry::new(4.0, Grade::S),
        ]);
        let output = format_breakdown(&rows, false);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with(" 1."));
        assert!(lines[0].contains("3.00 credits  A"));
        assert!(lines[0].contains("27.00"));
        assert!(lines[1].contains("40.00"));
    }

    #[test]
    fn test_format_breakdown_empty() {
        assert_eq!(format_breakdown(&[], false), "No subjects.");
    }
}
