use serde::Serialize;

use super::error::GradeError;
use super::remark::{classify, Remark};
use super::scale::Grade;

/// Round to two decimal places, halves away from zero.
///
/// Applied to subject credits, each GPA running sum, and every reported
/// score and credit total, so float drift never shows up in the displayed figures.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// One row of the GPA form
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubjectEntry {
    credit: f64,
    grade: Grade,
}

impl SubjectEntry {
    /// Credit is stored rounded to two decimals
    pub fn new(credit: f64, grade: Grade) -> Self {
        Self {
            credit: round2(credit),
            grade,
        }
    }

    pub fn credit(&self) -> f64 {
        self.credit
    }

    pub fn grade(&self) -> Grade {
        self.grade
    }
}

/// Inputs of the CGPA form
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CumulativeInputs {
    previous_average: f64,
    previous_credits: f64,
    current_average: f64,
    current_credits: f64,
}

impl CumulativeInputs {
    /// Values are kept as validated; only the blended result is rounded
    pub fn new(
        previous_average: f64,
        previous_credits: f64,
        current_average: f64,
        current_credits: f64,
    ) -> Self {
        Self {
            previous_average,
            previous_credits,
            current_average,
            current_credits,
        }
    }

    pub fn previous_average(&self) -> f64 {
        self.previous_average
    }

    pub fn previous_credits(&self) -> f64 {
        self.previous_credits
    }

    pub fn current_average(&self) -> f64 {
        self.current_average
    }

    pub fn current_credits(&self) -> f64 {
        self.current_credits
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComputationResult {
    pub score: f64,
    pub total_weight: f64,
    pub remark: Remark,
}

impl ComputationResult {
    fn new(score: f64, total_weight: f64) -> Self {
        Self {
            score,
            total_weight,
            remark: classify(score),
        }
    }
}

/// Per-subject contribution, for verbose output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectContribution {
    pub credit: f64,
    pub grade: Grade,
    pub points: u32,
    pub weighted_points: f64,
}

/// Credit-weighted average of grade points.
///
/// Both running sums are rounded after every addition, not once at the end;
/// long lists can differ from a single final rounding in the last digit.
pub fn compute_gpa(entries: &[SubjectEntry]) -> Result<ComputationResult, GradeError> {
    let mut total_credits = 0.0;
    let mut weighted_points = 0.0;

    for entry in entries {
        total_credits = round2(total_credits + entry.credit);
        weighted_points = round2(weighted_points + entry.credit * entry.grade.points() as f64);
    }

    if total_credits == 0.0 {
        return Err(GradeError::ZeroCredits);
    }

    let score = round2(weighted_points / total_credits);
    Ok(ComputationResult::new(score, total_credits))
}

/// Blend a previous cumulative average with the current term's average,
/// weighted by credits.
pub fn compute_cgpa(inputs: &CumulativeInputs) -> Result<ComputationResult, GradeError> {
    let raw_total = inputs.previous_credits + inputs.current_credits;
    let total_credits = round2(raw_total);

    if total_credits == 0.0 {
        return Err(GradeError::ZeroCredits);
    }

    let weighted = inputs.previous_average * inputs.previous_credits
        + inputs.current_average * inputs.current_credits;
    let score = round2(weighted / raw_total);

    Ok(ComputationResult::new(score, total_credits))
}

pub fn gpa_breakdown(entries: &[SubjectEntry]) -> Vec<SubjectContribution> {
    entries
        .iter()
        .map(|entry| {
            let points = entry.grade.points();
            SubjectContribution {
                credit: entry.credit,
                grade: entry.grade,
                points,
                weighted_points: round2(entry.credit * points as f64),
            }
        })
        .collect()
}
