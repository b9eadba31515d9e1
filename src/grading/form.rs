//! Raw-string entry points for the two calculator forms.
//!
//! Callers hand over field values exactly as typed; every value goes through
//! [`validate`](super::validation::validate) before it reaches the engine.
//! The first failing field aborts the whole calculation.

use anyhow::{bail, Context, Result};

use super::config::Bounds;
use super::engine::{compute_cgpa, compute_gpa, ComputationResult, CumulativeInputs, SubjectEntry};
use super::error::GradeError;
use super::scale::Grade;
use super::validation::validate;

/// Default cap on generated subject rows
pub const DEFAULT_MAX_SUBJECTS: usize = 20;

/// A subject row before validation
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawSubject {
    pub credits: String,
    pub grade: Grade,
}

impl RawSubject {
    pub fn new(credits: impl Into<String>, grade: Grade) -> Self {
        Self {
            credits: credits.into(),
            grade,
        }
    }
}

/// The CGPA form before validation
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawCumulative {
    pub previous_cgpa: String,
    pub current_gpa: String,
    pub total_credits: String,
    pub current_credits: String,
}

/// Validate every row in order and build engine entries
pub fn parse_subjects(rows: &[RawSubject], bounds: &Bounds) -> Result<Vec<SubjectEntry>, GradeError> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            let field = format!("Subject {} credits", i + 1);
            let credit = bounds.subject_credits.validate(&row.credits, &field)?;
            Ok(SubjectEntry::new(credit, row.grade))
        })
        .collect()
}

pub fn gpa_from_form(rows: &[RawSubject], bounds: &Bounds) -> Result<ComputationResult, GradeError> {
    let entries = parse_subjects(rows, bounds)?;
    compute_gpa(&entries)
}

/// Validate the four CGPA fields in form order
pub fn parse_cumulative(raw: &RawCumulative, bounds: &Bounds) -> Result<CumulativeInputs, GradeError> {
    let previous_average = bounds.average.validate(&raw.previous_cgpa, "Previous CGPA")?;
    let current_average = bounds.average.validate(&raw.current_gpa, "Current GPA")?;
    let previous_credits = bounds.total_credits.validate(&raw.total_credits, "Total Credits")?;
    let current_credits = bounds
        .current_credits
        .validate(&raw.current_credits, "Current Credits")?;

    Ok(CumulativeInputs::new(
        previous_average,
        previous_credits,
        current_average,
        current_credits,
    ))
}

pub fn cgpa_from_form(raw: &RawCumulative, bounds: &Bounds) -> Result<ComputationResult, GradeError> {
    let inputs = parse_cumulative(raw, bounds)?;
    compute_cgpa(&inputs)
}

/// Parse the "number of subjects" field: a whole number in 1..=max
pub fn parse_subject_count(raw: &str, max: usize) -> Result<usize, GradeError> {
    let value = validate(raw, 1.0, max as f64, "Number of subjects")
        .map_err(|_| GradeError::InvalidSubjectCount { max })?;

    if value.fract() != 0.0 {
        return Err(GradeError::InvalidSubjectCount { max });
    }

    Ok(value as usize)
}

/// Parse a `CREDITS:GRADE` command-line argument such as `3.5:A`.
///
/// Credits stay a raw string so the validator reports them with the
/// same field naming as the interactive form.
pub fn parse_subject_arg(arg: &str) -> Result<RawSubject> {
    let Some((credits, grade)) = arg.trim().rsplit_once(':') else {
        bail!("Expected CREDITS:GRADE (e.g. 3:A), got '{}'", arg);
    };

    if credits.trim().is_empty() {
        bail!("Missing credits in '{}'", arg);
    }

    let grade: Grade = grade
        .parse()
        .with_context(|| format!("Invalid subject '{}'", arg))?;

    Ok(RawSubject::new(credits.trim(), grade))
}
