use serde::{Deserialize, Serialize};

use super::error::GradeError;
use super::validation::validate;

/// Inclusive validation range for one numeric field.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FieldRange {
    pub min: f64,
    pub max: f64,
}

impl FieldRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Parse and range-check a raw field value against this range
    pub fn validate(&self, raw: &str, field: &str) -> Result<f64, GradeError> {
        validate(raw, self.min, self.max, field)
    }
}

/// Validation ranges for every bounded input of the calculator.
///
/// Example YAML:
/// ```yaml
/// bounds:
///   subject_credits: { min: 0.5, max: 6.0 }
///   average: { min: 0, max: 10 }
///   total_credits: { min: 0.5, max: 200 }
///   current_credits: { min: 0.5, max: 31 }
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Bounds {
    /// Credits of a single subject in the GPA form
    #[serde(default = "default_subject_credits")]
    pub subject_credits: FieldRange,

    /// Previous CGPA and current GPA in the CGPA form
    #[serde(default = "default_average")]
    pub average: FieldRange,

    /// Credits already earned before the current term
    #[serde(default = "default_total_credits")]
    pub total_credits: FieldRange,

    /// Credits of the current term
    #[serde(default = "default_current_credits")]
    pub current_credits: FieldRange,
}

fn default_subject_credits() -> FieldRange {
    FieldRange::new(0.5, 6.0)
}

fn default_average() -> FieldRange {
    FieldRange::new(0.0, 10.0)
}

fn default_total_credits() -> FieldRange {
    FieldRange::new(0.5, 200.0)
}

fn default_current_credits() -> FieldRange {
    FieldRange::new(0.5, 31.0)
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            subject_credits: default_subject_credits(),
            average: default_average(),
            total_credits: default_total_credits(),
            current_credits: default_current_credits(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bounds() {
        let bounds = Bounds::default();
        assert_eq!(bounds.subject_credits, FieldRange::new(0.5, 6.0));
        assert_eq!(bounds.average, FieldRange::new(0.0, 10.0));
        assert_eq!(bounds.total_credits, FieldRange::new(0.5, 200.0));
        assert_eq!(bounds.current_credits, FieldRange::new(0.5, 31.0));
    }

    #[test]
    fn test_partial_bounds_parse() {
        let yaml = r#"
subject_credits:
  min: 1
  max: 4
"#;
        let bounds: Bounds = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(bounds.subject_credits, FieldRange::new(1.0, 4.0));
        assert_eq!(bounds.average, FieldRange::new(0.0, 10.0));
    }

    #[test]
    fn test_empty_bounds_parse() {
        let bounds: Bounds = serde_saphyr::from_str("{}").unwrap();
        assert_eq!(bounds, Bounds::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let yaml = "credits: { min: 1, max: 2 }";
        assert!(serde_saphyr::from_str::<Bounds>(yaml).is_err());
    }

    #[test]
    fn test_field_range_validate() {
        let range = FieldRange::new(0.5, 31.0);
        assert_eq!(range.validate("20", "Current Credits"), Ok(20.0));
        assert!(range.validate("32", "Current Credits").is_err());
    }
}
