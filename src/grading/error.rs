use std::fmt;

/// Reasons a single calculation is rejected. The first failing field wins;
/// no partial result is ever produced alongside one of these.
#[derive(Debug, Clone, PartialEq)]
pub enum GradeError {
    /// The raw field value is not a finite number
    InvalidNumber { field: String },
    /// The value parsed but falls outside the inclusive bounds
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        value: f64,
    },
    /// The weighting denominator rounds to zero
    ZeroCredits,
    /// The number of subjects is not an integer in 1..=max
    InvalidSubjectCount { max: usize },
}

impl fmt::Display for GradeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GradeError::InvalidNumber { field } => {
                write!(f, "Please enter a valid number for {}", field)
            }
            GradeError::OutOfRange { field, min, max, .. } => {
                write!(f, "{} should be between {} and {}", field, min, max)
            }
            GradeError::ZeroCredits => write!(f, "Total credits cannot be zero"),
            GradeError::InvalidSubjectCount { max } => {
                write!(f, "Please enter a valid number of subjects (1-{}).", max)
            }
        }
    }
}

impl std::error::Error for GradeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_number_message() {
        let err = GradeError::InvalidNumber {
            field: "Previous CGPA".to_string(),
        };
        assert_eq!(err.to_string(), "Please enter a valid number for Previous CGPA");
    }

    #[test]
    fn test_out_of_range_message_uses_plain_bounds() {
        let err = GradeError::OutOfRange {
            field: "Subject 1 credits".to_string(),
            min: 0.5,
            max: 6.0,
            value: 7.0,
        };
        assert_eq!(err.to_string(), "Subject 1 credits should be between 0.5 and 6");
    }

    #[test]
    fn test_subject_count_message() {
        let err = GradeError::InvalidSubjectCount { max: 20 };
        assert_eq!(
            err.to_string(),
            "Please enter a valid number of subjects (1-20)."
        );
    }

    #[test]
    fn test_usable_through_anyhow() {
        let err: anyhow::Error = GradeError::ZeroCredits.into();
        assert_eq!(
            err.downcast_ref::<GradeError>(),
            Some(&GradeError::ZeroCredits)
        );
    }
}
