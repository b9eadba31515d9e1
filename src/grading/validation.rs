use super::config::{Bounds, FieldRange};
use super::error::GradeError;

/// Parse a raw field value and check it against inclusive bounds.
///
/// The same check backs every numeric field of both forms, so error
/// messages stay consistent across them.
pub fn validate(raw: &str, min: f64, max: f64, field: &str) -> Result<f64, GradeError> {
    let value: f64 = match raw.trim().parse() {
        Ok(v) => v,
        Err(_) => {
            return Err(GradeError::InvalidNumber {
                field: field.to_string(),
            })
        }
    };

    if !value.is_finite() {
        return Err(GradeError::InvalidNumber {
            field: field.to_string(),
        });
    }

    if value < min || value > max {
        return Err(GradeError::OutOfRange {
            field: field.to_string(),
            min,
            max,
            value,
        });
    }

    Ok(value)
}

/// Validate configured bounds at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_bounds(bounds: &Bounds) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let fields = [
        ("subject_credits", &bounds.subject_credits),
        ("average", &bounds.average),
        ("total_credits", &bounds.total_credits),
        ("current_credits", &bounds.current_credits),
    ];

    for (name, range) in fields {
        check_range(name, range, &mut errors);
    }

    // Averages live on the grade-point scale
    if bounds.average.min < 0.0 || bounds.average.max > 10.0 {
        errors.push("bounds.average: must stay within 0-10".to_string());
    }

    // A zero credit minimum would let the weighting denominator reach zero
    for (name, range) in [
        ("subject_credits", &bounds.subject_credits),
        ("total_credits", &bounds.total_credits),
        ("current_credits", &bounds.current_credits),
    ] {
        if range.min <= 0.0 {
            errors.push(format!("bounds.{}.min: must be greater than 0", name));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_range(name: &str, range: &FieldRange, errors: &mut Vec<String>) {
    if !range.min.is_finite() || !range.max.is_finite() {
        errors.push(format!("bounds.{}: min and max must be finite numbers", name));
        return;
    }
    if range.min > range.max {
        errors.push(format!(
            "bounds.{}: min ({}) is greater than max ({})",
            name, range.min, range.max
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_upper_bound_inclusive() {
        assert_eq!(validate("6.0", 0.5, 6.0, "x"), Ok(6.0));
    }

    #[test]
    fn test_validate_lower_bound_inclusive() {
        assert_eq!(validate("0.5", 0.5, 6.0, "x"), Ok(0.5));
    }

    #[test]
    fn test_validate_just_above_max() {
        let err = validate("6.01", 0.5, 6.0, "x").unwrap_err();
        assert_eq!(
            err,
            GradeError::OutOfRange {
                field: "x".to_string(),
                min: 0.5,
                max: 6.0,
                value: 6.01,
            }
        );
    }

    #[test]
    fn test_validate_below_min() {
        assert!(matches!(
            validate("0.4", 0.5, 6.0, "x"),
            Err(GradeError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_validate_not_a_number() {
        assert_eq!(
            validate("abc", 0.5, 6.0, "x"),
            Err(GradeError::InvalidNumber {
                field: "x".to_string()
            })
        );
    }

    #[test]
    fn test_validate_empty_is_invalid_number() {
        assert!(matches!(
            validate("", 0.0, 10.0, "Current GPA"),
            Err(GradeError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        assert!(matches!(
            validate("inf", 0.0, 10.0, "x"),
            Err(GradeError::InvalidNumber { .. })
        ));
        assert!(matches!(
            validate("NaN", 0.0, 10.0, "x"),
            Err(GradeError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn test_validate_trims_whitespace() {
        assert_eq!(validate(" 3.5 ", 0.5, 6.0, "x"), Ok(3.5));
    }

    #[test]
    fn test_default_bounds_valid() {
        assert!(validate_bounds(&Bounds::default()).is_ok());
    }

    #[test]
    fn test_inverted_range() {
        let bounds = Bounds {
            subject_credits: FieldRange::new(6.0, 0.5),
            ..Bounds::default()
        };
        let errors = validate_bounds(&bounds).unwrap_err();
        assert!(errors[0].contains("bounds.subject_credits"));
    }

    #[test]
    fn test_average_outside_scale() {
        let bounds = Bounds {
            average: FieldRange::new(0.0, 12.0),
            ..Bounds::default()
        };
        let errors = validate_bounds(&bounds).unwrap_err();
        assert!(errors[0].contains("bounds.average"));
    }

    #[test]
    fn test_zero_credit_minimum() {
        let bounds = Bounds {
            current_credits: FieldRange::new(0.0, 31.0),
            ..Bounds::default()
        };
        let errors = validate_bounds(&bounds).unwrap_err();
        assert_eq!(errors, vec!["bounds.current_credits.min: must be greater than 0"]);
    }

    #[test]
    fn test_collects_all_errors() {
        let bounds = Bounds {
            subject_credits: FieldRange::new(6.0, 0.5), // Error 1
            average: FieldRange::new(-1.0, 10.0),       // Error 2
            total_credits: FieldRange::new(0.0, 200.0), // Error 3
            ..Bounds::default()
        };
        let errors = validate_bounds(&bounds).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
