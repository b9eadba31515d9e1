use gpa_calc::grading::{
    cgpa_from_form, gpa_from_form, parse_subject_count, Bounds, Grade, GradeError, RawCumulative,
    RawSubject,
};

fn cumulative(prev: &str, cur: &str, total: &str, current: &str) -> RawCumulative {
    RawCumulative {
        previous_cgpa: prev.to_string(),
        current_gpa: cur.to_string(),
        total_credits: total.to_string(),
        current_credits: current.to_string(),
    }
}

#[test]
fn cgpa_form_reports_first_bad_field() {
    let raw = cumulative("abc", "11", "0", "40");
    let err = cgpa_from_form(&raw, &Bounds::default()).unwrap_err();
    assert_eq!(err.to_string(), "Please enter a valid number for Previous CGPA");
}

#[test]
fn cgpa_form_uses_typed_precision() {
    let result = cgpa_from_form(&cumulative("8.125", "8", "10", "10"), &Bounds::default()).unwrap();
    assert_eq!(result.score, 8.06);
    assert_eq!(result.total_weight, 20.0);
}

#[test]
fn gpa_form_reports_first_bad_row() {
    let rows = vec![
        RawSubject::new("3", Grade::A),
        RawSubject::new("7", Grade::S),
        RawSubject::new("x", Grade::B),
    ];
    let err = gpa_from_form(&rows, &Bounds::default()).unwrap_err();
    assert_eq!(err.to_string(), "Subject 2 credits should be between 0.5 and 6");
}

#[test]
fn gpa_form_trims_typed_credits() {
    let rows = vec![
        RawSubject::new("3", Grade::A),
        RawSubject::new(" 4 ", Grade::S),
    ];
    let result = gpa_from_form(&rows, &Bounds::default()).unwrap();
    assert_eq!(result.score, 9.57);
    assert_eq!(result.total_weight, 7.0);
}

#[test]
fn subject_count_bounds() {
    assert_eq!(parse_subject_count("1", 20), Ok(1));
    assert_eq!(parse_subject_count("20", 20), Ok(20));
    for bad in ["0", "21", "2.5", "", "two"] {
        assert_eq!(
            parse_subject_count(bad, 20),
            Err(GradeError::InvalidSubjectCount { max: 20 }),
            "{:?}",
            bad
        );
    }
}
