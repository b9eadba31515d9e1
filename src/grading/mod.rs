pub mod config;
pub mod engine;
pub mod error;
pub mod form;
pub mod remark;
pub mod scale;
pub mod validation;

pub use config::{Bounds, FieldRange};
pub use engine::{
    compute_cgpa, compute_gpa, gpa_breakdown, round2, ComputationResult, CumulativeInputs,
    SubjectContribution, SubjectEntry,
};
pub use error::GradeError;
pub use form::{
    cgpa_from_form, gpa_from_form, parse_cumulative, parse_subject_arg, parse_subject_count,
    parse_subjects, RawCumulative, RawSubject, DEFAULT_MAX_SUBJECTS,
};
pub use remark::{classify, Remark, PERFORMANCE_THRESHOLDS};
pub use scale::{Grade, GRADE_SCALE};
pub use validation::{validate, validate_bounds};
