use std::time::{Duration, Instant};

use crate::config::Config;
use crate::grading::{
    cgpa_from_form, gpa_from_form, parse_subject_count, Bounds, ComputationResult, GradeError,
    Grade, RawCumulative, RawSubject,
};
use crate::output::ScoreKind;
use crate::tui::animation::CountUp;
use crate::tui::theme::Theme;

const FLASH_SECS: u64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Gpa,
    Cgpa,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CgpaField {
    PreviousCgpa,
    CurrentGpa,
    TotalCredits,
    CurrentCredits,
}

impl CgpaField {
    pub const ALL: [CgpaField; 4] = [
        CgpaField::PreviousCgpa,
        CgpaField::CurrentGpa,
        CgpaField::TotalCredits,
        CgpaField::CurrentCredits,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CgpaField::PreviousCgpa => "Previous CGPA",
            CgpaField::CurrentGpa => "Current GPA",
            CgpaField::TotalCredits => "Total Credits",
            CgpaField::CurrentCredits => "Current Credits",
        }
    }
}

/// A focusable input on the current tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    SubjectCount,
    Credit(usize),
    Grade(usize),
    Cgpa(CgpaField),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct ResultCard {
    pub kind: ScoreKind,
    pub result: ComputationResult,
    pub count_up: CountUp,
}

pub struct App {
    pub tab: Tab,
    pub input_mode: InputMode,
    pub subject_count_input: String,
    pub subjects: Vec<RawSubject>,
    pub cgpa: RawCumulative,
    pub focus: usize,
    pub result: Option<ResultCard>,
    pub flash_message: Option<(String, FlashKind, Instant)>,
    pub theme: Theme,
    pub bounds: Bounds,
    pub max_subjects: usize,
    pub animation: Duration,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &Config, theme: Theme) -> Self {
        Self {
            tab: Tab::Gpa,
            input_mode: InputMode::Normal,
            subject_count_input: String::new(),
            subjects: Vec::new(),
            cgpa: RawCumulative::default(),
            focus: 0,
            result: None,
            flash_message: None,
            theme,
            bounds: config.effective_bounds(),
            max_subjects: config.max_subjects(),
            animation: config.animation_duration(),
            should_quit: false,
        }
    }

    /// Focus order of the current tab
    pub fn fields(&self) -> Vec<Field> {
        match self.tab {
            Tab::Gpa => {
                let mut fields = vec![Field::SubjectCount];
                for i in 0..self.subjects.len() {
                    fields.push(Field::Credit(i));
                    fields.push(Field::Grade(i));
                }
                fields
            }
            Tab::Cgpa => CgpaField::ALL.iter().map(|f| Field::Cgpa(*f)).collect(),
        }
    }

    pub fn focused_field(&self) -> Field {
        let fields = self.fields();
        fields
            .get(self.focus)
            .copied()
            .unwrap_or(fields[0])
    }

    pub fn next_field(&mut self) {
        let len = self.fields().len();
        self.focus = if self.focus + 1 >= len { 0 } else { self.focus + 1 };
    }

    pub fn previous_field(&mut self) {
        let len = self.fields().len();
        self.focus = if self.focus == 0 { len - 1 } else { self.focus - 1 };
    }

    /// Switch between the GPA and CGPA calculators; any shown result is cleared
    pub fn switch_tab(&mut self) {
        self.tab = match self.tab {
            Tab::Gpa => Tab::Cgpa,
            Tab::Cgpa => Tab::Gpa,
        };
        self.focus = 0;
        self.result = None;
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    /// Mutable text behind a numeric field; grade pickers have none
    fn text_field_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::SubjectCount => Some(&mut self.subject_count_input),
            Field::Credit(i) => self.subjects.get_mut(i).map(|s| &mut s.credits),
            Field::Grade(_) => None,
            Field::Cgpa(CgpaField::PreviousCgpa) => Some(&mut self.cgpa.previous_cgpa),
            Field::Cgpa(CgpaField::CurrentGpa) => Some(&mut self.cgpa.current_gpa),
            Field::Cgpa(CgpaField::TotalCredits) => Some(&mut self.cgpa.total_credits),
            Field::Cgpa(CgpaField::CurrentCredits) => Some(&mut self.cgpa.current_credits),
        }
    }

    pub fn text_value(&self, field: Field) -> Option<&str> {
        let text = match field {
            Field::SubjectCount => &self.subject_count_input,
            Field::Credit(i) => &self.subjects.get(i)?.credits,
            Field::Grade(_) => return None,
            Field::Cgpa(CgpaField::PreviousCgpa) => &self.cgpa.previous_cgpa,
            Field::Cgpa(CgpaField::CurrentGpa) => &self.cgpa.current_gpa,
            Field::Cgpa(CgpaField::TotalCredits) => &self.cgpa.total_credits,
            Field::Cgpa(CgpaField::CurrentCredits) => &self.cgpa.current_credits,
        };
        Some(text.as_str())
    }

    /// Type a character into the focused field.
    /// Number fields take digits (and '.' unless integer-only); grade pickers take a grade letter.
    pub fn input_char(&mut self, c: char) {
        let field = self.focused_field();
        if let Field::Grade(i) = field {
            if let (Some(grade), Some(row)) = (Grade::from_letter(c), self.subjects.get_mut(i)) {
                row.grade = grade;
            }
            return;
        }

        let allow_dot = !matches!(field, Field::SubjectCount);
        if let Some(text) = self.text_field_mut(field) {
            if c.is_ascii_digit() || (allow_dot && c == '.' && !text.contains('.')) {
                text.push(c);
            }
        }
    }

    pub fn backspace(&mut self) {
        let field = self.focused_field();
        if let Some(text) = self.text_field_mut(field) {
            text.pop();
        }
    }

    /// Step the focused grade picker; `forward` moves down the scale
    pub fn cycle_grade(&mut self, forward: bool) {
        if let Field::Grade(i) = self.focused_field() {
            if let Some(row) = self.subjects.get_mut(i) {
                row.grade = if forward { row.grade.next() } else { row.grade.previous() };
            }
        }
    }

    /// Enter generates rows from the subject-count field and calculates anywhere else
    pub fn submit(&mut self) {
        if self.focused_field() == Field::SubjectCount {
            self.generate_subjects();
        } else {
            self.calculate();
        }
    }

    /// Replace the subject rows with N blank rows
    pub fn generate_subjects(&mut self) {
        match parse_subject_count(&self.subject_count_input, self.max_subjects) {
            Ok(count) => {
                self.subjects = vec![RawSubject::default(); count];
                self.focus = 1; // First credit field
                tracing::debug!(count, "generated subject rows");
                self.show_flash(format!("Generated {} subject rows", count), FlashKind::Success);
            }
            Err(e) => self.show_error(e),
        }
    }

    pub fn calculate(&mut self) {
        let (kind, outcome) = match self.tab {
            Tab::Gpa => (ScoreKind::Gpa, gpa_from_form(&self.subjects, &self.bounds)),
            Tab::Cgpa => (ScoreKind::Cgpa, cgpa_from_form(&self.cgpa, &self.bounds)),
        };

        match outcome {
            Ok(result) => {
                tracing::debug!(
                    kind = kind.label(),
                    score = result.score,
                    total_weight = result.total_weight,
                    "calculation succeeded"
                );
                self.result = Some(ResultCard {
                    kind,
                    result,
                    count_up: CountUp::new(result.score, self.animation),
                });
                self.show_flash(format!("{} calculated", kind.label()), FlashKind::Success);
            }
            // The previous result card stays as it was
            Err(e) => self.show_error(e),
        }
    }

    fn show_error(&mut self, error: GradeError) {
        tracing::debug!(%error, "input rejected");
        self.show_flash(error.to_string(), FlashKind::Error);
    }

    pub fn show_flash(&mut self, msg: String, kind: FlashKind) {
        self.flash_message = Some((msg, kind, Instant::now()));
    }

    pub fn update_flash(&mut self) {
        if let Some((_, _, timestamp)) = self.flash_message {
            if timestamp.elapsed().as_secs() >= FLASH_SECS {
                self.flash_message = None;
            }
        }
    }

    pub fn show_help(&mut self) {
        self.input_mode = InputMode::Help;
    }

    pub fn dismiss_help(&mut self) {
        self.input_mode = InputMode::Normal;
    }
}
