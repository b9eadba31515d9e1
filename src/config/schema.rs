use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::grading::{Bounds, DEFAULT_MAX_SUBJECTS};

/// Count-up duration when none is configured
pub const DEFAULT_ANIMATION: &str = "1s";

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Validation ranges; missing fields fall back to the standard ranges
    #[serde(default)]
    pub bounds: Option<Bounds>,

    /// Upper limit for the "number of subjects" field
    #[serde(default)]
    pub max_subjects: Option<usize>,

    #[serde(default)]
    pub theme: Option<ThemeMode>,

    /// Duration of the score count-up, e.g. "1s" or "750ms"
    #[serde(default)]
    pub animation: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Auto,
    Dark,
    Light,
}

impl Config {
    /// Config written by `gpa-calc init`: every setting spelled out
    pub fn with_defaults() -> Self {
        Self {
            bounds: Some(Bounds::default()),
            max_subjects: Some(DEFAULT_MAX_SUBJECTS),
            theme: Some(ThemeMode::Auto),
            animation: Some(DEFAULT_ANIMATION.to_string()),
        }
    }

    pub fn effective_bounds(&self) -> Bounds {
        self.bounds.clone().unwrap_or_default()
    }

    pub fn max_subjects(&self) -> usize {
        self.max_subjects.unwrap_or(DEFAULT_MAX_SUBJECTS)
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.theme.unwrap_or_default()
    }

    /// Parsed count-up duration; invalid strings are caught by `validate_config`
    pub fn animation_duration(&self) -> Duration {
        self.animation
            .as_deref()
            .and_then(|s| humantime::parse_duration(s.trim()).ok())
            .unwrap_or(Duration::from_secs(1))
    }
}
