use serde::{Deserialize, Serialize};

/// Qualitative performance tier derived from a rounded score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Remark {
    Outstanding,
    Excellent,
    Good,
    Satisfactory,
    NeedsImprovement,
}

/// Minimum score per tier, highest threshold first
pub const PERFORMANCE_THRESHOLDS: [(f64, Remark); 5] = [
    (9.0, Remark::Outstanding),
    (8.0, Remark::Excellent),
    (7.0, Remark::Good),
    (6.0, Remark::Satisfactory),
    (0.0, Remark::NeedsImprovement),
];

/// Return the first tier whose threshold is at or below `score`.
/// Anything below the last threshold (negative scores) lands in the lowest tier.
pub fn classify(score: f64) -> Remark {
    PERFORMANCE_THRESHOLDS
        .iter()
        .find(|(threshold, _)| score >= *threshold)
        .map(|(_, remark)| *remark)
        .unwrap_or(Remark::NeedsImprovement)
}

impl Remark {
    pub fn message(self) -> &'static str {
        match self {
            Remark::Outstanding => "Outstanding Performance!",
            Remark::Excellent => "Excellent Work!",
            Remark::Good => "Good Performance",
            Remark::Satisfactory => "Satisfactory",
            Remark::NeedsImprovement => "Need Improvement",
        }
    }

    pub fn badge(self) -> &'static str {
        match self {
            Remark::Outstanding => "🏆",
            Remark::Excellent => "👍",
            Remark::Good => "👌",
            Remark::Satisfactory => "🤨",
            Remark::NeedsImprovement => "📚",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(classify(10.0), Remark::Outstanding);
        assert_eq!(classify(9.0), Remark::Outstanding);
        assert_eq!(classify(8.999), Remark::Excellent);
        assert_eq!(classify(8.0), Remark::Excellent);
        assert_eq!(classify(7.99), Remark::Good);
        assert_eq!(classify(7.0), Remark::Good);
        assert_eq!(classify(6.0), Remark::Satisfactory);
        assert_eq!(classify(5.999), Remark::NeedsImprovement);
        assert_eq!(classify(0.0), Remark::NeedsImprovement);
    }

    #[test]
    fn test_negative_score_lowest_tier() {
        assert_eq!(classify(-1.0), Remark::NeedsImprovement);
    }

    #[test]
    fn test_thresholds_descending() {
        for pair in PERFORMANCE_THRESHOLDS.windows(2) {
            assert!(pair[0].0 > pair[1].0);
        }
    }

    #[test]
    fn test_messages() {
        assert_eq!(Remark::Outstanding.message(), "Outstanding Performance!");
        assert_eq!(Remark::NeedsImprovement.message(), "Need Improvement");
    }
}
