use std::time::{Duration, Instant};

/// Linear count-up from 0 to the final score. Purely cosmetic: the result
/// card always holds the exact value, this only decides what is drawn.
#[derive(Debug, Clone)]
pub struct CountUp {
    start: f64,
    end: f64,
    duration: Duration,
    started_at: Instant,
}

impl CountUp {
    pub fn new(end: f64, duration: Duration) -> Self {
        Self {
            start: 0.0,
            end,
            duration,
            started_at: Instant::now(),
        }
    }

    /// Value to display after `elapsed`; reaches `end` exactly once the
    /// duration has passed.
    pub fn value_at(&self, elapsed: Duration) -> f64 {
        let progress = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
        };
        progress * (self.end - self.start) + self.start
    }

    pub fn current(&self) -> f64 {
        self.value_at(self.started_at.elapsed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        let count = CountUp::new(9.57, Duration::from_secs(1));
        assert_eq!(count.value_at(Duration::ZERO), 0.0);
    }

    #[test]
    fn test_halfway() {
        let count = CountUp::new(8.0, Duration::from_secs(1));
        assert_eq!(count.value_at(Duration::from_millis(500)), 4.0);
    }

    #[test]
    fn test_ends_exactly_on_target() {
        let count = CountUp::new(9.57, Duration::from_secs(1));
        assert_eq!(count.value_at(Duration::from_secs(1)), 9.57);
        assert_eq!(count.value_at(Duration::from_secs(5)), 9.57);
    }

    #[test]
    fn test_zero_duration_is_immediate() {
        let count = CountUp::new(7.25, Duration::ZERO);
        assert_eq!(count.value_at(Duration::ZERO), 7.25);
        assert_eq!(count.current(), 7.25);
    }
}
