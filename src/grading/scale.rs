use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Letter grade on the 10-point scale.
///
/// The set is closed: every value maps to a point value, so the engine never
/// has to deal with an unknown grade. Text parsing only happens at the
/// CLI/TUI boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    /// First option of the grade picker, as in a freshly generated row
    #[default]
    S,
    A,
    B,
    C,
    D,
    E,
}

/// Grade scale in display order (best first)
pub const GRADE_SCALE: [Grade; 6] = [Grade::S, Grade::A, Grade::B, Grade::C, Grade::D, Grade::E];

impl Grade {
    pub fn points(self) -> u32 {
        match self {
            Grade::S => 10,
            Grade::A => 9,
            Grade::B => 8,
            Grade::C => 7,
            Grade::D => 6,
            Grade::E => 5,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Grade::S => 'S',
            Grade::A => 'A',
            Grade::B => 'B',
            Grade::C => 'C',
            Grade::D => 'D',
            Grade::E => 'E',
        }
    }

    pub fn from_letter(c: char) -> Option<Self> {
        GRADE_SCALE
            .iter()
            .copied()
            .find(|g| g.letter() == c.to_ascii_uppercase())
    }

    /// Next grade down the scale, wrapping from E back to S
    pub fn next(self) -> Self {
        let idx = self.index();
        GRADE_SCALE[(idx + 1) % GRADE_SCALE.len()]
    }

    /// Next grade up the scale, wrapping from S to E
    pub fn previous(self) -> Self {
        let idx = self.index();
        GRADE_SCALE[(idx + GRADE_SCALE.len() - 1) % GRADE_SCALE.len()]
    }

    fn index(self) -> usize {
        GRADE_SCALE.iter().position(|g| *g == self).unwrap_or(0)
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Grade {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => match Grade::from_letter(c) {
                Some(grade) => Ok(grade),
                None => bail!("Unknown grade '{}' (expected one of S, A, B, C, D, E)", s),
            },
            _ => bail!("Unknown grade '{}' (expected one of S, A, B, C, D, E)", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_table() {
        let points: Vec<u32> = GRADE_SCALE.iter().map(|g| g.points()).collect();
        assert_eq!(points, vec![10, 9, 8, 7, 6, 5]);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("a".parse::<Grade>().unwrap(), Grade::A);
        assert_eq!(" S ".parse::<Grade>().unwrap(), Grade::S);
    }

    #[test]
    fn test_parse_unknown_grade() {
        assert!("F".parse::<Grade>().is_err());
        assert!("AB".parse::<Grade>().is_err());
        assert!("".parse::<Grade>().is_err());
    }

    #[test]
    fn test_next_wraps() {
        assert_eq!(Grade::S.next(), Grade::A);
        assert_eq!(Grade::E.next(), Grade::S);
    }

    #[test]
    fn test_previous_wraps() {
        assert_eq!(Grade::A.previous(), Grade::S);
        assert_eq!(Grade::S.previous(), Grade::E);
    }

    #[test]
    fn test_display_is_letter() {
        assert_eq!(Grade::C.to_string(), "C");
    }
}
