//! Traversal direction and the reverse-flag parsing rule

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

/// Spellings accepted as "walk backward"
const REVERSE_WORDS: &[&str] = &["true", "1", "yes", "y", "on", "reverse", "backward"];

/// Spellings accepted as "walk forward"
const FORWARD_WORDS: &[&str] = &["false", "0", "no", "n", "off", "forward"];

/// Order in which a [`TraversalSource`](crate::TraversalSource) visits its items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    /// Map the config's `reverse` boolean onto a direction
    pub fn from_reverse(reverse: bool) -> Self {
        if reverse { Self::Backward } else { Self::Forward }
    }

    pub fn is_reverse(self) -> bool {
        self == Self::Backward
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forward => write!(f, "forward"),
            Self::Backward => write!(f, "backward"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unrecognized reverse flag '{0}' (expected one of: true, 1, yes, y, on, reverse, backward, false, 0, no, n, off, forward)")]
pub struct ParseDirectionError(pub String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    /// Case-insensitive; surrounding whitespace is ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let flag = s.trim().to_lowercase();
        debug!(%flag, "Direction::from_str: called");
        if REVERSE_WORDS.contains(&flag.as_str()) {
            Ok(Self::Backward)
        } else if FORWARD_WORDS.contains(&flag.as_str()) {
            Ok(Self::Forward)
        } else {
            Err(ParseDirectionError(s.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_spellings() {
        for flag in ["true", "TRUE", "1", "Yes", "y", "on", "Reverse", " backward "] {
            assert_eq!(flag.parse::<Direction>(), Ok(Direction::Backward), "flag {flag:?}");
        }
    }

    #[test]
    fn test_forward_spellings() {
        for flag in ["false", "False", "0", "no", "N", "off", "FORWARD"] {
            assert_eq!(flag.parse::<Direction>(), Ok(Direction::Forward), "flag {flag:?}");
        }
    }

    #[test]
    fn test_unknown_flag_rejected() {
        let err = "maybe".parse::<Direction>().unwrap_err();
        assert_eq!(err, ParseDirectionError("maybe".to_string()));
        assert!(err.to_string().contains("maybe"));
        assert!("".parse::<Direction>().is_err());
    }

    #[test]
    fn test_from_reverse() {
        assert_eq!(Direction::from_reverse(true), Direction::Backward);
        assert_eq!(Direction::from_reverse(false), Direction::Forward);
        assert!(Direction::Backward.is_reverse());
        assert!(!Direction::default().is_reverse());
    }
}
