//! Roster: the ten validated player names of a session.

use serde::{Deserialize, Serialize};
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Number of players in a session (two teams of five).
pub const ROSTER_SIZE: usize = 10;

/// Errors raised while entering player names. These are the only user-visible errors.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SetupError {
    /// Not exactly ten names were given.
    WrongPlayerCount { expected: usize, got: usize },
    /// A name is empty after normalization (0-based input index).
    EmptyName { index: usize },
    /// Two names collide once case, spacing and accents are ignored.
    DuplicatePlayerName(String),
}

impl std::fmt::Display for SetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SetupError::WrongPlayerCount { expected, got } => {
                write!(f, "Need exactly {} player names (got {})", expected, got)
            }
            SetupError::EmptyName { index } => write!(f, "Player name {} is empty", index + 1),
            SetupError::DuplicatePlayerName(name) => {
                write!(f, "Duplicate player name: \"{}\"", name)
            }
        }
    }
}

impl std::error::Error for SetupError {}

/// Trim and collapse inner whitespace runs to a single space.
pub fn normalize_name(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Key used for duplicate detection: normalized, lowercased, accents stripped.
pub fn dup_check_key(name: &str) -> String {
    normalize_name(name)
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Exactly ten unique names, in entry order.
///
/// Only constructible through [`Roster::new`], so a decoded record with a bad
/// player list fails to deserialize instead of producing an invalid session.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Roster(Vec<String>);

impl Roster {
    /// Validate names as given (no normalization).
    pub fn new(names: Vec<String>) -> Result<Self, SetupError> {
        if names.len() != ROSTER_SIZE {
            return Err(SetupError::WrongPlayerCount {
                expected: ROSTER_SIZE,
                got: names.len(),
            });
        }
        if let Some(index) = names.iter().position(|n| n.trim().is_empty()) {
            return Err(SetupError::EmptyName { index });
        }
        let mut seen = std::collections::HashSet::new();
        for name in &names {
            if !seen.insert(dup_check_key(name)) {
                return Err(SetupError::DuplicatePlayerName(name.clone()));
            }
        }
        Ok(Self(names))
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|n| n == name)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.0.clone()
    }
}

impl TryFrom<Vec<String>> for Roster {
    type Error = SetupError;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(names)
    }
}

impl From<Roster> for Vec<String> {
    fn from(roster: Roster) -> Self {
        roster.0
    }
}
