// src/domain/note.rs
use crate::domain::ParseDisplayModeError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub content: String,
    pub date: DateTime<Utc>,
    pub important: bool,
}

impl Note {
    /// Copy of this note with the importance flag inverted
    pub fn with_importance_toggled(&self) -> Note {
        Note {
            important: !self.important,
            ..self.clone()
        }
    }
}

/// Candidate record sent to the service on create.
///
/// The `id` is advisory; the service may assign its own.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NoteDraft {
    pub id: i64,
    pub content: String,
    pub date: DateTime<Utc>,
    pub important: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    All,
    ImportantOnly,
}

impl DisplayMode {
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::All => DisplayMode::ImportantOnly,
            DisplayMode::ImportantOnly => DisplayMode::All,
        }
    }

    pub fn admits(self, note: &Note) -> bool {
        match self {
            DisplayMode::All => true,
            DisplayMode::ImportantOnly => note.important,
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayMode::All => write!(f, "all"),
            DisplayMode::ImportantOnly => write!(f, "important"),
        }
    }
}

impl FromStr for DisplayMode {
    type Err = ParseDisplayModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(DisplayMode::All),
            "important" | "important-only" => Ok(DisplayMode::ImportantOnly),
            other => Err(ParseDisplayModeError(other.to_string())),
        }
    }
}
