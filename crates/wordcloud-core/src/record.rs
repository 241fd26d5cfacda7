//! Word records and their placed counterparts

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of the two datasets a record belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetKind {
    #[default]
    Slang,
    Emoji,
}

impl DatasetKind {
    /// Both kinds in tab order
    pub const ALL: [Self; 2] = [Self::Slang, Self::Emoji];

    /// Value of the `data-type` attribute on the matching tab
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Slang => "slang",
            Self::Emoji => "emoji",
        }
    }

    /// Tab caption
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Slang => "Slang",
            Self::Emoji => "Emojis",
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A term with its meaning and a font-size hint
///
/// `text` and `description` never change after load. `size` is overwritten
/// before every layout pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordRecord {
    pub text: String,
    pub description: String,
    pub size: f64,
}

impl WordRecord {
    pub fn new(text: impl Into<String>, description: impl Into<String>, size: f64) -> Self {
        Self {
            text: text.into(),
            description: description.into(),
            size,
        }
    }
}

/// A record the packer managed to fit, positioned relative to the canvas center
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedWord {
    pub text: String,
    pub description: String,
    pub size: f64,
    pub x: f64,
    pub y: f64,
    /// Rotation in degrees
    pub rotate: f64,
}

impl PlacedWord {
    #[must_use]
    pub fn from_record(record: &WordRecord, x: f64, y: f64, rotate: f64) -> Self {
        Self {
            text: record.text.clone(),
            description: record.description.clone(),
            size: record.size,
            x,
            y,
            rotate,
        }
    }
}
