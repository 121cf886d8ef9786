use crate::Error;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Craft dimension a highlight scene stands out on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightKind {
    Dialogue,
    Atmosphere,
    Structure,
    Relationship,
    Character,
}

impl HighlightKind {
    pub const ALL: [HighlightKind; 5] = [
        HighlightKind::Dialogue,
        HighlightKind::Atmosphere,
        HighlightKind::Structure,
        HighlightKind::Relationship,
        HighlightKind::Character,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HighlightKind::Dialogue => "dialogue",
            HighlightKind::Atmosphere => "atmosphere",
            HighlightKind::Structure => "structure",
            HighlightKind::Relationship => "relationship",
            HighlightKind::Character => "character",
        }
    }

    /// Korean tag used in classifier prompts and terminal output
    pub fn tag(&self) -> &'static str {
        match self {
            HighlightKind::Dialogue => "대사",
            HighlightKind::Atmosphere => "분위기",
            HighlightKind::Structure => "구조",
            HighlightKind::Relationship => "관계",
            HighlightKind::Character => "캐릭터",
        }
    }
}

impl fmt::Display for HighlightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HighlightKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.tag() == wanted || kind.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::InvalidHighlightKind(wanted.to_string()))
    }
}

/// A flagged exceptional scene. Stored as an append-only list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: HighlightKind,
    pub location: String,
    pub memo: String,
}
