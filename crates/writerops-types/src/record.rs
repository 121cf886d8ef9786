use crate::{Error, Role};
use chrono::NaiveDate;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Perceived difficulty of a writing session.
///
/// New records only carry levels 1-3. Older files may hold a star string
/// (`★★`), a level outside the range or free text. Readable levels are kept
/// so aggregation can decide what to count; the rest load as no difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "u8")]
pub struct Difficulty(u8);

impl Difficulty {
    pub const LEVELS: [u8; 3] = [1, 2, 3];
    const STAR: char = '★';

    /// Checked constructor for user input
    pub fn new(level: u8) -> crate::Result<Self> {
        if Self::LEVELS.contains(&level) {
            Ok(Self(level))
        } else {
            Err(Error::InvalidDifficulty(level.to_string()))
        }
    }

    /// Unchecked constructor for levels already on disk
    pub fn from_level(level: u8) -> Self {
        Self(level)
    }

    /// Parse `1`/`2`/`3` or `★`/`★★`/`★★★`.
    pub fn parse(input: &str) -> crate::Result<Self> {
        let trimmed = input.trim();
        if let Ok(level) = trimmed.parse::<u8>() {
            return Self::new(level)
                .map_err(|_| Error::InvalidDifficulty(trimmed.to_string()));
        }
        if !trimmed.is_empty() && trimmed.chars().all(|c| c == Self::STAR) {
            let stars = trimmed.chars().count();
            return u8::try_from(stars)
                .ok()
                .and_then(|level| Self::new(level).ok())
                .ok_or_else(|| Error::InvalidDifficulty(trimmed.to_string()));
        }
        Err(Error::InvalidDifficulty(trimmed.to_string()))
    }

    pub fn level(&self) -> u8 {
        self.0
    }

    pub fn stars(&self) -> String {
        std::iter::repeat_n(Self::STAR, self.0 as usize).collect()
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.stars())
    }
}

impl From<Difficulty> for u8 {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.0
    }
}

/// Whatever older scripts may have stored as a difficulty
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredDifficulty {
    Level(i64),
    Text(String),
    Other(IgnoredAny),
}

impl StoredDifficulty {
    /// Any readable level is kept, even outside 1-3; free text, empty
    /// strings and other shapes read as no difficulty.
    fn into_difficulty(self) -> Option<Difficulty> {
        match self {
            StoredDifficulty::Level(level) => u8::try_from(level).ok().map(Difficulty),
            StoredDifficulty::Text(text) => {
                let trimmed = text.trim();
                if let Ok(level) = trimmed.parse::<u8>() {
                    return Some(Difficulty(level));
                }
                if !trimmed.is_empty() && trimmed.chars().all(|c| c == Difficulty::STAR) {
                    return u8::try_from(trimmed.chars().count()).ok().map(Difficulty);
                }
                None
            }
            StoredDifficulty::Other(_) => None,
        }
    }
}

/// One writing session's log, keyed by calendar date.
///
/// Field aliases cover the names older scripts wrote (`word_count`,
/// `effort`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,

    #[serde(default, alias = "word_count")]
    pub char_count: u64,

    #[serde(
        default,
        alias = "effort",
        deserialize_with = "lenient_difficulty",
        skip_serializing_if = "Option::is_none"
    )]
    pub difficulty: Option<Difficulty>,

    #[serde(default)]
    pub summary: String,

    #[serde(
        default,
        deserialize_with = "empty_role_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub role: Option<Role>,

    #[serde(default)]
    pub emergency_mode: bool,
}

impl DailyRecord {
    pub fn new(date: NaiveDate, char_count: u64) -> Self {
        Self {
            date,
            char_count,
            difficulty: None,
            summary: String::new(),
            role: None,
            emergency_mode: false,
        }
    }
}

fn lenient_difficulty<'de, D>(deserializer: D) -> Result<Option<Difficulty>, D::Error>
where
    D: Deserializer<'de>,
{
    let stored: Option<StoredDifficulty> = Option::deserialize(deserializer)?;
    Ok(stored.and_then(StoredDifficulty::into_difficulty))
}

fn empty_role_as_none<'de, D>(deserializer: D) -> Result<Option<Role>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.filter(|label| !label.trim().is_empty()).map(Role::from))
}
