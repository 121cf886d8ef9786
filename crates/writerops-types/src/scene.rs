use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw scene text saved by `save-scene --json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneDraft {
    pub title: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl SceneDraft {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            created_at: Utc::now(),
        }
    }

    /// Length in characters, not bytes
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}
