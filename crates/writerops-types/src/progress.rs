use serde::{Deserialize, Serialize};

/// Running progress against the monthly goal (`config.json`).
///
/// `monthly_goal` is configured by hand and only read here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    #[serde(default)]
    pub total_written: u64,

    #[serde(default, alias = "goal")]
    pub monthly_goal: u64,
}

impl Progress {
    /// Percentage of the goal reached, `None` when no goal is set
    pub fn percent(&self) -> Option<f64> {
        if self.monthly_goal == 0 {
            None
        } else {
            Some(self.total_written as f64 / self.monthly_goal as f64 * 100.0)
        }
    }

    /// Add a finished session's characters.
    ///
    /// `previous` is the count already recorded for the same date, if any;
    /// only growth over it is added so re-saving a day does not count it
    /// twice and the total never decreases.
    pub fn record_session(&mut self, char_count: u64, previous: Option<u64>) -> u64 {
        let added = match previous {
            Some(old) => char_count.saturating_sub(old),
            None => char_count,
        };
        self.total_written = self.total_written.saturating_add(added);
        added
    }
}
