use crate::Period;
use chrono::NaiveDate;
use writerops_types::{DailyRecord, Difficulty, Role};

/// Counts per difficulty level 1..=3; other levels are not counted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DifficultyDistribution {
    counts: [u32; 3],
}

impl DifficultyDistribution {
    fn add(&mut self, difficulty: Difficulty) {
        if let Some(slot) = Difficulty::LEVELS
            .iter()
            .position(|level| *level == difficulty.level())
        {
            self.counts[slot] += 1;
        }
    }

    pub fn count(&self, level: u8) -> u32 {
        Difficulty::LEVELS
            .iter()
            .position(|l| *l == level)
            .map(|slot| self.counts[slot])
            .unwrap_or(0)
    }

    /// `(level, count)` for levels 1, 2, 3, zeros included
    pub fn iter(&self) -> impl Iterator<Item = (u8, u32)> + '_ {
        Difficulty::LEVELS.into_iter().zip(self.counts)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleCount {
    pub role: Role,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneSummary {
    pub date: NaiveDate,
    pub summary: String,
}

/// Free-text analyses attached to a monthly summary.
///
/// Empty strings mean "no data" and render as a placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonthlyAnalysis {
    pub irreversible_changes: String,
    pub excellence_highlights: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateSummary {
    pub period: Period,
    pub writing_days: u32,
    pub rest_days: u32,
    pub total_chars: u64,
    pub avg_chars: u64,
    pub difficulty_distribution: DifficultyDistribution,
    /// First-seen order over ascending dates
    pub role_distribution: Vec<RoleCount>,
    pub emergency_count: u32,
    /// Non-empty one-line summaries in date order
    pub summaries: Vec<SceneSummary>,
    /// Set by the caller for monthly reports
    pub analysis: Option<MonthlyAnalysis>,
}

impl AggregateSummary {
    pub fn is_empty(&self) -> bool {
        self.writing_days == 0
    }
}

/// Reduce the records of a period to summary statistics.
///
/// Records outside the period are ignored. Records are visited in date order
/// regardless of input order, so the role distribution is stable.
pub fn aggregate(records: &[DailyRecord], period: &Period) -> AggregateSummary {
    let mut in_period: Vec<&DailyRecord> = records
        .iter()
        .filter(|record| period.contains(record.date))
        .collect();
    in_period.sort_by_key(|record| record.date);

    let mut total_chars = 0u64;
    let mut difficulty_distribution = DifficultyDistribution::default();
    let mut role_distribution: Vec<RoleCount> = Vec::new();
    let mut emergency_count = 0u32;
    let mut summaries = Vec::new();

    for record in &in_period {
        total_chars += record.char_count;

        if let Some(difficulty) = record.difficulty {
            difficulty_distribution.add(difficulty);
        }

        if let Some(role) = record.role.as_ref().filter(|role| !role.label().is_empty()) {
            match role_distribution.iter_mut().find(|entry| &entry.role == role) {
                Some(entry) => entry.count += 1,
                None => role_distribution.push(RoleCount {
                    role: role.clone(),
                    count: 1,
                }),
            }
        }

        if record.emergency_mode {
            emergency_count += 1;
        }

        let summary = record.summary.trim();
        if !summary.is_empty() {
            summaries.push(SceneSummary {
                date: record.date,
                summary: summary.to_string(),
            });
        }
    }

    let writing_days = in_period.len() as u32;
    let avg_chars = if writing_days > 0 {
        total_chars / u64::from(writing_days)
    } else {
        0
    };

    AggregateSummary {
        period: period.clone(),
        writing_days,
        rest_days: period.length_days().saturating_sub(writing_days),
        total_chars,
        avg_chars,
        difficulty_distribution,
        role_distribution,
        emergency_count,
        summaries,
        analysis: None,
    }
}
