use chrono::{Datelike, Duration, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodKind {
    Weekly,
    Monthly,
}

/// A closed date range a report covers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Period {
    pub kind: PeriodKind,
    pub label: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Period {
    /// ISO week (Monday..Sunday) containing `date`
    pub fn week_of(date: NaiveDate) -> Self {
        let (start, end) = week_range(date);
        Self {
            kind: PeriodKind::Weekly,
            label: week_label(date),
            start,
            end,
        }
    }

    /// Calendar month, `None` for an invalid year/month pair
    pub fn month(year: i32, month: u32) -> Option<Self> {
        let start = NaiveDate::from_ymd_opt(year, month, 1)?;
        let length = days_in_month(year, month)?;
        Some(Self {
            kind: PeriodKind::Monthly,
            label: format!("{:04}-{:02}", year, month),
            start,
            end: start + Duration::days(i64::from(length) - 1),
        })
    }

    pub fn month_of(date: NaiveDate) -> Self {
        let start = date.with_day(1).unwrap_or(date);
        let length = days_in_month(date.year(), date.month()).unwrap_or(1);
        Self {
            kind: PeriodKind::Monthly,
            label: format!("{:04}-{:02}", date.year(), date.month()),
            start,
            end: start + Duration::days(i64::from(length) - 1),
        }
    }

    pub fn length_days(&self) -> u32 {
        ((self.end - self.start).num_days() + 1).max(0) as u32
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// `weekly_{label}.md` or `monthly_{label}.md`
    pub fn report_file_name(&self) -> String {
        match self.kind {
            PeriodKind::Weekly => format!("weekly_{}.md", self.label),
            PeriodKind::Monthly => format!("monthly_{}.md", self.label),
        }
    }
}

/// Monday and Sunday of the ISO week containing `date`
pub fn week_range(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let offset = i64::from(date.weekday().num_days_from_monday());
    let monday = date - Duration::days(offset);
    (monday, monday + Duration::days(6))
}

/// `{ISO year}-W{ISO week:02}`.
///
/// Uses the ISO week-numbering year, so 2024-12-30 is `2025-W01` and
/// 2027-01-01 is `2026-W53`.
pub fn week_label(date: NaiveDate) -> String {
    let iso = date.iso_week();
    format!("{}-W{:02}", iso.year(), iso.week())
}

/// Number of days in a calendar month, `None` for an invalid month
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((next - first).num_days() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_of_monday() {
        let period = Period::week_of(date(2026, 2, 9));
        assert_eq!(period.label, "2026-W07");
        assert_eq!(period.start, date(2026, 2, 9));
        assert_eq!(period.end, date(2026, 2, 15));
        assert_eq!(period.length_days(), 7);
        assert_eq!(period.report_file_name(), "weekly_2026-W07.md");
    }

    #[test]
    fn test_week_range_from_sunday_and_midweek() {
        assert_eq!(week_range(date(2026, 2, 15)), (date(2026, 2, 9), date(2026, 2, 15)));
        assert_eq!(week_range(date(2026, 2, 11)), (date(2026, 2, 9), date(2026, 2, 15)));
    }

    #[test]
    fn test_week_label_uses_iso_year_at_boundaries() {
        assert_eq!(week_label(date(2024, 12, 30)), "2025-W01");
        assert_eq!(week_label(date(2027, 1, 1)), "2026-W53");
        assert_eq!(week_label(date(2021, 1, 3)), "2020-W53");
        assert_eq!(week_range(date(2024, 12, 31)), (date(2024, 12, 30), date(2025, 1, 5)));
    }

    #[test]
    fn test_days_in_month_handles_leap_years() {
        assert_eq!(days_in_month(2024, 2), Some(29));
        assert_eq!(days_in_month(2026, 2), Some(28));
        assert_eq!(days_in_month(1900, 2), Some(28));
        assert_eq!(days_in_month(2000, 2), Some(29));
        assert_eq!(days_in_month(2026, 12), Some(31));
        assert_eq!(days_in_month(2026, 4), Some(30));
        assert_eq!(days_in_month(2026, 13), None);
    }

    #[test]
    fn test_month_period() {
        let period = Period::month(2026, 2).unwrap();
        assert_eq!(period.label, "2026-02");
        assert_eq!(period.end, date(2026, 2, 28));
        assert_eq!(period.length_days(), 28);
        assert_eq!(period.report_file_name(), "monthly_2026-02.md");
        assert_eq!(Period::month_of(date(2026, 2, 17)), period);
        assert!(Period::month(2026, 0).is_none());
    }
}
