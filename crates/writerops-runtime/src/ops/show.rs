use crate::Result;
use chrono::NaiveDate;
use writerops_store::Store;
use writerops_types::{DailyRecord, Progress};

#[derive(Debug, Clone)]
pub struct DayView {
    pub date: NaiveDate,
    pub record: Option<DailyRecord>,
    pub progress: Progress,
    /// Sum of `char_count` over every daily record on disk
    pub recorded_total: u64,
}

impl DayView {
    /// Running counter and daily records disagree
    pub fn has_drift(&self) -> bool {
        self.progress.total_written != self.recorded_total
    }
}

/// The record for `date` (if any) together with overall progress.
pub fn show_day(store: &Store, date: NaiveDate) -> Result<DayView> {
    let record = store.load_record(date)?;
    let progress = store.load_config()?;

    let mut recorded_total = 0u64;
    for day in store.list_record_dates()? {
        if let Some(existing) = store.load_record(day)? {
            recorded_total += existing.char_count;
        }
    }

    if progress.total_written != recorded_total {
        tracing::debug!(
            counter = progress.total_written,
            recorded = recorded_total,
            "progress counter differs from daily records"
        );
    }

    Ok(DayView {
        date,
        record,
        progress,
        recorded_total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_show_day_without_record() {
        let temp_dir = TempDir::new().unwrap();
        let store = Store::open(temp_dir.path());

        let view = show_day(&store, NaiveDate::from_ymd_opt(2026, 2, 9).unwrap()).unwrap();
        assert!(view.record.is_none());
        assert_eq!(view.recorded_total, 0);
        assert!(!view.has_drift());
    }

    #[test]
    fn test_show_day_reports_drift() {
        let temp_dir = TempDir::new().unwrap();
        let store = Store::open(temp_dir.path());
        let day = NaiveDate::from_ymd_opt(2026, 2, 9).unwrap();
        store.save_record(&DailyRecord::new(day, 700)).unwrap();
        store
            .save_record(&DailyRecord::new(day.succ_opt().unwrap(), 300))
            .unwrap();
        store
            .save_config(&Progress {
                total_written: 1500,
                monthly_goal: 0,
            })
            .unwrap();

        let view = show_day(&store, day).unwrap();
        assert_eq!(view.record.as_ref().map(|r| r.char_count), Some(700));
        assert_eq!(view.recorded_total, 1000);
        assert!(view.has_drift());
    }
}
