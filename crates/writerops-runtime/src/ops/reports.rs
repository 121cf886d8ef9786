use crate::{Classifier, Result};
use chrono::NaiveDate;
use std::path::PathBuf;
use writerops_engine::{AggregateSummary, Period, aggregate, format_report};
use writerops_store::Store;

#[derive(Debug, Clone)]
pub struct ReportOutcome {
    pub summary: AggregateSummary,
    pub text: String,
    pub path: PathBuf,
}

/// Aggregate the ISO week containing `date` and write `weekly_{label}.md`.
pub fn weekly_report(store: &Store, date: NaiveDate) -> Result<ReportOutcome> {
    store.require_daily_dir()?;

    let period = Period::week_of(date);
    let records = store.load_range(period.start, period.end)?;
    let summary = aggregate(&records, &period);

    write_report(store, summary)
}

/// Aggregate a calendar month, attach the narrative analyses and write
/// `monthly_{label}.md`.
pub fn monthly_report(
    store: &Store,
    classifier: &Classifier<'_>,
    period: Period,
) -> Result<ReportOutcome> {
    store.require_daily_dir()?;

    let records = store.load_range(period.start, period.end)?;
    let mut summary = aggregate(&records, &period);
    summary.analysis = Some(classifier.analyze_month(&summary.summaries));

    write_report(store, summary)
}

fn write_report(store: &Store, summary: AggregateSummary) -> Result<ReportOutcome> {
    let text = format_report(&summary);
    let path = store.save_report(&summary.period.report_file_name(), &text)?;

    tracing::info!(
        period = %summary.period.label,
        writing_days = summary.writing_days,
        path = %path.display(),
        "report written"
    );

    Ok(ReportOutcome { summary, text, path })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ClassifierError, CompletionClient, Error};
    use std::cell::Cell;
    use tempfile::TempDir;
    use writerops_types::{DailyRecord, Difficulty, Role};

    struct Counting {
        calls: Cell<usize>,
    }

    impl CompletionClient for Counting {
        fn complete(&self, _prompt: &str) -> std::result::Result<String, ClassifierError> {
            self.calls.set(self.calls.get() + 1);
            Ok("- 분석 결과".to_string())
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn seed(store: &Store, day: NaiveDate, chars: u64, role: Role) {
        store
            .save_record(&DailyRecord {
                date: day,
                char_count: chars,
                difficulty: Some(Difficulty::new(1).unwrap()),
                summary: format!("{} 요약", day),
                role: Some(role),
                emergency_mode: false,
            })
            .unwrap();
    }

    #[test]
    fn test_weekly_requires_daily_dir() {
        let temp_dir = TempDir::new().unwrap();
        let store = Store::open(temp_dir.path());

        let err = weekly_report(&store, date(2026, 2, 9)).unwrap_err();
        assert!(matches!(
            err,
            Error::Store(writerops_store::Error::MissingStorage(_))
        ));
        assert!(!store.reports_dir().exists());
    }

    #[test]
    fn test_weekly_report_written_and_deterministic() {
        let temp_dir = TempDir::new().unwrap();
        let store = Store::open(temp_dir.path());
        seed(&store, date(2026, 2, 9), 1000, Role::Transition);
        seed(&store, date(2026, 2, 11), 2001, Role::LingeringResonance);
        seed(&store, date(2026, 2, 16), 5000, Role::Transition);

        let first = weekly_report(&store, date(2026, 2, 13)).unwrap();
        assert_eq!(first.summary.writing_days, 2);
        assert_eq!(first.summary.avg_chars, 1500);
        assert_eq!(first.path, store.reports_dir().join("weekly_2026-W07.md"));

        let second = weekly_report(&store, date(2026, 2, 9)).unwrap();
        assert_eq!(std::fs::read_to_string(&second.path).unwrap(), first.text);
    }

    #[test]
    fn test_empty_month_does_not_call_classifier() {
        let temp_dir = TempDir::new().unwrap();
        let store = Store::open(temp_dir.path());
        std::fs::create_dir_all(store.daily_dir()).unwrap();
        let client = Counting { calls: Cell::new(0) };
        let classifier = Classifier::with_client(&client);

        let outcome =
            monthly_report(&store, &classifier, Period::month(2024, 2).unwrap()).unwrap();

        assert_eq!(client.calls.get(), 0);
        assert_eq!(outcome.summary.writing_days, 0);
        assert_eq!(outcome.summary.rest_days, 29);
        assert_eq!(outcome.summary.total_chars, 0);
        assert_eq!(outcome.summary.avg_chars, 0);
        assert_eq!(outcome.text.matches("(데이터 없음)").count(), 2);
        assert!(outcome.path.ends_with("reports/monthly_2024-02.md"));
    }

    #[test]
    fn test_month_with_records_attaches_analysis() {
        let temp_dir = TempDir::new().unwrap();
        let store = Store::open(temp_dir.path());
        seed(&store, date(2026, 3, 1), 1000, Role::Transition);
        seed(&store, date(2026, 3, 31), 3000, Role::ConflictEscalation);
        let client = Counting { calls: Cell::new(0) };
        let classifier = Classifier::with_client(&client);

        let outcome =
            monthly_report(&store, &classifier, Period::month(2026, 3).unwrap()).unwrap();

        assert_eq!(client.calls.get(), 2);
        assert_eq!(outcome.summary.writing_days, 2);
        assert_eq!(outcome.summary.rest_days, 29);
        assert!(outcome.text.contains("## 되돌릴 수 없는 변화\n\n- 분석 결과\n"));
        assert!(!outcome.text.contains("(데이터 없음)"));
    }
}
