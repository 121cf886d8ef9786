use crate::{Classification, Classifier, Error, Result};
use chrono::NaiveDate;
use std::path::PathBuf;
use writerops_store::Store;
use writerops_types::{DailyRecord, Difficulty, Highlight, Progress, Role};

#[derive(Debug, Clone)]
pub struct FinishInput {
    pub date: NaiveDate,
    pub char_count: u64,
    pub difficulty: Difficulty,
    pub summary: String,
    /// Scene identifier stored with a highlight; defaults to the summary
    pub location: Option<String>,
    pub emergency_mode: bool,
}

#[derive(Debug, Clone)]
pub struct FinishOutcome {
    pub record: DailyRecord,
    pub record_path: PathBuf,
    pub role: Classification<Role>,
    pub highlight: Option<Highlight>,
    pub progress: Progress,
    /// Characters added to the running total by this call
    pub added: u64,
    /// Whether this call replaced an existing record for the date
    pub replaced: bool,
}

/// Log a finished session: classify, save the day's record, append a
/// highlight when judged, and advance the progress counter.
pub fn finish(store: &Store, classifier: &Classifier<'_>, input: FinishInput) -> Result<FinishOutcome> {
    let summary = input.summary.trim().to_string();
    if summary.is_empty() {
        return Err(Error::InvalidInput("scene summary is required".to_string()));
    }

    // Reads that can fail come before any write.
    let previous = store.load_record(input.date)?;
    let mut progress = store.load_config()?;

    let judgment = classifier.classify_scene(&summary);
    let judgment_classified = judgment.role.is_classified();

    let record = DailyRecord {
        date: input.date,
        char_count: input.char_count,
        difficulty: Some(input.difficulty),
        summary: summary.clone(),
        role: Some(judgment.role.role()),
        emergency_mode: input.emergency_mode,
    };
    let record_path = store.save_record(&record)?;

    let highlight = match judgment.highlight {
        Some(found) => {
            let highlight = Highlight {
                date: input.date,
                kind: found.kind,
                location: input
                    .location
                    .filter(|location| !location.trim().is_empty())
                    .unwrap_or_else(|| summary.clone()),
                memo: found.reason,
            };
            store.append_highlight(&highlight)?;
            Some(highlight)
        }
        None => None,
    };

    let added = progress.record_session(input.char_count, previous.as_ref().map(|r| r.char_count));
    store.save_config(&progress)?;

    tracing::info!(
        date = %input.date,
        chars = input.char_count,
        role = %record.role.as_ref().map(Role::label).unwrap_or_default(),
        classified = judgment_classified,
        total = progress.total_written,
        "session recorded"
    );

    Ok(FinishOutcome {
        record,
        record_path,
        role: judgment.role,
        highlight,
        progress,
        added,
        replaced: previous.is_some(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ClassifierError, CompletionClient};
    use tempfile::TempDir;
    use writerops_types::HighlightKind;

    struct Reply(&'static str);

    impl CompletionClient for Reply {
        fn complete(&self, _prompt: &str) -> std::result::Result<String, ClassifierError> {
            Ok(self.0.to_string())
        }
    }

    struct Offline;

    impl CompletionClient for Offline {
        fn complete(&self, _prompt: &str) -> std::result::Result<String, ClassifierError> {
            Err(ClassifierError::Transport("network unreachable".to_string()))
        }
    }

    fn input(day: u32, chars: u64, summary: &str) -> FinishInput {
        FinishInput {
            date: NaiveDate::from_ymd_opt(2026, 2, day).unwrap(),
            char_count: chars,
            difficulty: Difficulty::new(2).unwrap(),
            summary: summary.to_string(),
            location: None,
            emergency_mode: false,
        }
    }

    #[test]
    fn test_finish_saves_classified_record_and_progress() {
        let temp_dir = TempDir::new().unwrap();
        let store = Store::open(temp_dir.path());
        store
            .save_config(&Progress {
                total_written: 1000,
                monthly_goal: 50_000,
            })
            .unwrap();
        let classifier = Classifier::with_client(Reply("역할: 정보 공개\n하이라이트: 아니오"));

        let outcome = finish(&store, &classifier, input(9, 2500, "편지를 발견한다")).unwrap();

        assert_eq!(outcome.record.role, Some(Role::InformationReveal));
        assert!(outcome.highlight.is_none());
        assert_eq!(outcome.progress.total_written, 3500);
        assert_eq!(outcome.progress.monthly_goal, 50_000);
        assert!(!outcome.replaced);

        let saved = store.load_record(outcome.record.date).unwrap().unwrap();
        assert_eq!(saved, outcome.record);
        assert_eq!(store.load_config().unwrap().total_written, 3500);
        assert!(store.load_highlights().unwrap().is_empty());
    }

    #[test]
    fn test_finish_with_classifier_failure_still_saves() {
        let temp_dir = TempDir::new().unwrap();
        let store = Store::open(temp_dir.path());
        let classifier = Classifier::with_client(Offline);

        let outcome = finish(&store, &classifier, input(9, 800, "짧은 장면")).unwrap();

        assert!(!outcome.role.is_classified());
        let saved = store.load_record(outcome.record.date).unwrap().unwrap();
        assert_eq!(saved.role, Some(Role::Unclassified));
        assert_eq!(store.load_config().unwrap().total_written, 800);
    }

    #[test]
    fn test_finish_appends_highlight() {
        let temp_dir = TempDir::new().unwrap();
        let store = Store::open(temp_dir.path());
        let classifier = Classifier::with_client(Reply(
            "역할: 관계 진전\n하이라이트: 예\n유형: 관계\n이유: 거리가 한 번에 좁혀진다",
        ));

        let mut first = input(10, 1200, "옥상에서 화해");
        first.location = Some("12화 옥상".to_string());
        finish(&store, &classifier, first).unwrap();
        finish(&store, &classifier, input(11, 900, "다시 만난다")).unwrap();

        let highlights = store.load_highlights().unwrap();
        assert_eq!(highlights.len(), 2);
        assert_eq!(highlights[0].kind, HighlightKind::Relationship);
        assert_eq!(highlights[0].location, "12화 옥상");
        assert_eq!(highlights[0].memo, "거리가 한 번에 좁혀진다");
        assert_eq!(highlights[1].location, "다시 만난다");
    }

    #[test]
    fn test_finish_resave_replaces_and_counts_growth_only() {
        let temp_dir = TempDir::new().unwrap();
        let store = Store::open(temp_dir.path());
        let classifier = Classifier::disabled();

        let mut rushed = input(12, 1000, "초안");
        rushed.emergency_mode = true;
        finish(&store, &classifier, rushed).unwrap();
        let outcome = finish(&store, &classifier, input(12, 1600, "퇴고")).unwrap();

        assert!(outcome.replaced);
        assert_eq!(outcome.added, 600);
        assert_eq!(outcome.progress.total_written, 1600);

        let saved = store.load_record(outcome.record.date).unwrap().unwrap();
        assert_eq!(saved.summary, "퇴고");
        assert!(!saved.emergency_mode);
    }

    #[test]
    fn test_finish_rejects_empty_summary_without_writing() {
        let temp_dir = TempDir::new().unwrap();
        let store = Store::open(temp_dir.path());

        let err = finish(&store, &Classifier::disabled(), input(9, 100, "   ")).unwrap_err();

        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(!store.daily_dir().exists());
        assert!(!store.config_path().exists());
    }
}
