use crate::json::{read_optional, write_pretty};
use crate::scenes::{next_scene_number, slugify};
use crate::{Error, Result};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use writerops_types::{DailyRecord, Highlight, Progress, SceneDraft};

pub const DAILY_DIR: &str = "daily";
pub const REPORTS_DIR: &str = "reports";
pub const SCENES_DIR: &str = "scenes";
pub const STORIES_DIR: &str = "stories";
pub const CONFIG_FILE: &str = "config.json";
pub const HIGHLIGHTS_FILE: &str = "highlights.json";

// NOTE: Read-modify-write (highlights, progress) assumes a single writer.
// Two processes against the same data dir can lose updates.

/// Handle to a writerops data directory.
///
/// Opening a store touches nothing on disk; directories are created on the
/// first write that needs them.
#[derive(Debug, Clone)]
pub struct Store {
    root: PathBuf,
}

impl Store {
    pub fn open(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn daily_dir(&self) -> PathBuf {
        self.root.join(DAILY_DIR)
    }

    pub fn reports_dir(&self) -> PathBuf {
        self.root.join(REPORTS_DIR)
    }

    pub fn record_path(&self, date: NaiveDate) -> PathBuf {
        self.daily_dir().join(format!("{}.json", date.format("%Y-%m-%d")))
    }

    // --- daily records ---

    pub fn load_record(&self, date: NaiveDate) -> Result<Option<DailyRecord>> {
        read_optional(&self.record_path(date))
    }

    /// Write a record, replacing any existing record for the same date.
    pub fn save_record(&self, record: &DailyRecord) -> Result<PathBuf> {
        let path = self.record_path(record.date);
        write_pretty(&path, record)?;
        Ok(path)
    }

    /// Records dated `start..=end`, ascending; days without a file are skipped.
    pub fn load_range(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<DailyRecord>> {
        let mut records = Vec::new();
        for date in start.iter_days().take_while(|date| *date <= end) {
            if let Some(record) = self.load_record(date)? {
                records.push(record);
            }
        }
        tracing::debug!(%start, %end, found = records.len(), "loaded daily records");
        Ok(records)
    }

    /// Dates that have a record file, ascending. Files whose stem is not a
    /// `YYYY-MM-DD` date are ignored.
    pub fn list_record_dates(&self) -> Result<Vec<NaiveDate>> {
        let dir = self.daily_dir();
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut dates = Vec::new();
        for entry in WalkDir::new(&dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|err| {
                let path = err.path().map(Path::to_path_buf).unwrap_or_else(|| dir.clone());
                Error::io(path, err.into())
            })?;
            let path = entry.path();
            if path.extension().is_none_or(|ext| ext != "json") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            match NaiveDate::parse_from_str(stem, "%Y-%m-%d") {
                Ok(date) => dates.push(date),
                Err(_) => tracing::debug!(path = %path.display(), "skipping non-date file"),
            }
        }
        dates.sort();
        Ok(dates)
    }

    /// Fail with `MissingStorage` unless `daily/` exists.
    pub fn require_daily_dir(&self) -> Result<()> {
        let dir = self.daily_dir();
        if dir.is_dir() {
            Ok(())
        } else {
            Err(Error::MissingStorage(dir))
        }
    }

    // --- progress ---

    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }

    pub fn load_config(&self) -> Result<Progress> {
        Ok(read_optional(&self.config_path())?.unwrap_or_default())
    }

    pub fn save_config(&self, progress: &Progress) -> Result<()> {
        write_pretty(&self.config_path(), progress)
    }

    // --- highlights ---

    pub fn highlights_path(&self) -> PathBuf {
        self.root.join(HIGHLIGHTS_FILE)
    }

    pub fn load_highlights(&self) -> Result<Vec<Highlight>> {
        Ok(read_optional(&self.highlights_path())?.unwrap_or_default())
    }

    /// Append to the highlight list by rewriting the whole file.
    pub fn append_highlight(&self, highlight: &Highlight) -> Result<usize> {
        let mut highlights = self.load_highlights()?;
        highlights.push(highlight.clone());
        write_pretty(&self.highlights_path(), &highlights)?;
        Ok(highlights.len())
    }

    // --- reports ---

    /// Write a rendered report under `reports/`, overwriting a previous run.
    pub fn save_report(&self, file_name: &str, text: &str) -> Result<PathBuf> {
        let dir = self.reports_dir();
        std::fs::create_dir_all(&dir).map_err(|err| Error::io(&dir, err))?;
        let path = dir.join(file_name);
        std::fs::write(&path, text).map_err(|err| Error::io(&path, err))?;
        tracing::debug!(path = %path.display(), "wrote report");
        Ok(path)
    }

    // --- scenes ---

    /// Save scene text as `scenes/{NNN}_{slug}.txt`.
    pub fn save_scene_text(&self, title: &str, text: &str) -> Result<PathBuf> {
        let dir = self.root.join(SCENES_DIR);
        let number = next_scene_number(&dir);
        std::fs::create_dir_all(&dir).map_err(|err| Error::io(&dir, err))?;

        let path = dir.join(format!("{:03}_{}.txt", number, slugify(title)));
        let mut content = text.to_string();
        content.push('\n');
        std::fs::write(&path, content).map_err(|err| Error::io(&path, err))?;
        Ok(path)
    }

    /// Save a scene draft as `stories/{slug}_{YYYYMMDD_HHMMSS}.json`.
    pub fn save_scene_json(&self, draft: &SceneDraft) -> Result<PathBuf> {
        let file_name = format!(
            "{}_{}.json",
            slugify(&draft.title),
            draft.created_at.format("%Y%m%d_%H%M%S")
        );
        let path = self.root.join(STORIES_DIR).join(file_name);
        write_pretty(&path, draft)?;
        Ok(path)
    }
}
