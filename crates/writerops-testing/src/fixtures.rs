use chrono::NaiveDate;
use writerops_types::{DailyRecord, Difficulty, Role};

/// Parse a `YYYY-MM-DD` literal; panics on bad input since it is test data.
pub fn date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").expect("fixture date must be YYYY-MM-DD")
}

/// A complete daily record as `finish` would have written it.
pub fn record(raw_date: &str, chars: u64, level: u8, role: &str, summary: &str) -> DailyRecord {
    DailyRecord {
        date: date(raw_date),
        char_count: chars,
        difficulty: Some(Difficulty::from_level(level)),
        summary: summary.to_string(),
        role: Some(Role::from(role.to_string())),
        emergency_mode: false,
    }
}

/// Three sessions inside 2026-W07 (2026-02-09 ..= 2026-02-15).
pub fn sample_week() -> Vec<DailyRecord> {
    let mut rushed = record("2026-02-12", 800, 3, "갈등 심화", "지하철 추격");
    rushed.emergency_mode = true;

    vec![
        record("2026-02-09", 1200, 2, "관계 진전", "옥상에서 고백"),
        record("2026-02-10", 1500, 1, "정보 공개", "편지의 발신인"),
        rushed,
    ]
}
