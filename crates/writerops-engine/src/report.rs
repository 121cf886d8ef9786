use crate::{AggregateSummary, PeriodKind};
use std::fmt;

const NO_DATA: &str = "(데이터 없음)";

/// Render a summary as markdown.
///
/// Pure function of the summary: the same input always yields the same
/// bytes, so re-running a period rewrites an identical artifact.
pub fn format_report(summary: &AggregateSummary) -> String {
    ReportView::new(summary).to_string()
}

/// Markdown view over one aggregated period
pub struct ReportView<'a> {
    summary: &'a AggregateSummary,
}

impl<'a> ReportView<'a> {
    pub fn new(summary: &'a AggregateSummary) -> Self {
        Self { summary }
    }

    fn render_header(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let period = &self.summary.period;
        let title = match period.kind {
            PeriodKind::Weekly => "주간 리포트",
            PeriodKind::Monthly => "월간 리포트",
        };
        writeln!(f, "# {} {}", title, period.label)?;
        writeln!(f)?;
        writeln!(
            f,
            "기간: {} ~ {}",
            period.start.format("%Y-%m-%d"),
            period.end.format("%Y-%m-%d")
        )
    }

    fn render_counts(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let summary = self.summary;
        section(f, "작성 현황")?;
        writeln!(f, "- 작성일: {}일", summary.writing_days)?;
        writeln!(f, "- 휴식일: {}일", summary.rest_days)?;
        writeln!(f, "- 총 글자수: {}자", format_count(summary.total_chars))?;
        writeln!(f, "- 평균 글자수: {}자", format_count(summary.avg_chars))
    }

    fn render_difficulty(&self, f: &mut fmt::Formatter) -> fmt::Result {
        section(f, "난이도 분포")?;
        for (level, count) in self.summary.difficulty_distribution.iter() {
            let stars = "★".repeat(level as usize);
            writeln!(f, "- {} ({}): {}일", stars, level, count)?;
        }
        Ok(())
    }

    fn render_roles(&self, f: &mut fmt::Formatter) -> fmt::Result {
        section(f, "장면 역할")?;
        if self.summary.role_distribution.is_empty() {
            writeln!(f, "- 기록된 역할 없음")?;
        }
        for entry in &self.summary.role_distribution {
            writeln!(f, "- {}: {}회", entry.role, entry.count)?;
        }
        Ok(())
    }

    fn render_period_specific(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.summary.period.kind {
            PeriodKind::Weekly => {
                section(f, "긴급 모드")?;
                writeln!(f, "- 사용: {}회", self.summary.emergency_count)
            }
            PeriodKind::Monthly => {
                let analysis = self.summary.analysis.clone().unwrap_or_default();
                section(f, "되돌릴 수 없는 변화")?;
                writeln!(f, "{}", text_or_placeholder(&analysis.irreversible_changes))?;
                section(f, "탁월한 장면")?;
                writeln!(f, "{}", text_or_placeholder(&analysis.excellence_highlights))
            }
        }
    }
}

impl fmt::Display for ReportView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.render_header(f)?;
        self.render_counts(f)?;
        self.render_difficulty(f)?;
        self.render_roles(f)?;
        self.render_period_specific(f)
    }
}

fn section(f: &mut fmt::Formatter, heading: &str) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "## {}", heading)?;
    writeln!(f)
}

fn text_or_placeholder(text: &str) -> &str {
    let trimmed = text.trim();
    if trimmed.is_empty() { NO_DATA } else { trimmed }
}

/// Group digits by thousands: `12345` -> `12,345`
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
