use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use writerops_runtime::Classification;
use writerops_types::{DailyRecord, Highlight, Progress, Role};

/// Terminal styling switch; colors only when stdout is a terminal
#[derive(Debug, Clone, Copy)]
pub struct Style {
    color: bool,
}

impl Style {
    pub fn detect() -> Self {
        Self {
            color: std::io::stdout().is_terminal(),
        }
    }

    pub fn plain() -> Self {
        Self { color: false }
    }

    fn label(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn good(&self, text: &str) -> String {
        if self.color {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }

    fn muted(&self, text: &str) -> String {
        if self.color {
            text.yellow().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn progress_line(&self, today: u64, progress: &Progress) -> String {
        let tail = match progress.percent() {
            Some(pct) => format!(
                "{} / {} ({:.1}%)",
                progress.total_written, progress.monthly_goal, pct
            ),
            None => format!("{} (월간 목표 미설정)", progress.total_written),
        };
        format!(
            "{} {} | {} {}",
            self.label("오늘 글자수:"),
            today,
            self.label("누적:"),
            tail
        )
    }

    pub fn role_line(&self, role: &Classification<Role>) -> String {
        match role {
            Classification::Classified(role) => {
                format!("{} {}", self.label("장면 역할:"), self.good(role.label()))
            }
            Classification::Fallback { reason } => format!(
                "{} {} ({})",
                self.label("장면 역할:"),
                self.muted(Role::Unclassified.label()),
                reason
            ),
        }
    }

    pub fn highlight_line(&self, highlight: &Highlight) -> String {
        let mut line = format!(
            "{} [{}] {}",
            highlight.date,
            highlight.kind.tag(),
            highlight.location
        );
        if !highlight.memo.is_empty() {
            line.push_str(" - ");
            line.push_str(&highlight.memo);
        }
        line
    }

    pub fn record_lines(&self, record: &DailyRecord) -> Vec<String> {
        let difficulty = record
            .difficulty
            .map(|d| d.stars())
            .unwrap_or_else(|| "-".to_string());
        let role = record
            .role
            .as_ref()
            .map(|r| r.label().to_string())
            .unwrap_or_else(|| "-".to_string());

        let mut lines = vec![
            format!("{} {}", self.label("날짜:"), record.date),
            format!("{} {}", self.label("글자수:"), record.char_count),
            format!("{} {}", self.label("난이도:"), difficulty),
            format!("{} {}", self.label("요약:"), record.summary),
            format!("{} {}", self.label("역할:"), role),
        ];
        if record.emergency_mode {
            lines.push(self.muted("긴급 모드로 작성"));
        }
        lines
    }
}
