// Scene classifier boundary.
//
// Every public entry point returns a value, never an error: transport,
// auth and parse failures become an explicit `Fallback` so callers can
// finish their write with the sentinel role.

mod client;
mod parse;
mod prompts;

pub use client::{AnthropicClient, ClassifierError, CompletionClient};

use crate::ClassifierSettings;
use parse::{field, is_affirmative, labeled_lines};
use writerops_engine::{MonthlyAnalysis, SceneSummary};
use writerops_types::{HighlightKind, Role};

const ROLE_LABELS: &[&str] = &["역할", "role"];
const HIGHLIGHT_LABELS: &[&str] = &["하이라이트", "highlight"];
const KIND_LABELS: &[&str] = &["유형", "type"];
const REASON_LABELS: &[&str] = &["이유", "reason"];

/// Outcome of one classification: a judged value or the reason it fell back
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification<T> {
    Classified(T),
    Fallback { reason: String },
}

impl<T> Classification<T> {
    pub fn is_classified(&self) -> bool {
        matches!(self, Classification::Classified(_))
    }
}

impl Classification<Role> {
    /// The judged role, or the `미분류` sentinel
    pub fn role(&self) -> Role {
        match self {
            Classification::Classified(role) => role.clone(),
            Classification::Fallback { .. } => Role::Unclassified,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightJudgment {
    pub kind: HighlightKind,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneJudgment {
    pub role: Classification<Role>,
    pub highlight: Option<HighlightJudgment>,
}

impl SceneJudgment {
    fn fallback(reason: impl Into<String>) -> Self {
        Self {
            role: Classification::Fallback {
                reason: reason.into(),
            },
            highlight: None,
        }
    }
}

/// Parse a scene response. Missing or unknown tags fall back per field.
pub fn parse_scene_judgment(response: &str) -> SceneJudgment {
    let pairs = labeled_lines(response);

    let role = match field(&pairs, ROLE_LABELS) {
        Some(tag) => match Role::from_tag(tag) {
            Some(role) => Classification::Classified(role),
            None => Classification::Fallback {
                reason: format!("role '{}' is not an allowed tag", tag),
            },
        },
        None => Classification::Fallback {
            reason: "response has no role line".to_string(),
        },
    };

    let highlight = field(&pairs, HIGHLIGHT_LABELS)
        .filter(|flag| is_affirmative(flag))
        .and_then(|_| field(&pairs, KIND_LABELS))
        .and_then(|kind| kind.parse::<HighlightKind>().ok())
        .map(|kind| HighlightJudgment {
            kind,
            reason: field(&pairs, REASON_LABELS).unwrap_or_default().to_string(),
        });

    SceneJudgment { role, highlight }
}

enum Backend<'a> {
    Disabled,
    Unavailable(ClassifierError),
    Client(Box<dyn CompletionClient + 'a>),
}

pub struct Classifier<'a> {
    backend: Backend<'a>,
}

impl<'a> Classifier<'a> {
    /// A classifier that never calls out and always falls back
    pub fn disabled() -> Self {
        Self {
            backend: Backend::Disabled,
        }
    }

    pub fn with_client(client: impl CompletionClient + 'a) -> Self {
        Self {
            backend: Backend::Client(Box::new(client)),
        }
    }

    /// Build from settings. A missing API key is kept as the fallback
    /// reason instead of failing here.
    pub fn from_settings(settings: &ClassifierSettings) -> Classifier<'static> {
        if !settings.enabled {
            return Classifier::disabled();
        }
        match AnthropicClient::from_settings(settings) {
            Ok(client) => Classifier::with_client(client),
            Err(err) => Classifier {
                backend: Backend::Unavailable(err),
            },
        }
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self.backend, Backend::Disabled)
    }

    fn complete(&self, prompt: &str) -> Result<String, String> {
        match &self.backend {
            Backend::Disabled => Err("classifier disabled".to_string()),
            Backend::Unavailable(err) => Err(err.to_string()),
            Backend::Client(client) => client.complete(prompt).map_err(|err| err.to_string()),
        }
    }

    /// Judge a scene's role and whether it is a highlight.
    pub fn classify_scene(&self, text: &str) -> SceneJudgment {
        let judgment = match self.complete(&prompts::scene_prompt(text)) {
            Ok(response) => parse_scene_judgment(&response),
            Err(reason) => SceneJudgment::fallback(reason),
        };

        if let Classification::Fallback { reason } = &judgment.role {
            if self.is_enabled() {
                tracing::warn!(%reason, "scene classification failed, recording {}", Role::UNCLASSIFIED_LABEL);
            } else {
                tracing::debug!(%reason, "scene classification skipped");
            }
        }
        judgment
    }

    /// The two monthly narrative analyses over the month's summaries.
    ///
    /// With no summaries the client is not called and both texts stay empty.
    pub fn analyze_month(&self, summaries: &[SceneSummary]) -> MonthlyAnalysis {
        if summaries.is_empty() {
            return MonthlyAnalysis::default();
        }

        MonthlyAnalysis {
            irreversible_changes: self
                .analysis_text(&prompts::irreversible_changes_prompt(summaries)),
            excellence_highlights: self.analysis_text(&prompts::excellence_prompt(summaries)),
        }
    }

    fn analysis_text(&self, prompt: &str) -> String {
        if !self.is_enabled() {
            return "(분류기 비활성화)".to_string();
        }
        match self.complete(prompt) {
            Ok(text) => text.trim().to_string(),
            Err(reason) => {
                tracing::warn!(%reason, "monthly analysis failed");
                format!("(분석 실패: {})", reason)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::cell::{Cell, RefCell};

    struct ScriptedClient {
        reply: Result<String, ClassifierError>,
        calls: Cell<usize>,
        prompts: RefCell<Vec<String>>,
    }

    impl ScriptedClient {
        fn replying(text: &str) -> Self {
            Self {
                reply: Ok(text.to_string()),
                calls: Cell::new(0),
                prompts: RefCell::new(Vec::new()),
            }
        }

        fn failing(err: ClassifierError) -> Self {
            Self {
                reply: Err(err),
                calls: Cell::new(0),
                prompts: RefCell::new(Vec::new()),
            }
        }
    }

    impl CompletionClient for ScriptedClient {
        fn complete(&self, prompt: &str) -> Result<String, ClassifierError> {
            self.calls.set(self.calls.get() + 1);
            self.prompts.borrow_mut().push(prompt.to_string());
            self.reply.clone()
        }
    }

    #[test]
    fn test_parse_full_judgment() {
        let judgment =
            parse_scene_judgment("역할: 갈등 심화\n하이라이트: 예\n유형: 대사\n이유: 말다툼이 생생하다");
        assert_eq!(judgment.role, Classification::Classified(Role::ConflictEscalation));
        assert_eq!(
            judgment.highlight,
            Some(HighlightJudgment {
                kind: HighlightKind::Dialogue,
                reason: "말다툼이 생생하다".to_string()
            })
        );
    }

    #[test]
    fn test_parse_unknown_role_falls_back() {
        let judgment = parse_scene_judgment("역할: 클라이맥스\n하이라이트: 아니오");
        assert_eq!(judgment.role.role(), Role::Unclassified);
        assert!(!judgment.role.is_classified());
        assert!(judgment.highlight.is_none());
    }

    #[test]
    fn test_parse_highlight_needs_known_type() {
        let judgment = parse_scene_judgment("role: 여운\nhighlight: yes\ntype: plot");
        assert_eq!(judgment.role.role(), Role::LingeringResonance);
        assert!(judgment.highlight.is_none());
    }

    #[test]
    fn test_client_failure_degrades_to_sentinel() {
        let client = ScriptedClient::failing(ClassifierError::Transport("connection refused".into()));
        let classifier = Classifier::with_client(&client);

        let judgment = classifier.classify_scene("장면");
        assert_eq!(judgment.role.role(), Role::Unclassified);
        assert_eq!(
            judgment.role,
            Classification::Fallback {
                reason: "request failed: connection refused".to_string()
            }
        );
        assert_eq!(client.calls.get(), 1);
    }

    #[test]
    fn test_disabled_classifier_never_calls() {
        let judgment = Classifier::disabled().classify_scene("장면");
        assert_eq!(judgment.role.role(), Role::Unclassified);
    }

    #[test]
    fn test_analyze_month_without_summaries_skips_client() {
        let client = ScriptedClient::replying("없음");
        let classifier = Classifier::with_client(&client);

        let analysis = classifier.analyze_month(&[]);
        assert_eq!(analysis, MonthlyAnalysis::default());
        assert_eq!(client.calls.get(), 0);
    }

    #[test]
    fn test_analyze_month_runs_both_prompts() {
        let client = ScriptedClient::replying("  - 2026-03-04: 집을 떠난다 \n");
        let classifier = Classifier::with_client(&client);
        let summaries = vec![SceneSummary {
            date: NaiveDate::from_ymd_opt(2026, 3, 4).unwrap(),
            summary: "집을 떠난다".to_string(),
        }];

        let analysis = classifier.analyze_month(&summaries);
        assert_eq!(analysis.irreversible_changes, "- 2026-03-04: 집을 떠난다");
        assert_eq!(analysis.excellence_highlights, "- 2026-03-04: 집을 떠난다");
        assert_eq!(client.calls.get(), 2);
        assert!(client.prompts.borrow()[0].contains("되돌릴 수 없는 변화"));
    }

    #[test]
    fn test_analyze_month_failure_notice() {
        let client = ScriptedClient::failing(ClassifierError::Status {
            status: 500,
            message: "overloaded".into(),
        });
        let classifier = Classifier::with_client(&client);
        let summaries = vec![SceneSummary {
            date: NaiveDate::from_ymd_opt(2026, 3, 4).unwrap(),
            summary: "집을 떠난다".to_string(),
        }];

        let analysis = classifier.analyze_month(&summaries);
        assert_eq!(analysis.irreversible_changes, "(분석 실패: API returned 500: overloaded)");
    }
}
