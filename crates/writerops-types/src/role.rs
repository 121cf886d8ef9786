use serde::{Deserialize, Serialize};
use std::fmt;

/// Narrative function of a scene.
///
/// The six tagged roles form the fixed vocabulary offered to the classifier.
/// `Unclassified` is the sentinel written when classification is skipped or
/// fails. Labels read from disk that match neither are kept verbatim in
/// `Other` so hand-edited records still aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    RelationshipProgress,
    InformationReveal,
    ConflictEscalation,
    Transition,
    LingeringResonance,
    RhythmMaintenance,
    Unclassified,
    Other(String),
}

impl Role {
    /// Tags a classifier may answer with, in prompt order
    pub const TAGGED: [Role; 6] = [
        Role::RelationshipProgress,
        Role::InformationReveal,
        Role::ConflictEscalation,
        Role::Transition,
        Role::LingeringResonance,
        Role::RhythmMaintenance,
    ];

    pub const UNCLASSIFIED_LABEL: &'static str = "미분류";

    pub fn label(&self) -> &str {
        match self {
            Role::RelationshipProgress => "관계 진전",
            Role::InformationReveal => "정보 공개",
            Role::ConflictEscalation => "갈등 심화",
            Role::Transition => "전환",
            Role::LingeringResonance => "여운",
            Role::RhythmMaintenance => "리듬 유지",
            Role::Unclassified => Self::UNCLASSIFIED_LABEL,
            Role::Other(label) => label,
        }
    }

    /// Match a tag against the fixed vocabulary only.
    ///
    /// Whitespace around the tag and inside it is ignored, so `관계진전`
    /// and ` 관계 진전 ` both resolve. Returns `None` for the sentinel and
    /// for anything outside the six tags.
    pub fn from_tag(tag: &str) -> Option<Role> {
        let wanted: String = tag.chars().filter(|c| !c.is_whitespace()).collect();
        Self::TAGGED.into_iter().find(|role| {
            role.label()
                .chars()
                .filter(|c| !c.is_whitespace())
                .eq(wanted.chars())
        })
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for Role {
    fn from(label: String) -> Self {
        if label == Self::UNCLASSIFIED_LABEL {
            return Role::Unclassified;
        }
        Role::from_tag(&label).unwrap_or(Role::Other(label))
    }
}

impl From<&str> for Role {
    fn from(label: &str) -> Self {
        Role::from(label.to_string())
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Other(label) => label,
            known => known.label().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag_ignores_spacing() {
        assert_eq!(Role::from_tag("관계진전"), Some(Role::RelationshipProgress));
        assert_eq!(Role::from_tag("  리듬 유지 "), Some(Role::RhythmMaintenance));
        assert_eq!(Role::from_tag("미분류"), None);
        assert_eq!(Role::from_tag("클라이맥스"), None);
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&Role::ConflictEscalation).unwrap();
        assert_eq!(json, "\"갈등 심화\"");

        let role: Role = serde_json::from_str("\"미분류\"").unwrap();
        assert_eq!(role, Role::Unclassified);

        let role: Role = serde_json::from_str("\"복선\"").unwrap();
        assert_eq!(role, Role::Other("복선".to_string()));
        assert_eq!(serde_json::to_string(&role).unwrap(), "\"복선\"");
    }
}
