/// Split a `Label: value` response into normalized pairs.
///
/// Labels are lowercased with markdown emphasis and list markers removed,
/// so `**역할**: 전환` and `- Role: 전환` both yield `("역할"|"role", "전환")`.
/// Lines without a separator are skipped.
pub(crate) fn labeled_lines(response: &str) -> Vec<(String, String)> {
    response
        .lines()
        .filter_map(|line| {
            let line = line.trim().trim_start_matches(['-', '*', '•']).trim();
            let (label, value) = line.split_once([':', '：'])?;
            let label = label.trim().trim_matches('*').trim().to_lowercase();
            let value = value.trim().trim_matches('*').trim();
            if label.is_empty() {
                return None;
            }
            Some((label, value.to_string()))
        })
        .collect()
}

/// First value whose label is one of `aliases`
pub(crate) fn field<'a>(pairs: &'a [(String, String)], aliases: &[&str]) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(label, _)| aliases.contains(&label.as_str()))
        .map(|(_, value)| value.as_str())
        .filter(|value| !value.is_empty())
}

pub(crate) fn is_affirmative(value: &str) -> bool {
    let value = value.trim().to_lowercase();
    matches!(
        value.as_str(),
        "예" | "네" | "있음" | "yes" | "y" | "true" | "o"
    )
}
