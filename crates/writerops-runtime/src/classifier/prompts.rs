use writerops_engine::SceneSummary;
use writerops_types::{HighlightKind, Role};

pub(crate) fn scene_prompt(text: &str) -> String {
    let tagged = Role::TAGGED;
    let roles: Vec<&str> = tagged.iter().map(|role| role.label()).collect();
    let kinds: Vec<&str> = HighlightKind::ALL.iter().map(|kind| kind.tag()).collect();

    format!(
        "다음 장면을 읽고 서사적 역할을 판단하세요.\n\
         역할은 반드시 다음 중 하나입니다: {roles}\n\
         장면이 특히 뛰어나다면 하이라이트로 표시하고, 유형은 다음 중 하나입니다: {kinds}\n\
         \n\
         아래 형식으로만 답하세요.\n\
         역할: <역할>\n\
         하이라이트: <예|아니오>\n\
         유형: <유형 또는 비워 두기>\n\
         이유: <한 줄 이유>\n\
         \n\
         장면:\n{text}",
        roles = roles.join(", "),
        kinds = kinds.join(", "),
        text = text.trim(),
    )
}

pub(crate) fn irreversible_changes_prompt(summaries: &[SceneSummary]) -> String {
    format!(
        "다음은 한 달 동안 쓴 장면 요약입니다.\n\
         이야기에서 되돌릴 수 없는 변화(관계의 단절, 비밀의 폭로, 인물의 결정적 선택 등)가 \
         일어난 장면을 찾아 '- 날짜: 변화' 형식의 목록으로 답하세요. \
         없다면 '없음'이라고 답하세요.\n\
         \n\
         {}",
        summary_lines(summaries)
    )
}

pub(crate) fn excellence_prompt(summaries: &[SceneSummary]) -> String {
    format!(
        "다음은 한 달 동안 쓴 장면 요약입니다.\n\
         대사, 분위기, 구조, 관계, 캐릭터 중 하나에서 특히 뛰어난 장면을 골라 \
         '- 날짜 (유형): 이유' 형식의 목록으로 답하세요. \
         없다면 '없음'이라고 답하세요.\n\
         \n\
         {}",
        summary_lines(summaries)
    )
}

fn summary_lines(summaries: &[SceneSummary]) -> String {
    summaries
        .iter()
        .map(|entry| format!("- {}: {}", entry.date.format("%Y-%m-%d"), entry.summary))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_scene_prompt_lists_vocabulary() {
        let prompt = scene_prompt("  비가 왔다.  ");
        assert!(prompt.contains("관계 진전, 정보 공개, 갈등 심화, 전환, 여운, 리듬 유지"));
        assert!(prompt.contains("대사, 분위기, 구조, 관계, 캐릭터"));
        assert!(prompt.ends_with("장면:\n비가 왔다."));
    }

    #[test]
    fn test_month_prompts_include_dated_summaries() {
        let summaries = vec![SceneSummary {
            date: NaiveDate::from_ymd_opt(2026, 3, 4).unwrap(),
            summary: "집을 떠난다".to_string(),
        }];
        assert!(irreversible_changes_prompt(&summaries).ends_with("- 2026-03-04: 집을 떠난다"));
        assert!(excellence_prompt(&summaries).ends_with("- 2026-03-04: 집을 떠난다"));
    }
}
