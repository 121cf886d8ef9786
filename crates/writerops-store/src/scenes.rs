use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use walkdir::WalkDir;

static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s-]").expect("valid slug regex"));
static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s_]+").expect("valid separator regex"));

/// Convert a title to a filesystem-safe slug.
///
/// Word characters (including Hangul) and `-` survive; whitespace runs
/// become a single `_`. An empty result falls back to `untitled`.
pub fn slugify(title: &str) -> String {
    let cleaned = DISALLOWED.replace_all(title, "");
    let slug = SEPARATORS.replace_all(cleaned.trim(), "_");
    if slug.is_empty() {
        "untitled".to_string()
    } else {
        slug.into_owned()
    }
}

/// Next scene number: count of existing `.txt` scene files plus one.
pub(crate) fn next_scene_number(scenes_dir: &Path) -> usize {
    if !scenes_dir.is_dir() {
        return 1;
    }

    let existing = WalkDir::new(scenes_dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "txt"))
        .count();

    existing + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_slugify_keeps_hangul_and_collapses_spaces() {
        assert_eq!(slugify("비 오는  밤의 고백!"), "비_오는_밤의_고백");
        assert_eq!(slugify("  act-2 / scene_3 "), "act-2_scene_3");
        assert_eq!(slugify("?!"), "untitled");
    }

    #[test]
    fn test_next_scene_number_counts_txt_only() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(next_scene_number(&temp_dir.path().join("missing")), 1);

        std::fs::write(temp_dir.path().join("001_a.txt"), "a").unwrap();
        std::fs::write(temp_dir.path().join("002_b.txt"), "b").unwrap();
        std::fs::write(temp_dir.path().join("notes.md"), "c").unwrap();
        assert_eq!(next_scene_number(temp_dir.path()), 3);
    }
}
