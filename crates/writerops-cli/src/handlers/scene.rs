use crate::handlers::display_path;
use crate::prompt::Prompter;
use anyhow::Result;
use std::io::{BufRead, Write};
use writerops_runtime::ops::{self, SceneFormat};
use writerops_store::Store;

pub fn handle<R: BufRead, W: Write>(
    store: &Store,
    prompter: &mut Prompter<R, W>,
    title: Option<String>,
    json: bool,
) -> Result<()> {
    let title = match title {
        Some(t) => t,
        None => prompter.ask("장면 제목? ")?.unwrap_or_default(),
    };
    let text = prompter.read_multiline("장면 텍스트를 입력하세요 (빈 줄 두 번으로 종료):")?;

    let format = if json {
        SceneFormat::Json
    } else {
        SceneFormat::Text
    };
    let saved = ops::save_scene(store, &title, &text, format)?;

    println!(
        "저장 완료: {} ({}자)",
        display_path(store, &saved.path),
        saved.char_count
    );
    Ok(())
}
