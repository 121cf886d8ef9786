use crate::{Error, Result};
use std::path::PathBuf;
use writerops_store::Store;
use writerops_types::SceneDraft;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneFormat {
    /// `scenes/{NNN}_{slug}.txt`
    Text,
    /// `stories/{slug}_{timestamp}.json`
    Json,
}

#[derive(Debug, Clone)]
pub struct SavedScene {
    pub path: PathBuf,
    pub char_count: usize,
}

pub fn save_scene(store: &Store, title: &str, text: &str, format: SceneFormat) -> Result<SavedScene> {
    let title = title.trim();
    if title.is_empty() {
        return Err(Error::InvalidInput("scene title is required".to_string()));
    }
    if text.trim().is_empty() {
        return Err(Error::InvalidInput("scene text is required".to_string()));
    }

    let draft = SceneDraft::new(title, text);
    let path = match format {
        SceneFormat::Text => store.save_scene_text(&draft.title, &draft.text)?,
        SceneFormat::Json => store.save_scene_json(&draft)?,
    };

    tracing::info!(path = %path.display(), chars = draft.char_count(), "scene saved");
    Ok(SavedScene {
        path,
        char_count: draft.char_count(),
    })
}
