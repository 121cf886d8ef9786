use crate::{CONFIG_FILE, DAILY_DIR, Error, Result};
use std::path::{Path, PathBuf};

/// Resolve the data directory based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. WRITEROPS_PATH environment variable (with tilde expansion)
/// 3. Current directory, when it already holds a config.json or daily/
/// 4. System data directory
/// 5. ~/.writerops (fallback for systems without a data directory)
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("WRITEROPS_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Ok(cwd) = std::env::current_dir()
        && looks_like_data_dir(&cwd)
    {
        return Ok(cwd);
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("writerops"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".writerops"));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME directory or system data directory found"
            .to_string(),
    ))
}

fn looks_like_data_dir(dir: &Path) -> bool {
    dir.join(CONFIG_FILE).is_file() || dir.join(DAILY_DIR).is_dir()
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}
