pub mod finish;
pub mod highlights;
pub mod report;
pub mod scene;
pub mod show;

use std::path::Path;
use writerops_store::Store;

/// Path as shown to the user: relative to the data dir when possible
pub(crate) fn display_path(store: &Store, path: &Path) -> String {
    path.strip_prefix(store.root())
        .unwrap_or(path)
        .display()
        .to_string()
}
