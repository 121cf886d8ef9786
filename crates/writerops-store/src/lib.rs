// Flat-file store: one JSON file per day plus a handful of shared files.
// The store owns every path under the data directory; callers never build
// paths themselves.

mod error;
mod json;
mod scenes;
mod store;
mod workspace;

pub use error::{Error, Result};
pub use scenes::slugify;
pub use store::{
    CONFIG_FILE, DAILY_DIR, HIGHLIGHTS_FILE, REPORTS_DIR, SCENES_DIR, STORIES_DIR, Store,
};
pub use workspace::{expand_tilde, resolve_data_dir};
