pub mod error;
pub mod highlight;
pub mod progress;
pub mod record;
pub mod role;
pub mod scene;

pub use error::{Error, Result};
pub use highlight::{Highlight, HighlightKind};
pub use progress::Progress;
pub use record::{DailyRecord, Difficulty};
pub use role::Role;
pub use scene::SceneDraft;
