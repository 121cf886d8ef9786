// Operations: one function per CLI command, each a complete
// read-compute-write transaction over the store. Validation happens before
// the first write so a rejected command leaves no partial state.

mod finish;
mod reports;
mod scene;
mod show;

pub use finish::{FinishInput, FinishOutcome, finish};
pub use reports::{ReportOutcome, monthly_report, weekly_report};
pub use scene::{SavedScene, SceneFormat, save_scene};
pub use show::{DayView, show_day};
