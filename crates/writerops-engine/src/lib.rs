// Engine module - pure aggregation and rendering
// Reads records handed over by the caller; never touches the filesystem.

pub mod aggregate;
pub mod period;
pub mod report;

pub use aggregate::{
    AggregateSummary, DifficultyDistribution, MonthlyAnalysis, RoleCount, SceneSummary, aggregate,
};
pub use period::{Period, PeriodKind, days_in_month, week_label, week_range};
pub use report::{ReportView, format_count, format_report};
