//! Mood analytics over a user's journal history.
//!
//! Every function here is a pure computation over a slice of [`MoodEntry`]
//! values supplied by the caller: nothing is cached, stored or fetched, and
//! calling twice with the same input gives the same output.

pub mod calendar;
pub mod chart;
pub mod distribution;
pub mod entry;
pub mod error;
mod frequency;
pub mod report;
pub mod stats;
pub mod streak;
pub mod window;

pub use calendar::{build_month_grid, build_month_grid_with, CalendarDay, WeekStart, YearMonth, GRID_CELLS};
pub use chart::{bar_geometry, line_geometry, pie_geometry, BarGeometry, LinePoint, PieSlice};
pub use distribution::{compute_distribution, validate_distribution, DistributionSlice};
pub use entry::{chronological_bounds, validate_entries, MoodEntry, MAX_INTENSITY, MIN_INTENSITY};
pub use error::{AnalyticsError, CalendarError, Result, ValidationError};
pub use report::{MoodReport, ReportOptions};
pub use stats::{compute_stats, StatsSummary, Trend, TrendDirection};
pub use streak::{current_streak, longest_streak, streak_days};
