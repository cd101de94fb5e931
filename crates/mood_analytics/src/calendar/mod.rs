pub mod grid;
pub mod month;

pub use grid::{build_month_grid, build_month_grid_with, CalendarDay, DAYS_PER_WEEK, GRID_CELLS, GRID_WEEKS};
pub use month::{WeekStart, YearMonth};
