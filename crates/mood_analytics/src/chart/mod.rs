//! Renderer-agnostic chart geometry. Everything is expressed in percent of
//! the plot area or in degrees; colours, sizes and drawing belong to the caller.

pub mod bar;
pub mod line;
pub mod pie;
pub mod scale;
pub mod ticks;

pub use bar::{bar_geometry, BarGeometry};
pub use line::{line_geometry, polyline_points, LinePoint};
pub use pie::{pie_geometry, PieSlice};
pub use scale::{intensity_axis_ticks, IntensityScale, LinearScale, AXIS_TICK_COUNT};
