use crate::distribution::{validate_distribution, DistributionSlice, FULL_PERCENT};
use crate::error::Result;
use serde::{Deserialize, Serialize};

pub const DEGREES_PER_PERCENT: f64 = 3.6;
pub const FULL_TURN_DEG: f64 = 360.0;

/// Angular extent of one distribution slice.
///
/// Angles are degrees in the drawing system's native orientation, 0° on the
/// positive x-axis. Starting at 12 o'clock is a constant rotation applied by
/// the renderer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PieSlice {
	pub mood: String,
	pub start_angle_deg: f64,
	pub end_angle_deg: f64,
	/// Sweep is over 180°, the SVG `large-arc-flag`.
	pub large_arc: bool,
	/// The slice is the whole pie. Its start and end points coincide, so it
	/// must be drawn as a circle rather than an arc.
	pub full_circle: bool,
}

impl PieSlice {
	pub fn sweep_deg(&self) -> f64 {
		self.end_angle_deg - self.start_angle_deg
	}

	/// Start and end points on the unit circle, `(x, y)` each.
	pub fn endpoints(&self) -> ((f64, f64), (f64, f64)) {
		(unit_point(self.start_angle_deg), unit_point(self.end_angle_deg))
	}
}

fn unit_point(angle_deg: f64) -> (f64, f64) {
	let radians = angle_deg.to_radians();
	(radians.cos(), radians.sin())
}

/// Walk the distribution accumulating percentages into angles.
///
/// An empty distribution gives an empty pie.
///
/// # Errors
/// Fails with a validation error when a slice percentage exceeds 100, or
/// when the percentages do not sum to 100 within rounding.
pub fn pie_geometry(distribution: &[DistributionSlice]) -> Result<Vec<PieSlice>> {
	validate_distribution(distribution)?;

	let mut cumulative: u32 = 0;
	let mut slices = Vec::with_capacity(distribution.len());

	for slice in distribution {
		let start_angle_deg = f64::from(cumulative) * DEGREES_PER_PERCENT;
		let full_circle = slice.percentage == FULL_PERCENT;
		let end_angle_deg = if full_circle {
			start_angle_deg + FULL_TURN_DEG
		} else {
			f64::from(cumulative + slice.percentage) * DEGREES_PER_PERCENT
		};

		slices.push(PieSlice {
			mood: slice.mood.clone(),
			start_angle_deg,
			end_angle_deg,
			large_arc: slice.percentage > 50,
			full_circle,
		});
		cumulative += slice.percentage;
	}

	Ok(slices)
}
