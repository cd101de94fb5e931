use super::scale::{IntensityScale, LinearScale, PERCENT_RANGE};
use crate::entry::{validate_entries, MoodEntry};
use crate::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LinePoint {
	pub x_percent: f64,
	pub y_percent: f64,
}

/// Polyline vertices for a window, joined by straight segments.
///
/// `x_percent(i) = i / (n - 1) * 100`, with a single entry placed at 0.
///
/// `y_percent(i) = 100 - intensity / 10 * 100`. The subtraction is there
/// because the target surface has its origin at the top-left corner, so the
/// highest intensity sits at `y = 0`. A surface with a bottom-left origin must
/// use `intensity / 10 * 100` instead, or the trend line comes out flipped.
///
/// # Errors
/// Fails with a validation error when any intensity is outside `1..=10`.
#[allow(clippy::cast_precision_loss)]
pub fn line_geometry(entries: &[MoodEntry]) -> Result<Vec<LinePoint>> {
	validate_entries(entries)?;

	let last_index = entries.len().saturating_sub(1);
	let x = LinearScale::new([0.0, last_index as f64], PERCENT_RANGE);
	let y = IntensityScale::new(true);

	Ok(
		entries
			.iter()
			.enumerate()
			.map(|(index, entry)| LinePoint {
				x_percent: x.scale(index as f64),
				y_percent: y.percent(entry.intensity),
			})
			.collect(),
	)
}

/// `"x,y x,y ..."`, the `points` attribute of an SVG polyline.
pub fn polyline_points(points: &[LinePoint]) -> String {
	points
		.iter()
		.map(|point| format!("{},{}", point.x_percent, point.y_percent))
		.collect::<Vec<_>>()
		.join(" ")
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::NaiveDate;

	fn window(intensities: &[u8]) -> Vec<MoodEntry> {
		let start = NaiveDate::from_ymd_opt(2024, 8, 1).unwrap();
		intensities
			.iter()
			.zip(start.iter_days())
			.map(|(&intensity, date)| MoodEntry::new(date, "Calm", intensity))
			.collect()
	}

	fn close(a: f64, b: f64) -> bool {
		(a - b).abs() < 1e-9
	}

	#[test]
	fn test_points() {
		let points = line_geometry(&window(&[10, 5, 1])).unwrap();
		assert!(close(points[0].x_percent, 0.0) && close(points[0].y_percent, 0.0));
		assert!(close(points[1].x_percent, 50.0) && close(points[1].y_percent, 50.0));
		assert!(close(points[2].x_percent, 100.0) && close(points[2].y_percent, 90.0));
	}

	#[test]
	fn test_single_point_at_origin_column() {
		let points = line_geometry(&window(&[7])).unwrap();
		assert_eq!(points.len(), 1);
		assert!(close(points[0].x_percent, 0.0));
		assert!(close(points[0].y_percent, 30.0));
	}

	#[test]
	fn test_higher_intensity_is_higher_on_screen() {
		let points = line_geometry(&window(&[2, 9])).unwrap();
		assert!(points[1].y_percent < points[0].y_percent);
	}

	#[test]
	fn test_rejects_out_of_range() {
		assert!(line_geometry(&window(&[5, 0])).is_err());
		assert!(line_geometry(&[]).unwrap().is_empty());
	}

	#[test]
	fn test_polyline_points() {
		let points = vec![
			LinePoint {
				x_percent: 0.0,
				y_percent: 20.0,
			},
			LinePoint {
				x_percent: 100.0,
				y_percent: 50.5,
			},
		];
		assert_eq!(polyline_points(&points), "0,20 100,50.5");
		assert_eq!(polyline_points(&[]), "");
	}
}
