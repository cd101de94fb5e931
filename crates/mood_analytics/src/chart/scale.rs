use super::ticks::ticks;
use crate::entry::MAX_INTENSITY;

/// Default number of intensity axis intervals, giving `0, 2, 4, 6, 8, 10`.
pub const AXIS_TICK_COUNT: usize = 5;

/// Percent space every geometry is expressed in.
pub const PERCENT_RANGE: [f64; 2] = [0.0, 100.0];

/// Two-point linear scale. Values outside the domain extrapolate, they are
/// never clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
	domain: [f64; 2],
	range: [f64; 2],
}

impl LinearScale {
	#[must_use]
	pub const fn new(domain: [f64; 2], range: [f64; 2]) -> Self {
		Self { domain, range }
	}

	#[must_use]
	pub fn scale(&self, value: f64) -> f64 {
		let [d0, d1] = self.domain;
		let [r0, r1] = self.range;
		let width = d1 - d0;
		let t = if width == 0.0 { 0.0 } else { (value - d0) / width };
		r0 * (1.0 - t) + r1 * t
	}

	/// Human-friendly tick values across the domain.
	pub fn ticks(&self, count: usize) -> Vec<f64> {
		ticks(self.domain[0], self.domain[1], count)
	}
}

/// Intensity 0..=10 onto 0..=100, the bar height mapping.
#[must_use]
pub fn intensity_scale() -> IntensityScale {
	IntensityScale::new(false)
}

/// Linear intensity to percent mapping shared by the bar and line charts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntensityScale {
	inner: LinearScale,
}

impl IntensityScale {
	/// `inverted` maps the top of the intensity domain to 0, for top-left
	/// origin surfaces.
	#[must_use]
	pub fn new(inverted: bool) -> Self {
		let [low, high] = PERCENT_RANGE;
		let range = if inverted { [high, low] } else { [low, high] };
		Self {
			inner: LinearScale::new([0.0, f64::from(MAX_INTENSITY)], range),
		}
	}

	#[must_use]
	pub fn percent(&self, intensity: u8) -> f64 {
		self.inner.scale(f64::from(intensity))
	}
}

/// Tick values for an intensity axis, e.g. `[0, 2, 4, 6, 8, 10]` for 5.
pub fn intensity_axis_ticks(count: usize) -> Vec<f64> {
	LinearScale::new([0.0, f64::from(MAX_INTENSITY)], PERCENT_RANGE).ticks(count)
}
