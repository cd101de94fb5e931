//! Axis tick generation following d3-array's `ticks`
//! (<https://github.com/d3/d3-array/blob/main/src/ticks.js>): steps are
//! 1, 2 or 5 times a power of ten.

const E10: f64 = 7.071_067_811_865_475_5; // sqrt(50.0)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10.0)
const E2: f64 = 1.414_213_562_373_095_1; // sqrt(2.0)

#[derive(Debug, Clone, Copy, PartialEq)]
struct TickSpec {
	first: i64,
	last: i64,
	/// Negative values hold the reciprocal of a sub-unit step, which keeps
	/// values like 0.1 exact.
	increment: f64,
}

impl TickSpec {
	#[allow(clippy::cast_precision_loss)]
	fn value(&self, index: i64) -> f64 {
		if self.increment < 0.0 {
			index as f64 / -self.increment
		} else {
			index as f64 * self.increment
		}
	}
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn tick_spec(start: f64, stop: f64, count: f64) -> Option<TickSpec> {
	if count <= 0.0 || stop <= start {
		return None;
	}

	let step = (stop - start) / count;
	let power = step.log10().floor() as i32;
	let error = step / 10f64.powi(power);
	let factor = match error {
		e if e >= E10 => 10.0,
		e if e >= E5 => 5.0,
		e if e >= E2 => 2.0,
		_ => 1.0,
	};

	let spec = if power < 0 {
		let inc = 10f64.powi(-power) / factor;
		let mut first = (start * inc).round() as i64;
		let mut last = (stop * inc).round() as i64;
		if (first as f64) / inc < start {
			first += 1;
		}
		if (last as f64) / inc > stop {
			last -= 1;
		}
		TickSpec { first, last, increment: -inc }
	} else {
		let inc = 10f64.powi(power) * factor;
		let mut first = (start / inc).round() as i64;
		let mut last = (stop / inc).round() as i64;
		if (first as f64) * inc < start {
			first += 1;
		}
		if (last as f64) * inc > stop {
			last -= 1;
		}
		TickSpec { first, last, increment: inc }
	};

	if spec.last < spec.first && (0.5..2.0).contains(&count) {
		return tick_spec(start, stop, count * 2.0);
	}

	Some(spec)
}

/// Roughly `count` nicely rounded values within `[start, stop]`, ascending.
/// A reversed interval yields descending ticks.
#[allow(clippy::cast_precision_loss)]
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
	if count == 0 {
		return Vec::new();
	}
	if (start - stop).abs() < f64::EPSILON {
		return vec![start];
	}

	let reverse = stop < start;
	let (low, high) = if reverse { (stop, start) } else { (start, stop) };

	let Some(spec) = tick_spec(low, high, count as f64) else {
		return Vec::new();
	};

	let mut values: Vec<f64> = (spec.first..=spec.last).map(|index| spec.value(index)).collect();
	if reverse {
		values.reverse();
	}
	values
}
