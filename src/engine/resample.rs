use crate::geom::{AABox, Point};
use glam::dvec2;
use itertools::Itertools;

/// Number of points both sides of a comparison are resampled to.
pub const SAMPLE_COUNT: usize = 50;

/// Fits `points` centered in the unit square with a uniform scale.
///
/// Returns `None` when every point coincides.
pub fn normalize(points: &[Point]) -> Option<Vec<Point>> {
	let bounds = AABox::containing(points.iter().copied());
	let max_dim = bounds.max_dimension();
	if !(max_dim > 0.0) {
		return None;
	}
	let size = bounds.size();
	let offset = (Point::ONE - size / max_dim) * 0.5;
	Some(
		points
			.iter()
			.map(|p| (*p - bounds.min()) / max_dim + offset)
			.collect(),
	)
}

pub fn arclength(points: &[Point]) -> f64 {
	points
		.iter()
		.tuple_windows()
		.map(|(a, b)| a.distance(*b))
		.sum()
}

/// Converts an arbitrary polyline into exactly `sample_count` points, evenly spaced by arclength, after
/// normalizing it into the unit square.
///
/// Fewer than two input points yield an empty sequence. Input whose points all coincide yields
/// `sample_count` copies of the unit square's center.
pub fn resample_and_normalize(points: &[Point], sample_count: usize) -> Vec<Point> {
	if points.len() < 2 || sample_count == 0 {
		return Vec::new();
	}

	let Some(normalized) = normalize(points) else {
		tracing::trace!(count = points.len(), "degenerate polyline, filling with center");
		return vec![dvec2(0.5, 0.5); sample_count];
	};

	let mut result = Vec::with_capacity(sample_count);
	result.push(normalized[0]);
	if sample_count > 1 {
		let step = arclength(&normalized) / (sample_count - 1) as f64;
		let mut traveled = 0.0;
		let mut next_sample = step;
		for (&a, &b) in normalized.iter().tuple_windows() {
			let d = a.distance(b);
			if d > 0.0 {
				while traveled + d >= next_sample && result.len() < sample_count {
					result.push(a.lerp(b, (next_sample - traveled) / d));
					next_sample += step;
				}
			}
			traveled += d;
		}
	}

	// Accumulated rounding can leave the tail short.
	let last = normalized[normalized.len() - 1];
	result.resize(sample_count, last);
	result
}
