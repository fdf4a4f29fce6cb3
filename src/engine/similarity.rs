use super::resample::{resample_and_normalize, SAMPLE_COUNT};
use crate::geom::Point;
use ordered_float::OrderedFloat;

/// Maps an average normalized-space distance onto a 0 to 100 score.
pub const ERROR_SCALE: f64 = 450.0;

/// Mean distance from each point of `from` to its nearest point of `to`.
fn directed_error(from: &[Point], to: &[Point]) -> f64 {
	if from.is_empty() {
		return 0.0;
	}
	let total: f64 = from
		.iter()
		.filter_map(|p| to.iter().map(|q| OrderedFloat(p.distance(*q))).min())
		.map(|d| d.0)
		.sum();
	total / from.len() as f64
}

/// Symmetric nearest-neighbor distance between two already resampled sequences.
pub fn symmetric_error(a: &[Point], b: &[Point]) -> f64 {
	(directed_error(a, b) + directed_error(b, a)) / 2.0
}

/// Resamples both polylines and returns their symmetric nearest-neighbor distance, or `None` if either is
/// too short to resample.
pub fn average_error(user_points: &[Point], target_points: &[Point]) -> Option<f64> {
	let user = resample_and_normalize(user_points, SAMPLE_COUNT);
	let target = resample_and_normalize(target_points, SAMPLE_COUNT);
	if user.is_empty() || target.is_empty() {
		return None;
	}
	Some(symmetric_error(&user, &target))
}

pub fn score_from_error(error: f64) -> u32 {
	(100.0 - error * ERROR_SCALE).round().max(0.0) as u32
}

/// Scores how closely `user_points` reproduces `target_points`, from 0 to 100.
pub fn score(user_points: &[Point], target_points: &[Point]) -> u32 {
	average_error(user_points, target_points).map_or(0, score_from_error)
}
