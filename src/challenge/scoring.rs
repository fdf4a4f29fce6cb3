use super::Difficulty;
use crate::engine::{self, ShapeDefinition, Stroke};

/// Deducted for each required attribute the decisive stroke misses.
pub const ATTRIBUTE_PENALTY: u32 = 15;

/// Deducted when nothing was drawn at all.
pub const EMPTY_DRAWING_PENALTY: u32 = 100;

/// Only the last stroke is checked against the shape's required color and width.
pub fn penalty(shape: &ShapeDefinition, strokes: &[Stroke]) -> u32 {
	let Some(last) = strokes.last() else {
		return EMPTY_DRAWING_PENALTY;
	};
	let wrong_color = shape
		.required_color()
		.is_some_and(|color| &color != last.color());
	let wrong_width = shape
		.required_width()
		.is_some_and(|width| width != last.width());
	[wrong_color, wrong_width]
		.into_iter()
		.filter(|&missed| missed)
		.count() as u32
		* ATTRIBUTE_PENALTY
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundResult {
	pub shape: &'static str,
	pub difficulty: Difficulty,
	/// Geometric similarity before any penalty.
	pub base_score: u32,
	pub penalty: u32,
	pub score: u32,
	pub threshold: u32,
	pub passed: bool,
}

impl RoundResult {
	pub fn evaluate(shape: &ShapeDefinition, difficulty: Difficulty, strokes: &[Stroke]) -> Self {
		let base_score = engine::score(&engine::flatten(strokes), shape.points());
		let penalty = penalty(shape, strokes);
		let score = base_score.saturating_sub(penalty);
		let threshold = difficulty.pass_threshold();
		Self {
			shape: shape.name(),
			difficulty,
			base_score,
			penalty,
			score,
			threshold,
			passed: score >= threshold,
		}
	}
}
