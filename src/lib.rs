//! Freehand drawing with a blind memorization game: a target shape is shown, hidden, redrawn from memory
//! and scored by how closely the drawing matches it.

pub(crate) mod util;

pub mod challenge;
pub mod engine;
pub mod geom;

pub use challenge::{
	Challenge, ChallengeState, Command, CommandError, Difficulty, Mode, Outcome, RoundResult, TimerId,
};
pub use engine::{resample_and_normalize, score, Brush, Catalog, ShapeDefinition, Sketchpad, Stroke, Tool};
pub use geom::Point;
