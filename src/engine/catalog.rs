use super::palette::{self, BLUE, GREEN, RED, STONE};
use crate::challenge::Difficulty;
use crate::geom::Point;
use csscolorparser::Color;
use glam::dvec2;
use std::f64::consts::{PI, TAU};

/// A target the player has to reproduce from memory.
#[derive(Clone, Debug)]
pub struct ShapeDefinition {
	name: &'static str,
	difficulty: Difficulty,
	points: Vec<Point>,
	required_color: Option<&'static str>,
	required_width: Option<u32>,
}

impl ShapeDefinition {
	pub fn new(name: &'static str, difficulty: Difficulty, points: Vec<Point>) -> Self {
		Self {
			name,
			difficulty,
			points,
			required_color: None,
			required_width: None,
		}
	}

	pub fn with_color(self, hex: &'static str) -> Self {
		Self {
			required_color: Some(hex),
			..self
		}
	}

	pub fn with_width(self, width: u32) -> Self {
		Self {
			required_width: Some(width),
			..self
		}
	}

	pub fn name(&self) -> &'static str {
		self.name
	}

	pub fn difficulty(&self) -> Difficulty {
		self.difficulty
	}

	/// Ground truth polyline in unit-square coordinates.
	pub fn points(&self) -> &[Point] {
		&self.points
	}

	pub fn required_color(&self) -> Option<Color> {
		self.required_color.map(palette::color)
	}

	pub fn required_width(&self) -> Option<u32> {
		self.required_width
	}

	pub fn has_requirements(&self) -> bool {
		self.required_color.is_some() || self.required_width.is_some()
	}
}

fn polyline(points: &[(f64, f64)]) -> Vec<Point> {
	points.iter().map(|&(x, y)| dvec2(x, y)).collect()
}

fn sampled(count: usize, f: impl Fn(usize) -> Point) -> Vec<Point> {
	(0..count).map(f).collect()
}

fn circle() -> Vec<Point> {
	sampled(50, |i| {
		let angle = i as f64 / 50.0 * TAU;
		dvec2(0.5 + 0.35 * angle.cos(), 0.5 + 0.35 * angle.sin())
	})
}

fn heart() -> Vec<Point> {
	sampled(60, |i| {
		let t = i as f64 / 60.0 * TAU;
		let x = 16.0 * t.sin().powi(3);
		let y = -(13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos());
		dvec2(0.5 + x * 0.02, 0.5 + y * 0.02)
	})
}

/// Outer arc on the right, then a flatter inner arc back to the top.
fn crescent() -> Vec<Point> {
	let r = 0.35;
	sampled(40, |i| {
		let t = i as f64 / 39.0 * PI - PI / 2.0;
		if i < 20 {
			dvec2(0.5 + r * t.cos(), 0.5 + r * t.sin())
		} else {
			let t = -t;
			dvec2(0.5 + r * 0.6 * t.cos(), 0.5 + r * t.sin())
		}
	})
}

fn spiral() -> Vec<Point> {
	sampled(100, |i| {
		let t = i as f64 / 100.0 * 5.0 * PI;
		let r = 0.025 * t;
		dvec2(0.5 + r * t.cos(), 0.5 + r * t.sin())
	})
}

/// Three-petal rose.
fn clover() -> Vec<Point> {
	sampled(80, |i| {
		let t = i as f64 / 80.0 * TAU;
		let r = 0.35 * (3.0 * t).sin();
		dvec2(0.5 + r * t.cos(), 0.5 + r * t.sin())
	})
}

/// The fixed, ordered set of challenge shapes.
#[derive(Clone, Debug)]
pub struct Catalog {
	shapes: Vec<ShapeDefinition>,
}

impl Catalog {
	pub fn new(shapes: Vec<ShapeDefinition>) -> Self {
		Self { shapes }
	}

	pub fn builtin() -> Self {
		use Difficulty::*;
		Self::new(vec![
			ShapeDefinition::new("Cercle", Easy, circle()).with_color(BLUE),
			ShapeDefinition::new(
				"Carré",
				Easy,
				polyline(&[(0.2, 0.2), (0.8, 0.2), (0.8, 0.8), (0.2, 0.8), (0.2, 0.2)]),
			)
			.with_width(8),
			ShapeDefinition::new(
				"Triangle",
				Easy,
				polyline(&[(0.5, 0.2), (0.8, 0.8), (0.2, 0.8), (0.5, 0.2)]),
			)
			.with_color(GREEN),
			ShapeDefinition::new(
				"Losange",
				Easy,
				polyline(&[(0.5, 0.15), (0.85, 0.5), (0.5, 0.85), (0.15, 0.5), (0.5, 0.15)]),
			),
			ShapeDefinition::new(
				"Rectangle",
				Easy,
				polyline(&[(0.15, 0.35), (0.85, 0.35), (0.85, 0.65), (0.15, 0.65), (0.15, 0.35)]),
			),
			ShapeDefinition::new(
				"Étoile",
				Medium,
				polyline(&[
					(0.5, 0.15),
					(0.6, 0.4),
					(0.9, 0.4),
					(0.65, 0.6),
					(0.75, 0.9),
					(0.5, 0.75),
					(0.25, 0.9),
					(0.35, 0.6),
					(0.1, 0.4),
					(0.4, 0.4),
					(0.5, 0.15),
				]),
			)
			.with_color(RED)
			.with_width(2),
			ShapeDefinition::new("Cœur", Medium, heart()).with_color(RED),
			ShapeDefinition::new("Lune", Medium, crescent()).with_color(BLUE),
			ShapeDefinition::new(
				"Nuage",
				Medium,
				polyline(&[
					(0.3, 0.7),
					(0.2, 0.6),
					(0.2, 0.4),
					(0.4, 0.3),
					(0.6, 0.3),
					(0.8, 0.4),
					(0.8, 0.6),
					(0.7, 0.7),
					(0.3, 0.7),
				]),
			)
			.with_width(8),
			ShapeDefinition::new(
				"Poisson",
				Hard,
				polyline(&[
					(0.2, 0.5),
					(0.4, 0.35),
					(0.7, 0.35),
					(0.85, 0.25),
					(0.85, 0.75),
					(0.7, 0.65),
					(0.4, 0.65),
					(0.2, 0.5),
				]),
			)
			.with_color(BLUE)
			.with_width(4),
			ShapeDefinition::new(
				"Éclair",
				Hard,
				polyline(&[
					(0.6, 0.1),
					(0.3, 0.5),
					(0.5, 0.5),
					(0.4, 0.9),
					(0.7, 0.4),
					(0.5, 0.4),
					(0.6, 0.1),
				]),
			)
			.with_color(STONE)
			.with_width(2),
			ShapeDefinition::new("Spirale", Hard, spiral()).with_width(8),
			ShapeDefinition::new("Trèfle", Hard, clover()).with_color(GREEN),
		])
	}

	pub fn shapes(&self) -> &[ShapeDefinition] {
		&self.shapes
	}

	pub fn get(&self, name: &str) -> Option<&ShapeDefinition> {
		self.shapes.iter().find(|s| s.name == name)
	}

	pub fn tier(&self, difficulty: Difficulty) -> impl Iterator<Item = &ShapeDefinition> + '_ {
		self.shapes.iter().filter(move |s| s.difficulty == difficulty)
	}

	/// Picks a shape of the given tier uniformly at random, avoiding `previous` unless it is the only
	/// shape of that tier. Returns `None` only for an empty tier.
	pub fn select(
		&self,
		difficulty: Difficulty,
		previous: Option<&str>,
		rng: &mut fastrand::Rng,
	) -> Option<&ShapeDefinition> {
		let fresh: Vec<_> = self
			.tier(difficulty)
			.filter(|s| Some(s.name) != previous)
			.collect();
		let candidates = if fresh.is_empty() {
			self.tier(difficulty).collect()
		} else {
			fresh
		};
		if candidates.is_empty() {
			return None;
		}
		Some(candidates[rng.usize(..candidates.len())])
	}
}

impl Default for Catalog {
	fn default() -> Self {
		Self::builtin()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::engine::resample::{resample_and_normalize, SAMPLE_COUNT};
	use std::collections::HashSet;

	#[test]
	fn names_are_unique() {
		let catalog = Catalog::builtin();
		let names: HashSet<_> = catalog.shapes().iter().map(|s| s.name()).collect();
		assert_eq!(names.len(), catalog.shapes().len());
	}

	#[test]
	fn every_tier_has_several_shapes() {
		let catalog = Catalog::builtin();
		for difficulty in Difficulty::ALL {
			assert!(catalog.tier(difficulty).count() >= 2, "{difficulty}");
		}
	}

	#[test]
	fn shapes_live_in_the_unit_square() {
		for shape in Catalog::builtin().shapes() {
			assert!(shape.points().len() >= 2, "{}", shape.name());
			for p in shape.points() {
				assert!((0.0..=1.0).contains(&p.x), "{}", shape.name());
				assert!((0.0..=1.0).contains(&p.y), "{}", shape.name());
			}
		}
	}

	#[test]
	fn every_shape_resamples_to_fixed_count() {
		for shape in Catalog::builtin().shapes() {
			assert_eq!(
				resample_and_normalize(shape.points(), SAMPLE_COUNT).len(),
				SAMPLE_COUNT,
				"{}",
				shape.name()
			);
		}
	}

	#[test]
	fn requirements() {
		let catalog = Catalog::builtin();
		let circle = catalog.get("Cercle").unwrap();
		assert_eq!(circle.required_color(), Some(palette::color(BLUE)));
		assert_eq!(circle.required_width(), None);
		assert!(circle.has_requirements());
		assert!(!catalog.get("Losange").unwrap().has_requirements());
		assert_eq!(catalog.get("Carré").unwrap().required_width(), Some(8));
	}

	#[test]
	fn select_stays_in_tier() {
		let catalog = Catalog::builtin();
		let mut rng = fastrand::Rng::with_seed(7);
		for difficulty in Difficulty::ALL {
			for _ in 0..20 {
				let shape = catalog.select(difficulty, None, &mut rng).unwrap();
				assert_eq!(shape.difficulty(), difficulty);
			}
		}
	}

	#[test]
	fn select_avoids_repeats() {
		let catalog = Catalog::builtin();
		let mut rng = fastrand::Rng::with_seed(0x13371337);
		for difficulty in Difficulty::ALL {
			let mut previous = None;
			for _ in 0..50 {
				let shape = catalog.select(difficulty, previous, &mut rng).unwrap();
				assert_ne!(Some(shape.name()), previous);
				previous = Some(shape.name());
			}
		}
	}

	#[test]
	fn select_repeats_single_shape_tier() {
		let catalog = Catalog::new(vec![
			ShapeDefinition::new("Seul", Difficulty::Hard, polyline(&[(0.0, 0.0), (1.0, 1.0)])),
			ShapeDefinition::new("Autre", Difficulty::Easy, polyline(&[(0.0, 0.0), (1.0, 0.0)])),
		]);
		let mut rng = fastrand::Rng::with_seed(1);
		let shape = catalog.select(Difficulty::Hard, Some("Seul"), &mut rng).unwrap();
		assert_eq!(shape.name(), "Seul");
		assert!(catalog.select(Difficulty::Medium, None, &mut rng).is_none());
	}
}
