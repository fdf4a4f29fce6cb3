use super::palette;
use crate::geom::Point;
use csscolorparser::Color;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tool {
	#[default]
	Pen,
	Eraser,
}

/// Drawing settings chosen by the player, handed to the recorder with each stroke.
#[derive(Clone, Debug, PartialEq)]
pub struct Brush {
	pub tool: Tool,
	pub color: Color,
	pub width: u32,
}

impl Brush {
	pub fn pen(color: Color, width: u32) -> Self {
		Self {
			tool: Tool::Pen,
			color,
			width,
		}
	}

	/// The color actually laid down.
	pub fn ink(&self) -> Color {
		match self.tool {
			Tool::Pen => self.color.clone(),
			Tool::Eraser => palette::color(palette::ERASER),
		}
	}
}

impl Default for Brush {
	fn default() -> Self {
		Self::pen(palette::color(palette::STONE), palette::MEDIUM)
	}
}

/// A finalized polyline. Always holds at least two points.
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
	points: Vec<Point>,
	color: Color,
	width: u32,
	silent: bool,
}

impl Stroke {
	pub fn new(points: Vec<Point>, color: Color, width: u32, silent: bool) -> Option<Self> {
		if points.len() < 2 {
			return None;
		}
		Some(Self {
			points,
			color,
			width,
			silent,
		})
	}

	pub fn points(&self) -> &[Point] {
		&self.points
	}

	pub fn color(&self) -> &Color {
		&self.color
	}

	pub fn width(&self) -> u32 {
		self.width
	}

	/// Drawn with output suppressed until the pen was lifted.
	pub fn is_silent(&self) -> bool {
		self.silent
	}
}

/// All points of all strokes, in drawing order.
pub fn flatten(strokes: &[Stroke]) -> Vec<Point> {
	strokes.iter().flat_map(|s| s.points.iter().copied()).collect()
}

struct ActiveStroke {
	points: Vec<Point>,
}

impl ActiveStroke {
	fn add_point(&mut self, point: Point) {
		self.points.push(point);
	}
}

/// Turns pen events into finalized strokes and keeps the drawing history.
///
/// Methods that change the history return the new stroke list, which is what the challenge expects through
/// `Command::StrokesChanged`.
#[derive(Default)]
pub struct Sketchpad {
	history: Vec<Stroke>,
	active: Option<ActiveStroke>,
}

impl Sketchpad {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn strokes(&self) -> &[Stroke] {
		&self.history
	}

	pub fn is_drawing(&self) -> bool {
		self.active.is_some()
	}

	pub fn can_undo(&self) -> bool {
		!self.history.is_empty()
	}

	/// Points of the stroke in progress, if any.
	pub fn active_points(&self) -> Option<&[Point]> {
		self.active.as_ref().map(|a| a.points.as_slice())
	}

	/// Starts a stroke unless `allowed` is false. Returns whether a stroke was started.
	pub fn pen_down(&mut self, point: Point, allowed: bool) -> bool {
		if !allowed {
			tracing::debug!("pen down refused");
			return false;
		}
		self.active = Some(ActiveStroke {
			points: vec![point],
		});
		true
	}

	pub fn pen_move(&mut self, point: Point) {
		if let Some(active) = &mut self.active {
			active.add_point(point);
		}
	}

	/// Finalizes the stroke in progress. A stroke of fewer than two points is dropped and leaves the history
	/// untouched.
	pub fn pen_up(&mut self, brush: &Brush, silent: bool) -> Option<&[Stroke]> {
		let active = self.active.take()?;
		let stroke = Stroke::new(active.points, brush.ink(), brush.width, silent)?;
		self.history.push(stroke);
		Some(self.history.as_slice())
	}

	pub fn undo(&mut self) -> Option<&[Stroke]> {
		self.history.pop()?;
		Some(self.history.as_slice())
	}

	pub fn clear(&mut self) -> &[Stroke] {
		self.active = None;
		self.history.clear();
		&self.history
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use glam::dvec2;

	#[test]
	fn stroke_needs_two_points() {
		let color = palette::color(palette::RED);
		assert!(Stroke::new(vec![], color.clone(), 2, false).is_none());
		assert!(Stroke::new(vec![dvec2(0.0, 0.0)], color.clone(), 2, false).is_none());
		let stroke = Stroke::new(vec![dvec2(0.0, 0.0), dvec2(1.0, 0.0)], color.clone(), 2, true).unwrap();
		assert_eq!(stroke.points().len(), 2);
		assert_eq!(stroke.color(), &color);
		assert!(stroke.is_silent());
	}

	#[test]
	fn records_strokes() {
		let brush = Brush::pen(palette::color(palette::BLUE), palette::THICK);
		let mut pad = Sketchpad::new();
		assert!(pad.pen_down(dvec2(0.0, 0.0), true));
		pad.pen_move(dvec2(1.0, 0.0));
		pad.pen_move(dvec2(1.0, 1.0));
		assert_eq!(pad.active_points().map(<[_]>::len), Some(3));
		let strokes = pad.pen_up(&brush, false).unwrap();
		assert_eq!(strokes.len(), 1);
		assert_eq!(strokes[0].width(), palette::THICK);
		assert_eq!(strokes[0].color(), &palette::color(palette::BLUE));
		assert!(!pad.is_drawing());
		assert!(pad.can_undo());
	}

	#[test]
	fn drops_taps() {
		let mut pad = Sketchpad::new();
		pad.pen_down(dvec2(3.0, 3.0), true);
		assert!(pad.pen_up(&Brush::default(), false).is_none());
		assert!(pad.strokes().is_empty());
	}

	#[test]
	fn refused_pen_down_ignores_moves() {
		let mut pad = Sketchpad::new();
		assert!(!pad.pen_down(dvec2(0.0, 0.0), false));
		pad.pen_move(dvec2(1.0, 1.0));
		assert!(pad.pen_up(&Brush::default(), false).is_none());
		assert!(pad.strokes().is_empty());
	}

	#[test]
	fn eraser_uses_background() {
		let brush = Brush {
			tool: Tool::Eraser,
			..Brush::default()
		};
		let mut pad = Sketchpad::new();
		pad.pen_down(dvec2(0.0, 0.0), true);
		pad.pen_move(dvec2(2.0, 0.0));
		let strokes = pad.pen_up(&brush, false).unwrap();
		assert_eq!(strokes[0].color(), &palette::color(palette::ERASER));
	}

	#[test]
	fn undo_and_clear() {
		let mut pad = Sketchpad::new();
		for i in 0..3 {
			pad.pen_down(dvec2(0.0, i as f64), true);
			pad.pen_move(dvec2(1.0, i as f64));
			pad.pen_up(&Brush::default(), false);
		}
		assert_eq!(pad.undo().map(<[_]>::len), Some(2));
		assert!(pad.clear().is_empty());
		assert!(pad.undo().is_none());
		assert!(!pad.can_undo());
	}

	#[test]
	fn flatten_concatenates() {
		let a = Stroke::new(vec![dvec2(0.0, 0.0), dvec2(1.0, 0.0)], Color::default(), 2, false).unwrap();
		let b = Stroke::new(vec![dvec2(5.0, 5.0), dvec2(6.0, 5.0)], Color::default(), 2, false).unwrap();
		assert_eq!(
			flatten(&[a, b]),
			vec![dvec2(0.0, 0.0), dvec2(1.0, 0.0), dvec2(5.0, 5.0), dvec2(6.0, 5.0)]
		);
	}
}
