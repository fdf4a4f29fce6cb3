use glam::DVec2;

/// Canvas pixels for captured input, unit-square coordinates once normalized.
pub type Point = DVec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AABox {
	min: DVec2,
	max: DVec2,
}

impl AABox {
	pub fn new(min: DVec2, max: DVec2) -> Self {
		Self { min, max }
	}

	pub fn empty() -> Self {
		Self::new(DVec2::MAX, DVec2::MIN)
	}

	pub fn is_empty(&self) -> bool {
		self.min.x > self.max.x && self.min.y > self.max.y
	}

	pub fn expanded_to_contain(self, point: DVec2) -> Self {
		Self::new(self.min.min(point), self.max.max(point))
	}

	pub fn containing(points: impl Iterator<Item = DVec2>) -> Self {
		points.fold(Self::empty(), |b, p| b.expanded_to_contain(p))
	}

	pub fn min(&self) -> DVec2 {
		self.min
	}

	pub fn max(&self) -> DVec2 {
		self.max
	}

	/// Width and height. Zero for an empty box.
	pub fn size(&self) -> DVec2 {
		if self.is_empty() {
			DVec2::ZERO
		} else {
			self.max - self.min
		}
	}

	pub fn max_dimension(&self) -> f64 {
		self.size().max_element()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use glam::dvec2;

	#[test]
	fn empty() {
		let b = AABox::containing(std::iter::empty());
		assert!(b.is_empty());
		assert_eq!(b.size(), DVec2::ZERO);
	}

	#[test]
	fn containing() {
		let b = AABox::containing([dvec2(1.0, 5.0), dvec2(3.0, 2.0), dvec2(2.0, 4.0)].into_iter());
		assert!(!b.is_empty());
		assert_eq!(b.min(), dvec2(1.0, 2.0));
		assert_eq!(b.max(), dvec2(3.0, 5.0));
		assert_eq!(b.size(), dvec2(2.0, 3.0));
		assert_eq!(b.max_dimension(), 3.0);
	}

	#[test]
	fn single_point() {
		let b = AABox::containing(std::iter::once(dvec2(1.0, 1.0)));
		assert!(!b.is_empty());
		assert_eq!(b.max_dimension(), 0.0);
	}
}
