use glam::Vec2;
use std::ops::Range;

/// Pixel dimensions of a drawing surface.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Size {
	pub width: u32,
	pub height: u32,
}

impl Size {
	pub const fn new(width: u32, height: u32) -> Self {
		Self { width, height }
	}

	pub fn is_empty(&self) -> bool {
		self.width == 0 || self.height == 0
	}

	/// Converts a viewport size reported by the browser, substituting `fallback` for a viewport
	/// with no area (before layout, or outside a browser).
	pub fn from_viewport(width: f64, height: f64, fallback: Size) -> Self {
		let size = Self::new(width.max(0.0) as u32, height.max(0.0) as u32);
		if size.is_empty() {
			fallback
		} else {
			size
		}
	}

	pub fn as_vec2(&self) -> Vec2 {
		Vec2::new(self.width as f32, self.height as f32)
	}

	pub fn area(&self) -> usize {
		self.width as usize * self.height as usize
	}
}

/// Maps a normalized image point onto a surface of `size` pixels, flipping the horizontal axis.
///
/// The camera preview is shown mirrored, so the canvas must be too for the ink to appear under
/// the user's finger.
pub fn mirror_to_canvas(point: Vec2, size: Size) -> Vec2 {
	Vec2::new(1.0 - point.x, point.y) * size.as_vec2()
}

pub fn distance_to_segment(point: Vec2, a: Vec2, b: Vec2) -> f32 {
	let ab = b - a;
	let length_squared = ab.length_squared();
	if length_squared == 0.0 {
		return point.distance(a);
	}
	let t = ((point - a).dot(ab) / length_squared).clamp(0.0, 1.0);
	point.distance(a + t * ab)
}

pub struct AABox {
	min: Vec2,
	max: Vec2,
}

impl AABox {
	pub fn new(min: Vec2, max: Vec2) -> Self {
		Self { min, max }
	}

	pub fn empty() -> Self {
		Self::new(Vec2::MAX, Vec2::MIN)
	}

	pub fn is_empty(&self) -> bool {
		self.min.x > self.max.x || self.min.y > self.max.y
	}

	pub fn expanded_to_contain(self, point: Vec2) -> Self {
		Self::new(self.min.min(point), self.max.max(point))
	}

	pub fn containing(points: impl Iterator<Item = Vec2>) -> Self {
		points.fold(Self::empty(), |b, p| b.expanded_to_contain(p))
	}

	pub fn grown(self, margin: f32) -> Self {
		Self::new(self.min - Vec2::splat(margin), self.max + Vec2::splat(margin))
	}

	/// The rows and columns of pixels of a `size` surface that overlap this box, or `None` if
	/// there are none.
	pub fn pixel_span(&self, size: Size) -> Option<(Range<u32>, Range<u32>)> {
		if self.is_empty() || size.is_empty() {
			return None;
		}
		let min = self.min.floor().max(Vec2::ZERO);
		let max = self.max.ceil().min(size.as_vec2());
		if !(min.x < max.x && min.y < max.y) {
			return None;
		}
		Some((min.x as u32..max.x as u32, min.y as u32..max.y as u32))
	}
}
