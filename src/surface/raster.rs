use super::Surface;
use crate::geom::{distance_to_segment, AABox, Size};
use csscolorparser::Color;
use glam::Vec2;

const TRANSPARENT: [u8; 4] = [0; 4];

/// A software RGBA8 surface.
///
/// Shapes are rasterized by pixel-center coverage without antialiasing, which keeps the output
/// exact enough to assert on.
#[derive(Clone, PartialEq, Eq)]
pub struct RasterSurface {
	size: Size,
	pixels: Vec<[u8; 4]>,
}

impl std::fmt::Debug for RasterSurface {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("RasterSurface")
			.field("size", &self.size)
			.finish_non_exhaustive()
	}
}

impl RasterSurface {
	pub fn new(size: Size) -> Self {
		Self {
			size,
			pixels: vec![TRANSPARENT; size.area()],
		}
	}

	pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
		if x < self.size.width && y < self.size.height {
			Some(self.pixels[self.index(x, y)])
		} else {
			None
		}
	}

	pub fn as_bytes(&self) -> &[u8] {
		bytemuck::cast_slice(&self.pixels)
	}

	pub fn is_blank(&self) -> bool {
		self.pixels.iter().all(|pixel| *pixel == TRANSPARENT)
	}

	pub fn painted_pixel_count(&self) -> usize {
		self.pixels.iter().filter(|pixel| **pixel != TRANSPARENT).count()
	}

	fn index(&self, x: u32, y: u32) -> usize {
		y as usize * self.size.width as usize + x as usize
	}

	fn paint_where(&mut self, bounds: AABox, color: &Color, covered: impl Fn(Vec2) -> bool) {
		let Some((columns, rows)) = bounds.pixel_span(self.size) else {
			return;
		};
		let rgba = color.to_rgba8();
		for y in rows {
			for x in columns.clone() {
				if covered(Vec2::new(x as f32 + 0.5, y as f32 + 0.5)) {
					let index = self.index(x, y);
					self.pixels[index] = rgba;
				}
			}
		}
	}
}

impl Surface for RasterSurface {
	fn size(&self) -> Size {
		self.size
	}

	fn set_size(&mut self, size: Size) {
		*self = Self::new(size);
	}

	fn clear(&mut self) {
		self.pixels.fill(TRANSPARENT);
	}

	fn fill_circle(&mut self, center: Vec2, radius: f32, color: &Color) {
		let bounds = AABox::containing(std::iter::once(center)).grown(radius);
		self.paint_where(bounds, color, |p| p.distance(center) <= radius);
	}

	fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: &Color) {
		let half_width = 0.5 * width;
		let bounds = AABox::containing([from, to].into_iter()).grown(half_width);
		self.paint_where(bounds, color, |p| {
			distance_to_segment(p, from, to) <= half_width
		});
	}
}
