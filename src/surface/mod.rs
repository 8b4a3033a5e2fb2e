//! Raster targets the whiteboard draws on.

use crate::geom::Size;
use csscolorparser::Color;
use glam::Vec2;

mod canvas;
pub use canvas::*;

mod raster;
pub use raster::*;

/// The drawing operations the whiteboard needs from a 2D raster.
pub trait Surface {
	fn size(&self) -> Size;

	/// Reallocates the backing store. Everything drawn so far is lost.
	fn set_size(&mut self, size: Size);

	fn clear(&mut self);

	fn fill_circle(&mut self, center: Vec2, radius: f32, color: &Color);

	fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: &Color);
}

/// The two stacked surfaces of a whiteboard.
#[derive(Debug)]
pub struct Layers<S> {
	/// Transient landmark visualization, redrawn from scratch every frame.
	pub overlay: S,
	/// Accumulated strokes. Only ever drawn on, except that resizing wipes it.
	pub ink: S,
}

impl<S: Surface> Layers<S> {
	pub fn new(overlay: S, ink: S) -> Self {
		Self { overlay, ink }
	}

	pub fn size(&self) -> Size {
		self.overlay.size()
	}

	pub fn resize(&mut self, size: Size) {
		self.overlay.set_size(size);
		self.ink.set_size(size);
	}
}
