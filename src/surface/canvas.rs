use super::Surface;
use crate::geom::Size;
use crate::util::{JsError, ResultExt};
use csscolorparser::Color;
use glam::Vec2;
use wasm_bindgen::JsCast;

#[derive(Clone, Debug, thiserror::Error)]
pub enum SurfaceError {
	#[error("canvas has no 2d context")]
	NoContext,

	#[error("failed to get canvas context")]
	Context(#[from] JsError),
}

static_assertions::assert_impl_all!(SurfaceError: std::error::Error, Send, Sync);

/// An HTML `<canvas>` drawn through its 2D context.
#[derive(Clone, Debug)]
pub struct CanvasSurface {
	canvas: web_sys::HtmlCanvasElement,
	context: web_sys::CanvasRenderingContext2d,
}

impl CanvasSurface {
	pub fn new(canvas: web_sys::HtmlCanvasElement) -> Result<Self, SurfaceError> {
		let context = canvas
			.get_context("2d")
			.map_err(JsError::from)?
			.ok_or(SurfaceError::NoContext)?
			.dyn_into::<web_sys::CanvasRenderingContext2d>()
			.map_err(|_| SurfaceError::NoContext)?;
		context.set_line_cap("round");
		Ok(Self { canvas, context })
	}

	pub fn canvas(&self) -> &web_sys::HtmlCanvasElement {
		&self.canvas
	}
}

fn css_color(color: &Color) -> String {
	let [r, g, b, a] = color.to_rgba8();
	format!("rgba({r}, {g}, {b}, {})", a as f32 / 255.0)
}

impl Surface for CanvasSurface {
	fn size(&self) -> Size {
		Size::new(self.canvas.width(), self.canvas.height())
	}

	// Assigning either dimension resets the bitmap and the context state, even if the value is
	// unchanged.
	fn set_size(&mut self, size: Size) {
		self.canvas.set_width(size.width);
		self.canvas.set_height(size.height);
		self.context.set_line_cap("round");
	}

	fn clear(&mut self) {
		self.context.clear_rect(
			0.0,
			0.0,
			self.canvas.width() as f64,
			self.canvas.height() as f64,
		);
	}

	fn fill_circle(&mut self, center: Vec2, radius: f32, color: &Color) {
		let context = &self.context;
		context.set_fill_style_str(&css_color(color));
		context.begin_path();
		context
			.arc(
				center.x as f64,
				center.y as f64,
				radius as f64,
				0.0,
				std::f64::consts::TAU,
			)
			.map_err(JsError::from)
			.ok_or_log();
		context.close_path();
		context.fill();
	}

	fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: &Color) {
		let context = &self.context;
		context.set_stroke_style_str(&css_color(color));
		context.set_line_width(width as f64);
		context.begin_path();
		context.move_to(from.x as f64, from.y as f64);
		context.line_to(to.x as f64, to.y as f64);
		context.stroke();
	}
}
