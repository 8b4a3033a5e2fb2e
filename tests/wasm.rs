#![cfg(target_arch = "wasm32")]

use csscolorparser::Color;
use glam::Vec2;
use pinchboard::geom::Size;
use pinchboard::surface::{CanvasSurface, Surface};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

// https://rustwasm.github.io/wasm-bindgen/wasm-bindgen-test/browsers.html
wasm_bindgen_test_configure!(run_in_browser);

fn canvas_surface() -> CanvasSurface {
	let canvas = web_sys::window()
		.unwrap()
		.document()
		.unwrap()
		.create_element("canvas")
		.unwrap()
		.dyn_into::<web_sys::HtmlCanvasElement>()
		.unwrap();
	CanvasSurface::new(canvas).unwrap()
}

fn alpha_at(surface: &CanvasSurface, x: f64, y: f64) -> u8 {
	let context = surface
		.canvas()
		.get_context("2d")
		.unwrap()
		.unwrap()
		.dyn_into::<web_sys::CanvasRenderingContext2d>()
		.unwrap();
	context.get_image_data(x, y, 1.0, 1.0).unwrap().data()[3]
}

#[wasm_bindgen_test]
fn canvas_takes_requested_size() {
	let mut surface = canvas_surface();
	surface.set_size(Size::new(320, 200));
	assert_eq!(surface.size(), Size::new(320, 200));
	assert_eq!(surface.canvas().width(), 320);
}

#[wasm_bindgen_test]
fn resizing_discards_ink() {
	let mut surface = canvas_surface();
	surface.set_size(Size::new(100, 100));
	let black = Color::new(0.0, 0.0, 0.0, 1.0);
	surface.stroke_line(Vec2::new(10.0, 50.0), Vec2::new(90.0, 50.0), 5.0, &black);
	assert_eq!(alpha_at(&surface, 50.0, 50.0), 255);

	surface.set_size(Size::new(120, 100));
	assert_eq!(alpha_at(&surface, 50.0, 50.0), 0);
}

#[wasm_bindgen_test]
fn clear_keeps_size() {
	let mut surface = canvas_surface();
	surface.set_size(Size::new(64, 64));
	surface.fill_circle(Vec2::new(32.0, 32.0), 5.0, &Color::new(1.0, 0.0, 0.0, 1.0));
	assert_eq!(alpha_at(&surface, 32.0, 32.0), 255);
	surface.clear();
	assert_eq!(alpha_at(&surface, 32.0, 32.0), 0);
	assert_eq!(surface.size(), Size::new(64, 64));
}
