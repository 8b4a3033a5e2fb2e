use crate::config::WhiteboardConfig;
use crate::geom::mirror_to_canvas;
use crate::hand::{HandObservation, INDEX_FINGER_TIP, THUMB_TIP};
use crate::surface::Surface;
use csscolorparser::Color;

/// Draws every tracked landmark as a dot, so the user can see what the recognizer sees.
#[derive(Debug, Clone)]
pub struct LandmarkRenderer {
	radius: f32,
	color: Color,
	highlight_color: Color,
}

impl LandmarkRenderer {
	pub fn new(config: &WhiteboardConfig) -> Self {
		Self {
			radius: config.landmark_radius,
			color: config.landmark_color.clone(),
			highlight_color: config.highlight_color.clone(),
		}
	}

	fn color_for(&self, index: usize) -> &Color {
		match index {
			THUMB_TIP | INDEX_FINGER_TIP => &self.highlight_color,
			_ => &self.color,
		}
	}

	/// Replaces the contents of `surface` with the landmarks of `hands`.
	pub fn render<S: Surface>(&self, surface: &mut S, hands: &[HandObservation]) {
		surface.clear();
		let size = surface.size();
		for hand in hands {
			for (index, landmark) in hand.landmarks().iter().enumerate() {
				let center = mirror_to_canvas(landmark.position(), size);
				surface.fill_circle(center, self.radius, self.color_for(index));
			}
		}
	}
}
