use crate::geom::{mirror_to_canvas, Size};
use crate::hand::HandObservation;
use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
	/// Thumb and index fingertip are together; `pen` is the index fingertip in canvas pixels.
	Pinch { pen: Vec2 },
	Release,
}

impl Gesture {
	pub fn is_pinch(&self) -> bool {
		matches!(self, Gesture::Pinch { .. })
	}
}

/// Detects the pen-down gesture.
///
/// The thumb tip and index fingertip must be closer than `threshold` pixels on *each* axis. This
/// is an axis-aligned box test rather than a radius, so a pinch held diagonally registers from a
/// slightly larger distance than one held level. Gesture sensitivity depends on this shape.
#[derive(Debug, Clone, Copy)]
pub struct PinchClassifier {
	threshold: f32,
}

impl PinchClassifier {
	pub fn new(threshold: f32) -> Self {
		assert!(threshold > 0.0);
		Self { threshold }
	}

	pub fn classify(&self, hand: &HandObservation, size: Size) -> Gesture {
		let thumb = hand.thumb_tip().position();
		let index = hand.index_finger_tip().position();
		let offset = ((thumb - index) * size.as_vec2()).abs();
		if offset.x < self.threshold && offset.y < self.threshold {
			Gesture::Pinch {
				pen: mirror_to_canvas(index, size),
			}
		} else {
			Gesture::Release
		}
	}
}

impl Default for PinchClassifier {
	fn default() -> Self {
		Self::new(crate::config::PINCH_THRESHOLD_PX)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::test::hand_with_tips;
	use approx::assert_relative_eq;

	const SIZE: Size = Size::new(640, 400);

	fn classify(thumb: (f32, f32), index: (f32, f32)) -> Gesture {
		PinchClassifier::default().classify(
			&hand_with_tips(Vec2::from(thumb), Vec2::from(index)),
			SIZE,
		)
	}

	#[test]
	fn close_tips_pinch() {
		// 32px apart horizontally, 20px vertically.
		assert!(classify((0.5, 0.5), (0.55, 0.55)).is_pinch());
		assert!(classify((0.55, 0.55), (0.5, 0.5)).is_pinch());
	}

	#[test]
	fn threshold_is_exclusive() {
		// 50/640 and 50/400 are exact in binary, so these offsets are exactly 50px.
		assert_eq!(classify((0.5, 0.5), (0.578125, 0.5)), Gesture::Release);
		assert_eq!(classify((0.578125, 0.5), (0.5, 0.5)), Gesture::Release);
		assert_eq!(classify((0.5, 0.5), (0.5, 0.625)), Gesture::Release);
		assert_eq!(classify((0.5, 0.625), (0.5, 0.5)), Gesture::Release);
	}

	#[test]
	fn either_axis_breaks_pinch() {
		assert_eq!(classify((0.2, 0.5), (0.8, 0.5)), Gesture::Release);
		assert_eq!(classify((0.5, 0.1), (0.5, 0.9)), Gesture::Release);
	}

	#[test]
	fn diagonal_pinch_uses_box_not_radius() {
		// 45px on each axis is ~64px apart, but still inside the box.
		let dx = 45.0 / 640.0;
		let dy = 45.0 / 400.0;
		assert!(classify((0.5, 0.5), (0.5 + dx, 0.5 + dy)).is_pinch());
	}

	#[test]
	fn pen_is_mirrored_index_tip() {
		let Gesture::Pinch { pen } = PinchClassifier::default().classify(
			&hand_with_tips(Vec2::new(0.21, 0.5), Vec2::new(0.2, 0.5)),
			Size::new(640, 480),
		) else {
			panic!("expected a pinch");
		};
		assert_relative_eq!(pen.x, 512.0);
		assert_relative_eq!(pen.y, 240.0);
	}

	#[test]
	fn random_offsets_match_box_test() {
		let classifier = PinchClassifier::default();
		for _ in 0..1000 {
			let thumb = Vec2::new(fastrand::f32(), fastrand::f32());
			let index = Vec2::new(fastrand::f32(), fastrand::f32());
			let offset = ((thumb - index) * SIZE.as_vec2()).abs();
			let expected = offset.x < 50.0 && offset.y < 50.0;
			let gesture = classifier.classify(&hand_with_tips(thumb, index), SIZE);
			assert_eq!(gesture.is_pinch(), expected, "thumb {thumb} index {index}");
		}
	}
}
