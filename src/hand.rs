//! Hand landmarks as reported by the recognizer.
//!
//! Coordinates are normalized to the video frame: `x` and `y` are in [0, 1], with the origin in the
//! top left corner of the unmirrored image.

use glam::Vec2;

// MediaPipe hand landmark indices.
pub const THUMB_TIP: usize = 4;
pub const INDEX_FINGER_TIP: usize = 8;
pub const PINKY_TIP: usize = 20;

pub const LANDMARK_COUNT: usize = PINKY_TIP + 1;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Landmark {
	pub x: f32,
	pub y: f32,
	/// Relative depth, when the recognizer provides one.
	pub z: Option<f32>,
}

impl Landmark {
	pub fn new(x: f32, y: f32) -> Self {
		Self { x, y, z: None }
	}

	pub fn position(&self) -> Vec2 {
		Vec2::new(self.x, self.y)
	}
}

impl From<Vec2> for Landmark {
	fn from(position: Vec2) -> Self {
		Self::new(position.x, position.y)
	}
}

#[derive(Clone, Debug, thiserror::Error)]
pub enum HandError {
	#[error("expected {LANDMARK_COUNT} hand landmarks, got {0}")]
	LandmarkCount(usize),
}

static_assertions::assert_impl_all!(HandError: std::error::Error, Send, Sync);

/// One detected hand in one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct HandObservation {
	landmarks: [Landmark; LANDMARK_COUNT],
}

impl HandObservation {
	pub fn new(landmarks: [Landmark; LANDMARK_COUNT]) -> Self {
		Self { landmarks }
	}

	pub fn landmark(&self, index: usize) -> &Landmark {
		&self.landmarks[index]
	}

	pub fn landmarks(&self) -> &[Landmark; LANDMARK_COUNT] {
		&self.landmarks
	}

	pub fn thumb_tip(&self) -> &Landmark {
		self.landmark(THUMB_TIP)
	}

	pub fn index_finger_tip(&self) -> &Landmark {
		self.landmark(INDEX_FINGER_TIP)
	}
}

impl TryFrom<Vec<Landmark>> for HandObservation {
	type Error = HandError;

	fn try_from(landmarks: Vec<Landmark>) -> Result<Self, Self::Error> {
		let count = landmarks.len();
		let landmarks = landmarks
			.try_into()
			.map_err(|_| HandError::LandmarkCount(count))?;
		Ok(Self::new(landmarks))
	}
}

/// Everything the recognizer found in one frame.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Recognition {
	pub hands: Vec<HandObservation>,
}

impl Recognition {
	pub fn empty() -> Self {
		Self::default()
	}

	pub fn with_hands(hands: impl IntoIterator<Item = HandObservation>) -> Self {
		Self {
			hands: hands.into_iter().collect(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn observation_requires_full_hand() {
		let partial = vec![Landmark::default(); 5];
		assert!(matches!(
			HandObservation::try_from(partial),
			Err(HandError::LandmarkCount(5))
		));

		let full: Vec<_> = (0..LANDMARK_COUNT)
			.map(|i| Landmark::new(i as f32 / 100.0, 0.5))
			.collect();
		let hand = HandObservation::try_from(full).unwrap();
		assert_eq!(hand.thumb_tip().x, 0.04);
		assert_eq!(hand.index_finger_tip().x, 0.08);
	}
}
