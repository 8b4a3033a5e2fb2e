//! Hand landmark recognition.
//!
//! Recognition itself is done by an external model. The whiteboard only depends on the
//! [`Recognizer`] trait: construct it once (possibly asynchronously), then query it synchronously
//! once per new video frame.

use crate::hand::Recognition;

mod mediapipe;
pub use mediapipe::*;

pub trait Recognizer {
	/// The image type recognition runs on.
	type Frame: ?Sized;
	type Error: std::error::Error;

	/// Finds the hands in `frame`.
	///
	/// `timestamp_ms` must increase monotonically between calls; video-mode models use it to track
	/// hands across frames.
	fn recognize(
		&mut self,
		frame: &Self::Frame,
		timestamp_ms: f64,
	) -> Result<Recognition, Self::Error>;
}

#[derive(Clone, Debug, thiserror::Error)]
pub enum RecognizerError {
	#[error("failed to create recognizer: {0}")]
	Initialize(String),

	#[error("recognition failed: {0}")]
	Recognize(String),
}

static_assertions::assert_impl_all!(RecognizerError: std::error::Error, Send, Sync);
