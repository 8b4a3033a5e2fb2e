use crate::hand::Recognition;
use crate::recognizer::Recognizer;

/// Something that shows a sequence of frames, like a playing `<video>`.
pub trait FrameSource {
	/// Position of the currently displayed frame, in seconds. Unchanged until a new frame is
	/// shown.
	fn presentation_time(&self) -> f64;
}

impl FrameSource for web_sys::HtmlVideoElement {
	fn presentation_time(&self) -> f64 {
		self.current_time()
	}
}

/// Monotonic milliseconds.
pub trait Clock {
	fn now_ms(&self) -> f64;
}

impl Clock for web_sys::Performance {
	fn now_ms(&self) -> f64 {
		self.now()
	}
}

/// Feeds each new frame of a source to a recognizer exactly once.
///
/// Display refresh and video frame rate are unrelated, so most display frames show the same video
/// frame as the previous one. Running a video-mode recognizer on a repeated frame corrupts its
/// tracking, so those are dropped rather than queued.
#[derive(Debug, Default)]
pub struct FramePump {
	last_presentation_time: Option<f64>,
}

impl FramePump {
	pub fn new() -> Self {
		Self::default()
	}

	/// Recognizes `frame` if it is new since the last call, returning `Ok(None)` otherwise.
	///
	/// A frame counts as processed once recognition starts, so a frame that fails is not retried.
	pub fn pump<R: Recognizer>(
		&mut self,
		frame: &R::Frame,
		clock: &impl Clock,
		recognizer: &mut R,
	) -> Result<Option<Recognition>, R::Error>
	where
		R::Frame: FrameSource,
	{
		let presentation_time = frame.presentation_time();
		if self.last_presentation_time == Some(presentation_time) {
			tracing::trace!(presentation_time, "stale frame");
			return Ok(None);
		}
		self.last_presentation_time = Some(presentation_time);

		let timestamp_ms = clock.now_ms();
		recognizer.recognize(frame, timestamp_ms).map(Some)
	}
}
