use super::pump::{Clock, FramePump, FrameSource};
use super::whiteboard::{FrameReport, Whiteboard};
use crate::config::WhiteboardConfig;
use crate::geom::Size;
use crate::recognizer::Recognizer;
use crate::surface::{Layers, Surface};
use std::cell::Cell;

/// What a single display frame amounted to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
	/// The surfaces are not available yet; nothing was recognized.
	SurfacesNotReady,
	/// The video still shows the frame that was already processed.
	StaleFrame,
	Drawn(FrameReport),
	/// The recognizer failed on this frame. The next frame is attempted as usual.
	RecognitionFailed,
}

/// Everything one display frame does once setup is over.
///
/// The whiteboard is created on the first frame where the surfaces can be acquired. Resize
/// requests are read from a shared cell at the start of each frame, so they never race with
/// drawing.
#[derive(Debug)]
pub struct FrameLoop<S, R> {
	config: WhiteboardConfig,
	recognizer: R,
	pump: FramePump,
	whiteboard: Option<Whiteboard<S>>,
}

impl<S: Surface, R: Recognizer> FrameLoop<S, R>
where
	R::Frame: FrameSource,
{
	pub fn new(config: WhiteboardConfig, recognizer: R) -> Self {
		Self {
			config,
			recognizer,
			pump: FramePump::new(),
			whiteboard: None,
		}
	}

	pub fn recognizer(&self) -> &R {
		&self.recognizer
	}

	pub fn whiteboard(&self) -> Option<&Whiteboard<S>> {
		self.whiteboard.as_ref()
	}

	pub fn step(
		&mut self,
		pending_size: &Cell<Option<Size>>,
		acquire_layers: impl FnOnce() -> Option<Layers<S>>,
		frame: &R::Frame,
		clock: &impl Clock,
	) -> Step {
		if self.whiteboard.is_none() {
			let Some(layers) = acquire_layers() else {
				return Step::SurfacesNotReady;
			};
			let mut board = Whiteboard::new(&self.config, layers);
			board.resize(pending_size.take().unwrap_or(self.config.fallback_size));
			self.whiteboard = Some(board);
		}
		let Some(board) = self.whiteboard.as_mut() else {
			return Step::SurfacesNotReady;
		};

		if let Some(size) = pending_size.take() {
			if size != board.size() {
				board.resize(size);
			}
		}

		match self.pump.pump(frame, clock, &mut self.recognizer) {
			Ok(Some(recognition)) => Step::Drawn(board.process(&recognition)),
			Ok(None) => Step::StaleFrame,
			Err(err) => {
				tracing::warn!(%err, "skipping frame");
				Step::RecognitionFailed
			}
		}
	}
}
