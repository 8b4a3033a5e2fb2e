//! The browser frame loop tying camera, recognizer and whiteboard together.

use crate::camera::{self, CameraError};
use crate::config::WhiteboardConfig;
use crate::engine::FrameLoop;
use crate::geom::Size;
use crate::recognizer::{MediaPipeRecognizer, RecognizerError};
use crate::surface::{CanvasSurface, Layers, SurfaceError};
use crate::util::{animation_frame, window, JsError, OnDrop};
use leptos::html;
use leptos::prelude::*;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;

#[derive(Clone, Debug, thiserror::Error)]
pub enum SetupError {
	#[error(transparent)]
	Camera(#[from] CameraError),

	#[error(transparent)]
	Recognizer(#[from] RecognizerError),

	#[error(transparent)]
	Js(#[from] JsError),
}

static_assertions::assert_impl_all!(SetupError: std::error::Error, Send, Sync);

/// Handles the view keeps to talk to a running session.
#[derive(Clone, Debug, Default)]
pub struct SessionControl {
	pending_size: Rc<Cell<Option<Size>>>,
	stopped: Rc<Cell<bool>>,
}

impl SessionControl {
	/// Queues a resize for the start of the next frame. Only the latest request is kept.
	pub fn request_resize(&self, size: Size) {
		self.pending_size.set(Some(size));
	}

	/// Ends the frame loop after the current frame.
	pub fn stop(&self) {
		self.stopped.set(true);
	}

	pub fn is_stopped(&self) -> bool {
		self.stopped.get()
	}
}

pub struct Session {
	video: web_sys::HtmlVideoElement,
	overlay: NodeRef<html::Canvas>,
	ink: NodeRef<html::Canvas>,
	config: WhiteboardConfig,
	control: SessionControl,
}

impl Session {
	pub fn new(
		video: web_sys::HtmlVideoElement,
		overlay: NodeRef<html::Canvas>,
		ink: NodeRef<html::Canvas>,
		config: WhiteboardConfig,
		control: SessionControl,
	) -> Self {
		Self {
			video,
			overlay,
			ink,
			config,
			control,
		}
	}

	fn try_layers(&self) -> Option<Layers<CanvasSurface>> {
		let (Some(overlay), Some(ink)) = (self.overlay.get_untracked(), self.ink.get_untracked())
		else {
			tracing::trace!("canvases not mounted yet");
			return None;
		};
		let layers = CanvasSurface::new(overlay)
			.and_then(|overlay| Ok(Layers::new(overlay, CanvasSurface::new(ink)?)));
		layers
			.inspect_err(|err: &SurfaceError| tracing::trace!(%err, "canvases not ready"))
			.ok()
	}

	/// Starts the camera and recognizer, then processes frames until stopped.
	///
	/// The camera is released on every exit path once the stream was granted, including when the
	/// session future is dropped.
	#[tracing::instrument(err, skip(self))]
	pub async fn run(self) -> Result<(), SetupError> {
		let stream = camera::request_video_stream().await?;
		let _release = OnDrop::new(|| {
			for track in stream.get_tracks().iter() {
				track.unchecked_into::<web_sys::MediaStreamTrack>().stop();
			}
			tracing::info!("camera released");
		});
		self.run_with_stream(&stream).await
	}

	async fn run_with_stream(&self, stream: &web_sys::MediaStream) -> Result<(), SetupError> {
		camera::attach(&self.video, stream).await?;
		let recognizer = MediaPipeRecognizer::new(&self.config.recognizer).await?;
		let clock = window()?
			.performance()
			.ok_or_else(|| JsError::from(wasm_bindgen::JsValue::from_str("no performance timer")))?;
		let mut frames = FrameLoop::new(self.config.clone(), recognizer);

		while !self.control.is_stopped() {
			animation_frame()?.await;
			if self.control.is_stopped() {
				break;
			}
			let step = frames.step(
				&self.control.pending_size,
				|| self.try_layers(),
				&self.video,
				&clock,
			);
			tracing::trace!(?step, "display frame");
		}
		tracing::info!("frame loop stopped");
		Ok(())
	}
}
