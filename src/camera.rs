//! Webcam capture into a `<video>` element.

use crate::util::{next_event, window, JsError};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// `HAVE_CURRENT_DATA`: the element has at least the frame at the current playback position.
const HAVE_CURRENT_DATA: u16 = 2;

#[derive(Clone, Debug, thiserror::Error)]
pub enum CameraError {
	#[error("camera access is not available in this browser")]
	Unavailable,

	#[error("camera access was denied: {0}")]
	Rejected(String),

	#[error("failed to start video playback: {0}")]
	Playback(String),
}

static_assertions::assert_impl_all!(CameraError: std::error::Error, Send, Sync);

impl From<JsError> for CameraError {
	fn from(error: JsError) -> Self {
		CameraError::Playback(error.to_string())
	}
}

/// Asks the user for a video-only camera stream.
#[tracing::instrument(err)]
pub async fn request_video_stream() -> Result<web_sys::MediaStream, CameraError> {
	let media_devices = window()
		.map_err(|_| CameraError::Unavailable)?
		.navigator()
		.media_devices()
		.map_err(|_| CameraError::Unavailable)?;

	let constraints = web_sys::MediaStreamConstraints::new();
	constraints.set_audio(&JsValue::FALSE);
	constraints.set_video(&JsValue::TRUE);

	let promise = media_devices
		.get_user_media_with_constraints(&constraints)
		.map_err(|_| CameraError::Unavailable)?;
	let stream = JsFuture::from(promise)
		.await
		.map_err(|err| CameraError::Rejected(JsError::from(err).to_string()))?;
	tracing::info!("camera stream acquired");
	Ok(stream.unchecked_into())
}

/// Plays `stream` in `video`, resolving once the first frame is available.
pub async fn attach(
	video: &web_sys::HtmlVideoElement,
	stream: &web_sys::MediaStream,
) -> Result<(), CameraError> {
	video.set_muted(true);
	video.set_src_object(Some(stream));
	if video.ready_state() < HAVE_CURRENT_DATA {
		next_event(video, "loadeddata")?.await;
	}
	let playing = video.play().map_err(JsError::from)?;
	JsFuture::from(playing).await.map_err(JsError::from)?;
	tracing::debug!(
		width = video.video_width(),
		height = video.video_height(),
		"video playing"
	);
	Ok(())
}
