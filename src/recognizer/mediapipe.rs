use super::{Recognizer, RecognizerError};
use crate::config::RecognizerOptions;
use crate::hand::{HandObservation, Landmark, Recognition};
use crate::util::ResultExt;
use itertools::Itertools;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen(module = "/js/mediapipe.js")]
extern "C" {
	#[wasm_bindgen(catch, js_name = createGestureRecognizer)]
	async fn create_gesture_recognizer(
		bundle_url: &str,
		wasm_root: &str,
		model_asset_path: &str,
		delegate: &str,
		num_hands: u32,
		running_mode: &str,
	) -> Result<JsValue, JsValue>;
}

#[wasm_bindgen]
extern "C" {
	#[derive(Debug, Clone)]
	type GestureRecognizer;

	#[wasm_bindgen(method, catch, js_name = recognizeForVideo)]
	fn recognize_for_video(
		this: &GestureRecognizer,
		video: &web_sys::HtmlVideoElement,
		timestamp: f64,
	) -> Result<GestureRecognizerResult, JsValue>;

	#[wasm_bindgen(method)]
	fn close(this: &GestureRecognizer);

	type GestureRecognizerResult;

	/// One array of normalized landmarks per detected hand.
	#[wasm_bindgen(method, getter)]
	fn landmarks(this: &GestureRecognizerResult) -> Option<js_sys::Array>;

	type NormalizedLandmark;

	#[wasm_bindgen(method, getter)]
	fn x(this: &NormalizedLandmark) -> f32;

	#[wasm_bindgen(method, getter)]
	fn y(this: &NormalizedLandmark) -> f32;

	#[wasm_bindgen(method, getter)]
	fn z(this: &NormalizedLandmark) -> Option<f32>;
}

fn describe(value: &JsValue) -> String {
	value
		.as_string()
		.unwrap_or_else(|| format!("{:?}", value))
}

impl From<&NormalizedLandmark> for Landmark {
	fn from(landmark: &NormalizedLandmark) -> Self {
		Self {
			x: landmark.x(),
			y: landmark.y(),
			z: landmark.z(),
		}
	}
}

/// MediaPipe Tasks Vision `GestureRecognizer`, running in the page.
#[derive(Debug)]
pub struct MediaPipeRecognizer {
	inner: GestureRecognizer,
}

impl MediaPipeRecognizer {
	/// Downloads the fileset and model and creates the recognizer.
	#[tracing::instrument(err)]
	pub async fn new(options: &RecognizerOptions) -> Result<Self, RecognizerError> {
		let inner = create_gesture_recognizer(
			&options.bundle_url,
			&options.wasm_root,
			&options.model_asset_path,
			&options.delegate.to_string(),
			options.max_hands,
			&options.running_mode.to_string(),
		)
		.await
		.map_err(|err| RecognizerError::Initialize(describe(&err)))?;
		tracing::info!(delegate = %options.delegate, "gesture recognizer ready");
		Ok(Self {
			inner: inner.unchecked_into(),
		})
	}

	fn convert(result: &GestureRecognizerResult) -> Recognition {
		let Some(hands) = result.landmarks() else {
			return Recognition::empty();
		};
		Recognition::with_hands(hands.iter().filter_map(|hand| {
			let landmarks = hand
				.unchecked_into::<js_sys::Array>()
				.iter()
				.map(|landmark| Landmark::from(landmark.unchecked_ref::<NormalizedLandmark>()))
				.collect_vec();
			HandObservation::try_from(landmarks).ok_or_log()
		}))
	}
}

impl Recognizer for MediaPipeRecognizer {
	type Frame = web_sys::HtmlVideoElement;
	type Error = RecognizerError;

	fn recognize(
		&mut self,
		frame: &web_sys::HtmlVideoElement,
		timestamp_ms: f64,
	) -> Result<Recognition, RecognizerError> {
		let result = self
			.inner
			.recognize_for_video(frame, timestamp_ms)
			.map_err(|err| RecognizerError::Recognize(describe(&err)))?;
		Ok(Self::convert(&result))
	}
}

impl Drop for MediaPipeRecognizer {
	fn drop(&mut self) {
		self.inner.close();
	}
}
