//! Tunables for the whiteboard and the recognizer it drives.
//!
//! Defaults reproduce the behavior users know from the hosted app. Any of them can be replaced
//! with the builders, and a few can be overridden from the page URL (see
//! [`WhiteboardConfig::with_overrides`]).

use crate::geom::Size;
use csscolorparser::Color;

/// Maximum thumb-to-index offset, in pixels along each axis, that still counts as a pinch.
pub const PINCH_THRESHOLD_PX: f32 = 50.0;

/// Weight of the newest pen position in the exponential moving average.
pub const SMOOTHING_FACTOR: f32 = 0.3;

pub const STROKE_WIDTH_PX: f32 = 5.0;
pub const LANDMARK_RADIUS_PX: f32 = 5.0;

/// Surface size used until the browser reports a viewport with a non-zero area.
pub const FALLBACK_SIZE: Size = Size::new(640, 480);

pub const VISION_BUNDLE_URL: &str =
	"https://cdn.jsdelivr.net/npm/@mediapipe/tasks-vision@latest/vision_bundle.mjs";
pub const VISION_WASM_ROOT: &str = "https://cdn.jsdelivr.net/npm/@mediapipe/tasks-vision@latest/wasm";
pub const GESTURE_MODEL_URL: &str =
	"https://storage.googleapis.com/mediapipe-tasks/gesture_recognizer/gesture_recognizer.task";

/// Project repository, linked from the corner of the page.
pub const SOURCE_URL: &str = "https://github.com/Cygra/hand-gesture-whiteboard";

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
	#[error("unknown compute delegate `{0}`")]
	UnknownDelegate(String),

	#[error("`{key}` must be a number, got `{value}`")]
	NotANumber { key: &'static str, value: String },

	#[error("`{key}` is out of range: {value}")]
	OutOfRange { key: &'static str, value: f32 },
}

static_assertions::assert_impl_all!(ConfigError: std::error::Error, Send, Sync);

/// Where the recognition model runs.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Delegate {
	#[display("CPU")]
	Cpu,
	#[default]
	#[display("GPU")]
	Gpu,
}

impl std::str::FromStr for Delegate {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_uppercase().as_str() {
			"CPU" => Ok(Delegate::Cpu),
			"GPU" => Ok(Delegate::Gpu),
			_ => Err(ConfigError::UnknownDelegate(s.to_owned())),
		}
	}
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum RunningMode {
	#[display("IMAGE")]
	Image,
	#[default]
	#[display("VIDEO")]
	Video,
}

#[derive(Clone, Debug, PartialEq, bon::Builder)]
pub struct RecognizerOptions {
	/// ES module exporting `FilesetResolver` and `GestureRecognizer`.
	#[builder(into, default = VISION_BUNDLE_URL.to_owned())]
	pub bundle_url: String,

	/// Directory holding the Tasks Vision WASM fileset.
	#[builder(into, default = VISION_WASM_ROOT.to_owned())]
	pub wasm_root: String,

	#[builder(into, default = GESTURE_MODEL_URL.to_owned())]
	pub model_asset_path: String,

	#[builder(default)]
	pub delegate: Delegate,

	#[builder(default = 1)]
	pub max_hands: u32,

	#[builder(default)]
	pub running_mode: RunningMode,
}

impl Default for RecognizerOptions {
	fn default() -> Self {
		Self::builder().build()
	}
}

#[derive(Clone, Debug, PartialEq, bon::Builder)]
pub struct WhiteboardConfig {
	#[builder(default)]
	pub recognizer: RecognizerOptions,

	#[builder(default = PINCH_THRESHOLD_PX)]
	pub pinch_threshold: f32,

	#[builder(default = SMOOTHING_FACTOR)]
	pub smoothing_factor: f32,

	#[builder(default = STROKE_WIDTH_PX)]
	pub stroke_width: f32,

	#[builder(default = Color::new(0.0, 0.0, 0.0, 1.0))]
	pub ink_color: Color,

	#[builder(default = LANDMARK_RADIUS_PX)]
	pub landmark_radius: f32,

	#[builder(default = Color::from_rgba8(0x33, 0x70, 0xd4, 0xff))]
	pub landmark_color: Color,

	/// Used for the two landmarks that form the pinch.
	#[builder(default = Color::from_rgba8(0xc8, 0x21, 0x24, 0xff))]
	pub highlight_color: Color,

	#[builder(default = FALLBACK_SIZE)]
	pub fallback_size: Size,
}

impl Default for WhiteboardConfig {
	fn default() -> Self {
		Self::builder().build()
	}
}

impl WhiteboardConfig {
	/// Applies overrides looked up by key: `delegate`, `model`, `threshold` and `smoothing`.
	pub fn with_overrides(
		mut self,
		lookup: impl Fn(&str) -> Option<String>,
	) -> Result<Self, ConfigError> {
		if let Some(delegate) = lookup("delegate") {
			self.recognizer.delegate = delegate.parse()?;
		}
		if let Some(model) = lookup("model") {
			self.recognizer.model_asset_path = model;
		}
		if let Some(threshold) = lookup("threshold") {
			let threshold = parse_number("threshold", threshold)?;
			if !(threshold > 0.0) {
				return Err(ConfigError::OutOfRange {
					key: "threshold",
					value: threshold,
				});
			}
			self.pinch_threshold = threshold;
		}
		if let Some(smoothing) = lookup("smoothing") {
			let smoothing = parse_number("smoothing", smoothing)?;
			if !(smoothing > 0.0 && smoothing <= 1.0) {
				return Err(ConfigError::OutOfRange {
					key: "smoothing",
					value: smoothing,
				});
			}
			self.smoothing_factor = smoothing;
		}
		Ok(self)
	}
}

fn parse_number(key: &'static str, value: String) -> Result<f32, ConfigError> {
	value
		.trim()
		.parse()
		.map_err(|_| ConfigError::NotANumber { key, value })
}
