use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

mod result_ext;
pub use result_ext::*;

mod callback_future;
pub use callback_future::*;

mod on_drop;
pub use on_drop::*;

#[derive(thiserror::Error, Clone, Debug)]
#[error("javascript error: {0}")]
pub struct JsError(String);

impl From<JsValue> for JsError {
	fn from(value: JsValue) -> Self {
		match value.as_string() {
			Some(message) => JsError(message),
			None => JsError(format!("{:?}", value)),
		}
	}
}

static_assertions::assert_impl_all!(JsError: std::error::Error, Send, Sync);

pub fn window() -> Result<web_sys::Window, JsError> {
	web_sys::window().ok_or_else(|| JsError("no global window".into()))
}

/// Resolves with the timestamp passed to the next `requestAnimationFrame` callback.
pub fn animation_frame() -> Result<CallbackFuture<f64>, JsError> {
	let (future, callback) = CallbackFuture::new();
	let callback = Closure::once_into_js(move |timestamp: f64| callback(timestamp));
	window()?.request_animation_frame(callback.unchecked_ref())?;
	Ok(future)
}

/// Resolves with the next `event_type` event dispatched to `target`.
pub fn next_event(
	target: &web_sys::EventTarget,
	event_type: &str,
) -> Result<CallbackFuture<web_sys::Event>, JsError> {
	let (future, callback) = CallbackFuture::new();
	let callback = Closure::once_into_js(move |event: web_sys::Event| callback(event));
	let options = web_sys::AddEventListenerOptions::new();
	options.set_once(true);
	target.add_event_listener_with_callback_and_add_event_listener_options(
		event_type,
		callback.unchecked_ref(),
		&options,
	)?;
	Ok(future)
}
