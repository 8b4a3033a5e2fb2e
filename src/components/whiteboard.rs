use crate::components::fallback;
use crate::config::{WhiteboardConfig, SOURCE_URL};
use crate::geom::Size;
use crate::session::{Session, SessionControl};
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_use::{use_window_size, UseWindowSizeReturn};
use send_wrapper::SendWrapper;

/// Full-viewport whiteboard: the ink layer, the landmark overlay on top of it, and a mirrored
/// camera preview in the corner.
#[component]
pub fn Whiteboard(config: WhiteboardConfig) -> impl IntoView {
	let video_ref = NodeRef::<html::Video>::new();
	let overlay_ref = NodeRef::<html::Canvas>::new();
	let ink_ref = NodeRef::<html::Canvas>::new();

	let (playing, set_playing) = signal(false);
	let (failure, set_failure) = signal(None::<String>);

	let control = SendWrapper::new(SessionControl::default());

	let UseWindowSizeReturn { width, height } = use_window_size();
	let fallback_size = config.fallback_size;
	Effect::new({
		let control = control.clone();
		move |_| {
			control.request_resize(Size::from_viewport(width.get(), height.get(), fallback_size));
		}
	});

	Effect::new({
		let control = control.clone();
		move |started: Option<bool>| {
			if started == Some(true) {
				return true;
			}
			let Some(video) = video_ref.get() else {
				return false;
			};
			let session = Session::new(video, overlay_ref, ink_ref, config.clone(), (*control).clone());
			spawn_local(async move {
				if let Err(err) = session.run().await {
					set_failure.set(Some(err.to_string()));
				}
			});
			true
		}
	});

	on_cleanup(move || control.stop());

	view! {
		<div class="Whiteboard">
			<canvas class="Ink" node_ref=ink_ref></canvas>
			<canvas class="Overlay" node_ref=overlay_ref></canvas>
			<a class="Source" href=SOURCE_URL target="_blank" rel="noopener">"Source on GitHub"</a>
			<video class="Preview" node_ref=video_ref on:playing=move |_| set_playing.set(true)></video>
			{move || match failure.get() {
				Some(message) => view! { <fallback::Failure message/> }.into_any(),
				None if !playing.get() => view! { <fallback::Waiting/> }.into_any(),
				None => ().into_any(),
			}}
		</div>
	}
}
