use leptos::prelude::*;

#[component]
pub fn Waiting() -> impl IntoView {
	view! { <div class="Status">"Waiting for camera..."</div> }
}

#[component]
pub fn Failure(#[prop(into)] message: String) -> impl IntoView {
	view! {
		<div class="Status Failure">
			<div>"The whiteboard could not start."</div>
			<div>{message}</div>
		</div>
	}
}
