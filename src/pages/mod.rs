use crate::components::Whiteboard;
use crate::config::WhiteboardConfig;
use crate::util::ResultExt;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_query_map};

#[component]
pub fn Home() -> impl IntoView {
	let query = use_query_map().get_untracked();
	let config = WhiteboardConfig::default()
		.with_overrides(|key| query.get(key))
		.ok_or_log()
		.unwrap_or_default();
	tracing::debug!(?config, "whiteboard configured");

	view! {
		<Title text="Whiteboard"/>
		<Whiteboard config/>
	}
}

#[component]
pub fn NotFound() -> impl IntoView {
	let path = use_location().pathname.get_untracked();

	view! {
		<Title text="Not found"/>
		<div class="NotFound">
			<div>{format!("Not found: {path}")}</div>
			<A href="/">"Return home"</A>
		</div>
	}
}
