pub(crate) mod util;

pub mod camera;
mod components;
pub mod config;
pub mod engine;
pub mod geom;
pub mod hand;
mod pages;
pub mod recognizer;
pub mod session;
pub mod surface;


use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	view! {
		<Html {..} lang="en" dir="ltr"/>

		<Title formatter=|page| format!("Pinchboard - {page}")/>

		// Inject metadata in the <head> tag.
		<Meta charset="UTF-8"/>
		<Meta name="viewport" content="width=device-width, initial-scale=1.0"/>

		<Router>
			<Routes fallback=pages::NotFound>
				<Route path=path!("/") view=pages::Home/>
			</Routes>
		</Router>
	}
}
