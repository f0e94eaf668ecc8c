//! Drag graph demo: a canvas of draggable nodes mounted as a client-side Leptos app.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

mod components;
mod pages;

use crate::pages::home::Home;
use crate::pages::not_found::NotFound;

/// Route `log` output to the browser console and report panics there.
///
/// Call once before mounting [`App`]; later calls keep the first logger.
pub fn init_logging() {
	if console_log::init_with_level(Level::Debug).is_err() {
		return;
	}
	console_error_panic_hook::set_once();
	info!("Console logger ready");
}

/// Single-route app: `/` shows the graph, anything else the 404 page.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />

		<Title text="Drag Graph" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
			</Routes>
		</Router>
	}
}
