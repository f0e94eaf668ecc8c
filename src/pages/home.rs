use leptos::prelude::*;

use crate::components::drag_graph::{DragGraphCanvas, GraphConfig, SceneConfig};

/// The five-node demo graph: node 1 fans out to 2, 3 and 4, and 4 links to 5.
fn sample_scene() -> SceneConfig {
	SceneConfig {
		graph: GraphConfig {
			node_count: 5,
			edge_pairs: vec![(1, 2), (1, 3), (1, 4), (4, 5)],
			node_radius: 20.0,
			edge_width: 5.0,
		},
		..SceneConfig::default()
	}
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="graph-page">
				<h1>"Drag Graph"</h1>
				<p class="subtitle">
					"Click a node to select it. Press Control to toggle drag mode, type the node's number, then hold the mouse to move it."
				</p>
				<DragGraphCanvas config=sample_scene() />
			</div>
		</ErrorBoundary>
	}
}
