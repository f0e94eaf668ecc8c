use std::cell::RefCell;
use std::rc::Rc;

use leptos::ev;
use leptos::prelude::*;
use log::error;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use super::input::RawPointer;
use super::scene::SceneState;
use super::state::SceneSession;
use super::types::{NodeId, Point, SceneConfig};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn surface_offset(canvas: &HtmlCanvasElement) -> Point {
	let rect = canvas.get_bounding_client_rect();
	Point::new(rect.left(), rect.top())
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok().flatten()?.dyn_into().ok()
}

fn describe_selection(node: NodeId, neighbors: &[NodeId]) -> String {
	if neighbors.is_empty() {
		return format!("Node {node}");
	}
	let linked: Vec<String> = neighbors.iter().map(NodeId::to_string).collect();
	format!("Node {node} (linked to {})", linked.join(", "))
}

#[component]
pub fn DragGraphCanvas(#[prop(optional)] config: SceneConfig) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<SceneSession>>> = Rc::new(RefCell::new(None));
	let animate: FrameCallback = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (selection, set_selection) = signal(None::<String>);
	let (fatal, set_fatal) = signal(None::<String>);
	let (dragging, set_dragging) = signal(false);
	let (state_init, animate_init, resize_cb_init) =
		(state.clone(), animate.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};
		canvas.set_width(config.width as u32);
		canvas.set_height(config.height as u32);

		let Some(mut ctx) = context_2d(&canvas) else {
			error!("Canvas has no 2d context");
			set_fatal.set(Some("Canvas 2d context unavailable".into()));
			return;
		};
		let session = match SceneSession::new(&config, surface_offset(&canvas)) {
			Ok(session) => session,
			Err(e) => {
				error!("Invalid graph configuration: {e}");
				set_fatal.set(Some(e.to_string()));
				return;
			}
		};
		session.prepare_surface(&mut ctx);
		*state_init.borrow_mut() = Some(session);

		let (state_resize, canvas_resize) = (state_init.clone(), canvas.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut s) = *state_resize.borrow_mut() {
				s.set_surface_offset(surface_offset(&canvas_resize));
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (state_anim, animate_inner) = (state_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				match s.frame(timestamp, &mut ctx) {
					Ok(update) => {
						let is_dragging = update.state == SceneState::Dragging;
						if dragging.get_untracked() != is_dragging {
							set_dragging.set(is_dragging);
						}
						if update.selection_changed {
							let text = s
								.selected_node()
								.map(|id| describe_selection(id, s.graph.neighbors(id)));
							set_selection.set(text);
						}
					}
					Err(e) => {
						error!("Stopping render loop: {e}");
						set_fatal.set(Some(e.to_string()));
						return;
					}
				}
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				if let Some(window) = web_sys::window() {
					let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
				}
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let state_kd = state.clone();
	let key_handle = window_event_listener(ev::keydown, move |ev| {
		if let Some(ref mut s) = *state_kd.borrow_mut() {
			s.key_down(&ev.key());
		}
	});
	on_cleanup(move || key_handle.remove());

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		if let Some(ref mut s) = *state_md.borrow_mut() {
			s.pointer_down(RawPointer::from(&ev));
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			s.pointer_move(RawPointer::from(&ev));
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |ev: MouseEvent| {
		if let Some(ref mut s) = *state_mu.borrow_mut() {
			s.pointer_up(RawPointer::from(&ev));
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="drag-graph-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			style=move || {
				let cursor = if dragging.get() { "grabbing" } else { "crosshair" };
				format!("display: block; cursor: {cursor};")
			}
		/>
		<p class="graph-error">{move || fatal.get()}</p>
		<p class="graph-readout">
			{move || selection.get().unwrap_or_else(|| "No node selected".into())}
		</p>
	}
}
