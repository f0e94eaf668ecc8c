use log::debug;

use super::types::{NodeId, Point};

/// What the user is currently doing. Written by input handlers, read by the
/// scene controller once per frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InteractionState {
	pub pointer_down: bool,
	pub pointer_position: Point,
	pub drag_mode_enabled: bool,
	pub last_key: Option<String>,
	pub selected_node: Option<NodeId>,
}

/// Pointer payload in client (viewport) coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RawPointer {
	pub client_x: f64,
	pub client_y: f64,
}

impl From<&web_sys::MouseEvent> for RawPointer {
	fn from(ev: &web_sys::MouseEvent) -> Self {
		Self {
			client_x: ev.client_x() as f64,
			client_y: ev.client_y() as f64,
		}
	}
}

/// Translates DOM input into [`InteractionState`] changes.
#[derive(Clone, Debug)]
pub struct InputTranslator {
	offset: Point,
	toggle_key: String,
}

impl InputTranslator {
	/// `offset` is the surface's client-space origin, captured at startup.
	pub fn new(offset: Point, toggle_key: impl Into<String>) -> Self {
		Self {
			offset,
			toggle_key: toggle_key.into(),
		}
	}

	/// Replace the captured offset, e.g. after the window was resized.
	pub fn set_offset(&mut self, offset: Point) {
		self.offset = offset;
	}

	pub fn to_scene(&self, raw: RawPointer) -> Point {
		Point::new(raw.client_x - self.offset.x, raw.client_y - self.offset.y)
	}

	pub fn on_pointer_down(&self, state: &mut InteractionState, raw: RawPointer) {
		state.pointer_down = true;
		state.pointer_position = self.to_scene(raw);
	}

	/// Selection is kept so it can still be read out between drags.
	pub fn on_pointer_up(&self, state: &mut InteractionState, _raw: RawPointer) {
		state.pointer_down = false;
	}

	pub fn on_pointer_move(&self, state: &mut InteractionState, raw: RawPointer) {
		if state.drag_mode_enabled {
			state.pointer_position = self.to_scene(raw);
		}
	}

	/// Flips drag mode on the toggle key, and always records the key.
	pub fn on_key_down(&self, state: &mut InteractionState, key: &str) {
		if key == self.toggle_key {
			state.drag_mode_enabled = !state.drag_mode_enabled;
			debug!("Drag mode {}", if state.drag_mode_enabled { "on" } else { "off" });
		}
		state.last_key = Some(key.to_owned());
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn translator() -> InputTranslator {
		InputTranslator::new(Point::new(8.0, 16.0), "Control")
	}

	fn raw(client_x: f64, client_y: f64) -> RawPointer {
		RawPointer { client_x, client_y }
	}

	#[test]
	fn pointer_down_subtracts_offset() {
		let mut state = InteractionState::default();
		translator().on_pointer_down(&mut state, raw(108.0, 116.0));
		assert!(state.pointer_down);
		assert_eq!(state.pointer_position, Point::new(100.0, 100.0));
	}

	#[test]
	fn pointer_up_keeps_selection() {
		let mut state = InteractionState {
			pointer_down: true,
			selected_node: Some(NodeId(3)),
			..Default::default()
		};
		translator().on_pointer_up(&mut state, raw(0.0, 0.0));
		assert!(!state.pointer_down);
		assert_eq!(state.selected_node, Some(NodeId(3)));
	}

	#[test]
	fn pointer_move_only_tracks_in_drag_mode() {
		let input = translator();
		let mut state = InteractionState::default();
		input.on_pointer_move(&mut state, raw(58.0, 66.0));
		assert_eq!(state.pointer_position, Point::default());

		state.drag_mode_enabled = true;
		input.on_pointer_move(&mut state, raw(58.0, 66.0));
		assert_eq!(state.pointer_position, Point::new(50.0, 50.0));
	}

	#[test]
	fn toggle_key_flips_mode_and_is_recorded() {
		let input = translator();
		let mut state = InteractionState::default();
		input.on_key_down(&mut state, "Control");
		assert!(state.drag_mode_enabled);
		assert_eq!(state.last_key.as_deref(), Some("Control"));

		input.on_key_down(&mut state, "2");
		assert!(state.drag_mode_enabled);
		assert_eq!(state.last_key.as_deref(), Some("2"));

		input.on_key_down(&mut state, "Control");
		assert!(!state.drag_mode_enabled);
	}

	#[test]
	fn offset_can_be_recaptured() {
		let mut input = translator();
		input.set_offset(Point::new(0.0, 0.0));
		assert_eq!(input.to_scene(raw(3.0, 4.0)), Point::new(3.0, 4.0));
	}
}
