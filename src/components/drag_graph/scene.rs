//! Per-frame interaction state machine.
//!
//! ```text
//! drag off, pointer up                          -> Idle
//! drag off, pointer down                        -> HitTesting (select node under pointer)
//! drag on, pointer down, last key == selected   -> Dragging   (move selected node to pointer)
//! drag on, otherwise                            -> Idle
//! ```
//!
//! While drag mode is on, the node that moves is the selected one whose id
//! matches the last typed key. The pointer only supplies the destination.

use log::debug;

use super::graph::Graph;
use super::input::InteractionState;
use super::types::{NodeId, Point};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SceneState {
	#[default]
	Idle,
	HitTesting,
	Dragging,
}

/// The parts of [`InteractionState`] a frame reads, copied once.
#[derive(Clone, Debug, PartialEq)]
struct InteractionSnapshot {
	pointer_down: bool,
	pointer_position: Point,
	drag_mode_enabled: bool,
	last_key: Option<String>,
	selected_node: Option<NodeId>,
}

impl From<&InteractionState> for InteractionSnapshot {
	fn from(state: &InteractionState) -> Self {
		Self {
			pointer_down: state.pointer_down,
			pointer_position: state.pointer_position,
			drag_mode_enabled: state.drag_mode_enabled,
			last_key: state.last_key.clone(),
			selected_node: state.selected_node,
		}
	}
}

impl InteractionSnapshot {
	fn key_matches_selection(&self) -> Option<NodeId> {
		let (key, id) = (self.last_key.as_deref()?, self.selected_node?);
		(key == id.to_string()).then_some(id)
	}
}

/// Result of one controller evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameUpdate {
	pub state: SceneState,
	pub selection_changed: bool,
}

#[derive(Clone, Debug, Default)]
pub struct SceneController {
	state: SceneState,
}

impl SceneController {
	pub fn new() -> Self {
		Self::default()
	}

	/// Evaluate the transition table once against the current interaction.
	pub fn update(&mut self, interaction: &mut InteractionState, graph: &mut Graph) -> FrameUpdate {
		let snapshot = InteractionSnapshot::from(&*interaction);
		let previous = self.state;
		let mut selected = snapshot.selected_node;

		self.state = match (snapshot.drag_mode_enabled, snapshot.pointer_down) {
			(false, false) => SceneState::Idle,
			(false, true) => {
				if let Some(id) = graph.hit_test(snapshot.pointer_position) {
					selected = Some(id);
				}
				SceneState::HitTesting
			}
			(true, true) => match snapshot.key_matches_selection() {
				Some(id) => {
					graph.set_node_position(id, snapshot.pointer_position);
					SceneState::Dragging
				}
				None => SceneState::Idle,
			},
			(true, false) => SceneState::Idle,
		};

		let selection_changed = selected != snapshot.selected_node;
		if selection_changed {
			interaction.selected_node = selected;
		}
		if previous != self.state || selection_changed {
			debug!("Scene {:?} -> {:?}, selected {:?}", previous, self.state, selected);
		}

		FrameUpdate {
			state: self.state,
			selection_changed,
		}
	}
}
