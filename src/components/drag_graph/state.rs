use log::{info, trace};

use super::error::GraphResult;
use super::graph::Graph;
use super::input::{InputTranslator, InteractionState, RawPointer};
use super::render::{self, Compositing, DrawingSurface, Rect};
use super::scene::{FrameUpdate, SceneController};
use super::types::{NodeId, Point, SceneConfig, SceneStyle};

/// Everything one canvas owns for its lifetime.
pub struct SceneSession {
	pub graph: Graph,
	pub interaction: InteractionState,
	pub controller: SceneController,
	input: InputTranslator,
	style: SceneStyle,
	bounds: Rect,
	last_frame: Option<f64>,
	/// Milliseconds between the last two frames. Nothing is animated by it yet.
	pub frame_dt: f64,
}

impl SceneSession {
	pub fn new(config: &SceneConfig, surface_offset: Point) -> GraphResult<Self> {
		let graph = Graph::new(&config.graph, config.center())?;
		info!(
			"Scene session started ({}x{}, drag toggle {:?})",
			config.width, config.height, config.toggle_key
		);
		Ok(Self {
			graph,
			interaction: InteractionState::default(),
			controller: SceneController::new(),
			input: InputTranslator::new(surface_offset, config.toggle_key.clone()),
			style: config.style.clone(),
			bounds: Rect {
				x: 0.0,
				y: 0.0,
				width: config.width,
				height: config.height,
			},
			last_frame: None,
			frame_dt: 0.0,
		})
	}

	/// Edges are drawn before nodes, so plain source-over keeps them behind.
	pub fn prepare_surface<S: DrawingSurface + ?Sized>(&self, surface: &mut S) {
		surface.set_compositing(Compositing::SourceOver);
	}

	pub fn set_surface_offset(&mut self, offset: Point) {
		self.input.set_offset(offset);
	}

	pub fn pointer_down(&mut self, raw: RawPointer) {
		self.input.on_pointer_down(&mut self.interaction, raw);
	}

	pub fn pointer_up(&mut self, raw: RawPointer) {
		self.input.on_pointer_up(&mut self.interaction, raw);
	}

	pub fn pointer_move(&mut self, raw: RawPointer) {
		self.input.on_pointer_move(&mut self.interaction, raw);
	}

	pub fn key_down(&mut self, key: &str) {
		self.input.on_key_down(&mut self.interaction, key);
	}

	pub fn selected_node(&self) -> Option<NodeId> {
		self.interaction.selected_node
	}

	/// One frame: draw the current graph, then advance the state machine.
	///
	/// An error means the graph is corrupt and no further frame should run.
	pub fn frame<S: DrawingSurface + ?Sized>(
		&mut self,
		timestamp: f64,
		surface: &mut S,
	) -> GraphResult<FrameUpdate> {
		self.frame_dt = self.last_frame.map_or(0.0, |last| timestamp - last);
		self.last_frame = Some(timestamp);
		trace!("frame at {timestamp:.1}ms, dt {:.1}ms", self.frame_dt);

		render::render(&mut self.graph, &self.style, self.bounds, surface)?;
		Ok(self.controller.update(&mut self.interaction, &mut self.graph))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::drag_graph::error::GraphError;
	use crate::components::drag_graph::render::recording::{DrawCall, RecordingSurface};
	use crate::components::drag_graph::scene::SceneState;
	use crate::components::drag_graph::types::GraphConfig;

	const OFFSET: Point = Point::new(10.0, 20.0);

	fn session() -> SceneSession {
		SceneSession::new(&SceneConfig::default(), OFFSET).unwrap()
	}

	fn client(x: f64, y: f64) -> RawPointer {
		RawPointer {
			client_x: x + OFFSET.x,
			client_y: y + OFFSET.y,
		}
	}

	#[test]
	fn invalid_topology_aborts_startup() {
		let config = SceneConfig {
			graph: GraphConfig {
				edge_pairs: vec![(1, 6)],
				..GraphConfig::default()
			},
			..SceneConfig::default()
		};
		assert!(matches!(
			SceneSession::new(&config, OFFSET),
			Err(GraphError::Configuration(_))
		));
	}

	#[test]
	fn nodes_start_at_surface_center() {
		let session = session();
		assert!(
			session
				.graph
				.nodes()
				.iter()
				.all(|n| n.position == Point::new(300.0, 200.0))
		);
	}

	#[test]
	fn frame_draws_before_updating() {
		let mut session = session();
		let mut surface = RecordingSurface::default();
		session.graph.set_node_position(NodeId(1), Point::new(40.0, 40.0));
		session.key_down("Control");
		session.key_down("1");
		session.interaction.selected_node = Some(NodeId(1));
		session.pointer_down(client(500.0, 300.0));

		let update = session.frame(0.0, &mut surface).unwrap();
		assert_eq!(update.state, SceneState::Dragging);
		// The frame drew node 1 where it was before the drag moved it.
		assert_eq!(
			surface.calls[5],
			DrawCall::Circle {
				center: Point::new(40.0, 40.0),
				radius: 20.0,
			}
		);
		assert_eq!(
			session.graph.node(NodeId(1)).unwrap().position,
			Point::new(500.0, 300.0)
		);
	}

	#[test]
	fn input_between_frames_applies_next_frame() {
		let mut session = session();
		let mut surface = RecordingSurface::default();
		session.graph.set_node_position(NodeId(3), Point::new(100.0, 100.0));

		session.frame(0.0, &mut surface).unwrap();
		assert_eq!(session.selected_node(), None);

		session.pointer_down(client(105.0, 95.0));
		assert_eq!(session.selected_node(), None);
		let update = session.frame(16.0, &mut surface).unwrap();
		assert_eq!(update.state, SceneState::HitTesting);
		assert_eq!(session.selected_node(), Some(NodeId(3)));
		assert_eq!(session.frame_dt, 16.0);

		session.pointer_up(client(105.0, 95.0));
		let update = session.frame(33.0, &mut surface).unwrap();
		assert_eq!(update.state, SceneState::Idle);
		assert_eq!(session.selected_node(), Some(NodeId(3)));
	}

	#[test]
	fn drag_follows_pointer_moves() {
		let mut session = session();
		let mut surface = RecordingSurface::default();
		session.graph.set_node_position(NodeId(2), Point::new(50.0, 50.0));

		// Select node 2, then key it and enable drag mode.
		session.pointer_down(client(50.0, 50.0));
		session.frame(0.0, &mut surface).unwrap();
		assert_eq!(session.selected_node(), Some(NodeId(2)));
		session.key_down("Control");
		session.key_down("2");

		for (i, (x, y)) in [(60.0, 70.0), (100.0, 100.0)].into_iter().enumerate() {
			session.pointer_move(client(x, y));
			session.frame(16.0 * (i + 1) as f64, &mut surface).unwrap();
			assert_eq!(session.graph.node(NodeId(2)).unwrap().position, Point::new(x, y));
		}
		assert!(
			session
				.graph
				.nodes()
				.iter()
				.filter(|n| n.id != NodeId(2))
				.all(|n| n.position == Point::new(300.0, 200.0))
		);
	}

	#[test]
	fn prepare_surface_sets_compositing_once() {
		let session = session();
		let mut surface = RecordingSurface::default();
		session.prepare_surface(&mut surface);
		assert_eq!(surface.calls, vec![DrawCall::Compositing(Compositing::SourceOver)]);
	}

	#[test]
	fn dangling_edge_aborts_frame_before_update() {
		let mut session = session();
		let mut surface = RecordingSurface::default();
		session.graph.set_node_position(NodeId(3), Point::new(100.0, 100.0));
		session.graph.push_unchecked_edge(NodeId(3), NodeId(6));
		session.pointer_down(client(100.0, 100.0));
		let before = session.interaction.clone();

		assert_eq!(
			session.frame(0.0, &mut surface).unwrap_err(),
			GraphError::DanglingReference { node: NodeId(6) }
		);
		assert!(surface.calls.is_empty());
		assert_eq!(session.interaction, before);
		assert_eq!(session.selected_node(), None);
	}
}
