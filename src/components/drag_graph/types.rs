use std::fmt;

/// Stable node identifier, assigned sequentially from 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// A point in scene-local coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	pub fn distance_to(&self, other: Point) -> f64 {
		let (dx, dy) = (self.x - other.x, self.y - other.y);
		(dx * dx + dy * dy).sqrt()
	}
}

/// Topology and sizing used to build a graph.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphConfig {
	pub node_count: u32,
	pub edge_pairs: Vec<(u32, u32)>,
	pub node_radius: f64,
	pub edge_width: f64,
}

impl Default for GraphConfig {
	fn default() -> Self {
		Self {
			node_count: 5,
			edge_pairs: vec![(1, 2), (1, 3), (1, 4), (4, 5)],
			node_radius: 20.0,
			edge_width: 5.0,
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneStyle {
	pub node_stroke: String,
	pub node_fill: String,
	pub node_line_width: f64,
	pub edge_color: String,
}

impl Default for SceneStyle {
	fn default() -> Self {
		Self {
			node_stroke: "cyan".into(),
			node_fill: "orange".into(),
			node_line_width: 1.0,
			edge_color: "cyan".into(),
		}
	}
}

/// Startup configuration for a scene. There is no other source of settings.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
	pub width: f64,
	pub height: f64,
	pub graph: GraphConfig,
	/// Key identifier that flips drag mode.
	pub toggle_key: String,
	pub style: SceneStyle,
}

impl SceneConfig {
	pub fn center(&self) -> Point {
		Point::new(self.width / 2.0, self.height / 2.0)
	}
}

impl Default for SceneConfig {
	fn default() -> Self {
		Self {
			width: 600.0,
			height: 400.0,
			graph: GraphConfig::default(),
			toggle_key: "Control".into(),
			style: SceneStyle::default(),
		}
	}
}
