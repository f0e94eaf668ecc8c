use std::collections::HashMap;

use log::info;

use super::error::{ConfigurationError, GraphError, GraphResult};
use super::types::{GraphConfig, NodeId, Point};

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
	pub id: NodeId,
	pub position: Point,
	radius: f64,
}

impl Node {
	pub fn radius(&self) -> f64 {
		self.radius
	}

	pub fn contains(&self, point: Point) -> bool {
		self.position.distance_to(point) <= self.radius
	}
}

/// A line between two nodes, referenced by id.
///
/// `start` and `end` are recomputed from the endpoint nodes every frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
	endpoints: (NodeId, NodeId),
	pub line_width: f64,
	pub start: Point,
	pub end: Point,
}

/// Nodes stored in an arena, edges holding ids into it.
#[derive(Clone, Debug, Default)]
pub struct Graph {
	nodes: Vec<Node>,
	index: HashMap<NodeId, usize>,
	edges: Vec<Edge>,
	adjacency: HashMap<NodeId, Vec<NodeId>>,
}

impl Graph {
	/// Build `node_count` nodes at `center` and one edge per configured pair.
	pub fn new(config: &GraphConfig, center: Point) -> GraphResult<Self> {
		for (field, value) in [
			("node_radius", config.node_radius),
			("edge_width", config.edge_width),
		] {
			if !(value >= 0.0) {
				return Err(ConfigurationError::InvalidSize { field, value }.into());
			}
		}

		let in_range = |id: u32| (1..=config.node_count).contains(&id);
		if let Some(&(from, to)) = config
			.edge_pairs
			.iter()
			.find(|(a, b)| !in_range(*a) || !in_range(*b))
		{
			return Err(ConfigurationError::EdgeOutOfRange {
				from,
				to,
				node_count: config.node_count,
			}
			.into());
		}

		let nodes: Vec<Node> = (1..=config.node_count)
			.map(|id| Node {
				id: NodeId(id),
				position: center,
				radius: config.node_radius,
			})
			.collect();
		let index = nodes
			.iter()
			.enumerate()
			.map(|(i, node)| (node.id, i))
			.collect();

		let mut adjacency: HashMap<NodeId, Vec<NodeId>> = HashMap::new();
		let edges = config
			.edge_pairs
			.iter()
			.map(|&(a, b)| {
				let (a, b) = (NodeId(a), NodeId(b));
				adjacency.entry(a).or_default().push(b);
				if a != b {
					adjacency.entry(b).or_default().push(a);
				}
				Edge {
					endpoints: (a, b),
					line_width: config.edge_width,
					start: center,
					end: center,
				}
			})
			.collect();

		let mut graph = Self {
			nodes,
			index,
			edges,
			adjacency,
		};
		graph.refresh_edges()?;
		info!(
			"Built graph with {} nodes and {} edges",
			graph.nodes.len(),
			graph.edges.len()
		);
		Ok(graph)
	}

	pub fn nodes(&self) -> &[Node] {
		&self.nodes
	}

	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	pub fn node(&self, id: NodeId) -> Option<&Node> {
		self.index.get(&id).map(|&i| &self.nodes[i])
	}

	/// Ids connected to `id` by an edge, in edge order.
	pub fn neighbors(&self, id: NodeId) -> &[NodeId] {
		self.adjacency.get(&id).map(Vec::as_slice).unwrap_or(&[])
	}

	/// First node in storage order whose circle contains `point`.
	pub fn hit_test(&self, point: Point) -> Option<NodeId> {
		self.nodes
			.iter()
			.find(|node| node.contains(point))
			.map(|node| node.id)
	}

	/// Overwrites the position. Unknown ids are ignored and nothing is clamped.
	pub fn set_node_position(&mut self, id: NodeId, point: Point) {
		if let Some(&i) = self.index.get(&id) {
			self.nodes[i].position = point;
		}
	}

	pub fn resolve_edge_endpoints(&self, edge: &Edge) -> GraphResult<(Point, Point)> {
		let position = |id: NodeId| {
			self.node(id)
				.map(|node| node.position)
				.ok_or(GraphError::DanglingReference { node: id })
		};
		let (a, b) = edge.endpoints;
		Ok((position(a)?, position(b)?))
	}

	/// Recompute every edge's cached endpoints from current node positions.
	pub fn refresh_edges(&mut self) -> GraphResult<()> {
		for i in 0..self.edges.len() {
			let (start, end) = self.resolve_edge_endpoints(&self.edges[i])?;
			let edge = &mut self.edges[i];
			edge.start = start;
			edge.end = end;
		}
		Ok(())
	}

	/// Append an edge without checking its endpoints.
	#[cfg(test)]
	pub(crate) fn push_unchecked_edge(&mut self, from: NodeId, to: NodeId) {
		self.edges.push(Edge {
			endpoints: (from, to),
			line_width: 1.0,
			start: Point::default(),
			end: Point::default(),
		});
	}
}
