use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::error::GraphResult;
use super::graph::Graph;
use super::types::{Point, SceneStyle};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Compositing {
	SourceOver,
}

impl Compositing {
	fn as_str(self) -> &'static str {
		match self {
			Compositing::SourceOver => "source-over",
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
	pub x: f64,
	pub y: f64,
	pub width: f64,
	pub height: f64,
}

/// The drawing operations a frame needs.
pub trait DrawingSurface {
	fn clear(&mut self, rect: Rect);
	fn draw_circle(&mut self, center: Point, radius: f64, line_width: f64, stroke: &str, fill: &str);
	fn draw_line(&mut self, from: Point, to: Point, color: &str, width: f64);
	fn set_compositing(&mut self, mode: Compositing);
}

impl DrawingSurface for CanvasRenderingContext2d {
	fn clear(&mut self, rect: Rect) {
		self.clear_rect(rect.x, rect.y, rect.width, rect.height);
	}

	fn draw_circle(&mut self, center: Point, radius: f64, line_width: f64, stroke: &str, fill: &str) {
		self.begin_path();
		self.set_line_width(line_width);
		let _ = self.arc(center.x, center.y, radius, 0.0, 2.0 * PI);
		self.set_stroke_style_str(stroke);
		self.set_fill_style_str(fill);
		self.stroke();
		self.fill();
	}

	fn draw_line(&mut self, from: Point, to: Point, color: &str, width: f64) {
		self.begin_path();
		self.move_to(from.x, from.y);
		self.line_to(to.x, to.y);
		self.set_stroke_style_str(color);
		self.set_line_width(width);
		self.stroke();
	}

	fn set_compositing(&mut self, mode: Compositing) {
		let _ = self.set_global_composite_operation(mode.as_str());
	}
}

/// Clear, then edges, then nodes on top.
///
/// Edge caches are refreshed before the clear, so a dangling endpoint leaves
/// the previous frame on the surface untouched.
pub fn render<S: DrawingSurface + ?Sized>(
	graph: &mut Graph,
	style: &SceneStyle,
	bounds: Rect,
	surface: &mut S,
) -> GraphResult<()> {
	graph.refresh_edges()?;
	surface.clear(bounds);
	draw_edges(graph, style, surface);
	draw_nodes(graph, style, surface);
	Ok(())
}

fn draw_edges<S: DrawingSurface + ?Sized>(graph: &Graph, style: &SceneStyle, surface: &mut S) {
	for edge in graph.edges() {
		surface.draw_line(edge.start, edge.end, &style.edge_color, edge.line_width);
	}
}

fn draw_nodes<S: DrawingSurface + ?Sized>(graph: &Graph, style: &SceneStyle, surface: &mut S) {
	for node in graph.nodes() {
		surface.draw_circle(
			node.position,
			node.radius(),
			style.node_line_width,
			&style.node_stroke,
			&style.node_fill,
		);
	}
}

#[cfg(test)]
pub(crate) mod recording {
	use super::*;

	#[derive(Clone, Debug, PartialEq)]
	pub enum DrawCall {
		Clear(Rect),
		Circle { center: Point, radius: f64 },
		Line { from: Point, to: Point, width: f64 },
		Compositing(Compositing),
	}

	/// Surface that records calls instead of drawing.
	#[derive(Default)]
	pub struct RecordingSurface {
		pub calls: Vec<DrawCall>,
	}

	impl DrawingSurface for RecordingSurface {
		fn clear(&mut self, rect: Rect) {
			self.calls.push(DrawCall::Clear(rect));
		}

		fn draw_circle(&mut self, center: Point, radius: f64, _: f64, _: &str, _: &str) {
			self.calls.push(DrawCall::Circle { center, radius });
		}

		fn draw_line(&mut self, from: Point, to: Point, _: &str, width: f64) {
			self.calls.push(DrawCall::Line { from, to, width });
		}

		fn set_compositing(&mut self, mode: Compositing) {
			self.calls.push(DrawCall::Compositing(mode));
		}
	}
}
