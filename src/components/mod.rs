pub mod drag_graph;
