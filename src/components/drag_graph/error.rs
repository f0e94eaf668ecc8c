//! Errors raised by the graph model.
//!
//! Both kinds are programmer or configuration mistakes, never transient.

use thiserror::Error;

use super::types::NodeId;

/// What is wrong with a [`GraphConfig`](super::types::GraphConfig).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
	/// An edge pair names a node outside `1..=node_count`.
	#[error("edge ({from}, {to}) references a node outside 1..={node_count}")]
	EdgeOutOfRange { from: u32, to: u32, node_count: u32 },

	/// Node radius or edge width is negative or not a number.
	#[error("{field} must be a non-negative number, got {value}")]
	InvalidSize { field: &'static str, value: f64 },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
	#[error("invalid graph configuration: {0}")]
	Configuration(#[from] ConfigurationError),

	/// An edge endpoint could not be resolved to a node while drawing.
	#[error("edge endpoint {node} does not exist in the graph")]
	DanglingReference { node: NodeId },
}

pub type GraphResult<T> = Result<T, GraphError>;
