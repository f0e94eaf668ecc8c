mod component;
mod error;
mod graph;
mod input;
mod render;
mod scene;
mod state;
mod types;

pub use component::DragGraphCanvas;
pub use types::{GraphConfig, SceneConfig};
