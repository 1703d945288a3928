//! Rendering module
//!
//! Scene drawing goes through the `Canvas` trait in `scene`; the wgpu
//! pipeline consumes the tessellated triangle list.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::{Canvas, Label, VertexCanvas, draw_scene};
