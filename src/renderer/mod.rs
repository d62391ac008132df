//! WebGPU rendering module
//!
//! Draw commands are tessellated on the CPU into a single triangle list
//! and drawn in one pass.

pub mod batch;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use batch::ShapeBatch;
pub use pipeline::RenderState;
pub use vertex::Vertex;
