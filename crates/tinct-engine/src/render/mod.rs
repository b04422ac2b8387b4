//! GPU-facing state derived from the paint model.
//!
//! Nothing here touches a device; these are the values pipelines and vertex
//! buffers are built from.

pub mod batch;
pub mod blend;

pub use batch::{BatchVertex, QUAD_INDICES, pack_vertex_color, quad_vertices};
pub use blend::{blend_state, resolve_blend_state};
