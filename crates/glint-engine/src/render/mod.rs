//! GPU rendering subsystem.
//!
//! Renderers issue GPU commands via wgpu and own their GPU resources
//! (pipelines, buffers). The engine ships one renderer: a single-pass
//! Phong-lit mesh renderer.
//!
//! Convention:
//! - meshes are interleaved position+normal triangle lists in object space
//! - matrices follow wgpu clip-space conventions (depth 0..1)

mod ctx;
mod mesh;
pub mod phong;

pub use ctx::{RenderCtx, RenderTarget};
pub use mesh::{Mesh, MeshVertex};
