//! WebGPU rendering module
//!
//! Meshes are instanced from a [`DrawList`] the host keeps in sync with the
//! simulation; the road is a single strip shaded in the fragment shader.

pub mod pipeline;
pub mod projection;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use projection::Projection;
pub use scene::{DrawList, DrawableId, MeshKind, SceneBinding};
pub use vertex::{InstanceRaw, RoadVertex, Vertex};
