//! Scene graph.
//!
//! - Node: scene node (hierarchy plus transform)
//! - Transform: position / rotation / scale with matrix caching
//! - Scene: component container the host application owns
//! - Camera: projection component
//! - Light: ambient and directional light components
//! - Group: detached node tree produced by model loading

pub mod camera;
pub mod group;
pub mod light;
pub mod node;
pub mod scene;
pub mod transform;

pub use camera::{Camera, ProjectionType};
pub use group::{Group, ModelNode};
pub use light::{Light, LightKind, ShadowCamera, ShadowConfig};
pub use node::Node;
pub use scene::Scene;
pub use transform::Transform;

use slotmap::new_key_type;

new_key_type! {
    pub struct NodeKey;
    pub struct MeshKey;
    pub struct CameraKey;
    pub struct LightKey;
}
