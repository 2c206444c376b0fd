use glam::Affine3A;

use crate::scene::transform::Transform;
use crate::scene::{CameraKey, LightKey, MeshKey, NodeKey};

/// A scene node: hierarchy, transform, and optional component keys.
///
/// Components (mesh, camera, light) live in the scene's slotmaps; the node
/// only holds their keys.
#[derive(Debug, Clone)]
pub struct Node {
    pub name: String,

    // === Hierarchy ===
    pub(crate) parent: Option<NodeKey>,
    pub(crate) children: Vec<NodeKey>,

    // === Spatial data ===
    pub transform: Transform,

    // === Components ===
    pub mesh: Option<MeshKey>,
    pub camera: Option<CameraKey>,
    pub light: Option<LightKey>,

    // === State ===
    pub visible: bool,
    pub cast_shadow: bool,
    pub receive_shadow: bool,

    /// Caller-facing identification tag, set on loaded model roots.
    pub tag: Option<String>,
}

impl Node {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            parent: None,
            children: Vec::new(),
            transform: Transform::new(),
            mesh: None,
            camera: None,
            light: None,
            visible: true,
            cast_shadow: false,
            receive_shadow: false,
            tag: None,
        }
    }

    /// Returns the parent node key, if any.
    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<NodeKey> {
        self.parent
    }

    /// Returns a read-only slice of child node keys.
    #[inline]
    #[must_use]
    pub fn children(&self) -> &[NodeKey] {
        &self.children
    }

    /// Returns the cached world transformation matrix.
    ///
    /// Valid after [`Scene::update_matrix_world`](crate::scene::Scene::update_matrix_world).
    #[inline]
    #[must_use]
    pub fn world_matrix(&self) -> &Affine3A {
        &self.transform.world_matrix
    }
}
