use std::sync::atomic::{AtomicU32, Ordering};

use glam::{Affine3A, Vec3};
use slotmap::SlotMap;

use crate::resources::mesh::Mesh;
use crate::scene::camera::Camera;
use crate::scene::group::{Group, ModelNode};
use crate::scene::light::{Light, LightKind};
use crate::scene::node::Node;
use crate::scene::{CameraKey, LightKey, MeshKey, NodeKey};

static NEXT_SCENE_ID: AtomicU32 = AtomicU32::new(1);

/// Scene graph container.
///
/// Pure data layer: node hierarchy plus component pools. The staging
/// operations only append to it; ownership stays with the host application.
pub struct Scene {
    pub id: u32,

    pub nodes: SlotMap<NodeKey, Node>,
    pub root_nodes: Vec<NodeKey>,

    // === Component pools ===
    pub meshes: SlotMap<MeshKey, Mesh>,
    pub cameras: SlotMap<CameraKey, Camera>,
    pub lights: SlotMap<LightKey, Light>,

    pub active_camera: Option<NodeKey>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: NEXT_SCENE_ID.fetch_add(1, Ordering::Relaxed),
            nodes: SlotMap::with_key(),
            root_nodes: Vec::new(),
            meshes: SlotMap::with_key(),
            cameras: SlotMap::with_key(),
            lights: SlotMap::with_key(),
            active_camera: None,
        }
    }

    // ========================================================================
    // Node management
    // ========================================================================

    /// Adds a node at the root level.
    pub fn add_node(&mut self, node: Node) -> NodeKey {
        let key = self.nodes.insert(node);
        self.root_nodes.push(key);
        key
    }

    /// Adds a node as a child of `parent`.
    pub fn add_to_parent(&mut self, child: Node, parent: NodeKey) -> NodeKey {
        let key = self.nodes.insert(child);

        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.push(key);
        }
        if let Some(c) = self.nodes.get_mut(key) {
            c.parent = Some(parent);
        }

        key
    }

    /// Re-parents `child` under `parent`, detaching it from its old place.
    pub fn attach(&mut self, child: NodeKey, parent: NodeKey) {
        if child == parent {
            log::warn!("Cannot attach node to itself!");
            return;
        }

        // 1. Detach from the old parent (or the root list)
        let old_parent = self.nodes.get(child).and_then(|n| n.parent);
        if let Some(p) = old_parent {
            if let Some(n) = self.nodes.get_mut(p)
                && let Some(i) = n.children.iter().position(|&x| x == child)
            {
                n.children.remove(i);
            }
        } else if let Some(i) = self.root_nodes.iter().position(|&x| x == child) {
            self.root_nodes.remove(i);
        }

        // 2. Attach to the new parent
        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.push(child);
        } else {
            log::error!("Parent node not found during attach!");
            self.root_nodes.push(child);
            return;
        }

        // 3. Update the child
        if let Some(c) = self.nodes.get_mut(child) {
            c.parent = Some(parent);
            c.transform.mark_dirty();
        }
    }

    /// Removes a node and its whole subtree, including attached components.
    pub fn remove_node(&mut self, key: NodeKey) {
        let children = if let Some(node) = self.nodes.get(key) {
            node.children.clone()
        } else {
            return;
        };

        for child in children {
            self.remove_node(child);
        }

        let parent = self.nodes.get(key).and_then(|n| n.parent);
        if let Some(p) = parent {
            if let Some(node) = self.nodes.get_mut(p)
                && let Some(i) = node.children.iter().position(|&x| x == key)
            {
                node.children.remove(i);
            }
        } else if let Some(i) = self.root_nodes.iter().position(|&x| x == key) {
            self.root_nodes.remove(i);
        }

        if let Some(node) = self.nodes.get(key) {
            if let Some(mesh) = node.mesh {
                self.meshes.remove(mesh);
            }
            if let Some(camera) = node.camera {
                self.cameras.remove(camera);
            }
            if let Some(light) = node.light {
                self.lights.remove(light);
            }
        }

        self.nodes.remove(key);
    }

    #[must_use]
    pub fn get_node(&self, key: NodeKey) -> Option<&Node> {
        self.nodes.get(key)
    }

    pub fn get_node_mut(&mut self, key: NodeKey) -> Option<&mut Node> {
        self.nodes.get_mut(key)
    }

    // ========================================================================
    // Component insertion
    // ========================================================================

    /// Adds a camera node placed at the camera's cached world transform.
    pub fn add_camera(&mut self, camera: Camera) -> NodeKey {
        let mut node = Node::new("Camera");
        node.transform.apply_local_matrix(*camera.world_matrix());
        node.camera = Some(self.cameras.insert(camera));

        let key = self.add_node(node);
        if self.active_camera.is_none() {
            self.active_camera = Some(key);
        }
        key
    }

    /// Adds a light node placed at the light's position, aimed at its target.
    pub fn add_light(&mut self, light: Light) -> NodeKey {
        let mut node = Node::new("Light");
        node.transform.position = light.position;
        if light.kind == LightKind::Directional {
            node.transform.look_at(light.target, Vec3::Y);
        }
        node.light = Some(self.lights.insert(light));
        self.add_node(node)
    }

    /// Flattens a loaded model group into scene nodes.
    ///
    /// The variant tag survives on the returned root node.
    pub fn add_group(&mut self, group: Group) -> NodeKey {
        let Group { kind, root } = group;
        let key = self.insert_model_node(root, None);
        if let Some(node) = self.nodes.get_mut(key) {
            node.tag = Some(kind);
        }
        key
    }

    fn insert_model_node(&mut self, model: ModelNode, parent: Option<NodeKey>) -> NodeKey {
        let ModelNode {
            name,
            transform,
            meshes,
            children,
            cast_shadow,
            receive_shadow,
        } = model;

        let mut node = Node::new(&name);
        node.transform = transform;
        node.cast_shadow = cast_shadow;
        node.receive_shadow = receive_shadow;

        let mut parts = meshes.into_iter();
        if let Some(first) = parts.next() {
            node.mesh = Some(self.meshes.insert(first));
        }

        let key = match parent {
            Some(p) => self.add_to_parent(node, p),
            None => self.add_node(node),
        };

        // Additional material parts become child nodes with identity transforms.
        for (i, part) in parts.enumerate() {
            let mut part_node = Node::new(&format!("{name}.{}", i + 1));
            part_node.cast_shadow = cast_shadow;
            part_node.receive_shadow = receive_shadow;
            part_node.mesh = Some(self.meshes.insert(part));
            self.add_to_parent(part_node, key);
        }

        for child in children {
            self.insert_model_node(child, Some(key));
        }

        key
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Iterates all lights in the scene.
    pub fn iter_lights(&self) -> impl Iterator<Item = &Light> {
        self.lights.values()
    }

    /// Finds the first root node carrying the given tag.
    #[must_use]
    pub fn find_by_tag(&self, tag: &str) -> Option<NodeKey> {
        self.root_nodes
            .iter()
            .copied()
            .find(|&key| self.nodes.get(key).and_then(|n| n.tag.as_deref()) == Some(tag))
    }

    // ========================================================================
    // Matrix propagation
    // ========================================================================

    /// Updates world matrices for the whole scene.
    ///
    /// Iterative traversal; deep hierarchies never grow the call stack.
    /// Cameras attached to nodes get their view matrices refreshed.
    pub fn update_matrix_world(&mut self) {
        let mut stack: Vec<(NodeKey, Affine3A)> = self
            .root_nodes
            .iter()
            .map(|&k| (k, Affine3A::IDENTITY))
            .collect();

        while let Some((key, parent_world)) = stack.pop() {
            let Some(node) = self.nodes.get_mut(key) else {
                continue;
            };

            node.transform.update_local_matrix();
            let world = parent_world * node.transform.local_matrix;
            node.transform.set_world_matrix(world);

            let children = node.children.clone();
            let camera_key = node.camera;

            if let Some(ck) = camera_key
                && let Some(camera) = self.cameras.get_mut(ck)
            {
                camera.update_view_projection(&world);
            }

            for child in children {
                stack.push((child, world));
            }
        }
    }
}
