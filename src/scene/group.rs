use crate::resources::mesh::Mesh;
use crate::scene::transform::Transform;

/// A loaded model: a detached node tree tagged with the requested variant.
///
/// Ownership sits with the caller until
/// [`Scene::add_group`](crate::scene::Scene::add_group) flattens it into
/// scene nodes.
#[derive(Debug, Clone)]
pub struct Group {
    /// The model variant the caller asked for.
    pub kind: String,
    pub root: ModelNode,
}

impl Group {
    /// Total node count of the tree, root included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        self.root.traverse(&mut |_| count += 1);
        count
    }
}

/// One node of a detached model tree.
///
/// Multi-material meshes carry one [`Mesh`] part per original material,
/// mapped element-wise during loading.
#[derive(Debug, Clone)]
pub struct ModelNode {
    pub name: String,
    pub transform: Transform,
    pub meshes: Vec<Mesh>,
    pub children: Vec<ModelNode>,

    pub cast_shadow: bool,
    pub receive_shadow: bool,
}

impl ModelNode {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            transform: Transform::new(),
            meshes: Vec::new(),
            children: Vec::new(),
            cast_shadow: false,
            receive_shadow: false,
        }
    }

    /// Depth-first visit of this node and all descendants.
    pub fn traverse(&self, f: &mut impl FnMut(&ModelNode)) {
        f(self);
        for child in &self.children {
            child.traverse(f);
        }
    }
}
