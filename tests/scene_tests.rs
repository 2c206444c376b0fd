//! Scene graph behavior: hierarchy, matrix propagation, and group insertion.

use glam::Vec3;
use stagekit::scene::Group;
use stagekit::{AssetServer, Geometry, Mesh, ModelNode, Node, Scene, StandardMaterial};

fn test_mesh(assets: &AssetServer, name: &str) -> Mesh {
    let geometry = assets.geometries.add(Geometry::new(name));
    let material = assets.materials.add(StandardMaterial::default());
    Mesh::new(geometry, material).with_name(name)
}

#[test]
fn nodes_form_a_hierarchy() {
    let mut scene = Scene::new();

    let root = scene.add_node(Node::new("root"));
    let child = scene.add_to_parent(Node::new("child"), root);

    assert_eq!(scene.get_node(child).unwrap().parent(), Some(root));
    assert_eq!(scene.get_node(root).unwrap().children(), &[child]);
    assert_eq!(scene.root_nodes, vec![root]);
}

#[test]
fn attach_reparents_and_detaches_from_the_old_place() {
    let mut scene = Scene::new();

    let a = scene.add_node(Node::new("a"));
    let b = scene.add_node(Node::new("b"));
    let child = scene.add_to_parent(Node::new("child"), a);

    scene.attach(child, b);

    assert!(scene.get_node(a).unwrap().children().is_empty());
    assert_eq!(scene.get_node(b).unwrap().children(), &[child]);
    assert_eq!(scene.get_node(child).unwrap().parent(), Some(b));
}

#[test]
fn attach_to_self_is_ignored() {
    let mut scene = Scene::new();
    let a = scene.add_node(Node::new("a"));

    scene.attach(a, a);

    assert_eq!(scene.get_node(a).unwrap().parent(), None);
    assert_eq!(scene.root_nodes, vec![a]);
}

#[test]
fn remove_node_drops_the_whole_subtree_and_components() {
    let assets = AssetServer::new();
    let mut scene = Scene::new();

    let root = scene.add_node(Node::new("root"));
    let mut meshed = Node::new("meshed");
    meshed.mesh = Some(scene.meshes.insert(test_mesh(&assets, "part")));
    let child = scene.add_to_parent(meshed, root);
    let grandchild = scene.add_to_parent(Node::new("leaf"), child);

    scene.remove_node(root);

    assert!(scene.get_node(root).is_none());
    assert!(scene.get_node(child).is_none());
    assert!(scene.get_node(grandchild).is_none());
    assert!(scene.meshes.is_empty());
    assert!(scene.root_nodes.is_empty());
}

#[test]
fn first_camera_becomes_active() {
    let mut scene = Scene::new();
    let stage = stagekit::Stage::new();

    let first = scene.add_camera(stage.create_camera(
        stagekit::Viewport::new(800.0, 600.0),
        Vec3::new(0.0, 5.0, 5.0),
    ));
    scene.add_camera(stage.create_camera(
        stagekit::Viewport::new(800.0, 600.0),
        Vec3::new(5.0, 5.0, 0.0),
    ));

    assert_eq!(scene.active_camera, Some(first));
    assert_eq!(scene.cameras.len(), 2);
}

#[test]
fn world_matrices_propagate_down_the_hierarchy() {
    let mut scene = Scene::new();

    let mut parent = Node::new("parent");
    parent.transform.position = Vec3::new(1.0, 0.0, 0.0);
    let parent = scene.add_node(parent);

    let mut child = Node::new("child");
    child.transform.position = Vec3::new(0.0, 2.0, 0.0);
    let child = scene.add_to_parent(child, parent);

    scene.update_matrix_world();

    let world = scene.get_node(child).unwrap().world_matrix();
    assert!(Vec3::from(world.translation).distance(Vec3::new(1.0, 2.0, 0.0)) < 1e-6);
}

#[test]
fn add_group_flattens_the_model_tree_and_keeps_the_tag() {
    let assets = AssetServer::new();

    let mut root = ModelNode::new("Area_2");
    root.transform.position = Vec3::new(3.0, 0.0, 0.0);
    root.cast_shadow = true;
    root.receive_shadow = true;

    let mut floor = ModelNode::new("floor");
    floor.meshes.push(test_mesh(&assets, "floor"));
    floor.cast_shadow = true;
    floor.receive_shadow = true;
    root.children.push(floor);

    let group = Group {
        kind: "2".to_string(),
        root,
    };
    assert_eq!(group.node_count(), 2);

    let mut scene = Scene::new();
    let key = scene.add_group(group);

    let root_node = scene.get_node(key).unwrap();
    assert_eq!(root_node.tag.as_deref(), Some("2"));
    assert_eq!(root_node.transform.position, Vec3::new(3.0, 0.0, 0.0));
    assert!(root_node.cast_shadow);
    assert_eq!(root_node.children().len(), 1);
    assert_eq!(scene.meshes.len(), 1);

    assert_eq!(scene.find_by_tag("2"), Some(key));
    assert_eq!(scene.find_by_tag("missing"), None);
}

#[test]
fn multi_part_model_nodes_expand_into_child_nodes() {
    let assets = AssetServer::new();

    let mut root = ModelNode::new("building");
    root.meshes.push(test_mesh(&assets, "building"));
    root.meshes.push(test_mesh(&assets, "building.1"));
    root.meshes.push(test_mesh(&assets, "building.2"));

    let mut scene = Scene::new();
    let key = scene.add_group(Group {
        kind: "b".to_string(),
        root,
    });

    // First part stays on the node itself, the rest become children.
    let node = scene.get_node(key).unwrap();
    assert!(node.mesh.is_some());
    assert_eq!(node.children().len(), 2);
    assert_eq!(scene.meshes.len(), 3);

    let part = scene.get_node(node.children()[0]).unwrap();
    assert_eq!(part.name, "building.1");
}
