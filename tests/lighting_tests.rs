//! The fixed three-light rig.

use glam::Vec3;
use stagekit::scene::LightKind;
use stagekit::{Scene, Stage};

#[test]
fn rig_has_ambient_key_and_fill() {
    let rig = Stage::new().light_rig();

    assert_eq!(rig.ambient.kind, LightKind::Ambient);
    assert_eq!(rig.key.kind, LightKind::Directional);
    assert_eq!(rig.fill.kind, LightKind::Directional);
}

#[test]
fn ambient_is_dim_neutral_grey() {
    let rig = Stage::new().light_rig();

    assert!(rig.ambient.color.distance(Vec3::splat(204.0 / 255.0)) < 1e-6);
    assert_eq!(rig.ambient.intensity, 0.2);
    assert!(!rig.ambient.cast_shadows);
}

#[test]
fn key_light_casts_shadows_over_a_wide_frustum() {
    let rig = Stage::new().light_rig();

    assert_eq!(rig.key.color, Vec3::ONE);
    assert_eq!(rig.key.intensity, 1.25);
    assert_eq!(rig.key.position, Vec3::new(-1.25, 5.5, 5.0));
    assert_eq!(rig.key.target, Vec3::ZERO);
    assert!(rig.key.cast_shadows);

    let shadow = rig.key.shadow.as_ref().expect("key light has a shadow map");
    assert_eq!(shadow.map_size, 2048);
    assert_eq!(shadow.camera.left, -12.0);
    assert_eq!(shadow.camera.right, 12.0);
    assert_eq!(shadow.camera.top, 12.0);
    assert_eq!(shadow.camera.bottom, -12.0);
    assert_eq!(shadow.camera.near, 1.0);
    assert_eq!(shadow.camera.far, 30.0);
}

#[test]
fn fill_light_never_casts_shadows() {
    let rig = Stage::new().light_rig();

    assert_eq!(rig.fill.color, Vec3::ONE);
    assert_eq!(rig.fill.intensity, 0.35);
    assert_eq!(rig.fill.position, Vec3::new(2.5, 5.5, -2.5));
    assert!(!rig.fill.cast_shadows);
    assert!(rig.fill.shadow.is_none());
}

#[test]
fn add_to_inserts_three_light_nodes() {
    let mut scene = Scene::new();
    let keys = Stage::new().light_rig().add_to(&mut scene);

    assert_eq!(scene.iter_lights().count(), 3);
    assert_eq!(
        scene
            .iter_lights()
            .filter(|l| l.kind == LightKind::Directional)
            .count(),
        2
    );

    // Nodes sit at the lights' positions.
    let key_node = scene.get_node(keys[1]).expect("key light node");
    assert_eq!(key_node.transform.position, Vec3::new(-1.25, 5.5, 5.0));
    let fill_node = scene.get_node(keys[2]).expect("fill light node");
    assert_eq!(fill_node.transform.position, Vec3::new(2.5, 5.5, -2.5));
}

#[test]
fn rig_application_is_caller_controlled() {
    // Building a rig alone touches no scene.
    let rig = Stage::new().light_rig();

    let mut scene = Scene::new();
    assert_eq!(scene.iter_lights().count(), 0);

    // Lights can also be applied one at a time.
    scene.add_light(rig.key.clone());
    assert_eq!(scene.iter_lights().count(), 1);
}
