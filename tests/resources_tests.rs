//! Resource types and the shared asset storages.

use glam::{Affine3A, Quat, Vec3, Vec4};
use stagekit::{AssetServer, Geometry, StandardMaterial, Texture};

#[test]
fn storage_round_trips_handles() {
    let assets = AssetServer::new();

    let handle = assets.geometries.add(Geometry::new("tri"));
    assert!(assets.geometries.contains(handle));
    assert_eq!(assets.geometries.len(), 1);

    let geometry = assets.geometries.get(handle).expect("stored geometry");
    assert_eq!(geometry.name, "tri");
}

#[test]
fn storage_is_shared_between_clones_and_threads() {
    let assets = AssetServer::new();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let assets = assets.clone();
            std::thread::spawn(move || assets.materials.add(StandardMaterial::new(Vec4::splat(i as f32))))
        })
        .map(|t| t.join().unwrap())
        .collect();

    assert_eq!(assets.materials.len(), 4);
    for handle in handles {
        assert!(assets.materials.contains(handle));
    }
}

#[test]
fn material_defaults_to_flat_white() {
    let material = StandardMaterial::default();

    assert_eq!(material.color, Vec4::ONE);
    assert!(material.map.is_none());
    assert_eq!(material.roughness, 1.0);
    assert_eq!(material.metalness, 0.0);
}

#[test]
fn solid_color_texture_is_one_pixel() {
    let texture = Texture::new_solid_color("white", [255, 255, 255, 255]);

    assert_eq!(texture.image.width(), 1);
    assert_eq!(texture.image.height(), 1);
    assert_eq!(texture.image.data.as_deref(), Some(&[255u8, 255, 255, 255][..]));
    assert_eq!(texture.sampler.address_mode_u, wgpu::AddressMode::Repeat);
    assert_eq!(texture.sampler.mag_filter, wgpu::FilterMode::Linear);
}

#[test]
fn bounding_box_covers_all_positions() {
    let mut geometry = Geometry::new("quad");
    geometry.positions = vec![
        [-1.0, 0.0, -2.0],
        [1.0, 0.0, -2.0],
        [1.0, 3.0, 2.0],
        [-1.0, 3.0, 2.0],
    ];

    let bbox = geometry.compute_bounding_box().expect("non-empty geometry");
    assert_eq!(bbox.min, Vec3::new(-1.0, 0.0, -2.0));
    assert_eq!(bbox.max, Vec3::new(1.0, 3.0, 2.0));
    assert_eq!(bbox.center(), Vec3::new(0.0, 1.5, 0.0));
    assert_eq!(bbox.size(), Vec3::new(2.0, 3.0, 4.0));
}

#[test]
fn empty_geometry_has_no_bounding_box() {
    assert!(Geometry::new("empty").compute_bounding_box().is_none());
}

#[test]
fn transformed_bounding_box_stays_axis_aligned() {
    let mut geometry = Geometry::new("unit");
    geometry.positions = vec![[-1.0, -1.0, -1.0], [1.0, 1.0, 1.0]];
    let bbox = geometry.compute_bounding_box().unwrap();

    // 90 degrees around Y plus a translation: extents swap X/Z.
    let matrix = Affine3A::from_rotation_translation(
        Quat::from_rotation_y(std::f32::consts::FRAC_PI_2),
        Vec3::new(10.0, 0.0, 0.0),
    );
    let moved = bbox.transform(&matrix);

    assert!(moved.center().distance(Vec3::new(10.0, 0.0, 0.0)) < 1e-5);
    assert!(moved.size().distance(Vec3::splat(2.0)) < 1e-5);
}
