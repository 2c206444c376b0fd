//! glTF parsing for area models.
//!
//! Builds a detached [`ModelNode`] tree from glTF/GLB bytes. Geometry is
//! extracted per primitive; every authored material is replaced through the
//! caller-supplied resolver, element-wise for multi-primitive meshes. Every
//! node in the tree gets shadow casting and receiving enabled.

use base64::Engine;
use glam::{Quat, Vec3};

use crate::assets::io::AssetReaderVariant;
use crate::assets::server::AssetServer;
use crate::errors::{Result, StageError};
use crate::resources::geometry::Geometry;
use crate::resources::material::StandardMaterial;
use crate::resources::mesh::Mesh;
use crate::scene::group::ModelNode;

/// Maps an authored material name to its replacement.
pub(crate) type MaterialResolver<'a> = &'a (dyn Fn(Option<&str>) -> StandardMaterial + Sync);

/// Parses glTF/GLB bytes into a detached model tree.
///
/// External buffer URIs resolve through `reader`, relative to the same asset
/// root the model came from; `data:` URIs decode inline.
pub(crate) async fn load_model(
    bytes: &[u8],
    reader: &AssetReaderVariant,
    assets: &AssetServer,
    label: &str,
    resolve_material: MaterialResolver<'_>,
) -> Result<ModelNode> {
    let mut gltf = gltf::Gltf::from_slice(bytes)?;
    let blob = gltf.blob.take();
    let buffers = load_buffers(&gltf, blob, reader).await?;

    let builder = ModelBuilder {
        assets,
        buffers,
        resolve_material,
    };

    let mut root = ModelNode::new(label);
    root.cast_shadow = true;
    root.receive_shadow = true;

    let scene = gltf
        .default_scene()
        .or_else(|| gltf.scenes().next())
        .ok_or_else(|| StageError::GltfError("glTF contains no scene".to_string()))?;

    for node in scene.nodes() {
        root.children.push(builder.build_node(&node)?);
    }

    Ok(root)
}

async fn load_buffers(
    gltf: &gltf::Gltf,
    blob: Option<Vec<u8>>,
    reader: &AssetReaderVariant,
) -> Result<Vec<Vec<u8>>> {
    let mut blob = blob;
    let mut buffer_data = Vec::new();

    for buffer in gltf.buffers() {
        match buffer.source() {
            gltf::buffer::Source::Bin => {
                let data = blob
                    .take()
                    .ok_or_else(|| StageError::GltfError("Missing GLB binary chunk".to_string()))?;
                buffer_data.push(data);
            }
            gltf::buffer::Source::Uri(uri) => {
                if let Some(rest) = uri.strip_prefix("data:") {
                    buffer_data.push(decode_data_uri(rest)?);
                } else {
                    buffer_data.push(reader.read_bytes(uri).await?);
                }
            }
        }
    }

    Ok(buffer_data)
}

fn decode_data_uri(rest: &str) -> Result<Vec<u8>> {
    let (meta, payload) = rest
        .split_once(',')
        .ok_or_else(|| StageError::DataUriError("Malformed data URI".to_string()))?;
    if !meta.ends_with(";base64") {
        return Err(StageError::DataUriError(
            "Only base64 data URIs are supported".to_string(),
        ));
    }
    Ok(base64::engine::general_purpose::STANDARD.decode(payload)?)
}

struct ModelBuilder<'a> {
    assets: &'a AssetServer,
    buffers: Vec<Vec<u8>>,
    resolve_material: MaterialResolver<'a>,
}

impl ModelBuilder<'_> {
    fn build_node(&self, gltf_node: &gltf::Node) -> Result<ModelNode> {
        let name = gltf_node.name().unwrap_or("Node");
        let mut node = ModelNode::new(name);

        // Shadow flags apply to every traversed node, mesh or not.
        node.cast_shadow = true;
        node.receive_shadow = true;

        let (translation, rotation, scale) = gltf_node.transform().decomposed();
        node.transform.position = Vec3::from_array(translation);
        node.transform.rotation = Quat::from_array(rotation);
        node.transform.scale = Vec3::from_array(scale);

        if let Some(gltf_mesh) = gltf_node.mesh() {
            node.meshes = self.build_mesh_parts(&gltf_mesh)?;
        }

        for child in gltf_node.children() {
            node.children.push(self.build_node(&child)?);
        }

        Ok(node)
    }

    /// One part per primitive; each gets its material replaced independently.
    fn build_mesh_parts(&self, gltf_mesh: &gltf::Mesh) -> Result<Vec<Mesh>> {
        let mesh_name = gltf_mesh.name().unwrap_or("Mesh");
        let mut parts = Vec::new();

        for (i, primitive) in gltf_mesh.primitives().enumerate() {
            let part_name = if i == 0 {
                mesh_name.to_string()
            } else {
                format!("{mesh_name}.{i}")
            };

            let geometry = self.build_geometry(&primitive, &part_name)?;
            let material = (self.resolve_material)(primitive.material().name());

            let geometry = self.assets.geometries.add(geometry);
            let material = self.assets.materials.add(material);

            parts.push(Mesh::new(geometry, material).with_name(&part_name));
        }

        Ok(parts)
    }

    fn build_geometry(&self, primitive: &gltf::Primitive, name: &str) -> Result<Geometry> {
        let reader = primitive.reader(|buffer| self.buffers.get(buffer.index()).map(Vec::as_slice));

        let positions: Vec<[f32; 3]> = reader
            .read_positions()
            .ok_or_else(|| {
                StageError::GltfError(format!("Primitive {name} is missing POSITION data"))
            })?
            .collect();

        let mut geometry = Geometry::new(name);
        geometry.positions = positions;

        if let Some(normals) = reader.read_normals() {
            geometry.normals = normals.collect();
        }
        if let Some(uvs) = reader.read_tex_coords(0) {
            geometry.uvs = uvs.into_f32().collect();
        }
        if let Some(indices) = reader.read_indices() {
            geometry.indices = Some(indices.into_u32().collect());
        }

        Ok(geometry)
    }
}
