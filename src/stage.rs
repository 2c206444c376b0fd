//! The scene staging factory.
//!
//! [`Stage`] exposes four independent construction operations sharing no
//! mutable state beyond an append-only [`AssetServer`]:
//!
//! - [`Stage::create_camera`]: orthographic camera framed on a viewport
//! - [`Stage::create_renderer`]: renderer description for that viewport
//! - [`Stage::light_rig`]: the fixed three-light rig, returned as a value
//!   for the caller to apply
//! - [`Stage::load_area`]: async loading of a textured area model
//!
//! The material-substitution policy applied during loading is the pure
//! function [`material_rule`], kept free of traversal side effects.

use glam::{Vec3, Vec4};

use crate::assets::io::AssetReaderVariant;
use crate::assets::server::asset_runtime;
use crate::assets::{AssetServer, ColorSpace, TextureHandle, loaders};
use crate::errors::Result;
use crate::renderer::{Renderer, RendererSettings};
use crate::resources::material::StandardMaterial;
use crate::scene::{
    Camera, Group, Light, NodeKey, Scene, ShadowCamera, ShadowConfig, Transform,
};

/// Full height of the orthographic camera's view volume, in world units.
pub const FRUSTUM_SIZE: f32 = 10.0;

/// Uniform scale applied to every loaded area model.
pub const MODEL_SCALE: f32 = 0.075;

const CAMERA_NEAR: f32 = 0.1;
const CAMERA_FAR: f32 = 1000.0;

/// 2D render-target dimension.
///
/// Zero-height viewports are not guarded: the aspect ratio becomes
/// non-finite and downstream projection math degenerates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }
}

/// Asset root and texture file names for area loading.
///
/// The defaults reproduce the fixed asset layout the stage was designed
/// around; only the root usually needs overriding.
#[derive(Debug, Clone)]
pub struct StageConfig {
    /// Directory or URL the model and its textures live under.
    pub asset_root: String,
    pub base_texture: String,
    pub floor_texture: String,
    pub unchange_texture: String,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            asset_root: "./model".to_string(),
            base_texture: "basetexture.jpg".to_string(),
            floor_texture: "floortexture.jpg".to_string(),
            unchange_texture: "unchangetexture.jpg".to_string(),
        }
    }
}

// ============================================================================
// Material policy
// ============================================================================

/// Which palette texture a replacement material uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureRole {
    Base,
    Floor,
    Unchanged,
}

/// Outcome of the material-substitution policy for one authored material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialRule {
    pub texture: TextureRole,
    /// Explicit color override; `None` keeps the material default.
    pub color: Option<Vec4>,
}

/// The per-material substitution policy, keyed on the authored name.
///
/// Pure function: the traversal side effects (shadow flags) are applied
/// separately during loading.
#[must_use]
pub fn material_rule(name: Option<&str>) -> MaterialRule {
    match name {
        Some("lambert1") => MaterialRule {
            texture: TextureRole::Floor,
            color: Some(Vec4::ONE),
        },
        Some("lambert2") => MaterialRule {
            texture: TextureRole::Unchanged,
            color: None,
        },
        _ => MaterialRule {
            texture: TextureRole::Base,
            color: Some(Vec4::ONE),
        },
    }
}

/// The three fixed textures one `load_area` call works from.
///
/// Each call loads its own instances; palettes are never shared between
/// in-flight loads.
#[derive(Debug, Clone, Copy)]
pub struct TexturePalette {
    pub base: TextureHandle,
    pub floor: TextureHandle,
    pub unchanged: TextureHandle,
}

impl TexturePalette {
    #[must_use]
    pub fn select(&self, role: TextureRole) -> TextureHandle {
        match role {
            TextureRole::Base => self.base,
            TextureRole::Floor => self.floor,
            TextureRole::Unchanged => self.unchanged,
        }
    }
}

impl MaterialRule {
    /// Builds the replacement material from this rule and a palette.
    #[must_use]
    pub fn into_material(self, palette: &TexturePalette) -> StandardMaterial {
        let material = match self.color {
            Some(color) => StandardMaterial::new(color),
            None => StandardMaterial::default(),
        };
        material.with_map(palette.select(self.texture))
    }
}

// ============================================================================
// Light rig
// ============================================================================

/// The fixed three-light rig: ambient fill, shadow-casting key, and a
/// non-shadowing fill from the opposite side.
///
/// Returned as a value; the caller decides when and where to insert the
/// lights, either via [`LightRig::add_to`] or one by one through
/// [`Scene::add_light`].
#[derive(Debug, Clone)]
pub struct LightRig {
    pub ambient: Light,
    pub key: Light,
    pub fill: Light,
}

impl LightRig {
    /// Appends all three lights to `scene`.
    ///
    /// Returns the node keys in `[ambient, key, fill]` order.
    pub fn add_to(self, scene: &mut Scene) -> [NodeKey; 3] {
        [
            scene.add_light(self.ambient),
            scene.add_light(self.key),
            scene.add_light(self.fill),
        ]
    }
}

// ============================================================================
// Stage
// ============================================================================

/// The scene staging factory.
#[derive(Clone)]
pub struct Stage {
    config: StageConfig,
    assets: AssetServer,
}

impl Default for Stage {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(StageConfig::default())
    }

    #[must_use]
    pub fn with_config(config: StageConfig) -> Self {
        Self {
            config,
            assets: AssetServer::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &StageConfig {
        &self.config
    }

    /// The asset server the loading operations store into.
    #[must_use]
    pub fn assets(&self) -> &AssetServer {
        &self.assets
    }

    /// Builds an orthographic camera framed on the viewport.
    ///
    /// View-volume height is fixed at [`FRUSTUM_SIZE`]; the width scales with
    /// the viewport's aspect ratio. Near/far are 0.1 and 1000. The camera is
    /// placed at `position`, looking at the world origin.
    #[must_use]
    pub fn create_camera(&self, viewport: Viewport, position: Vec3) -> Camera {
        let mut camera = Camera::new_orthographic(
            FRUSTUM_SIZE / 2.0,
            viewport.aspect(),
            CAMERA_NEAR,
            CAMERA_FAR,
        );

        let mut transform = Transform::new();
        transform.position = position;
        transform.look_at(Vec3::ZERO, Vec3::Y);
        transform.update_local_matrix();
        camera.update_view_projection(transform.local_matrix());

        camera
    }

    /// Builds a renderer description sized to the viewport.
    ///
    /// Anti-aliasing and alpha compositing on, soft shadow mapping enabled.
    #[must_use]
    pub fn create_renderer(&self, viewport: Viewport) -> Renderer {
        Renderer::new(RendererSettings::default(), viewport)
    }

    /// Builds the fixed three-light rig.
    #[must_use]
    pub fn light_rig(&self) -> LightRig {
        // 0xcccccc
        let ambient = Light::new_ambient(Vec3::splat(204.0 / 255.0), 0.2);

        let mut key = Light::new_directional(Vec3::ONE, 1.25)
            .at(Vec3::new(-1.25, 5.5, 5.0))
            .aimed_at(Vec3::ZERO);
        key.cast_shadows = true;
        key.shadow = Some(ShadowConfig {
            map_size: 2048,
            camera: ShadowCamera {
                left: -12.0,
                right: 12.0,
                top: 12.0,
                bottom: -12.0,
                near: 1.0,
                far: 30.0,
            },
            bias: 0.005,
        });

        let mut fill = Light::new_directional(Vec3::ONE, 0.35)
            .at(Vec3::new(2.5, 5.5, -2.5))
            .aimed_at(Vec3::ZERO);
        fill.cast_shadows = false;
        fill.shadow = None;

        LightRig { ambient, key, fill }
    }

    /// Loads the area model `Area_<kind>.glb`, replaces its materials per
    /// [`material_rule`], and positions and scales the result.
    ///
    /// Single-shot: resolves or fails exactly once, with the underlying
    /// loader error propagated untransformed after one diagnostic log line.
    /// No retry, no timeout, no progress reporting. Concurrent calls are
    /// independent; each allocates its own reader and texture instances.
    pub async fn load_area(&self, kind: &str, position: Vec3) -> Result<Group> {
        match self.load_area_inner(kind, position).await {
            Ok(group) => Ok(group),
            Err(err) => {
                log::error!("Failed to load area model {kind:?}: {err}");
                Err(err)
            }
        }
    }

    /// Blocking wrapper around [`Stage::load_area`].
    pub fn load_area_blocking(&self, kind: &str, position: Vec3) -> Result<Group> {
        asset_runtime().block_on(self.load_area(kind, position))
    }

    async fn load_area_inner(&self, kind: &str, position: Vec3) -> Result<Group> {
        let reader = AssetReaderVariant::from_source(&self.config.asset_root)?;

        // The palette loads concurrently, fresh instances for this call.
        let (base, floor, unchanged) = futures::future::try_join3(
            self.assets
                .load_texture_async(&reader, &self.config.base_texture, ColorSpace::Srgb),
            self.assets
                .load_texture_async(&reader, &self.config.floor_texture, ColorSpace::Srgb),
            self.assets
                .load_texture_async(&reader, &self.config.unchange_texture, ColorSpace::Srgb),
        )
        .await?;
        let palette = TexturePalette {
            base,
            floor,
            unchanged,
        };

        // `kind` is interpolated verbatim; callers own any sanitization.
        let label = format!("Area_{kind}");
        let uri = format!("{label}.glb");
        let bytes = reader.read_bytes(&uri).await?;

        let resolve = |name: Option<&str>| material_rule(name).into_material(&palette);
        let mut root =
            loaders::gltf::load_model(&bytes, &reader, &self.assets, &label, &resolve).await?;

        root.transform.position = position;
        root.transform.scale = Vec3::splat(MODEL_SCALE);

        Ok(Group {
            kind: kind.to_string(),
            root,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_lambert1_is_floor_with_white() {
        let rule = material_rule(Some("lambert1"));
        assert_eq!(rule.texture, TextureRole::Floor);
        assert_eq!(rule.color, Some(Vec4::ONE));
    }

    #[test]
    fn rule_lambert2_is_unchanged_without_override() {
        let rule = material_rule(Some("lambert2"));
        assert_eq!(rule.texture, TextureRole::Unchanged);
        assert_eq!(rule.color, None);
    }

    #[test]
    fn rule_other_names_fall_back_to_base() {
        for name in [Some("lambert3"), Some(""), Some("phong1"), None] {
            let rule = material_rule(name);
            assert_eq!(rule.texture, TextureRole::Base);
            assert_eq!(rule.color, Some(Vec4::ONE));
        }
    }

    #[test]
    fn rule_matching_is_exact() {
        assert_eq!(material_rule(Some("Lambert1")).texture, TextureRole::Base);
        assert_eq!(material_rule(Some("lambert1 ")).texture, TextureRole::Base);
    }
}
