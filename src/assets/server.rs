use slotmap::new_key_type;
use std::sync::{Arc, OnceLock};
use tokio::runtime::Runtime;
use wgpu::TextureFormat;

use crate::assets::ColorSpace;
use crate::assets::io::AssetReaderVariant;
use crate::assets::storage::AssetStorage;
use crate::errors::{Result, StageError};
use crate::resources::geometry::Geometry;
use crate::resources::image::Image;
use crate::resources::material::StandardMaterial;
use crate::resources::texture::Texture;

pub(crate) fn asset_runtime() -> &'static Runtime {
    static RUNTIME: OnceLock<Runtime> = OnceLock::new();
    RUNTIME.get_or_init(|| Runtime::new().expect("Failed to create asset loader runtime"))
}

// Strongly-typed handles
new_key_type! {
    pub struct GeometryHandle;
    pub struct MaterialHandle;
    pub struct TextureHandle;
}

/// Typed asset storages shared between loads.
///
/// `AssetServer` is lightweight and can be cloned freely; clones share the
/// same underlying storages.
#[derive(Clone)]
pub struct AssetServer {
    pub geometries: Arc<AssetStorage<GeometryHandle, Geometry>>,
    pub materials: Arc<AssetStorage<MaterialHandle, StandardMaterial>>,
    pub textures: Arc<AssetStorage<TextureHandle, Texture>>,
}

impl Default for AssetServer {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetServer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            geometries: Arc::new(AssetStorage::new()),
            materials: Arc::new(AssetStorage::new()),
            textures: Arc::new(AssetStorage::new()),
        }
    }

    // ========================================================================
    // Synchronous convenience (native)
    // ========================================================================

    /// Blocking wrapper around [`AssetServer::load_texture_async`].
    pub fn load_texture(
        &self,
        reader: &AssetReaderVariant,
        uri: &str,
        color_space: ColorSpace,
    ) -> Result<TextureHandle> {
        asset_runtime().block_on(self.load_texture_async(reader, uri, color_space))
    }

    // ========================================================================
    // Async loading
    // ========================================================================

    /// Asynchronously loads a 2D texture through the given reader.
    ///
    /// Every call decodes and stores a fresh texture instance; there is no
    /// cross-call cache.
    pub async fn load_texture_async(
        &self,
        reader: &AssetReaderVariant,
        uri: &str,
        color_space: ColorSpace,
    ) -> Result<TextureHandle> {
        // 1. IO: read bytes
        let bytes = reader.read_bytes(uri).await?;

        // 2. Decode off the async thread
        let image = Self::decode_image_async(bytes, color_space, uri.to_string()).await?;

        // 3. Build and store the texture resource
        let texture = Texture::new(uri, image);
        let handle = self.textures.add(texture);
        Ok(handle)
    }

    // ========================================================================
    // Internal helpers
    // ========================================================================

    /// Offloads image decoding to the blocking thread pool.
    pub(crate) async fn decode_image_async(
        bytes: Vec<u8>,
        color_space: ColorSpace,
        label: String,
    ) -> Result<Image> {
        tokio::task::spawn_blocking(move || Self::decode_image_cpu(&bytes, color_space, &label))
            .await?
    }

    /// CPU image decoding logic.
    fn decode_image_cpu(bytes: &[u8], color_space: ColorSpace, label: &str) -> Result<Image> {
        use image::GenericImageView;

        let img = image::load_from_memory(bytes).map_err(|e| {
            StageError::ImageDecodeError(format!("Failed to decode image {label}: {e}"))
        })?;

        let (width, height) = img.dimensions();
        let rgba = img.to_rgba8();

        Ok(Image::new(
            label,
            width,
            height,
            match color_space {
                ColorSpace::Srgb => TextureFormat::Rgba8UnormSrgb,
                ColorSpace::Linear => TextureFormat::Rgba8Unorm,
            },
            Some(rgba.into_vec()),
        ))
    }
}
