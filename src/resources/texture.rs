use uuid::Uuid;
use wgpu::{AddressMode, FilterMode};

use crate::resources::image::Image;

/// Sampler state attached to a texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureSampler {
    pub address_mode_u: AddressMode,
    pub address_mode_v: AddressMode,
    pub address_mode_w: AddressMode,
    pub mag_filter: FilterMode,
    pub min_filter: FilterMode,
    pub mipmap_filter: FilterMode,
}

impl Default for TextureSampler {
    fn default() -> Self {
        Self {
            address_mode_u: AddressMode::Repeat,
            address_mode_v: AddressMode::Repeat,
            address_mode_w: AddressMode::Repeat,
            mag_filter: FilterMode::Linear,
            min_filter: FilterMode::Linear,
            mipmap_filter: FilterMode::Linear,
        }
    }
}

/// A texture asset: an image plus sampling configuration.
#[derive(Debug, Clone)]
pub struct Texture {
    pub uuid: Uuid,
    pub name: String,

    pub image: Image,
    pub sampler: TextureSampler,
    pub generate_mipmaps: bool,
}

impl Texture {
    /// Wraps an existing [`Image`].
    #[must_use]
    pub fn new(name: &str, image: Image) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            name: name.to_string(),
            image,
            sampler: TextureSampler::default(),
            generate_mipmaps: false,
        }
    }

    /// Creates a 2D texture together with its backing image.
    #[must_use]
    pub fn new_2d(
        name: &str,
        width: u32,
        height: u32,
        data: Option<Vec<u8>>,
        format: wgpu::TextureFormat,
    ) -> Self {
        let image = Image::new(name, width, height, format, data);
        Self::new(name, image)
    }

    /// Creates a 1x1 solid-color texture (RGBA8, sRGB).
    #[must_use]
    pub fn new_solid_color(name: &str, color: [u8; 4]) -> Self {
        Self::new_2d(
            name,
            1,
            1,
            Some(color.to_vec()),
            wgpu::TextureFormat::Rgba8UnormSrgb,
        )
    }
}
