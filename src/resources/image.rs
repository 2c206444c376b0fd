use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

// Global Image ID generator (uses u64 for cheap map lookups)
static NEXT_IMAGE_ID: AtomicU64 = AtomicU64::new(1);

/// Decoded pixel data, ready for upload by a renderer.
///
/// The format vocabulary comes from `wgpu`; no device is involved here.
#[derive(Debug, Clone)]
pub struct Image {
    pub id: u64,
    pub uuid: Uuid,
    pub name: String,

    pub width: u32,
    pub height: u32,
    pub format: wgpu::TextureFormat,

    /// CPU-side pixel data, tightly packed rows.
    pub data: Option<Vec<u8>>,
}

impl Image {
    #[must_use]
    pub fn new(
        name: &str,
        width: u32,
        height: u32,
        format: wgpu::TextureFormat,
        data: Option<Vec<u8>>,
    ) -> Self {
        Self {
            id: NEXT_IMAGE_ID.fetch_add(1, Ordering::Relaxed),
            uuid: Uuid::new_v4(),
            name: name.to_string(),
            width,
            height,
            format,
            data,
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }
}

impl PartialEq for Image {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
impl Eq for Image {}
