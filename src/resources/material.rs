use glam::Vec4;
use uuid::Uuid;

use crate::assets::TextureHandle;

/// A lit, non-shiny surface description.
///
/// Every mesh part in a loaded area model ends up with exactly one of these;
/// the original authored materials are replaced wholesale during loading.
#[derive(Debug, Clone)]
pub struct StandardMaterial {
    pub uuid: Uuid,
    pub name: String,

    /// Base color, multiplied with the color map.
    pub color: Vec4,
    /// The color map.
    pub map: Option<TextureHandle>,
    /// Roughness factor.
    pub roughness: f32,
    /// Metalness factor.
    pub metalness: f32,
}

impl StandardMaterial {
    #[must_use]
    pub fn new(color: Vec4) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            name: "StandardMaterial".to_string(),
            color,
            map: None,
            roughness: 1.0,
            metalness: 0.0,
        }
    }

    #[must_use]
    pub fn with_map(mut self, map: TextureHandle) -> Self {
        self.map = Some(map);
        self
    }
}

impl Default for StandardMaterial {
    fn default() -> Self {
        Self::new(Vec4::ONE)
    }
}
