use glam::Vec3;
use uuid::Uuid;

/// Orthographic frustum a shadow-casting light renders its depth map with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowCamera {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for ShadowCamera {
    fn default() -> Self {
        Self {
            left: -5.0,
            right: 5.0,
            top: 5.0,
            bottom: -5.0,
            near: 0.5,
            far: 500.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShadowConfig {
    pub map_size: u32,
    pub camera: ShadowCamera,
    pub bias: f32,
}

impl Default for ShadowConfig {
    fn default() -> Self {
        Self {
            map_size: 1024,
            camera: ShadowCamera::default(),
            bias: 0.005,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightKind {
    /// Uniform fill, no position or direction.
    Ambient,
    /// Parallel rays along `position -> target`.
    Directional,
}

/// Light component.
///
/// Carries its own placement: [`Scene::add_light`](crate::scene::Scene::add_light)
/// positions the owning node at `position` and aims it at `target`.
#[derive(Debug, Clone)]
pub struct Light {
    pub uuid: Uuid,
    pub kind: LightKind,
    pub color: Vec3,
    pub intensity: f32,

    pub position: Vec3,
    pub target: Vec3,

    pub cast_shadows: bool,
    pub shadow: Option<ShadowConfig>,
}

impl Light {
    #[must_use]
    pub fn new_ambient(color: Vec3, intensity: f32) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            kind: LightKind::Ambient,
            color,
            intensity,
            position: Vec3::ZERO,
            target: Vec3::ZERO,
            cast_shadows: false,
            shadow: None,
        }
    }

    #[must_use]
    pub fn new_directional(color: Vec3, intensity: f32) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            kind: LightKind::Directional,
            color,
            intensity,
            position: Vec3::ZERO,
            target: Vec3::ZERO,
            cast_shadows: false,
            shadow: Some(ShadowConfig::default()),
        }
    }

    #[must_use]
    pub fn at(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    #[must_use]
    pub fn aimed_at(mut self, target: Vec3) -> Self {
        self.target = target;
        self
    }

    /// Normalized direction of travel of the light, for directional lights.
    #[must_use]
    pub fn direction(&self) -> Option<Vec3> {
        match self.kind {
            LightKind::Directional => Some((self.target - self.position).normalize_or_zero()),
            LightKind::Ambient => None,
        }
    }
}
