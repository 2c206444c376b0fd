//! Renderer description.
//!
//! [`Renderer`] is a pure value: settings plus a render-target size, with a
//! [`wgpu::SurfaceConfiguration`] builder the host hands to its own surface.
//! No GPU device or swapchain is created here.

use crate::stage::Viewport;

/// Shadow map filtering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShadowMapMode {
    /// Unfiltered depth comparison.
    Basic,
    /// Percentage-closer filtering.
    Pcf,
    /// Percentage-closer filtering with a wider soft kernel.
    #[default]
    PcfSoft,
}

/// Global configuration for a renderer surface.
#[derive(Debug, Clone)]
pub struct RendererSettings {
    /// Hardware multi-sample anti-aliasing.
    pub anti_alias: bool,

    /// Alpha-channel compositing: the surface blends over whatever is
    /// behind it instead of being opaque.
    pub alpha: bool,

    /// Shadow map filtering.
    pub shadow_map: ShadowMapMode,

    /// Enable vertical synchronization.
    pub vsync: bool,

    /// GPU adapter selection preference.
    pub power_preference: wgpu::PowerPreference,

    /// Background clear color for the main render target.
    pub clear_color: wgpu::Color,
}

impl Default for RendererSettings {
    fn default() -> Self {
        Self {
            anti_alias: true,
            alpha: true,
            shadow_map: ShadowMapMode::PcfSoft,
            vsync: true,
            power_preference: wgpu::PowerPreference::HighPerformance,
            clear_color: wgpu::Color {
                r: 0.0,
                g: 0.0,
                b: 0.0,
                a: 0.0,
            },
        }
    }
}

impl RendererSettings {
    /// Effective MSAA sample count: 4 with anti-aliasing on, otherwise 1.
    #[inline]
    #[must_use]
    pub fn msaa_samples(&self) -> u32 {
        if self.anti_alias { 4 } else { 1 }
    }
}

/// A renderer description sized to a viewport.
#[derive(Debug, Clone)]
pub struct Renderer {
    settings: RendererSettings,
    width: f32,
    height: f32,
}

impl Renderer {
    #[must_use]
    pub fn new(settings: RendererSettings, viewport: Viewport) -> Self {
        Self {
            settings,
            width: viewport.width,
            height: viewport.height,
        }
    }

    /// The render-target size, always equal to the last viewport set.
    #[must_use]
    pub fn size(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    /// Resizes the render target.
    pub fn set_size(&mut self, viewport: Viewport) {
        self.width = viewport.width;
        self.height = viewport.height;
    }

    #[must_use]
    pub fn settings(&self) -> &RendererSettings {
        &self.settings
    }

    #[inline]
    #[must_use]
    pub fn msaa_samples(&self) -> u32 {
        self.settings.msaa_samples()
    }

    #[inline]
    #[must_use]
    pub fn shadow_map(&self) -> ShadowMapMode {
        self.settings.shadow_map
    }

    /// Builds the surface configuration for the host's `wgpu` surface.
    ///
    /// Pure value construction; the host remains responsible for calling
    /// `surface.configure` with it.
    #[must_use]
    pub fn surface_configuration(&self, format: wgpu::TextureFormat) -> wgpu::SurfaceConfiguration {
        wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: self.width as u32,
            height: self.height as u32,
            present_mode: if self.settings.vsync {
                wgpu::PresentMode::AutoVsync
            } else {
                wgpu::PresentMode::AutoNoVsync
            },
            desired_maximum_frame_latency: 2,
            alpha_mode: if self.settings.alpha {
                wgpu::CompositeAlphaMode::PreMultiplied
            } else {
                wgpu::CompositeAlphaMode::Opaque
            },
            view_formats: vec![],
        }
    }
}
