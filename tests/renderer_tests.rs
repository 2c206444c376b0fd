//! Renderer descriptions produced by the stage factory.

use stagekit::{Stage, Viewport};
use stagekit::renderer::ShadowMapMode;

#[test]
fn renderer_size_matches_the_viewport() {
    let stage = Stage::new();
    let renderer = stage.create_renderer(Viewport::new(1024.0, 768.0));

    let size = renderer.size();
    assert_eq!(size.width, 1024.0);
    assert_eq!(size.height, 768.0);
}

#[test]
fn renderer_resizes() {
    let stage = Stage::new();
    let mut renderer = stage.create_renderer(Viewport::new(1024.0, 768.0));

    renderer.set_size(Viewport::new(400.0, 300.0));
    let size = renderer.size();
    assert_eq!(size.width, 400.0);
    assert_eq!(size.height, 300.0);
}

#[test]
fn defaults_enable_antialiasing_alpha_and_soft_shadows() {
    let stage = Stage::new();
    let renderer = stage.create_renderer(Viewport::new(1280.0, 720.0));

    assert!(renderer.settings().anti_alias);
    assert!(renderer.settings().alpha);
    assert_eq!(renderer.msaa_samples(), 4);
    assert_eq!(renderer.shadow_map(), ShadowMapMode::PcfSoft);
}

#[test]
fn surface_configuration_composites_with_premultiplied_alpha() {
    let stage = Stage::new();
    let renderer = stage.create_renderer(Viewport::new(1280.0, 720.0));

    let config = renderer.surface_configuration(wgpu::TextureFormat::Bgra8UnormSrgb);
    assert_eq!(config.width, 1280);
    assert_eq!(config.height, 720);
    assert_eq!(config.alpha_mode, wgpu::CompositeAlphaMode::PreMultiplied);
    assert_eq!(config.present_mode, wgpu::PresentMode::AutoVsync);
    assert_eq!(config.format, wgpu::TextureFormat::Bgra8UnormSrgb);
}

#[test]
fn opaque_settings_disable_alpha_compositing() {
    use stagekit::RendererSettings;
    use stagekit::renderer::Renderer;

    let settings = RendererSettings {
        alpha: false,
        anti_alias: false,
        vsync: false,
        ..RendererSettings::default()
    };
    let renderer = Renderer::new(settings, Viewport::new(640.0, 480.0));

    assert_eq!(renderer.msaa_samples(), 1);

    let config = renderer.surface_configuration(wgpu::TextureFormat::Bgra8UnormSrgb);
    assert_eq!(config.alpha_mode, wgpu::CompositeAlphaMode::Opaque);
    assert_eq!(config.present_mode, wgpu::PresentMode::AutoNoVsync);
}
