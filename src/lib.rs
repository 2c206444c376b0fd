//! Scene staging toolkit.
//!
//! `stagekit` populates a 3D scene for a host application: it builds an
//! orthographic camera framed on a viewport, a renderer description with
//! anti-aliasing and alpha compositing, a fixed three-light rig, and loads
//! textured area models from glTF assets.
//!
//! The entry point is [`Stage`], which exposes four independent operations:
//!
//! ```rust,ignore
//! use glam::Vec3;
//! use stagekit::{Stage, Viewport};
//!
//! let stage = Stage::new();
//! let camera = stage.create_camera(Viewport::new(1280.0, 720.0), Vec3::new(5.0, 5.0, 5.0));
//! let renderer = stage.create_renderer(Viewport::new(1280.0, 720.0));
//!
//! let mut scene = stagekit::Scene::new();
//! scene.add_camera(camera);
//! stage.light_rig().add_to(&mut scene);
//!
//! let group = stage.load_area_blocking("2", Vec3::ZERO)?;
//! scene.add_group(group);
//! ```

pub mod assets;
pub mod errors;
pub mod renderer;
pub mod resources;
pub mod scene;
pub mod stage;

pub use assets::{AssetServer, ColorSpace, GeometryHandle, MaterialHandle, TextureHandle};
pub use errors::{Result, StageError};
pub use renderer::{Renderer, RendererSettings, ShadowMapMode};
pub use resources::{Geometry, Image, Mesh, StandardMaterial, Texture};
pub use scene::{Camera, Group, Light, LightKind, ModelNode, Node, Scene, Transform};
pub use stage::{LightRig, MaterialRule, Stage, StageConfig, TextureRole, Viewport, material_rule};
