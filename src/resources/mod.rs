//! Core resource definitions.
//!
//! Plain data structures describing renderable content, independent of any
//! GPU device:
//! - Image: decoded pixel data
//! - Texture: an image plus sampling configuration
//! - StandardMaterial: lit, non-shiny surface properties
//! - Geometry: vertex data
//! - Mesh: a geometry/material pairing

pub mod geometry;
pub mod image;
pub mod material;
pub mod mesh;
pub mod texture;

pub use geometry::{BoundingBox, Geometry};
pub use image::Image;
pub use material::StandardMaterial;
pub use mesh::Mesh;
pub use texture::{Texture, TextureSampler};
