//! Asset services.
//!
//! - [`AssetStorage`]: thread-safe, handle-based storage for shared resources
//! - [`AssetServer`]: typed storages plus async texture loading
//! - [`io`]: byte readers for local files and HTTP roots
//! - [`loaders`]: glTF parsing for area models

pub mod io;
pub mod loaders;
pub mod server;
pub mod storage;

pub use io::AssetReaderVariant;
pub use server::{AssetServer, GeometryHandle, MaterialHandle, TextureHandle};
pub use storage::AssetStorage;

/// Color space an image should be sampled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpace {
    Srgb,
    Linear,
}
