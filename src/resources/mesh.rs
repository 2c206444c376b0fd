use crate::assets::{GeometryHandle, MaterialHandle};

/// One renderable part: a geometry paired with a resolved material.
///
/// A model node that was authored with several materials carries several
/// `Mesh` parts, mapped element-wise.
#[derive(Debug, Clone)]
pub struct Mesh {
    pub name: String,

    // === Resource references ===
    pub geometry: GeometryHandle,
    pub material: MaterialHandle,

    // === Instance settings ===
    pub visible: bool,
}

impl Mesh {
    #[must_use]
    pub fn new(geometry: GeometryHandle, material: MaterialHandle) -> Self {
        Self {
            name: "Mesh".to_string(),
            geometry,
            material,
            visible: true,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }
}
