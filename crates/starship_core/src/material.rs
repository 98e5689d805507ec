//! Material type and the ship palette

/// A flat material with just a base color
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    /// Base color as RGBA (each component 0.0-1.0)
    pub base_color: [f32; 4],
}

impl Default for Material {
    fn default() -> Self {
        Self::STAR
    }
}

impl Material {
    /// Create a new material with the given RGBA color
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            base_color: [r, g, b, a],
        }
    }

    /// Create a new opaque material with the given RGB color
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Main hull body
    pub const HULL: Self = Self::from_rgb(0.5, 0.5, 0.6);

    /// Hull rim panels and the tail plates
    pub const PANEL: Self = Self::from_rgb(0.4, 0.4, 0.5);

    /// Decorative lines
    pub const DETAIL: Self = Self::from_rgb(0.3, 0.3, 0.4);

    /// Cockpit dome
    pub const COCKPIT: Self = Self::from_rgb(0.2, 0.2, 0.6);

    /// Wing triangles
    pub const WING: Self = Self::from_rgb(0.4, 0.4, 0.5);

    /// Background stars
    pub const STAR: Self = Self::from_rgb(1.0, 1.0, 1.0);
}
