//! Per-frame scene composition
//!
//! A [`Scene`] owns the immutable parts of the picture (starfield, ship model
//! batches) and composes them with the current [`ShipMotion`] into a draw
//! list by value. Nothing here touches global render state.

use starship_math::{mat4, Mat4, Vec3};

use crate::{ship, HullParams, ShapeBatch, ShipMotion, Starfield};

/// Immutable scene content
pub struct Scene {
    starfield: Starfield,
    ship: Vec<ShapeBatch>,
    /// Rotation about X applied to the ship before translating it, in degrees
    pitch_degrees: f32,
}

impl Scene {
    /// Build a scene from a starfield and the hull parameters
    pub fn new(starfield: Starfield, hull: &HullParams) -> Self {
        let ship = ship::ship_batches(hull);
        log::debug!(
            "Ship model: {} batches, {} vertices",
            ship.len(),
            ship.iter().map(ShapeBatch::vertex_count).sum::<usize>()
        );

        Self {
            starfield,
            ship,
            pitch_degrees: -90.0,
        }
    }

    /// Override the ship pitch
    pub fn with_pitch(mut self, pitch_degrees: f32) -> Self {
        self.pitch_degrees = pitch_degrees;
        self
    }

    /// The background starfield
    pub fn starfield(&self) -> &Starfield {
        &self.starfield
    }

    /// Ship batches in model space
    pub fn ship(&self) -> &[ShapeBatch] {
        &self.ship
    }

    /// Model matrix of the ship at a given depth offset
    pub fn ship_transform(&self, position: f64) -> Mat4 {
        mat4::mul(
            mat4::translation(Vec3::new(0.0, 0.0, position as f32)),
            mat4::rotation_x(self.pitch_degrees.to_radians()),
        )
    }

    /// Draw list for one frame: stars first, then the transformed ship
    pub fn compose(&self, motion: &ShipMotion) -> Vec<ShapeBatch> {
        let model = self.ship_transform(motion.position);

        let mut batches = Vec::with_capacity(self.ship.len() + 1);
        batches.push(self.starfield.batch());
        batches.extend(self.ship.iter().map(|b| b.transformed(model)));
        batches
    }
}
