//! Core types for the Starship demo
//!
//! This crate authors the scene without touching the GPU:
//!
//! - [`Material`] - Flat colors of the ship palette
//! - [`Primitive`] / [`ShapeBatch`] - One primitive type, one color, a vertex list
//! - [`ship`] - Shape emitters for hull, wings, cockpit, details and tail
//! - [`Starfield`] - Background points generated once at startup
//! - [`ShipMotion`] - Forward cruise followed by an unbounded dash
//! - [`Scene`] - Composes stars and ship into a per-frame draw list

mod material;
mod primitive;
pub mod ship;
mod starfield;
mod motion;
mod scene;

pub use material::Material;
pub use primitive::{Primitive, ShapeBatch};
pub use ship::{HullParams, ship_batches};
pub use starfield::{Starfield, StarBounds};
pub use motion::{MotionParams, ShipMotion};
pub use scene::Scene;

// Re-export commonly used math types for convenience
pub use starship_math::{Vec3, Mat4};
