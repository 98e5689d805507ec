//! Starship Rendering Library
//!
//! This crate provides the wgpu-based pipeline that draws the scene's
//! primitive batches.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`renderable::RenderableGeometry`] - Tessellates batches into GPU draw ranges
//! - [`pipeline::ScenePipeline`] - Point, line and triangle pipelines drawn in order

pub mod context;
pub mod pipeline;
pub mod renderable;

// Re-export core types for convenience
pub use starship_core::{Material, Primitive, ShapeBatch, Vec3};

pub use context::{ContextError, RenderContext};
pub use renderable::{DrawCommand, RenderableGeometry, Topology};
