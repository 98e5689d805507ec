//! Rendering pipeline components
//!
//! GPU data types and the scene pipeline that draws tessellated batches.

pub mod types;
pub mod scene_pipeline;

// Re-export types
pub use types::{Vertex3D, SceneUniforms};

// Re-export pipelines
pub use scene_pipeline::ScenePipeline;
