//! Primitive batches
//!
//! A [`ShapeBatch`] is the value form of an immediate-mode `begin`/`end`
//! block: one primitive type, one color and the vertices in emission order.
//! Batches carry no GPU state; the renderer tessellates them.

use starship_math::{mat4, Mat4, Vec3};

use crate::Material;

/// How a batch's vertices are assembled into primitives
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Primitive {
    /// Every vertex is a point
    Points,
    /// Every pair of vertices is a segment
    Lines,
    /// Every triple of vertices is a triangle
    Triangles,
    /// First vertex is the hub, each following pair closes a triangle with it
    TriangleFan,
    /// Every four vertices are a quad
    Quads,
}

impl Primitive {
    /// Number of complete primitives formed by `vertex_count` vertices
    pub fn primitive_count(self, vertex_count: usize) -> usize {
        match self {
            Primitive::Points => vertex_count,
            Primitive::Lines => vertex_count / 2,
            Primitive::Triangles => vertex_count / 3,
            Primitive::TriangleFan => vertex_count.saturating_sub(2),
            Primitive::Quads => vertex_count / 4,
        }
    }
}

/// A list of vertices drawn with a single primitive type and color
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeBatch {
    pub primitive: Primitive,
    pub material: Material,
    pub vertices: Vec<Vec3>,
}

impl ShapeBatch {
    /// Create a new batch
    pub fn new(primitive: Primitive, material: Material, vertices: Vec<Vec3>) -> Self {
        Self {
            primitive,
            material,
            vertices,
        }
    }

    /// Get the number of vertices
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of complete primitives
    #[inline]
    pub fn primitive_count(&self) -> usize {
        self.primitive.primitive_count(self.vertices.len())
    }

    /// Return a copy with every vertex transformed by `m`
    pub fn transformed(&self, m: Mat4) -> Self {
        Self {
            primitive: self.primitive,
            material: self.material,
            vertices: self
                .vertices
                .iter()
                .map(|v| mat4::transform_point(m, *v))
                .collect(),
        }
    }
}
