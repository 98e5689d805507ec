//! Renderable geometry - bridges shape batches to GPU buffers
//!
//! GPUs only draw point, line and triangle lists. This module tessellates
//! fans and quads into triangle lists and records one draw range per run of
//! equal topology, keeping the batches' emission order.

use starship_core::{Primitive, ShapeBatch};

use crate::pipeline::Vertex3D;

/// Primitive topology understood by the GPU pipelines
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Topology {
    PointList,
    LineList,
    TriangleList,
}

impl Topology {
    /// Topology a batch primitive is drawn with after tessellation
    pub fn for_primitive(primitive: Primitive) -> Self {
        match primitive {
            Primitive::Points => Topology::PointList,
            Primitive::Lines => Topology::LineList,
            Primitive::Triangles | Primitive::TriangleFan | Primitive::Quads => {
                Topology::TriangleList
            }
        }
    }

    /// Matching wgpu topology
    pub fn to_wgpu(self) -> wgpu::PrimitiveTopology {
        match self {
            Topology::PointList => wgpu::PrimitiveTopology::PointList,
            Topology::LineList => wgpu::PrimitiveTopology::LineList,
            Topology::TriangleList => wgpu::PrimitiveTopology::TriangleList,
        }
    }
}

/// A contiguous range of vertices drawn with one topology
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawCommand {
    pub topology: Topology,
    pub first_vertex: u32,
    pub vertex_count: u32,
}

impl DrawCommand {
    /// Vertex range for `RenderPass::draw`
    pub fn range(&self) -> std::ops::Range<u32> {
        self.first_vertex..self.first_vertex + self.vertex_count
    }
}

/// GPU-ready geometry collected from shape batches
#[derive(Clone, Debug, Default)]
pub struct RenderableGeometry {
    /// Tessellated vertices in draw order
    pub vertices: Vec<Vertex3D>,
    /// Draw ranges into `vertices`
    pub commands: Vec<DrawCommand>,
}

impl RenderableGeometry {
    /// Create an empty renderable geometry
    pub fn new() -> Self {
        Self::default()
    }

    /// Tessellate a list of batches
    pub fn from_batches(batches: &[ShapeBatch]) -> Self {
        let mut result = Self::new();
        for batch in batches {
            result.add_batch(batch);
        }
        result
    }

    /// Append one batch, merging with the previous draw range when the topology matches
    pub fn add_batch(&mut self, batch: &ShapeBatch) {
        let color = batch.material.base_color;
        let first = self.vertices.len();
        let v = &batch.vertices;

        match batch.primitive {
            Primitive::Points => self.push_all(v, color),
            // Trailing incomplete primitives are dropped
            Primitive::Lines => self.push_all(&v[..v.len() - v.len() % 2], color),
            Primitive::Triangles => self.push_all(&v[..v.len() - v.len() % 3], color),
            Primitive::TriangleFan => {
                for i in 1..v.len().saturating_sub(1) {
                    self.push_all(&[v[0], v[i], v[i + 1]], color);
                }
            }
            Primitive::Quads => {
                for q in v.chunks_exact(4) {
                    self.push_all(&[q[0], q[1], q[2], q[0], q[2], q[3]], color);
                }
            }
        }

        let added = (self.vertices.len() - first) as u32;
        if added == 0 {
            return;
        }

        let topology = Topology::for_primitive(batch.primitive);
        match self.commands.last_mut() {
            Some(last) if last.topology == topology => last.vertex_count += added,
            _ => self.commands.push(DrawCommand {
                topology,
                first_vertex: first as u32,
                vertex_count: added,
            }),
        }
    }

    fn push_all(&mut self, points: &[starship_core::Vec3], color: [f32; 4]) {
        self.vertices
            .extend(points.iter().map(|p| Vertex3D::new(p.to_array(), color)));
    }

    /// Clear all geometry
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.commands.clear();
    }

    /// Get the number of vertices
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of draw commands
    #[inline]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use starship_core::{ship, HullParams, Material, Scene, ShipMotion, Starfield, Vec3};

    #[test]
    fn test_empty() {
        let geom = RenderableGeometry::new();
        assert_eq!(geom.vertex_count(), 0);
        assert_eq!(geom.command_count(), 0);
    }

    #[test]
    fn test_hull_fan_tessellation() {
        let fan = ship::hull_fan(1.2, 1.2, 0.2, 50);
        let geom = RenderableGeometry::from_batches(&[fan.clone()]);

        // 50 triangles
        assert_eq!(geom.vertex_count(), 150);
        assert_eq!(geom.commands, vec![DrawCommand {
            topology: Topology::TriangleList,
            first_vertex: 0,
            vertex_count: 150,
        }]);

        // Every triangle starts at the hub
        for tri in geom.vertices.chunks_exact(3) {
            assert_eq!(tri[0].position, [0.0, 0.0, 0.0]);
        }
        assert_eq!(geom.vertices[1].position, fan.vertices[1].to_array());
        assert_eq!(geom.vertices[2].position, fan.vertices[2].to_array());
    }

    #[test]
    fn test_quad_tessellation() {
        let panels = ship::hull_panels(1.2, 1.2, 0.2);
        let geom = RenderableGeometry::from_batches(&[panels.clone()]);
        assert_eq!(geom.vertex_count(), 36);

        let q = &panels.vertices[0..4];
        let expected: Vec<[f32; 3]> = [q[0], q[1], q[2], q[0], q[2], q[3]]
            .iter()
            .map(|v| v.to_array())
            .collect();
        let actual: Vec<[f32; 3]> = geom.vertices[0..6].iter().map(|v| v.position).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_partial_primitives_dropped() {
        let lines = ShapeBatch::new(Primitive::Lines, Material::DETAIL, vec![Vec3::ZERO; 5]);
        let tris = ShapeBatch::new(Primitive::Triangles, Material::WING, vec![Vec3::ZERO; 4]);
        let fan = ShapeBatch::new(Primitive::TriangleFan, Material::HULL, vec![Vec3::ZERO; 2]);

        assert_eq!(RenderableGeometry::from_batches(&[lines]).vertex_count(), 4);
        assert_eq!(RenderableGeometry::from_batches(&[tris]).vertex_count(), 3);

        let geom = RenderableGeometry::from_batches(&[fan]);
        assert_eq!(geom.vertex_count(), 0);
        assert_eq!(geom.command_count(), 0);
    }

    #[test]
    fn test_colors_follow_material() {
        let dome = ship::cockpit();
        let geom = RenderableGeometry::from_batches(&[dome]);
        assert!(geom.vertices.iter().all(|v| v.color == Material::COCKPIT.base_color));
    }

    #[test]
    fn test_adjacent_topologies_merge() {
        // Hull fan + panels are both triangle lists
        let geom = RenderableGeometry::from_batches(&ship::hull(&HullParams::default()));
        assert_eq!(geom.command_count(), 1);
        assert_eq!(geom.vertex_count(), 150 + 36);
    }

    #[test]
    fn test_scene_commands_keep_order() {
        let scene = Scene::new(Starfield::seeded(150, 3), &HullParams::default());
        let geom = RenderableGeometry::from_batches(&scene.compose(&ShipMotion::default()));

        let topologies: Vec<_> = geom.commands.iter().map(|c| c.topology).collect();
        assert_eq!(
            topologies,
            vec![
                Topology::PointList,    // stars
                Topology::TriangleList, // hull fan + panels + wings
                Topology::LineList,     // wing lines
                Topology::TriangleList, // cockpit
                Topology::LineList,     // details
                Topology::TriangleList, // tail plates
                Topology::LineList,     // tail stripes
            ]
        );

        // Ranges are contiguous and cover every vertex
        let mut next = 0;
        for cmd in &geom.commands {
            assert_eq!(cmd.first_vertex, next);
            next = cmd.range().end;
        }
        assert_eq!(next as usize, geom.vertex_count());
        assert_eq!(geom.commands[0].vertex_count, 150);
    }

    #[test]
    fn test_topology_mapping() {
        assert_eq!(Topology::for_primitive(Primitive::Quads), Topology::TriangleList);
        assert_eq!(Topology::PointList.to_wgpu(), wgpu::PrimitiveTopology::PointList);
        assert_eq!(Topology::LineList.to_wgpu(), wgpu::PrimitiveTopology::LineList);
    }
}
