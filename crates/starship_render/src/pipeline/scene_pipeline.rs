//! Scene pipeline for drawing tessellated batches
//!
//! One render pipeline exists per topology; all of them share the shader,
//! the uniform bind group and the vertex buffer. Draw ranges are replayed
//! in order with no depth test and no culling, so later primitives paint
//! over earlier ones exactly as they were emitted.

use wgpu::util::DeviceExt;

use super::types::{SceneUniforms, Vertex3D};
use crate::renderable::{RenderableGeometry, Topology};

/// Initial vertex buffer capacity, in vertices
const INITIAL_VERTEX_CAPACITY: usize = 1024;

/// Render pipelines and buffers for the scene pass
#[allow(dead_code)] // bind_group_layout must outlive the bind group
pub struct ScenePipeline {
    /// Point list pipeline
    points: wgpu::RenderPipeline,
    /// Line list pipeline
    lines: wgpu::RenderPipeline,
    /// Triangle list pipeline
    triangles: wgpu::RenderPipeline,
    /// Bind group layout for uniforms
    bind_group_layout: wgpu::BindGroupLayout,
    /// Uniform buffer
    uniform_buffer: wgpu::Buffer,
    /// Bind group for uniforms
    bind_group: wgpu::BindGroup,
    /// Vertex buffer (grown when a frame needs more room)
    vertex_buffer: wgpu::Buffer,
    vertex_capacity: usize,
    /// Draw ranges of the last upload
    commands: Vec<crate::renderable::DrawCommand>,
}

impl ScenePipeline {
    /// Create a new scene pipeline
    pub fn new(device: &wgpu::Device, surface_format: wgpu::TextureFormat) -> Self {
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Scene Bind Group Layout"),
            entries: &[
                // Uniforms
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Scene Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let shader_source = include_str!("../shaders/scene.wgsl");
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Scene Shader"),
            source: wgpu::ShaderSource::Wgsl(shader_source.into()),
        });

        let points = Self::create_pipeline(
            device, &pipeline_layout, &shader, surface_format, Topology::PointList,
        );
        let lines = Self::create_pipeline(
            device, &pipeline_layout, &shader, surface_format, Topology::LineList,
        );
        let triangles = Self::create_pipeline(
            device, &pipeline_layout, &shader, surface_format, Topology::TriangleList,
        );

        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Scene Uniform Buffer"),
            contents: bytemuck::bytes_of(&SceneUniforms::default()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Scene Bind Group"),
            layout: &bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                },
            ],
        });

        let vertex_buffer = Self::create_vertex_buffer(device, INITIAL_VERTEX_CAPACITY);

        Self {
            points,
            lines,
            triangles,
            bind_group_layout,
            uniform_buffer,
            bind_group,
            vertex_buffer,
            vertex_capacity: INITIAL_VERTEX_CAPACITY,
            commands: Vec::new(),
        }
    }

    fn create_pipeline(
        device: &wgpu::Device,
        layout: &wgpu::PipelineLayout,
        shader: &wgpu::ShaderModule,
        surface_format: wgpu::TextureFormat,
        topology: Topology,
    ) -> wgpu::RenderPipeline {
        let label = match topology {
            Topology::PointList => "Scene Points Pipeline",
            Topology::LineList => "Scene Lines Pipeline",
            Topology::TriangleList => "Scene Triangles Pipeline",
        };

        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(label),
            layout: Some(layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some("vs_main"),
                buffers: &[Vertex3D::buffer_layout()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: topology.to_wgpu(),
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        })
    }

    fn create_vertex_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Scene Vertex Buffer"),
            size: (capacity * std::mem::size_of::<Vertex3D>()) as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    /// Update uniforms
    pub fn update_uniforms(&self, queue: &wgpu::Queue, uniforms: &SceneUniforms) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(uniforms));
    }

    /// Upload a frame's geometry, growing the vertex buffer if needed
    pub fn upload_geometry(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        geometry: &RenderableGeometry,
    ) {
        let needed = geometry.vertex_count();
        if needed > self.vertex_capacity {
            let capacity = needed.next_power_of_two();
            log::debug!("Growing vertex buffer {} -> {} vertices", self.vertex_capacity, capacity);
            self.vertex_buffer = Self::create_vertex_buffer(device, capacity);
            self.vertex_capacity = capacity;
        }

        if needed > 0 {
            queue.write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&geometry.vertices));
        }
        self.commands.clear();
        self.commands.extend_from_slice(&geometry.commands);
    }

    fn pipeline_for(&self, topology: Topology) -> &wgpu::RenderPipeline {
        match topology {
            Topology::PointList => &self.points,
            Topology::LineList => &self.lines,
            Topology::TriangleList => &self.triangles,
        }
    }

    /// Clear the target and replay the uploaded draw ranges in order
    pub fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        clear_color: wgpu::Color,
    ) {
        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Scene Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear_color),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        render_pass.set_bind_group(0, &self.bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));

        for cmd in &self.commands {
            render_pass.set_pipeline(self.pipeline_for(cmd.topology));
            render_pass.draw(cmd.range(), 0..1);
        }
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_initial_capacity_fits_default_scene() {
        // 150 stars + ship tessellation stays under the starting buffer size
        use starship_core::{HullParams, Scene, ShipMotion, Starfield};
        use crate::renderable::RenderableGeometry;

        let scene = Scene::new(Starfield::seeded(150, 1), &HullParams::default());
        let geom = RenderableGeometry::from_batches(&scene.compose(&ShipMotion::default()));
        assert!(geom.vertex_count() <= super::INITIAL_VERTEX_CAPACITY);
    }

    #[test]
    fn test_shader_entry_points() {
        let source = include_str!("../shaders/scene.wgsl");
        assert!(source.contains("fn vs_main"));
        assert!(source.contains("fn fs_main"));
    }
}
