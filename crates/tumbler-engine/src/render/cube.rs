use bytemuck::{Pod, Zeroable};
use wgpu::naga::ShaderStage;
use wgpu::util::DeviceExt;

use crate::device::{DEPTH_FORMAT, checked_create};
use crate::math::Mat4;

use super::ctx::{RenderCtx, RenderTarget};
use super::error::RenderError;
use super::mesh::{CUBE_VERTICES, Vertex};
use super::shader;

/// Fixed background color behind the mesh.
const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.06,
    g: 0.08,
    b: 0.12,
    a: 1.0,
};

/// Constant-buffer contents: one model matrix, rewritten every frame.
///
/// std140 mat4 is column-major; conversion transposes the row-major CPU
/// matrix. Must match `ModelTransform` in the vertex shader.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct ModelUniform {
    model: [[f32; 4]; 4],
}

impl From<&Mat4> for ModelUniform {
    fn from(m: &Mat4) -> Self {
        Self {
            model: m.transposed().m,
        }
    }
}

/// Cube renderer: shader pipeline, constant buffer, and the immutable
/// vertex buffer.
///
/// Resources are created by `compile_shaders` + `generate_buffers` in that
/// order and dropped by `release` in reverse; each field is an `Option` so
/// teardown tolerates partial initialization and repeated calls.
#[derive(Default)]
pub struct CubeRenderer {
    pipeline: Option<wgpu::RenderPipeline>,
    model_buffer: Option<wgpu::Buffer>,
    bind_group: Option<wgpu::BindGroup>,

    vertex_buffer: Option<wgpu::Buffer>,
    vertex_count: u32,
}

impl CubeRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compiles both shader stages and assembles the render pipeline and
    /// constant buffer.
    ///
    /// Each step short-circuits with its own [`RenderError`] kind;
    /// intermediate compiled modules are plain values released by drop on
    /// the error path.
    pub fn compile_shaders(
        &mut self,
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
    ) -> Result<(), RenderError> {
        let vertex_ir = shader::compile(ShaderStage::Vertex, shader::VERTEX_SOURCE)?;
        shader::verify_vertex_inputs(&vertex_ir)?;
        let fragment_ir = shader::compile(ShaderStage::Fragment, shader::FRAGMENT_SOURCE)?;

        // The validated IR goes to the device as-is; the driver-facing
        // modules cannot diverge from what was checked above.
        let vertex_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("tumbler cube vs"),
            source: wgpu::ShaderSource::Naga(std::borrow::Cow::Owned(vertex_ir)),
        });
        let fragment_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("tumbler cube fs"),
            source: wgpu::ShaderSource::Naga(std::borrow::Cow::Owned(fragment_ir)),
        });

        let bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("tumbler model bgl"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: Some(
                            std::num::NonZeroU64::new(
                                std::mem::size_of::<ModelUniform>() as u64
                            )
                            .unwrap(),
                        ),
                    },
                    count: None,
                }],
            });

        let model_buffer = checked_create(device, || {
            device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("tumbler model ubo"),
                size: std::mem::size_of::<ModelUniform>() as u64,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            })
        })
        .map_err(RenderError::ConstantBuffer)?;

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("tumbler cube pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            immediate_size: 0,
        });

        let pipeline = checked_create(device, || {
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("tumbler cube pipeline"),
                layout: Some(&pipeline_layout),

                vertex: wgpu::VertexState {
                    module: &vertex_module,
                    entry_point: Some("main"),
                    compilation_options: Default::default(),
                    buffers: &[Vertex::layout()],
                },

                fragment: Some(wgpu::FragmentState {
                    module: &fragment_module,
                    entry_point: Some("main"),
                    compilation_options: Default::default(),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: surface_format,
                        blend: None,
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),

                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: Some(wgpu::Face::Back),
                    polygon_mode: wgpu::PolygonMode::Fill,
                    unclipped_depth: false,
                    conservative: false,
                },

                depth_stencil: Some(wgpu::DepthStencilState {
                    format: DEPTH_FORMAT,
                    depth_write_enabled: true,
                    depth_compare: wgpu::CompareFunction::Less,
                    stencil: wgpu::StencilState::default(),
                    bias: wgpu::DepthBiasState::default(),
                }),

                multisample: wgpu::MultisampleState::default(),
                multiview_mask: None,
                cache: None,
            })
        })
        .map_err(RenderError::Pipeline)?;

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("tumbler model bind group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: model_buffer.as_entire_binding(),
            }],
        });

        self.pipeline = Some(pipeline);
        self.model_buffer = Some(model_buffer);
        self.bind_group = Some(bind_group);

        log::info!("shader pipeline ready ({surface_format:?} + {DEPTH_FORMAT:?})");
        Ok(())
    }

    /// Uploads the fixed cube geometry into an immutable vertex buffer and
    /// records the vertex count for the draw call.
    pub fn generate_buffers(&mut self, device: &wgpu::Device) -> Result<(), RenderError> {
        let buffer = checked_create(device, || {
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("tumbler cube vbo"),
                contents: bytemuck::cast_slice(&CUBE_VERTICES),
                usage: wgpu::BufferUsages::VERTEX,
            })
        })
        .map_err(RenderError::BufferCreation)?;

        self.vertex_buffer = Some(buffer);
        self.vertex_count = CUBE_VERTICES.len() as u32;

        log::info!("cube geometry uploaded: {} vertices", self.vertex_count);
        Ok(())
    }

    /// True once both initialization steps have completed.
    pub fn is_ready(&self) -> bool {
        self.pipeline.is_some() && self.bind_group.is_some() && self.vertex_buffer.is_some()
    }

    /// Records the frame: uploads the model matrix, clears color and
    /// depth/stencil, and issues the single non-indexed draw.
    ///
    /// A no-op if initialization has not completed.
    pub fn draw(&self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, model: &Mat4) {
        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };
        let Some(model_buffer) = self.model_buffer.as_ref() else { return };
        let Some(vertex_buffer) = self.vertex_buffer.as_ref() else { return };

        ctx.queue
            .write_buffer(model_buffer, 0, bytemuck::bytes_of(&ModelUniform::from(model)));

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("tumbler cube pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: target.depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(0),
                    store: wgpu::StoreOp::Store,
                }),
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        let (w, h) = ctx.size;
        rpass.set_viewport(0.0, 0.0, w as f32, h as f32, 0.0, 1.0);
        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, vertex_buffer.slice(..));
        rpass.draw(0..self.vertex_count, 0..1);
    }

    /// Drops GPU resources in reverse acquisition order.
    ///
    /// Safe on partially-initialized state; a second call is a no-op.
    pub fn release(&mut self) {
        self.vertex_count = 0;
        self.vertex_buffer = None;

        self.bind_group = None;
        self.model_buffer = None;
        self.pipeline = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_uniform_transposes_for_std140() {
        let m = Mat4::from_euler_xyz(0.4, -0.2, 1.3);
        let uniform = ModelUniform::from(&m);
        assert_eq!(uniform.model, m.transposed().m);
        assert_eq!(std::mem::size_of::<ModelUniform>(), 64);
    }

    #[test]
    fn release_tolerates_uninitialized_state() {
        let mut renderer = CubeRenderer::new();
        assert!(!renderer.is_ready());
        renderer.release();
        renderer.release();
        assert!(!renderer.is_ready());
        assert_eq!(renderer.vertex_count, 0);
    }
}
