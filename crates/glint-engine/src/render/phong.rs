use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

use super::mesh::{Mesh, MeshVertex};
use super::{RenderCtx, RenderTarget};

/// Per-scene shading inputs shared by every object in a frame.
#[derive(Debug, Copy, Clone)]
pub struct SceneGlobals {
    pub view: Mat4,
    pub projection: Mat4,
    pub view_pos: Vec3,
    pub light_color: Vec3,
    pub object_color: Vec3,
}

/// Per-object shading inputs: one draw call each.
#[derive(Debug, Copy, Clone)]
pub struct ObjectParams {
    pub model: Mat4,
    pub light_pos: Vec3,
    /// Specular exponent; higher values concentrate the highlight.
    pub shininess: f32,
}

/// Single-pass ambient+diffuse+specular mesh renderer.
///
/// GPU resources are created lazily on first use (and recreated if the target
/// formats change). Uniforms live in two persistent buffers bound once: a
/// scene UBO written once per frame and a dynamic-offset object UBO with one
/// 256-byte slot per object, so no per-frame uniform lookup happens.
///
/// Shader and pipeline creation run inside validation error scopes: failures
/// are logged and the objects are used anyway. Rendering then degrades to
/// logged no-op draws; it never aborts the process.
#[derive(Default)]
pub struct PhongRenderer {
    pipeline_formats: Option<(wgpu::TextureFormat, wgpu::TextureFormat)>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    scene_ubo: Option<wgpu::Buffer>,

    object_ubo: Option<wgpu::Buffer>,
    object_capacity: usize,
}

/// Dynamic-offset stride for object slots. Matches the default
/// `min_uniform_buffer_offset_alignment` limit.
const OBJECT_STRIDE: u64 = 256;

impl PhongRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws `objects` with the shared `globals`, one draw call per object.
    ///
    /// Assumes color/depth were already cleared (ops are `Load`).
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        mesh: &Mesh,
        globals: &SceneGlobals,
        objects: &[ObjectParams],
    ) {
        if objects.is_empty() {
            return;
        }

        self.ensure_pipeline(ctx);
        self.ensure_object_capacity(ctx, objects.len());
        self.ensure_bindings(ctx);

        let Some(scene_ubo) = self.scene_ubo.as_ref() else { return };
        let Some(object_ubo) = self.object_ubo.as_ref() else { return };

        ctx.queue
            .write_buffer(scene_ubo, 0, bytemuck::bytes_of(&SceneUniform::from(globals)));

        for (i, obj) in objects.iter().enumerate() {
            ctx.queue.write_buffer(
                object_ubo,
                i as u64 * OBJECT_STRIDE,
                bytemuck::bytes_of(&ObjectUniform::from(obj)),
            );
        }

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("glint phong pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: target.depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);
        rpass.set_vertex_buffer(0, mesh.vertex_buffer().slice(..));

        for i in 0..objects.len() {
            let offset = (i as u64 * OBJECT_STRIDE) as u32;
            rpass.set_bind_group(0, bind_group, &[offset]);
            rpass.draw(0..mesh.vertex_count(), 0..1);
        }
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        let formats = (ctx.surface_format, ctx.depth_format);
        if self.pipeline_formats == Some(formats) && self.pipeline.is_some() {
            return;
        }

        // Compile failure is logged and the module is still used below,
        // mirroring classic fire-and-log GL shader handling. Subsequent
        // draws fail validation and are dropped by the device error handler.
        let error_scope = ctx.device.push_error_scope(wgpu::ErrorFilter::Validation);
        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("glint phong shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/phong.wgsl").into()),
        });
        if let Some(err) = pollster::block_on(error_scope.pop()) {
            log::error!("phong shader compilation failed: {err}");
        }

        let bind_group_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("glint phong bgl"),
                    entries: &[
                        wgpu::BindGroupLayoutEntry {
                            binding: 0,
                            visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                            ty: wgpu::BindingType::Buffer {
                                ty: wgpu::BufferBindingType::Uniform,
                                has_dynamic_offset: false,
                                min_binding_size: Some(
                                    std::num::NonZeroU64::new(
                                        std::mem::size_of::<SceneUniform>() as u64,
                                    )
                                    .unwrap(),
                                ),
                            },
                            count: None,
                        },
                        wgpu::BindGroupLayoutEntry {
                            binding: 1,
                            visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                            ty: wgpu::BindingType::Buffer {
                                ty: wgpu::BufferBindingType::Uniform,
                                has_dynamic_offset: true,
                                min_binding_size: Some(
                                    std::num::NonZeroU64::new(
                                        std::mem::size_of::<ObjectUniform>() as u64,
                                    )
                                    .unwrap(),
                                ),
                            },
                            count: None,
                        },
                    ],
                });

        let pipeline_layout =
            ctx.device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("glint phong pipeline layout"),
                    bind_group_layouts: &[&bind_group_layout],
                    immediate_size: 0,
                });

        // Link failure follows the same fire-and-log contract as compilation.
        let error_scope = ctx.device.push_error_scope(wgpu::ErrorFilter::Validation);
        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("glint phong pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[MeshVertex::layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    // Opaque output; no blending.
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: Some(wgpu::DepthStencilState {
                format: ctx.depth_format,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),

            multiview_mask: None,
            cache: None,
        });
        if let Some(err) = pollster::block_on(error_scope.pop()) {
            log::error!("phong pipeline creation failed: {err}");
        }

        self.pipeline_formats = Some(formats);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);

        self.bind_group = None;
        self.scene_ubo = None;
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.scene_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };
        let Some(object_ubo) = self.object_ubo.as_ref() else { return };

        let scene_ubo = self.scene_ubo.get_or_insert_with(|| {
            ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("glint phong scene ubo"),
                size: std::mem::size_of::<SceneUniform>() as u64,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            })
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("glint phong bind group"),
            layout: bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: scene_ubo.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                        buffer: object_ubo,
                        offset: 0,
                        size: std::num::NonZeroU64::new(
                            std::mem::size_of::<ObjectUniform>() as u64
                        ),
                    }),
                },
            ],
        });

        self.bind_group = Some(bind_group);
    }

    fn ensure_object_capacity(&mut self, ctx: &RenderCtx<'_>, required: usize) {
        if required <= self.object_capacity && self.object_ubo.is_some() {
            return;
        }

        let new_cap = required.next_power_of_two().max(8);

        self.object_ubo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("glint phong object ubo"),
            size: new_cap as u64 * OBJECT_STRIDE,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.object_capacity = new_cap;

        // The bind group references the object buffer; rebuild it.
        self.bind_group = None;
    }
}

/// GPU layout of the per-scene UBO. Matches `Scene` in phong.wgsl.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct SceneUniform {
    view: [[f32; 4]; 4],
    projection: [[f32; 4]; 4],
    view_pos: [f32; 3],
    _pad0: f32,
    light_color: [f32; 3],
    _pad1: f32,
    object_color: [f32; 3],
    _pad2: f32,
}

impl From<&SceneGlobals> for SceneUniform {
    fn from(g: &SceneGlobals) -> Self {
        Self {
            view: g.view.to_cols_array_2d(),
            projection: g.projection.to_cols_array_2d(),
            view_pos: g.view_pos.to_array(),
            _pad0: 0.0,
            light_color: g.light_color.to_array(),
            _pad1: 0.0,
            object_color: g.object_color.to_array(),
            _pad2: 0.0,
        }
    }
}

/// GPU layout of one per-object UBO slot. Matches `Object` in phong.wgsl.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct ObjectUniform {
    model: [[f32; 4]; 4],
    /// Inverse-transpose of the model matrix, for normal transformation
    /// under non-uniform scale. Stored as a full mat4; the shader reads the
    /// upper 3x3.
    normal: [[f32; 4]; 4],
    light_pos: [f32; 3],
    shininess: f32,
}

impl From<&ObjectParams> for ObjectUniform {
    fn from(o: &ObjectParams) -> Self {
        Self {
            model: o.model.to_cols_array_2d(),
            normal: o.model.inverse().transpose().to_cols_array_2d(),
            light_pos: o.light_pos.to_array(),
            shininess: o.shininess,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_uniform_layout_matches_wgsl() {
        assert_eq!(std::mem::size_of::<SceneUniform>(), 176);
        assert_eq!(std::mem::offset_of!(SceneUniform, view), 0);
        assert_eq!(std::mem::offset_of!(SceneUniform, projection), 64);
        assert_eq!(std::mem::offset_of!(SceneUniform, view_pos), 128);
        assert_eq!(std::mem::offset_of!(SceneUniform, light_color), 144);
        assert_eq!(std::mem::offset_of!(SceneUniform, object_color), 160);
    }

    #[test]
    fn object_uniform_layout_matches_wgsl() {
        assert_eq!(std::mem::size_of::<ObjectUniform>(), 144);
        assert_eq!(std::mem::offset_of!(ObjectUniform, normal), 64);
        assert_eq!(std::mem::offset_of!(ObjectUniform, light_pos), 128);
        assert_eq!(std::mem::offset_of!(ObjectUniform, shininess), 140);
    }

    #[test]
    fn object_slots_fit_the_dynamic_stride() {
        assert!(std::mem::size_of::<ObjectUniform>() as u64 <= OBJECT_STRIDE);
        assert_eq!(OBJECT_STRIDE % 256, 0);
    }

    #[test]
    fn normal_matrix_of_rotation_is_the_rotation() {
        let model = Mat4::from_rotation_y(1.2);
        let u = ObjectUniform::from(&ObjectParams {
            model,
            light_pos: Vec3::ZERO,
            shininess: 32.0,
        });
        let normal = Mat4::from_cols_array_2d(&u.normal);
        assert!(normal.abs_diff_eq(model, 1e-5));
    }

    #[test]
    fn normal_matrix_ignores_translation() {
        let model = Mat4::from_translation(Vec3::new(3.0, -2.0, 1.0)) * Mat4::from_rotation_y(0.4);
        let u = ObjectUniform::from(&ObjectParams {
            model,
            light_pos: Vec3::ZERO,
            shininess: 2.0,
        });
        let normal = Mat4::from_cols_array_2d(&u.normal);
        // Upper 3x3 equals the rotation; translation lands in the last row
        // of the transpose and is never read by the shader.
        let rot = Mat4::from_rotation_y(0.4);
        for col in 0..3 {
            let a = normal.col(col).truncate();
            let b = rot.col(col).truncate();
            assert!(a.abs_diff_eq(b, 1e-5), "column {col}: {a} vs {b}");
        }
    }
}
