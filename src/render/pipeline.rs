use crate::core::helmet::Material;
use crate::core::mesh::Vertex;
use crate::core::rig::{Camera, LightRig};
use glam::{Mat4, Vec4};

use super::helpers::DEPTH_FORMAT;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PointLightPacked {
    pub(crate) position: [f32; 4],
    pub(crate) color: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniforms {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) normal_matrix: [[f32; 4]; 4],
    pub(crate) camera_pos: [f32; 4],
    pub(crate) ambient: [f32; 4],
    pub(crate) lights: [PointLightPacked; 2],
}

impl SceneUniforms {
    pub(crate) fn new(camera: &Camera, rig: &LightRig, model: Mat4) -> Self {
        let pack = |i: usize| {
            let l = rig.points[i];
            PointLightPacked {
                position: l.position.extend(1.0).to_array(),
                color: l.color.extend(l.intensity).to_array(),
            }
        };
        Self {
            view_proj: camera.view_projection().to_cols_array_2d(),
            model: model.to_cols_array_2d(),
            normal_matrix: model.inverse().transpose().to_cols_array_2d(),
            camera_pos: camera.eye.extend(1.0).to_array(),
            ambient: rig.ambient_color.extend(rig.ambient_intensity).to_array(),
            lights: [pack(0), pack(1)],
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct MaterialUniforms {
    pub(crate) base_color: [f32; 4],
    pub(crate) emissive: [f32; 4],
    pub(crate) pbr: [f32; 4],
}

impl From<&Material> for MaterialUniforms {
    fn from(m: &Material) -> Self {
        Self {
            base_color: m.base_color.extend(m.opacity()).to_array(),
            emissive: m.emissive.extend(m.emissive_intensity).to_array(),
            pbr: Vec4::new(m.metalness, m.roughness, m.iridescence, m.transmission).to_array(),
        }
    }
}

const VERTEX_ATTRIBUTES: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

/// Layouts and the two helmet pipelines (opaque first, then blended parts),
/// shared by every surface that uses the same color format.
pub(crate) struct HelmetPipelines {
    pub(crate) scene_bgl: wgpu::BindGroupLayout,
    pub(crate) material_bgl: wgpu::BindGroupLayout,
    pub(crate) opaque: wgpu::RenderPipeline,
    pub(crate) blended: wgpu::RenderPipeline,
}

fn uniform_layout_entry(visibility: wgpu::ShaderStages) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding: 0,
        visibility,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: None,
        },
        count: None,
    }
}

pub(crate) fn create_helmet_pipelines(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
) -> HelmetPipelines {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("helmet_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::HELMET_WGSL.into()),
    });
    let scene_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("helmet_scene_bgl"),
        entries: &[uniform_layout_entry(
            wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
        )],
    });
    let material_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("helmet_material_bgl"),
        entries: &[uniform_layout_entry(wgpu::ShaderStages::FRAGMENT)],
    });
    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("helmet_pl"),
        bind_group_layouts: &[&scene_bgl, &material_bgl],
        push_constant_ranges: &[],
    });
    let opaque = make_pipeline(
        device,
        &layout,
        &shader,
        color_format,
        "helmet_opaque",
        wgpu::BlendState::REPLACE,
        true,
    );
    let blended = make_pipeline(
        device,
        &layout,
        &shader,
        color_format,
        "helmet_blended",
        wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING,
        false,
    );
    HelmetPipelines {
        scene_bgl,
        material_bgl,
        opaque,
        blended,
    }
}

fn make_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    color_format: wgpu::TextureFormat,
    label: &str,
    blend: wgpu::BlendState,
    depth_write: bool,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            buffers: &[wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &VERTEX_ATTRIBUTES,
            }],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        // Thin parts (visor, spoiler fins) are seen from both sides.
        primitive: wgpu::PrimitiveState {
            cull_mode: None,
            ..Default::default()
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: depth_write,
            depth_compare: wgpu::CompareFunction::LessEqual,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: color_format,
                blend: Some(blend),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    })
}
