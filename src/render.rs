use crate::core::helmet::HelmetModel;
use crate::core::rig::{Camera, LightRig};
use glam::Mat4;
use std::rc::Rc;

mod helpers;
mod pipeline;
mod targets;

use pipeline::{create_helmet_pipelines, HelmetPipelines, MaterialUniforms, SceneUniforms};
use targets::DepthTarget;

/// Adapter, device and pipelines shared by every helmet surface on the page.
pub struct GpuContext {
    adapter: wgpu::Adapter,
    device: wgpu::Device,
    queue: wgpu::Queue,
    format: wgpu::TextureFormat,
    pipelines: HelmetPipelines,
}

impl GpuContext {
    /// `probe` is any surface on the page; the adapter must be able to present to it.
    pub async fn new(instance: &wgpu::Instance, probe: &wgpu::Surface<'static>) -> anyhow::Result<Self> {
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(probe),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: Some("helmet_device"),
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = probe.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let pipelines = create_helmet_pipelines(&device, format);
        log::info!("[gpu] adapter ready, surface format {:?}", format);
        Ok(Self {
            adapter,
            device,
            queue,
            format,
            pipelines,
        })
    }
}

struct PartBuffers {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    bind_group: wgpu::BindGroup,
    blended: bool,
    _material_buffer: wgpu::Buffer,
}

/// One render surface with its camera, light rig and uploaded helmet parts.
pub struct HelmetRenderer {
    gpu: Rc<GpuContext>,
    surface: wgpu::Surface<'static>,
    config: wgpu::SurfaceConfiguration,
    depth: DepthTarget,
    scene_buffer: wgpu::Buffer,
    scene_bind_group: wgpu::BindGroup,
    parts: Vec<PartBuffers>,
    camera: Camera,
    lights: LightRig,
}

impl HelmetRenderer {
    pub fn new(
        gpu: Rc<GpuContext>,
        surface: wgpu::Surface<'static>,
        width: u32,
        height: u32,
        model: &HelmetModel,
    ) -> Self {
        let device = &gpu.device;
        let caps = surface.get_capabilities(&gpu.adapter);
        // Transparent canvas over the page background when the browser allows it.
        let alpha_mode = if caps
            .alpha_modes
            .contains(&wgpu::CompositeAlphaMode::PreMultiplied)
        {
            wgpu::CompositeAlphaMode::PreMultiplied
        } else {
            caps.alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto)
        };
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: gpu.format,
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(device, &config);
        let depth = DepthTarget::new(device, config.width, config.height);

        let mut camera = model.variant.camera();
        camera.aspect = config.width as f32 / config.height as f32;
        let lights = model.variant.light_rig();

        let initial = SceneUniforms::new(&camera, &lights, Mat4::IDENTITY);
        let scene_buffer =
            helpers::create_uniform_buffer(device, "helmet_scene", bytemuck::bytes_of(&initial));
        let scene_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("helmet_scene_bg"),
            layout: &gpu.pipelines.scene_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: scene_buffer.as_entire_binding(),
            }],
        });

        let parts = model
            .parts
            .iter()
            .map(|part| {
                let label = format!("{:?}", part.kind);
                let (vertex_buffer, index_buffer, index_count) =
                    helpers::upload_mesh(device, &label, &part.mesh);
                let uniforms = MaterialUniforms::from(&part.material);
                let material_buffer =
                    helpers::create_uniform_buffer(device, &label, bytemuck::bytes_of(&uniforms));
                let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                    label: Some(&label),
                    layout: &gpu.pipelines.material_bgl,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: material_buffer.as_entire_binding(),
                    }],
                });
                PartBuffers {
                    vertex_buffer,
                    index_buffer,
                    index_count,
                    bind_group,
                    blended: part.material.is_transparent(),
                    _material_buffer: material_buffer,
                }
            })
            .collect();

        Self {
            gpu,
            surface,
            config,
            depth,
            scene_buffer,
            scene_bind_group,
            parts,
            camera,
            lights,
        }
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.config.width || height != self.config.height {
            self.config.width = width;
            self.config.height = height;
            self.camera.aspect = width as f32 / height as f32;
            self.reconfigure();
        }
    }

    /// Reapply the surface configuration, e.g. after the surface was lost.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.gpu.device, &self.config);
        self.depth
            .recreate(&self.gpu.device, self.config.width, self.config.height);
    }

    pub fn render(&mut self, model: Mat4) -> Result<(), wgpu::SurfaceError> {
        let uniforms = SceneUniforms::new(&self.camera, &self.lights, model);
        self.gpu
            .queue
            .write_buffer(&self.scene_buffer, 0, bytemuck::bytes_of(&uniforms));

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("helmet_encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("helmet_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.scene_bind_group, &[]);
            for (pipeline, blended) in [
                (&self.gpu.pipelines.opaque, false),
                (&self.gpu.pipelines.blended, true),
            ] {
                rpass.set_pipeline(pipeline);
                for part in self.parts.iter().filter(|p| p.blended == blended) {
                    rpass.set_bind_group(1, &part.bind_group, &[]);
                    rpass.set_vertex_buffer(0, part.vertex_buffer.slice(..));
                    rpass.set_index_buffer(part.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                    rpass.draw_indexed(0..part.index_count, 0, 0..1);
                }
            }
        }
        self.gpu.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
