use crate::constants::{
    AMBIENT_INTENSITY, BACKGROUND_RGB, FILL_LIGHT_INTENSITY, FILL_LIGHT_POSITION, FOG_FAR,
    FOG_NEAR, MODEL_SCALE,
};
use crate::core::model::MeshData;
use crate::core::LiveTransform;
use glam::{Mat4, Vec3};
use web_sys as web;

mod helpers;
mod mesh;
mod targets;
use mesh::{ModelBuffers, SceneResources, SceneUniforms};
use targets::RenderTargets;

pub use crate::camera::screen_to_world_ray;

/// Model matrix for the product: yaw about +Y after uniform scale.
#[inline]
pub fn model_matrix(model_yaw: f32) -> Mat4 {
    Mat4::from_rotation_y(model_yaw) * Mat4::from_scale(Vec3::splat(MODEL_SCALE))
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    targets: RenderTargets,
    scene: SceneResources,
    model: Option<ModelBuffers>,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
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
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
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
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let targets = RenderTargets::new(&device, width, height);
        let scene = mesh::create_scene_resources(&device, format);
        log::info!("[gpu] surface {}x{} format={:?}", width, height, format);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            targets,
            scene,
            model: None,
            width,
            height,
            clear_color: wgpu::Color {
                r: BACKGROUND_RGB[0] as f64,
                g: BACKGROUND_RGB[1] as f64,
                b: BACKGROUND_RGB[2] as f64,
                a: 1.0,
            },
        })
    }

    pub fn set_model(&mut self, mesh: &MeshData) {
        self.model = Some(mesh::upload_model(&self.device, mesh));
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.targets.recreate(&self.device, width, height);
        }
    }

    pub fn render(&mut self, live: &LiveTransform) -> Result<(), wgpu::SurfaceError> {
        let cam = &live.camera;
        let eye = cam.eye;
        let uniforms = SceneUniforms {
            view_proj: (cam.projection_matrix() * cam.view_matrix()).to_cols_array_2d(),
            model: model_matrix(live.model_yaw).to_cols_array_2d(),
            camera_pos: [eye.x, eye.y, eye.z, 1.0],
            key_light: live
                .light
                .position
                .extend(live.light.intensity)
                .to_array(),
            fill_light: [
                FILL_LIGHT_POSITION[0],
                FILL_LIGHT_POSITION[1],
                FILL_LIGHT_POSITION[2],
                FILL_LIGHT_INTENSITY,
            ],
            params: [AMBIENT_INTENSITY, FOG_NEAR, FOG_FAR, 0.0],
            fog_color: [BACKGROUND_RGB[0], BACKGROUND_RGB[1], BACKGROUND_RGB[2], 1.0],
        };
        self.queue.write_buffer(
            &self.scene.uniform_buffer,
            0,
            bytemuck::bytes_of(&uniforms),
        );

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            if let Some(m) = &self.model {
                rpass.set_pipeline(&self.scene.pipeline);
                rpass.set_bind_group(0, &self.scene.bind_group, &[]);
                rpass.set_vertex_buffer(0, m.vertex_buffer.slice(..));
                rpass.set_index_buffer(m.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..m.index_count, 0, 0..1);
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
