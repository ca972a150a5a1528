use crate::instances::SphereInstance;
use glam::Mat4;
use skyfall_core::{Camera, EnvironmentSnapshot};
use web_sys as web;

mod helpers;
mod scene;
mod sky;

use scene::SceneResources;
use sky::SkyResources;

pub static SKY_WGSL: &str = include_str!("../shaders/sky.wgsl");
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

/// Per-frame uniforms shared by the sky and scene passes. Layout matches
/// `Globals` in both shaders.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct Globals {
    view_proj: [[f32; 4]; 4],
    inv_view_proj: [[f32; 4]; 4],
    cam_pos: [f32; 4],
    cam_right: [f32; 4],
    cam_up: [f32; 4],
    fog: [f32; 4],
    sun_dir: [f32; 4],
    sky: [f32; 4],
}

impl Globals {
    fn new(camera: &Camera, env: &EnvironmentSnapshot) -> Self {
        let view_proj = camera.view_projection();
        let inv_view = camera.view_matrix().inverse();
        let sun = env.sky.sun_direction();
        let [fr, fg, fb] = env.fog_color;
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            inv_view_proj: view_proj.inverse().to_cols_array_2d(),
            cam_pos: camera.eye.extend(1.0).to_array(),
            cam_right: inv_view.x_axis.truncate().extend(0.0).to_array(),
            cam_up: inv_view.y_axis.truncate().extend(0.0).to_array(),
            fog: [fr, fg, fb, env.fog_density],
            sun_dir: [sun.x, sun.y, sun.z, env.sky.opacity],
            sky: [
                env.sky.turbidity,
                env.sky.rayleigh,
                env.sky.sun_elevation_deg,
                if env.sky.visible { 1.0 } else { 0.0 },
            ],
        }
    }
}

impl Default for Globals {
    fn default() -> Self {
        let id = Mat4::IDENTITY.to_cols_array_2d();
        Self {
            view_proj: id,
            inv_view_proj: id,
            cam_pos: [0.0; 4],
            cam_right: [1.0, 0.0, 0.0, 0.0],
            cam_up: [0.0, 1.0, 0.0, 0.0],
            fog: [0.0; 4],
            sun_dir: [0.0, 1.0, 0.0, 0.0],
            sky: [0.0; 4],
        }
    }
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    globals_buffer: wgpu::Buffer,
    globals_bg: wgpu::BindGroup,
    sky: SkyResources,
    scene: SceneResources,
    _depth_tex: wgpu::Texture,
    depth_view: wgpu::TextureView,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
    instance_count: u32,
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

        let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("globals"),
            size: std::mem::size_of::<Globals>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        queue.write_buffer(&globals_buffer, 0, bytemuck::bytes_of(&Globals::default()));
        let globals_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globals_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let globals_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bg"),
            layout: &globals_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });

        let sky = sky::create_sky_resources(&device, &globals_bgl, format);
        let scene = scene::create_scene_resources(
            &device,
            &globals_bgl,
            format,
            crate::constants::INITIAL_INSTANCE_CAPACITY,
        );
        let (depth_tex, depth_view) = helpers::create_depth_texture(&device, width, height);
        log::info!("[gpu] ready {}x{} format={:?}", width, height, format);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            globals_buffer,
            globals_bg,
            sky,
            scene,
            _depth_tex: depth_tex,
            depth_view,
            width,
            height,
            clear_color: wgpu::Color::BLACK,
            instance_count: 0,
        })
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
            let (tex, view) = helpers::create_depth_texture(&self.device, width, height);
            self._depth_tex = tex;
            self.depth_view = view;
        }
    }

    pub fn update_globals(&mut self, camera: &Camera, env: &EnvironmentSnapshot) {
        let globals = Globals::new(camera, env);
        self.queue
            .write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&globals));
        let [r, g, b, a] = crate::background::clear_color(env);
        self.clear_color = wgpu::Color { r, g, b, a };
    }

    pub fn upload_instances(&mut self, instances: &[SphereInstance]) {
        let wanted = helpers::grow_capacity(self.scene.capacity, instances.len());
        if wanted != self.scene.capacity {
            log::debug!("[gpu] instance buffer {} -> {}", self.scene.capacity, wanted);
            self.scene.instance_buffer = scene::create_instance_buffer(&self.device, wanted);
            self.scene.capacity = wanted;
        }
        if !instances.is_empty() {
            self.queue.write_buffer(
                &self.scene.instance_buffer,
                0,
                bytemuck::cast_slice(instances),
            );
        }
        self.instance_count = instances.len() as u32;
    }

    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
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
                label: Some("main_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.globals_bg, &[]);

            rpass.set_pipeline(&self.sky.pipeline);
            rpass.draw(0..3, 0..1);

            if self.instance_count > 0 {
                rpass.set_pipeline(&self.scene.pipeline);
                rpass.set_vertex_buffer(0, self.scene.instance_buffer.slice(..));
                rpass.draw(0..6, 0..self.instance_count);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
