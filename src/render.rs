use globe_core::{Camera, DrawItem, MeshLibrary};
use std::num::NonZeroU64;
use web_sys as web;

mod helpers;
mod meshes;
use meshes::GpuMeshes;

pub static GLOBE_WGSL: &str = include_str!("../shaders/globe.wgsl");

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct DrawUniforms {
    mvp: [[f32; 4]; 4],
    color: [f32; 4],
}

const DRAW_UNIFORMS_SIZE: u64 = std::mem::size_of::<DrawUniforms>() as u64;

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    pipelines: Vec<wgpu::RenderPipeline>,
    meshes: GpuMeshes,

    // One uniform block per draw item, addressed with dynamic offsets
    uniform_layout: wgpu::BindGroupLayout,
    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,
    uniform_stride: u64,
    uniform_capacity: usize,
    staging: Vec<u8>,

    width: u32,
    height: u32,
}

impl GpuState {
    pub async fn new(
        canvas: &web::HtmlCanvasElement,
        library: &MeshLibrary,
        draw_capacity: usize,
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
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
                    label: Some("globe_device"),
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;

        let caps = surface.get_capabilities(&adapter);
        let format = helpers::pick_surface_format(&caps.formats)
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: helpers::pick_alpha_mode(&caps.alpha_modes),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!(
            "[gpu] surface {}x{} format={:?} alpha={:?}",
            width,
            height,
            config.format,
            config.alpha_mode
        );

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("globe_shader"),
            source: wgpu::ShaderSource::Wgsl(GLOBE_WGSL.into()),
        });
        let uniform_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("draw_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: true,
                    min_binding_size: NonZeroU64::new(DRAW_UNIFORMS_SIZE),
                },
                count: None,
            }],
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("globe_pl"),
            bind_group_layouts: &[&uniform_layout],
            push_constant_ranges: &[],
        });
        let pipelines = helpers::PIPELINE_VARIANTS
            .iter()
            .map(|&(topology, blend, side)| {
                helpers::make_mesh_pipeline(
                    &device,
                    &pipeline_layout,
                    &shader,
                    format,
                    topology,
                    blend,
                    side,
                )
            })
            .collect();

        let meshes = GpuMeshes::upload(&device, library);

        let alignment = device.limits().min_uniform_buffer_offset_alignment as u64;
        let uniform_stride = helpers::align_up(DRAW_UNIFORMS_SIZE, alignment);
        let uniform_capacity = draw_capacity.max(1);
        let (uniform_buffer, uniform_bind_group) =
            create_uniforms(&device, &uniform_layout, uniform_stride, uniform_capacity);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipelines,
            meshes,
            uniform_layout,
            uniform_buffer,
            uniform_bind_group,
            uniform_stride,
            uniform_capacity,
            staging: Vec::new(),
            width,
            height,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.reconfigure();
            log::debug!("[gpu] surface resized to {}x{}", width, height);
        }
    }

    /// Reapply the surface configuration, e.g. after the surface was lost.
    pub fn reconfigure(&mut self) {
        self.config.width = self.width;
        self.config.height = self.height;
        self.surface.configure(&self.device, &self.config);
    }

    fn ensure_uniform_capacity(&mut self, items: usize) {
        if items <= self.uniform_capacity {
            return;
        }
        let capacity = items.next_power_of_two();
        let (buffer, bind_group) =
            create_uniforms(&self.device, &self.uniform_layout, self.uniform_stride, capacity);
        self.uniform_buffer = buffer;
        self.uniform_bind_group = bind_group;
        self.uniform_capacity = capacity;
        log::debug!("[gpu] uniform capacity grown to {}", capacity);
    }

    /// Draw `items` in order over a transparent clear.
    pub fn render(&mut self, camera: &Camera, items: &[DrawItem]) -> Result<(), wgpu::SurfaceError> {
        self.ensure_uniform_capacity(items.len());

        let view_proj = camera.view_projection();
        let stride = self.uniform_stride as usize;
        self.staging.clear();
        self.staging.resize(items.len() * stride, 0);
        for (i, item) in items.iter().enumerate() {
            let u = DrawUniforms {
                mvp: (view_proj * item.model).to_cols_array_2d(),
                color: item.color,
            };
            let at = i * stride;
            self.staging[at..at + DRAW_UNIFORMS_SIZE as usize].copy_from_slice(bytemuck::bytes_of(&u));
        }
        if !self.staging.is_empty() {
            self.queue.write_buffer(&self.uniform_buffer, 0, &self.staging);
        }

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
                label: Some("globe_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            let mut bound = None::<usize>;
            for (i, item) in items.iter().enumerate() {
                let Some(mesh) = self.meshes.get(item.mesh) else {
                    continue;
                };
                if mesh.vertex_count == 0 || item.color[3] <= 0.0 {
                    continue;
                }
                let pipeline = helpers::pipeline_index(mesh.topology, item.blend, item.side);
                if bound != Some(pipeline) {
                    rpass.set_pipeline(&self.pipelines[pipeline]);
                    bound = Some(pipeline);
                }
                let offset = (i * stride) as wgpu::DynamicOffset;
                rpass.set_bind_group(0, &self.uniform_bind_group, &[offset]);
                rpass.set_vertex_buffer(0, mesh.buffer.slice(..));
                rpass.draw(0..mesh.vertex_count, 0..1);
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn create_uniforms(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    stride: u64,
    capacity: usize,
) -> (wgpu::Buffer, wgpu::BindGroup) {
    let buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("draw_uniforms"),
        size: stride * capacity as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("draw_bg"),
        layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                buffer: &buffer,
                offset: 0,
                size: NonZeroU64::new(DRAW_UNIFORMS_SIZE),
            }),
        }],
    });
    (buffer, bind_group)
}
