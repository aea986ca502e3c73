//! WebGPU render pipelines
//!
//! Two pipelines share one globals uniform: an instanced, lit pipeline for
//! every mesh in the draw list, and an unlit pipeline for the road strip
//! whose lane markings are computed in the fragment shader.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};
use wgpu::util::DeviceExt;

use super::projection::Projection;
use super::scene::{DrawList, MeshKind};
use super::shapes;
use super::vertex::{InstanceRaw, RoadVertex, Vertex, colors};
use crate::settings::Settings;
use crate::sim::{MARKING_TILE_LENGTH, SceneState};
use crate::tuning::Tuning;

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Initial instance capacity; the buffer grows when the draw list outgrows it
const INITIAL_INSTANCES: usize = 1024;

/// Light travels from this point toward the origin
const LIGHT_POSITION: [f32; 3] = [5.0, 10.0, 7.5];
const AMBIENT_INTENSITY: f32 = 0.6;
const DIRECTIONAL_INTENSITY: f32 = 0.8;

// ============================================================================
// GPU DATA STRUCTURES (must match both shaders)
// ============================================================================

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct Globals {
    view_proj: [[f32; 4]; 4], // offset 0
    light_dir: [f32; 4],      // offset 64 - xyz toward the light, w = intensity
    ambient: [f32; 4],        // offset 80 - rgb, w unused
    road: [f32; 4],           // offset 96 - z, tiles per strip, marking offset, unused
}

impl Globals {
    fn new(view_proj: Mat4, road_z: f32, tiles: f32, marking_offset: f32) -> Self {
        let light = Vec3::from_array(LIGHT_POSITION).normalize();
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            light_dir: light.extend(DIRECTIONAL_INTENSITY).to_array(),
            ambient: [AMBIENT_INTENSITY, AMBIENT_INTENSITY, AMBIENT_INTENSITY, 0.0],
            road: [road_z, tiles, marking_offset, 0.0],
        }
    }
}

/// Static vertex buffer for one mesh kind
struct MeshBuffer {
    buffer: wgpu::Buffer,
    vertex_count: u32,
}

/// Build the static vertices for a mesh kind
fn mesh_vertices(kind: MeshKind, segments: u32) -> Vec<Vertex> {
    match kind {
        MeshKind::CarBody => shapes::cuboid(Vec3::new(1.0, 0.5, 2.0), colors::CAR_BODY),
        MeshKind::Wheel => shapes::cylinder(0.2, 0.2, 0.1, segments, colors::WHEEL),
        MeshKind::Trunk => shapes::cylinder(0.1, 0.1, 1.0, segments, colors::TRUNK),
        MeshKind::Foliage => shapes::cone(0.5, 1.0, segments, colors::FOLIAGE),
    }
}

fn create_depth_view(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("depth_texture"),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}

fn create_instance_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("instances"),
        size: (std::mem::size_of::<InstanceRaw>() * capacity) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

fn depth_state() -> wgpu::DepthStencilState {
    wgpu::DepthStencilState {
        format: DEPTH_FORMAT,
        depth_write_enabled: true,
        depth_compare: wgpu::CompareFunction::Less,
        stencil: wgpu::StencilState::default(),
        bias: wgpu::DepthBiasState::default(),
    }
}

// ============================================================================
// RENDER STATE
// ============================================================================

/// Main render state
pub struct RenderState {
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pub projection: Projection,

    mesh_pipeline: wgpu::RenderPipeline,
    road_pipeline: wgpu::RenderPipeline,
    globals_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    depth_view: wgpu::TextureView,

    /// One static buffer per mesh, in [`MeshKind::ALL`] order
    meshes: Vec<MeshBuffer>,
    instance_buffer: wgpu::Buffer,
    instance_capacity: usize,
    road_buffer: wgpu::Buffer,
    road_vertex_count: u32,

    /// Viewport size in pixels
    pub size: (u32, u32),
}

impl RenderState {
    pub async fn new(
        surface: wgpu::Surface<'static>,
        adapter: &wgpu::Adapter,
        width: u32,
        height: u32,
        tuning: &Tuning,
        settings: &Settings,
    ) -> Result<Self, wgpu::RequestDeviceError> {
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("road-drive-device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_webgl2_defaults(),
                memory_hints: Default::default(),
                trace: Default::default(),
                experimental_features: Default::default(),
            })
            .await?;

        let surface_caps = surface.get_capabilities(adapter);
        log::info!("Surface formats: {:?}", surface_caps.formats);
        log::info!("Surface present modes: {:?}", surface_caps.present_modes);

        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);
        log::info!("Using surface format: {:?}", surface_format);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width,
            height,
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let mesh_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("mesh_shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("mesh_shader.wgsl").into()),
        });
        let road_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("road_shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("road_shader.wgsl").into()),
        });

        let projection = Projection::new(width, height);
        let globals_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("globals"),
            contents: bytemuck::bytes_of(&Globals::new(Mat4::IDENTITY, 0.0, 1.0, 0.0)),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globals_bind_group_layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bind_group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pipeline_layout"),
            bind_group_layouts: &[&bind_group_layout],
            immediate_size: 0,
        });

        // Open meshes (cones) and the single-sided road are drawn without culling
        let primitive = wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            cull_mode: None,
            ..Default::default()
        };

        let mesh_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("mesh_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &mesh_shader,
                entry_point: Some("vs_main"),
                buffers: &[Vertex::desc(), InstanceRaw::desc()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &mesh_shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: config.format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive,
            depth_stencil: Some(depth_state()),
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        let road_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("road_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &road_shader,
                entry_point: Some("vs_main"),
                buffers: &[RoadVertex::desc()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &road_shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: config.format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive,
            depth_stencil: Some(depth_state()),
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        let segments = settings.quality.mesh_segments();
        let meshes = MeshKind::ALL
            .iter()
            .map(|&kind| {
                let vertices = mesh_vertices(kind, segments);
                MeshBuffer {
                    buffer: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                        label: Some("mesh_vertices"),
                        contents: bytemuck::cast_slice(&vertices),
                        usage: wgpu::BufferUsages::VERTEX,
                    }),
                    vertex_count: vertices.len() as u32,
                }
            })
            .collect();

        let road_vertices = shapes::road_strip(tuning.road.width, tuning.road.length);
        let road_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("road_vertices"),
            contents: bytemuck::cast_slice(&road_vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let depth_view = create_depth_view(&device, width, height);
        let instance_buffer = create_instance_buffer(&device, INITIAL_INSTANCES);

        log::info!(
            "Render state ready ({} quality, {} mesh segments)",
            settings.quality.as_str(),
            segments
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            projection,
            mesh_pipeline,
            road_pipeline,
            globals_buffer,
            bind_group,
            depth_view,
            meshes,
            instance_buffer,
            instance_capacity: INITIAL_INSTANCES,
            road_buffer,
            road_vertex_count: road_vertices.len() as u32,
            size: (width, height),
        })
    }

    pub fn resize(&mut self, new_width: u32, new_height: u32) {
        if new_width > 0 && new_height > 0 {
            self.size = (new_width, new_height);
            self.config.width = new_width;
            self.config.height = new_height;
            self.surface.configure(&self.device, &self.config);
            self.depth_view = create_depth_view(&self.device, new_width, new_height);
            self.projection.resize(new_width, new_height);
        }
    }

    /// Reconfigure the surface at its current size (after `Lost`/`Outdated`)
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    /// Upload the frame's instances and uniforms, then draw road and meshes
    pub fn render(&mut self, list: &DrawList, state: &SceneState) -> Result<(), wgpu::SurfaceError> {
        let road = &state.road;
        let globals = Globals::new(
            self.projection.view_projection(&state.camera),
            road.z,
            road.length / MARKING_TILE_LENGTH,
            road.marking_offset(),
        );
        self.queue
            .write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&globals));

        // Flatten the grouped transforms; each mesh draws a contiguous range
        let grouped = list.instances();
        let mut instances: Vec<InstanceRaw> = Vec::with_capacity(list.len());
        let mut ranges = Vec::with_capacity(MeshKind::ALL.len());
        for transforms in &grouped {
            let start = instances.len() as u32;
            instances.extend(transforms.iter().map(InstanceRaw::from_mat4));
            ranges.push(start..instances.len() as u32);
        }

        if instances.len() > self.instance_capacity {
            self.instance_capacity = instances.len().next_power_of_two();
            log::debug!("Growing instance buffer to {}", self.instance_capacity);
            self.instance_buffer = create_instance_buffer(&self.device, self.instance_capacity);
        }
        if !instances.is_empty() {
            self.queue
                .write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&instances));
        }

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("render_encoder"),
            });

        {
            let [r, g, b, a] = colors::BACKGROUND;
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("render_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: r as f64,
                            g: g as f64,
                            b: b as f64,
                            a: a as f64,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
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
                multiview_mask: None,
            });

            render_pass.set_bind_group(0, &self.bind_group, &[]);

            render_pass.set_pipeline(&self.road_pipeline);
            render_pass.set_vertex_buffer(0, self.road_buffer.slice(..));
            render_pass.draw(0..self.road_vertex_count, 0..1);

            render_pass.set_pipeline(&self.mesh_pipeline);
            render_pass.set_vertex_buffer(1, self.instance_buffer.slice(..));
            for (mesh, range) in self.meshes.iter().zip(ranges) {
                if range.is_empty() {
                    continue;
                }
                render_pass.set_vertex_buffer(0, mesh.buffer.slice(..));
                render_pass.draw(0..mesh.vertex_count, range);
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}
