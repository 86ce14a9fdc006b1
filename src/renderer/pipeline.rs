//! wgpu render pipeline setup

use glam::Vec2;
use wgpu::util::DeviceExt;

use super::Canvas;
use super::error::{RenderError, ShaderStage};
use super::quads::build_vertices;
use super::vertex::{Color, Vertex, colors};
use crate::sim::Rect;

/// Vertex and fragment WGSL sources
#[derive(Debug, Clone, Copy)]
pub struct ShaderSources<'a> {
    pub vertex: &'a str,
    pub fragment: &'a str,
}

impl Default for ShaderSources<'static> {
    fn default() -> Self {
        Self {
            vertex: include_str!("shaders/vertex.wgsl"),
            fragment: include_str!("shaders/fragment.wgsl"),
        }
    }
}

/// Main render state
pub struct RenderState {
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pub pipeline: wgpu::RenderPipeline,
    pub vertex_buffer: Option<wgpu::Buffer>,
    pub vertex_count: u32,
    /// Court size in pixels, used for the clip-space mapping. Fixed for the
    /// life of the renderer; a resized window stretches the court.
    pub screen: Vec2,
}

impl RenderState {
    /// `width`/`height` size the surface; `court` is the logical area drawn into it
    pub async fn new(
        surface: wgpu::Surface<'static>,
        adapter: &wgpu::Adapter,
        width: u32,
        height: u32,
        court: Vec2,
        sources: ShaderSources<'_>,
    ) -> Result<Self, RenderError> {
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("gl-pong-device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_defaults(),
                memory_hints: Default::default(),
                trace: Default::default(),
                experimental_features: Default::default(),
            })
            .await?;

        let surface_caps = surface.get_capabilities(adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .or(surface_caps.formats.first())
            .copied()
            .ok_or(RenderError::UnsupportedSurface)?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .ok_or(RenderError::UnsupportedSurface)?;
        log::debug!("Using surface format: {:?}", surface_format);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width,
            height,
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let vertex_shader =
            compile_shader(&device, ShaderStage::Vertex, sources.vertex).await?;
        let fragment_shader =
            compile_shader(&device, ShaderStage::Fragment, sources.fragment).await?;

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pipeline_layout"),
            bind_group_layouts: &[],
            immediate_size: 0,
        });

        // Entry point or interface mismatches between the two stages surface here
        let scope = device.push_error_scope(wgpu::ErrorFilter::Validation);
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("render_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &vertex_shader,
                entry_point: Some("vs_main"),
                buffers: &[Vertex::desc()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &fragment_shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: config.format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
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
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });
        if let Some(err) = scope.pop().await {
            return Err(RenderError::PipelineLink {
                log: err.to_string(),
            });
        }

        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            vertex_buffer: None,
            vertex_count: 0,
            screen: court,
        })
    }

    /// Match the surface to a new window size. Zero sizes (minimized) are ignored.
    pub fn resize(&mut self, new_width: u32, new_height: u32) {
        if new_width > 0 && new_height > 0 {
            self.config.width = new_width;
            self.config.height = new_height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Reconfigure the surface after it was lost or became outdated
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    /// Upload a batch of colored rectangles and draw one frame
    pub fn draw_rectangles(&mut self, rects: &[Rect], colors: &[Color]) -> Result<(), RenderError> {
        let vertices = build_vertices(rects, colors, self.screen)?;

        // Recreate buffer each frame (three quads; not worth a ring buffer)
        self.vertex_count = vertices.len() as u32;
        self.vertex_buffer = if vertices.is_empty() {
            None
        } else {
            Some(
                self.device
                    .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                        label: Some("vertex_buffer"),
                        contents: bytemuck::cast_slice(&vertices),
                        usage: wgpu::BufferUsages::VERTEX,
                    }),
            )
        };

        let output = match self.surface.get_current_texture() {
            Ok(output) => output,
            Err(e @ (wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated)) => {
                log::warn!("Surface {:?}, reconfiguring", e);
                self.reconfigure();
                return Ok(());
            }
            Err(wgpu::SurfaceError::Timeout) => {
                log::warn!("Surface timeout, skipping frame");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("render_encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("render_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(colors::BACKGROUND),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            if let Some(buffer) = &self.vertex_buffer {
                render_pass.set_pipeline(&self.pipeline);
                render_pass.set_vertex_buffer(0, buffer.slice(..));
                render_pass.draw(0..self.vertex_count, 0..1);
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

impl Canvas for RenderState {
    fn draw_rectangles(&mut self, rects: &[Rect], colors: &[Color]) -> Result<(), RenderError> {
        RenderState::draw_rectangles(self, rects, colors)
    }
}

/// Compile one WGSL stage, turning validation errors into a diagnostic
async fn compile_shader(
    device: &wgpu::Device,
    stage: ShaderStage,
    source: &str,
) -> Result<wgpu::ShaderModule, RenderError> {
    let scope = device.push_error_scope(wgpu::ErrorFilter::Validation);
    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(match stage {
            ShaderStage::Vertex => "vertex_shader",
            ShaderStage::Fragment => "fragment_shader",
        }),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    });
    match scope.pop().await {
        Some(err) => Err(RenderError::ShaderCompile {
            stage,
            log: err.to_string(),
        }),
        None => Ok(module),
    }
}
