//! Renderer failures
//!
//! Every variant is fatal for the game; callers log it and exit.

use std::fmt;

use thiserror::Error;

/// Shader stage, for compile diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => write!(f, "vertex"),
            ShaderStage::Fragment => write!(f, "fragment"),
        }
    }
}

#[derive(Error, Debug)]
pub enum RenderError {
    /// Window could not back a surface
    #[error("failed to create surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    /// No GPU adapter compatible with the surface
    #[error("no suitable GPU adapter: {0}")]
    NoAdapter(#[from] wgpu::RequestAdapterError),

    /// Adapter refused to open a device
    #[error("failed to create device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),

    /// Surface offers no texture format or alpha mode
    #[error("surface reports no usable format")]
    UnsupportedSurface,

    /// Shader source failed to compile; `log` is the backend's message
    #[error("failed to compile {stage} shader: {log}")]
    ShaderCompile { stage: ShaderStage, log: String },

    /// Vertex and fragment stages could not be linked into a pipeline
    #[error("failed to link shader program: {log}")]
    PipelineLink { log: String },

    /// Rectangle and color batches passed to a draw call differ in length
    #[error("draw_rectangles: {rects} rectangles but {colors} colors")]
    BatchMismatch { rects: usize, colors: usize },

    /// Frame could not be acquired and the surface cannot recover
    #[error("surface error: {0}")]
    Surface(#[from] wgpu::SurfaceError),
}
