//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Clip-space position with a flat RGB color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 3],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 3]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
            ],
        }
    }
}

/// Flat RGB color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub const fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const BALL: Color = Color::new(1.0, 1.0, 1.0);
    pub const LEFT_PADDLE: Color = Color::new(1.0, 0.0, 0.0);
    pub const RIGHT_PADDLE: Color = Color::new(0.0, 0.0, 1.0);
    pub const BACKGROUND: wgpu::Color = wgpu::Color::BLACK;
}
