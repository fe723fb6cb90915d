//! Shape primitives - triangle-list vertices for dots, segments and rings
//!
//! Shapes are built in surface pixels and mapped to clip space afterwards, so
//! circles stay round on non-square canvases.

use std::f32::consts::TAU;

use crate::gesture::SurfaceGeometry;
use crate::physics::Point;

/// Vertex structure for rendering colored shapes
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    const ATTRIBS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2,
        1 => Float32x4
    ];

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

fn vertex(x: f32, y: f32, color: [f32; 4]) -> Vertex {
    Vertex { position: [x, y], color }
}

/// Filled circle (triangle fan as a list)
pub fn create_circle_vertices(
    cx: f32,
    cy: f32,
    radius: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let angle1 = (i as f32 / segments as f32) * TAU;
        let angle2 = ((i + 1) as f32 / segments as f32) * TAU;

        vertices.push(vertex(cx, cy, color));
        vertices.push(vertex(cx + radius * angle1.cos(), cy + radius * angle1.sin(), color));
        vertices.push(vertex(cx + radius * angle2.cos(), cy + radius * angle2.sin(), color));
    }

    vertices
}

/// Line segment as a quad of total thickness `width`
pub fn create_line_vertices(
    x1: f32, y1: f32,
    x2: f32, y2: f32,
    width: f32,
    color: [f32; 4],
) -> Vec<Vertex> {
    let dx = x2 - x1;
    let dy = y2 - y1;
    let len = (dx * dx + dy * dy).sqrt();

    if len < 0.001 { return vec![]; }

    // Perpendicular half-thickness
    let half = width / 2.0;
    let px = -dy / len * half;
    let py = dx / len * half;

    vec![
        vertex(x1 - px, y1 - py, color),
        vertex(x1 + px, y1 + py, color),
        vertex(x2 + px, y2 + py, color),

        vertex(x1 - px, y1 - py, color),
        vertex(x2 + px, y2 + py, color),
        vertex(x2 - px, y2 - py, color),
    ]
}

/// Circle outline of thickness `width`, centred on `radius`
pub fn create_ring_vertices(
    cx: f32,
    cy: f32,
    radius: f32,
    width: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let inner = (radius - width / 2.0).max(0.0);
    let outer = radius + width / 2.0;
    let mut vertices = Vec::with_capacity((segments * 6) as usize);

    for i in 0..segments {
        let (s1, c1) = ((i as f32 / segments as f32) * TAU).sin_cos();
        let (s2, c2) = (((i + 1) as f32 / segments as f32) * TAU).sin_cos();

        let a = vertex(cx + inner * c1, cy + inner * s1, color);
        let b = vertex(cx + outer * c1, cy + outer * s1, color);
        let c = vertex(cx + outer * c2, cy + outer * s2, color);
        let d = vertex(cx + inner * c2, cy + inner * s2, color);
        vertices.extend_from_slice(&[a, b, c, a, c, d]);
    }

    vertices
}

/// Convert pixel-space vertices to clip space in place
pub fn map_to_clip_space(vertices: &mut [Vertex], geometry: SurfaceGeometry) {
    for v in vertices.iter_mut() {
        let (x, y) = geometry.to_clip_space(Point::new(
            f64::from(v.position[0]),
            f64::from(v.position[1]),
        ));
        v.position = [x, y];
    }
}
