//! Scene building - turns a session snapshot into vertices
//!
//! Draw order: pickup zone (waiting only), layered crayon ink, fitted circle,
//! cursor. Ink jitter is derived from the stroke index so the same stroke
//! always renders the same way and the session never stores it.

use super::shapes::{
    create_circle_vertices, create_line_vertices, create_ring_vertices, map_to_clip_space, Vertex,
};
use crate::game::{GamePhase, GameSession};
use crate::physics::Point;

/// Colors for different visualization elements
pub mod colors {
    /// Fitted circle overlay
    pub const FIT: [f32; 4] = [0.255, 0.965, 0.580, 0.35];
    /// Cursor while pinching
    pub const CURSOR_ACTIVE: [f32; 4] = [1.0, 0.878, 0.400, 0.9];
    /// Cursor with an open hand
    pub const CURSOR_IDLE: [f32; 4] = [0.937, 0.278, 0.435, 0.5];
    /// Crayon pickup zone
    pub const PICKUP_ZONE: [f32; 4] = [1.0, 0.820, 0.400, 0.4];
    /// Background
    pub const BACKGROUND: wgpu::Color = wgpu::Color {
        r: 0.051, g: 0.063, b: 0.090, a: 1.0
    };
}

/// One pass of crayon ink
pub struct InkLayer {
    pub color: [f32; 4],
    pub width: f32,
}

/// Wide soft base, mid tone, light highlight
pub const INK_LAYERS: [InkLayer; 3] = [
    InkLayer { color: [1.0, 0.176, 0.333, 0.9], width: 26.0 },
    InkLayer { color: [1.0, 0.310, 0.431, 0.6], width: 16.0 },
    InkLayer { color: [1.0, 0.839, 0.875, 0.45], width: 9.0 },
];

/// Jitter amplitude as a fraction of layer width
const JITTER_SCALE: f32 = 0.35;

const FIT_RING_WIDTH: f32 = 6.0;
const CURSOR_RADIUS_ACTIVE: f32 = 16.0;
const CURSOR_RADIUS_IDLE: f32 = 12.0;
const RING_SEGMENTS: u32 = 96;
const JOINT_SEGMENTS: u32 = 10;

/// Cheap deterministic hash → [0, 1)
fn unit_hash(mut x: u32) -> f32 {
    // xorshift-multiply mix
    x ^= x >> 16;
    x = x.wrapping_mul(0x7feb_352d);
    x ^= x >> 15;
    x = x.wrapping_mul(0x846c_a68b);
    x ^= x >> 16;
    (x >> 8) as f32 / (1u32 << 24) as f32
}

/// Per-point, per-layer ink offset in pixels
pub fn ink_jitter(index: usize, layer: usize, width: f32) -> (f32, f32) {
    let seed = (index as u32).wrapping_mul(INK_LAYERS.len() as u32 * 2) + layer as u32 * 2;
    let amplitude = width * JITTER_SCALE;
    (
        (unit_hash(seed) - 0.5) * amplitude,
        (unit_hash(seed + 1) - 0.5) * amplitude,
    )
}

fn build_ink_vertices(points: &[Point]) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    if points.len() < 2 {
        return vertices;
    }

    for (layer_idx, layer) in INK_LAYERS.iter().enumerate() {
        let inked: Vec<(f32, f32)> = points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let (jx, jy) = ink_jitter(i, layer_idx, layer.width);
                (p.x as f32 + jx, p.y as f32 + jy)
            })
            .collect();

        for pair in inked.windows(2) {
            let ((x1, y1), (x2, y2)) = (pair[0], pair[1]);
            vertices.extend(create_line_vertices(x1, y1, x2, y2, layer.width, layer.color));
        }
        // Round joins and caps
        for &(x, y) in &inked {
            vertices.extend(create_circle_vertices(x, y, layer.width / 2.0, layer.color, JOINT_SEGMENTS));
        }
    }

    vertices
}

/// Everything to draw this frame, in clip space
pub fn build_scene(session: &GameSession) -> Vec<Vertex> {
    let mut vertices = Vec::new();

    if session.phase() == GamePhase::Waiting {
        let zone = session.crayon();
        vertices.extend(create_ring_vertices(
            zone.anchor.x as f32,
            zone.anchor.y as f32,
            zone.radius as f32,
            2.0,
            colors::PICKUP_ZONE,
            RING_SEGMENTS,
        ));
    }

    vertices.extend(build_ink_vertices(session.stroke().points()));

    if let Some(result) = session.score() {
        vertices.extend(create_ring_vertices(
            result.center.x as f32,
            result.center.y as f32,
            result.radius as f32,
            FIT_RING_WIDTH,
            colors::FIT,
            RING_SEGMENTS,
        ));
    }

    if let Some(cursor) = session.cursor() {
        let (radius, color) = if session.is_pinching() {
            (CURSOR_RADIUS_ACTIVE, colors::CURSOR_ACTIVE)
        } else {
            (CURSOR_RADIUS_IDLE, colors::CURSOR_IDLE)
        };
        vertices.extend(create_circle_vertices(cursor.x as f32, cursor.y as f32, radius, color, 24));
    }

    map_to_clip_space(&mut vertices, session.geometry());
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::PinchEdge;

    #[test]
    fn test_jitter_is_deterministic_and_bounded() {
        for layer in 0..INK_LAYERS.len() {
            let width = INK_LAYERS[layer].width;
            for i in 0..200 {
                let (jx, jy) = ink_jitter(i, layer, width);
                assert_eq!((jx, jy), ink_jitter(i, layer, width));
                let limit = width * JITTER_SCALE / 2.0;
                assert!(jx.abs() <= limit && jy.abs() <= limit);
            }
        }
        assert_ne!(ink_jitter(3, 0, 26.0), ink_jitter(4, 0, 26.0));
    }

    #[test]
    fn test_waiting_scene_shows_pickup_zone() {
        let session = GameSession::default();
        let vertices = build_scene(&session);
        assert_eq!(vertices.len(), (RING_SEGMENTS * 6) as usize);
    }

    #[test]
    fn test_drawing_scene_has_ink() {
        let mut session = GameSession::default();
        session.set_crayon_anchor(Point::new(100.0, 100.0));
        session.advance(PinchEdge::Started, Point::new(100.0, 100.0));
        session.advance(PinchEdge::Held, Point::new(120.0, 100.0));
        session.advance(PinchEdge::Held, Point::new(140.0, 110.0));
        session.advance(PinchEdge::Held, Point::new(160.0, 100.0));
        assert_eq!(session.stroke().len(), 3);

        let vertices = build_scene(&session);
        let per_layer = 2 * 6 + 3 * (JOINT_SEGMENTS * 3) as usize;
        assert_eq!(vertices.len(), per_layer * INK_LAYERS.len());
        for v in &vertices {
            assert!(v.position[0].abs() <= 1.5 && v.position[1].abs() <= 1.5);
        }
    }
}
