//! Scene composition
//!
//! Drawing goes through the `Canvas` trait so the scene logic can be
//! exercised without a GPU. `VertexCanvas` is the production implementation:
//! it tessellates draw calls into a triangle list for the wgpu pipeline and
//! collects text ops as labels for the DOM overlay.

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::consts::*;
use crate::sim::SimState;

/// Force vector line thickness
const FORCE_LINE_WIDTH: f32 = 3.0;

/// Minimal drawing surface consumed by the scene
pub trait Canvas {
    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: [f32; 4]);
    fn rect(&mut self, origin: Vec2, size: Vec2, color: [f32; 4]);
    fn text(&mut self, text: &str, pos: Vec2);
}

/// A text label positioned in canvas pixels
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub pos: Vec2,
}

/// Canvas implementation producing GPU vertices and DOM overlay labels
#[derive(Debug, Default)]
pub struct VertexCanvas {
    pub vertices: Vec<Vertex>,
    pub labels: Vec<Label>,
}

impl VertexCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset for the next frame, keeping allocations
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.labels.clear();
    }
}

impl Canvas for VertexCanvas {
    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: [f32; 4]) {
        self.vertices.extend(shapes::line(from, to, width, color));
    }

    fn rect(&mut self, origin: Vec2, size: Vec2, color: [f32; 4]) {
        self.vertices.extend(shapes::rect(origin, size, color));
    }

    fn text(&mut self, text: &str, pos: Vec2) {
        self.labels.push(Label {
            text: text.to_string(),
            pos,
        });
    }
}

/// Draw the surface, the block, and (when enabled) the force diagram
pub fn draw_scene(state: &SimState, canvas: &mut impl Canvas) {
    let surface_y = BLOCK_Y + BLOCK_HEIGHT;
    canvas.line(
        Vec2::new(BLOCK_START_X, surface_y),
        Vec2::new(BLOCK_START_X + SURFACE_LENGTH, surface_y),
        SURFACE_THICKNESS,
        colors::SURFACE,
    );

    canvas.rect(
        Vec2::new(state.block_x, BLOCK_Y),
        Vec2::new(BLOCK_WIDTH, BLOCK_HEIGHT),
        colors::BLOCK,
    );

    if state.show_diagram {
        draw_forces(state, canvas);
    }
}

/// Force-diagram overlay: one labeled vector per force
///
/// Applied and frictional vectors scale with their magnitudes; normal and
/// gravitational magnitudes are not modeled, so those two get a fixed
/// stylized length.
fn draw_forces(state: &SimState, canvas: &mut impl Canvas) {
    let mid_y = BLOCK_Y + BLOCK_HEIGHT / 2.0;
    let mid_x = state.block_x + BLOCK_WIDTH / 2.0;

    // Applied force pushes right from the block's right face
    let start = Vec2::new(state.block_x + BLOCK_WIDTH, mid_y);
    let tip = start + Vec2::new(state.applied_force, 0.0);
    canvas.line(start, tip, FORCE_LINE_WIDTH, colors::APPLIED_FORCE);
    canvas.text("Applied Force", tip + Vec2::new(10.0, 5.0));

    // Friction opposes the motion, off the left face
    let start = Vec2::new(state.block_x, mid_y);
    let tip = start - Vec2::new(state.friction_force, 0.0);
    canvas.line(start, tip, FORCE_LINE_WIDTH, colors::FRICTION_FORCE);
    canvas.text("Friction Force", tip + Vec2::new(-80.0, 5.0));

    // Normal force, straight up from the top face
    let start = Vec2::new(mid_x, BLOCK_Y);
    let tip = start - Vec2::new(0.0, UNSCALED_FORCE_LEN);
    canvas.line(start, tip, FORCE_LINE_WIDTH, colors::NORMAL_FORCE);
    canvas.text("Normal Force", tip + Vec2::new(-30.0, -10.0));

    // Gravity, straight down from the bottom face
    let start = Vec2::new(mid_x, BLOCK_Y + BLOCK_HEIGHT);
    let tip = start + Vec2::new(0.0, UNSCALED_FORCE_LEN);
    canvas.line(start, tip, FORCE_LINE_WIDTH, colors::GRAVITY_FORCE);
    canvas.text("Gravitational Force", tip + Vec2::new(-50.0, 20.0));
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records draw calls without tessellating anything
    #[derive(Default)]
    struct RecordingCanvas {
        lines: Vec<(Vec2, Vec2, [f32; 4])>,
        rects: Vec<(Vec2, Vec2, [f32; 4])>,
        texts: Vec<Label>,
    }

    impl Canvas for RecordingCanvas {
        fn line(&mut self, from: Vec2, to: Vec2, _width: f32, color: [f32; 4]) {
            self.lines.push((from, to, color));
        }

        fn rect(&mut self, origin: Vec2, size: Vec2, color: [f32; 4]) {
            self.rects.push((origin, size, color));
        }

        fn text(&mut self, text: &str, pos: Vec2) {
            self.texts.push(Label {
                text: text.to_string(),
                pos,
            });
        }
    }

    #[test]
    fn test_scene_without_diagram() {
        let mut state = SimState::new();
        state.show_diagram = false;
        let mut canvas = RecordingCanvas::default();
        draw_scene(&state, &mut canvas);

        // Just the surface line and the block
        assert_eq!(canvas.lines.len(), 1);
        assert_eq!(canvas.rects.len(), 1);
        assert!(canvas.texts.is_empty());
    }

    #[test]
    fn test_scene_with_diagram() {
        let state = SimState::new();
        let mut canvas = RecordingCanvas::default();
        draw_scene(&state, &mut canvas);

        // Surface plus four force vectors, each labeled
        assert_eq!(canvas.lines.len(), 5);
        assert_eq!(canvas.texts.len(), 4);
        let labels: Vec<&str> = canvas.texts.iter().map(|l| l.text.as_str()).collect();
        assert!(labels.contains(&"Applied Force"));
        assert!(labels.contains(&"Friction Force"));
        assert!(labels.contains(&"Normal Force"));
        assert!(labels.contains(&"Gravitational Force"));
    }

    #[test]
    fn test_block_follows_state() {
        let mut state = SimState::new();
        state.block_x = 333.0;
        let mut canvas = RecordingCanvas::default();
        draw_scene(&state, &mut canvas);

        let (origin, size, _) = canvas.rects[0];
        assert_eq!(origin, Vec2::new(333.0, BLOCK_Y));
        assert_eq!(size, Vec2::new(BLOCK_WIDTH, BLOCK_HEIGHT));
    }

    #[test]
    fn test_force_vectors_scale_with_magnitude() {
        let mut state = SimState::new();
        state.applied_force = 140.0;
        state.friction_force = 35.0;
        let mut canvas = RecordingCanvas::default();
        draw_scene(&state, &mut canvas);

        // lines[1] = applied (points right), lines[2] = friction (points left)
        let (from, to, color) = canvas.lines[1];
        assert_eq!(color, colors::APPLIED_FORCE);
        assert_eq!(to.x - from.x, 140.0);

        let (from, to, color) = canvas.lines[2];
        assert_eq!(color, colors::FRICTION_FORCE);
        assert_eq!(from.x - to.x, 35.0);

        // Normal and gravity keep the stylized length
        let (from, to, _) = canvas.lines[3];
        assert_eq!(from.y - to.y, UNSCALED_FORCE_LEN);
        let (from, to, _) = canvas.lines[4];
        assert_eq!(to.y - from.y, UNSCALED_FORCE_LEN);
    }

    #[test]
    fn test_vertex_canvas_tessellates() {
        let state = SimState::new();
        let mut canvas = VertexCanvas::new();
        draw_scene(&state, &mut canvas);

        // 5 lines + 1 rect, 6 vertices each
        assert_eq!(canvas.vertices.len(), 36);
        assert_eq!(canvas.labels.len(), 4);

        canvas.clear();
        assert!(canvas.vertices.is_empty());
        assert!(canvas.labels.is_empty());
    }
}
