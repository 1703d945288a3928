//! Shape tessellation for 2D primitives

use glam::Vec2;

use super::vertex::Vertex;

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(origin: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let (x0, y0) = (origin.x, origin.y);
    let (x1, y1) = (origin.x + size.x, origin.y + size.y);

    vec![
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Generate vertices for a thick line segment between two points
pub fn line(from: Vec2, to: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (to - from).normalize_or_zero();
    if dir == Vec2::ZERO {
        return Vec::new();
    }
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);

    let a0 = from + perp;
    let a1 = from - perp;
    let b0 = to + perp;
    let b1 = to - perp;

    vec![
        Vertex::new(a0.x, a0.y, color),
        Vertex::new(a1.x, a1.y, color),
        Vertex::new(b0.x, b0.y, color),
        Vertex::new(b0.x, b0.y, color),
        Vertex::new(a1.x, a1.y, color),
        Vertex::new(b1.x, b1.y, color),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_corners() {
        let color = [1.0, 0.0, 0.0, 1.0];
        let verts = rect(Vec2::new(10.0, 20.0), Vec2::new(50.0, 30.0), color);
        assert_eq!(verts.len(), 6);

        let xs: Vec<f32> = verts.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = verts.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 10.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 60.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 20.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 50.0);
    }

    #[test]
    fn test_line_width() {
        let color = [0.0, 0.0, 1.0, 1.0];
        let verts = line(Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0), 10.0, color);
        assert_eq!(verts.len(), 6);

        // A horizontal line of width 10 spans y in [-5, 5]
        let ys: Vec<f32> = verts.iter().map(|v| v.position[1]).collect();
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), -5.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 5.0);
    }

    #[test]
    fn test_degenerate_line_is_empty() {
        let p = Vec2::new(42.0, 7.0);
        assert!(line(p, p, 3.0, [0.0; 4]).is_empty());
    }
}
