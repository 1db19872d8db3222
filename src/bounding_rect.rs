//! Bounding rectangle calculation.
//!
//! Axis-aligned bounds of everything a vertex source emits. Curve control
//! points count as vertices, so the result encloses the control polygon,
//! which in turn encloses the curves.

use crate::basics::{is_stop, is_vertex, Rect, VertexSource};

/// Compute the bounding rectangle of a single path from a vertex source.
///
/// Rewinds the vertex source to `path_id`, iterates all vertices, and
/// returns the axis-aligned bounding box. Returns `None` if no vertices
/// are found.
pub fn bounding_rect_single(vs: &mut dyn VertexSource, path_id: u32) -> Option<Rect> {
    let mut x = 0.0;
    let mut y = 0.0;
    let mut bounds: Option<(f64, f64, f64, f64)> = None;

    vs.rewind(path_id);
    loop {
        let cmd = vs.vertex(&mut x, &mut y);
        if is_stop(cmd) {
            break;
        }
        if !is_vertex(cmd) {
            continue;
        }
        bounds = Some(match bounds {
            None => (x, y, x, y),
            Some((x1, y1, x2, y2)) => (x1.min(x), y1.min(y), x2.max(x), y2.max(y)),
        });
    }

    bounds.map(|(x1, y1, x2, y2)| Rect::new(x1, y1, x2 - x1, y2 - y1))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basics::{PATH_CMD_END_POLY, PATH_CMD_LINE_TO, PATH_CMD_MOVE_TO, PATH_CMD_STOP};

    /// Minimal test vertex source: a closed triangle.
    struct Triangle {
        vertices: [(f64, f64); 3],
        index: usize,
    }

    impl Triangle {
        fn new(x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) -> Self {
            Self {
                vertices: [(x1, y1), (x2, y2), (x3, y3)],
                index: 0,
            }
        }
    }

    impl VertexSource for Triangle {
        fn rewind(&mut self, _path_id: u32) {
            self.index = 0;
        }

        fn vertex(&mut self, x: &mut f64, y: &mut f64) -> u32 {
            let i = self.index;
            self.index += 1;
            match i {
                0..=2 => {
                    *x = self.vertices[i].0;
                    *y = self.vertices[i].1;
                    if i == 0 {
                        PATH_CMD_MOVE_TO
                    } else {
                        PATH_CMD_LINE_TO
                    }
                }
                3 => {
                    // end_poly coordinates are not vertices
                    *x = 1000.0;
                    *y = 1000.0;
                    PATH_CMD_END_POLY
                }
                _ => PATH_CMD_STOP,
            }
        }
    }

    #[test]
    fn test_bounding_rect_single_triangle() {
        let mut tri = Triangle::new(10.0, 20.0, 50.0, 80.0, 30.0, 10.0);
        let r = bounding_rect_single(&mut tri, 0).unwrap();
        assert!((r.x - 10.0).abs() < 1e-10);
        assert!((r.y - 10.0).abs() < 1e-10);
        assert!((r.right() - 50.0).abs() < 1e-10);
        assert!((r.bottom() - 80.0).abs() < 1e-10);
    }

    #[test]
    fn test_bounding_rect_single_rewinds() {
        let mut tri = Triangle::new(0.0, 0.0, 4.0, 0.0, 0.0, 3.0);
        let first = bounding_rect_single(&mut tri, 0);
        let second = bounding_rect_single(&mut tri, 0);
        assert_eq!(first, second);
        assert_eq!(first, Some(Rect::new(0.0, 0.0, 4.0, 3.0)));
    }

    struct Nothing;

    impl VertexSource for Nothing {
        fn rewind(&mut self, _path_id: u32) {}
        fn vertex(&mut self, _x: &mut f64, _y: &mut f64) -> u32 {
            PATH_CMD_STOP
        }
    }

    #[test]
    fn test_bounding_rect_single_empty() {
        assert_eq!(bounding_rect_single(&mut Nothing, 0), None);
    }
}
