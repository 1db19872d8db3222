//! Rectangle and rounded rectangle builders.
//!
//! Both shapes start at the top-right corner. A rounded rectangle is drawn
//! as four quarter-ellipse arcs joined by straight edges; the corner
//! diameters are clamped to the rectangle's extents.

use crate::basics::{Direction, Point, Rect};
use crate::math::is_zero;
use crate::path_storage::Path;

impl Path {
    /// Append a closed rectangle as a new subpath.
    ///
    /// Clockwise goes right edge first (down), counter-clockwise goes top
    /// edge first (left). A null rectangle adds nothing.
    pub fn add_rect(&mut self, rect: &Rect, dir: Direction) {
        if rect.is_null() {
            log::debug!("add_rect: skipping null rect {rect:?}");
            return;
        }

        let x = rect.x;
        let y = rect.y;
        let w = rect.width;
        let h = rect.height;

        // 1 move + 4 line + 1 close
        self.reserve(6, 6);
        self.move_to(Point::new(x + w, y));
        match dir {
            Direction::Cw => {
                self.line_to(Point::new(x + w, y + h));
                self.line_to(Point::new(x, y + h));
                self.line_to(Point::new(x, y));
            }
            Direction::Ccw => {
                self.line_to(Point::new(x, y));
                self.line_to(Point::new(x, y + h));
                self.line_to(Point::new(x + w, y + h));
            }
        }
        self.close();
    }

    /// Append a closed rectangle with elliptical corners of radii `rx`, `ry`.
    ///
    /// Radii larger than half the rectangle are clamped. If either radius is
    /// zero the plain rectangle is added instead.
    pub fn add_round_rect(&mut self, rect: &Rect, rx: f64, ry: f64, dir: Direction) {
        if is_zero(rx) || is_zero(ry) {
            self.add_rect(rect, dir);
            return;
        }
        if rect.is_null() {
            log::debug!("add_round_rect: skipping null rect {rect:?}");
            return;
        }

        let x = rect.x;
        let y = rect.y;
        let w = rect.width;
        let h = rect.height;

        // corner ellipse diameters
        let rx = (2.0 * rx).min(w);
        let ry = (2.0 * ry).min(h);

        // 1 move + 4 (line + cubic) + 1 close
        self.reserve(17, 10);
        self.move_to(Point::new(x + w, y + ry / 2.0));
        match dir {
            Direction::Cw => {
                self.arc_to(&Rect::new(x + w - rx, y + h - ry, rx, ry), 0.0, -90.0, false);
                self.arc_to(&Rect::new(x, y + h - ry, rx, ry), -90.0, -90.0, false);
                self.arc_to(&Rect::new(x, y, rx, ry), -180.0, -90.0, false);
                self.arc_to(&Rect::new(x + w - rx, y, rx, ry), -270.0, -90.0, false);
            }
            Direction::Ccw => {
                self.arc_to(&Rect::new(x + w - rx, y, rx, ry), 0.0, 90.0, false);
                self.arc_to(&Rect::new(x, y, rx, ry), 90.0, 90.0, false);
                self.arc_to(&Rect::new(x, y + h - ry, rx, ry), 180.0, 90.0, false);
                self.arc_to(&Rect::new(x + w - rx, y + h - ry, rx, ry), 270.0, 90.0, false);
            }
        }
        self.close();
    }
}

// ============================================================================
// Tests
// ============================================================================
