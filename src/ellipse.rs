//! Oval and circle builders.
//!
//! An oval is four cubic quadrants using the circle constant
//! [`PATH_KAPPA`], starting at 12 o'clock.

use crate::basics::{Direction, Point, Rect};
use crate::bezier_arc::PATH_KAPPA;
use crate::path_storage::Path;

impl Path {
    /// Append the ellipse inscribed in `rect` as a closed subpath of four
    /// cubic curves. A null rectangle adds nothing.
    pub fn add_oval(&mut self, rect: &Rect, dir: Direction) {
        if rect.is_null() {
            log::debug!("add_oval: skipping null rect {rect:?}");
            return;
        }

        let x = rect.x;
        let y = rect.y;

        let w = rect.width;
        let w2 = rect.width / 2.0;
        let w2k = w2 * PATH_KAPPA;

        let h = rect.height;
        let h2 = rect.height / 2.0;
        let h2k = h2 * PATH_KAPPA;

        // 1 move + 4 cubic + 1 close
        self.reserve(14, 7);
        self.move_to(Point::new(x + w2, y));
        match dir {
            Direction::Cw => {
                // 12 -> 3 o'clock
                self.cubic_to(
                    Point::new(x + w2 + w2k, y),
                    Point::new(x + w, y + h2 - h2k),
                    Point::new(x + w, y + h2),
                );
                // 3 -> 6
                self.cubic_to(
                    Point::new(x + w, y + h2 + h2k),
                    Point::new(x + w2 + w2k, y + h),
                    Point::new(x + w2, y + h),
                );
                // 6 -> 9
                self.cubic_to(
                    Point::new(x + w2 - w2k, y + h),
                    Point::new(x, y + h2 + h2k),
                    Point::new(x, y + h2),
                );
                // 9 -> 12
                self.cubic_to(
                    Point::new(x, y + h2 - h2k),
                    Point::new(x + w2 - w2k, y),
                    Point::new(x + w2, y),
                );
            }
            Direction::Ccw => {
                // 12 -> 9 o'clock
                self.cubic_to(
                    Point::new(x + w2 - w2k, y),
                    Point::new(x, y + h2 - h2k),
                    Point::new(x, y + h2),
                );
                // 9 -> 6
                self.cubic_to(
                    Point::new(x, y + h2 + h2k),
                    Point::new(x + w2 - w2k, y + h),
                    Point::new(x + w2, y + h),
                );
                // 6 -> 3
                self.cubic_to(
                    Point::new(x + w2 + w2k, y + h),
                    Point::new(x + w, y + h2 + h2k),
                    Point::new(x + w, y + h2),
                );
                // 3 -> 12
                self.cubic_to(
                    Point::new(x + w, y + h2 - h2k),
                    Point::new(x + w2 + w2k, y),
                    Point::new(x + w2, y),
                );
            }
        }
        self.close();
    }

    /// Append a circle of radius `radius` centred on `(cx, cy)`.
    pub fn add_circle(&mut self, cx: f64, cy: f64, radius: f64, dir: Direction) {
        self.add_oval(
            &Rect::new(cx - radius, cy - radius, 2.0 * radius, 2.0 * radius),
            dir,
        );
    }
}
