//! Drawing primitives: rectangle, filled circle, line.
//!
//! Every primitive clips per pixel against the surface bounds, so calls that
//! reach (or sit entirely) outside the surface are safe no-ops rather than
//! errors. Each takes a [`Blend`] mode choosing between raw overwrite and
//! alpha-over compositing.

use crate::color::{Blend, Color};
use crate::surface::Surface;

impl Surface {
    /// Fill the rectangle `[x, x+w) x [y, y+h)` clipped to the surface.
    ///
    /// Non-positive `w` or `h` draws nothing (empty region, not an error).
    pub fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color, blend: Blend) {
        for dy in 0..h {
            let yi = y + dy;
            if yi < 0 || yi >= self.height() as i32 {
                continue;
            }
            for dx in 0..w {
                let xi = x + dx;
                if xi < 0 || xi >= self.width() as i32 {
                    continue;
                }
                self.plot(xi, yi, color, blend);
            }
        }
    }

    /// Fill the disk of radius `r` centered at (cx, cy): every pixel of the
    /// half-open bounding box `[cx-r, cx+r) x [cy-r, cy+r)` whose squared
    /// distance from the center is at most `r*r`.
    ///
    /// Negative `r` behaves as `r = 0` (degenerate, nothing drawn).
    pub fn draw_circle(&mut self, cx: i32, cy: i32, r: i32, color: Color, blend: Blend) {
        let r = r.max(0);
        for yi in (cy - r)..(cy + r) {
            if yi < 0 || yi >= self.height() as i32 {
                continue;
            }
            for xi in (cx - r)..(cx + r) {
                if xi < 0 || xi >= self.width() as i32 {
                    continue;
                }
                let dx = xi - cx;
                let dy = yi - cy;
                if dx * dx + dy * dy <= r * r {
                    self.plot(xi, yi, color, blend);
                }
            }
        }
    }

    /// Rasterize the segment from (x0, y0) to (x1, y1) with a three-branch
    /// parametric stepper.
    ///
    /// The interpolation is `y = y1 + dy * (x - orig_x1) / dx` with
    /// truncating integer division, not rounding and not Bresenham; a
    /// different formula shifts pixels by up to one at the endpoints.
    /// The iterated range is half-open after sorting, so the endpoint with
    /// the larger major coordinate is never plotted. That endpoint exclusion
    /// is deliberate, kept for bit-exact compatibility, and pinned by tests.
    pub fn draw_line(
        &mut self,
        mut x0: i32,
        mut y0: i32,
        mut x1: i32,
        mut y1: i32,
        color: Color,
        blend: Blend,
    ) {
        let dx = x1 - x0;
        let dy = y1 - y0;
        if dx != 0 {
            if dx.abs() >= dy.abs() {
                // Shallow slope: step x, interpolate y
                let orig_x1 = x1;
                if x0 > x1 {
                    std::mem::swap(&mut x0, &mut x1);
                }
                for x in x0..x1 {
                    if x < 0 || x >= self.width() as i32 {
                        continue;
                    }
                    let y = y1 + dy * (x - orig_x1) / dx;
                    self.plot(x, y, color, blend);
                }
            } else {
                // Steep slope: step y, interpolate x
                let orig_y1 = y1;
                if y0 > y1 {
                    std::mem::swap(&mut y0, &mut y1);
                }
                for y in y0..y1 {
                    if y < 0 || y >= self.height() as i32 {
                        continue;
                    }
                    let x = x1 + dx * (y - orig_y1) / dy;
                    self.plot(x, y, color, blend);
                }
            }
        } else {
            // Vertical: x clips once, y clips per pixel
            let x = x1;
            if x < 0 || x >= self.width() as i32 {
                return;
            }
            if y0 > y1 {
                std::mem::swap(&mut y0, &mut y1);
            }
            for y in y0..y1 {
                self.plot(x, y, color, blend);
            }
        }
    }
}
