// The persistent drawing layer: same size as the camera frame, starts fully
// transparent, and only ever changes by drawing segments or erasing discs.
// Visual: the ink that stays on screen while the live video moves under it.

use crate::error::{Error, Result};
use crate::gamma::GammaLut;
use crate::types::{trace_line, Color, FrameBuffer, Point};

/// Fully transparent canvas pixel.
pub const TRANSPARENT: u32 = 0;

const OPAQUE: u32 = 0xFF_00_00_00;

pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<u32>, // 0xAARRGGBB, alpha 0 = nothing drawn here
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![TRANSPARENT; width * height] }
    }

    /// Raw ARGB value at (x,y), `None` outside the canvas.
    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    pub fn is_painted(&self, x: i32, y: i32) -> bool {
        self.pixel(x, y).is_some_and(|px| px >> 24 != 0)
    }

    pub fn painted_count(&self) -> usize {
        self.pixels.iter().filter(|&&px| px >> 24 != 0).count()
    }

    /// Back to fully transparent.
    pub fn clear(&mut self) {
        self.pixels.fill(TRANSPARENT);
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    #[inline]
    fn put(&mut self, x: i32, y: i32, argb: u32) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = argb;
        }
    }

    /// Rasterize a line of `thickness` pixels from `from` to `to`.
    /// Thickness 0/1 is a one-pixel Bresenham line; thicker lines are filled
    /// capsules (round caps), so joints between consecutive segments of a
    /// stroke have no notches however far apart the points are.
    pub fn draw_segment(&mut self, from: Point, to: Point, color: Color, thickness: u32) {
        let ink = OPAQUE | (color.0 & 0x00_FF_FF_FF);
        if thickness <= 1 {
            if !self.misses_entirely(from, to) {
                trace_line(from, to, |x, y| self.put(x, y, ink));
            }
            return;
        }

        let r = thickness as f32 / 2.0;
        let r2 = r * r;
        let pad = r.ceil() as i32;

        // Scan only the clipped bounding box of the capsule.
        let x0 = from.x.min(to.x).saturating_sub(pad).max(0);
        let y0 = from.y.min(to.y).saturating_sub(pad).max(0);
        let x1 = from.x.max(to.x).saturating_add(pad).min(self.width as i32 - 1);
        let y1 = from.y.max(to.y).saturating_add(pad).min(self.height as i32 - 1);

        let (ax, ay) = (from.x as f32, from.y as f32);
        let (dx, dy) = (to.x as f32 - ax, to.y as f32 - ay);
        let len2 = dx * dx + dy * dy;

        for y in y0..=y1 {
            for x in x0..=x1 {
                let (px, py) = (x as f32 - ax, y as f32 - ay);
                // Closest point on the segment, as a fraction along it.
                let t = if len2 > 0.0 { ((px * dx + py * dy) / len2).clamp(0.0, 1.0) } else { 0.0 };
                let (ex, ey) = (px - t * dx, py - t * dy);
                if ex * ex + ey * ey <= r2 {
                    self.put(x, y, ink);
                }
            }
        }
    }

    /// Both ends on the same outer side of the canvas: nothing to plot.
    fn misses_entirely(&self, a: Point, b: Point) -> bool {
        let (w, h) = (self.width as i32, self.height as i32);
        (a.x < 0 && b.x < 0) || (a.y < 0 && b.y < 0) || (a.x >= w && b.x >= w) || (a.y >= h && b.y >= h)
    }

    /// Clear every pixel within `radius` of `center` (inclusive).
    pub fn erase_region(&mut self, center: Point, radius: u32) {
        let r = i32::try_from(radius).unwrap_or(i32::MAX);
        let r2 = (radius as i64) * (radius as i64);
        let (y0, y1) = (center.y.saturating_sub(r).max(0), center.y.saturating_add(r).min(self.height as i32 - 1));
        let (x0, x1) = (center.x.saturating_sub(r).max(0), center.x.saturating_add(r).min(self.width as i32 - 1));
        for y in y0..=y1 {
            for x in x0..=x1 {
                let (dx, dy) = (x as i64 - center.x as i64, y as i64 - center.y as i64);
                if dx * dx + dy * dy <= r2 {
                    self.put(x, y, TRANSPARENT);
                }
            }
        }
    }

    /// New frame: `base` with the ink laid over it at `opacity` (0..1).
    /// Neither `base` nor the canvas is modified.
    pub fn compose(&self, base: &FrameBuffer, opacity: f32, lut: &GammaLut) -> Result<FrameBuffer> {
        if base.width != self.width || base.height != self.height {
            return Err(Error::FrameSize {
                expected: (self.width, self.height),
                actual: (base.width, base.height),
            });
        }

        let opacity = opacity.clamp(0.0, 1.0);
        let mut out = base.clone();
        for (dst, &ink) in out.pixels.iter_mut().zip(self.pixels.iter()) {
            let a = ((ink >> 24) as f32 / 255.0) * opacity;
            if a <= 0.0 { continue; }            // visual: raw live pixel
            if a >= 1.0 {                        // visual: solid ink
                *dst = ink & 0x00_FF_FF_FF;
                continue;
            }
            *dst = lut.mix(*dst, ink, a);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inked(x: i32, y: i32, c: &Canvas) -> bool {
        c.is_painted(x, y)
    }

    #[test]
    fn new_canvas_is_transparent() {
        let c = Canvas::new(8, 6);
        assert_eq!(c.painted_count(), 0);
        assert_eq!(c.pixel(7, 5), Some(TRANSPARENT));
        assert_eq!(c.pixel(8, 0), None);
    }

    #[test]
    fn thick_segment_has_no_gaps_for_fast_motion() {
        let mut c = Canvas::new(320, 240);
        c.draw_segment(Point::new(10, 10), Point::new(300, 200), Color::RED, 5);
        for x in 10..=300 {
            let y = 10 + (x - 10) * 190 / 290;
            assert!(inked(x, y, &c), "gap at ({x},{y})");
        }
        assert_eq!(c.pixel(150, 102), Some(0xFF_FF_00_00));
        assert!(!inked(300, 10, &c));
    }

    #[test]
    fn thin_segment_touches_every_column() {
        let mut c = Canvas::new(100, 100);
        c.draw_segment(Point::new(0, 0), Point::new(99, 40), Color::BLUE, 1);
        for x in 0..100 {
            assert!((0..100).any(|y| inked(x, y, &c)), "column {x} empty");
        }
    }

    #[test]
    fn zero_length_segment_is_a_dot() {
        let mut c = Canvas::new(20, 20);
        c.draw_segment(Point::new(10, 10), Point::new(10, 10), Color::GREEN, 5);
        assert!(inked(10, 10, &c));
        assert!(inked(12, 10, &c));
        assert!(!inked(13, 10, &c));
    }

    #[test]
    fn drawing_is_monotonic() {
        let mut c = Canvas::new(50, 50);
        c.draw_segment(Point::new(0, 5), Point::new(49, 5), Color::GREEN, 3);
        let before = c.painted_count();
        c.draw_segment(Point::new(5, 0), Point::new(5, 49), Color::RED, 3);
        assert!(c.painted_count() > before);
        assert!(inked(40, 5, &c));
        // crossing point takes the newer color
        assert_eq!(c.pixel(5, 5), Some(0xFF_FF_00_00));
    }

    #[test]
    fn off_canvas_geometry_is_clipped() {
        let mut c = Canvas::new(30, 30);
        c.draw_segment(Point::new(-100, -100), Point::new(100, 100), Color::YELLOW, 9);
        c.draw_segment(Point::new(-50, 10), Point::new(-40, 10), Color::YELLOW, 1);
        c.erase_region(Point::new(-500, 500), 20);
        assert!(inked(15, 15, &c));
    }

    #[test]
    fn extreme_coordinates_clip_without_overflow() {
        let mut c = Canvas::new(40, 40);
        c.draw_segment(Point::new(-5, 20), Point::new(i32::MAX, 20), Color::RED, 5);
        c.draw_segment(Point::new(i32::MIN, i32::MIN), Point::new(i32::MAX, i32::MIN), Color::RED, 1);
        c.draw_segment(Point::new(i32::MAX, 0), Point::new(i32::MAX, 39), Color::RED, 7);
        assert!(inked(39, 20, &c));
        let painted = c.painted_count();

        c.erase_region(Point::new(i32::MAX, i32::MAX), 10);
        c.erase_region(Point::new(i32::MIN, 20), u32::MAX);
        assert_eq!(c.painted_count(), painted);
        c.erase_region(Point::new(20, 20), u32::MAX);
        assert_eq!(c.painted_count(), 0);
    }

    #[test]
    fn erase_clears_disc_and_keeps_the_rest() {
        let mut c = Canvas::new(60, 60);
        for y in 0..60 {
            c.draw_segment(Point::new(0, y), Point::new(59, y), Color::BLACK, 1);
        }
        assert_eq!(c.painted_count(), 3600);

        c.erase_region(Point::new(30, 30), 5);
        for y in 0..60 {
            for x in 0..60 {
                let d2 = (x - 30) * (x - 30) + (y - 30) * (y - 30);
                assert_eq!(inked(x, y, &c), d2 > 25, "pixel ({x},{y})");
            }
        }

        let snapshot = c.pixels.clone();
        c.erase_region(Point::new(30, 30), 5);
        c.erase_region(Point::new(30, 30), 5);
        assert_eq!(c.pixels, snapshot);
    }

    #[test]
    fn clear_wipes_everything() {
        let mut c = Canvas::new(10, 10);
        c.draw_segment(Point::new(0, 0), Point::new(9, 9), Color::RED, 3);
        c.clear();
        assert_eq!(c.painted_count(), 0);
    }

    #[test]
    fn compose_overlays_ink_and_leaves_inputs_alone() {
        let lut = GammaLut::new();
        let mut c = Canvas::new(4, 1);
        c.draw_segment(Point::new(1, 0), Point::new(1, 0), Color::RED, 1);
        let base = FrameBuffer { width: 4, height: 1, pixels: vec![0x00_10_20_30; 4] };
        let before = base.clone();

        let out = c.compose(&base, 1.0, &lut).unwrap();
        assert_eq!(out.pixels, vec![0x00_10_20_30, 0x00_FF_00_00, 0x00_10_20_30, 0x00_10_20_30]);
        assert_eq!(base, before);
        assert_eq!(c.painted_count(), 1);

        let faint = c.compose(&base, 0.0, &lut).unwrap();
        assert_eq!(faint, base);

        let half = c.compose(&base, 0.5, &lut).unwrap();
        assert_ne!(half.pixels[1], base.pixels[1]);
        assert_ne!(half.pixels[1], 0x00_FF_00_00);
    }

    #[test]
    fn compose_rejects_mismatched_frames() {
        let c = Canvas::new(4, 4);
        let base = FrameBuffer::new(4, 5);
        assert!(matches!(
            c.compose(&base, 1.0, &GammaLut::new()),
            Err(Error::FrameSize { expected: (4, 4), actual: (4, 5) })
        ));
    }
}
