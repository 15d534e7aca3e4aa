// Window + software chrome drawn on top of the composed frame.
// Visual effects provided here:
// 1) A window that shows the live camera image with the ink overlaid.
// 2) The palette bar, with the active swatch outlined.
// 3) The tracked hand's skeleton and a crosshair at the fingertip.
// 4) A tiny 5x7 bitmap font for the HUD and the gesture instructions.

use crate::error::Error;
use crate::gesture::FingerPattern;
use crate::landmarks::{LandmarkRecord, HAND_SKELETON};
use crate::palette::Palette;
use crate::types::{trace_line, Color, FrameBuffer, Point};
use minifb::{Key, KeyRepeat, MouseMode, Window, WindowOptions};

pub struct Drawer {
    window: Window,
}

impl Drawer {
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(60);
        Ok(Self { window })
    }

    /// Push the pixels for this frame to the screen.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))
    }

    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// The quit signal: Q or Escape.
    pub fn quit_pressed(&self) -> bool {
        self.window.is_key_down(Key::Q) || self.window.is_key_down(Key::Escape)
    }

    pub fn clear_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::C, KeyRepeat::No)
    }

    /// Pointer in window pixels, `None` while it is outside the window.
    pub fn mouse_pos(&self) -> Option<Point> {
        self.window
            .get_mouse_pos(MouseMode::Discard)
            .map(|(x, y)| Point::new(x as i32, y as i32))
    }

    /// Hand pose for the simulated detector, from the held key:
    /// D point, S peace, E open hand, F fist. Nothing held = no hand.
    pub fn held_pose(&self) -> Option<FingerPattern> {
        [
            (Key::D, FingerPattern::POINT),
            (Key::S, FingerPattern::PEACE),
            (Key::E, FingerPattern::OPEN),
            (Key::F, FingerPattern::FIST),
        ]
        .into_iter()
        .find(|&(key, _)| self.window.is_key_down(key))
        .map(|(_, pose)| pose)
    }
}

/* ---------- Software drawing: pixels, lines, palette, skeleton ---------- */

/// Visual: the exact pixel at (x,y) changes color; off-screen is ignored.
#[inline]
pub fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if !fb.contains(x, y) {
        return;
    }
    let idx = y as usize * fb.width + x as usize;
    fb.pixels[idx] = color;
}

/// 1-pixel line; lines wholly off one side of the frame are skipped.
pub fn draw_line(fb: &mut FrameBuffer, a: Point, b: Point, color: u32) {
    let (w, h) = (fb.width as i32, fb.height as i32);
    if (a.x < 0 && b.x < 0) || (a.y < 0 && b.y < 0) || (a.x >= w && b.x >= w) || (a.y >= h && b.y >= h) {
        return;
    }
    trace_line(a, b, |x, y| put_pixel(fb, x, y, color));
}

fn fill_rect(fb: &mut FrameBuffer, x: i32, y: i32, w: i32, h: i32, color: u32) {
    for yy in y.max(0)..y.saturating_add(h).min(fb.height as i32) {
        for xx in x.max(0)..x.saturating_add(w).min(fb.width as i32) {
            put_pixel(fb, xx, yy, color);
        }
    }
}

fn stroke_rect(fb: &mut FrameBuffer, x: i32, y: i32, w: i32, h: i32, color: u32) {
    let (x1, y1) = (x + w - 1, y + h - 1);
    draw_line(fb, Point::new(x, y), Point::new(x1, y), color);
    draw_line(fb, Point::new(x, y1), Point::new(x1, y1), color);
    draw_line(fb, Point::new(x, y), Point::new(x, y1), color);
    draw_line(fb, Point::new(x1, y), Point::new(x1, y1), color);
}

/// Visual: the color bar; the swatch matching `active` gets a white frame.
pub fn draw_palette(fb: &mut FrameBuffer, palette: &Palette, active: Color) {
    for entry in palette.entries() {
        let r = entry.region;
        fill_rect(fb, r.x, r.y, r.width, r.height, entry.color.0);
        if entry.color == active {
            for inset in 0..3 {
                stroke_rect(fb, r.x + inset, r.y + inset, r.width - 2 * inset, r.height - 2 * inset, Color::WHITE.0);
            }
        }
    }
}

/// Visual: bones as thin lines, joints as 3x3 dots.
pub fn draw_skeleton(fb: &mut FrameBuffer, hand: &LandmarkRecord, bone: u32, joint: u32) {
    let px = |i: usize| {
        let p = hand.point(i);
        Point::new(p.x.round() as i32, p.y.round() as i32)
    };
    for &(a, b) in HAND_SKELETON.iter() {
        draw_line(fb, px(a), px(b), bone);
    }
    for i in 0..hand.points().len() {
        let p = px(i);
        fill_rect(fb, p.x.saturating_sub(1), p.y.saturating_sub(1), 3, 3, joint);
    }
}

/// Visual: a "+" shape (with a tiny gap at the center) on the fingertip.
pub fn draw_crosshair(fb: &mut FrameBuffer, c: Point, size: i32, color: u32) {
    let at = |dx: i32, dy: i32| Point::new(c.x.saturating_add(dx), c.y.saturating_add(dy));
    draw_line(fb, at(-size, 0), at(-2, 0), color);
    draw_line(fb, at(2, 0), at(size, 0), color);
    draw_line(fb, at(0, -size), at(0, -2), color);
    draw_line(fb, at(0, 2), at(0, size), color);
    put_pixel(fb, c.x, c.y, color);
}

/// On-screen help, one line per gesture plus the keys.
pub const INSTRUCTIONS: [&str; 5] = [
    "Pointing gesture: draw",
    "Peace sign: select color",
    "Open hand: erase",
    "Press C to clear",
    "Press Q to exit",
];

/// Visual: the help lines stacked under (x,y), 12 px apart.
pub fn draw_instructions(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    for (i, line) in INSTRUCTIONS.iter().enumerate() {
        draw_text_5x7(fb, x, y + 12 * i as i32, line, color);
    }
}

/* ---------- 5x7 bitmap font (just what the HUD prints) ---------- */

/// Each u8 is a row; the low 5 bits are the pixels (bit 4 = leftmost).
fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        Some([$a,$b,$c,$d,$e,$f,$g])
    }; }

    match ch.to_ascii_uppercase() {
        '0' => g!(0b01110,0b10001,0b10011,0b10101,0b11001,0b10001,0b01110),
        '1' => g!(0b00100,0b01100,0b00100,0b00100,0b00100,0b00100,0b01110),
        '2' => g!(0b01110,0b10001,0b00001,0b00010,0b00100,0b01000,0b11111),
        '3' => g!(0b11110,0b00001,0b00001,0b01110,0b00001,0b00001,0b11110),
        '4' => g!(0b00010,0b00110,0b01010,0b10010,0b11111,0b00010,0b00010),
        '5' => g!(0b11111,0b10000,0b11110,0b00001,0b00001,0b10001,0b01110),
        '6' => g!(0b00110,0b01000,0b10000,0b11110,0b10001,0b10001,0b01110),
        '7' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b01000,0b01000),
        '8' => g!(0b01110,0b10001,0b10001,0b01110,0b10001,0b10001,0b01110),
        '9' => g!(0b01110,0b10001,0b10001,0b01111,0b00001,0b00010,0b01100),

        'A' => g!(0b01110,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'C' => g!(0b01110,0b10001,0b10000,0b10000,0b10000,0b10001,0b01110),
        'D' => g!(0b11100,0b10010,0b10001,0b10001,0b10001,0b10010,0b11100),
        'E' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b11111),
        'F' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b10000),
        'G' => g!(0b01110,0b10001,0b10000,0b10111,0b10001,0b10001,0b01111),
        'H' => g!(0b10001,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'I' => g!(0b01110,0b00100,0b00100,0b00100,0b00100,0b00100,0b01110),
        'L' => g!(0b10000,0b10000,0b10000,0b10000,0b10000,0b10000,0b11111),
        'N' => g!(0b10001,0b11001,0b10101,0b10011,0b10001,0b10001,0b10001),
        'O' => g!(0b01110,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'P' => g!(0b11110,0b10001,0b10001,0b11110,0b10000,0b10000,0b10000),
        'Q' => g!(0b01110,0b10001,0b10001,0b10001,0b10101,0b10010,0b01101),
        'R' => g!(0b11110,0b10001,0b10001,0b11110,0b10100,0b10010,0b10001),
        'S' => g!(0b01111,0b10000,0b10000,0b01110,0b00001,0b00001,0b11110),
        'T' => g!(0b11111,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        'U' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'W' => g!(0b10001,0b10001,0b10001,0b10101,0b10101,0b10101,0b01010),
        'X' => g!(0b10001,0b10001,0b01010,0b00100,0b01010,0b10001,0b10001),

        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),
        '|' => g!(0b00100,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        ':' => g!(0b00000,0b00100,0b00000,0b00000,0b00100,0b00000,0b00000),
        '.' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00100,0b00000),

        _ => None,
    }
}

/// Visual: one glyph with a 1-pixel black shadow for contrast.
fn draw_char_5x7(fb: &mut FrameBuffer, x: i32, y: i32, ch: char, color: u32) {
    let Some(rows) = glyph5x7(ch) else { return };
    for (ofs, c) in [(1, 0x00000000), (0, color)] {
        for (ry, rowbits) in rows.iter().enumerate() {
            for rx in 0..5 {
                if (rowbits & (1 << (4 - rx))) != 0 {
                    put_pixel(fb, x + rx + ofs, y + ry as i32 + ofs, c);
                }
            }
        }
    }
}

/// Visual: a compact HUD string; glyphs are 5x7 with 1-pixel spacing.
pub fn draw_text_5x7(fb: &mut FrameBuffer, mut x: i32, y: i32, text: &str, color: u32) {
    for ch in text.chars() {
        draw_char_5x7(fb, x, y, ch, color);
        x += 6;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DrawConfig, COLOR_BAR_HEIGHT};
    use crate::sim::synthetic_record;

    #[test]
    fn put_pixel_ignores_out_of_bounds() {
        let mut fb = FrameBuffer::new(3, 3);
        put_pixel(&mut fb, -1, 0, 7);
        put_pixel(&mut fb, 3, 1, 7);
        put_pixel(&mut fb, 2, 2, 7);
        assert_eq!(fb.pixels.iter().filter(|&&p| p == 7).count(), 1);
        assert_eq!(fb.pixels[8], 7);
    }

    #[test]
    fn palette_bar_paints_swatches_and_outlines_active() {
        let cfg = DrawConfig::default();
        let mut fb = FrameBuffer::new(cfg.width, cfg.height);
        draw_palette(&mut fb, &cfg.palette, Color::RED);
        let at = |x: usize, y: usize| fb.pixels[y * fb.width + x];
        assert_eq!(at(64, 25), Color::GREEN.0);
        assert_eq!(at(200, 25), Color::RED.0);
        assert_eq!(at(128, 0), Color::WHITE.0); // red swatch frame
        assert_eq!(at(0, 0), Color::GREEN.0);   // green is not active
        assert_eq!(at(64, COLOR_BAR_HEIGHT), 0);
    }

    #[test]
    fn skeleton_marks_fingertip() {
        let mut fb = FrameBuffer::new(200, 200);
        let hand = synthetic_record(Point::new(100, 40), FingerPattern::OPEN, 1.0);
        draw_skeleton(&mut fb, &hand, 0x00_00_FF_00, 0x00_FF_00_00);
        assert_eq!(fb.pixels[40 * 200 + 100], 0x00_FF_00_00);
    }

    #[test]
    fn hud_text_draws_known_glyphs_only() {
        let mut fb = FrameBuffer::new(64, 10);
        draw_text_5x7(&mut fb, 0, 0, "~", 0x00_FF_FF_FF);
        assert!(fb.pixels.iter().all(|&p| p == 0));
        draw_text_5x7(&mut fb, 0, 0, "Draw", 0x00_FF_FF_FF);
        assert!(fb.pixels.iter().any(|&p| p == 0x00_FF_FF_FF));
    }

    #[test]
    fn every_instruction_is_fully_printable() {
        for line in INSTRUCTIONS {
            for ch in line.chars() {
                assert!(glyph5x7(ch).is_some(), "no glyph for {ch:?} in {line:?}");
            }
        }

        let mut fb = FrameBuffer::new(160, 70);
        draw_instructions(&mut fb, 4, 4, 0x00_FF_FF_FF);
        let lit_rows = (0..70).filter(|&y| fb.pixels[y * 160..(y + 1) * 160].contains(&0x00_FF_FF_FF)).count();
        assert_eq!(lit_rows, 7 * INSTRUCTIONS.len());
    }

    #[test]
    fn lines_far_outside_the_frame_are_skipped() {
        let mut fb = FrameBuffer::new(20, 20);
        draw_line(&mut fb, Point::new(i32::MIN, -5), Point::new(i32::MAX, -5), 7);
        draw_crosshair(&mut fb, Point::new(i32::MAX, i32::MAX), 8, 7);
        assert!(fb.pixels.iter().all(|&p| p == 0));
        draw_line(&mut fb, Point::new(-10, 3), Point::new(30, 3), 7);
        assert_eq!(fb.pixels.iter().filter(|&&p| p == 7).count(), 20);
    }
}
