// Core value types shared by the gesture pipeline, the canvas and the window.

#[derive(Clone, Debug, PartialEq)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the frame is on screen (pixels)
    pub height: usize,     // how tall the frame is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    /// A black frame of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0u32; width * height] }
    }

    /// True when (x,y) addresses a pixel inside the frame.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }
}

/// Integer pixel position. Visual: where the fingertip sits on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An opaque RGB color packed as 0x00RRGGBB (same layout as the window buffer).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    pub const GREEN: Color = Color(0x00_00_FF_00);
    pub const RED: Color = Color(0x00_FF_00_00);
    pub const BLUE: Color = Color(0x00_00_00_FF);
    pub const YELLOW: Color = Color(0x00_FF_FF_00);
    pub const BLACK: Color = Color(0x00_00_00_00);
    pub const WHITE: Color = Color(0x00_FF_FF_FF);
}

/// Walk a 1-pixel Bresenham line from `a` to `b` inclusive, calling `plot`
/// for every pixel. Error terms run in i64 so extreme endpoints cannot overflow.
pub fn trace_line(a: Point, b: Point, mut plot: impl FnMut(i32, i32)) {
    let (mut x0, mut y0) = (a.x as i64, a.y as i64);
    let (x1, y1) = (b.x as i64, b.y as i64);
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        plot(x0 as i32, y0 as i32);
        if x0 == x1 && y0 == y1 { break; }
        let e2 = 2 * err;
        if e2 >= dy { err += dy; x0 += sx; }
        if e2 <= dx { err += dx; y0 += sy; }
    }
}

/// Axis-aligned box, half-open: `[x, x+width) × [y, y+height)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.y >= self.y && p.x < self.x + self.width && p.y < self.y + self.height
    }
}
