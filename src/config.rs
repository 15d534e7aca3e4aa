// Fixed session configuration: frame size, palette, brush sizes, thresholds.
// Everything here is decided at startup and never changes while running.

use crate::gesture::GestureThresholds;
use crate::palette::Palette;
use crate::types::Color;

pub const FRAME_WIDTH: usize = 640;
pub const FRAME_HEIGHT: usize = 480;
pub const COLOR_BAR_HEIGHT: usize = 50;
pub const DRAW_THICKNESS: u32 = 5;

/// Swatches in bar order, left to right.
pub const DEFAULT_COLORS: [(&str, Color); 5] = [
    ("Green", Color::GREEN),
    ("Red", Color::RED),
    ("Blue", Color::BLUE),
    ("Yellow", Color::YELLOW),
    ("Black", Color::BLACK),
];

#[derive(Clone, Debug)]
pub struct DrawConfig {
    pub width: usize,
    pub height: usize,
    pub palette: Palette,
    pub draw_thickness: u32,
    pub erase_radius: u32,
    pub default_color: Color,
    /// how strongly ink covers the live feed, 0..1
    pub overlay_opacity: f32,
    pub thresholds: GestureThresholds,
    /// frames a new intent must persist before it takes effect (1 = immediate)
    pub debounce_frames: usize,
    /// flip the camera image horizontally so the preview acts like a mirror
    pub mirror: bool,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self::for_frame(FRAME_WIDTH, FRAME_HEIGHT)
    }
}

impl DrawConfig {
    /// Defaults laid out for a frame of the given size (the palette bar spans
    /// the full width).
    pub fn for_frame(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            palette: Palette::bar(width, COLOR_BAR_HEIGHT, &DEFAULT_COLORS),
            draw_thickness: DRAW_THICKNESS,
            erase_radius: DRAW_THICKNESS * 2,
            default_color: Color::GREEN,
            overlay_opacity: 0.85,
            thresholds: GestureThresholds::default(),
            debounce_frames: 1,
            mirror: true,
        }
    }
}
