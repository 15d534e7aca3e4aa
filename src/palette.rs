// Color palette: a fixed set of swatches, each owning a screen rectangle.
// Visual: the colored bar along the top of the window; pointing into a swatch
// with the peace sign picks its color.

use crate::types::{Color, Point, Rect};

#[derive(Clone, Debug, PartialEq)]
pub struct PaletteEntry {
    pub name: &'static str,
    pub color: Color,
    pub region: Rect,
}

/// Immutable for the whole session.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Palette {
    pub fn new(entries: Vec<PaletteEntry>) -> Self {
        Self { entries }
    }

    /// Equal-width swatches laid left to right across `[0, width) × [0, bar_height)`.
    /// Integer division leaves any remainder pixels on the right unassigned.
    pub fn bar(width: usize, bar_height: usize, colors: &[(&'static str, Color)]) -> Self {
        if colors.is_empty() {
            return Self::new(Vec::new());
        }
        let swatch = (width / colors.len()) as i32;
        let entries = colors
            .iter()
            .enumerate()
            .map(|(i, &(name, color))| PaletteEntry {
                name,
                color,
                region: Rect::new(i as i32 * swatch, 0, swatch, bar_height as i32),
            })
            .collect();
        Self::new(entries)
    }

    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Color of the first swatch containing `p`; `None` when `p` misses them all.
    pub fn select(&self, p: Point) -> Option<Color> {
        self.entries.iter().find(|e| e.region.contains(p)).map(|e| e.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five() -> Palette {
        Palette::bar(
            640,
            50,
            &[
                ("Green", Color::GREEN),
                ("Red", Color::RED),
                ("Blue", Color::BLUE),
                ("Yellow", Color::YELLOW),
                ("Black", Color::BLACK),
            ],
        )
    }

    #[test]
    fn bar_splits_width_evenly() {
        let p = five();
        assert_eq!(p.entries().len(), 5);
        assert_eq!(p.entries()[1].region, Rect::new(128, 0, 128, 50));
        assert_eq!(p.entries()[4].region, Rect::new(512, 0, 128, 50));
    }

    #[test]
    fn select_hits_and_misses() {
        let p = five();
        assert_eq!(p.select(Point::new(5, 5)), Some(Color::GREEN));
        assert_eq!(p.select(Point::new(130, 49)), Some(Color::RED));
        assert_eq!(p.select(Point::new(639, 0)), Some(Color::BLACK));
        assert_eq!(p.select(Point::new(130, 50)), None);
        assert_eq!(p.select(Point::new(200, 200)), None);
        assert_eq!(p.select(Point::new(-1, 10)), None);
    }

    #[test]
    fn empty_palette_never_selects() {
        let p = Palette::bar(640, 50, &[]);
        assert_eq!(p.select(Point::new(0, 0)), None);
    }
}
