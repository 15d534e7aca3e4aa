// Gesture classifier: one landmark record in, one Intent out.
// Pure function of the current frame; stroke continuity and debouncing live
// in stroke.rs.
// Finger extension: palm center = mean of the wrist and the four finger MCPs.
// A finger is extended when its tip is farther from the palm center than its
// PIP joint by at least `extension_ratio`. The thumb folds sideways, so it is
// measured from the pinky MCP (tip vs IP joint). Distance ratios only, so
// hand size, position and in-plane rotation don't matter.
// Visual: the label in the HUD and the crosshair tint.

use crate::landmarks::*;

/// What the current hand pose asks for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Intent {
    #[default]
    Idle,
    Draw,
    SelectColor,
    Erase,
}

impl Intent {
    /// HUD label.
    pub fn label(self) -> &'static str {
        match self {
            Intent::Idle => "IDLE",
            Intent::Draw => "DRAW",
            Intent::SelectColor => "SELECT",
            Intent::Erase => "ERASE",
        }
    }
}

/// Extended (`true`) / curled (`false`) per finger.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FingerPattern {
    pub thumb: bool,
    pub index: bool,
    pub middle: bool,
    pub ring: bool,
    pub pinky: bool,
}

impl FingerPattern {
    pub const FIST: FingerPattern = FingerPattern::from_bits(0b00000);
    /// Index only.
    pub const POINT: FingerPattern = FingerPattern::from_bits(0b00010);
    /// Index + middle.
    pub const PEACE: FingerPattern = FingerPattern::from_bits(0b00110);
    pub const OPEN: FingerPattern = FingerPattern::from_bits(0b11111);

    /// Bit 0 = thumb … bit 4 = pinky.
    pub const fn from_bits(bits: u8) -> Self {
        Self {
            thumb: bits & 0b00001 != 0,
            index: bits & 0b00010 != 0,
            middle: bits & 0b00100 != 0,
            ring: bits & 0b01000 != 0,
            pinky: bits & 0b10000 != 0,
        }
    }

    pub const fn bits(self) -> u8 {
        (self.thumb as u8)
            | (self.index as u8) << 1
            | (self.middle as u8) << 2
            | (self.ring as u8) << 3
            | (self.pinky as u8) << 4
    }

    /// Fixed pattern → intent table. Anything unlisted is Idle, so an
    /// ambiguous pose never triggers an erase.
    pub fn intent(self) -> Intent {
        match self {
            FingerPattern::POINT => Intent::Draw,
            FingerPattern::PEACE => Intent::SelectColor,
            FingerPattern::OPEN => Intent::Erase,
            _ => Intent::Idle,
        }
    }
}

/// Tunable geometry thresholds. Defaults are for pixel-space landmarks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureThresholds {
    /// tip distance / joint distance above which a finger reads as extended
    pub extension_ratio: f32,
    /// wrist → middle-MCP distance below which the hand is too small to trust
    pub min_palm_size: f32,
}

impl Default for GestureThresholds {
    fn default() -> Self {
        Self { extension_ratio: 1.15, min_palm_size: 10.0 }
    }
}

/// (tip, middle joint) per finger, thumb first.
const FINGERS: [(usize, usize); 5] = [
    (THUMB_TIP, THUMB_IP),
    (INDEX_TIP, INDEX_PIP),
    (MIDDLE_TIP, MIDDLE_PIP),
    (RING_TIP, RING_PIP),
    (PINKY_TIP, PINKY_PIP),
];

/// Extension pattern for a hand, or `None` when the geometry is degenerate.
pub fn finger_pattern(hand: &LandmarkRecord, thresholds: &GestureThresholds) -> Option<FingerPattern> {
    let pts = hand.points();
    if pts.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
        return None;
    }

    let palm_size = pts[WRIST].distance(&pts[MIDDLE_MCP]);
    if palm_size < thresholds.min_palm_size {
        return None;
    }

    let anchors = [WRIST, INDEX_MCP, MIDDLE_MCP, RING_MCP, PINKY_MCP];
    let (sx, sy) = anchors.iter().fold((0.0, 0.0), |(sx, sy), &i| (sx + pts[i].x, sy + pts[i].y));
    let palm = Landmark::new(sx / anchors.len() as f32, sy / anchors.len() as f32);

    let mut bits = 0u8;
    for (finger, &(tip, joint)) in FINGERS.iter().enumerate() {
        let origin = if tip == THUMB_TIP { pts[PINKY_MCP] } else { palm };
        let tip_d = pts[tip].distance(&origin);
        let joint_d = pts[joint].distance(&origin);
        if tip_d > joint_d * thresholds.extension_ratio {
            bits |= 1 << finger;
        }
    }
    Some(FingerPattern::from_bits(bits))
}

/// Per-frame intent. No hand or unreadable hand → Idle.
pub fn classify(hand: Option<&LandmarkRecord>, thresholds: &GestureThresholds) -> Intent {
    hand.and_then(|h| finger_pattern(h, thresholds))
        .map(FingerPattern::intent)
        .unwrap_or(Intent::Idle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::synthetic_record;
    use crate::types::Point;

    fn rotated(rec: &LandmarkRecord, angle: f32) -> LandmarkRecord {
        let (s, c) = angle.sin_cos();
        let pivot = rec.point(WRIST);
        let mut pts = *rec.points();
        for p in pts.iter_mut() {
            let (dx, dy) = (p.x - pivot.x, p.y - pivot.y);
            p.x = pivot.x + dx * c - dy * s;
            p.y = pivot.y + dx * s + dy * c;
        }
        LandmarkRecord::new(pts)
    }

    #[test]
    fn synthetic_poses_read_back_exactly() {
        let t = GestureThresholds::default();
        for bits in 0u8..32 {
            let pattern = FingerPattern::from_bits(bits);
            let rec = synthetic_record(Point::new(300, 240), pattern, 1.0);
            assert_eq!(finger_pattern(&rec, &t), Some(pattern), "pattern {bits:05b}");
        }
    }

    #[test]
    fn pattern_table_maps_to_intents() {
        for bits in 0u8..32 {
            let p = FingerPattern::from_bits(bits);
            assert_eq!(p.bits(), bits);
            let expected = match bits {
                0b00010 => Intent::Draw,
                0b00110 => Intent::SelectColor,
                0b11111 => Intent::Erase,
                _ => Intent::Idle,
            };
            assert_eq!(p.intent(), expected, "pattern {bits:05b}");
        }
    }

    #[test]
    fn pointing_is_draw_for_any_position_scale_and_rotation() {
        let t = GestureThresholds::default();
        for &(x, y) in &[(50, 400), (320, 240), (600, 120)] {
            for &scale in &[0.5, 1.0, 2.0] {
                for step in 0..8 {
                    let rec = synthetic_record(Point::new(x, y), FingerPattern::POINT, scale);
                    let rec = rotated(&rec, step as f32 * std::f32::consts::FRAC_PI_4);
                    assert_eq!(classify(Some(&rec), &t), Intent::Draw);
                }
            }
        }
    }

    #[test]
    fn open_hand_is_erase_and_peace_is_select() {
        let t = GestureThresholds::default();
        for step in 0..8 {
            let angle = step as f32 * 0.7;
            let open = rotated(&synthetic_record(Point::new(200, 200), FingerPattern::OPEN, 1.3), angle);
            let peace = rotated(&synthetic_record(Point::new(200, 200), FingerPattern::PEACE, 1.3), angle);
            assert_eq!(classify(Some(&open), &t), Intent::Erase);
            assert_eq!(classify(Some(&peace), &t), Intent::SelectColor);
        }
    }

    #[test]
    fn no_hand_is_idle() {
        assert_eq!(classify(None, &GestureThresholds::default()), Intent::Idle);
    }

    #[test]
    fn three_fingers_is_idle() {
        let rec = synthetic_record(Point::new(200, 200), FingerPattern::from_bits(0b01110), 1.0);
        assert_eq!(classify(Some(&rec), &GestureThresholds::default()), Intent::Idle);
    }

    #[test]
    fn degenerate_hands_are_idle() {
        let t = GestureThresholds::default();
        let collapsed = LandmarkRecord::new([Landmark::new(5.0, 5.0); LANDMARK_COUNT]);
        assert_eq!(classify(Some(&collapsed), &t), Intent::Idle);

        let tiny = synthetic_record(Point::new(200, 200), FingerPattern::POINT, 0.1);
        assert_eq!(classify(Some(&tiny), &t), Intent::Idle);

        let mut pts = *synthetic_record(Point::new(200, 200), FingerPattern::OPEN, 1.0).points();
        pts[RING_DIP].y = f32::INFINITY;
        assert_eq!(classify(Some(&LandmarkRecord::new(pts)), &t), Intent::Idle);
    }
}
