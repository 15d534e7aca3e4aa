// Landmark feed adapter: turns whatever the hand detector returned this frame
// into a fixed 21-point record in window pixel space, or `None` for "no hand".
// Visual: nothing on its own; every gesture decision downstream reads this.

use crate::error::Result;
use crate::types::{FrameBuffer, Point};

// ---------------------------- 21-point hand model ----------------------------

pub const LANDMARK_COUNT: usize = 21;

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// Bone connections for drawing the skeleton overlay.
pub const HAND_SKELETON: [(usize, usize); 21] = [
    (WRIST, THUMB_CMC), (THUMB_CMC, THUMB_MCP), (THUMB_MCP, THUMB_IP), (THUMB_IP, THUMB_TIP),
    (WRIST, INDEX_MCP), (INDEX_MCP, INDEX_PIP), (INDEX_PIP, INDEX_DIP), (INDEX_DIP, INDEX_TIP),
    (MIDDLE_MCP, MIDDLE_PIP), (MIDDLE_PIP, MIDDLE_DIP), (MIDDLE_DIP, MIDDLE_TIP),
    (RING_MCP, RING_PIP), (RING_PIP, RING_DIP), (RING_DIP, RING_TIP),
    (WRIST, PINKY_MCP), (PINKY_MCP, PINKY_PIP), (PINKY_PIP, PINKY_DIP), (PINKY_DIP, PINKY_TIP),
    (INDEX_MCP, MIDDLE_MCP), (MIDDLE_MCP, RING_MCP), (RING_MCP, PINKY_MCP),
];

// ---------------------------------- types ------------------------------------

/// One keypoint in window pixels. `confidence` is carried but never used
/// for decisions.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub confidence: Option<f32>,
}

impl Landmark {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y, confidence: None }
    }

    #[inline]
    pub fn distance(&self, other: &Landmark) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Which coordinate system a detector reports in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoordSpace {
    /// x and y in [0,1] relative to the frame size
    Normalized,
    /// x and y already in frame pixels
    Pixel,
}

/// Detector output for one hand, before validation.
#[derive(Clone, Debug, PartialEq)]
pub struct RawHand {
    pub points: Vec<(f32, f32, Option<f32>)>,
    pub space: CoordSpace,
}

/// A validated 21-point hand in pixel space. Lives for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct LandmarkRecord {
    points: [Landmark; LANDMARK_COUNT],
}

impl LandmarkRecord {
    pub fn new(points: [Landmark; LANDMARK_COUNT]) -> Self {
        Self { points }
    }

    #[inline]
    pub fn point(&self, idx: usize) -> Landmark {
        self.points[idx]
    }

    pub fn points(&self) -> &[Landmark; LANDMARK_COUNT] {
        &self.points
    }

    /// Index fingertip, rounded to the nearest pixel: the tool tip.
    pub fn fingertip(&self) -> Point {
        let tip = self.points[INDEX_TIP];
        Point::new(tip.x.round() as i32, tip.y.round() as i32)
    }
}

/// Anything that can look at a camera frame and report zero or one hand.
/// `Ok(None)` means "no hand this frame"; `Err` means the detector itself broke.
pub trait LandmarkSource {
    fn detect(&mut self, frame: &FrameBuffer) -> Result<Option<RawHand>>;
}

// --------------------------------- adapter -----------------------------------

/// Converts `RawHand` into `LandmarkRecord` for a fixed frame size.
#[derive(Clone, Debug)]
pub struct FeedAdapter {
    width: f32,
    height: f32,
    mirror_x: bool,
}

impl FeedAdapter {
    /// `mirror_x` flips x for detectors that saw an unmirrored frame while the
    /// window shows a mirrored one.
    pub fn new(width: usize, height: usize, mirror_x: bool) -> Self {
        Self { width: width as f32, height: height as f32, mirror_x }
    }

    /// Returns `None` for no hand, and also for records that are unusable
    /// (wrong point count, NaN/inf coordinates, points more than one frame
    /// width/height outside the frame): ill-formed input reads as "no hand"
    /// rather than an error.
    pub fn normalize(&self, raw: Option<&RawHand>) -> Option<LandmarkRecord> {
        let raw = raw?;
        if raw.points.len() != LANDMARK_COUNT {
            log::warn!("dropping hand with {} landmarks (expected {LANDMARK_COUNT})", raw.points.len());
            return None;
        }

        let (sx, sy) = match raw.space {
            CoordSpace::Normalized => (self.width, self.height),
            CoordSpace::Pixel => (1.0, 1.0),
        };

        let mut points = [Landmark::default(); LANDMARK_COUNT];
        for (slot, &(x, y, confidence)) in points.iter_mut().zip(raw.points.iter()) {
            if !x.is_finite() || !y.is_finite() {
                log::warn!("dropping hand with non-finite landmark ({x}, {y})");
                return None;
            }
            let mut px = x * sx;
            let py = y * sy;
            if self.mirror_x {
                px = (self.width - 1.0) - px;
            }
            if !(-self.width..=2.0 * self.width).contains(&px) || !(-self.height..=2.0 * self.height).contains(&py) {
                log::warn!("dropping hand with off-frame landmark ({px}, {py})");
                return None;
            }
            *slot = Landmark { x: px, y: py, confidence };
        }
        Some(LandmarkRecord::new(points))
    }
}
