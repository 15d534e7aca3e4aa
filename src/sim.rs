// Simulated hand: a synthetic 21-point skeleton placed so that its index
// fingertip sits at the mouse pointer, posed by whichever gesture key is held.
// Visual: the skeleton overlay follows the mouse and folds its fingers as you
// switch keys, exactly as a real detector's output would.

use crate::error::Result;
use crate::gesture::FingerPattern;
use crate::landmarks::*;
use crate::types::{FrameBuffer, Point};

// Offsets from the wrist at scale 1.0, y pointing down (fingers point up).
const THUMB_CMC_OFS: (f32, f32) = (-15.0, -15.0);
const THUMB_MCP_OFS: (f32, f32) = (-28.0, -28.0);
const THUMB_IP_OFS: (f32, f32) = (-38.0, -40.0);
const THUMB_TIP_OUT: (f32, f32) = (-55.0, -58.0);
const THUMB_TIP_IN: (f32, f32) = (-5.0, -45.0); // tucked across the palm

/// MCP positions for index, middle, ring, pinky.
const MCP_OFS: [(f32, f32); 4] = [(-15.0, -60.0), (-5.0, -64.0), (5.0, -62.0), (15.0, -56.0)];

/// (PIP, DIP, TIP) offsets from the MCP, straight and folded.
const FINGER_OUT: [f32; 3] = [-25.0, -40.0, -52.0];
const FINGER_IN: [f32; 3] = [-20.0, -10.0, 2.0];

/// Build a hand in pixel space whose index fingertip lands on `tip`.
pub fn synthetic_record(tip: Point, pattern: FingerPattern, scale: f32) -> LandmarkRecord {
    let mut ofs = [(0.0f32, 0.0f32); LANDMARK_COUNT];
    ofs[THUMB_CMC] = THUMB_CMC_OFS;
    ofs[THUMB_MCP] = THUMB_MCP_OFS;
    ofs[THUMB_IP] = THUMB_IP_OFS;
    ofs[THUMB_TIP] = if pattern.thumb { THUMB_TIP_OUT } else { THUMB_TIP_IN };

    let extended = [pattern.index, pattern.middle, pattern.ring, pattern.pinky];
    for (finger, (&(mx, my), &out)) in MCP_OFS.iter().zip(extended.iter()).enumerate() {
        let mcp = INDEX_MCP + finger * 4; // MCP, PIP, DIP, TIP are consecutive
        let chain = if out { FINGER_OUT } else { FINGER_IN };
        ofs[mcp] = (mx, my);
        for (k, dy) in chain.iter().enumerate() {
            ofs[mcp + 1 + k] = (mx, my + dy);
        }
    }

    // Anchor: shift everything so INDEX_TIP maps onto `tip`.
    let (tx, ty) = ofs[INDEX_TIP];
    let wrist_x = tip.x as f32 - tx * scale;
    let wrist_y = tip.y as f32 - ty * scale;

    let mut points = [Landmark::default(); LANDMARK_COUNT];
    for (p, &(dx, dy)) in points.iter_mut().zip(ofs.iter()) {
        *p = Landmark { x: wrist_x + dx * scale, y: wrist_y + dy * scale, confidence: Some(1.0) };
    }
    LandmarkRecord::new(points)
}

/// Same hand, in the shape a detector would report it.
pub fn synthetic_hand(tip: Point, pattern: FingerPattern, scale: f32) -> RawHand {
    let rec = synthetic_record(tip, pattern, scale);
    RawHand {
        points: rec.points().iter().map(|p| (p.x, p.y, p.confidence)).collect(),
        space: CoordSpace::Pixel,
    }
}

/// `LandmarkSource` driven by pointer + key state instead of a camera model.
pub struct SimulatedHand {
    scale: f32,
    tip: Option<Point>,
    pose: Option<FingerPattern>,
}

impl SimulatedHand {
    pub fn new(scale: f32) -> Self {
        Self { scale, tip: None, pose: None }
    }

    /// Latch this frame's input. Either being `None` means no hand is shown.
    pub fn set_input(&mut self, tip: Option<Point>, pose: Option<FingerPattern>) {
        self.tip = tip;
        self.pose = pose;
    }
}

impl LandmarkSource for SimulatedHand {
    fn detect(&mut self, _frame: &FrameBuffer) -> Result<Option<RawHand>> {
        Ok(match (self.tip, self.pose) {
            (Some(tip), Some(pose)) => Some(synthetic_hand(tip, pose, self.scale)),
            _ => None,
        })
    }
}
