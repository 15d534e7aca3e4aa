// Stroke controller: the only place that remembers anything between frames.
// Per frame: Intent + fingertip (if a hand is visible) in, at most one
// Command out. A stroke is the run of DrawSegments between two pen-up
// moments; any non-Draw frame (a lost hand too) ends it, and the next Draw
// frame starts a fresh stroke never joined to the old one.
// Visual: continuous lines while pointing, a clean break when the pose changes.

use crate::gesture::Intent;
use crate::types::Point;

/// Controller state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PenState {
    #[default]
    PenUp,
    PenDrawing,
    Selecting,
    Erasing,
}

/// Work for the canvas / palette, produced by one controller step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Rasterize a line from the previous fingertip to the current one.
    DrawSegment { from: Point, to: Point },
    /// Clear a disc around the fingertip.
    EraseRegion { center: Point },
    /// Look up the palette swatch under the fingertip.
    SelectAt(Point),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StrokeState {
    pub current_intent: Intent,
    pub previous_point: Option<Point>,
    pub is_pen_down: bool,
}

#[derive(Debug, Default)]
pub struct StrokeController {
    state: PenState,
    stroke: StrokeState,
}

impl StrokeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PenState {
        self.state
    }

    pub fn stroke(&self) -> &StrokeState {
        &self.stroke
    }

    /// Advance one frame.
    ///
    /// Leaving a state always passes through pen-up first, and the new intent
    /// is then handled in the same frame, so a Draw frame right after a
    /// Select frame starts a stroke at its own fingertip. A non-Idle intent
    /// with no fingertip is treated as Idle.
    pub fn step(&mut self, intent: Intent, tip: Option<Point>) -> Option<Command> {
        let intent = if tip.is_some() { intent } else { Intent::Idle };

        let (next, command) = match (intent, tip) {
            (Intent::Draw, Some(p)) => {
                let from = match self.state {
                    PenState::PenDrawing => self.stroke.previous_point,
                    _ => None,
                };
                (PenState::PenDrawing, from.map(|from| Command::DrawSegment { from, to: p }))
            }
            (Intent::SelectColor, Some(p)) => (PenState::Selecting, Some(Command::SelectAt(p))),
            (Intent::Erase, Some(p)) => (PenState::Erasing, Some(Command::EraseRegion { center: p })),
            _ => (PenState::PenUp, None),
        };

        if next != self.state {
            log::debug!("pen {:?} -> {:?} ({:?})", self.state, next, intent);
        }

        self.state = next;
        self.stroke = StrokeState {
            current_intent: intent,
            previous_point: if next == PenState::PenDrawing { tip } else { None },
            is_pen_down: next == PenState::PenDrawing,
        };
        command
    }

    /// Back to the initial pen-up state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Holds the reported intent steady until a different one has been seen for
/// `depth` consecutive frames. `depth <= 1` passes every frame straight through.
#[derive(Debug, Clone)]
pub struct IntentDebouncer {
    depth: usize,
    stable: Intent,
    candidate: Intent,
    seen: usize,
}

impl IntentDebouncer {
    pub fn new(depth: usize) -> Self {
        Self { depth, stable: Intent::Idle, candidate: Intent::Idle, seen: 0 }
    }

    pub fn push(&mut self, raw: Intent) -> Intent {
        if self.depth <= 1 || raw == self.stable {
            self.stable = raw;
            self.candidate = raw;
            self.seen = 0;
            return raw;
        }

        if raw == self.candidate {
            self.seen += 1;
        } else {
            self.candidate = raw;
            self.seen = 1;
        }

        if self.seen >= self.depth {
            log::debug!("intent settled: {:?} -> {:?}", self.stable, raw);
            self.stable = raw;
            self.seen = 0;
        }
        self.stable
    }
}
