// One drawing session: owns what survives between frames (stroke state,
// canvas, active color) and runs the per-frame pipeline
//   adapter -> classifier -> debouncer -> stroke controller -> canvas/palette.
// Nothing global; the runner owns one Session and feeds it a frame at a time.
// Visual: everything that changes on screen because of the hand.

use crate::canvas::Canvas;
use crate::config::DrawConfig;
use crate::error::Result;
use crate::gamma::GammaLut;
use crate::gesture::{classify, Intent};
use crate::landmarks::{FeedAdapter, LandmarkRecord, RawHand};
use crate::palette::Palette;
use crate::stroke::{Command, IntentDebouncer, PenState, StrokeController};
use crate::types::{Color, FrameBuffer, Point};

/// What happened this frame, for the HUD and for tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameReport {
    /// intent after debouncing (what the controller acted on)
    pub intent: Intent,
    pub fingertip: Option<Point>,
    pub command: Option<Command>,
}

pub struct Session {
    config: DrawConfig,
    adapter: FeedAdapter,
    debouncer: IntentDebouncer,
    controller: StrokeController,
    canvas: Canvas,
    active_color: Color,
    lut: GammaLut,
}

impl Session {
    pub fn new(config: DrawConfig) -> Self {
        log::info!(
            "session {}x{}: {} swatches, thickness {}, eraser {}, debounce {}",
            config.width,
            config.height,
            config.palette.entries().len(),
            config.draw_thickness,
            config.erase_radius,
            config.debounce_frames,
        );
        Self {
            adapter: FeedAdapter::new(config.width, config.height, false),
            debouncer: IntentDebouncer::new(config.debounce_frames),
            controller: StrokeController::new(),
            canvas: Canvas::new(config.width, config.height),
            active_color: config.default_color,
            lut: GammaLut::new(),
            config,
        }
    }

    pub fn config(&self) -> &DrawConfig {
        &self.config
    }

    pub fn palette(&self) -> &Palette {
        &self.config.palette
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn active_color(&self) -> Color {
        self.active_color
    }

    pub fn pen_state(&self) -> PenState {
        self.controller.state()
    }

    /// Validate detector output, then run the frame.
    pub fn process_raw(&mut self, raw: Option<&RawHand>) -> (Option<LandmarkRecord>, FrameReport) {
        let hand = self.adapter.normalize(raw);
        let report = self.process(hand.as_ref());
        (hand, report)
    }

    /// Run one frame for an already-validated hand (or none).
    pub fn process(&mut self, hand: Option<&LandmarkRecord>) -> FrameReport {
        let raw_intent = classify(hand, &self.config.thresholds);
        let intent = self.debouncer.push(raw_intent);
        let fingertip = hand.map(LandmarkRecord::fingertip);

        let command = self.controller.step(intent, fingertip);
        if let Some(cmd) = command {
            self.apply(cmd);
        }
        FrameReport { intent, fingertip, command }
    }

    /// Ink always uses the color active right now, not the one a stroke began with.
    fn apply(&mut self, cmd: Command) {
        match cmd {
            Command::DrawSegment { from, to } => {
                self.canvas.draw_segment(from, to, self.active_color, self.config.draw_thickness);
            }
            Command::EraseRegion { center } => {
                self.canvas.erase_region(center, self.config.erase_radius);
            }
            Command::SelectAt(p) => {
                // A miss keeps the current color.
                if let Some(color) = self.config.palette.select(p) {
                    if color != self.active_color {
                        log::info!("active color {:06X} -> {:06X}", self.active_color.0, color.0);
                    }
                    self.active_color = color;
                }
            }
        }
    }

    /// Wipe the canvas and lift the pen. Not reachable by gesture.
    pub fn clear_canvas(&mut self) {
        log::info!("canvas cleared");
        self.canvas.clear();
        self.controller.reset();
    }

    /// Live frame with the canvas on top; the frame itself is untouched.
    pub fn compose(&self, frame: &FrameBuffer) -> Result<FrameBuffer> {
        self.canvas.compose(frame, self.config.overlay_opacity, &self.lut)
    }
}
