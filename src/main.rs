// What you SEE:
// • Live camera (mirrored) is always the base image, with your ink on top.
// • The color bar runs along the top; the active color is outlined in white.
// • The mouse stands in for your index fingertip; hold a key to pose the hand:
//     D = point (draw)   S = peace sign (pick color)   E = open hand (erase)
//     F = fist (idle)    nothing held = no hand in view
// • C clears the canvas. Q or ESC quits.
// • Under the bar: current intent + FPS, then the gesture help lines.

use air_canvas::camera::CameraCapture;
use air_canvas::config::DrawConfig;
use air_canvas::draw::{draw_crosshair, draw_instructions, draw_palette, draw_skeleton, draw_text_5x7, Drawer};
use air_canvas::error::Error;
use air_canvas::gesture::Intent;
use air_canvas::landmarks::LandmarkSource;
use air_canvas::logging::{init_logging, LoggingConfig};
use air_canvas::session::Session;
use air_canvas::sim::SimulatedHand;
use std::time::{Duration, Instant};

fn main() -> Result<(), Error> {
    init_logging(LoggingConfig::default());

    log::info!("air canvas starting; gesture help is drawn in the window");

    /* --- Camera + window setup ---
       Visual: window opens with the mirrored live camera feed. */
    let defaults = DrawConfig::default();
    let mut cam = CameraCapture::new(0, defaults.width as u32, defaults.height as u32, defaults.mirror)?;
    let (w, h) = cam.resolution();
    let config = DrawConfig::for_frame(w as usize, h as usize);
    let mut drawer = Drawer::new("Air Canvas", w as usize, h as usize)?;

    let mut session = Session::new(config);
    let mut hands = SimulatedHand::new(1.0);

    /* --- HUD / FPS --- */
    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;
    let mut hud_fps_text = String::from("FPS: 0.0");

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.quit_pressed() {
        // 1) Fresh live frame; a capture failure ends the session.
        let live = cam.next_frame()?;

        if drawer.clear_pressed_once() {
            session.clear_canvas();
        }

        // 2) Landmarks → intent → stroke step → canvas/palette.
        hands.set_input(drawer.mouse_pos(), drawer.held_pose());
        let raw = hands.detect(&live)?;
        let (hand, report) = session.process_raw(raw.as_ref());

        // 3) Compose ink over the live frame, then chrome on top.
        let mut screen = session.compose(&live)?;
        draw_palette(&mut screen, session.palette(), session.active_color());

        if let Some(hand) = &hand {
            draw_skeleton(&mut screen, hand, 0x00_C8_C8_C8, 0x00_FF_40_40);
        }
        if let Some(tip) = report.fingertip {
            let tint = match report.intent {
                Intent::Draw => session.active_color().0,
                Intent::Erase => 0x00_FF_FF_FF,
                _ => 0x00_FF_CC_33,
            };
            draw_crosshair(&mut screen, tip, 12, tint);
        }

        let hud = format!("{} | {}", report.intent.label(), hud_fps_text);
        let hud_y = session.config().palette.entries().first().map_or(8, |e| e.region.height + 8);
        draw_text_5x7(&mut screen, 8, hud_y, &hud, 0x00_FF_FF_FF);
        draw_instructions(&mut screen, 8, hud_y + 16, 0x00_E0_E0_E0);

        // 4) Present.
        drawer.present(&screen)?;

        // 5) FPS, once per second.
        frames_this_second += 1;
        let now = Instant::now();
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            let secs = now.duration_since(last_fps_time).as_secs_f32();
            let fps = frames_this_second as f32 / secs;
            log::info!("FPS: {fps:.1}");
            hud_fps_text = format!("FPS: {fps:.1}");
            frames_this_second = 0;
            last_fps_time = now;
        }
    }

    log::info!("quit; {} pixels of ink on the canvas", session.canvas().painted_count());
    Ok(())
}
