// air-canvas: draw on a live camera feed with hand gestures.
//   index finger only        -> Draw         ink follows the fingertip
//   index + middle (peace)   -> SelectColor  pick the swatch under the fingertip
//   open hand                -> Erase        clear a disc around the fingertip
//   anything else / no hand  -> Idle         pen up
// Per frame: landmarks validates detector output, gesture classifies it,
// stroke turns the intent stream into commands, and session applies them to
// the canvas and palette before composing over the camera frame.

pub mod camera;
pub mod canvas;
pub mod config;
pub mod draw;
pub mod error;
pub mod gamma;
pub mod gesture;
pub mod landmarks;
pub mod logging;
pub mod palette;
pub mod session;
pub mod sim;
pub mod stroke;
pub mod types;
