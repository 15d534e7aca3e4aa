// Every variant states *where* things went wrong.
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Creating the window failed
    #[error("Window init error: {0}")]
    WindowInit(String),

    /// Updating the window buffer failed
    #[error("Window update error: {0}")]
    WindowUpdate(String),

    /// Opening/starting the camera failed
    #[error("Camera init error: {0}")]
    CameraInit(String),

    /// Grabbing/decoding a frame failed
    #[error("Camera frame error: {0}")]
    CameraFrame(String),

    /// The hand-landmark detector failed (not the same as "no hand")
    #[error("Landmark detector error: {0}")]
    Detector(String),

    /// Two buffers that must line up pixel-for-pixel do not
    #[error("Frame size mismatch: expected {expected:?}, got {actual:?}")]
    FrameSize { expected: (usize, usize), actual: (usize, usize) },
}

pub type Result<T> = std::result::Result<T, Error>;
