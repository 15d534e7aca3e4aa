// Opens a webcam and hands back frames as 0x00RRGGBB buffers, optionally
// mirrored so the preview behaves like a mirror (move right, ink goes right).
// Capture errors are returned as-is; reconnecting is not attempted here.

use crate::error::Error;
use crate::types::FrameBuffer;

use image::{imageops, RgbImage};
use nokhwa::{
    Camera,
    pixel_format::RgbFormat,
    utils::{
        CameraFormat, CameraIndex, FrameFormat, RequestedFormat, RequestedFormatType, Resolution,
    },
};

pub struct CameraCapture {
    cam: Camera,
    width: u32,
    height: u32,
    mirror: bool,
}

impl CameraCapture {
    /// Open camera `index`, asking for the closest mode to `width`×`height` @ 30 FPS.
    pub fn new(index: u32, width: u32, height: u32, mirror: bool) -> Result<Self, Error> {
        let fmt = CameraFormat::new(Resolution::new(width, height), FrameFormat::YUYV, 30);
        let req = RequestedFormat::new::<RgbFormat>(RequestedFormatType::Closest(fmt));

        let mut cam = Camera::new(CameraIndex::Index(index), req)
            .map_err(|e| Error::CameraInit(format!("Create camera: {e}")))?;
        cam.open_stream()
            .map_err(|e| Error::CameraInit(format!("Open stream: {e}")))?;

        // The driver may settle on a different mode than requested.
        let actual = cam.resolution();
        log::info!(
            "camera {index} streaming at {}x{} (requested {width}x{height})",
            actual.width(),
            actual.height()
        );

        Ok(Self { cam, width: actual.width(), height: actual.height(), mirror })
    }

    /// Block until the next frame arrives and convert it for the window.
    pub fn next_frame(&mut self) -> Result<FrameBuffer, Error> {
        let frame = self
            .cam
            .frame()
            .map_err(|e| Error::CameraFrame(format!("Fetch frame: {e}")))?;

        let decoded = frame
            .decode_image::<RgbFormat>()
            .map_err(|e| Error::CameraFrame(format!("Decode RGB: {e}")))?;

        // Rebuild from raw bytes so nokhwa's `image` version need not match ours.
        let (w, h) = decoded.dimensions();
        let mut rgb = RgbImage::from_raw(w, h, decoded.into_raw())
            .ok_or_else(|| Error::CameraFrame(format!("Decode RGB: short buffer for {w}x{h}")))?;

        if self.mirror {
            imageops::flip_horizontal_in_place(&mut rgb);
        }
        Ok(rgb_to_frame(&rgb))
    }

    /// The resolution the camera is actually delivering.
    pub fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Pack an RGB image row-major into 0x00RRGGBB.
pub fn rgb_to_frame(img: &RgbImage) -> FrameBuffer {
    let (w, h) = img.dimensions();
    let pixels = img
        .pixels()
        .map(|p| ((p[0] as u32) << 16) | ((p[1] as u32) << 8) | p[2] as u32)
        .collect();
    FrameBuffer { width: w as usize, height: h as usize, pixels }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn packs_rows_in_order() {
        let mut img = RgbImage::new(2, 2);
        img.put_pixel(1, 0, Rgb([0xAA, 0xBB, 0xCC]));
        img.put_pixel(0, 1, Rgb([1, 2, 3]));
        let fb = rgb_to_frame(&img);
        assert_eq!((fb.width, fb.height), (2, 2));
        assert_eq!(fb.pixels, vec![0, 0x00_AA_BB_CC, 0x00_01_02_03, 0]);
    }

    #[test]
    fn mirroring_swaps_columns() {
        let mut img = RgbImage::new(3, 1);
        img.put_pixel(0, 0, Rgb([9, 9, 9]));
        imageops::flip_horizontal_in_place(&mut img);
        assert_eq!(rgb_to_frame(&img).pixels, vec![0, 0, 0x00_09_09_09]);
    }
}
