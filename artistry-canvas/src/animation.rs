//! Looping GIF export of rendered frames.

use crate::canvas::Canvas;
use crate::error::{SketchError, SketchResult};
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, RgbaImage};
use std::io::Write;
use std::path::Path;

/// Size, length and speed of an exported animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GifOptions {
    /// Canvas width recreated for every frame.
    pub width: u32,
    /// Canvas height recreated for every frame.
    pub height: u32,
    /// Number of frames to render.
    pub frames: u32,
    /// Frames per second; each frame lasts `1000 / frame_rate` ms.
    pub frame_rate: u32,
}

impl Default for GifOptions {
    fn default() -> Self {
        Self {
            width: 400,
            height: 400,
            frames: 100,
            frame_rate: 60,
        }
    }
}

impl GifOptions {
    pub fn validate(&self) -> SketchResult<()> {
        if self.frames == 0 {
            return Err(SketchError::InvalidArgument(
                "animation needs at least one frame".to_string(),
            ));
        }
        if self.frame_rate == 0 {
            return Err(SketchError::InvalidArgument(
                "frame rate must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Display time of a single frame.
    pub fn frame_delay(&self) -> Delay {
        Delay::from_numer_denom_ms(1000, self.frame_rate.max(1))
    }
}

fn to_frame(canvas: &Canvas, delay: Delay) -> SketchResult<Frame> {
    let buffer = RgbaImage::from_raw(canvas.width(), canvas.height(), canvas.image_data())
        .ok_or_else(|| SketchError::ImageError("frame buffer size mismatch".to_string()))?;
    Ok(Frame::from_parts(buffer, 0, 0, delay))
}

/// Encode `frames` as an infinitely looping GIF in memory.
pub fn to_gif(frames: &[Canvas], delay: Delay) -> SketchResult<Vec<u8>> {
    if frames.is_empty() {
        return Err(SketchError::InvalidArgument(
            "animation needs at least one frame".to_string(),
        ));
    }
    let frames = frames
        .iter()
        .map(|canvas| to_frame(canvas, delay))
        .collect::<SketchResult<Vec<_>>>()?;

    let mut buf = Vec::new();
    {
        // The trailer is written when the encoder drops
        let mut encoder = GifEncoder::new(&mut buf);
        encoder.set_repeat(Repeat::Infinite)?;
        encoder.encode_frames(frames)?;
    }
    Ok(buf)
}

/// Encode `frames` as an infinitely looping GIF and write it to `writer`.
pub fn encode_gif<W: Write>(
    mut writer: W,
    frames: &[Canvas],
    delay: Delay,
) -> SketchResult<()> {
    writer.write_all(&to_gif(frames, delay)?)?;
    writer.flush()?;
    Ok(())
}

/// Encode `frames` as a looping GIF file at `path`.
pub fn save_gif_frames(
    path: impl AsRef<Path>,
    frames: &[Canvas],
    delay: Delay,
) -> SketchResult<()> {
    let path = path.as_ref();
    log::debug!(target: "canvas", "save_gif {} ({} frames)", path.display(), frames.len());
    std::fs::write(path, to_gif(frames, delay)?)?;
    Ok(())
}
