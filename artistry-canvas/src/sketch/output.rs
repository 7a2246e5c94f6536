//! Still image export, preview and animation for Sketch.

use super::Sketch;
use crate::animation::{save_gif_frames, GifOptions};
use crate::color::Rgba;
use crate::error::SketchResult;
use std::path::{Path, PathBuf};
use std::process::Command;

impl Sketch {
    /// Color of one canvas pixel, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        self.state.canvas.borrow().pixel(x, y)
    }

    /// Encode the current canvas as PNG.
    pub fn to_png(&self) -> SketchResult<Vec<u8>> {
        self.state.canvas.borrow().to_png()
    }

    /// Write the current canvas to `path` as PNG.
    pub fn save(&self, path: impl AsRef<Path>) -> SketchResult<()> {
        self.state.canvas.borrow().save_png(path)
    }

    /// Open the current canvas in the platform image viewer.
    ///
    /// The image is written to a per-process file in the temp directory,
    /// overwritten by later calls. Returns the path of that file. The viewer
    /// is not waited on and keeps running after this returns.
    pub fn show(&self) -> SketchResult<PathBuf> {
        let path = show_path();
        self.save(&path)?;
        log::info!(target: "sketch", "opening {}", path.display());
        let child = viewer_command(&path).spawn()?;
        log::debug!(target: "sketch", "viewer pid {}", child.id());
        drop(child);
        Ok(path)
    }

    /// Render `options.frames` frames with `draw` and save them as a looping GIF.
    ///
    /// Each frame starts from a copy of this sketch's current state on a fresh
    /// `options.width` x `options.height` canvas, so nothing a frame changes
    /// carries over to the next one or back to `self`. `draw` gets the frame
    /// number starting at 0.
    pub fn save_gif<F>(
        &self,
        path: impl AsRef<Path>,
        options: &GifOptions,
        mut draw: F,
    ) -> SketchResult<()>
    where
        F: FnMut(&mut Sketch, u32) -> SketchResult<()>,
    {
        options.validate()?;
        log::debug!(
            target: "sketch",
            "save_gif {} frames at {} fps",
            options.frames,
            options.frame_rate
        );

        let mut frames = Vec::with_capacity(options.frames as usize);
        for frame in 0..options.frames {
            let mut sketch = self.detached();
            sketch.create_canvas(options.width, options.height)?;
            draw(&mut sketch, frame)?;
            let canvas = sketch.state.canvas.borrow().clone();
            frames.push(canvas);
        }
        save_gif_frames(path, &frames, options.frame_delay())
    }
}

fn show_path() -> PathBuf {
    std::env::temp_dir().join(format!("artistry-{}.png", std::process::id()))
}

#[cfg(target_os = "macos")]
fn viewer_command(path: &Path) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(path);
    cmd
}

#[cfg(target_os = "windows")]
fn viewer_command(path: &Path) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", ""]).arg(path);
    cmd
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn viewer_command(path: &Path) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(path);
    cmd
}
