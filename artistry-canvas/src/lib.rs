//! Immediate-mode creative-coding drawing API rendered with tiny-skia.
//!
//! A [`Sketch`] holds a canvas and the current drawing state: fill and stroke
//! colors, stroke weight, color/shape/angle modes and a translate/rotate
//! matrix with a separate per-shape scale. Shapes read that state, map their
//! points through the transform and rasterize onto the canvas. It uses:
//! - `tiny-skia` for rasterization
//! - `png` for still images
//! - `image` for looping GIF animations
//!
//! # Example
//!
//! ```rust,ignore
//! use artistry_canvas::{ColorMode, Sketch};
//!
//! let mut s = Sketch::new()?;
//! s.color_mode(ColorMode::Hsb, None);
//! s.fill((200, 80, 90));
//! s.circle(200.0, 200.0, 120.0);
//! s.save("circle.png")?;
//! ```

mod animation;
mod canvas;
mod color;
mod config;
mod convert;
mod drawing_state;
mod error;
mod geometry;
mod math;
mod matrix;
mod noise;
mod sketch;
mod style;
mod transform;

// Re-export public API
pub use animation::{encode_gif, save_gif_frames, to_gif, GifOptions};
pub use canvas::Canvas;
pub use color::{Color, ColorInput, Rgba, BLACK, WHITE};
pub use config::SketchConfig;
pub use convert::{hsb_to_rgb, hsl_to_rgb, rgb_to_hsb, rgb_to_hsl};
pub use drawing_state::DrawingState;
pub use error::{SketchError, SketchResult};
pub use geometry::{ellipse_bounds, normalize_bounds, rect_corners, rounded_rect_outline, Point};
pub use math::{constrain, degrees, dist, inv_lerp, lerp, lerp_color, radians, remap};
pub use matrix::Affine;
pub use noise::{Noise, DEFAULT_NOISE_SEED};
pub use sketch::Sketch;
pub use style::{AngleMode, ColorMode, ShapeMode};
pub use transform::{bounding_center, TransformState};
