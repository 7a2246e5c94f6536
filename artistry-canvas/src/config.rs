//! Serializable defaults for a new sketch.

use crate::color::{Color, Rgba};
use crate::error::{SketchError, SketchResult};
use crate::style::{AngleMode, ColorMode, ShapeMode};
use serde::{Deserialize, Serialize};

/// Initial drawing state of a [`Sketch`](crate::Sketch).
///
/// Colors are `[r, g, b]` or `[r, g, b, a]` on the 0-255 scale. `fill` and
/// `stroke` may be `null` to start with no fill or no outline. Mode names use
/// the same spelling as the mode setters (`"CENTER"`, `"DEGREES"`, `"HSB"`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    pub width: u32,
    pub height: u32,
    pub background: Vec<u8>,
    pub fill: Option<Vec<u8>>,
    pub stroke: Option<Vec<u8>>,
    pub stroke_weight: f64,
    pub rect_mode: String,
    pub ellipse_mode: String,
    pub angle_mode: String,
    pub color_mode: String,
    /// Channel maximum for `color_mode`; the mode's default when absent.
    pub color_max: Option<f64>,
    /// Seed for the noise generator; a fixed default when absent.
    pub noise_seed: Option<u64>,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            width: 400,
            height: 400,
            background: vec![245, 225, 135],
            fill: Some(vec![150, 35, 195]),
            stroke: Some(vec![100, 215, 225]),
            stroke_weight: 1.0,
            rect_mode: "CORNER".to_string(),
            ellipse_mode: "CENTER".to_string(),
            angle_mode: "RADIANS".to_string(),
            color_mode: "RGB".to_string(),
            color_max: None,
            noise_seed: None,
        }
    }
}

fn parse_rgba(field: &str, channels: &[u8]) -> SketchResult<Rgba> {
    match *channels {
        [r, g, b] => Ok(Rgba::from_rgba8(r, g, b, 255)),
        [r, g, b, a] => Ok(Rgba::from_rgba8(r, g, b, a)),
        _ => Err(SketchError::InvalidArgument(format!(
            "{field} must have 3 or 4 channels, got {}",
            channels.len()
        ))),
    }
}

fn parse_optional(field: &str, channels: &Option<Vec<u8>>) -> SketchResult<Color> {
    match channels {
        Some(c) => parse_rgba(field, c).map(Color::from),
        None => Ok(Color::None),
    }
}

impl SketchConfig {
    pub fn background_color(&self) -> SketchResult<Color> {
        parse_rgba("background", &self.background).map(Color::from)
    }

    pub fn fill_color(&self) -> SketchResult<Color> {
        parse_optional("fill", &self.fill)
    }

    pub fn stroke_color(&self) -> SketchResult<Color> {
        parse_optional("stroke", &self.stroke)
    }

    pub fn rect_mode(&self) -> SketchResult<ShapeMode> {
        ShapeMode::parse_rect_mode(&self.rect_mode)
    }

    pub fn ellipse_mode(&self) -> SketchResult<ShapeMode> {
        ShapeMode::parse_ellipse_mode(&self.ellipse_mode)
    }

    pub fn angle_mode(&self) -> SketchResult<AngleMode> {
        self.angle_mode.parse()
    }

    pub fn color_mode(&self) -> SketchResult<ColorMode> {
        self.color_mode.parse()
    }

    /// Check every field, reporting the first invalid one.
    pub fn validate(&self) -> SketchResult<()> {
        self.background_color()?;
        self.fill_color()?;
        self.stroke_color()?;
        self.rect_mode()?;
        self.ellipse_mode()?;
        self.angle_mode()?;
        self.color_mode()?;
        if !self.stroke_weight.is_finite() || self.stroke_weight < 0.0 {
            return Err(SketchError::InvalidArgument(format!(
                "stroke_weight must be a non-negative number, got {}",
                self.stroke_weight
            )));
        }
        if let Some(max) = self.color_max {
            if !(max.is_finite() && max > 0.0) {
                return Err(SketchError::InvalidArgument(format!(
                    "color_max must be positive, got {max}"
                )));
            }
        }
        Ok(())
    }
}
