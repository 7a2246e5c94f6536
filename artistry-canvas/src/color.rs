//! Color values authored in RGB, HSB or HSL and resolved to 8-bit RGBA.

use crate::convert::{hsb_to_rgb, hsl_to_rgb, rgb_to_hsb};
use crate::style::ColorMode;

/// A backend-neutral RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Create a color from 8-bit RGBA components.
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Components as a `[r, g, b, a]` array.
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<Rgba> for tiny_skia::Color {
    fn from(c: Rgba) -> Self {
        tiny_skia::Color::from_rgba8(c.r, c.g, c.b, c.a)
    }
}

impl From<[u8; 4]> for Rgba {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }
}

/// A color as authored, or the absence of one.
///
/// Channel values keep the meaning of the mode they were created in and are
/// only resolved to RGBA when a shape is drawn. `max` is the value that maps
/// to a full channel: every primary for RGB, saturation and
/// brightness/lightness for HSB/HSL. Alpha is always on a 0-255 scale.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Color {
    /// No color: suppresses the fill or outline it is assigned to.
    #[default]
    None,
    Rgb {
        r: f64,
        g: f64,
        b: f64,
        alpha: f64,
        max: f64,
    },
    Hsb {
        h: f64,
        s: f64,
        b: f64,
        alpha: f64,
        max: f64,
    },
    Hsl {
        h: f64,
        s: f64,
        l: f64,
        alpha: f64,
        max: f64,
    },
}

/// Opaque black.
pub const BLACK: Color = Color::Rgb {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    alpha: 255.0,
    max: 255.0,
};
/// Opaque white.
pub const WHITE: Color = Color::Rgb {
    r: 255.0,
    g: 255.0,
    b: 255.0,
    alpha: 255.0,
    max: 255.0,
};

fn clamp_u8(v: f64) -> u8 {
    v.clamp(0.0, 255.0) as u8
}

impl Color {
    /// Opaque 8-bit RGB color.
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            alpha: 255.0,
            max: 255.0,
        }
    }

    /// 8-bit RGB color with alpha.
    pub fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color::Rgb {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            alpha: a as f64,
            max: 255.0,
        }
    }

    /// Opaque gray on the 0-255 scale.
    pub fn gray(v: u8) -> Self {
        Self::rgb8(v, v, v)
    }

    /// Build a color from three channels interpreted in `mode` with channel maximum `max`.
    pub fn from_channels(mode: ColorMode, channels: [f64; 3], alpha: f64, max: f64) -> Self {
        let [c1, c2, c3] = channels;
        match mode {
            ColorMode::Rgb => Color::Rgb {
                r: c1,
                g: c2,
                b: c3,
                alpha,
                max,
            },
            ColorMode::Hsb => Color::Hsb {
                h: c1,
                s: c2,
                b: c3,
                alpha,
                max,
            },
            ColorMode::Hsl => Color::Hsl {
                h: c1,
                s: c2,
                l: c3,
                alpha,
                max,
            },
        }
    }

    /// Whether this is the absent-color sentinel.
    pub fn is_none(&self) -> bool {
        matches!(self, Color::None)
    }

    /// The mode this color was authored in, if any.
    pub fn mode(&self) -> Option<ColorMode> {
        match self {
            Color::None => None,
            Color::Rgb { .. } => Some(ColorMode::Rgb),
            Color::Hsb { .. } => Some(ColorMode::Hsb),
            Color::Hsl { .. } => Some(ColorMode::Hsl),
        }
    }

    /// Resolve to 8-bit RGBA; `None` for the absent color.
    pub fn to_rgba(&self) -> Option<Rgba> {
        match *self {
            Color::None => None,
            Color::Rgb {
                r,
                g,
                b,
                alpha,
                max,
            } => {
                let scale = |v: f64| {
                    if max == 255.0 {
                        clamp_u8(v)
                    } else {
                        clamp_u8((v * 255.0 / max).floor())
                    }
                };
                Some(Rgba::from_rgba8(scale(r), scale(g), scale(b), clamp_u8(alpha)))
            }
            Color::Hsb {
                h,
                s,
                b,
                alpha,
                max,
            } => {
                let (r, g, b) = hsb_to_rgb(h, s / max, b / max);
                Some(Rgba::from_rgba8(r, g, b, clamp_u8(alpha)))
            }
            Color::Hsl {
                h,
                s,
                l,
                alpha,
                max,
            } => {
                let (r, g, b) = hsl_to_rgb(h, s / max, l / max);
                Some(Rgba::from_rgba8(r, g, b, clamp_u8(alpha)))
            }
        }
    }

    /// Hue (degrees), saturation and brightness (0-100) of the resolved color.
    pub fn to_hsb(&self) -> Option<(f64, f64, f64)> {
        let c = self.to_rgba()?;
        let (h, s, v) = rgb_to_hsb(c.r, c.g, c.b);
        Some((h, s * 100.0, v * 100.0))
    }
}

impl From<Rgba> for Color {
    fn from(c: Rgba) -> Self {
        Color::rgba8(c.r, c.g, c.b, c.a)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::None => write!(f, "Color(None)"),
            Color::Rgb { r, g, b, alpha, .. } => write!(f, "Color({r}, {g}, {b}, {alpha})"),
            Color::Hsb { h, s, b, alpha, .. } => write!(f, "Color(h={h}, s={s}, b={b}, {alpha})"),
            Color::Hsl { h, s, l, alpha, .. } => write!(f, "Color(h={h}, s={s}, l={l}, {alpha})"),
        }
    }
}

/// Argument accepted by `fill`, `stroke` and `background`.
///
/// Raw numbers are resolved against the sketch's active color mode once, when
/// the setter is called.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorInput {
    /// A prebuilt color, used as-is.
    Color(Color),
    /// A single channel repeated three times.
    Gray(f64),
    /// Three channels in the active color mode.
    Channels(f64, f64, f64),
}

impl From<Color> for ColorInput {
    fn from(c: Color) -> Self {
        ColorInput::Color(c)
    }
}

impl From<Rgba> for ColorInput {
    fn from(c: Rgba) -> Self {
        ColorInput::Color(c.into())
    }
}

impl From<f64> for ColorInput {
    fn from(v: f64) -> Self {
        ColorInput::Gray(v)
    }
}

impl From<i32> for ColorInput {
    fn from(v: i32) -> Self {
        ColorInput::Gray(v as f64)
    }
}

impl From<(f64, f64, f64)> for ColorInput {
    fn from((a, b, c): (f64, f64, f64)) -> Self {
        ColorInput::Channels(a, b, c)
    }
}

impl From<(i32, i32, i32)> for ColorInput {
    fn from((a, b, c): (i32, i32, i32)) -> Self {
        ColorInput::Channels(a as f64, b as f64, c as f64)
    }
}

impl From<[f64; 3]> for ColorInput {
    fn from([a, b, c]: [f64; 3]) -> Self {
        ColorInput::Channels(a, b, c)
    }
}

impl ColorInput {
    /// Resolve raw channels to an opaque RGB color using `mode` and `max`.
    ///
    /// RGB channels are rescaled with floor division by `max`; HSB/HSL
    /// channels go through the color-space conversion.
    pub fn resolve(self, mode: ColorMode, max: f64) -> Color {
        let (c1, c2, c3) = match self {
            ColorInput::Color(color) => return color,
            ColorInput::Gray(v) => (v, v, v),
            ColorInput::Channels(a, b, c) => (a, b, c),
        };
        let (r, g, b) = match mode {
            ColorMode::Rgb => {
                let scale = |v: f64| (v * 255.0 / max).floor();
                return Color::Rgb {
                    r: scale(c1),
                    g: scale(c2),
                    b: scale(c3),
                    alpha: 255.0,
                    max: 255.0,
                };
            }
            ColorMode::Hsb => hsb_to_rgb(c1, c2 / max, c3 / max),
            ColorMode::Hsl => hsl_to_rgb(c1, c2 / max, c3 / max),
        };
        Color::rgb8(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_has_no_rgba() {
        assert_eq!(Color::None.to_rgba(), None);
        assert!(Color::None.is_none());
        assert_eq!(Color::None.mode(), None);
    }

    #[test]
    fn test_rgb_passes_through_at_255() {
        let c = Color::rgba8(150, 35, 195, 128);
        assert_eq!(c.to_rgba(), Some(Rgba::from_rgba8(150, 35, 195, 128)));
    }

    #[test]
    fn test_rgb_rescales_by_max() {
        let c = Color::from_channels(ColorMode::Rgb, [1.0, 0.5, 0.0], 255.0, 1.0);
        assert_eq!(c.to_rgba(), Some(Rgba::from_rgba8(255, 127, 0, 255)));
    }

    #[test]
    fn test_out_of_range_channels_are_clamped() {
        let c = Color::Rgb {
            r: 300.0,
            g: -20.0,
            b: 10.0,
            alpha: 999.0,
            max: 255.0,
        };
        assert_eq!(c.to_rgba(), Some(Rgba::from_rgba8(255, 0, 10, 255)));
    }

    #[test]
    fn test_hsb_and_hsl_resolve_with_max() {
        let hsb = Color::from_channels(ColorMode::Hsb, [120.0, 100.0, 100.0], 255.0, 100.0);
        assert_eq!(hsb.to_rgba(), Some(Rgba::from_rgba8(0, 255, 0, 255)));

        let hsl = Color::from_channels(ColorMode::Hsl, [0.0, 1.0, 0.5], 200.0, 1.0);
        assert_eq!(hsl.to_rgba(), Some(Rgba::from_rgba8(255, 0, 0, 200)));
    }

    #[test]
    fn test_input_resolution_per_mode() {
        let gray = ColorInput::from(128).resolve(ColorMode::Rgb, 255.0);
        assert_eq!(gray.to_rgba(), Some(Rgba::from_rgba8(128, 128, 128, 255)));

        let scaled = ColorInput::from((1.0, 0.0, 0.5)).resolve(ColorMode::Rgb, 1.0);
        assert_eq!(scaled.to_rgba(), Some(Rgba::from_rgba8(255, 0, 127, 255)));

        let hsb = ColorInput::from((240, 100, 100)).resolve(ColorMode::Hsb, 100.0);
        assert_eq!(hsb.to_rgba(), Some(Rgba::from_rgba8(0, 0, 255, 255)));

        // Prebuilt colors keep their authoring mode
        let authored = Color::from_channels(ColorMode::Hsl, [0.0, 100.0, 50.0], 255.0, 100.0);
        assert_eq!(ColorInput::from(authored).resolve(ColorMode::Rgb, 255.0), authored);
    }

    #[test]
    fn test_to_hsb_reports_percentages() {
        let (h, s, v) = Color::rgb8(255, 0, 0).to_hsb().unwrap();
        assert_eq!((h, s, v), (0.0, 100.0, 100.0));
        assert!(Color::None.to_hsb().is_none());
    }
}
