//! Mode enums that change how drawing arguments are interpreted.

use crate::error::SketchError;
use std::fmt;
use std::str::FromStr;

/// Interpretation of the positional arguments of `rect` and `ellipse`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeMode {
    /// `(x, y)` is the top-left corner, `(w, h)` the size.
    Corner,
    /// `(x, y)` and `(w, h)` are two opposite corners.
    Corners,
    /// `(x, y)` is the center, `(w, h)` the size.
    Center,
    /// `(x, y)` is the center, `(w, h)` the half-size.
    Radius,
}

impl ShapeMode {
    fn parse(kind: &'static str, s: &str) -> Result<Self, SketchError> {
        match s.to_ascii_uppercase().as_str() {
            "CORNER" => Ok(ShapeMode::Corner),
            "CORNERS" => Ok(ShapeMode::Corners),
            "CENTER" => Ok(ShapeMode::Center),
            "RADIUS" => Ok(ShapeMode::Radius),
            _ => Err(SketchError::InvalidMode {
                kind,
                value: s.to_string(),
                expected: "'CORNER', 'CORNERS', 'CENTER', or 'RADIUS'",
            }),
        }
    }

    /// Parse a mode name for use with `rect_mode`.
    pub fn parse_rect_mode(s: &str) -> Result<Self, SketchError> {
        Self::parse("rectMode", s)
    }

    /// Parse a mode name for use with `ellipse_mode`.
    pub fn parse_ellipse_mode(s: &str) -> Result<Self, SketchError> {
        Self::parse("ellipseMode", s)
    }
}

impl FromStr for ShapeMode {
    type Err = SketchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse("shape mode", s)
    }
}

impl fmt::Display for ShapeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShapeMode::Corner => "CORNER",
            ShapeMode::Corners => "CORNERS",
            ShapeMode::Center => "CENTER",
            ShapeMode::Radius => "RADIUS",
        };
        f.write_str(name)
    }
}

/// Unit used by `rotate` and the trigonometry helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleMode {
    Degrees,
    #[default]
    Radians,
}

impl AngleMode {
    /// Convert an angle expressed in this unit to radians.
    pub fn to_radians(self, angle: f64) -> f64 {
        match self {
            AngleMode::Degrees => angle.to_radians(),
            AngleMode::Radians => angle,
        }
    }
}

impl FromStr for AngleMode {
    type Err = SketchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "DEGREES" => Ok(AngleMode::Degrees),
            "RADIANS" => Ok(AngleMode::Radians),
            _ => Err(SketchError::InvalidMode {
                kind: "angle mode",
                value: s.to_string(),
                expected: "'DEGREES' or 'RADIANS'",
            }),
        }
    }
}

impl fmt::Display for AngleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AngleMode::Degrees => "DEGREES",
            AngleMode::Radians => "RADIANS",
        })
    }
}

/// Color space used to interpret raw numeric color channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    #[default]
    Rgb,
    Hsb,
    Hsl,
}

impl ColorMode {
    /// Channel maximum used when none is given explicitly.
    ///
    /// For RGB this is the maximum of every primary; for HSB and HSL it is the
    /// maximum of saturation and brightness/lightness (hue is always degrees).
    pub fn default_max(self) -> f64 {
        match self {
            ColorMode::Rgb => 255.0,
            ColorMode::Hsb | ColorMode::Hsl => 100.0,
        }
    }
}

impl FromStr for ColorMode {
    type Err = SketchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "RGB" => Ok(ColorMode::Rgb),
            "HSB" => Ok(ColorMode::Hsb),
            "HSL" => Ok(ColorMode::Hsl),
            _ => Err(SketchError::InvalidMode {
                kind: "color mode",
                value: s.to_string(),
                expected: "'RGB', 'HSB', or 'HSL'",
            }),
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ColorMode::Rgb => "RGB",
            ColorMode::Hsb => "HSB",
            ColorMode::Hsl => "HSL",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("CORNER", ShapeMode::Corner)]
    #[case("corners", ShapeMode::Corners)]
    #[case("Center", ShapeMode::Center)]
    #[case("RADIUS", ShapeMode::Radius)]
    fn test_parse_shape_mode(#[case] input: &str, #[case] expected: ShapeMode) {
        assert_eq!(input.parse::<ShapeMode>().unwrap(), expected);
        assert_eq!(ShapeMode::parse_rect_mode(input).unwrap(), expected);
    }

    #[test]
    fn test_invalid_rect_mode_names_options() {
        let err = ShapeMode::parse_rect_mode("MIDDLE").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("rectMode"));
        assert!(msg.contains("'CORNER', 'CORNERS', 'CENTER', or 'RADIUS'"));
    }

    #[test]
    fn test_invalid_ellipse_mode_names_options() {
        let err = ShapeMode::parse_ellipse_mode("oval").unwrap_err();
        assert!(matches!(
            &err,
            SketchError::InvalidMode { kind: "ellipseMode", value, .. } if value == "oval"
        ));
        let msg = err.to_string();
        assert!(msg.contains("ellipseMode"));
        assert!(msg.contains("'CORNER', 'CORNERS', 'CENTER', or 'RADIUS'"));
        assert_eq!(ShapeMode::parse_ellipse_mode("radius").unwrap(), ShapeMode::Radius);
    }

    #[test]
    fn test_invalid_angle_and_color_modes() {
        let err = "GRADS".parse::<AngleMode>().unwrap_err();
        assert!(err.to_string().contains("'DEGREES' or 'RADIANS'"));

        let err = "CMYK".parse::<ColorMode>().unwrap_err();
        assert!(matches!(err, SketchError::InvalidMode { kind: "color mode", .. }));
        assert!(err.to_string().contains("'RGB', 'HSB', or 'HSL'"));
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for mode in [ColorMode::Rgb, ColorMode::Hsb, ColorMode::Hsl] {
            assert_eq!(mode.to_string().parse::<ColorMode>().unwrap(), mode);
        }
        assert_eq!("degrees".parse::<AngleMode>().unwrap(), AngleMode::Degrees);
        assert!((AngleMode::Degrees.to_radians(180.0) - std::f64::consts::PI).abs() < 1e-12);
    }
}
