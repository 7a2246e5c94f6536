//! Drawing state that can be saved and restored.

use crate::canvas::Canvas;
use crate::color::Color;
use crate::config::SketchConfig;
use crate::error::SketchResult;
use crate::style::{AngleMode, ColorMode, ShapeMode};
use crate::transform::TransformState;
use std::cell::RefCell;
use std::rc::Rc;

/// Shared handle to the surface a sketch draws on.
pub(crate) type CanvasHandle = Rc<RefCell<Canvas>>;

/// Drawing state that can be saved and restored.
///
/// Cloning shares the canvas handle: a restored snapshot points back at the
/// canvas that was current when it was taken, with whatever pixels it holds now.
#[derive(Debug, Clone)]
pub struct DrawingState {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Color used by `create_canvas` and `background`.
    pub background: Color,
    /// Current fill color.
    pub fill: Color,
    /// Current outline color.
    pub stroke: Color,
    /// Current outline width.
    pub stroke_weight: f64,
    /// Surface shapes are drawn on.
    pub(crate) canvas: CanvasHandle,
    /// Composed translate/rotate matrix and the running scale factors.
    pub transform: TransformState,
    pub rect_mode: ShapeMode,
    pub ellipse_mode: ShapeMode,
    pub angle_mode: AngleMode,
    /// Sum of every `rotate` angle since the last reset, in radians.
    pub rotation_angle: f64,
    pub color_mode: ColorMode,
    /// Channel maximum for raw color input in `color_mode`.
    pub color_max: f64,
}

impl DrawingState {
    /// Build the initial state described by `config`, creating its canvas.
    pub fn from_config(config: &SketchConfig) -> SketchResult<Self> {
        config.validate()?;
        let background = config.background_color()?;
        let color_mode = config.color_mode()?;
        let canvas = Canvas::new(
            config.width,
            config.height,
            background.to_rgba().unwrap_or_default(),
        )?;

        Ok(Self {
            width: config.width,
            height: config.height,
            background,
            fill: config.fill_color()?,
            stroke: config.stroke_color()?,
            stroke_weight: config.stroke_weight,
            canvas: Rc::new(RefCell::new(canvas)),
            transform: TransformState::default(),
            rect_mode: config.rect_mode()?,
            ellipse_mode: config.ellipse_mode()?,
            angle_mode: config.angle_mode()?,
            rotation_angle: 0.0,
            color_mode,
            color_max: config.color_max.unwrap_or(color_mode.default_max()),
        })
    }
}
