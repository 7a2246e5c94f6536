//! The drawing context: current state, its save/restore stack and the
//! commands that read and change it.

mod output;
mod shapes;
mod transform;

use crate::canvas::Canvas;
use crate::color::{Color, ColorInput};
use crate::config::SketchConfig;
use crate::drawing_state::DrawingState;
use crate::error::{SketchError, SketchResult};
use crate::geometry::Point;
use crate::noise::{Noise, DEFAULT_NOISE_SEED};
use crate::style::{AngleMode, ColorMode, ShapeMode};
use std::cell::{Ref, RefCell};
use std::rc::Rc;

/// A drawing context bound to a canvas.
///
/// Every command reads or changes the current [`DrawingState`]. `push` and
/// `pop` save and restore the whole state at once.
///
/// ```rust,ignore
/// use artistry_canvas::{Sketch, ShapeMode};
///
/// let mut s = Sketch::new()?;
/// s.rect_mode(ShapeMode::Center);
/// s.fill((255, 0, 0));
/// s.rect(200.0, 200.0, 50.0, 50.0);
/// s.save("out.png")?;
/// ```
#[derive(Debug)]
pub struct Sketch {
    /// Current drawing state.
    pub(crate) state: DrawingState,
    /// Stack of saved drawing states.
    state_stack: Vec<DrawingState>,
    /// Vertices collected since `begin_shape`.
    pub(crate) vertices: Vec<Point>,
    pub(crate) noise: Noise,
}

impl Sketch {
    /// Create a sketch with the default 400x400 canvas and colors.
    pub fn new() -> SketchResult<Self> {
        Self::with_config(&SketchConfig::default())
    }

    /// Create a sketch whose initial state comes from `config`.
    pub fn with_config(config: &SketchConfig) -> SketchResult<Self> {
        let state = DrawingState::from_config(config)?;
        log::debug!(target: "sketch", "new {}x{}", state.width, state.height);
        Ok(Self {
            state,
            state_stack: Vec::new(),
            vertices: Vec::new(),
            noise: Noise::new(config.noise_seed.unwrap_or(DEFAULT_NOISE_SEED)),
        })
    }

    /// Independent sketch starting from this one's current state.
    ///
    /// The copy has an empty stack and vertex list and shares the current
    /// canvas handle until it creates its own.
    pub(crate) fn detached(&self) -> Self {
        Self {
            state: self.state.clone(),
            state_stack: Vec::new(),
            vertices: Vec::new(),
            noise: self.noise.clone(),
        }
    }

    /// Replace the canvas with a fresh `width` x `height` surface painted
    /// with the background color.
    pub fn create_canvas(&mut self, width: u32, height: u32) -> SketchResult<()> {
        log::debug!(target: "sketch", "create_canvas {}x{}", width, height);
        let background = self.state.background.to_rgba().unwrap_or_default();
        let canvas = Canvas::new(width, height, background)?;
        self.state.width = width;
        self.state.height = height;
        self.state.canvas = Rc::new(RefCell::new(canvas));
        Ok(())
    }

    /// Read access to the current canvas.
    ///
    /// The borrow ends before any drawing command can run, since those take
    /// `&mut self`. Clone the canvas to keep a snapshot.
    pub fn canvas(&self) -> Ref<'_, Canvas> {
        self.state.canvas.borrow()
    }

    pub fn width(&self) -> u32 {
        self.state.width
    }

    pub fn height(&self) -> u32 {
        self.state.height
    }

    /// The current drawing state.
    pub fn state(&self) -> &DrawingState {
        &self.state
    }

    /// Number of states saved by `push` and not yet restored.
    pub fn stack_depth(&self) -> usize {
        self.state_stack.len()
    }

    // --- State management ---

    /// Save the current drawing state.
    pub fn push(&mut self) {
        log::debug!(target: "sketch", "push");
        self.state_stack.push(self.state.clone());
    }

    /// Restore the most recently saved drawing state.
    pub fn pop(&mut self) -> SketchResult<()> {
        log::debug!(target: "sketch", "pop");
        let state = self.state_stack.pop().ok_or(SketchError::EmptyStateStack)?;
        self.state = state;
        Ok(())
    }

    // --- Modes ---

    /// Set how `rect` interprets its arguments.
    pub fn rect_mode(&mut self, mode: ShapeMode) {
        log::debug!(target: "sketch", "rect_mode {}", mode);
        self.state.rect_mode = mode;
    }

    /// Set how `ellipse` interprets its arguments.
    pub fn ellipse_mode(&mut self, mode: ShapeMode) {
        log::debug!(target: "sketch", "ellipse_mode {}", mode);
        self.state.ellipse_mode = mode;
    }

    /// Set the unit of `rotate` and the trigonometry helpers.
    pub fn angle_mode(&mut self, mode: AngleMode) {
        log::debug!(target: "sketch", "angle_mode {}", mode);
        self.state.angle_mode = mode;
    }

    /// Set the color space of raw color input and its channel maximum.
    ///
    /// Without `max` the maximum falls back to the mode's default (255 for
    /// RGB, 100 for HSB and HSL). A non-positive `max` is ignored.
    pub fn color_mode(&mut self, mode: ColorMode, max: Option<f64>) {
        log::debug!(target: "sketch", "color_mode {} {:?}", mode, max);
        let max = match max {
            Some(m) if m.is_finite() && m > 0.0 => m,
            Some(m) => {
                log::warn!(target: "sketch", "ignoring color maximum {m}; using the {mode} default");
                mode.default_max()
            }
            None => mode.default_max(),
        };
        self.state.color_mode = mode;
        self.state.color_max = max;
    }

    // --- Colors ---

    /// Build an opaque color from channels in the active color mode.
    pub fn color(&self, c1: f64, c2: f64, c3: f64) -> Color {
        self.color_with_alpha(c1, c2, c3, 255.0)
    }

    /// Build a color from channels in the active color mode with an alpha in `0..=255`.
    pub fn color_with_alpha(&self, c1: f64, c2: f64, c3: f64, alpha: f64) -> Color {
        Color::from_channels(
            self.state.color_mode,
            [c1, c2, c3],
            alpha,
            self.state.color_max,
        )
    }

    fn resolve(&self, input: ColorInput) -> Color {
        input.resolve(self.state.color_mode, self.state.color_max)
    }

    /// Set the fill color.
    pub fn fill(&mut self, color: impl Into<ColorInput>) {
        let color = self.resolve(color.into());
        log::debug!(target: "sketch", "fill {}", color);
        self.state.fill = color;
    }

    /// Disable filling.
    pub fn no_fill(&mut self) {
        log::debug!(target: "sketch", "no_fill");
        self.state.fill = Color::None;
    }

    /// Set the outline color.
    pub fn stroke(&mut self, color: impl Into<ColorInput>) {
        let color = self.resolve(color.into());
        log::debug!(target: "sketch", "stroke {}", color);
        self.state.stroke = color;
    }

    /// Disable outlines by setting the stroke weight to zero.
    ///
    /// The stroke color is kept, so `point` still draws with it.
    pub fn no_stroke(&mut self) {
        log::debug!(target: "sketch", "no_stroke");
        self.state.stroke_weight = 0.0;
    }

    /// Set the outline width. Negative or non-finite values are ignored.
    pub fn stroke_weight(&mut self, weight: f64) {
        if weight.is_finite() && weight >= 0.0 {
            log::debug!(target: "sketch", "stroke_weight {}", weight);
            self.state.stroke_weight = weight;
        } else {
            log::warn!(target: "sketch", "ignoring stroke_weight {weight}");
        }
    }

    /// Paint the whole canvas with a color.
    ///
    /// The state's background, used by later `create_canvas` calls, is not changed.
    pub fn background(&mut self, color: impl Into<ColorInput>) {
        let color = self.resolve(color.into());
        log::debug!(target: "sketch", "background {}", color);
        if let Some(rgba) = color.to_rgba() {
            self.state.canvas.borrow_mut().fill_background(rgba);
        }
    }

    // --- Noise ---

    /// Reseed the noise generator, keeping its octave settings.
    pub fn noise_seed(&mut self, seed: u64) {
        log::debug!(target: "sketch", "noise_seed {}", seed);
        let (octaves, falloff) = self.noise.detail();
        self.noise = Noise::new(seed);
        self.noise.set_detail(octaves, falloff);
    }

    /// Set octave count and per-octave falloff of the noise generator.
    pub fn noise_detail(&mut self, octaves: u32, falloff: f64) {
        self.noise.set_detail(octaves, falloff);
    }

    /// 2D noise in `[0, 1]`.
    pub fn noise(&self, x: f64, y: f64) -> f64 {
        self.noise.get(x, y, 0.0)
    }

    /// 3D noise in `[0, 1]`.
    pub fn noise3(&self, x: f64, y: f64, z: f64) -> f64 {
        self.noise.get(x, y, z)
    }

    // --- Trigonometry in the active angle unit ---

    pub fn sin(&self, angle: f64) -> f64 {
        self.state.angle_mode.to_radians(angle).sin()
    }

    pub fn cos(&self, angle: f64) -> f64 {
        self.state.angle_mode.to_radians(angle).cos()
    }

    pub fn tan(&self, angle: f64) -> f64 {
        self.state.angle_mode.to_radians(angle).tan()
    }
}
