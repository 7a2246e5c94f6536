//! Primitive shapes for Sketch.
//!
//! Every shape except `point` maps its points through the transform before
//! handing device coordinates to the canvas.

use super::Sketch;
use crate::color::Rgba;
use crate::geometry::{ellipse_bounds, rect_corners, rounded_rect_outline, Point};

impl Sketch {
    fn fill_rgba(&self) -> Option<Rgba> {
        self.state.fill.to_rgba()
    }

    /// Outline color, or `None` when there is no stroke color or zero weight.
    fn outline_rgba(&self) -> Option<Rgba> {
        if self.state.stroke_weight > 0.0 {
            self.state.stroke.to_rgba()
        } else {
            None
        }
    }

    fn draw_polygon(&mut self, points: &[Point]) {
        let points = self.state.transform.apply(points);
        let (fill, outline) = (self.fill_rgba(), self.outline_rgba());
        self.state.canvas.borrow_mut().draw_polygon(
            &points,
            fill,
            outline,
            self.state.stroke_weight,
        );
    }

    /// Draw a rectangle, positioned according to the rect mode.
    pub fn rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        log::debug!(target: "sketch", "rect {} {} {} {}", x, y, w, h);
        let corners = rect_corners(self.state.rect_mode, x, y, w, h);
        self.draw_polygon(&corners);
    }

    /// Draw a rectangle with corners rounded to `radius`.
    pub fn rect_rounded(&mut self, x: f64, y: f64, w: f64, h: f64, radius: f64) {
        log::debug!(target: "sketch", "rect_rounded {} {} {} {} {}", x, y, w, h, radius);
        let [top_left, _, bottom_right, _] = rect_corners(self.state.rect_mode, x, y, w, h);
        let outline = rounded_rect_outline(
            top_left.0,
            top_left.1,
            bottom_right.0 - top_left.0,
            bottom_right.1 - top_left.1,
            radius,
        );
        self.draw_polygon(&outline);
    }

    pub fn square(&mut self, x: f64, y: f64, size: f64) {
        self.rect(x, y, size, size);
    }

    /// Draw an ellipse, positioned according to the ellipse mode.
    pub fn ellipse(&mut self, x: f64, y: f64, w: f64, h: f64) {
        log::debug!(target: "sketch", "ellipse {} {} {} {}", x, y, w, h);
        let bounds = ellipse_bounds(self.state.ellipse_mode, x, y, w, h);
        let mapped = self.state.transform.apply(&bounds);
        let (fill, outline) = (self.fill_rgba(), self.outline_rgba());
        self.state.canvas.borrow_mut().draw_ellipse(
            [mapped[0], mapped[1]],
            fill,
            outline,
            self.state.stroke_weight,
        );
    }

    /// `ellipse(x, y, size, size)`.
    pub fn circle(&mut self, x: f64, y: f64, size: f64) {
        self.ellipse(x, y, size, size);
    }

    pub fn triangle(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) {
        log::debug!(target: "sketch", "triangle");
        self.draw_polygon(&[(x1, y1), (x2, y2), (x3, y3)]);
    }

    #[allow(clippy::too_many_arguments)]
    pub fn quad(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x3: f64,
        y3: f64,
        x4: f64,
        y4: f64,
    ) {
        log::debug!(target: "sketch", "quad");
        self.draw_polygon(&[(x1, y1), (x2, y2), (x3, y3), (x4, y4)]);
    }

    /// Stroke a segment. Nothing is drawn without an outline.
    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        log::debug!(target: "sketch", "line {} {} {} {}", x1, y1, x2, y2);
        let points = self.state.transform.apply(&[(x1, y1), (x2, y2)]);
        self.stroke_path(&points);
    }

    fn stroke_path(&mut self, points: &[Point]) {
        let Some(color) = self.outline_rgba() else {
            return;
        };
        let mut canvas = self.state.canvas.borrow_mut();
        for pair in points.windows(2) {
            canvas.draw_line(pair[0], pair[1], color, self.state.stroke_weight);
        }
    }

    /// Set one pixel to the stroke color.
    ///
    /// Unlike every other shape the position is used as given: translate,
    /// rotate and scale do not apply. The stroke weight is ignored too.
    pub fn point(&mut self, x: f64, y: f64) {
        log::debug!(target: "sketch", "point {} {}", x, y);
        if let Some(color) = self.state.stroke.to_rgba() {
            self.state.canvas.borrow_mut().draw_point((x, y), color);
        }
    }

    // --- Free-form shapes ---

    /// Start collecting vertices, discarding any collected so far.
    pub fn begin_shape(&mut self) {
        log::debug!(target: "sketch", "begin_shape");
        self.vertices.clear();
    }

    pub fn vertex(&mut self, x: f64, y: f64) {
        self.vertices.push((x, y));
    }

    /// Draw the collected vertices and clear them.
    ///
    /// With `close` they form a filled and outlined polygon; otherwise
    /// consecutive vertices are joined by stroked segments.
    pub fn end_shape(&mut self, close: bool) {
        let vertices = std::mem::take(&mut self.vertices);
        log::debug!(target: "sketch", "end_shape close={} ({} vertices)", close, vertices.len());

        let needed = if close { 3 } else { 2 };
        if vertices.len() < needed {
            log::warn!(
                target: "sketch",
                "end_shape with {} vertices draws nothing useful; need at least {}",
                vertices.len(),
                needed
            );
            if vertices.is_empty() {
                return;
            }
        }

        if close {
            self.draw_polygon(&vertices);
        } else {
            let points = self.state.transform.apply(&vertices);
            self.stroke_path(&points);
        }
    }
}
