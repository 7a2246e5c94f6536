//! Transform operations for Sketch.

use super::Sketch;

impl Sketch {
    /// Move the origin by `(dx, dy)` in the current frame.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        log::debug!(target: "sketch", "translate {} {}", dx, dy);
        self.state.transform.translate(dx, dy);
    }

    /// Rotate the current frame by `angle` in the active angle unit.
    pub fn rotate(&mut self, angle: f64) {
        log::debug!(target: "sketch", "rotate {}", angle);
        let radians = self.state.angle_mode.to_radians(angle);
        self.state.transform.rotate(radians);
        self.state.rotation_angle += radians;
    }

    /// Scale later shapes about their own centers; `sy` defaults to `sx`.
    pub fn scale(&mut self, sx: f64, sy: Option<f64>) {
        let sy = sy.unwrap_or(sx);
        log::debug!(target: "sketch", "scale {} {}", sx, sy);
        self.state.transform.scale(sx, sy);
    }

    /// Drop every translate, rotate and scale.
    pub fn reset_matrix(&mut self) {
        log::debug!(target: "sketch", "reset_matrix");
        self.state.transform.reset();
        self.state.rotation_angle = 0.0;
    }
}
