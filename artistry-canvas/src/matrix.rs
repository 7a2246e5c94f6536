//! Affine matrix used by the transform engine.

use crate::geometry::Point;

/// A 2D affine transformation matrix.
///
/// The matrix is represented as:
/// ```text
/// | a c e |
/// | b d f |
/// | 0 0 1 |
/// ```
/// and maps `(x, y)` to `(a*x + c*y + e, b*x + d*y + f)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Default for Affine {
    fn default() -> Self {
        Self::identity()
    }
}

impl Affine {
    /// Create a matrix with the specified components.
    pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self { a, b, c, d, e, f }
    }

    /// Create an identity matrix.
    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }

    /// Pure translation by `(dx, dy)`.
    pub fn translation(dx: f64, dy: f64) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, dx, dy)
    }

    /// Counter-clockwise rotation (in a y-up frame) by `radians`.
    ///
    /// On a y-down canvas positive angles turn clockwise: `(1, 0)` rotated by
    /// a quarter turn lands on `(0, 1)`.
    pub fn rotation(radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::new(cos, sin, -sin, cos, 0.0, 0.0)
    }

    /// Matrix product `self × other`.
    ///
    /// The result applies `other` first and then `self`, so appending an
    /// operation to the current transform is `current.multiply(&op)`.
    pub fn multiply(&self, other: &Affine) -> Affine {
        Affine {
            a: self.a * other.a + self.c * other.b,
            b: self.b * other.a + self.d * other.b,
            c: self.a * other.c + self.c * other.d,
            d: self.b * other.c + self.d * other.d,
            e: self.a * other.e + self.c * other.f + self.e,
            f: self.b * other.e + self.d * other.f + self.f,
        }
    }

    /// Map a point through the matrix.
    pub fn map_point(&self, (x, y): Point) -> Point {
        (
            self.a * x + self.c * y + self.e,
            self.b * x + self.d * y + self.f,
        )
    }

    /// Exact comparison against the identity matrix.
    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn assert_close(actual: Point, expected: Point) {
        assert!(
            (actual.0 - expected.0).abs() < 1e-9 && (actual.1 - expected.1).abs() < 1e-9,
            "{actual:?} != {expected:?}"
        );
    }

    #[test]
    fn test_translations_compose() {
        let m = Affine::identity()
            .multiply(&Affine::translation(10.0, 0.0))
            .multiply(&Affine::translation(0.0, 10.0));
        assert_eq!(m.map_point((0.0, 0.0)), (10.0, 10.0));
    }

    #[test]
    fn test_quarter_turn_maps_x_axis_to_y_axis() {
        let m = Affine::rotation(FRAC_PI_2);
        assert_close(m.map_point((1.0, 0.0)), (0.0, 1.0));
        assert_close(m.map_point((0.0, 1.0)), (-1.0, 0.0));
    }

    #[test]
    fn test_new_operation_applies_in_local_frame() {
        // Rotating first makes the later translation run along the rotated axis
        let m = Affine::identity()
            .multiply(&Affine::rotation(FRAC_PI_2))
            .multiply(&Affine::translation(10.0, 0.0));
        assert_close(m.map_point((0.0, 0.0)), (0.0, 10.0));

        let m = Affine::identity()
            .multiply(&Affine::translation(10.0, 0.0))
            .multiply(&Affine::rotation(FRAC_PI_2));
        assert_close(m.map_point((1.0, 0.0)), (10.0, 1.0));
    }

    #[test]
    fn test_identity_detection() {
        assert!(Affine::identity().is_identity());
        assert!(Affine::default().is_identity());
        assert!(Affine::translation(0.0, 0.0).is_identity());
        assert!(!Affine::translation(0.5, 0.0).is_identity());
        assert!(!Affine::rotation(0.1).is_identity());
    }
}
