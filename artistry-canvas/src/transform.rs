//! Transform engine: a composed translate/rotate matrix plus a separate
//! per-shape scale.

use crate::geometry::Point;
use crate::matrix::Affine;

/// Transform applied to shape geometry at draw time.
///
/// `translate` and `rotate` compose into `matrix`. `scale` never enters the
/// matrix: the running factors are applied about each shape's own
/// bounding-box center, before the matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformState {
    pub matrix: Affine,
    pub scale_x: f64,
    pub scale_y: f64,
}

impl Default for TransformState {
    fn default() -> Self {
        Self {
            matrix: Affine::identity(),
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }
}

impl TransformState {
    /// Append a translation in the current local frame.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.matrix = self.matrix.multiply(&Affine::translation(dx, dy));
    }

    /// Append a rotation (radians) in the current local frame.
    pub fn rotate(&mut self, radians: f64) {
        self.matrix = self.matrix.multiply(&Affine::rotation(radians));
    }

    /// Multiply the running scale factors.
    pub fn scale(&mut self, sx: f64, sy: f64) {
        self.scale_x *= sx;
        self.scale_y *= sy;
    }

    /// Back to identity matrix and unit scale.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn is_scaled(&self) -> bool {
        self.scale_x != 1.0 || self.scale_y != 1.0
    }

    /// Map a shape's points to device space.
    ///
    /// Points are first scaled about their bounding-box center when a scale
    /// is active, then mapped through the matrix when it is not the identity.
    /// With neither active the input is truncated toward zero instead.
    pub fn apply(&self, points: &[Point]) -> Vec<Point> {
        let scaled = self.is_scaled();
        let mut out: Vec<Point> = if scaled {
            let (cx, cy) = bounding_center(points);
            points
                .iter()
                .map(|&(x, y)| {
                    (
                        (x - cx) * self.scale_x + cx,
                        (y - cy) * self.scale_y + cy,
                    )
                })
                .collect()
        } else {
            points.to_vec()
        };

        if !self.matrix.is_identity() {
            for p in out.iter_mut() {
                *p = self.matrix.map_point(*p);
            }
        } else if !scaled {
            for p in out.iter_mut() {
                *p = (p.0.trunc(), p.1.trunc());
            }
        }
        out
    }
}

/// Center of the axis-aligned bounding box of `points`; the origin when empty.
pub fn bounding_center(points: &[Point]) -> Point {
    if points.is_empty() {
        return (0.0, 0.0);
    }
    let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
    let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    for &(x, y) in points {
        min_x = min_x.min(x);
        max_x = max_x.max(x);
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }
    ((min_x + max_x) / 2.0, (min_y + max_y) / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_identity_path_truncates() {
        let t = TransformState::default();
        assert_eq!(
            t.apply(&[(10.7, 20.2), (-3.9, 0.5)]),
            vec![(10.0, 20.0), (-3.0, 0.0)]
        );
    }

    #[test]
    fn test_matrix_path_keeps_fractions() {
        let mut t = TransformState::default();
        t.translate(0.5, 0.25);
        assert_eq!(t.apply(&[(10.0, 20.0)]), vec![(10.5, 20.25)]);
    }

    #[test]
    fn test_translate_twice() {
        let mut t = TransformState::default();
        t.translate(10.0, 0.0);
        t.translate(0.0, 10.0);
        assert_eq!(t.apply(&[(0.0, 0.0)]), vec![(10.0, 10.0)]);
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let mut t = TransformState::default();
        t.rotate(FRAC_PI_2);
        let p = t.apply(&[(1.0, 0.0)])[0];
        assert!(p.0.abs() < 1e-9);
        assert!((p.1 - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_scale_is_about_shape_center() {
        let mut t = TransformState::default();
        t.scale(2.0, 2.0);
        let square = [(10.0, 10.0), (20.0, 10.0), (20.0, 20.0), (10.0, 20.0)];
        assert_eq!(
            t.apply(&square),
            vec![(5.0, 5.0), (25.0, 5.0), (25.0, 25.0), (5.0, 25.0)]
        );

        // A different shape scales about its own center, not the first one's
        let other = [(100.0, 0.0), (102.0, 0.0)];
        assert_eq!(t.apply(&other), vec![(99.0, 0.0), (103.0, 0.0)]);
    }

    #[test]
    fn test_scale_only_is_not_truncated() {
        let mut t = TransformState::default();
        t.scale(1.5, 1.0);
        assert_eq!(t.apply(&[(0.0, 0.0), (1.0, 0.0)]), vec![(-0.25, 0.0), (1.25, 0.0)]);
    }

    #[test]
    fn test_scale_applies_before_matrix() {
        let mut t = TransformState::default();
        t.translate(100.0, 0.0);
        t.scale(2.0, 1.0);
        assert_eq!(
            t.apply(&[(0.0, 0.0), (10.0, 0.0)]),
            vec![(95.0, 0.0), (115.0, 0.0)]
        );
    }

    #[test]
    fn test_scale_accumulates_and_resets() {
        let mut t = TransformState::default();
        t.scale(2.0, 3.0);
        t.scale(0.5, 2.0);
        assert_eq!((t.scale_x, t.scale_y), (1.0, 6.0));
        t.translate(1.0, 1.0);
        t.reset();
        assert_eq!(t, TransformState::default());
    }

    #[test]
    fn test_bounding_center() {
        assert_eq!(bounding_center(&[(0.0, 0.0), (10.0, 4.0), (2.0, -4.0)]), (5.0, 0.0));
        assert_eq!(bounding_center(&[]), (0.0, 0.0));
    }
}
