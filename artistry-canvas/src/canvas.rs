//! Pixel surface that shapes are rasterized onto.

use crate::color::Rgba;
use crate::error::{SketchError, SketchResult};
use crate::geometry::{normalize_bounds, Point};
use std::path::Path;
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform};

/// Maximum canvas dimension (same limit as browsers).
const MAX_DIMENSION: u32 = 32767;

/// A fixed-size RGBA surface backed by a tiny-skia pixmap.
///
/// All coordinates are device space: transforms are resolved before calling
/// into the canvas.
#[derive(Debug, Clone)]
pub struct Canvas {
    pixmap: Pixmap,
    width: u32,
    height: u32,
}

fn paint_for(color: Rgba) -> Paint<'static> {
    let mut paint = Paint {
        anti_alias: true,
        ..Default::default()
    };
    paint.set_color(color.into());
    paint
}

fn stroke_for(width: f64) -> Stroke {
    Stroke {
        width: width as f32,
        ..Default::default()
    }
}

impl Canvas {
    /// Create a canvas filled with `background`.
    pub fn new(width: u32, height: u32, background: Rgba) -> SketchResult<Self> {
        if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(SketchError::InvalidDimensions { width, height });
        }

        let mut pixmap =
            Pixmap::new(width, height).ok_or(SketchError::InvalidDimensions { width, height })?;
        pixmap.fill(background.into());

        log::debug!(target: "canvas", "new {}x{}", width, height);
        Ok(Self {
            pixmap,
            width,
            height,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Replace every pixel with `color`.
    pub fn fill_background(&mut self, color: Rgba) {
        log::debug!(target: "canvas", "fill_background {:?}", color);
        self.pixmap.fill(color.into());
    }

    /// Fill and/or outline a closed polygon.
    ///
    /// Fewer than two points, or only `None` colors, draw nothing.
    pub fn draw_polygon(
        &mut self,
        points: &[Point],
        fill: Option<Rgba>,
        outline: Option<Rgba>,
        width: f64,
    ) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        let mut pb = PathBuilder::new();
        pb.move_to(first.0 as f32, first.1 as f32);
        for &(x, y) in rest {
            pb.line_to(x as f32, y as f32);
        }
        pb.close();

        if let Some(path) = pb.finish() {
            self.fill_and_stroke(&path, fill, outline, width);
        }
    }

    /// Fill and/or outline the axis-aligned ellipse inscribed in a box.
    ///
    /// The two corners may be given in any order. Degenerate boxes draw nothing.
    pub fn draw_ellipse(
        &mut self,
        bounds: [Point; 2],
        fill: Option<Rgba>,
        outline: Option<Rgba>,
        width: f64,
    ) {
        let (left, top, right, bottom) = normalize_bounds(bounds);
        let Some(rect) = Rect::from_ltrb(left as f32, top as f32, right as f32, bottom as f32)
        else {
            log::debug!(target: "canvas", "skipping degenerate ellipse {:?}", bounds);
            return;
        };
        if let Some(path) = PathBuilder::from_oval(rect) {
            self.fill_and_stroke(&path, fill, outline, width);
        }
    }

    /// Stroke a single segment.
    pub fn draw_line(&mut self, from: Point, to: Point, color: Rgba, width: f64) {
        let mut pb = PathBuilder::new();
        pb.move_to(from.0 as f32, from.1 as f32);
        pb.line_to(to.0 as f32, to.1 as f32);
        if let Some(path) = pb.finish() {
            self.pixmap.stroke_path(
                &path,
                &paint_for(color),
                &stroke_for(width),
                Transform::identity(),
                None,
            );
        }
    }

    /// Set the single pixel containing `p`.
    pub fn draw_point(&mut self, p: Point, color: Rgba) {
        let (x, y) = (p.0.floor(), p.1.floor());
        if let Some(rect) = Rect::from_xywh(x as f32, y as f32, 1.0, 1.0) {
            let mut paint = paint_for(color);
            paint.anti_alias = false;
            self.pixmap
                .fill_rect(rect, &paint, Transform::identity(), None);
        }
    }

    fn fill_and_stroke(
        &mut self,
        path: &tiny_skia::Path,
        fill: Option<Rgba>,
        outline: Option<Rgba>,
        width: f64,
    ) {
        if let Some(color) = fill {
            self.pixmap.fill_path(
                path,
                &paint_for(color),
                FillRule::Winding,
                Transform::identity(),
                None,
            );
        }
        if let Some(color) = outline {
            if width > 0.0 {
                self.pixmap.stroke_path(
                    path,
                    &paint_for(color),
                    &stroke_for(width),
                    Transform::identity(),
                    None,
                );
            }
        }
    }

    /// Straight-alpha color of one pixel, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some(Rgba::from_rgba8(c.red(), c.green(), c.blue(), c.alpha()))
    }

    /// The whole canvas as straight-alpha RGBA bytes, row-major.
    pub fn image_data(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity((self.width * self.height * 4) as usize);
        for pixel in self.pixmap.data().chunks_exact(4) {
            // Convert from premultiplied alpha to straight alpha
            let a = pixel[3];
            match a {
                0 => data.extend_from_slice(&[0, 0, 0, 0]),
                255 => data.extend_from_slice(pixel),
                _ => {
                    let alpha_f = a as f32 / 255.0;
                    data.push((pixel[0] as f32 / alpha_f).min(255.0) as u8);
                    data.push((pixel[1] as f32 / alpha_f).min(255.0) as u8);
                    data.push((pixel[2] as f32 / alpha_f).min(255.0) as u8);
                    data.push(a);
                }
            }
        }
        data
    }

    /// Encode the canvas as PNG.
    pub fn to_png(&self) -> SketchResult<Vec<u8>> {
        let mut buf = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut buf, self.width, self.height);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);

            let mut writer = encoder.write_header()?;
            writer.write_image_data(&self.image_data())?;
        }
        Ok(buf)
    }

    /// Encode the canvas as PNG and write it to `path`.
    pub fn save_png(&self, path: impl AsRef<Path>) -> SketchResult<()> {
        let path = path.as_ref();
        log::debug!(target: "canvas", "save_png {}", path.display());
        std::fs::write(path, self.to_png()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BG: Rgba = Rgba::from_rgba8(245, 225, 135, 255);
    const RED: Rgba = Rgba::from_rgba8(255, 0, 0, 255);
    const BLUE: Rgba = Rgba::from_rgba8(0, 0, 255, 255);

    #[test]
    fn test_invalid_dimensions() {
        assert!(matches!(
            Canvas::new(0, 10, BG),
            Err(SketchError::InvalidDimensions { width: 0, height: 10 })
        ));
        assert!(Canvas::new(10, MAX_DIMENSION + 1, BG).is_err());
        assert!(Canvas::new(1, 1, BG).is_ok());
    }

    #[test]
    fn test_new_fills_background() {
        let canvas = Canvas::new(20, 10, BG).unwrap();
        assert_eq!((canvas.width(), canvas.height()), (20, 10));
        assert_eq!(canvas.pixel(0, 0), Some(BG));
        assert_eq!(canvas.pixel(19, 9), Some(BG));
        assert_eq!(canvas.pixel(20, 0), None);
    }

    #[test]
    fn test_polygon_fill_and_outline() {
        let mut canvas = Canvas::new(100, 100, BG).unwrap();
        let square = [(20.0, 20.0), (80.0, 20.0), (80.0, 80.0), (20.0, 80.0)];
        canvas.draw_polygon(&square, Some(RED), Some(BLUE), 4.0);
        assert_eq!(canvas.pixel(50, 50), Some(RED));
        assert_eq!(canvas.pixel(50, 20), Some(BLUE));
        assert_eq!(canvas.pixel(5, 5), Some(BG));
    }

    #[test]
    fn test_polygon_without_colors_draws_nothing() {
        let mut canvas = Canvas::new(50, 50, BG).unwrap();
        let tri = [(0.0, 0.0), (50.0, 0.0), (0.0, 50.0)];
        canvas.draw_polygon(&tri, None, None, 3.0);
        canvas.draw_polygon(&tri, None, Some(BLUE), 0.0);
        assert!(canvas.image_data().chunks_exact(4).all(|p| p == BG.to_array()));
    }

    #[test]
    fn test_ellipse_accepts_swapped_corners() {
        let mut canvas = Canvas::new(100, 100, BG).unwrap();
        canvas.draw_ellipse([(90.0, 90.0), (10.0, 10.0)], Some(RED), None, 1.0);
        assert_eq!(canvas.pixel(50, 50), Some(RED));
        // Box corner lies outside the inscribed ellipse
        assert_eq!(canvas.pixel(12, 12), Some(BG));
    }

    #[test]
    fn test_degenerate_ellipse_is_skipped() {
        let mut canvas = Canvas::new(10, 10, BG).unwrap();
        canvas.draw_ellipse([(5.0, 5.0), (5.0, 5.0)], Some(RED), Some(BLUE), 1.0);
        assert_eq!(canvas.pixel(5, 5), Some(BG));
    }

    #[test]
    fn test_line_and_point() {
        let mut canvas = Canvas::new(40, 40, BG).unwrap();
        canvas.draw_line((0.0, 20.0), (40.0, 20.0), BLUE, 4.0);
        assert_eq!(canvas.pixel(10, 20), Some(BLUE));
        assert_eq!(canvas.pixel(10, 5), Some(BG));

        canvas.draw_point((3.7, 7.2), RED);
        assert_eq!(canvas.pixel(3, 7), Some(RED));
        assert_eq!(canvas.pixel(4, 7), Some(BG));
    }

    #[test]
    fn test_fill_background_replaces_pixels() {
        let mut canvas = Canvas::new(10, 10, BG).unwrap();
        canvas.draw_point((1.0, 1.0), RED);
        canvas.fill_background(BLUE);
        assert!(canvas.image_data().chunks_exact(4).all(|p| p == BLUE.to_array()));
    }

    #[test]
    fn test_to_png_signature() {
        let canvas = Canvas::new(8, 8, BG).unwrap();
        let png = canvas.to_png().unwrap();
        assert_eq!(&png[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    }
}
