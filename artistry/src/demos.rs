//! Bundled demo sketches.

use artistry_canvas::{dist, lerp_color, AngleMode, ColorMode, ShapeMode, Sketch, SketchResult};

const CENTER_X: f64 = 200.0;
const CENTER_Y: f64 = 200.0;
const RADIUS: f64 = 200.0;

/// Three noise-textured discs behind an outlined lighthouse.
pub fn logo(s: &mut Sketch, seed: u64) -> SketchResult<()> {
    s.noise_seed(seed);
    s.create_canvas(400, 400)?;
    s.stroke_weight(5.0);
    s.stroke((0, 0, 0));

    let c1 = s.color(150.0, 35.0, 200.0);
    let c2 = s.color(245.0, 215.0, 55.0);
    let c3 = s.color(105.0, 210.0, 230.0);
    let c5 = s.color(255.0, 105.0, 180.0);

    s.background(c2);
    s.no_fill();
    s.ellipse_mode(ShapeMode::Center);
    s.circle(CENTER_X, CENTER_Y, RADIUS * 2.0);
    s.circle(CENTER_X / 2.0, CENTER_Y / 2.0, RADIUS);
    s.circle(400.0 - CENTER_X / 4.0, 400.0 - CENTER_Y / 4.0, RADIUS / 2.0);

    for x in 0..s.width() {
        for y in 0..s.height() {
            let (x, y) = (x as f64, y as f64);
            let n1 = s.noise(x * 0.02, y * 0.01);
            let n2 = s.noise(x * 0.01, y * 0.02);

            if dist(x, y, CENTER_X, CENTER_Y) <= RADIUS - 4.0 {
                s.stroke(lerp_color(c1, c2, n1));
                s.point(x, y);
            }
            if dist(x, y, CENTER_X / 2.0, CENTER_Y / 2.0) <= RADIUS / 2.0 - 4.0 {
                s.stroke(lerp_color(c2, c3, n2));
                s.point(x, y);
            }
            if dist(x, y, 400.0 - CENTER_X / 4.0, 400.0 - CENTER_Y / 4.0) <= RADIUS / 4.0 - 4.0 {
                s.stroke(lerp_color(lerp_color(c2, c3, n2), c5, n2));
                s.point(x, y);
            }
        }
    }

    s.push();
    s.no_fill();
    s.stroke((0, 0, 0));
    s.triangle(200.0, 30.0, 180.0, 70.0, 220.0, 70.0);

    s.begin_shape();
    s.vertex(180.0, 70.0);
    s.vertex(220.0, 70.0);
    s.vertex(230.0, 115.0);
    s.vertex(170.0, 115.0);
    s.end_shape(true);

    for x in [230.0, 190.0, 210.0, 170.0] {
        s.line(x, 115.0, x, 350.0);
    }
    s.rect_rounded(170.0, 350.0, 60.0, 20.0, 5.0);
    s.pop()
}

/// One frame of a square turning once around the canvas center over `frames` frames.
pub fn spin(s: &mut Sketch, frame: u32, frames: u32) -> SketchResult<()> {
    let (w, h) = (s.width() as f64, s.height() as f64);
    let turn = frame as f64 / frames.max(1) as f64;

    s.color_mode(ColorMode::Hsb, None);
    s.background((turn * 360.0, 20.0, 100.0));
    s.fill((turn * 360.0, 80.0, 90.0));
    s.stroke((0, 0, 0));
    s.stroke_weight(2.0);

    s.angle_mode(AngleMode::Degrees);
    s.rect_mode(ShapeMode::Center);
    s.translate(w / 2.0, h / 2.0);
    s.rotate(turn * 360.0);
    s.square(0.0, 0.0, w.min(h) / 2.0);
    Ok(())
}
