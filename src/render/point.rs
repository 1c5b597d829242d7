use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_4, TAU};

use crate::error::ChartResult;
use crate::render::{Canvas, PointStyle};

/// Draws one marker centered on `(x, y)` with the current fill/stroke style.
///
/// The marker is built as its own path, then filled and stroked. Radii that
/// are not finite and positive draw nothing.
pub fn draw_point(
    canvas: &mut (impl Canvas + ?Sized),
    style: PointStyle,
    radius: f64,
    x: f64,
    y: f64,
) -> ChartResult<()> {
    if !radius.is_finite() || radius <= 0.0 {
        return Ok(());
    }

    canvas.begin_path();
    match style {
        PointStyle::Circle => {
            canvas.arc(x, y, radius, 0.0, TAU);
        }
        PointStyle::Triangle => {
            let edge = 3.0 * radius / 3.0_f64.sqrt();
            let height = edge * 3.0_f64.sqrt() / 2.0;
            canvas.move_to(x - edge / 2.0, y + height / 3.0);
            canvas.line_to(x + edge / 2.0, y + height / 3.0);
            canvas.line_to(x, y - 2.0 * height / 3.0);
        }
        PointStyle::Rect => {
            let size = FRAC_1_SQRT_2 * radius;
            canvas.rect(x - size, y - size, 2.0 * size, 2.0 * size);
        }
        PointStyle::RectRot => {
            let size = FRAC_1_SQRT_2 * radius;
            canvas.move_to(x - size, y);
            canvas.line_to(x, y + size);
            canvas.line_to(x + size, y);
            canvas.line_to(x, y - size);
        }
        PointStyle::Cross => append_cross(canvas, radius, x, y),
        PointStyle::CrossRot => append_cross_rot(canvas, radius, x, y),
        PointStyle::Star => {
            append_cross(canvas, radius, x, y);
            append_cross_rot(canvas, radius, x, y);
        }
        PointStyle::Line => {
            canvas.move_to(x - radius, y);
            canvas.line_to(x + radius, y);
        }
        PointStyle::Dash => {
            canvas.move_to(x, y);
            canvas.line_to(x + radius, y);
        }
    }
    canvas.close_path();
    canvas.fill()?;
    canvas.stroke()
}

fn append_cross(canvas: &mut (impl Canvas + ?Sized), radius: f64, x: f64, y: f64) {
    canvas.move_to(x, y + radius);
    canvas.line_to(x, y - radius);
    canvas.move_to(x - radius, y);
    canvas.line_to(x + radius, y);
}

fn append_cross_rot(canvas: &mut (impl Canvas + ?Sized), radius: f64, x: f64, y: f64) {
    let offset = FRAC_PI_4.cos() * radius;
    canvas.move_to(x - offset, y - offset);
    canvas.line_to(x + offset, y + offset);
    canvas.move_to(x - offset, y + offset);
    canvas.line_to(x + offset, y - offset);
}
