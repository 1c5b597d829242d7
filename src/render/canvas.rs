use std::ops::{Deref, DerefMut};

use tracing::warn;

use crate::error::ChartResult;
use crate::render::Color;

/// Immediate-mode 2D drawing surface.
///
/// Path semantics follow the HTML canvas model: `stroke` and `fill` paint the
/// current path without consuming it, and only `begin_path` starts a new one.
/// Style state (fill/stroke color, line width) is pushed by `save` and popped
/// by `restore`.
pub trait Canvas {
    fn save(&mut self) -> ChartResult<()>;
    fn restore(&mut self) -> ChartResult<()>;

    fn set_fill_color(&mut self, color: Color);
    fn set_stroke_color(&mut self, color: Color);
    fn set_line_width(&mut self, width: f64);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64);
    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn close_path(&mut self);

    fn stroke(&mut self) -> ChartResult<()>;
    fn fill(&mut self) -> ChartResult<()>;
}

/// Scoped canvas state.
///
/// `acquire` saves the canvas state and dropping the guard restores it, so
/// style changes made through the guard never outlive the scope, including
/// when drawing bails out early with `?`.
pub struct CanvasStateGuard<'c, C: Canvas + ?Sized> {
    canvas: &'c mut C,
}

impl<'c, C: Canvas + ?Sized> CanvasStateGuard<'c, C> {
    pub fn acquire(canvas: &'c mut C) -> ChartResult<Self> {
        canvas.save()?;
        Ok(Self { canvas })
    }
}

impl<C: Canvas + ?Sized> Deref for CanvasStateGuard<'_, C> {
    type Target = C;

    fn deref(&self) -> &Self::Target {
        self.canvas
    }
}

impl<C: Canvas + ?Sized> DerefMut for CanvasStateGuard<'_, C> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.canvas
    }
}

impl<C: Canvas + ?Sized> Drop for CanvasStateGuard<'_, C> {
    fn drop(&mut self) {
        if let Err(err) = self.canvas.restore() {
            warn!(error = %err, "failed to restore canvas state");
        }
    }
}
