use cairo::{Context, Format, ImageSurface};

use crate::error::{ChartError, ChartResult};
use crate::render::{Canvas, Color};

/// `Canvas` implementation over a Cairo context.
///
/// Cairo keeps a single source pattern and consumes the path on
/// `stroke`/`fill`, so this adapter tracks fill and stroke colors itself and
/// uses the preserving variants to keep HTML-canvas path semantics.
#[derive(Debug)]
pub struct CairoCanvas<'a> {
    context: &'a Context,
    fill_color: Color,
    stroke_color: Color,
    saved: Vec<(Color, Color)>,
}

impl<'a> CairoCanvas<'a> {
    #[must_use]
    pub fn new(context: &'a Context) -> Self {
        Self {
            context,
            fill_color: Color::rgb(0.0, 0.0, 0.0),
            stroke_color: Color::rgb(0.0, 0.0, 0.0),
            saved: Vec::new(),
        }
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo"
    }
}

/// Creates an offscreen ARGB surface suitable for `CairoCanvas`.
pub fn create_image_surface(width: i32, height: i32) -> ChartResult<ImageSurface> {
    if width <= 0 || height <= 0 {
        return Err(ChartError::InvalidData(
            "cairo surface size must be > 0".to_owned(),
        ));
    }
    ImageSurface::create(Format::ARgb32, width, height)
        .map_err(|err| map_backend_error("failed to create cairo surface", err))
}

impl Canvas for CairoCanvas<'_> {
    fn save(&mut self) -> ChartResult<()> {
        self.context
            .save()
            .map_err(|err| map_backend_error("failed to save cairo state", err))?;
        self.saved.push((self.fill_color, self.stroke_color));
        Ok(())
    }

    fn restore(&mut self) -> ChartResult<()> {
        self.context
            .restore()
            .map_err(|err| map_backend_error("failed to restore cairo state", err))?;
        if let Some((fill_color, stroke_color)) = self.saved.pop() {
            self.fill_color = fill_color;
            self.stroke_color = stroke_color;
        }
        Ok(())
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.context.set_line_width(width);
    }

    fn begin_path(&mut self) {
        self.context.new_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.context.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.context.line_to(x, y);
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64) {
        self.context.arc(x, y, radius, start_angle, end_angle);
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.context.rectangle(x, y, width, height);
    }

    fn close_path(&mut self) {
        self.context.close_path();
    }

    fn stroke(&mut self) -> ChartResult<()> {
        apply_color(self.context, self.stroke_color);
        self.context
            .stroke_preserve()
            .map_err(|err| map_backend_error("failed to stroke path", err))
    }

    fn fill(&mut self) -> ChartResult<()> {
        apply_color(self.context, self.fill_color);
        self.context
            .fill_preserve()
            .map_err(|err| map_backend_error("failed to fill path", err))
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Backend(format!("{prefix}: {err}"))
}
