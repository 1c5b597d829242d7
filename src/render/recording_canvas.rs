use crate::error::{ChartError, ChartResult};
use crate::render::{Canvas, Color};

/// One call received by a `RecordingCanvas`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasCommand {
    Save,
    Restore,
    SetFillColor(Color),
    SetStrokeColor(Color),
    SetLineWidth(f64),
    BeginPath,
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    Arc {
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    ClosePath,
    Stroke,
    Fill,
}

/// Style state tracked across `save`/`restore`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasStyle {
    pub fill_color: Color,
    pub stroke_color: Color,
    pub line_width: f64,
}

impl Default for CanvasStyle {
    fn default() -> Self {
        Self {
            fill_color: Color::rgb(0.0, 0.0, 0.0),
            stroke_color: Color::rgb(0.0, 0.0, 0.0),
            line_width: 1.0,
        }
    }
}

/// Headless canvas that records every call.
///
/// Used by tests and by hosts that replay the command stream onto their own
/// surface. `failing_fills` makes every `fill` report a backend error so
/// cleanup paths can be exercised.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<CanvasCommand>,
    style: CanvasStyle,
    saved: Vec<CanvasStyle>,
    fail_fills: bool,
}

impl RecordingCanvas {
    #[must_use]
    pub fn failing_fills() -> Self {
        Self {
            fail_fills: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn commands(&self) -> &[CanvasCommand] {
        &self.commands
    }

    #[must_use]
    pub fn style(&self) -> CanvasStyle {
        self.style
    }

    #[must_use]
    pub fn save_depth(&self) -> usize {
        self.saved.len()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn save(&mut self) -> ChartResult<()> {
        self.saved.push(self.style);
        self.commands.push(CanvasCommand::Save);
        Ok(())
    }

    fn restore(&mut self) -> ChartResult<()> {
        let Some(style) = self.saved.pop() else {
            return Err(ChartError::InvalidData(
                "canvas restore without matching save".to_owned(),
            ));
        };
        self.style = style;
        self.commands.push(CanvasCommand::Restore);
        Ok(())
    }

    fn set_fill_color(&mut self, color: Color) {
        self.style.fill_color = color;
        self.commands.push(CanvasCommand::SetFillColor(color));
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.style.stroke_color = color;
        self.commands.push(CanvasCommand::SetStrokeColor(color));
    }

    fn set_line_width(&mut self, width: f64) {
        self.style.line_width = width;
        self.commands.push(CanvasCommand::SetLineWidth(width));
    }

    fn begin_path(&mut self) {
        self.commands.push(CanvasCommand::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(CanvasCommand::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(CanvasCommand::LineTo { x, y });
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64) {
        self.commands.push(CanvasCommand::Arc {
            x,
            y,
            radius,
            start_angle,
            end_angle,
        });
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(CanvasCommand::Rect {
            x,
            y,
            width,
            height,
        });
    }

    fn close_path(&mut self) {
        self.commands.push(CanvasCommand::ClosePath);
    }

    fn stroke(&mut self) -> ChartResult<()> {
        self.commands.push(CanvasCommand::Stroke);
        Ok(())
    }

    fn fill(&mut self) -> ChartResult<()> {
        if self.fail_fills {
            return Err(ChartError::Backend("fill rejected by canvas".to_owned()));
        }
        self.commands.push(CanvasCommand::Fill);
        Ok(())
    }
}
