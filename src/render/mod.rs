mod canvas;
mod point;
mod primitives;
mod recording_canvas;

pub use canvas::{Canvas, CanvasStateGuard};
pub use point::draw_point;
pub use primitives::{Color, PointStyle};
pub use recording_canvas::{CanvasCommand, CanvasStyle, RecordingCanvas};

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoCanvas, create_image_surface};
