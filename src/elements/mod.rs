//! Chart elements and the capability interface hosts draw them through.

pub mod array_element;
mod registry;
pub mod violin;

pub use registry::ElementRegistry;
pub use violin::{
    BoxplotData, ClipBounds, DensityCoord, ViolinElement, ViolinPayload, ViolinViewModel,
    resolve_clip_bounds, select_outline_coordinates,
};

use crate::config::ChartOptions;
use crate::core::{ElementBounds, Orientation, Point};
use crate::error::ChartResult;
use crate::render::Canvas;

/// Drawing and geometry capabilities a host needs from one element.
///
/// Geometry queries are pure functions of the element's current view model.
/// The provided hit-testing methods work on `bounds` grown by `hit_padding`.
pub trait ChartElement {
    fn kind(&self) -> &'static str;
    fn orientation(&self) -> Orientation;

    fn draw(&self, canvas: &mut dyn Canvas, options: &ChartOptions) -> ChartResult<()>;

    fn bounds(&self) -> ElementBounds;
    fn height(&self) -> f64;
    fn area(&self) -> f64;
    fn center_point(&self) -> Point;

    fn hit_padding(&self) -> f64 {
        0.0
    }

    fn hit_bounds(&self) -> ElementBounds {
        self.bounds().padded(self.hit_padding())
    }

    fn in_range(&self, x: f64, y: f64) -> bool {
        self.hit_bounds().contains(Point::new(x, y))
    }

    fn in_x_range(&self, x: f64) -> bool {
        self.hit_bounds().contains_x(x)
    }

    fn in_y_range(&self, y: f64) -> bool {
        self.hit_bounds().contains_y(y)
    }

    /// Whether the pointer is over this element's category slot.
    fn in_label_range(&self, x: f64, y: f64) -> bool {
        if self.orientation().is_vertical() {
            self.in_x_range(x)
        } else {
            self.in_y_range(y)
        }
    }

    fn tooltip_position(&self) -> Point {
        self.center_point()
    }
}
