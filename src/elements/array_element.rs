//! Drawing routines shared by elements that carry an array of samples
//! (violins, boxplots): raw item markers with deterministic jitter and
//! outlier markers along the value axis.

use crate::config::ElementStyle;
use crate::core::Orientation;
use crate::error::ChartResult;
use crate::render::{Canvas, CanvasStateGuard, draw_point};

const JITTER_MODULUS: u64 = 233_280;
const JITTER_MULTIPLIER: u64 = 9_301;
const JITTER_INCREMENT: u64 = 49_297;

/// Repeatable pseudo-random sequence in `[0, 1)`.
///
/// Seeding with the same value always yields the same jitter so items do not
/// move between redraws.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededJitter {
    state: u64,
}

impl SeededJitter {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed % JITTER_MODULUS,
        }
    }

    /// Seed derived from the element's position in the chart data.
    #[must_use]
    pub fn for_element(dataset_index: usize, index: usize) -> Self {
        let seed = (dataset_index as u64)
            .saturating_mul(1_000)
            .saturating_add(index as u64);
        Self::new(seed)
    }
}

impl Iterator for SeededJitter {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        self.state = (self.state * JITTER_MULTIPLIER + JITTER_INCREMENT) % JITTER_MODULUS;
        Some(self.state as f64 / JITTER_MODULUS as f64)
    }
}

/// Where an array element sits on the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrayPlacement {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub orientation: Orientation,
}

/// Draws raw sample markers spread across the element's category extent.
///
/// Does nothing when `item_radius` is not positive or there are no items.
/// Style changes are scoped to this call.
pub fn draw_items(
    canvas: &mut dyn Canvas,
    placement: ArrayPlacement,
    style: &ElementStyle,
    items: &[f64],
    mut jitter: SeededJitter,
) -> ChartResult<()> {
    if style.item_radius <= 0.0 || items.is_empty() {
        return Ok(());
    }

    let mut canvas = CanvasStateGuard::acquire(canvas)?;
    canvas.set_stroke_color(style.item_border_color);
    canvas.set_fill_color(style.item_background_color);

    for &value in items {
        let offset = jitter.next().unwrap_or_default();
        let (x, y) = if placement.orientation.is_vertical() {
            (
                placement.x - placement.width / 2.0 + offset * placement.width,
                value,
            )
        } else {
            (
                value,
                placement.y - placement.height / 2.0 + offset * placement.height,
            )
        };
        draw_point(&mut *canvas, style.item_style, style.item_radius, x, y)?;
    }
    Ok(())
}

/// Draws outlier markers on the element's center line.
///
/// Runs inside the caller's canvas scope; it changes the fill color.
pub fn draw_outliers(
    canvas: &mut dyn Canvas,
    placement: ArrayPlacement,
    style: &ElementStyle,
    outliers: &[f64],
) -> ChartResult<()> {
    if outliers.is_empty() {
        return Ok(());
    }

    canvas.set_fill_color(style.outlier_color);
    canvas.begin_path();
    for &value in outliers {
        let (x, y) = if placement.orientation.is_vertical() {
            (placement.x, value)
        } else {
            (value, placement.y)
        };
        draw_point(&mut *canvas, style.outlier_style, style.outlier_radius, x, y)?;
    }
    canvas.fill()?;
    canvas.close_path();
    Ok(())
}
