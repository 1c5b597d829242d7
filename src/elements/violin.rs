use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::config::{AxisConfig, ChartOptions, ElementStyle, StatsSelector};
use crate::core::{ElementBounds, Orientation, Point};
use crate::elements::ChartElement;
use crate::elements::array_element::{ArrayPlacement, SeededJitter, draw_items, draw_outliers};
use crate::error::{ChartError, ChartResult};
use crate::render::{Canvas, CanvasStateGuard, PointStyle, draw_point};

const CENTER_MARKER_RADIUS: f64 = 5.0;

/// One sample of the density outline.
///
/// `v` is the value already projected to pixel space; `estimate` is the
/// density magnitude at that value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DensityCoord {
    pub v: f64,
    pub estimate: f64,
}

impl DensityCoord {
    #[must_use]
    pub const fn new(v: f64, estimate: f64) -> Self {
        Self { v, estimate }
    }
}

/// Boxplot statistics attached to a violin, in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxplotData {
    /// Dataset index used to look up the value axis.
    pub index: usize,
    pub whisker_min_px: f64,
    pub whisker_max_px: f64,
}

/// Precomputed per-category violin data in pixel space.
///
/// On a vertical chart `min` is numerically the larger pixel value because
/// pixel y grows downwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViolinPayload {
    pub min: f64,
    pub max: f64,
    pub max_estimate: f64,
    pub coords: Vec<DensityCoord>,
    #[serde(default)]
    pub boxplot_data: Option<BoxplotData>,
    #[serde(default)]
    pub outliers: Vec<f64>,
    #[serde(default)]
    pub items: Vec<f64>,
}

/// Visible value range of the outline, in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipBounds {
    pub chart_min: f64,
    pub chart_max: f64,
}

impl ClipBounds {
    #[must_use]
    pub const fn new(chart_min: f64, chart_max: f64) -> Self {
        Self {
            chart_min,
            chart_max,
        }
    }

    /// Inclusive pixel-space containment: `chart_max <= v <= chart_min`.
    #[must_use]
    pub fn contains(self, v: f64) -> bool {
        v <= self.chart_min && v >= self.chart_max
    }

    /// Swaps the two bounds.
    #[must_use]
    pub const fn swapped(self) -> Self {
        Self::new(self.chart_max, self.chart_min)
    }

    /// Rejects non-finite bounds and bounds whose pixel order does not match
    /// `orientation`.
    ///
    /// A vertical value axis grows upwards, so `chart_min >= chart_max` in
    /// pixel space. A horizontal one grows rightwards: `chart_min <= chart_max`.
    pub fn validate(self, orientation: Orientation) -> ChartResult<()> {
        let ordered = if orientation.is_vertical() {
            self.chart_min >= self.chart_max
        } else {
            self.chart_min <= self.chart_max
        };
        if !self.chart_min.is_finite() || !self.chart_max.is_finite() || !ordered {
            return Err(ChartError::InvalidClipBounds {
                chart_min: self.chart_min,
                chart_max: self.chart_max,
            });
        }
        Ok(())
    }
}

/// Resolves the clip bounds, honoring whisker overrides on the value axis.
///
/// Each override applies only when its selector is exactly
/// `WhiskerMax`/`WhiskerMin` and boxplot data is present.
#[must_use]
pub fn resolve_clip_bounds(payload: &ViolinPayload, axis: Option<&AxisConfig>) -> ClipBounds {
    let mut bounds = ClipBounds::new(payload.min, payload.max);

    let (Some(boxplot), Some(ticks)) = (payload.boxplot_data, axis.and_then(|axis| axis.ticks))
    else {
        return bounds;
    };

    if ticks.max_stats == Some(StatsSelector::WhiskerMax) {
        bounds.chart_max = boxplot.whisker_max_px;
    }
    if ticks.min_stats == Some(StatsSelector::WhiskerMin) {
        bounds.chart_min = boxplot.whisker_min_px;
    }
    bounds
}

/// Keeps the coordinates inside `bounds` and orders them by descending `v`.
///
/// The input is left untouched; ties keep their input order.
#[must_use]
pub fn select_outline_coordinates(
    coords: &[DensityCoord],
    bounds: ClipBounds,
) -> Vec<DensityCoord> {
    let mut selected: Vec<DensityCoord> = coords
        .iter()
        .copied()
        .filter(|coord| bounds.contains(coord.v))
        .collect();
    selected.sort_by(|a, b| OrderedFloat(b.v).cmp(&OrderedFloat(a.v)));
    selected
}

/// Per-draw render state supplied by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViolinViewModel {
    pub x: f64,
    pub y: f64,
    /// Baseline pixel of the value axis.
    pub base: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub orientation: Orientation,
    #[serde(default)]
    pub dataset_index: usize,
    #[serde(default)]
    pub index: usize,
    #[serde(default)]
    pub style: ElementStyle,
    pub violin: ViolinPayload,
}

impl ViolinViewModel {
    fn placement(&self) -> ArrayPlacement {
        ArrayPlacement {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
            orientation: self.orientation,
        }
    }
}

/// Violin shape element.
///
/// Stateless with respect to its view model: every query and draw is a
/// function of the current `ViolinViewModel`.
#[derive(Debug, Clone, PartialEq)]
pub struct ViolinElement {
    view: ViolinViewModel,
}

impl ViolinElement {
    #[must_use]
    pub fn new(view: ViolinViewModel) -> Self {
        Self { view }
    }

    #[must_use]
    pub fn view(&self) -> &ViolinViewModel {
        &self.view
    }

    pub fn set_view(&mut self, view: ViolinViewModel) {
        self.view = view;
    }

    /// Clip bounds for this element under `options`.
    ///
    /// The value axis is the one at the boxplot data's dataset index.
    #[must_use]
    pub fn clip_bounds(&self, options: &ChartOptions) -> ClipBounds {
        let violin = &self.view.violin;
        let axis = violin
            .boxplot_data
            .and_then(|boxplot| options.y_axis(boxplot.index));
        resolve_clip_bounds(violin, axis)
    }

    /// Outline coordinates in path order.
    ///
    /// Vertical outlines run from `chart_min` up to `chart_max`, i.e. by
    /// descending pixel value. Horizontal outlines run left to right, so the
    /// selection uses the swapped bounds and ascending order.
    #[must_use]
    pub fn outline_coordinates(&self, bounds: ClipBounds) -> Vec<DensityCoord> {
        let coords = &self.view.violin.coords;
        if self.view.orientation.is_vertical() {
            return select_outline_coordinates(coords, bounds);
        }
        let mut selected = select_outline_coordinates(coords, bounds.swapped());
        selected.reverse();
        selected
    }

    fn append_outline(
        &self,
        canvas: &mut dyn Canvas,
        bounds: ClipBounds,
        coords: &[DensityCoord],
    ) {
        let view = &self.view;
        let ClipBounds {
            chart_min,
            chart_max,
        } = bounds;

        if view.orientation.is_vertical() {
            let factor = half_extent_factor(view.width, view.violin.max_estimate);
            for side in [-1.0, 1.0] {
                canvas.move_to(view.x, chart_min);
                for coord in coords {
                    canvas.line_to(view.x + side * coord.estimate * factor, coord.v);
                }
                canvas.line_to(view.x, chart_max);
            }
        } else {
            let factor = half_extent_factor(view.height, view.violin.max_estimate);
            for side in [-1.0, 1.0] {
                canvas.move_to(chart_min, view.y);
                for coord in coords {
                    canvas.line_to(coord.v, view.y + side * coord.estimate * factor);
                }
                canvas.line_to(chart_max, view.y);
            }
        }
    }
}

fn half_extent_factor(extent: f64, max_estimate: f64) -> f64 {
    if !max_estimate.is_finite() || max_estimate <= 0.0 {
        return 0.0;
    }
    (extent / 2.0) / max_estimate
}

impl ChartElement for ViolinElement {
    fn kind(&self) -> &'static str {
        "violin"
    }

    fn orientation(&self) -> Orientation {
        self.view.orientation
    }

    fn draw(&self, canvas: &mut dyn Canvas, options: &ChartOptions) -> ChartResult<()> {
        let view = &self.view;
        let violin = &view.violin;
        view.style.validate()?;

        let bounds = self.clip_bounds(options);
        if let Err(err) = bounds.validate(view.orientation) {
            warn!(
                dataset_index = view.dataset_index,
                index = view.index,
                error = %err,
                "skipping violin with misordered clip bounds"
            );
            return Err(err);
        }

        let coords = self.outline_coordinates(bounds);
        debug!(
            dataset_index = view.dataset_index,
            index = view.index,
            chart_min = bounds.chart_min,
            chart_max = bounds.chart_max,
            selected = coords.len(),
            total = violin.coords.len(),
            "drawing violin"
        );

        draw_items(
            canvas,
            view.placement(),
            &view.style,
            &violin.items,
            SeededJitter::for_element(view.dataset_index, view.index),
        )?;

        let mut canvas = CanvasStateGuard::acquire(canvas)?;
        canvas.set_fill_color(view.style.background_color);
        canvas.set_stroke_color(view.style.border_color);
        canvas.set_line_width(view.style.border_width);

        draw_point(
            &mut *canvas,
            PointStyle::RectRot,
            CENTER_MARKER_RADIUS,
            view.x,
            view.y,
        )?;

        canvas.begin_path();
        self.append_outline(&mut *canvas, bounds, &coords);
        canvas.stroke()?;
        canvas.fill()?;
        canvas.close_path();

        draw_outliers(
            &mut *canvas,
            view.placement(),
            &view.style,
            &violin.outliers,
        )?;
        trace!(outliers = violin.outliers.len(), "violin drawn");
        Ok(())
    }

    fn bounds(&self) -> ElementBounds {
        let view = &self.view;
        let violin = &view.violin;

        if view.orientation.is_vertical() {
            let left = view.x - view.width / 2.0;
            return ElementBounds::new(left, violin.max, left + view.width, violin.min);
        }
        let top = view.y - view.height / 2.0;
        ElementBounds::new(violin.min, top, violin.max, top + view.height)
    }

    fn height(&self) -> f64 {
        let violin = &self.view.violin;
        self.view.base - violin.min.min(violin.max)
    }

    fn area(&self) -> f64 {
        let view = &self.view;
        let range = (view.violin.max - view.violin.min).abs();
        if view.orientation.is_vertical() {
            range * view.width
        } else {
            range * view.height
        }
    }

    fn center_point(&self) -> Point {
        Point::new(self.view.x, self.view.y)
    }

    fn hit_padding(&self) -> f64 {
        self.view.style.hit_padding
    }
}
