//! chart-violin: violin plot element for pluggable 2D chart renderers.
//!
//! The crate draws precomputed, pixel-space violin data (density outline,
//! whisker clip bounds, outliers, raw items) onto any `render::Canvas` and
//! answers the geometry queries a host layout pass needs.

pub mod config;
pub mod core;
pub mod elements;
pub mod error;
pub mod render;
pub mod telemetry;

pub use elements::{ChartElement, ElementRegistry, ViolinElement, ViolinViewModel};
pub use error::{ChartError, ChartResult};
