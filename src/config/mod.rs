mod axis_config;
mod element_style;

pub use axis_config::{AxisConfig, AxisTicksConfig, ChartOptions, StatsSelector};
pub use element_style::ElementStyle;
