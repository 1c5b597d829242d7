use serde::{Deserialize, Serialize};

use crate::error::ChartResult;

/// Statistic an axis uses as its visible bound.
///
/// Only `WhiskerMin`/`WhiskerMax` change how violin outlines are clipped; any
/// name the host sends that is not listed here lands in `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatsSelector {
    Min,
    Q1,
    Median,
    Q3,
    Max,
    WhiskerMin,
    WhiskerMax,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AxisTicksConfig {
    pub min_stats: Option<StatsSelector>,
    pub max_stats: Option<StatsSelector>,
}

impl AxisTicksConfig {
    #[must_use]
    pub fn with_min_stats(mut self, selector: StatsSelector) -> Self {
        self.min_stats = Some(selector);
        self
    }

    #[must_use]
    pub fn with_max_stats(mut self, selector: StatsSelector) -> Self {
        self.max_stats = Some(selector);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AxisConfig {
    pub ticks: Option<AxisTicksConfig>,
}

impl AxisConfig {
    #[must_use]
    pub fn with_ticks(ticks: AxisTicksConfig) -> Self {
        Self { ticks: Some(ticks) }
    }
}

/// Chart-level options read by elements while drawing.
///
/// Value axes are indexed by the dataset index the element was built from.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartOptions {
    pub y_axes: Vec<AxisConfig>,
}

impl ChartOptions {
    #[must_use]
    pub fn with_y_axis(mut self, axis: AxisConfig) -> Self {
        self.y_axes.push(axis);
        self
    }

    #[must_use]
    pub fn y_axis(&self, index: usize) -> Option<&AxisConfig> {
        self.y_axes.get(index)
    }

    pub fn from_json_str(json: &str) -> ChartResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
