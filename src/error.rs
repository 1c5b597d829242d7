use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid clip bounds: chart_min={chart_min}, chart_max={chart_max}")]
    InvalidClipBounds { chart_min: f64, chart_max: f64 },

    #[error("element `{0}` is already registered")]
    DuplicateElement(String),

    #[error("canvas backend failure: {0}")]
    Backend(String),

    #[error("invalid chart options: {0}")]
    Config(#[from] serde_json::Error),
}
