use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, PointStyle};

/// Visual options shared by array-valued elements (violins, boxplots).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ElementStyle {
    pub background_color: Color,
    pub border_color: Color,
    pub border_width: f64,
    pub outlier_style: PointStyle,
    pub outlier_radius: f64,
    pub outlier_color: Color,
    pub item_style: PointStyle,
    /// Radius of raw item markers; `0` disables item drawing.
    pub item_radius: f64,
    pub item_background_color: Color,
    pub item_border_color: Color,
    pub hit_padding: f64,
}

impl Default for ElementStyle {
    fn default() -> Self {
        Self {
            background_color: Color::ELEMENT_DEFAULT,
            border_color: Color::ELEMENT_DEFAULT,
            border_width: 1.0,
            outlier_style: PointStyle::Circle,
            outlier_radius: 2.0,
            outlier_color: Color::ELEMENT_DEFAULT,
            item_style: PointStyle::Circle,
            item_radius: 0.0,
            item_background_color: Color::ELEMENT_DEFAULT,
            item_border_color: Color::ELEMENT_DEFAULT,
            hit_padding: 2.0,
        }
    }
}

impl ElementStyle {
    pub fn validate(self) -> ChartResult<()> {
        for color in [
            self.background_color,
            self.border_color,
            self.outlier_color,
            self.item_background_color,
            self.item_border_color,
        ] {
            color.validate()?;
        }
        for (name, value) in [
            ("border_width", self.border_width),
            ("outlier_radius", self.outlier_radius),
            ("item_radius", self.item_radius),
            ("hit_padding", self.hit_padding),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "element style `{name}` must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}
