//! Layout configuration: viewport, margins, scale tuning and visibility toggles.
//!
//! Every field has a default so a document may specify only what it changes.

use hp_core::Real;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Viewport {
    /// Pixel width of the drawing area.
    pub width: Real,
    /// Pixel height of the drawing area.
    pub height: Real,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 400.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margin {
    pub top: Real,
    pub right: Real,
    pub bottom: Real,
    pub left: Real,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 30.0,
            bottom: 40.0,
            left: 60.0,
        }
    }
}

/// Presentation toggles. The engine computes every layer regardless and
/// copies these into the model for the drawing layer to honour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Visibility {
    pub min_max: bool,
    pub static_hgl: bool,
    pub flowing_hgl: bool,
}

impl Default for Visibility {
    fn default() -> Self {
        Self {
            min_max: true,
            static_hgl: true,
            flowing_hgl: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    pub viewport: Viewport,
    pub margin: Margin,
    /// Added above and below the elevation extents.
    pub elevation_padding: Real,
    /// Spacing of elevation ticks.
    pub tick_step: Real,
    /// Every n-th tick step (counted from zero) is a major tick.
    pub major_tick_every: u32,
    pub visibility: Visibility,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            margin: Margin::default(),
            elevation_padding: 10.0,
            tick_step: 10.0,
            major_tick_every: 5,
            visibility: Visibility::default(),
        }
    }
}

impl ProfileConfig {
    pub fn with_width(mut self, width: Real) -> Self {
        self.viewport.width = width;
        self
    }

    pub fn with_height(mut self, height: Real) -> Self {
        self.viewport.height = height;
        self
    }

    /// Left edge of the plot area.
    pub fn plot_left(&self) -> Real {
        self.margin.left
    }

    /// Right edge of the plot area; never left of `plot_left`.
    pub fn plot_right(&self) -> Real {
        (self.viewport.width - self.margin.right).max(self.plot_left())
    }

    /// Top edge of the plot area (highest elevation).
    pub fn plot_top(&self) -> Real {
        self.margin.top
    }

    /// Bottom edge of the plot area; never above `plot_top`.
    pub fn plot_bottom(&self) -> Real {
        (self.viewport.height - self.margin.bottom).max(self.plot_top())
    }
}
