//! Linear count-to-color scale and legend buckets

use serde::Serialize;

use crate::types::Rgb;

/// Number of legend swatches
pub const LEGEND_BUCKETS: usize = 4;

/// Maps counts in `[0, max]` linearly onto `[low, high]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorScale {
    low: Rgb,
    high: Rgb,
    max: u64,
}

/// One legend swatch: the domain value and its color
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LegendBucket {
    pub value: f64,
    pub color: Rgb,
}

impl ColorScale {
    pub fn new(range: [Rgb; 2], max: u64) -> Self {
        Self {
            low: range[0],
            high: range[1],
            max,
        }
    }

    pub fn max(&self) -> u64 {
        self.max
    }

    pub fn color(&self, count: u64) -> Rgb {
        self.color_at(count as f64)
    }

    /// Color for a (possibly fractional) domain value.
    /// A zero domain resolves everything to the low color.
    pub fn color_at(&self, value: f64) -> Rgb {
        if self.max == 0 {
            return self.low;
        }
        self.low.lerp(self.high, value / self.max as f64)
    }

    /// Swatches for 0, max/3, max/2 and max
    pub fn legend(&self) -> [LegendBucket; LEGEND_BUCKETS] {
        let max = self.max as f64;
        [0.0, max / 3.0, max / 2.0, max].map(|value| LegendBucket {
            value,
            color: self.color_at(value),
        })
    }
}
