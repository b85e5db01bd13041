//! Heatmap layout: day-cells, legend, month and weekday labels
//!
//! Everything the renderers need is resolved here, in pixel coordinates
//! relative to the top-left day-cell. Labels that sit left of or above the
//! grid get negative or small coordinates; renderers add margins.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use tracing::debug;

use super::color_scale::{ColorScale, LEGEND_BUCKETS};
use super::date_range::DateRange;
use super::grid::{self, GridPosition, CELL_STRIDE, SQUARE_LENGTH, SQUARE_PADDING};
use super::lookup;
use crate::types::{DayCount, HeatmapConfig, Rgb, WeekStart};

/// Horizontal step between legend swatches
pub const LEGEND_STEP: i32 = 13;
/// x of the weekday initials column
pub const DAY_INITIAL_X: i32 = -8;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayCell {
    pub date: NaiveDate,
    pub count: u64,
    pub color: Rgb,
    pub position: GridPosition,
    pub x: i32,
    pub y: i32,
}

impl DayCell {
    pub fn day_count(&self) -> DayCount {
        DayCount {
            date: self.date,
            count: self.count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextLabel {
    pub text: String,
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendSwatch {
    pub value: f64,
    pub color: Rgb,
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub swatches: Vec<LegendSwatch>,
    pub less: TextLabel,
    pub more: TextLabel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthLabel {
    /// First day of the labelled month
    pub month: NaiveDate,
    pub text: String,
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayInitial {
    pub text: String,
    pub row: u32,
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapLayout {
    pub range: DateRange,
    pub week_start: WeekStart,
    pub scale: ColorScale,
    pub cells: Vec<DayCell>,
    pub legend: Option<Legend>,
    pub months: Vec<MonthLabel>,
    pub day_initials: Vec<DayInitial>,
    pub width: i32,
    pub height: i32,
}

impl HeatmapLayout {
    /// Resolve the layout for `config`; `today` ends the default range
    pub fn build(config: &HeatmapConfig, today: NaiveDate) -> Self {
        let range = DateRange::resolve(config.start_date, today);
        let max = config
            .max
            .unwrap_or_else(|| lookup::max_count(&config.data));
        let scale = ColorScale::new(config.color_range, max);
        let first = range.start();

        let cells: Vec<DayCell> = range
            .days()
            .map(|date| {
                let count = lookup::count_for_date(&config.data, date);
                let position = grid::grid_position(date, first, config.week_start);
                let (x, y) = position.pixel();
                DayCell {
                    date,
                    count,
                    color: scale.color(count),
                    position,
                    x,
                    y,
                }
            })
            .collect();

        let width = config.width as i32;
        let height = config.height as i32;

        let legend = config
            .legend_enabled
            .then(|| build_legend(&scale, config, width, height));
        let months = month_labels(&range, config);
        let day_initials = day_initials(config);

        debug!(
            start = %range.start(),
            end = %range.end(),
            max,
            cells = cells.len(),
            "built heatmap layout"
        );

        Self {
            range,
            week_start: config.week_start,
            scale,
            cells,
            legend,
            months,
            day_initials,
            width,
            height,
        }
    }

    /// Cell for a date in range
    pub fn cell(&self, date: NaiveDate) -> Option<&DayCell> {
        self.range.index_of(date).and_then(|i| self.cells.get(i))
    }

    /// Number of week columns
    pub fn columns(&self) -> i32 {
        self.cells
            .iter()
            .map(|c| c.position.column + 1)
            .max()
            .unwrap_or(0)
    }

    /// Right edge of the day grid in px
    pub fn grid_width(&self) -> i32 {
        (self.columns() * CELL_STRIDE - SQUARE_PADDING).max(0)
    }
}

fn build_legend(scale: &ColorScale, config: &HeatmapConfig, width: i32, height: i32) -> Legend {
    let origin = width - config.legend_width as i32;
    let swatches: Vec<LegendSwatch> = scale
        .legend()
        .iter()
        .enumerate()
        .map(|(i, bucket)| LegendSwatch {
            value: bucket.value,
            color: bucket.color,
            x: origin + (i as i32 + 1) * LEGEND_STEP,
            y: height + SQUARE_PADDING,
        })
        .collect();

    Legend {
        less: TextLabel {
            text: config.locale.less.clone(),
            x: origin - LEGEND_STEP,
            y: height + SQUARE_LENGTH,
        },
        more: TextLabel {
            text: config.locale.more.clone(),
            x: origin + SQUARE_PADDING + (LEGEND_BUCKETS as i32 + 1) * LEGEND_STEP,
            y: height + SQUARE_LENGTH,
        },
        swatches,
    }
}

/// One label per month, above the week in which the month's first
/// in-range day appears (by range index / 7)
fn month_labels(range: &DateRange, config: &HeatmapConfig) -> Vec<MonthLabel> {
    let last_index = range.len().saturating_sub(1);
    range
        .months()
        .into_iter()
        .map(|month| {
            let index = range
                .days()
                .position(|d| d.month() == month.month() && d.year() == month.year())
                .unwrap_or(last_index);
            MonthLabel {
                month,
                text: config.locale.month(month.month()).to_string(),
                x: (index / 7) as i32 * CELL_STRIDE,
                y: 0,
            }
        })
        .collect()
}

/// Initials for every other row (rows 1, 3 and 5)
fn day_initials(config: &HeatmapConfig) -> Vec<DayInitial> {
    config
        .locale
        .days
        .iter()
        .enumerate()
        .filter_map(|(weekday, text)| {
            let row = grid::format_weekday(weekday as u32, config.week_start);
            (row % 2 == 1).then(|| DayInitial {
                text: text.clone(),
                row,
                x: DAY_INITIAL_X,
                y: CELL_STRIDE * (row as i32 + 1),
            })
        })
        .collect()
}
