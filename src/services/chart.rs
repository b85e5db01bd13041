//! The heatmap chart: configuration, resolved layout and interaction state

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, warn};

use super::layout::{DayCell, HeatmapLayout};
use crate::types::{DayCount, HeatmapConfig, Rgb};

/// Tooltip offset from the hovered cell's origin
const TOOLTIP_DX: i32 = -50;
const TOOLTIP_DY: i32 = -5;

/// Stroke drawn around the selected day-cell
pub const SELECTED_STROKE: Rgb = Rgb::BLACK;

/// Called with the clicked day
pub type ClickHandler = Box<dyn FnMut(DayCount)>;

/// Tooltip shown while hovering a day-cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tooltip {
    pub date: NaiveDate,
    pub text: String,
    pub x: i32,
    pub y: i32,
}

pub struct Heatmap {
    config: HeatmapConfig,
    layout: HeatmapLayout,
    on_click: Option<ClickHandler>,
    hovered: Option<Tooltip>,
    selected: Option<NaiveDate>,
}

impl fmt::Debug for Heatmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Heatmap")
            .field("range", &self.layout.range)
            .field("has_click_handler", &self.on_click.is_some())
            .field("hovered", &self.hovered)
            .field("selected", &self.selected)
            .finish()
    }
}

impl Heatmap {
    /// Build the chart. `today` ends the range unless a start date is set.
    pub fn new(config: HeatmapConfig, today: NaiveDate) -> Self {
        let layout = HeatmapLayout::build(&config, today);
        Self {
            config,
            layout,
            on_click: None,
            hovered: None,
            selected: None,
        }
    }

    /// Enable click selection; `handler` receives every clicked day
    pub fn on_click(mut self, handler: impl FnMut(DayCount) + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    pub fn config(&self) -> &HeatmapConfig {
        &self.config
    }

    pub fn layout(&self) -> &HeatmapLayout {
        &self.layout
    }

    pub fn clickable(&self) -> bool {
        self.on_click.is_some()
    }

    pub fn hovered(&self) -> Option<&Tooltip> {
        self.hovered.as_ref()
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    /// Resolved count for a date (0 outside the data, `None` outside the range)
    pub fn count_for_date(&self, date: NaiveDate) -> Option<u64> {
        self.layout.cell(date).map(|c| c.count)
    }

    pub fn cell(&self, date: NaiveDate) -> Option<&DayCell> {
        self.layout.cell(date)
    }

    /// Tooltip for a day, positioned relative to its cell
    pub fn tooltip(&self, date: NaiveDate) -> Option<Tooltip> {
        if !self.config.tooltip_enabled {
            return None;
        }
        let cell = self.layout.cell(date)?;
        Some(Tooltip {
            date,
            text: self.tooltip_text(cell),
            x: cell.x + TOOLTIP_DX,
            y: cell.y + TOOLTIP_DY,
        })
    }

    pub(crate) fn tooltip_text(&self, cell: &DayCell) -> String {
        self.config
            .locale
            .tooltip(&self.config.tooltip_unit, cell.day_count())
    }

    /// Mouse-over: show the day's tooltip. Replaces any previous one.
    pub fn hover(&mut self, date: NaiveDate) -> Option<&Tooltip> {
        self.hovered = self.tooltip(date);
        self.hovered.as_ref()
    }

    /// Mouse-out: drop the tooltip
    pub fn unhover(&mut self) {
        self.hovered = None;
    }

    /// Select a day and notify the click handler.
    /// Without a handler clicks are ignored.
    pub fn click(&mut self, date: NaiveDate) -> Option<DayCount> {
        let handler = self.on_click.as_mut()?;
        let Some(cell) = self.layout.cell(date) else {
            warn!(%date, "click outside of chart range ignored");
            return None;
        };

        let day = cell.day_count();
        if let Some(previous) = self.selected.replace(date) {
            debug!(%previous, "selection cleared");
        }
        handler(day);
        Some(day)
    }
}
