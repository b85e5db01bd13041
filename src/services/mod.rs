//! Heatmap computation: date range, grid, colors, layout and interaction

pub mod chart;
pub mod color_scale;
pub mod date_range;
pub mod grid;
pub mod layout;
pub mod lookup;
pub mod writer;

pub use chart::{ClickHandler, Heatmap, Tooltip};
pub use color_scale::{ColorScale, LegendBucket};
pub use date_range::DateRange;
pub use grid::{grid_position, GridPosition};
pub use layout::{DayCell, HeatmapLayout};
pub use lookup::count_for_date;
pub use writer::write_atomic;
