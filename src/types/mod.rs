//! Type definitions for calheat

mod color;
mod config;
mod error;
mod locale;
mod observation;

pub use color::Rgb;
pub use config::{HeatmapConfig, WeekStart};
pub use error::*;
pub use locale::{Locale, TooltipUnit, UnitRule, UpperBound};
pub use observation::{parse_date, parse_observations, DayCount, Observation};
