//! Heatmap configuration
//!
//! Every option has a default, so config files only need the keys they
//! change. Fluent setters mirror the fields for programmatic use.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::ValueEnum;
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{HeatmapError, Locale, Observation, Result, Rgb, TooltipUnit};

/// First day of the week (top row of the grid)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatmapConfig {
    pub data: Vec<Observation>,
    /// Upper end of the color domain; the largest observed count when unset
    pub max: Option<u64>,
    /// Container the chart is placed in when rendered as an HTML page
    pub selector: String,
    /// First day of the range; the range ends one year later.
    /// When unset the range ends today.
    pub start_date: Option<NaiveDate>,
    /// Low and high end of the color scale
    pub color_range: [Rgb; 2],
    pub tooltip_enabled: bool,
    pub tooltip_unit: TooltipUnit,
    pub legend_enabled: bool,
    pub locale: Locale,
    pub week_start: WeekStart,
    pub width: u32,
    pub height: u32,
    pub legend_width: u32,
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            max: None,
            selector: "body".into(),
            start_date: None,
            color_range: [Rgb::new(0xD8, 0xE6, 0xE7), Rgb::new(0x21, 0x83, 0x80)],
            tooltip_enabled: true,
            tooltip_unit: TooltipUnit::default(),
            legend_enabled: true,
            locale: Locale::default(),
            week_start: WeekStart::default(),
            width: 825,
            height: 125,
            legend_width: 150,
        }
    }
}

impl HeatmapConfig {
    pub fn data(mut self, data: Vec<Observation>) -> Self {
        self.data = data;
        self
    }

    pub fn max(mut self, max: u64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = selector.into();
        self
    }

    pub fn start_date(mut self, start: NaiveDate) -> Self {
        self.start_date = Some(start);
        self
    }

    pub fn color_range(mut self, low: Rgb, high: Rgb) -> Self {
        self.color_range = [low, high];
        self
    }

    pub fn tooltip_enabled(mut self, enabled: bool) -> Self {
        self.tooltip_enabled = enabled;
        self
    }

    pub fn tooltip_unit(mut self, unit: TooltipUnit) -> Self {
        self.tooltip_unit = unit;
        self
    }

    pub fn legend_enabled(mut self, enabled: bool) -> Self {
        self.legend_enabled = enabled;
        self
    }

    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn week_start(mut self, week_start: WeekStart) -> Self {
        self.week_start = week_start;
        self
    }

    /// `~/.calheat/config.json`
    pub fn default_path() -> Option<PathBuf> {
        BaseDirs::new().map(|dirs| dirs.home_dir().join(".calheat").join("config.json"))
    }

    /// Read a JSON config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| HeatmapError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Load `explicit` if given (it must exist), otherwise the default
    /// config file when present, otherwise built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => {
                debug!(path = %path.display(), "loading default config");
                Self::from_file(&path)
            }
            _ => Ok(Self::default()),
        }
    }
}
