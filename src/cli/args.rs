//! Chart flags shared by every subcommand

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use clap::Args;
use tracing::debug;

use crate::services::Heatmap;
use crate::types::{
    parse_date, parse_observations, HeatmapConfig, HeatmapError, Locale, Observation, Result,
    Rgb, TooltipUnit, WeekStart,
};

/// Display options; flags override the config file
#[derive(Args, Debug, Default)]
pub struct ChartArgs {
    /// Config file (default: ~/.calheat/config.json when present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// First day of the range; the range then spans one year from it
    #[arg(long, value_name = "DATE", value_parser = parse_date)]
    pub start: Option<NaiveDate>,

    /// Date that ends the default range (default: today)
    #[arg(long, value_name = "DATE", value_parser = parse_date)]
    pub today: Option<NaiveDate>,

    /// Upper end of the color domain
    #[arg(long)]
    pub max: Option<u64>,

    /// Color for zero counts (#rgb, #rrggbb or rgb(r, g, b))
    #[arg(long, value_name = "COLOR")]
    pub low: Option<Rgb>,

    /// Color for the maximum count
    #[arg(long, value_name = "COLOR")]
    pub high: Option<Rgb>,

    /// First day of the week
    #[arg(long, value_enum)]
    pub week_start: Option<WeekStart>,

    /// Tooltip unit word, pluralized with "s"
    #[arg(long)]
    pub unit: Option<String>,

    /// Disable tooltips
    #[arg(long)]
    pub no_tooltip: bool,

    /// Disable the legend
    #[arg(long)]
    pub no_legend: bool,

    /// HTML container: body, #id, .class or a tag name
    #[arg(long)]
    pub selector: Option<String>,

    /// Locale JSON file (month names, day initials, legend words)
    #[arg(long, value_name = "FILE")]
    pub locale: Option<PathBuf>,
}

impl ChartArgs {
    /// Resolve the configuration: defaults, then the config file, then flags.
    /// `data` replaces the config file's data when given.
    pub fn config(&self, data: Option<Vec<Observation>>) -> Result<HeatmapConfig> {
        let mut config = HeatmapConfig::load(self.config.as_deref())?;

        if let Some(data) = data {
            config = config.data(data);
        }
        if let Some(start) = self.start {
            config = config.start_date(start);
        }
        if let Some(max) = self.max {
            config = config.max(max);
        }
        if self.low.is_some() || self.high.is_some() {
            let [low, high] = config.color_range;
            config = config.color_range(self.low.unwrap_or(low), self.high.unwrap_or(high));
        }
        if let Some(week_start) = self.week_start {
            config = config.week_start(week_start);
        }
        if let Some(unit) = &self.unit {
            config = config.tooltip_unit(TooltipUnit::Word(unit.clone()));
        }
        if self.no_tooltip {
            config = config.tooltip_enabled(false);
        }
        if self.no_legend {
            config = config.legend_enabled(false);
        }
        if let Some(selector) = &self.selector {
            config = config.selector(selector.as_str());
        }
        if let Some(path) = &self.locale {
            config = config.locale(load_locale(path)?);
        }

        Ok(config)
    }

    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Load observations from `input` and build the chart
    pub fn chart(&self, input: Option<&Path>) -> Result<Heatmap> {
        let data = input.map(read_observations).transpose()?;
        let config = self.config(data)?;
        let today = self.today();
        debug!(%today, observations = config.data.len(), "building chart");
        Ok(Heatmap::new(config, today))
    }
}

/// Read a JSON observation array from a file, or stdin for `-`
pub fn read_observations(input: &Path) -> Result<Vec<Observation>> {
    let json = if input == Path::new("-") {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(input)?
    };
    parse_observations(&json)
}

fn load_locale(path: &Path) -> Result<Locale> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|e| HeatmapError::Config(format!("{}: {}", path.display(), e)))
}
