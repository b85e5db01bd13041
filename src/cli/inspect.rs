//! `calheat inspect` subcommand: layout or single-day details as JSON

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use chrono::NaiveDate;
use clap::Args;
use serde::Serialize;

use super::ChartArgs;
use crate::services::{GridPosition, Heatmap};
use crate::types::{parse_date, DayCount, HeatmapError, Result, Rgb};

/// Inspect the resolved chart
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// JSON array of {date, count} observations, or - for stdin
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Show a single day instead of the whole layout
    #[arg(long, value_name = "DATE", value_parser = parse_date)]
    pub date: Option<NaiveDate>,

    /// Click the day given by --date and report what the handler received
    #[arg(long, requires = "date")]
    pub click: bool,

    #[command(flatten)]
    pub chart: ChartArgs,
}

/// Everything known about one day
#[derive(Debug, Serialize)]
pub struct DayInfo {
    pub date: NaiveDate,
    pub count: u64,
    pub color: Rgb,
    pub position: GridPosition,
    pub x: i32,
    pub y: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clicked: Option<DayCount>,
}

impl InspectArgs {
    pub fn run(self) -> Result<()> {
        let chart = self.chart.chart(self.input.as_deref())?;

        let json = match self.date {
            Some(date) => to_json(&inspect_day(chart, date, self.click)?)?,
            None => to_json(chart.layout())?,
        };
        println!("{}", json);
        Ok(())
    }
}

/// Resolve one day; with `click`, route it through a click handler and
/// record the payload the handler saw
pub fn inspect_day(chart: Heatmap, date: NaiveDate, click: bool) -> Result<DayInfo> {
    let received = Rc::new(RefCell::new(None));
    let mut chart = if click {
        let sink = Rc::clone(&received);
        chart.on_click(move |day| *sink.borrow_mut() = Some(day))
    } else {
        chart
    };

    if click {
        chart.click(date);
    }

    let cell = chart.cell(date).ok_or_else(|| {
        let range = chart.layout().range;
        HeatmapError::Config(format!(
            "{} is outside the chart range {} to {}",
            date,
            range.start(),
            range.end()
        ))
    })?;
    let tooltip = chart.tooltip(date).map(|t| t.text);
    let clicked = received.borrow_mut().take();

    Ok(DayInfo {
        date: cell.date,
        count: cell.count,
        color: cell.color,
        position: cell.position,
        x: cell.x,
        y: cell.y,
        tooltip,
        clicked,
    })
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| HeatmapError::Output(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{HeatmapConfig, Observation};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn chart() -> Heatmap {
        let config = HeatmapConfig::default().data(vec![
            Observation::new(date(2024, 6, 15), 1),
            Observation::new(date(2024, 6, 1), 4),
        ]);
        Heatmap::new(config, date(2024, 6, 15))
    }

    #[test]
    fn test_inspect_day() {
        let info = inspect_day(chart(), date(2024, 6, 15), false).unwrap();
        assert_eq!(info.count, 1);
        assert_eq!(info.position.column, 52);
        assert_eq!(info.position.row, 6);
        assert_eq!(info.tooltip.as_deref(), Some("1 Event on 06/15/24"));
        assert!(info.clicked.is_none());
    }

    #[test]
    fn test_inspect_day_click() {
        let info = inspect_day(chart(), date(2024, 6, 1), true).unwrap();
        assert_eq!(
            info.clicked,
            Some(DayCount {
                date: date(2024, 6, 1),
                count: 4
            })
        );
    }

    #[test]
    fn test_inspect_day_out_of_range() {
        let result = inspect_day(chart(), date(2025, 1, 1), true);
        assert!(matches!(result, Err(HeatmapError::Config(_))));
    }

    #[test]
    fn test_inspect_day_json() {
        let info = inspect_day(chart(), date(2024, 5, 1), false).unwrap();
        let json = to_json(&info).unwrap();
        assert!(json.contains(r#""count": 0"#));
        assert!(json.contains(r##""color": "#d8e6e7""##));
        assert!(json.contains("No Events on 05/01/24"));
        assert!(!json.contains("clicked"));
    }

    #[test]
    fn test_layout_json() {
        let json = to_json(chart().layout()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["cells"].as_array().unwrap().len(), 367);
        assert_eq!(value["months"].as_array().unwrap().len(), 13);
    }
}
