//! `calheat render` subcommand

use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};

use super::ChartArgs;
use crate::render::{render_html, render_svg};
use crate::services::{write_atomic, Heatmap};
use crate::types::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Svg,
    Html,
}

impl OutputFormat {
    /// Guess from the output file extension; SVG otherwise
    fn infer(output: Option<&Path>) -> Self {
        let ext = output
            .and_then(Path::extension)
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("html") | Some("htm") => Self::Html,
            _ => Self::Svg,
        }
    }
}

/// Render the heatmap
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// JSON array of {date, count} observations, or - for stdin
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from the output extension, else svg)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(flatten)]
    pub chart: ChartArgs,
}

impl RenderArgs {
    pub fn run(self) -> Result<()> {
        let chart = self.chart.chart(self.input.as_deref())?;
        let format = self
            .format
            .unwrap_or_else(|| OutputFormat::infer(self.output.as_deref()));
        let content = render(&chart, format)?;

        match &self.output {
            Some(path) => write_atomic(path, &content)?,
            None => println!("{}", content),
        }
        Ok(())
    }
}

fn render(chart: &Heatmap, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Svg => Ok(render_svg(chart)),
        OutputFormat::Html => render_html(chart),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::HeatmapConfig;
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_infer_format() {
        assert_eq!(OutputFormat::infer(None), OutputFormat::Svg);
        assert_eq!(
            OutputFormat::infer(Some(Path::new("out.svg"))),
            OutputFormat::Svg
        );
        assert_eq!(
            OutputFormat::infer(Some(Path::new("page.HTML"))),
            OutputFormat::Html
        );
        assert_eq!(
            OutputFormat::infer(Some(Path::new("page.htm"))),
            OutputFormat::Html
        );
    }

    #[test]
    fn test_render_formats() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let chart = Heatmap::new(HeatmapConfig::default(), today);

        let svg = render(&chart, OutputFormat::Svg).unwrap();
        assert!(svg.starts_with("<svg"));
        let html = render(&chart, OutputFormat::Html).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn test_run_writes_output_file() {
        let tmp = TempDir::new().unwrap();
        let config = tmp.path().join("config.json");
        let input = tmp.path().join("data.json");
        let output = tmp.path().join("out").join("chart.html");
        fs::write(&config, "{}").unwrap();
        fs::write(&input, r#"[{"date": "2024-06-15", "count": 2}]"#).unwrap();

        let args = RenderArgs {
            input: Some(input),
            output: Some(output.clone()),
            format: None,
            chart: ChartArgs {
                config: Some(config),
                today: NaiveDate::from_ymd_opt(2024, 6, 15),
                ..Default::default()
            },
        };
        args.run().unwrap();

        let written = fs::read_to_string(&output).unwrap();
        assert!(written.contains(r#"data-date="2024-06-15" data-count="2""#));
        assert!(written.contains("calheat:click"));
    }
}
