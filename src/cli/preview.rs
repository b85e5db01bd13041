//! `calheat preview` subcommand

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use super::ChartArgs;
use crate::tui;

/// Browse the heatmap in the terminal
#[derive(Args, Debug)]
pub struct PreviewArgs {
    /// JSON array of {date, count} observations, or - for stdin
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    #[command(flatten)]
    pub chart: ChartArgs,
}

impl PreviewArgs {
    /// Run the preview, then print the selected days as JSON
    pub fn run(self) -> anyhow::Result<()> {
        let chart = self.chart.chart(self.input.as_deref())?;
        let clicks = tui::run(chart)?;
        info!(selected = clicks.len(), "preview closed");

        if !clicks.is_empty() {
            println!("{}", serde_json::to_string_pretty(&clicks)?);
        }
        Ok(())
    }
}
