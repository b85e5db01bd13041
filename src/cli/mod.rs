//! Command line interface

mod args;
mod inspect;
mod preview;
mod render;

use clap::{Parser, Subcommand};

pub use args::ChartArgs;
pub use inspect::InspectArgs;
pub use preview::PreviewArgs;
pub use render::{OutputFormat, RenderArgs};

/// One-year calendar heatmap renderer
#[derive(Parser, Debug)]
#[command(name = "calheat")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render the heatmap as SVG or an HTML page
    Render(RenderArgs),

    /// Print the resolved layout, or one day, as JSON
    Inspect(InspectArgs),

    /// Interactive terminal preview
    Preview(PreviewArgs),
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            Commands::Render(args) => args.run()?,
            Commands::Inspect(args) => args.run()?,
            Commands::Preview(args) => args.run()?,
        }
        Ok(())
    }
}
