//! One-year calendar heatmaps: layout, SVG/HTML rendering and a terminal preview

pub mod cli;
pub mod render;
pub mod services;
pub mod tui;
pub mod types;
