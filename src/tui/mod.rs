//! Terminal preview of the heatmap

pub mod app;
pub mod theme;
pub mod widgets;

pub use app::{run, App};
pub use theme::Theme;
