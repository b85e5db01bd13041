//! Markup output: standalone SVG and HTML pages

pub mod html;
pub mod svg;

pub use html::{render_html, Container};
pub use svg::{escape_xml, render_svg};
