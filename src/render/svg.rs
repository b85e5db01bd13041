//! SVG rendering of a heatmap

use std::borrow::Cow;
use std::fmt::Write as _;

use crate::services::chart::SELECTED_STROKE;
use crate::services::grid::{SQUARE_LENGTH, SQUARE_PADDING};
use crate::services::Heatmap;

/// Room left of the grid for weekday initials
pub const MARGIN_LEFT: i32 = 20;
/// Room above the grid for month labels
pub const MARGIN_TOP: i32 = 12;

const STYLE: &str = r#"  <style>
    .month-name, .day-initial, .calendar-heatmap-mini-legend-text { fill: #aaa; font-size: 10px; }
    .day-cell-tooltip { font-size: 10px; pointer-events: none; }
  </style>
"#;

/// Escape text for XML content and attribute values
pub fn escape_xml(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// How tooltips are carried in the markup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TooltipMarkup {
    /// `<title>` child per cell (native hover tooltips)
    Title,
    /// `data-tooltip` attribute per cell (read by the page script)
    DataAttribute,
}

/// Standalone SVG document
pub fn render_svg(chart: &Heatmap) -> String {
    write_svg(chart, TooltipMarkup::Title)
}

/// Total document size including margins and the legend row
pub fn document_size(chart: &Heatmap) -> (i32, i32) {
    let layout = chart.layout();
    let legend_row = if layout.legend.is_some() {
        SQUARE_PADDING + SQUARE_LENGTH
    } else {
        0
    };
    (
        MARGIN_LEFT + layout.width.max(layout.grid_width()),
        MARGIN_TOP + layout.height + legend_row,
    )
}

pub(crate) fn write_svg(chart: &Heatmap, tooltips: TooltipMarkup) -> String {
    let layout = chart.layout();
    let tooltips_enabled = chart.config().tooltip_enabled;
    let (width, height) = document_size(chart);

    let mut svg = String::with_capacity(64 * layout.cells.len() + 2048);
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" class="calendar-heatmap-mini" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="Helvetica, Arial, sans-serif" font-size="10">"#,
        w = width,
        h = height
    );
    svg.push_str(STYLE);
    let _ = writeln!(
        svg,
        r#"  <g transform="translate({},{})">"#,
        MARGIN_LEFT, MARGIN_TOP
    );

    for cell in &layout.cells {
        let _ = write!(
            svg,
            r#"    <rect class="day-cell" width="{len}" height="{len}" x="{}" y="{}" fill="{}" data-date="{}" data-count="{}""#,
            cell.x,
            cell.y,
            cell.color,
            cell.date,
            cell.count,
            len = SQUARE_LENGTH
        );
        if chart.selected() == Some(cell.date) {
            let _ = write!(svg, r#" style="stroke: {}""#, SELECTED_STROKE.css());
        }
        match (tooltips_enabled, tooltips) {
            (true, TooltipMarkup::Title) => {
                let _ = writeln!(
                    svg,
                    "><title>{}</title></rect>",
                    escape_xml(&chart.tooltip_text(cell))
                );
            }
            (true, TooltipMarkup::DataAttribute) => {
                let _ = writeln!(
                    svg,
                    r#" data-tooltip="{}"/>"#,
                    escape_xml(&chart.tooltip_text(cell))
                );
            }
            (false, _) => svg.push_str("/>\n"),
        }
    }

    if let Some(legend) = &layout.legend {
        svg.push_str("    <g>\n");
        for swatch in &legend.swatches {
            let _ = writeln!(
                svg,
                r#"      <rect class="calendar-heatmap-mini-legend" width="{len}" height="{len}" x="{}" y="{}" fill="{}"/>"#,
                swatch.x,
                swatch.y,
                swatch.color,
                len = SQUARE_LENGTH
            );
        }
        let _ = writeln!(
            svg,
            r#"      <text class="calendar-heatmap-mini-legend-text calendar-heatmap-mini-legend-text-less" x="{}" y="{}">{}</text>"#,
            legend.less.x,
            legend.less.y,
            escape_xml(&legend.less.text)
        );
        let _ = writeln!(
            svg,
            r#"      <text class="calendar-heatmap-mini-legend-text calendar-heatmap-mini-legend-text-more" x="{}" y="{}">{}</text>"#,
            legend.more.x,
            legend.more.y,
            escape_xml(&legend.more.text)
        );
        svg.push_str("    </g>\n");
    }

    for month in &layout.months {
        let _ = writeln!(
            svg,
            r#"    <text class="month-name" x="{}" y="{}">{}</text>"#,
            month.x,
            month.y,
            escape_xml(&month.text)
        );
    }

    for initial in &layout.day_initials {
        let _ = writeln!(
            svg,
            r#"    <text class="day-initial" transform="translate({},{})" text-anchor="middle" dy="2">{}</text>"#,
            initial.x,
            initial.y,
            escape_xml(&initial.text)
        );
    }

    if let Some(tooltip) = chart.hovered() {
        let _ = writeln!(
            svg,
            r#"    <text class="day-cell-tooltip" fill="black" x="{}" y="{}">{}</text>"#,
            tooltip.x,
            tooltip.y,
            escape_xml(&tooltip.text)
        );
    }

    svg.push_str("  </g>\n</svg>\n");
    svg
}
