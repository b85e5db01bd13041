//! HTML page embedding a heatmap into a selected container

use std::fmt::Write as _;

use super::svg::{escape_xml, write_svg, TooltipMarkup};
use crate::services::Heatmap;
use crate::types::{HeatmapError, Result};

/// Elements that cannot hold the chart: document structure, raw-text and
/// void elements
const NON_CONTENT_TAGS: &[&str] = &[
    "html", "head", "title", "base", "link", "meta", "style", "script", "noscript", "template",
    "textarea", "iframe", "svg", "br", "hr", "img", "input", "area", "col", "embed", "source",
    "track", "wbr",
];

/// Element the chart is placed in, parsed from a CSS-like selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Container {
    Body,
    Id(String),
    Class(String),
    Tag(String),
}

impl Container {
    /// Accepts `body`, `#id`, `.class` or a bare tag name
    pub fn parse(selector: &str) -> Result<Self> {
        let selector = selector.trim();
        let unsupported = || HeatmapError::Config(format!("unsupported selector: {:?}", selector));

        let is_ident = |s: &str| {
            !s.is_empty()
                && s.chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        };

        if selector.eq_ignore_ascii_case("body") {
            Ok(Self::Body)
        } else if let Some(id) = selector.strip_prefix('#') {
            is_ident(id).then(|| Self::Id(id.to_string())).ok_or_else(unsupported)
        } else if let Some(class) = selector.strip_prefix('.') {
            is_ident(class)
                .then(|| Self::Class(class.to_string()))
                .ok_or_else(unsupported)
        } else if is_ident(selector) && selector.starts_with(|c: char| c.is_ascii_alphabetic()) {
            let tag = selector.to_ascii_lowercase();
            if NON_CONTENT_TAGS.contains(&tag.as_str()) {
                return Err(unsupported());
            }
            Ok(Self::Tag(tag))
        } else {
            Err(unsupported())
        }
    }

    fn open_tag(&self) -> Option<String> {
        let style = r#"style="position: relative""#;
        match self {
            Self::Body => None,
            Self::Id(id) => Some(format!(r#"<div id="{}" {}>"#, id, style)),
            Self::Class(class) => Some(format!(r#"<div class="{}" {}>"#, class, style)),
            Self::Tag(tag) => Some(format!("<{} {}>", tag, style)),
        }
    }

    fn close_tag(&self) -> Option<String> {
        match self {
            Self::Body => None,
            Self::Id(_) | Self::Class(_) => Some("</div>".into()),
            Self::Tag(tag) => Some(format!("</{}>", tag)),
        }
    }
}

/// Browser-side hover tooltips and click selection.
/// Clicks dispatch a bubbling `calheat:click` event with `{date, count}`.
const SCRIPT: &str = r#"<script>
(function () {
  var svg = document.currentScript.previousElementSibling;
  var layer = svg.querySelector('g');
  var NS = 'http://www.w3.org/2000/svg';
  var tooltip = null;
  var selected = null;
  svg.querySelectorAll('rect.day-cell').forEach(function (cell) {
    if (cell.hasAttribute('data-tooltip')) {
      cell.addEventListener('mouseover', function () {
        tooltip = document.createElementNS(NS, 'text');
        tooltip.setAttribute('class', 'day-cell-tooltip');
        tooltip.setAttribute('fill', 'black');
        tooltip.setAttribute('x', parseInt(cell.getAttribute('x'), 10) - 50);
        tooltip.setAttribute('y', parseInt(cell.getAttribute('y'), 10) - 5);
        tooltip.textContent = cell.getAttribute('data-tooltip');
        layer.appendChild(tooltip);
      });
      cell.addEventListener('mouseout', function () {
        if (tooltip) { tooltip.remove(); tooltip = null; }
      });
    }
    cell.addEventListener('click', function () {
      if (selected) { selected.style.stroke = null; }
      selected = cell;
      cell.style.stroke = 'rgb(0,0,0)';
      svg.dispatchEvent(new CustomEvent('calheat:click', {
        bubbles: true,
        detail: { date: cell.getAttribute('data-date'), count: Number(cell.getAttribute('data-count')) }
      }));
    });
  });
})();
</script>
"#;

/// Full HTML page with the chart placed in the configured container
pub fn render_html(chart: &Heatmap) -> Result<String> {
    let container = Container::parse(&chart.config().selector)?;
    let svg = write_svg(chart, TooltipMarkup::DataAttribute);
    let range = chart.layout().range;

    let mut html = String::with_capacity(svg.len() + SCRIPT.len() + 512);
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(
        html,
        "<title>{} {} &#8211; {}</title>",
        escape_xml(chart.config().tooltip_unit.for_count(2).as_ref()),
        range.start(),
        range.end()
    );
    html.push_str("<style>.day-cell { cursor: pointer; }</style>\n</head>\n");

    match container.open_tag() {
        Some(open) => {
            let _ = writeln!(html, "<body>\n{}", open);
        }
        None => html.push_str("<body style=\"position: relative\">\n"),
    }
    html.push_str(&svg);
    html.push_str(SCRIPT);
    if let Some(close) = container.close_tag() {
        let _ = writeln!(html, "{}", close);
    }
    html.push_str("</body>\n</html>\n");
    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::HeatmapConfig;
    use chrono::NaiveDate;

    fn chart(selector: &str) -> Heatmap {
        Heatmap::new(
            HeatmapConfig::default().selector(selector),
            NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
        )
    }

    #[test]
    fn test_parse_selectors() {
        assert_eq!(Container::parse("body").unwrap(), Container::Body);
        assert_eq!(Container::parse("#chart").unwrap(), Container::Id("chart".into()));
        assert_eq!(
            Container::parse(".heat-map").unwrap(),
            Container::Class("heat-map".into())
        );
        assert_eq!(Container::parse("main").unwrap(), Container::Tag("main".into()));
    }

    #[test]
    fn test_parse_rejects_complex_selectors() {
        for bad in ["", "#", ".", "div > p", "#a.b", "1div", "[data-x]"] {
            let err = Container::parse(bad).unwrap_err();
            assert!(matches!(err, HeatmapError::Config(_)), "{:?}", bad);
        }
    }

    #[test]
    fn test_render_html_into_id() {
        let html = render_html(&chart("#activity")).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<div id="activity" style="position: relative">"#));
        let svg_at = html.find("<svg").unwrap();
        let script_at = html.find("<script>").unwrap();
        let close_at = html.find("</div>").unwrap();
        assert!(svg_at < script_at && script_at < close_at);
    }

    #[test]
    fn test_render_html_into_body() {
        let html = render_html(&chart("body")).unwrap();
        assert!(html.contains("<body style=\"position: relative\">"));
        assert!(!html.contains("<div"));
    }

    #[test]
    fn test_render_html_uses_data_tooltips() {
        let html = render_html(&chart("body")).unwrap();
        assert!(html.contains("data-tooltip=\"No Events on 06/15/24\""));
        assert!(!html.contains("<title>No Events"));
    }

    #[test]
    fn test_parse_rejects_non_content_tags() {
        for tag in ["script", "STYLE", "head", "html", "title", "img", "textarea"] {
            let err = Container::parse(tag).unwrap_err();
            assert!(matches!(err, HeatmapError::Config(_)), "{:?}", tag);
        }
        assert_eq!(
            Container::parse("Section").unwrap(),
            Container::Tag("section".into())
        );
    }

    #[test]
    fn test_render_html_bad_selector() {
        assert!(render_html(&chart("div p")).is_err());
    }
}
