//! Legend line: "Less ██ ██ ██ ██ More"

use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use crate::services::layout::Legend;
use crate::tui::theme::{cell_color, Theme};

const SWATCH: &str = "██";

pub struct LegendLine<'a> {
    legend: &'a Legend,
    theme: Theme,
}

impl<'a> LegendLine<'a> {
    pub fn new(legend: &'a Legend, theme: Theme) -> Self {
        Self { legend, theme }
    }

    /// Display width of the whole line
    pub fn width(&self) -> u16 {
        let words = self.legend.less.text.chars().count() + self.legend.more.text.chars().count();
        let swatches = self.legend.swatches.len() * (SWATCH.chars().count() + 1);
        (words + 1 + swatches) as u16
    }
}

impl Widget for LegendLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        // Right-aligned like the SVG legend
        let x = area.x + area.width.saturating_sub(self.width());
        let y = area.y;
        let muted = Style::default().fg(self.theme.muted());

        let (mut x, _) = buf.set_stringn(x, y, &self.legend.less.text, area.width as usize, muted);
        x += 1;
        for swatch in &self.legend.swatches {
            if x + 2 > area.right() {
                return;
            }
            buf.set_string(x, y, SWATCH, Style::default().fg(cell_color(swatch.color)));
            x += 3;
        }
        let remaining = area.right().saturating_sub(x) as usize;
        buf.set_stringn(x, y, &self.legend.more.text, remaining, muted);
    }
}
