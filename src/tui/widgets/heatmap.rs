//! Calendar heatmap widget

use chrono::NaiveDate;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use crate::services::grid::CELL_STRIDE;
use crate::services::Heatmap;
use crate::tui::theme::{cell_color, Theme};

/// Cell dimensions for the grid layout
pub const CELL_WIDTH: u16 = 3; // 2 chars content + 1 gap
pub const LABEL_WIDTH: u16 = 2; // weekday initial + space
const GRID_TOP: u16 = 1; // month labels sit above the grid

/// Rows used by month labels plus seven weekday rows
pub const HEATMAP_HEIGHT: u16 = GRID_TOP + 7;

const CELL: &str = "██";
const SELECTED_CELL: &str = "▓▓";
const CURSOR_CELL: &str = "[]";

/// Heatmap widget for ratatui
pub struct HeatmapView<'a> {
    chart: &'a Heatmap,
    cursor: Option<NaiveDate>,
    theme: Theme,
}

impl<'a> HeatmapView<'a> {
    pub fn new(chart: &'a Heatmap, theme: Theme) -> Self {
        Self {
            chart,
            cursor: None,
            theme,
        }
    }

    pub fn cursor(mut self, date: NaiveDate) -> Self {
        self.cursor = Some(date);
        self
    }

    /// Week columns that fit in `width`
    pub fn weeks_for_width(width: u16) -> usize {
        (width.saturating_sub(LABEL_WIDTH) / CELL_WIDTH) as usize
    }

    /// Leftmost visible column: show the most recent weeks, but never
    /// scroll the cursor out of view
    fn first_column(&self, visible: usize) -> i32 {
        let layout = self.chart.layout();
        let first = (layout.columns() - visible as i32).max(0);
        match self.cursor.and_then(|d| layout.cell(d)) {
            Some(cell) if cell.position.column < first => cell.position.column,
            Some(cell) if cell.position.column >= first + visible as i32 => {
                cell.position.column + 1 - visible as i32
            }
            _ => first,
        }
    }

    fn render_day_initials(&self, area: Rect, buf: &mut Buffer) {
        let style = Style::default().fg(self.theme.muted());
        for initial in &self.chart.layout().day_initials {
            let y = area.y + GRID_TOP + initial.row as u16;
            if y >= area.bottom() {
                continue;
            }
            buf.set_stringn(area.x, y, &initial.text, 1, style);
        }
    }

    fn render_month_labels(&self, area: Rect, buf: &mut Buffer, first: i32, visible: usize) {
        let style = Style::default().fg(self.theme.muted());
        let mut next_free = area.x + LABEL_WIDTH;

        for label in &self.chart.layout().months {
            let column = label.x / CELL_STRIDE - first;
            if column < 0 || column >= visible as i32 {
                continue;
            }
            let x = area.x + LABEL_WIDTH + column as u16 * CELL_WIDTH;
            // Skip labels that would overlap the previous one
            if x < next_free || x >= area.right() {
                continue;
            }
            let max_width = (area.right() - x) as usize;
            let (end_x, _) = buf.set_stringn(x, area.y, &label.text, max_width, style);
            next_free = end_x + 1;
        }
    }

    fn render_cells(&self, area: Rect, buf: &mut Buffer, first: i32, visible: usize) {
        let selected = self.chart.selected();

        for cell in &self.chart.layout().cells {
            let column = cell.position.column - first;
            if column < 0 || column >= visible as i32 {
                continue;
            }
            let x = area.x + LABEL_WIDTH + column as u16 * CELL_WIDTH;
            let y = area.y + GRID_TOP + cell.position.row as u16;
            if y >= area.bottom() || x + 2 > area.right() {
                continue;
            }

            let color = cell_color(cell.color);
            if self.cursor == Some(cell.date) {
                let style = Style::default()
                    .fg(self.theme.accent())
                    .bg(color)
                    .add_modifier(Modifier::BOLD);
                buf.set_string(x, y, CURSOR_CELL, style);
            } else if selected == Some(cell.date) {
                let style = Style::default().fg(color).bg(self.theme.selection());
                buf.set_string(x, y, SELECTED_CELL, style);
            } else {
                buf.set_string(x, y, CELL, Style::default().fg(color));
            }
        }
    }
}

impl Widget for HeatmapView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let visible = Self::weeks_for_width(area.width);
        if visible == 0 || area.height == 0 {
            return;
        }
        let first = self.first_column(visible);

        self.render_month_labels(area, buf, first, visible);
        self.render_day_initials(area, buf);
        self.render_cells(area, buf, first, visible);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{HeatmapConfig, Observation};
    use ratatui::style::Color;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2024, 6, 15) // Saturday
    }

    fn chart() -> Heatmap {
        let config = HeatmapConfig::default().data(vec![
            Observation::new(today(), 10),
            Observation::new(date(2024, 6, 14), 5),
        ]);
        Heatmap::new(config, today())
    }

    fn render(chart: &Heatmap, weeks: u16, cursor: Option<NaiveDate>) -> Buffer {
        let area = Rect::new(0, 0, LABEL_WIDTH + weeks * CELL_WIDTH, HEATMAP_HEIGHT);
        let mut buf = Buffer::empty(area);
        let mut view = HeatmapView::new(chart, Theme::Dark);
        if let Some(cursor) = cursor {
            view = view.cursor(cursor);
        }
        view.render(area, &mut buf);
        buf
    }

    #[test]
    fn test_weeks_for_width() {
        assert_eq!(HeatmapView::weeks_for_width(LABEL_WIDTH + 53 * CELL_WIDTH), 53);
        assert_eq!(HeatmapView::weeks_for_width(LABEL_WIDTH + 13 * CELL_WIDTH + 2), 13);
        assert_eq!(HeatmapView::weeks_for_width(1), 0);
    }

    #[test]
    fn test_full_width_renders_today_in_last_column() {
        let chart = chart();
        let buf = render(&chart, 53, None);

        // Column 52, Saturday row (6) under Sunday start
        let x = LABEL_WIDTH + 52 * CELL_WIDTH;
        let cell = buf.cell((x, 1 + 6)).unwrap();
        assert_eq!(cell.symbol(), "█");
        assert_eq!(cell.fg, Color::Rgb(0x21, 0x83, 0x80));
    }

    #[test]
    fn test_first_day_in_first_column() {
        let chart = chart();
        let buf = render(&chart, 53, None);

        // 2023-06-15 is a Thursday (row 4)
        let cell = buf.cell((LABEL_WIDTH, 1 + 4)).unwrap();
        assert_eq!(cell.symbol(), "█");
        assert_eq!(cell.fg, Color::Rgb(0xD8, 0xE6, 0xE7));
        // Before the first day the column is empty
        assert_eq!(buf.cell((LABEL_WIDTH, 1)).unwrap().symbol(), " ");
    }

    #[test]
    fn test_narrow_width_shows_recent_weeks() {
        let chart = chart();
        let buf = render(&chart, 13, None);

        let x = LABEL_WIDTH + 12 * CELL_WIDTH;
        assert_eq!(buf.cell((x, 7)).unwrap().fg, Color::Rgb(0x21, 0x83, 0x80));
    }

    #[test]
    fn test_cursor_marker() {
        let chart = chart();
        let buf = render(&chart, 53, Some(today()));

        let x = LABEL_WIDTH + 52 * CELL_WIDTH;
        let cell = buf.cell((x, 7)).unwrap();
        assert_eq!(cell.symbol(), "[");
        assert_eq!(cell.fg, Color::Cyan);
        assert_eq!(cell.bg, Color::Rgb(0x21, 0x83, 0x80));
        assert!(cell.modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_cursor_scrolls_into_view() {
        let chart = chart();
        let first_day = date(2023, 6, 15);
        let buf = render(&chart, 13, Some(first_day));

        // Cursor column 0 becomes the leftmost visible column
        assert_eq!(buf.cell((LABEL_WIDTH, 1 + 4)).unwrap().symbol(), "[");
    }

    #[test]
    fn test_selected_marker() {
        let mut chart = chart().on_click(|_| {});
        chart.click(date(2024, 6, 14));
        let buf = render(&chart, 53, None);

        // Friday row 5, last column
        let x = LABEL_WIDTH + 52 * CELL_WIDTH;
        let cell = buf.cell((x, 1 + 5)).unwrap();
        assert_eq!(cell.symbol(), "▓");
        assert_eq!(cell.bg, Color::White);
    }

    #[test]
    fn test_day_initials() {
        let chart = chart();
        let buf = render(&chart, 53, None);

        assert_eq!(buf.cell((0, 1 + 1)).unwrap().symbol(), "M");
        assert_eq!(buf.cell((0, 1 + 3)).unwrap().symbol(), "W");
        assert_eq!(buf.cell((0, 1 + 5)).unwrap().symbol(), "F");
        assert_eq!(buf.cell((0, 1)).unwrap().symbol(), " ");
    }

    #[test]
    fn test_month_labels() {
        let chart = chart();
        let buf = render(&chart, 53, None);

        // First label (Jun) at the grid's left edge
        assert_eq!(buf.cell((LABEL_WIDTH, 0)).unwrap().symbol(), "J");
        assert_eq!(buf.cell((LABEL_WIDTH + 1, 0)).unwrap().symbol(), "u");
        assert_eq!(buf.cell((LABEL_WIDTH + 2, 0)).unwrap().symbol(), "n");
        // Jul 1 falls in week 2
        let x = LABEL_WIDTH + 2 * CELL_WIDTH;
        assert_eq!(buf.cell((x, 0)).unwrap().symbol(), "J");
        assert_eq!(buf.cell((x + 1, 0)).unwrap().symbol(), "u");
        assert_eq!(buf.cell((x + 2, 0)).unwrap().symbol(), "l");
    }
}
