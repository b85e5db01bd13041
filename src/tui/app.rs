//! Preview application state and event loop

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use chrono::{Days, NaiveDate};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::Widget,
    DefaultTerminal, Frame,
};

use super::theme::Theme;
use super::widgets::{
    heatmap::{HeatmapView, HEATMAP_HEIGHT},
    legend::LegendLine,
};
use crate::services::Heatmap;
use crate::types::DayCount;

const HINT: &str = "←↓↑→/hjkl move · enter select · q quit";

/// Preview application
pub struct App {
    chart: Heatmap,
    cursor: NaiveDate,
    theme: Theme,
    should_quit: bool,
    status: Option<String>,
    clicks: Rc<RefCell<Vec<DayCount>>>,
}

impl App {
    /// Wrap a chart; clicks are collected and the cursor starts on the
    /// last day of the range
    pub fn new(chart: Heatmap, theme: Theme) -> Self {
        let clicks = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&clicks);
        let mut chart = chart.on_click(move |day| sink.borrow_mut().push(day));

        let cursor = chart.layout().range.end();
        chart.hover(cursor);

        Self {
            chart,
            cursor,
            theme,
            should_quit: false,
            status: None,
            clicks,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn cursor(&self) -> NaiveDate {
        self.cursor
    }

    pub fn chart(&self) -> &Heatmap {
        &self.chart
    }

    /// Days selected so far, in click order
    pub fn clicks(&self) -> Vec<DayCount> {
        self.clicks.borrow().clone()
    }

    /// Move the cursor by `days`; stays put at the range edges
    fn move_cursor(&mut self, days: i64) {
        let target = if days >= 0 {
            self.cursor.checked_add_days(Days::new(days as u64))
        } else {
            self.cursor.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        if let Some(target) = target.filter(|d| self.chart.layout().range.contains(*d)) {
            self.cursor = target;
            self.chart.hover(target);
        }
    }

    fn select(&mut self) {
        if let Some(day) = self.chart.click(self.cursor) {
            self.status = Some(format!("Selected {} ({})", day.date, day.count));
        }
    }

    /// Handle keyboard events
    pub fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            if key.kind == KeyEventKind::Press {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                        self.should_quit = true;
                    }
                    KeyCode::Left | KeyCode::Char('h') => self.move_cursor(-7),
                    KeyCode::Right | KeyCode::Char('l') => self.move_cursor(7),
                    KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
                    KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
                    KeyCode::Enter | KeyCode::Char(' ') => self.select(),
                    _ => {}
                }
            }
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        frame.render_widget(self, frame.area());
    }
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [_, grid_area, _, legend_area, tooltip_area, status_area, _, hint_area] =
            Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(HEATMAP_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .areas(area);

        HeatmapView::new(&self.chart, self.theme)
            .cursor(self.cursor)
            .render(grid_area, buf);

        if let Some(legend) = &self.chart.layout().legend {
            LegendLine::new(legend, self.theme).render(legend_area, buf);
        }

        if let Some(tooltip) = self.chart.hovered() {
            buf.set_stringn(
                tooltip_area.x,
                tooltip_area.y,
                &tooltip.text,
                tooltip_area.width as usize,
                Style::default().fg(self.theme.text()),
            );
        }

        if let Some(status) = &self.status {
            buf.set_stringn(
                status_area.x,
                status_area.y,
                status,
                status_area.width as usize,
                Style::default().fg(self.theme.accent()),
            );
        }

        buf.set_stringn(
            hint_area.x,
            hint_area.y,
            HINT,
            hint_area.width as usize,
            Style::default().fg(self.theme.muted()),
        );
    }
}

/// Run the preview; returns the days selected before quitting
pub fn run(chart: Heatmap) -> anyhow::Result<Vec<DayCount>> {
    let theme = Theme::detect();
    let mut app = App::new(chart, theme);
    let mut terminal = ratatui::init();
    let result = run_app(&mut terminal, &mut app);
    ratatui::restore();
    result.map(|()| app.clicks())
}

fn run_app(terminal: &mut DefaultTerminal, app: &mut App) -> anyhow::Result<()> {
    loop {
        terminal.draw(|frame| app.draw(frame))?;

        if app.should_quit() {
            break;
        }

        if event::poll(Duration::from_millis(250))? {
            app.handle_event(event::read()?);
        }
    }

    Ok(())
}
