//! Date to grid position mapping (week columns, weekday rows)

use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;

use crate::types::WeekStart;

/// Side of a day-cell in px
pub const SQUARE_LENGTH: i32 = 12;
/// Gap between day-cells in px
pub const SQUARE_PADDING: i32 = 3;
/// Room above the grid reserved for month labels
pub const MONTH_LABEL_PADDING: i32 = 10;
/// Distance between neighbouring cell origins
pub const CELL_STRIDE: i32 = SQUARE_LENGTH + SQUARE_PADDING;

/// Week column (0 = week of the first date) and weekday row (0-6)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GridPosition {
    pub column: i32,
    pub row: u32,
}

impl GridPosition {
    /// Pixel origin of the cell
    pub fn pixel(self) -> (i32, i32) {
        (
            self.column * CELL_STRIDE,
            MONTH_LABEL_PADDING + self.row as i32 * CELL_STRIDE,
        )
    }
}

/// Weekday index with Sunday = 0
pub fn weekday_index(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}

/// Remap a Sunday-based weekday index to a grid row.
/// Monday-start moves Sunday to 6 and shifts the rest down by one.
pub fn format_weekday(weekday: u32, week_start: WeekStart) -> u32 {
    match week_start {
        WeekStart::Sunday => weekday,
        WeekStart::Monday if weekday == 0 => 6,
        WeekStart::Monday => weekday - 1,
    }
}

/// (week-year, week) of a date. Monday-start weeks are ISO weeks;
/// Sunday-start weeks take the ISO week of the following day so that a
/// Sunday opens a new week.
pub fn week_of_year(date: NaiveDate, week_start: WeekStart) -> (i32, u32) {
    let anchor = match week_start {
        WeekStart::Monday => date,
        WeekStart::Sunday => date.checked_add_days(Days::new(1)).unwrap_or(date),
    };
    let iso = anchor.iso_week();
    (iso.year(), iso.week())
}

/// Number of ISO weeks in a week-year (52 or 53)
pub fn weeks_in_year(week_year: i32) -> u32 {
    // Dec 28 always falls in the last ISO week of its year
    NaiveDate::from_ymd_opt(week_year, 12, 28)
        .map(|d| d.iso_week().week())
        .unwrap_or(52)
}

/// Week column of `date` relative to `first`.
/// Uses week-years so late December / early January never wraps.
pub fn week_column(date: NaiveDate, first: NaiveDate, week_start: WeekStart) -> i32 {
    let (year, week) = week_of_year(date, week_start);
    let (first_year, first_week) = week_of_year(first, week_start);

    let mut column = week as i32 - first_week as i32;
    if year >= first_year {
        for y in first_year..year {
            column += weeks_in_year(y) as i32;
        }
    } else {
        for y in year..first_year {
            column -= weeks_in_year(y) as i32;
        }
    }
    column
}

/// Grid position of `date` in a chart whose first day is `first`
pub fn grid_position(date: NaiveDate, first: NaiveDate, week_start: WeekStart) -> GridPosition {
    GridPosition {
        column: week_column(date, first, week_start),
        row: format_weekday(weekday_index(date), week_start),
    }
}
