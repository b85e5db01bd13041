//! Contiguous one-year window of calendar days

use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;

use crate::types::{HeatmapError, Result};

/// Days from `start` to `end`, both inclusive, ascending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end < start {
            return Err(HeatmapError::Config(format!(
                "range end {} is before start {}",
                end, start
            )));
        }
        Ok(Self { start, end })
    }

    /// The year ending today: `today - 1 year ..= today`.
    /// Feb 29 clamps to Feb 28.
    pub fn year_ending(today: NaiveDate) -> Self {
        let start = today
            .checked_sub_months(Months::new(12))
            .unwrap_or(NaiveDate::MIN);
        Self { start, end: today }
    }

    /// The year starting at `start`: `start ..= start + 1 year`
    pub fn year_from(start: NaiveDate) -> Self {
        let end = start
            .checked_add_months(Months::new(12))
            .unwrap_or(NaiveDate::MAX);
        Self { start, end }
    }

    /// Configured start date wins; otherwise the year ending `today`
    pub fn resolve(start_date: Option<NaiveDate>, today: NaiveDate) -> Self {
        match start_date {
            Some(start) => Self::year_from(start),
            None => Self::year_ending(today),
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn len(&self) -> usize {
        (self.end - self.start).num_days() as usize + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Position of `date` within the range
    pub fn index_of(&self, date: NaiveDate) -> Option<usize> {
        self.contains(date)
            .then(|| (date - self.start).num_days() as usize)
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }

    /// First day of every month from the start date's month through `end`
    pub fn months(&self) -> Vec<NaiveDate> {
        let mut months = Vec::with_capacity(13);
        let mut current = self.start.with_day(1);
        while let Some(month) = current {
            if month > self.end {
                break;
            }
            months.push(month);
            current = month.checked_add_months(Months::new(1));
        }
        months
    }
}
