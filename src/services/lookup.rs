//! Count lookup over the caller's observations

use chrono::NaiveDate;

use crate::types::Observation;

/// Count of the first observation on `date`, or 0.
/// Linear scan: the list holds roughly one entry per day of a year.
pub fn count_for_date(data: &[Observation], date: NaiveDate) -> u64 {
    data.iter()
        .find(|o| o.date == date)
        .map(|o| o.count)
        .unwrap_or(0)
}

/// Largest count in the data (0 for no data)
pub fn max_count(data: &[Observation]) -> u64 {
    data.iter().map(|o| o.count).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_count_for_date_match() {
        let data = vec![
            Observation::new(date(2024, 1, 1), 4),
            Observation::new(date(2024, 1, 2), 9),
        ];
        assert_eq!(count_for_date(&data, date(2024, 1, 2)), 9);
    }

    #[test]
    fn test_count_for_date_missing_is_zero() {
        let data = vec![Observation::new(date(2024, 1, 1), 4)];
        assert_eq!(count_for_date(&data, date(2024, 1, 3)), 0);
        assert_eq!(count_for_date(&[], date(2024, 1, 3)), 0);
    }

    #[test]
    fn test_count_for_date_first_match_wins() {
        let data = vec![
            Observation::new(date(2024, 1, 1), 4),
            Observation::new(date(2024, 1, 1), 100),
        ];
        assert_eq!(count_for_date(&data, date(2024, 1, 1)), 4);
    }

    #[test]
    fn test_max_count() {
        let data = vec![
            Observation::new(date(2024, 1, 1), 4),
            Observation::new(date(2024, 1, 2), 11),
            Observation::new(date(2024, 1, 3), 0),
        ];
        assert_eq!(max_count(&data), 11);
        assert_eq!(max_count(&[]), 0);
    }
}
