//! Conversion from query dates to the schedule file's date format

use crate::error::{LoaderError, Result};
use chrono::NaiveDate;

/// Date format used by the schedule file, e.g. "Tue, Mar 4, 2025"
pub const SOURCE_DATE_FORMAT: &str = "%a, %b %-d, %Y";

/// Parse a `YYYY-M-D` date; zero padding is optional
pub fn parse_input_date(input: &str) -> Result<NaiveDate> {
    let parts: Vec<&str> = input.trim().split('-').collect();
    let [year, month, day] = parts.as_slice() else {
        return Err(LoaderError::invalid_date(input, "expected YYYY-M-D"));
    };

    let year: i32 = year
        .parse()
        .map_err(|_| LoaderError::invalid_date(input, format!("bad year {year:?}")))?;
    let month: u32 = month
        .parse()
        .map_err(|_| LoaderError::invalid_date(input, format!("bad month {month:?}")))?;
    let day: u32 =
        day.parse().map_err(|_| LoaderError::invalid_date(input, format!("bad day {day:?}")))?;

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| LoaderError::invalid_date(input, "no such calendar date"))
}

/// Render a date the way the schedule file stores it
pub fn format_source_date(date: NaiveDate) -> String {
    date.format(SOURCE_DATE_FORMAT).to_string()
}

/// Convert a `YYYY-M-D` query date into the stored representation
pub fn to_source_date(input: &str) -> Result<String> {
    parse_input_date(input).map(format_source_date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unpadded_input() {
        assert_eq!(to_source_date("2025-3-4").unwrap(), "Tue, Mar 4, 2025");
    }

    #[test]
    fn test_padded_input_gives_unpadded_day() {
        assert_eq!(to_source_date("2025-03-04").unwrap(), "Tue, Mar 4, 2025");
        assert_eq!(to_source_date("2025-12-25").unwrap(), "Thu, Dec 25, 2025");
    }

    #[test]
    fn test_surrounding_whitespace_ignored() {
        assert_eq!(to_source_date(" 2025-3-5 ").unwrap(), "Wed, Mar 5, 2025");
    }

    #[test]
    fn test_invalid_dates_rejected() {
        let inputs =
            ["", "2025/3/4", "2025-3", "2025-13-1", "2025-2-30", "twenty-five-3", "2025-3-4-1"];
        for input in inputs {
            assert!(
                matches!(to_source_date(input), Err(LoaderError::InvalidDate { .. })),
                "{input:?} should be rejected"
            );
        }
    }
}
