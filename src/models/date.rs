//! Parsing of dates supplied by hosts and sibling trackers

use chrono::NaiveDate;

use crate::error::{GrowthError, Result};

/// Formats accepted for measurement dates, tried in order
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%d.%m.%Y"];

/// Parse a calendar date, ignoring a trailing time part (`2026-03-01T09:30:00Z`)
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    let trimmed = s.trim();
    let day = trimmed.split_once('T').map_or(trimmed, |(day, _)| day);

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(day, format).ok())
        .ok_or_else(|| GrowthError::InvalidDate(s.to_string()))
}
