//! Age normalization
//!
//! Converts a birth date and a measurement date into a fractional age in
//! months, optionally corrected for prematurity.

use chrono::{Datelike, NaiveDate};

/// Average days per month, used for every fractional month conversion
pub const DAYS_PER_MONTH: f64 = 30.44;

/// Age in months at `measure_date`
///
/// Whole months come from calendar year/month subtraction, and the day
/// difference adds a fraction of `DAYS_PER_MONTH`. With `use_correction`
/// and a due date later than birth, the days born early are subtracted.
/// The result is never negative.
#[must_use]
pub fn age_in_months(
    birth_date: NaiveDate,
    measure_date: NaiveDate,
    due_date: Option<NaiveDate>,
    use_correction: bool,
) -> f64 {
    let whole_months = (measure_date.year() - birth_date.year()) * 12
        + (measure_date.month() as i32 - birth_date.month() as i32);
    let day_diff = measure_date.day() as i32 - birth_date.day() as i32;
    let mut months = f64::from(whole_months) + f64::from(day_diff) / DAYS_PER_MONTH;

    let days_early = due_date
        .filter(|_| use_correction)
        .map(|due| premature_days(birth_date, due))
        .filter(|&days| days > 0);
    if let Some(days) = days_early {
        months -= days as f64 / DAYS_PER_MONTH;
    }

    months.max(0.0)
}

/// Days between birth and the expected due date; positive when born early
#[must_use]
pub fn premature_days(birth_date: NaiveDate, due_date: NaiveDate) -> i64 {
    (due_date - birth_date).num_days()
}

/// Age rounded to one decimal, as plotted on growth charts
#[must_use]
pub fn chart_age(months: f64) -> f64 {
    (months * 10.0).round() / 10.0
}
