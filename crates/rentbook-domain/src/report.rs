//! Reporting windows for monthly aggregation.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Inclusive date range used to select records for a monthly report.
///
/// The window for a month deliberately starts on the *second* calendar day
/// of that month and ends on the first day of the following month. Report
/// totals depend on this boundary; do not normalize it to calendar months.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ReportWindow {
    /// Builds the window for a zero-based month index of `year`.
    pub fn for_month(year: i32, month0: u32) -> Result<Self, ReportWindowError> {
        if month0 > 11 {
            return Err(ReportWindowError::InvalidMonth(month0));
        }
        let start = NaiveDate::from_ymd_opt(year, month0 + 1, 2)
            .ok_or(ReportWindowError::InvalidMonth(month0))?;
        let (next_year, next_month) = if month0 == 11 {
            (year + 1, 1)
        } else {
            (year, month0 + 2)
        };
        let end = NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .ok_or(ReportWindowError::InvalidMonth(month0))?;
        Ok(Self { start, end })
    }

    /// Inclusive at both bounds, as used for record filtering.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// English name of the month the window reports on.
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[self.start.month0() as usize]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
/// Errors that can occur when constructing [`ReportWindow`] values.
pub enum ReportWindowError {
    #[error("month index {0} is out of range (expected 0-11)")]
    InvalidMonth(u32),
}
