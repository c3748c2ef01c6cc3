//! Day-month-year date handling shared by every record type.

use chrono::{Local, NaiveDate};

/// Contractual display and storage format for all record dates.
pub const DAY_MONTH_YEAR: &str = "%d-%m-%Y";

/// Formats a date as `dd-mm-yyyy`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DAY_MONTH_YEAR).to_string()
}

/// Parses a `dd-mm-yyyy` string into a date.
pub fn parse_date(raw: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(raw.trim(), DAY_MONTH_YEAR)
}

/// Returns today's date in the local timezone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Serde adapter storing dates as `dd-mm-yyyy` strings.
pub mod day_month_year {
    use chrono::NaiveDate;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    use super::{format_date, parse_date};

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_date(*date))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_date(&raw).map_err(D::Error::custom)
    }
}
