use chrono::{Datelike, Months, NaiveDate, NaiveTime};

use crate::error::{PortalError, PortalResult};

pub const ISO_FORMAT: &str = "%Y-%m-%d";

/// `YYYY-MM-DD`, zero padded.
pub fn iso(date: NaiveDate) -> String {
    date.format(ISO_FORMAT).to_string()
}

/// `Sep 01, 2025`
pub fn nice(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

pub fn parse_iso(value: &str) -> PortalResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), ISO_FORMAT)
        .map_err(|_| PortalError::InvalidDate(value.to_string()))
}

/// Blank input means "not set"; so does anything unparseable.
pub fn parse_iso_opt(value: &str) -> Option<NaiveDate> {
    if value.trim().is_empty() {
        return None;
    }
    parse_iso(value).ok()
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// `month` is 1-based.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return 0;
    };
    match first.checked_add_months(Months::new(1)) {
        Some(next) => next.signed_duration_since(first).num_days() as u32,
        // only reachable at the very end of chrono's range
        None => 31,
    }
}

/// Weekday of the 1st, Sunday = 0. `month` is 1-based.
pub fn first_weekday(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.weekday().num_days_from_sunday())
        .unwrap_or(0)
}

/// Inclusive day count; zero or negative when `to` precedes `from`.
pub fn days_inclusive(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days() + 1
}

pub fn hhmm(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// `02:05 PM`, the label chat messages carry.
pub fn clock_label(time: NaiveTime) -> String {
    time.format("%I:%M %p").to_string()
}

/// Serde adapter for optional `HH:MM` times (seconds accepted on input).
pub mod hhmm_opt {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(t) => serializer.serialize_str(&super::hhmm(*t)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => NaiveTime::parse_from_str(s, "%H:%M")
                .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}
