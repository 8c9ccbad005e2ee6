use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::utils::dates;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString, EnumIter)]
pub enum RangeKey {
    #[strum(serialize = "today")]
    #[serde(rename = "today")]
    Today,
    #[strum(serialize = "7days")]
    #[serde(rename = "7days")]
    Last7Days,
    #[default]
    #[strum(serialize = "30days")]
    #[serde(rename = "30days")]
    Last30Days,
    #[strum(serialize = "month")]
    #[serde(rename = "month")]
    ThisMonth,
    #[strum(serialize = "custom")]
    #[serde(rename = "custom")]
    Custom,
}

impl RangeKey {
    pub fn label(&self) -> &'static str {
        match self {
            RangeKey::Today => "Today",
            RangeKey::Last7Days => "Last 7 days",
            RangeKey::Last30Days => "Last 30 days",
            RangeKey::ThisMonth => "This month",
            RangeKey::Custom => "Custom",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRangeSelection {
    pub key: RangeKey,
    pub custom_from: Option<NaiveDate>,
    pub custom_to: Option<NaiveDate>,
}

impl DateRangeSelection {
    pub fn quick(key: RangeKey) -> Self {
        Self {
            key,
            custom_from: None,
            custom_to: None,
        }
    }

    pub fn custom(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self {
            key: RangeKey::Custom,
            custom_from: from,
            custom_to: to,
        }
    }

    /// Custom range from raw date inputs; blank or invalid inputs count as unset.
    pub fn custom_from_inputs(from: &str, to: &str) -> Self {
        Self::custom(dates::parse_iso_opt(from), dates::parse_iso_opt(to))
    }
}

/// Closed interval `[from, to]`. Empty when `from > to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateInterval {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateInterval {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }

    pub fn is_empty(&self) -> bool {
        self.from > self.to
    }
}

/// Turns a range selection into concrete bounds relative to `today`.
///
/// `None` means "no bound": only a custom range with a missing side yields
/// it, and callers then skip interval filtering altogether. A custom range
/// whose start is after its end is returned as-is and simply matches nothing.
pub fn resolve(selection: &DateRangeSelection, today: NaiveDate) -> Option<DateInterval> {
    let from = match selection.key {
        RangeKey::Today => today,
        RangeKey::Last7Days => today - Duration::days(6),
        RangeKey::Last30Days => today - Duration::days(29),
        RangeKey::ThisMonth => dates::first_of_month(today),
        RangeKey::Custom => {
            let (from, to) = (selection.custom_from?, selection.custom_to?);
            return Some(DateInterval { from, to });
        }
    };

    Some(DateInterval { from, to: today })
}
