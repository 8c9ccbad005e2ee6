use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::utils::dates;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter)]
pub enum AttendanceStatus {
    #[strum(serialize = "Present")]
    #[serde(rename = "Present")]
    Present,
    #[strum(serialize = "Late (¼ Day)")]
    #[serde(rename = "Late (¼ Day)")]
    Late,
    #[strum(serialize = "Half Day")]
    #[serde(rename = "Half Day")]
    HalfDay,
    #[strum(serialize = "Absent")]
    #[serde(rename = "Absent")]
    Absent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: String,
    pub date: NaiveDate,
    pub employee_id: String,
    pub employee_name: String,
    pub status: AttendanceStatus,
    #[serde(with = "dates::hhmm_opt", default)]
    pub punch_in: Option<NaiveTime>,
    #[serde(with = "dates::hhmm_opt", default)]
    pub punch_out: Option<NaiveTime>,
    #[serde(default)]
    pub notes: String,
}

impl AttendanceRecord {
    /// `"{employee_id}-{YYYY-MM-DD}"`, one record per employee per day.
    pub fn record_id(employee_id: &str, date: NaiveDate) -> String {
        format!("{}-{}", employee_id, dates::iso(date))
    }
}
