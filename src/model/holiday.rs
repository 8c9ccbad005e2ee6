use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString, EnumIter)]
pub enum HolidayType {
    #[default]
    Festival,
    Company,
    Optional,
}

impl HolidayType {
    pub fn label(&self) -> &'static str {
        match self {
            HolidayType::Festival => "Festival Holiday",
            HolidayType::Company => "Company Holiday",
            HolidayType::Optional => "Optional Holiday",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayRecord {
    pub id: i64,
    pub name: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub holiday_type: HolidayType,
    #[serde(default)]
    pub note: String,
}
