use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter)]
pub enum LeaveType {
    Paid,
    Sick,
    Casual,
    Emergency,
    Unpaid,
}

impl LeaveType {
    /// Label used by the application form dropdown.
    pub fn label(&self) -> &'static str {
        match self {
            LeaveType::Paid => "Paid Leave",
            LeaveType::Sick => "Sick Leave",
            LeaveType::Casual => "Casual Leave",
            LeaveType::Emergency => "Emergency Leave",
            LeaveType::Unpaid => "Unpaid Leave",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRecord {
    pub id: u64,
    pub employee_name: String,
    #[serde(rename = "type")]
    pub leave_type: LeaveType,
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub days: u32,
    pub reason: String,
    pub status: LeaveStatus,
    pub applied_at: NaiveDate,
}
