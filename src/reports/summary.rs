use serde::Serialize;

use crate::model::{AttendanceRecord, AttendanceStatus, LeaveRecord, LeaveStatus};

/// Headline counters above the report table. Computed over the whole data
/// set, not the filtered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "tab", rename_all = "lowercase")]
pub enum SummaryCounts {
    Attendance { present: usize, absent: usize },
    Leaves { approved: usize, pending: usize },
}

pub fn attendance_summary(records: &[AttendanceRecord]) -> SummaryCounts {
    let count = |status: AttendanceStatus| records.iter().filter(|r| r.status == status).count();
    SummaryCounts::Attendance {
        present: count(AttendanceStatus::Present),
        absent: count(AttendanceStatus::Absent),
    }
}

pub fn leave_summary(records: &[LeaveRecord]) -> SummaryCounts {
    let count = |status: LeaveStatus| records.iter().filter(|r| r.status == status).count();
    SummaryCounts::Leaves {
        approved: count(LeaveStatus::Approved),
        pending: count(LeaveStatus::Pending),
    }
}
