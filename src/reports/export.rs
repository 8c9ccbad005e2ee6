use chrono::NaiveDate;
use serde::Serialize;

use crate::error::PortalResult;
use crate::model::{AttendanceRecord, LeaveRecord};
use crate::reports::query::ReportTab;
use crate::utils::{csv_export, dates};

#[derive(Debug, Serialize)]
pub struct AttendanceCsvRow<'a> {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Employee")]
    pub employee: &'a str,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Punch In")]
    pub punch_in: String,
    #[serde(rename = "Punch Out")]
    pub punch_out: String,
    #[serde(rename = "Notes")]
    pub notes: &'a str,
}

impl<'a> From<&'a AttendanceRecord> for AttendanceCsvRow<'a> {
    fn from(r: &'a AttendanceRecord) -> Self {
        Self {
            date: dates::iso(r.date),
            employee: &r.employee_name,
            status: r.status.to_string(),
            punch_in: r.punch_in.map(dates::hhmm).unwrap_or_default(),
            punch_out: r.punch_out.map(dates::hhmm).unwrap_or_default(),
            notes: &r.notes,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LeaveCsvRow<'a> {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Employee")]
    pub employee: &'a str,
    #[serde(rename = "Type")]
    pub leave_type: String,
    #[serde(rename = "From")]
    pub from: String,
    #[serde(rename = "To")]
    pub to: String,
    #[serde(rename = "Days")]
    pub days: u32,
    #[serde(rename = "Reason")]
    pub reason: &'a str,
    #[serde(rename = "Status")]
    pub status: String,
}

impl<'a> From<&'a LeaveRecord> for LeaveCsvRow<'a> {
    fn from(r: &'a LeaveRecord) -> Self {
        Self {
            date: dates::iso(r.applied_at),
            employee: &r.employee_name,
            leave_type: r.leave_type.to_string(),
            from: dates::iso(r.from),
            to: dates::iso(r.to),
            days: r.days,
            reason: &r.reason,
            status: r.status.to_string(),
        }
    }
}

pub fn attendance_csv(records: &[AttendanceRecord]) -> PortalResult<String> {
    let rows: Vec<AttendanceCsvRow> = records.iter().map(AttendanceCsvRow::from).collect();
    csv_export::to_csv(&rows)
}

pub fn leave_csv(records: &[LeaveRecord]) -> PortalResult<String> {
    let rows: Vec<LeaveCsvRow> = records.iter().map(LeaveCsvRow::from).collect();
    csv_export::to_csv(&rows)
}

/// `attendance_2025-09-18.csv`
pub fn export_filename(tab: ReportTab, today: NaiveDate) -> String {
    format!("{}_{}.csv", tab, dates::iso(today))
}

/* =========================
Print view
========================= */

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn html_table(headers: [&str; 3], rows: impl Iterator<Item = [String; 3]>) -> String {
    let head: String = headers
        .iter()
        .map(|h| format!("<th>{}</th>", escape_html(h)))
        .collect();
    let body: String = rows
        .map(|cells| {
            let tds: String = cells
                .iter()
                .map(|c| format!("<td>{}</td>", escape_html(c)))
                .collect();
            format!("<tr>{}</tr>", tds)
        })
        .collect();

    format!("<table><thead><tr>{}</tr></thead><tbody>{}</tbody></table>", head, body)
}

pub fn attendance_table_html(records: &[AttendanceRecord]) -> String {
    html_table(
        ["Date", "Employee", "Status"],
        records
            .iter()
            .map(|r| [dates::iso(r.date), r.employee_name.clone(), r.status.to_string()]),
    )
}

pub fn leave_table_html(records: &[LeaveRecord]) -> String {
    html_table(
        ["From", "Employee", "Type"],
        records
            .iter()
            .map(|r| [dates::iso(r.from), r.employee_name.clone(), r.leave_type.to_string()]),
    )
}

/// Standalone printable page. `body_html` is inserted as-is.
pub fn print_view(title: &str, body_html: &str) -> String {
    format!(
        "<html><head><title>{}</title></head><body>{}</body></html>",
        escape_html(title),
        body_html
    )
}

pub fn printable_report(tab: ReportTab, attendance: &[AttendanceRecord], leaves: &[LeaveRecord]) -> String {
    let table = match tab {
        ReportTab::Attendance => attendance_table_html(attendance),
        ReportTab::Leaves => leave_table_html(leaves),
    };
    print_view(&format!("{} Report", tab), &table)
}
