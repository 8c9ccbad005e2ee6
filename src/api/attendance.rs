use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::error::{PortalError, PortalResult};
use crate::model::{AttendanceRecord, AttendanceStatus, Employee};
use crate::reports::calendar::{MonthCursor, MonthView};

const LATE_FROM_HOUR: u32 = 10;
const HALF_DAY_FROM_HOUR: u32 = 12;

/// Status earned by punching in at `time`.
pub fn classify_punch_in(time: NaiveTime) -> AttendanceStatus {
    match time.hour() {
        h if h >= HALF_DAY_FROM_HOUR => AttendanceStatus::HalfDay,
        h if h >= LATE_FROM_HOUR => AttendanceStatus::Late,
        _ => AttendanceStatus::Present,
    }
}

fn trim_time(time: NaiveTime) -> NaiveTime {
    time.with_nanosecond(0).unwrap_or(time)
}

/// Attendance history kept by the attendance screen.
#[derive(Debug, Clone, Default)]
pub struct AttendanceBook {
    records: Vec<AttendanceRecord>,
}

impl AttendanceBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<AttendanceRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[AttendanceRecord] {
        &self.records
    }

    pub fn find(&self, employee_id: &str, date: NaiveDate) -> Option<&AttendanceRecord> {
        self.records
            .iter()
            .find(|r| r.employee_id == employee_id && r.date == date)
    }

    fn position(&self, employee_id: &str, date: NaiveDate) -> Option<usize> {
        self.records
            .iter()
            .position(|r| r.employee_id == employee_id && r.date == date)
    }

    /// `None` reads as "Not Marked".
    pub fn status_on(&self, employee_id: &str, date: NaiveDate) -> Option<AttendanceStatus> {
        self.find(employee_id, date).map(|r| r.status)
    }

    pub fn punch_in(&mut self, employee: &Employee, now: NaiveDateTime) -> PortalResult<&AttendanceRecord> {
        let date = now.date();

        if self.position(&employee.id, date).is_some() {
            tracing::warn!(employee_id = %employee.id, %date, "Duplicate punch-in rejected");
            return Err(PortalError::AlreadyPunchedIn(date));
        }

        let time = trim_time(now.time());
        let status = classify_punch_in(time);

        self.records.push(AttendanceRecord {
            id: AttendanceRecord::record_id(&employee.id, date),
            date,
            employee_id: employee.id.clone(),
            employee_name: employee.name.clone(),
            status,
            punch_in: Some(time),
            punch_out: None,
            notes: String::new(),
        });

        tracing::info!(employee_id = %employee.id, %date, %status, "Punch in marked");

        let idx = self.records.len() - 1;
        Ok(&self.records[idx])
    }

    pub fn punch_out(&mut self, employee_id: &str, now: NaiveDateTime) -> PortalResult<&AttendanceRecord> {
        let date = now.date();

        let idx = self
            .position(employee_id, date)
            .ok_or(PortalError::NotPunchedIn(date))?;

        let record = &mut self.records[idx];
        if record.punch_in.is_none() {
            return Err(PortalError::NotPunchedIn(date));
        }
        if record.punch_out.is_some() {
            tracing::warn!(employee_id, %date, "Duplicate punch-out rejected");
            return Err(PortalError::AlreadyPunchedOut(date));
        }

        record.punch_out = Some(trim_time(now.time()));
        tracing::info!(employee_id, %date, "Punch out marked");

        Ok(&self.records[idx])
    }

    pub fn by_date(&self, employee_id: &str) -> BTreeMap<NaiveDate, Vec<AttendanceRecord>> {
        let mut map: BTreeMap<NaiveDate, Vec<AttendanceRecord>> = BTreeMap::new();
        for r in self.records.iter().filter(|r| r.employee_id == employee_id) {
            map.entry(r.date).or_default().push(r.clone());
        }
        map
    }

    /// Calendar for one employee, each day carrying that day's record.
    pub fn month_view(&self, employee_id: &str, cursor: MonthCursor, today: NaiveDate) -> MonthView<AttendanceRecord> {
        MonthView::build(cursor, today, &self.by_date(employee_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn aman() -> Employee {
        Employee::new("u1", "Aman Verma")
    }

    #[test]
    fn punch_in_hour_decides_status() {
        let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
        assert_eq!(classify_punch_in(t(9, 59)), AttendanceStatus::Present);
        assert_eq!(classify_punch_in(t(10, 0)), AttendanceStatus::Late);
        assert_eq!(classify_punch_in(t(11, 59)), AttendanceStatus::Late);
        assert_eq!(classify_punch_in(t(12, 0)), AttendanceStatus::HalfDay);
    }

    #[test]
    fn punch_in_then_out() {
        let mut book = AttendanceBook::new();

        let rec = book.punch_in(&aman(), at(2025, 9, 18, 10, 20)).unwrap();
        assert_eq!(rec.status, AttendanceStatus::Late);
        assert_eq!(rec.id, "u1-2025-09-18");
        assert!(rec.punch_out.is_none());

        let rec = book.punch_out("u1", at(2025, 9, 18, 18, 5)).unwrap();
        assert_eq!(rec.punch_out, NaiveTime::from_hms_opt(18, 5, 0));
        assert_eq!(book.records().len(), 1);
    }

    #[test]
    fn one_punch_each_way_per_day() {
        let mut book = AttendanceBook::new();
        let day = NaiveDate::from_ymd_opt(2025, 9, 18).unwrap();

        assert!(matches!(
            book.punch_out("u1", at(2025, 9, 18, 18, 0)),
            Err(PortalError::NotPunchedIn(d)) if d == day
        ));

        book.punch_in(&aman(), at(2025, 9, 18, 9, 30)).unwrap();
        assert!(matches!(
            book.punch_in(&aman(), at(2025, 9, 18, 9, 45)),
            Err(PortalError::AlreadyPunchedIn(_))
        ));

        book.punch_out("u1", at(2025, 9, 18, 18, 0)).unwrap();
        assert!(matches!(
            book.punch_out("u1", at(2025, 9, 18, 18, 30)),
            Err(PortalError::AlreadyPunchedOut(_))
        ));

        // next day is a fresh slate
        book.punch_in(&aman(), at(2025, 9, 19, 12, 10)).unwrap();
        assert_eq!(
            book.status_on("u1", NaiveDate::from_ymd_opt(2025, 9, 19).unwrap()),
            Some(AttendanceStatus::HalfDay)
        );
        assert_eq!(book.status_on("u2", day), None);
    }

    #[test]
    fn month_view_marks_punched_days() {
        let mut book = AttendanceBook::new();
        book.punch_in(&aman(), at(2025, 9, 1, 9, 0)).unwrap();
        book.punch_in(&aman(), at(2025, 9, 2, 10, 30)).unwrap();

        let today = NaiveDate::from_ymd_opt(2025, 9, 2).unwrap();
        let view = book.month_view("u1", MonthCursor::containing(today), today);

        // September 2025: index 0 is Aug 31, index 1 is Sep 1
        assert!(view.days[0].entries.is_empty());
        assert_eq!(view.days[1].entries[0].status, AttendanceStatus::Present);
        assert_eq!(view.days[2].entries[0].status, AttendanceStatus::Late);
        assert!(view.days[2].is_today);
    }
}
