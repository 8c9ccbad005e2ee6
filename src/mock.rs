//! Demo data for the reports screen.

use chrono::{Duration, NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::model::{AttendanceRecord, AttendanceStatus, Employee, LeaveRecord, LeaveStatus, LeaveType};

pub static MOCK_EMPLOYEES: Lazy<Vec<Employee>> = Lazy::new(|| {
    vec![
        Employee::new("u1", "Aman Verma"),
        Employee::new("u2", "Priya Singh"),
        Employee::new("u3", "Rahul Sharma"),
        Employee::new("u4", "Neha Patel"),
    ]
});

// Upper tail cut-offs for a uniform draw in [0, 1).
const ABSENT_ABOVE: f64 = 0.90;
const HALF_DAY_ABOVE: f64 = 0.75;
const LATE_ABOVE: f64 = 0.45;

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn status_for_draw(r: f64) -> AttendanceStatus {
    if r > ABSENT_ABOVE {
        AttendanceStatus::Absent
    } else if r > HALF_DAY_ABOVE {
        AttendanceStatus::HalfDay
    } else if r > LATE_ABOVE {
        AttendanceStatus::Late
    } else {
        AttendanceStatus::Present
    }
}

/// Canned punch times for a generated status.
pub fn punch_times(status: AttendanceStatus) -> (Option<NaiveTime>, Option<NaiveTime>) {
    let at = |h, m| NaiveTime::from_hms_opt(h, m, 0);
    match status {
        AttendanceStatus::Absent => (None, None),
        AttendanceStatus::HalfDay => (at(12, 30), at(18, 0)),
        AttendanceStatus::Late => (at(10, 15), at(18, 0)),
        AttendanceStatus::Present => (at(9, 55), at(18, 0)),
    }
}

/// One record per mock employee for each of `days` days ending at `start`,
/// newest day first.
pub fn generate_attendance<R: Rng>(rng: &mut R, start: NaiveDate, days: u32) -> Vec<AttendanceRecord> {
    let mut out = Vec::with_capacity(days as usize * MOCK_EMPLOYEES.len());

    for i in 0..days {
        let day = start - Duration::days(i as i64);

        for emp in MOCK_EMPLOYEES.iter() {
            let status = status_for_draw(rng.gen_range(0.0..1.0));
            let (punch_in, punch_out) = punch_times(status);

            out.push(AttendanceRecord {
                id: AttendanceRecord::record_id(&emp.id, day),
                date: day,
                employee_id: emp.id.clone(),
                employee_name: emp.name.clone(),
                status,
                punch_in,
                punch_out,
                notes: String::new(),
            });
        }
    }

    tracing::debug!(days, records = out.len(), "Generated mock attendance");
    out
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

pub fn generate_leaves() -> Vec<LeaveRecord> {
    vec![
        LeaveRecord {
            id: 101,
            employee_name: "Aman Verma".into(),
            leave_type: LeaveType::Paid,
            from: ymd(2025, 9, 10),
            to: ymd(2025, 9, 10),
            days: 1,
            reason: "Personal".into(),
            status: LeaveStatus::Approved,
            applied_at: ymd(2025, 9, 10),
        },
        LeaveRecord {
            id: 102,
            employee_name: "Priya Singh".into(),
            leave_type: LeaveType::Sick,
            from: ymd(2025, 9, 20),
            to: ymd(2025, 9, 21),
            days: 2,
            reason: "Fever".into(),
            status: LeaveStatus::Pending,
            applied_at: ymd(2025, 9, 18),
        },
        LeaveRecord {
            id: 103,
            employee_name: "Neha Patel".into(),
            leave_type: LeaveType::Casual,
            from: ymd(2025, 8, 5),
            to: ymd(2025, 8, 6),
            days: 2,
            reason: "Family".into(),
            status: LeaveStatus::Approved,
            applied_at: ymd(2025, 8, 5),
        },
    ]
}

/// History the leave page opens with for the signed-in employee.
pub fn my_leaves(employee_name: &str) -> Vec<LeaveRecord> {
    vec![
        LeaveRecord {
            id: 1,
            employee_name: employee_name.into(),
            leave_type: LeaveType::Paid,
            from: ymd(2025, 9, 10),
            to: ymd(2025, 9, 10),
            days: 1,
            reason: "Personal".into(),
            status: LeaveStatus::Approved,
            applied_at: ymd(2025, 9, 1),
        },
        LeaveRecord {
            id: 2,
            employee_name: employee_name.into(),
            leave_type: LeaveType::Sick,
            from: ymd(2025, 9, 20),
            to: ymd(2025, 9, 21),
            days: 2,
            reason: "Fever".into(),
            status: LeaveStatus::Pending,
            applied_at: ymd(2025, 9, 18),
        },
    ]
}
