use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::Serialize;

use crate::model::{AttendanceRecord, LeaveRecord, LeaveType};
use crate::reports::date_range::DateInterval;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// What the report filters need to know about a row.
pub trait ReportRow {
    /// Date the interval filter and the sort look at.
    fn report_date(&self) -> NaiveDate;
    fn employee_name(&self) -> &str;
}

impl ReportRow for AttendanceRecord {
    fn report_date(&self) -> NaiveDate {
        self.date
    }

    fn employee_name(&self) -> &str {
        &self.employee_name
    }
}

impl ReportRow for LeaveRecord {
    fn report_date(&self) -> NaiveDate {
        self.from
    }

    fn employee_name(&self) -> &str {
        &self.employee_name
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LeaveTypeFilter {
    #[default]
    All,
    Only(LeaveType),
}

impl LeaveTypeFilter {
    pub fn matches(&self, leave_type: LeaveType) -> bool {
        match self {
            LeaveTypeFilter::All => true,
            LeaveTypeFilter::Only(t) => *t == leave_type,
        }
    }
}

impl FromStr for LeaveTypeFilter {
    type Err = strum::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(LeaveTypeFilter::All);
        }
        LeaveType::from_str(s.trim()).map(LeaveTypeFilter::Only)
    }
}

impl fmt::Display for LeaveTypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeaveTypeFilter::All => write!(f, "all"),
            LeaveTypeFilter::Only(t) => write!(f, "{}", t),
        }
    }
}

/* =========================
Shared pipeline
========================= */

fn matches_search(name: &str, needle: &Option<String>) -> bool {
    match needle {
        Some(n) => name.to_lowercase().contains(n.as_str()),
        None => true,
    }
}

fn normalize_search(search: &str) -> Option<String> {
    if search.trim().is_empty() {
        None
    } else {
        Some(search.to_lowercase())
    }
}

/// Interval + name filter, then newest first. The sort is stable so rows
/// sharing a date keep their input order.
fn filter_rows<T, P>(records: &[T], range: Option<&DateInterval>, employee_search: &str, extra: P) -> Vec<T>
where
    T: ReportRow + Clone,
    P: Fn(&T) -> bool,
{
    let needle = normalize_search(employee_search);

    let mut rows: Vec<T> = records
        .iter()
        .filter(|r| range.is_none_or(|iv| iv.contains(r.report_date())))
        .filter(|r| matches_search(r.employee_name(), &needle))
        .filter(|r| extra(*r))
        .cloned()
        .collect();

    rows.sort_by(|a, b| b.report_date().cmp(&a.report_date()));
    rows
}

pub fn filter_attendance(
    records: &[AttendanceRecord],
    range: Option<&DateInterval>,
    employee_search: &str,
) -> Vec<AttendanceRecord> {
    filter_rows(records, range, employee_search, |_| true)
}

pub fn filter_leaves(
    records: &[LeaveRecord],
    range: Option<&DateInterval>,
    employee_search: &str,
    leave_type: LeaveTypeFilter,
) -> Vec<LeaveRecord> {
    filter_rows(records, range, employee_search, |r| leave_type.matches(r.leave_type))
}

/* =========================
Pagination
========================= */

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
}

impl<T> Page<T> {
    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.per_page.max(1))
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }
}

/// 1-based page slice; a page past the end is empty.
pub fn paginate<T: Clone>(rows: &[T], page: usize, per_page: usize) -> Page<T> {
    let per_page = per_page.max(1);
    let page = page.max(1);
    let start = (page - 1).saturating_mul(per_page);

    let data = rows.iter().skip(start).take(per_page).cloned().collect();

    Page {
        data,
        page,
        per_page,
        total: rows.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AttendanceStatus, LeaveStatus};
    use crate::reports::date_range::{resolve, DateRangeSelection, RangeKey};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn att(id: &str, date: NaiveDate, name: &str) -> AttendanceRecord {
        AttendanceRecord {
            id: id.into(),
            date,
            employee_id: id.into(),
            employee_name: name.into(),
            status: AttendanceStatus::Present,
            punch_in: None,
            punch_out: None,
            notes: String::new(),
        }
    }

    fn leave(id: u64, name: &str, leave_type: LeaveType, from: NaiveDate) -> LeaveRecord {
        LeaveRecord {
            id,
            employee_name: name.into(),
            leave_type,
            from,
            to: from,
            days: 1,
            reason: "x".into(),
            status: LeaveStatus::Pending,
            applied_at: from,
        }
    }

    #[test]
    fn custom_range_keeps_in_range_newest_first() {
        let records = vec![
            att("a", d(2025, 9, 1), "Aman Verma"),
            att("b", d(2025, 9, 3), "Aman Verma"),
            att("c", d(2025, 9, 2), "Aman Verma"),
        ];
        let range = resolve(
            &DateRangeSelection::custom_from_inputs("2025-09-02", "2025-09-03"),
            d(2025, 9, 18),
        );

        let out = filter_attendance(&records, range.as_ref(), "");
        let dates: Vec<NaiveDate> = out.iter().map(|r| r.date).collect();
        assert_eq!(dates, [d(2025, 9, 3), d(2025, 9, 2)]);
    }

    #[test]
    fn unresolved_range_keeps_everything() {
        let records = vec![att("a", d(2020, 1, 1), "A"), att("b", d(2030, 1, 1), "B")];
        let range = resolve(&DateRangeSelection::custom(None, Some(d(2025, 1, 1))), d(2025, 9, 18));

        assert_eq!(filter_attendance(&records, range.as_ref(), "").len(), 2);
    }

    #[test]
    fn quick_ranges_only_return_dates_inside_bounds() {
        let today = d(2025, 9, 18);
        let records: Vec<AttendanceRecord> = (0..60)
            .map(|i| att(&i.to_string(), today - chrono::Duration::days(i - 5), "A"))
            .collect();

        for key in [RangeKey::Today, RangeKey::Last7Days, RangeKey::Last30Days, RangeKey::ThisMonth] {
            let range = resolve(&DateRangeSelection::quick(key), today).unwrap();
            let out = filter_attendance(&records, Some(&range), "");
            assert!(!out.is_empty());
            assert!(out.iter().all(|r| range.from <= r.date && r.date <= range.to), "{}", key);
        }
    }

    #[test]
    fn blank_search_is_no_filter_and_search_ignores_case() {
        let records = vec![
            att("a", d(2025, 9, 1), "Aman Verma"),
            att("b", d(2025, 9, 2), "Priya Singh"),
        ];

        assert_eq!(filter_attendance(&records, None, "   ").len(), 2);

        let out = filter_attendance(&records, None, "PRIYA");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].employee_name, "Priya Singh");
    }

    #[test]
    fn same_date_rows_keep_input_order() {
        let day = d(2025, 9, 2);
        let records = vec![
            att("first", day, "A"),
            att("older", d(2025, 9, 1), "A"),
            att("second", day, "A"),
            att("third", day, "A"),
        ];

        let ids: Vec<String> = filter_attendance(&records, None, "")
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, ["first", "second", "third", "older"]);
    }

    #[test]
    fn leaves_filter_on_from_date_and_type() {
        let records = vec![
            leave(1, "Aman Verma", LeaveType::Paid, d(2025, 9, 10)),
            leave(2, "Priya Singh", LeaveType::Sick, d(2025, 9, 20)),
            leave(3, "Neha Patel", LeaveType::Casual, d(2025, 8, 5)),
        ];

        let all = filter_leaves(&records, None, "", LeaveTypeFilter::All);
        let ids: Vec<u64> = all.iter().map(|r| r.id).collect();
        assert_eq!(ids, [2, 1, 3]);

        let sick = filter_leaves(&records, None, "", "Sick".parse().unwrap());
        assert_eq!(sick.len(), 1);
        assert_eq!(sick[0].id, 2);

        let sept = DateInterval { from: d(2025, 9, 1), to: d(2025, 9, 30) };
        assert_eq!(filter_leaves(&records, Some(&sept), "neha", LeaveTypeFilter::All).len(), 0);
    }

    #[test]
    fn leave_type_filter_parses_all_and_names() {
        assert_eq!("all".parse::<LeaveTypeFilter>().unwrap(), LeaveTypeFilter::All);
        assert_eq!(
            "Casual".parse::<LeaveTypeFilter>().unwrap(),
            LeaveTypeFilter::Only(LeaveType::Casual)
        );
        assert!("Vacation".parse::<LeaveTypeFilter>().is_err());
        assert_eq!(LeaveTypeFilter::Only(LeaveType::Paid).to_string(), "Paid");
    }

    #[test]
    fn pages_of_ten() {
        let rows: Vec<u32> = (1..=23).collect();

        let p1 = paginate(&rows, 1, DEFAULT_PAGE_SIZE);
        assert_eq!(p1.data, (1..=10).collect::<Vec<_>>());
        assert_eq!(p1.total_pages(), 3);
        assert!(p1.has_next() && !p1.has_prev());

        let p3 = paginate(&rows, 3, DEFAULT_PAGE_SIZE);
        assert_eq!(p3.data, vec![21, 22, 23]);
        assert!(!p3.has_next());

        assert!(paginate(&rows, 9, DEFAULT_PAGE_SIZE).data.is_empty());
        assert_eq!(paginate(&rows, 0, DEFAULT_PAGE_SIZE).page, 1);
    }
}
