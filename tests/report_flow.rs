use chrono::NaiveDate;
use strum::IntoEnumIterator;

use hrm_portal::api::{HolidayBook, HolidayForm, LeaveBook, LeaveForm, LeavePolicy};
use hrm_portal::mock;
use hrm_portal::model::{AttendanceRecord, AttendanceStatus, HolidayType, LeaveType};
use hrm_portal::reports::export;
use hrm_portal::reports::{
    DateRangeSelection, LeaveTypeFilter, RangeKey, ReportQuery, ReportTab, build_month_grid,
    filter_attendance, filter_leaves, resolve,
};
use hrm_portal::utils::dates;
use hrm_portal::utils::local_store::LocalStore;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn row(date: NaiveDate, name: &str, notes: &str) -> AttendanceRecord {
    AttendanceRecord {
        id: AttendanceRecord::record_id("u9", date),
        date,
        employee_id: "u9".into(),
        employee_name: name.into(),
        status: AttendanceStatus::Present,
        punch_in: None,
        punch_out: None,
        notes: notes.into(),
    }
}

#[test]
fn custom_range_keeps_in_range_rows_newest_first() {
    let records = vec![
        row(d(2025, 9, 1), "A", ""),
        row(d(2025, 9, 3), "A", ""),
        row(d(2025, 9, 2), "A", ""),
    ];
    let range = resolve(
        &DateRangeSelection::custom_from_inputs("2025-09-02", "2025-09-03"),
        d(2025, 9, 18),
    );

    let dates: Vec<NaiveDate> = filter_attendance(&records, range.as_ref(), "")
        .iter()
        .map(|r| r.date)
        .collect();
    assert_eq!(dates, [d(2025, 9, 3), d(2025, 9, 2)]);
}

#[test]
fn quick_ranges_only_return_rows_inside_bounds() {
    let today = d(2025, 9, 18);
    let mut rng = mock::seeded_rng(11);
    let records = mock::generate_attendance(&mut rng, today, 45);

    for key in RangeKey::iter().filter(|k| *k != RangeKey::Custom) {
        let range = resolve(&DateRangeSelection::quick(key), today).unwrap();
        let rows = filter_attendance(&records, Some(&range), "");
        assert!(!rows.is_empty(), "{} matched nothing", key);
        for r in &rows {
            assert!(range.from <= r.date && r.date <= range.to, "{} leaked {}", key, r.date);
            // ISO strings order the same way
            assert!(dates::iso(range.from) <= dates::iso(r.date));
        }
        // blank search leaves the interval result untouched
        let expected = records.iter().filter(|r| range.contains(r.date)).count();
        assert_eq!(rows.len(), expected);
    }
}

#[test]
fn equal_dates_keep_input_order() {
    let records = vec![
        row(d(2025, 9, 5), "A", "first"),
        row(d(2025, 9, 6), "B", ""),
        row(d(2025, 9, 5), "C", "second"),
        row(d(2025, 9, 5), "D", "third"),
    ];
    let sorted = filter_attendance(&records, None, "");
    assert_eq!(sorted[0].employee_name, "B");

    let notes: Vec<&str> = sorted[1..].iter().map(|r| r.notes.as_str()).collect();
    assert_eq!(notes, ["first", "second", "third"]);
}

#[test]
fn september_2025_grid_opens_on_august_31() {
    let grid = build_month_grid(2025, 8).unwrap();
    assert_eq!(grid.len() % 7, 0);
    assert!(grid.len() >= 30 + 1);
    assert!(!grid[0].belongs_to_current_month);
    assert_eq!(grid[0].day, 31);
    assert_eq!(grid[1].day, 1);
    assert!(grid[1].belongs_to_current_month);
}

#[test]
fn leave_mock_is_stable_and_all_filter_keeps_every_type() {
    let leaves = mock::generate_leaves();
    assert_eq!(leaves, mock::generate_leaves());

    let all = filter_leaves(&leaves, None, "", LeaveTypeFilter::All);
    assert_eq!(all.len(), leaves.len());

    let by_type: usize = LeaveType::iter()
        .map(|t| filter_leaves(&leaves, None, "", LeaveTypeFilter::Only(t)).len())
        .sum();
    assert_eq!(by_type, leaves.len());

    let days: Vec<u32> = leaves.iter().take(2).map(|l| l.days).collect();
    assert_eq!(days, [1, 2]);
}

#[test]
fn applied_leave_flows_into_report_and_csv() {
    let today = d(2025, 9, 18);
    let mut book = LeaveBook::new("Rahul Sharma", LeavePolicy::default())
        .with_leaves(mock::generate_leaves());
    book.apply(
        &LeaveForm {
            leave_type: Some(LeaveType::Casual),
            from: Some(d(2025, 9, 15)),
            to: Some(d(2025, 9, 15)),
            reason: "Bank, \"KYC\" visit".into(),
        },
        today,
    )
    .unwrap();

    let mut query = ReportQuery::default();
    query.set_tab(ReportTab::Leaves);
    query.set_range(RangeKey::ThisMonth);
    query.set_employee_search("rahul");
    let page = query.run_leaves(book.leaves(), today);
    assert_eq!(page.total, 1);
    assert_eq!(page.data[0].days, 1);

    let csv = export::leave_csv(&page.data).unwrap();
    let mut lines = csv.lines();
    assert!(lines.next().unwrap().starts_with("Date,"));
    assert!(lines.next().unwrap().contains("\"Bank, \"\"KYC\"\" visit\""));
}

#[test]
fn holidays_survive_a_reload() {
    let tmp = tempfile::tempdir().unwrap();
    let today = d(2025, 9, 18);

    {
        let mut book = HolidayBook::load(LocalStore::open(tmp.path()).unwrap());
        book.add(
            &HolidayForm {
                name: "Gandhi Jayanti".into(),
                date: Some(d(2025, 10, 2)),
                holiday_type: HolidayType::Festival,
                note: String::new(),
            },
            1_758_000_000_000,
        )
        .unwrap();
    }

    let book = HolidayBook::load(LocalStore::open(tmp.path()).unwrap());
    let upcoming = book.upcoming(today);
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].name, "Gandhi Jayanti");
    assert!(book.upcoming(d(2025, 10, 3)).is_empty());
}
