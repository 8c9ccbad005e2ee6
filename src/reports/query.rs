use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::model::{AttendanceRecord, LeaveRecord};
use crate::reports::date_range::{self, DateRangeSelection, RangeKey};
use crate::reports::filter::{self, DEFAULT_PAGE_SIZE, LeaveTypeFilter, Page};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ReportTab {
    #[default]
    Attendance,
    Leaves,
}

/// Filter state of the reports screen. Any change to a filter or the tab
/// sends the user back to page 1.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportQuery {
    tab: ReportTab,
    selection: DateRangeSelection,
    employee_search: String,
    leave_type: LeaveTypeFilter,
    page: usize,
    per_page: usize,
}

impl Default for ReportQuery {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl ReportQuery {
    pub fn new(per_page: usize) -> Self {
        Self {
            tab: ReportTab::Attendance,
            selection: DateRangeSelection::quick(RangeKey::Last30Days),
            employee_search: String::new(),
            leave_type: LeaveTypeFilter::All,
            page: 1,
            per_page: per_page.max(1),
        }
    }

    pub fn tab(&self) -> ReportTab {
        self.tab
    }

    pub fn selection(&self) -> &DateRangeSelection {
        &self.selection
    }

    pub fn employee_search(&self) -> &str {
        &self.employee_search
    }

    pub fn leave_type(&self) -> LeaveTypeFilter {
        self.leave_type
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn set_tab(&mut self, tab: ReportTab) {
        self.tab = tab;
        self.page = 1;
    }

    pub fn set_range(&mut self, key: RangeKey) {
        self.selection.key = key;
        self.page = 1;
    }

    pub fn set_custom_from(&mut self, from: Option<NaiveDate>) {
        self.selection.custom_from = from;
        self.page = 1;
    }

    pub fn set_custom_to(&mut self, to: Option<NaiveDate>) {
        self.selection.custom_to = to;
        self.page = 1;
    }

    pub fn set_employee_search(&mut self, search: impl Into<String>) {
        self.employee_search = search.into();
        self.page = 1;
    }

    pub fn set_leave_type(&mut self, leave_type: LeaveTypeFilter) {
        self.leave_type = leave_type;
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn filtered_attendance(&self, records: &[AttendanceRecord], today: NaiveDate) -> Vec<AttendanceRecord> {
        let range = date_range::resolve(&self.selection, today);
        filter::filter_attendance(records, range.as_ref(), &self.employee_search)
    }

    pub fn filtered_leaves(&self, records: &[LeaveRecord], today: NaiveDate) -> Vec<LeaveRecord> {
        let range = date_range::resolve(&self.selection, today);
        filter::filter_leaves(records, range.as_ref(), &self.employee_search, self.leave_type)
    }

    pub fn run_attendance(&self, records: &[AttendanceRecord], today: NaiveDate) -> Page<AttendanceRecord> {
        let rows = self.filtered_attendance(records, today);
        tracing::debug!(
            range = %self.selection.key,
            search = %self.employee_search,
            matched = rows.len(),
            page = self.page,
            "Attendance report filtered"
        );
        filter::paginate(&rows, self.page, self.per_page)
    }

    pub fn run_leaves(&self, records: &[LeaveRecord], today: NaiveDate) -> Page<LeaveRecord> {
        let rows = self.filtered_leaves(records, today);
        tracing::debug!(
            range = %self.selection.key,
            search = %self.employee_search,
            leave_type = %self.leave_type,
            matched = rows.len(),
            page = self.page,
            "Leave report filtered"
        );
        filter::paginate(&rows, self.page, self.per_page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;
    use crate::model::LeaveType;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn every_filter_change_resets_page() {
        let mut q = ReportQuery::default();
        let changes: Vec<Box<dyn Fn(&mut ReportQuery)>> = vec![
            Box::new(|q: &mut ReportQuery| q.set_tab(ReportTab::Leaves)),
            Box::new(|q: &mut ReportQuery| q.set_range(RangeKey::Today)),
            Box::new(|q: &mut ReportQuery| q.set_custom_from(Some(d(2025, 9, 1)))),
            Box::new(|q: &mut ReportQuery| q.set_custom_to(Some(d(2025, 9, 30)))),
            Box::new(|q: &mut ReportQuery| q.set_employee_search("neha")),
            Box::new(|q: &mut ReportQuery| q.set_leave_type(LeaveTypeFilter::Only(LeaveType::Sick))),
        ];

        for change in changes {
            q.set_page(4);
            change(&mut q);
            assert_eq!(q.page(), 1);
        }
    }

    #[test]
    fn thirty_days_of_mock_attendance_pages_by_ten() {
        let today = d(2025, 9, 18);
        let mut rng = mock::seeded_rng(1);
        let records = mock::generate_attendance(&mut rng, today, 30);

        let mut q = ReportQuery::default();
        let first = q.run_attendance(&records, today);
        assert_eq!(first.total, 120);
        assert_eq!(first.data.len(), 10);
        assert_eq!(first.total_pages(), 12);
        assert!(first.data[..4].iter().all(|r| r.date == today));
        assert_eq!(first.data[4].date, d(2025, 9, 17));

        q.set_employee_search("aman");
        q.set_page(3);
        let page = q.run_attendance(&records, today);
        assert_eq!(page.total, 30);
        assert_eq!(page.data.len(), 10);
        assert!(page.data.iter().all(|r| r.employee_name == "Aman Verma"));
    }

    #[test]
    fn leaves_tab_custom_range() {
        let mut q = ReportQuery::default();
        q.set_tab(ReportTab::Leaves);
        q.set_range(RangeKey::Custom);
        q.set_custom_from(Some(d(2025, 9, 1)));

        // one side only: no interval filter
        let page = q.run_leaves(&mock::generate_leaves(), d(2025, 9, 18));
        assert_eq!(page.total, 3);

        q.set_custom_to(Some(d(2025, 9, 30)));
        let page = q.run_leaves(&mock::generate_leaves(), d(2025, 9, 18));
        let ids: Vec<u64> = page.data.iter().map(|r| r.id).collect();
        assert_eq!(ids, [102, 101]);
    }

    #[test]
    fn tab_names() {
        assert_eq!(ReportTab::Attendance.to_string(), "attendance");
        assert_eq!("leaves".parse::<ReportTab>().unwrap(), ReportTab::Leaves);
    }
}
