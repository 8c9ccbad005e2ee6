pub mod calendar;
pub mod date_range;
pub mod export;
pub mod filter;
pub mod query;
pub mod summary;

pub use calendar::{CalendarCell, MonthCursor, MonthView, build_month_grid};
pub use date_range::{DateInterval, DateRangeSelection, RangeKey, resolve};
pub use filter::{LeaveTypeFilter, Page, filter_attendance, filter_leaves, paginate};
pub use query::{ReportQuery, ReportTab};
pub use summary::{SummaryCounts, attendance_summary, leave_summary};
