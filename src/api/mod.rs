pub mod attendance;
pub mod chat;
pub mod holiday;
pub mod leave_request;

pub use attendance::{AttendanceBook, classify_punch_in};
pub use chat::{ChatBook, search_contacts};
pub use holiday::{HolidayBook, HolidayForm};
pub use leave_request::{LeaveBook, LeaveForm, LeavePolicy, validate_leave};
