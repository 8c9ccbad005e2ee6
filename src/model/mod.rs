pub mod attendance;
pub mod chat;
pub mod employee;
pub mod holiday;
pub mod leave_request;

pub use attendance::{AttendanceRecord, AttendanceStatus};
pub use chat::{Attachment, Channel, ChatMessage, Contact};
pub use employee::Employee;
pub use holiday::{HolidayRecord, HolidayType};
pub use leave_request::{LeaveRecord, LeaveStatus, LeaveType};
