//! Core of the employee portal: report date ranges, month calendars,
//! record filtering and export, plus the attendance, leave, holiday and
//! chat books the screens drive.

pub mod api;
pub mod config;
pub mod error;
pub mod mock;
pub mod model;
pub mod reports;
pub mod utils;

pub use error::{PortalError, PortalResult, ValidationErrors};
