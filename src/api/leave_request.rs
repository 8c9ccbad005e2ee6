use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{PortalResult, ValidationErrors};
use crate::model::{LeaveRecord, LeaveStatus, LeaveType};
use crate::utils::dates;

const MIN_REASON_LEN: usize = 3;

/// Raw input of the "apply leave" form; everything optional until validated.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeaveForm {
    pub leave_type: Option<LeaveType>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    #[serde(default)]
    pub reason: String,
}

/// Per-employee leave policy the form is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeavePolicy {
    pub paid_leaves_available: u32,
    pub in_probation: bool,
}

impl Default for LeavePolicy {
    fn default() -> Self {
        Self {
            paid_leaves_available: 3,
            in_probation: false,
        }
    }
}

/// Days covered by a leave, both ends included. 0 if either side is missing.
pub fn days_inclusive(from: Option<NaiveDate>, to: Option<NaiveDate>) -> i64 {
    match (from, to) {
        (Some(f), Some(t)) => dates::days_inclusive(f, t),
        _ => 0,
    }
}

/// Checks the form against the policy and returns every problem at once.
pub fn validate_leave(form: &LeaveForm, policy: &LeavePolicy) -> ValidationErrors {
    let mut err = ValidationErrors::new();

    if form.leave_type.is_none() {
        err.add("type", "Select leave type");
    }
    if form.from.is_none() {
        err.add("from", "From date required");
    }
    if form.to.is_none() {
        err.add("to", "To date required");
    }

    let days = days_inclusive(form.from, form.to);
    if form.from.is_some() && form.to.is_some() && days <= 0 {
        err.add("to", "To date must be same or after From date");
    }

    if form.reason.trim().chars().count() < MIN_REASON_LEN {
        err.add("reason", "Reason is required (min 3 chars)");
    }

    if policy.in_probation {
        err.add("probation", "Leave not allowed during probation");
    }

    if form.leave_type == Some(LeaveType::Paid) && days > policy.paid_leaves_available as i64 {
        err.add(
            "paid",
            format!("Not enough paid leaves ({} left)", policy.paid_leaves_available),
        );
    }

    err
}

/// Leave history of the signed-in employee, newest application first.
#[derive(Debug, Clone)]
pub struct LeaveBook {
    employee_name: String,
    policy: LeavePolicy,
    leaves: Vec<LeaveRecord>,
}

impl LeaveBook {
    pub fn new(employee_name: impl Into<String>, policy: LeavePolicy) -> Self {
        Self {
            employee_name: employee_name.into(),
            policy,
            leaves: Vec::new(),
        }
    }

    pub fn with_leaves(mut self, leaves: Vec<LeaveRecord>) -> Self {
        self.leaves = leaves;
        self
    }

    pub fn leaves(&self) -> &[LeaveRecord] {
        &self.leaves
    }

    pub fn policy(&self) -> &LeavePolicy {
        &self.policy
    }

    pub fn pending_count(&self) -> usize {
        self.leaves
            .iter()
            .filter(|l| l.status == LeaveStatus::Pending)
            .count()
    }

    fn next_id(&self) -> u64 {
        self.leaves.iter().map(|l| l.id).max().unwrap_or(0) + 1
    }

    /// Validates and files a new `Pending` application dated `today`.
    pub fn apply(&mut self, form: &LeaveForm, today: NaiveDate) -> PortalResult<&LeaveRecord> {
        // 1️⃣ validate
        let errors = validate_leave(form, &self.policy);
        let (leave_type, from, to) = match (form.leave_type, form.from, form.to) {
            (Some(leave_type), Some(from), Some(to)) if errors.is_empty() => (leave_type, from, to),
            _ => {
                tracing::info!(errors = %errors, "Leave application rejected");
                return Err(errors.into());
            }
        };

        // 2️⃣ build record
        let days = dates::days_inclusive(from, to) as u32;

        let record = LeaveRecord {
            id: self.next_id(),
            employee_name: self.employee_name.clone(),
            leave_type,
            from,
            to,
            days,
            reason: form.reason.trim().to_string(),
            status: LeaveStatus::Pending,
            applied_at: today,
        };

        tracing::info!(
            id = record.id,
            leave_type = %record.leave_type,
            days,
            "Leave request submitted"
        );

        // 3️⃣ newest first
        self.leaves.insert(0, record);
        Ok(&self.leaves[0])
    }
}
