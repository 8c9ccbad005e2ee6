use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use derive_more::Display;

/// Field name → message, as shown next to the offending form input.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: BTreeMap<&'static str, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.fields.insert(field, message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.fields.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// `Ok(())` when nothing was recorded, otherwise the collected errors.
    pub fn into_result(self) -> Result<(), PortalError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(PortalError::Validation(self))
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .fields
            .iter()
            .map(|(field, msg)| format!("{}: {}", field, msg))
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{}", joined)
    }
}

#[derive(Debug, Display)]
pub enum PortalError {
    #[display(fmt = "Please fix errors ({})", _0)]
    Validation(ValidationErrors),

    #[display(fmt = "Month index {} is out of range (expected 0-11)", _0)]
    InvalidMonth(u32),

    #[display(fmt = "Invalid date: {}", _0)]
    InvalidDate(String),

    #[display(fmt = "Already punched in on {}", _0)]
    AlreadyPunchedIn(NaiveDate),

    #[display(fmt = "No punch-in recorded on {}", _0)]
    NotPunchedIn(NaiveDate),

    #[display(fmt = "Already punched out on {}", _0)]
    AlreadyPunchedOut(NaiveDate),

    #[display(fmt = "Storage error: {}", _0)]
    Io(std::io::Error),

    #[display(fmt = "Serialization error: {}", _0)]
    Json(serde_json::Error),

    #[display(fmt = "CSV export error: {}", _0)]
    Csv(csv::Error),
}

impl std::error::Error for PortalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PortalError::Io(e) => Some(e),
            PortalError::Json(e) => Some(e),
            PortalError::Csv(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PortalError {
    fn from(e: std::io::Error) -> Self {
        PortalError::Io(e)
    }
}

impl From<serde_json::Error> for PortalError {
    fn from(e: serde_json::Error) -> Self {
        PortalError::Json(e)
    }
}

impl From<csv::Error> for PortalError {
    fn from(e: csv::Error) -> Self {
        PortalError::Csv(e)
    }
}

impl From<ValidationErrors> for PortalError {
    fn from(e: ValidationErrors) -> Self {
        PortalError::Validation(e)
    }
}

pub type PortalResult<T> = Result<T, PortalError>;
