use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{PortalResult, ValidationErrors};
use crate::model::{HolidayRecord, HolidayType};
use crate::reports::calendar::{MonthCursor, MonthView};
use crate::utils::local_store::{HOLIDAYS_KEY, LocalStore};

const MIN_NAME_LEN: usize = 2;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HolidayForm {
    pub name: String,
    pub date: Option<NaiveDate>,
    #[serde(rename = "type", default)]
    pub holiday_type: HolidayType,
    #[serde(default)]
    pub note: String,
}

/// Company holiday list, persisted under `holidays_v1` after every change.
#[derive(Debug)]
pub struct HolidayBook {
    store: LocalStore,
    holidays: Vec<HolidayRecord>,
}

impl HolidayBook {
    /// Loads the stored list; a missing or corrupt blob starts an empty list.
    pub fn load(store: LocalStore) -> Self {
        let holidays: Vec<HolidayRecord> = store.load_or_default(HOLIDAYS_KEY);
        tracing::debug!(count = holidays.len(), "Holidays loaded");
        Self { store, holidays }
    }

    pub fn holidays(&self) -> &[HolidayRecord] {
        &self.holidays
    }

    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(HOLIDAYS_KEY, &self.holidays) {
            tracing::error!(error = %e, "Failed to persist holidays");
        }
    }

    pub fn validate(&self, form: &HolidayForm) -> ValidationErrors {
        let mut err = ValidationErrors::new();
        let name = form.name.trim();

        if name.chars().count() < MIN_NAME_LEN {
            err.add("name", "Enter holiday name");
        }
        match form.date {
            None => err.add("date", "Select date"),
            Some(date) => {
                if self.holidays.iter().any(|h| h.date == date && h.name == name) {
                    err.add("duplicate", "Holiday with same name & date already exists");
                }
            }
        }

        err
    }

    /// Adds a holiday stamped with `now_millis` as id (bumped if taken) and
    /// keeps the list in date order.
    pub fn add(&mut self, form: &HolidayForm, now_millis: i64) -> PortalResult<&HolidayRecord> {
        let errors = self.validate(form);
        let date = match form.date {
            Some(date) if errors.is_empty() => date,
            _ => return Err(errors.into()),
        };

        let max_id = self.holidays.iter().map(|h| h.id).max().unwrap_or(i64::MIN);
        let id = now_millis.max(max_id.saturating_add(1));

        self.holidays.push(HolidayRecord {
            id,
            name: form.name.trim().to_string(),
            date,
            holiday_type: form.holiday_type,
            note: form.note.trim().to_string(),
        });
        self.holidays.sort_by_key(|h| h.date);
        self.persist();

        tracing::info!(id, %date, "Holiday added");

        let idx = self.holidays.iter().position(|h| h.id == id).unwrap_or_default();
        Ok(&self.holidays[idx])
    }

    /// Returns whether anything was removed.
    pub fn delete(&mut self, id: i64) -> bool {
        let before = self.holidays.len();
        self.holidays.retain(|h| h.id != id);

        let removed = self.holidays.len() != before;
        if removed {
            self.persist();
            tracing::info!(id, "Holiday deleted");
        }
        removed
    }

    /// Holidays on or after `today`, soonest first.
    pub fn upcoming(&self, today: NaiveDate) -> Vec<&HolidayRecord> {
        let mut list: Vec<&HolidayRecord> = self.holidays.iter().filter(|h| h.date >= today).collect();
        list.sort_by_key(|h| h.date);
        list
    }

    pub fn by_date(&self) -> BTreeMap<NaiveDate, Vec<HolidayRecord>> {
        let mut map: BTreeMap<NaiveDate, Vec<HolidayRecord>> = BTreeMap::new();
        for h in &self.holidays {
            map.entry(h.date).or_default().push(h.clone());
        }
        map
    }

    pub fn month_view(&self, cursor: MonthCursor, today: NaiveDate) -> MonthView<HolidayRecord> {
        MonthView::build(cursor, today, &self.by_date())
    }
}
