use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::error::{PortalError, PortalResult};
use crate::utils::dates;

pub const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarCell {
    pub day: u32,
    pub belongs_to_current_month: bool,
}

/// Month grid for `(year, month0)`, `month0` being 0 = January .. 11 = December.
///
/// Weeks start on Sunday. The grid opens with the tail of the previous month,
/// then every day of the month, then the head of the next month until the
/// length is a multiple of 7.
pub fn build_month_grid(year: i32, month0: u32) -> PortalResult<Vec<CalendarCell>> {
    if month0 > 11 {
        return Err(PortalError::InvalidMonth(month0));
    }
    let month = month0 + 1;

    let first_weekday = dates::first_weekday(year, month);
    let days_in_month = dates::days_in_month(year, month);
    let days_in_prev_month = if month == 1 {
        dates::days_in_month(year - 1, 12)
    } else {
        dates::days_in_month(year, month - 1)
    };

    let mut cells = Vec::with_capacity(42);

    for i in (0..first_weekday).rev() {
        cells.push(CalendarCell {
            day: days_in_prev_month - i,
            belongs_to_current_month: false,
        });
    }

    cells.extend((1..=days_in_month).map(|day| CalendarCell {
        day,
        belongs_to_current_month: true,
    }));

    let mut next_day = 1;
    while cells.len() % 7 != 0 {
        cells.push(CalendarCell {
            day: next_day,
            belongs_to_current_month: false,
        });
        next_day += 1;
    }

    Ok(cells)
}

/// The month a calendar is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthCursor {
    year: i32,
    month0: u32,
}

impl MonthCursor {
    pub fn new(year: i32, month0: u32) -> PortalResult<Self> {
        if month0 > 11 {
            return Err(PortalError::InvalidMonth(month0));
        }
        Ok(Self { year, month0 })
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month0: date.month0(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month0(&self) -> u32 {
        self.month0
    }

    pub fn prev(self) -> Self {
        if self.month0 == 0 {
            Self { year: self.year - 1, month0: 11 }
        } else {
            Self { month0: self.month0 - 1, ..self }
        }
    }

    pub fn next(self) -> Self {
        if self.month0 == 11 {
            Self { year: self.year + 1, month0: 0 }
        } else {
            Self { month0: self.month0 + 1, ..self }
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        // month0 is validated on construction
        NaiveDate::from_ymd_opt(self.year, self.month0 + 1, 1).unwrap_or_default()
    }

    /// `September 2025`
    pub fn title(&self) -> String {
        self.first_day().format("%B %Y").to_string()
    }

    pub fn grid(&self) -> Vec<CalendarCell> {
        build_month_grid(self.year, self.month0).unwrap_or_default()
    }

    /// Real date behind the cell at `index`, adjacent-month cells included.
    pub fn cell_date(&self, index: usize) -> NaiveDate {
        let lead = dates::first_weekday(self.year, self.month0 + 1) as i64;
        self.first_day() + Duration::days(index as i64 - lead)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayCell<T> {
    pub cell: CalendarCell,
    pub date: NaiveDate,
    pub is_today: bool,
    pub entries: Vec<T>,
}

/// Month grid joined with a day → entries lookup, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthView<T> {
    pub title: String,
    pub cursor: MonthCursor,
    pub days: Vec<DayCell<T>>,
}

impl<T: Clone> MonthView<T> {
    pub fn build(cursor: MonthCursor, today: NaiveDate, by_date: &BTreeMap<NaiveDate, Vec<T>>) -> Self {
        let days = cursor
            .grid()
            .into_iter()
            .enumerate()
            .map(|(i, cell)| {
                let date = cursor.cell_date(i);
                DayCell {
                    cell,
                    date,
                    is_today: date == today,
                    entries: by_date.get(&date).cloned().unwrap_or_default(),
                }
            })
            .collect();

        Self {
            title: cursor.title(),
            cursor,
            days,
        }
    }

    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell<T>]> {
        self.days.chunks(7)
    }
}
