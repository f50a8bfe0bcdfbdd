//! Month/year picker clamping
//!
//! A picker offers a window of years around the current year. With a lower
//! bound it hides years before the bound's year and, in the bound's year,
//! months before the bound's month.

use crate::models::Period;

/// Years offered on either side of the current year by default
pub const DEFAULT_YEAR_SPAN: u16 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodPicker {
    current_year: i32,
    span: u16,
    min: Option<Period>,
}

impl PeriodPicker {
    pub fn new(current_year: i32, span: u16) -> Self {
        Self {
            current_year,
            span,
            min: None,
        }
    }

    /// Restrict selectable values to periods at or after `min`
    pub fn with_min(mut self, min: Option<Period>) -> Self {
        self.min = min;
        self
    }

    pub fn min(&self) -> Option<Period> {
        self.min
    }

    /// All years in the window, ignoring any lower bound
    pub fn years(&self) -> Vec<i32> {
        let span = i32::from(self.span);
        (self.current_year - span..=self.current_year + span).collect()
    }

    pub fn available_years(&self) -> Vec<i32> {
        self.years()
            .into_iter()
            .filter(|year| !self.is_year_disabled(*year))
            .collect()
    }

    /// Months selectable once `year` is chosen. Without a year all months
    /// are listed.
    pub fn available_months(&self, year: Option<i32>) -> Vec<u8> {
        (1..=12)
            .filter(|month| match year {
                Some(year) => !self.is_month_disabled(*month, year),
                None => true,
            })
            .collect()
    }

    /// Years outside the window or before the lower bound
    pub fn is_year_disabled(&self, year: i32) -> bool {
        let span = i32::from(self.span);
        let outside_window = year < self.current_year - span || year > self.current_year + span;
        outside_window || self.min.is_some_and(|min| year < min.year())
    }

    pub fn is_month_disabled(&self, month: u8, year: i32) -> bool {
        match self.min {
            None => false,
            Some(min) if year > min.year() => false,
            Some(min) if year < min.year() => true,
            Some(min) => month < min.month(),
        }
    }

    /// Apply a month selection. Ignored (returns `None`) until a year has
    /// been chosen or when the month is not selectable in that year.
    pub fn select_month(&self, current: Option<Period>, month: u8) -> Option<Period> {
        let year = current?.year();
        if self.is_month_disabled(month, year) {
            return None;
        }
        Period::new(month, year).ok()
    }

    /// Apply a year selection. The current month is kept when still
    /// selectable in the new year; otherwise the first selectable month is
    /// chosen. Returns `None` when the year is not selectable.
    pub fn select_year(&self, current: Option<Period>, year: i32) -> Option<Period> {
        if self.is_year_disabled(year) {
            return None;
        }

        if let Some(current) = current {
            if !self.is_month_disabled(current.month(), year) {
                return Period::new(current.month(), year).ok();
            }
        }

        let first = self.available_months(Some(year)).into_iter().next()?;
        Period::new(first, year).ok()
    }
}
