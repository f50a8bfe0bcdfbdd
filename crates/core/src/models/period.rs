//! Calendar period model (month and year, no day)

use std::cmp::Ordering;
use std::fmt;

use crate::error::{Error, Result};

/// Spanish month names, indexed by `month - 1`
pub const MONTH_LABELS: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

/// A calendar month within a year.
///
/// Periods order chronologically: year first, then month within equal years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Period {
    month: u8,
    year: i32,
}

impl Period {
    /// Create a period, rejecting months outside `1..=12`
    pub fn new(month: u8, year: i32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidPeriod(format!(
                "month {} is outside 1..=12",
                month
            )));
        }
        Ok(Self { month, year })
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Display label of this period's month
    pub fn month_label(&self) -> &'static str {
        month_label(self.month).unwrap_or_default()
    }

    /// True if `self` is a strictly later calendar month than `other`
    pub fn is_after(&self, other: &Period) -> bool {
        self > other
    }
}

impl Ord for Period {
    fn cmp(&self, other: &Self) -> Ordering {
        self.year
            .cmp(&other.year)
            .then(self.month.cmp(&other.month))
    }
}

impl PartialOrd for Period {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month_label(), self.year)
    }
}

/// Label for a month number, `None` outside `1..=12`
pub fn month_label(month: u8) -> Option<&'static str> {
    MONTH_LABELS.get(usize::from(month).checked_sub(1)?).copied()
}

/// Month number for a label (case-insensitive)
pub fn month_from_label(label: &str) -> Option<u8> {
    let label = label.trim();
    MONTH_LABELS
        .iter()
        .position(|m| m.eq_ignore_ascii_case(label))
        .map(|i| i as u8 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(month: u8, year: i32) -> Period {
        Period::new(month, year).unwrap()
    }

    #[test]
    fn test_rejects_invalid_month() {
        assert!(Period::new(0, 2024).is_err());
        assert!(Period::new(13, 2024).is_err());
        assert!(Period::new(12, 2024).is_ok());
    }

    #[test]
    fn test_month_thirteen_rejected_with_message() {
        match Period::new(13, 2024) {
            Err(Error::InvalidPeriod(msg)) => assert_eq!(msg, "month 13 is outside 1..=12"),
            other => panic!("expected invalid period, got {:?}", other),
        }
    }

    #[test]
    fn test_ordering_year_before_month() {
        assert!(p(1, 2025) > p(12, 2024));
        assert!(p(4, 2024) > p(3, 2024));
        assert_eq!(p(3, 2024).cmp(&p(3, 2024)), Ordering::Equal);
    }

    #[test]
    fn test_is_after_is_strict() {
        assert!(!p(3, 2024).is_after(&p(3, 2024)));
        assert!(p(4, 2024).is_after(&p(3, 2024)));
        assert!(!p(2, 2024).is_after(&p(3, 2024)));
    }

    #[test]
    fn test_is_after_matches_year_then_month_rule() {
        for (am, ay) in [(1, 2023), (6, 2024), (12, 2024)] {
            for (bm, by) in [(1, 2024), (6, 2024), (7, 2024), (1, 2025)] {
                let expected = by > ay || (by == ay && bm > am);
                assert_eq!(p(bm, by).is_after(&p(am, ay)), expected);
            }
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(month_label(1), Some("Enero"));
        assert_eq!(month_label(12), Some("Diciembre"));
        assert_eq!(month_label(0), None);
        assert_eq!(month_from_label("marzo"), Some(3));
        assert_eq!(month_from_label("Nope"), None);
        assert_eq!(p(3, 2024).to_string(), "Marzo 2024");
    }
}
