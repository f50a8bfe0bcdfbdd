//! Field validation rules and the per-field error map

use std::collections::BTreeMap;
use std::fmt;

use crate::models::{FileRef, FileSlot, Period};

/// Form fields that can carry a validation message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Username,
    Password,
    StartDate,
    EndDate,
    TxtFile,
    CerFile,
    KeyFile,
}

impl Field {
    /// Key used in the error map shown to the UI
    pub fn key(&self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Password => "password",
            Self::StartDate => "startDate",
            Self::EndDate => "endDate",
            Self::TxtFile => "txtFile",
            Self::CerFile => "cerFile",
            Self::KeyFile => "keyFile",
        }
    }

    pub fn for_slot(slot: FileSlot) -> Self {
        match slot {
            FileSlot::Txt => Self::TxtFile,
            FileSlot::Cer => Self::CerFile,
            FileSlot::Key => Self::KeyFile,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// User-facing validation messages keyed by field. At most one message per
/// field; a later insert replaces the earlier one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<Field, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn remove(&mut self, field: Field) {
        self.errors.remove(&field);
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn fields(&self) -> Vec<Field> {
        self.errors.keys().copied().collect()
    }
}

pub const START_REQUIRED: &str = "La fecha de inicio es obligatoria";
pub const END_REQUIRED: &str = "La fecha de fin es obligatoria";
pub const END_NOT_AFTER_START: &str = "La fecha de fin debe ser posterior a la fecha de inicio";

/// Check that both periods are present and the end is a strictly later month
pub fn validate_period_range(start: Option<&Period>, end: Option<&Period>) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if start.is_none() {
        errors.insert(Field::StartDate, START_REQUIRED);
    }

    if end.is_none() {
        errors.insert(Field::EndDate, END_REQUIRED);
    }

    if let (Some(start), Some(end)) = (start, end) {
        if !end.is_after(start) {
            errors.insert(Field::EndDate, END_NOT_AFTER_START);
        }
    }

    errors
}

/// Check that a slot holds a file with the slot's extension
pub fn validate_file(slot: FileSlot, file: Option<&FileRef>) -> Result<(), String> {
    match file {
        None => Err(format!("El archivo {} es obligatorio", slot.accepted())),
        Some(file) if !slot.accepts(file) => {
            Err(format!("El archivo debe tener extensión {}", slot.accepted()))
        }
        Some(_) => Ok(()),
    }
}

/// Message shown when a picked file is refused for a slot
pub fn invalid_format_message(slot: FileSlot) -> String {
    format!("Formato de archivo no válido. Se requiere: {}", slot.accepted())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(month: u8, year: i32) -> Period {
        Period::new(month, year).unwrap()
    }

    #[test]
    fn test_both_periods_required() {
        let errors = validate_period_range(None, None);
        assert_eq!(errors.get(Field::StartDate), Some(START_REQUIRED));
        assert_eq!(errors.get(Field::EndDate), Some(END_REQUIRED));

        let errors = validate_period_range(Some(&p(1, 2024)), None);
        assert!(!errors.contains(Field::StartDate));
        assert_eq!(errors.get(Field::EndDate), Some(END_REQUIRED));
    }

    #[test]
    fn test_equal_periods_fail() {
        let errors = validate_period_range(Some(&p(3, 2024)), Some(&p(3, 2024)));
        assert_eq!(errors.get(Field::EndDate), Some(END_NOT_AFTER_START));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_later_year_earlier_month_passes() {
        let errors = validate_period_range(Some(&p(11, 2023)), Some(&p(2, 2024)));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_earlier_end_fails() {
        let errors = validate_period_range(Some(&p(5, 2024)), Some(&p(4, 2024)));
        assert!(errors.contains(Field::EndDate));
    }

    #[test]
    fn test_file_required_and_typed() {
        assert_eq!(
            validate_file(FileSlot::Txt, None).unwrap_err(),
            "El archivo .txt es obligatorio"
        );
        assert_eq!(
            validate_file(FileSlot::Key, Some(&FileRef::new("firma.cer", 1))).unwrap_err(),
            "El archivo debe tener extensión .key"
        );
        assert!(validate_file(FileSlot::Cer, Some(&FileRef::new("cert.CER", 1))).is_ok());
    }

    #[test]
    fn test_error_map_replaces_and_orders() {
        let mut errors = ValidationErrors::new();
        errors.insert(Field::KeyFile, "a");
        errors.insert(Field::StartDate, "b");
        errors.insert(Field::KeyFile, "c");
        assert_eq!(errors.fields(), vec![Field::StartDate, Field::KeyFile]);
        assert_eq!(errors.get(Field::KeyFile), Some("c"));

        errors.remove(Field::KeyFile);
        assert_eq!(errors.len(), 1);
    }
}
