//! Form state and the submission gate

use tracing::debug;

use crate::invariants;
use crate::models::{FileRef, FileSlot, Period};
use crate::validation::{
    invalid_format_message, validate_file, validate_period_range, Field, ValidationErrors,
};

/// Values entered on the main form. Held in memory only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub start_period: Option<Period>,
    pub end_period: Option<Period>,
    pub txt_file: Option<FileRef>,
    pub cer_file: Option<FileRef>,
    pub key_file: Option<FileRef>,
}

impl FormState {
    pub fn file(&self, slot: FileSlot) -> Option<&FileRef> {
        match slot {
            FileSlot::Txt => self.txt_file.as_ref(),
            FileSlot::Cer => self.cer_file.as_ref(),
            FileSlot::Key => self.key_file.as_ref(),
        }
    }

    fn file_mut(&mut self, slot: FileSlot) -> &mut Option<FileRef> {
        match slot {
            FileSlot::Txt => &mut self.txt_file,
            FileSlot::Cer => &mut self.cer_file,
            FileSlot::Key => &mut self.key_file,
        }
    }

    /// True when all five fields hold a value
    pub fn is_complete(&self) -> bool {
        self.start_period.is_some()
            && self.end_period.is_some()
            && FileSlot::ALL.iter().all(|slot| self.file(*slot).is_some())
    }

    /// Run every field rule and collect the failures
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = validate_period_range(self.start_period.as_ref(), self.end_period.as_ref());

        for slot in FileSlot::ALL {
            if let Err(message) = validate_file(slot, self.file(slot)) {
                errors.insert(Field::for_slot(slot), message);
            }
        }

        errors
    }
}

/// A form that passed every check, ready for processing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub start_period: Period,
    pub end_period: Period,
    pub txt_file: FileRef,
    pub cer_file: FileRef,
    pub key_file: FileRef,
}

/// Why a submission was not accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejection {
    /// A previous submission is still being processed
    InProgress,
    /// One or more fields failed validation
    Invalid(ValidationErrors),
}

/// Outcome of picking a file for a slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSelection {
    Accepted,
    /// Wrong extension; the slot was left empty
    Rejected(String),
}

/// The main form together with its error map and submission state
#[derive(Debug, Clone, Default)]
pub struct FormSession {
    state: FormState,
    errors: ValidationErrors,
    submitting: bool,
}

impl FormSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Submit is offered only for a complete form with no outstanding
    /// errors and nothing in flight
    pub fn can_submit(&self) -> bool {
        self.state.is_complete() && self.errors.is_empty() && !self.submitting
    }

    pub fn set_start_period(&mut self, period: Period) {
        self.state.start_period = Some(period);
        self.errors.remove(Field::StartDate);
        // The range error lives on the end field
        self.errors.remove(Field::EndDate);
    }

    pub fn set_end_period(&mut self, period: Period) {
        self.state.end_period = Some(period);
        self.errors.remove(Field::EndDate);
    }

    /// Place a picked file in its slot. A file with the wrong extension
    /// empties the slot and reports the required format.
    pub fn select_file(&mut self, slot: FileSlot, file: FileRef) -> FileSelection {
        let field = Field::for_slot(slot);

        if slot.accepts(&file) {
            *self.state.file_mut(slot) = Some(file);
            self.errors.remove(field);
            FileSelection::Accepted
        } else {
            let message = invalid_format_message(slot);
            *self.state.file_mut(slot) = None;
            self.errors.insert(field, message.clone());
            FileSelection::Rejected(message)
        }
    }

    pub fn remove_file(&mut self, slot: FileSlot) {
        *self.state.file_mut(slot) = None;
        self.errors.remove(Field::for_slot(slot));
    }

    /// Validate everything and, if clean, enter the submitting state
    pub fn begin_submission(&mut self) -> Result<Submission, SubmitRejection> {
        if self.submitting {
            return Err(SubmitRejection::InProgress);
        }

        self.errors = self.state.validate();
        if !self.errors.is_empty() {
            debug!(fields = ?self.errors.fields(), "Form validation failed");
            return Err(SubmitRejection::Invalid(self.errors.clone()));
        }

        let submission = match (
            self.state.start_period,
            self.state.end_period,
            self.state.txt_file.clone(),
            self.state.cer_file.clone(),
            self.state.key_file.clone(),
        ) {
            (Some(start_period), Some(end_period), Some(txt_file), Some(cer_file), Some(key_file)) => {
                Submission {
                    start_period,
                    end_period,
                    txt_file,
                    cer_file,
                    key_file,
                }
            }
            // validate() reports every missing field
            _ => return Err(SubmitRejection::Invalid(self.errors.clone())),
        };

        invariants::assert_submission_invariants(&submission);

        self.submitting = true;
        Ok(submission)
    }

    /// Finish a submission: all values and errors are discarded
    pub fn finish_submission(&mut self) {
        self.reset();
    }

    /// Discard everything (logout or successful submission)
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
