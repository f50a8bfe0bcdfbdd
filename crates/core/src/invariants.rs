//! Developer guardrails and invariants
//!
//! Debug assertions for detecting impossible states during development.
//! These checks are compiled out in release builds.

use crate::form::Submission;
use crate::models::{FileSlot, Period};

/// Validate that a period's month is in range
pub fn assert_period_invariants(period: &Period) {
    debug_assert!(
        (1..=12).contains(&period.month()),
        "Period {:?} has month outside 1..=12",
        period
    );
}

/// Validate that an accepted submission satisfies every field rule
pub fn assert_submission_invariants(submission: &Submission) {
    assert_period_invariants(&submission.start_period);
    assert_period_invariants(&submission.end_period);

    debug_assert!(
        submission.end_period.is_after(&submission.start_period),
        "Submission end {} is not after start {}",
        submission.end_period,
        submission.start_period
    );

    for (slot, file) in [
        (FileSlot::Txt, &submission.txt_file),
        (FileSlot::Cer, &submission.cer_file),
        (FileSlot::Key, &submission.key_file),
    ] {
        debug_assert!(
            slot.accepts(file),
            "Submission slot {} holds {} which cannot be accepted",
            slot,
            file.name
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FileRef;

    fn make_submission() -> Submission {
        Submission {
            start_period: Period::new(1, 2024).unwrap(),
            end_period: Period::new(2, 2024).unwrap(),
            txt_file: FileRef::new("a.txt", 1),
            cer_file: FileRef::new("a.cer", 1),
            key_file: FileRef::new("a.key", 1),
        }
    }

    #[test]
    fn test_valid_submission() {
        assert_submission_invariants(&make_submission());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "is not after start")]
    fn test_reversed_range_panics() {
        let mut submission = make_submission();
        submission.end_period = Period::new(12, 2023).unwrap();
        assert_submission_invariants(&submission);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "cannot be accepted")]
    fn test_mistyped_slot_panics() {
        let mut submission = make_submission();
        submission.key_file = FileRef::new("a.pem", 1);
        assert_submission_invariants(&submission);
    }
}
