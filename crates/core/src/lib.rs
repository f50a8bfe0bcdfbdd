//! Filegate Core Library
//!
//! Login gate, period and file validation rules, and the form submission
//! gate for the Filegate upload form.

pub mod auth;
pub mod config;
pub mod error;
pub mod form;
pub mod invariants;
pub mod models;
pub mod picker;
pub mod validation;

pub use auth::{authenticate, validate_login_input};
pub use config::AppConfig;
pub use error::{Error, Result};
pub use form::{FileSelection, FormSession, FormState, Submission, SubmitRejection};
pub use models::*;
pub use picker::PeriodPicker;
pub use validation::{Field, ValidationErrors};
