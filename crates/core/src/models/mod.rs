//! Data models for Filegate

mod credentials;
mod file_ref;
mod period;

pub use credentials::*;
pub use file_ref::*;
pub use period::*;
