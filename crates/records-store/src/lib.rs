//! Store access layer for the clinic record tools.
//!
//! Resolves connection settings, wraps the typed patient collection, and
//! builds the filter/update documents the tools send to MongoDB. Lookup by
//! registration id treats an absent patient as a normal outcome, not an
//! error.

pub mod error;
pub mod patients;
pub mod settings;

pub use error::{Result, StoreError};
pub use patients::PatientStore;
pub use settings::StoreSettings;

pub use records_core as core;
