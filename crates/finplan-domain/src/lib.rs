//! finplan-domain
//!
//! Pure domain models (FinancialEntry, HouseholdSettings, Frequency, etc.).
//! No I/O, no CLI, no storage. Only data types and core enums.

pub mod common;
pub mod entry;
pub mod settings;

pub use common::*;
pub use entry::*;
pub use settings::*;
