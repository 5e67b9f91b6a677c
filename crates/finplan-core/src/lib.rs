//! finplan-core
//!
//! Monthly normalization engine and services for FinPlan.
//! Depends on finplan-domain. No CLI, no terminal I/O, no direct storage interactions.

pub mod aggregate;
pub mod balance;
pub mod entry_service;
pub mod error;
pub mod household;
pub mod normalizer;
pub mod projection;
pub mod settings_service;
pub mod storage;
pub mod summary_service;

pub use aggregate::*;
pub use balance::*;
pub use entry_service::*;
pub use error::CoreError;
pub use household::*;
pub use normalizer::*;
pub use projection::*;
pub use settings_service::*;
pub use summary_service::*;

#[cfg(test)]
mod tests;
