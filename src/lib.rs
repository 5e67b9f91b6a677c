#![doc(test(attr(deny(warnings))))]

//! FinPlan turns recurring incomes and expenses into one monthly balance and
//! a simple long-range projection.

pub mod cli;
pub mod errors;
pub mod session;
pub mod utils;

pub use errors::{FinplanError, Result};
pub use session::FinanceSession;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing with `default_filter` unless `RUST_LOG` is set.
pub fn init(default_filter: &str) {
    INIT_TRACING.call_once(|| {
        utils::init_tracing(default_filter);
        tracing::debug!("FinPlan tracing initialized.");
    });
}
