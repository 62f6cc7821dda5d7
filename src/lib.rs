#![doc(test(attr(deny(warnings))))]

//! Tally Core offers the finance-tracking primitives behind the Tally dashboard:
//! transaction records, a closed category set, and the monthly aggregation
//! pipeline that feeds its charts.

pub mod domain;
pub mod errors;
pub mod format;
pub mod report;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Tally Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
