#![doc(test(attr(deny(warnings))))]

//! cardcycle answers credit-card billing-cycle questions: which statement
//! period a date belongs to, when a purchase falls due, and which day is best
//! to buy on. The calculation lives in `cardcycle-core`; this crate is the
//! boundary that supplies "today", loads saved cards, and drives the CLI.

pub mod cli;
pub mod errors;
pub mod utils;

pub use cardcycle_config::{Config, ConfigManager};
pub use cardcycle_core::{BillingCalculator, Clock};
pub use cardcycle_domain::{CardConfiguration, Precision, Resolved};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("cardcycle tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
