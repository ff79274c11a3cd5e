//! cardcycle-core
//!
//! Billing-cycle arithmetic for credit cards.
//! Depends on cardcycle-domain. No CLI, no terminal I/O, no storage, no system clock.

pub mod anchored_day;
pub mod calculator;
pub mod error;
pub mod fallback;
pub mod time;
pub mod validation;

pub use calculator::BillingCalculator;
pub use error::CoreError;
pub use fallback::FallbackChain;
pub use time::{Clock, FixedClock};
pub use validation::validate_configuration;
