//! cardcycle-domain
//!
//! Pure domain models for credit-card billing cycles (card configuration,
//! billing periods, launch previews, validation reports).
//! No I/O, no CLI, no storage. Only data types and core enums.

pub mod billing;
pub mod card;
pub mod common;
pub mod precision;
pub mod validation;

pub use billing::*;
pub use card::*;
pub use common::*;
pub use precision::*;
pub use validation::*;
