//! Damage scaling and the reports returned by applied effects.
//!
//! All arithmetic is integer-only so results are identical on every
//! platform.

pub mod damage;
pub mod report;

pub use damage::{DamageModifier, round_percent};
pub use report::{DamageReport, HealReport};
