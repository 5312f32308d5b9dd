//! Combat rules for role-playing characters.
//!
//! `combat-core` defines how characters damage and heal one another: health
//! and death, the level-difference damage modifier, and faction allegiance
//! that decides who may harm or help whom. There is no I/O here; loaders for
//! data-driven rule tables live in `combat-content`.
//!
//! Callers follow a check-then-act contract: ask a `can_*` predicate for an
//! [`Outcome`], and only invoke the matching mutation when it succeeded. A
//! mutation invoked without a satisfied precondition returns a
//! [`CombatError`], which signals a caller bug rather than a game event.
pub mod character;
pub mod combat;
pub mod config;
pub mod error;
pub mod outcome;

pub use character::{Character, CharacterId, CharacterKind, Factions};
pub use combat::{DamageModifier, DamageReport, HealReport, round_percent};
pub use config::{CombatConfig, ConfigError};
pub use error::{CombatError, ErrorSeverity, RuleError};
pub use outcome::{Outcome, OutcomeError};
