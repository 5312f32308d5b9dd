//! Common error infrastructure for combat-core.
//!
//! Two channels exist. Legality checks (`can_*`) never error and report
//! through [`crate::Outcome`]. Mutations return [`CombatError`] when invoked
//! without a satisfied precondition; that is a caller bug, not a game event,
//! and must not be retried with different arguments.

/// Severity level of an error, used for categorization and logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input data, e.g. a rule table with a zero level gap.
    ///
    /// Fix the input and try again.
    Validation,

    /// Programming error: a mutation was invoked without checking its
    /// precondition first.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error indicates a caller bug.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal)
    }
}

/// Common trait for all combat-core errors.
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity by who has to fix it, not by impact
pub trait RuleError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a stable identifier for this error variant.
    ///
    /// Useful for metrics and tests. Defaults to the type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Rejection of a damage or heal request.
///
/// The display text doubles as the failure message of the matching
/// [`crate::Outcome`], so a predicate and its mutation always agree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatError {
    /// Attacker and target are the same character.
    #[error("cannot target self")]
    SelfTarget,

    /// Attacker and target share a faction.
    #[error("cannot target an ally")]
    AllyTarget,

    /// Healer and target are different characters with no shared faction.
    #[error("can only heal self or ally")]
    NotSelfOrAlly,

    /// Heal target has no health left.
    #[error("cannot heal a dead target")]
    DeadTarget,
}

impl CombatError {
    /// Static message for this rejection, identical to its `Display` output.
    pub const fn message(&self) -> &'static str {
        match self {
            Self::SelfTarget => "cannot target self",
            Self::AllyTarget => "cannot target an ally",
            Self::NotSelfOrAlly => "can only heal self or ally",
            Self::DeadTarget => "cannot heal a dead target",
        }
    }
}

impl RuleError for CombatError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::SelfTarget => "COMBAT_SELF_TARGET",
            Self::AllyTarget => "COMBAT_ALLY_TARGET",
            Self::NotSelfOrAlly => "COMBAT_NOT_SELF_OR_ALLY",
            Self::DeadTarget => "COMBAT_DEAD_TARGET",
        }
    }
}
