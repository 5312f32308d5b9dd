//! Success/failure value returned by legality checks.

use std::borrow::Cow;

use crate::error::CombatError;

/// Result of a "may I do this?" check.
///
/// Built only through [`Outcome::success`], [`Outcome::failure`] and
/// [`Outcome::failure_without_message`]; a success never carries a message.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Outcome {
    succeeded: bool,
    message: Option<Cow<'static, str>>,
}

impl Outcome {
    pub const fn success() -> Self {
        Self {
            succeeded: true,
            message: None,
        }
    }

    pub fn failure(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            succeeded: false,
            message: Some(message.into()),
        }
    }

    pub const fn failure_without_message() -> Self {
        Self {
            succeeded: false,
            message: None,
        }
    }

    #[inline]
    pub const fn succeeded(&self) -> bool {
        self.succeeded
    }

    #[inline]
    pub const fn failed(&self) -> bool {
        !self.succeeded
    }

    /// Failure reason, if one was given.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Runs `f` when this outcome failed, then hands the outcome back.
    pub fn on_failure(self, f: impl FnOnce(&Self)) -> Self {
        if self.failed() {
            f(&self);
        }
        self
    }

    /// Runs `f` when this outcome succeeded, then hands the outcome back.
    pub fn on_success(self, f: impl FnOnce(&Self)) -> Self {
        if self.succeeded() {
            f(&self);
        }
        self
    }

    /// Converts into a `Result` so failures can be propagated with `?`.
    pub fn into_result(self) -> Result<(), OutcomeError> {
        if self.succeeded {
            Ok(())
        } else {
            Err(OutcomeError {
                message: self.message,
            })
        }
    }
}

impl From<Result<(), CombatError>> for Outcome {
    fn from(result: Result<(), CombatError>) -> Self {
        match result {
            Ok(()) => Self::success(),
            Err(err) => Self::failure(err.message()),
        }
    }
}

/// A failed [`Outcome`] lifted into the error channel.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{}", .message.as_deref().unwrap_or("outcome failed"))]
pub struct OutcomeError {
    message: Option<Cow<'static, str>>,
}

impl OutcomeError {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
