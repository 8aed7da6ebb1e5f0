//! Common error infrastructure for tally-core.
//!
//! Engine operations are total over valid input. The only failures are
//! references to entities that no longer exist, combat-only operations issued
//! outside combat, and id exhaustion. Every failing operation leaves the state
//! untouched, so callers may treat a recoverable error as a no-op.

/// Severity level of an error, used for logging and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The call was ignored and state is unchanged.
    ///
    /// Stale player id, joining combat when none is running.
    Recoverable,

    /// The engine cannot continue allocating entities.
    ///
    /// Id sequence exhausted.
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Fatal => "fatal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all tally-core errors.
///
/// - Use `#[derive(thiserror::Error)]` for the Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait CoreError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable identifier for this error variant, used in logs and tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
