//! Common error infrastructure for planner-core.
//!
//! Domain-specific errors (`CatalogError`, `ReduceError`) live next to the
//! code that raises them. This module only provides the shared severity
//! classification so callers can decide what to surface and what to abort on.
//!
//! # Severity Classes
//!
//! - **Validation**: the caller asked for something the current build does not
//!   allow (a career of another character, a slot outside the loadout). The
//!   build is left untouched and the caller may continue.
//! - **Internal**: the reference data is inconsistent (missing talent tree,
//!   no eligible default item). Nothing the user does can fix it.
//! - **Fatal**: a programming error in the caller, such as dispatching an
//!   action kind the reducer does not know.

/// Severity level of an error, used for categorization and handling strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input, rejected without changing the build.
    ///
    /// Examples: career does not belong to the character, talent row out of range
    Validation,

    /// Reference data is internally inconsistent.
    ///
    /// Examples: talent tree index out of range, talent name not found
    Internal,

    /// Caller bug, must fail loudly.
    ///
    /// Examples: unhandled action kind, malformed action payload
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if the caller can keep going with the previous build.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Validation)
    }
}

/// Common trait for all planner-core errors.
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on who has to fix it, not on impact
pub trait PlannerError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
