use planner_core::{CatalogError, ErrorSeverity, PlannerError, ReduceError};

/// Errors surfaced by a [`crate::BuildSession`].
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Reduce(#[from] ReduceError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Action text was not a `{type, payload}` object.
    #[error("invalid action JSON: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("failed to serialize build: {0}")]
    Encode(#[source] serde_json::Error),
}

impl PlannerError for SessionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Reduce(err) => err.severity(),
            Self::Catalog(err) => err.severity(),
            Self::Decode(_) => ErrorSeverity::Fatal,
            Self::Encode(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Reduce(err) => err.error_code(),
            Self::Catalog(err) => err.error_code(),
            Self::Decode(_) => "SESSION_DECODE",
            Self::Encode(_) => "SESSION_ENCODE",
        }
    }
}
