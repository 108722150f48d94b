//! Unified error handling for pagekit Core.
//!
//! Template operations themselves never fail. The errors here come from the
//! edges: parsing user-supplied names and looking up registered factories.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for pagekit Core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PagekitError {
    /// Errors from the domain layer (unknown names).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (factory lookup).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

impl PagekitError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
}

/// Convenient result type alias.
pub type PagekitResult<T> = Result<T, PagekitError>;
