//! Application layer errors.

use thiserror::Error;

use crate::domain::Variant;
use crate::error::ErrorCategory;

/// Errors that occur while wiring factories to clients.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// No factory is registered for the requested variant.
    #[error("No template factory registered for variant '{variant}'")]
    FactoryNotRegistered { variant: Variant },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FactoryNotRegistered { variant } => vec![
                format!("The '{}' family is not available in this build", variant.display_name()),
                "Try: pagekit list to see registered variants".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FactoryNotRegistered { .. } => ErrorCategory::NotFound,
        }
    }
}
