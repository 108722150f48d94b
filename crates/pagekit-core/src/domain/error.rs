use thiserror::Error;

use crate::domain::Variant;
use crate::error::ErrorCategory;

/// Errors raised while turning user input into domain values.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("unknown template variant '{input}'")]
    UnknownVariant { input: String },

    #[error("unknown template kind '{input}'")]
    UnknownTemplateKind { input: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownVariant { .. } => {
                let mut out = vec!["Supported variants:".to_string()];
                out.extend(Variant::ALL.iter().map(|v| format!("  • {v}")));
                out.push("Try: pagekit list".into());
                out
            }
            Self::UnknownTemplateKind { .. } => vec![
                "Supported template kinds:".into(),
                "  • title".into(),
                "  • page".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Validation
    }
}
