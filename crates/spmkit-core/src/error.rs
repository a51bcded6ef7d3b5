//! Unified error type for spmkit core.
//!
//! Domain and application errors both surface as [`SpmkitError`]; callers
//! match on [`SpmkitError::category`] rather than on individual variants.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

#[derive(Debug, Error, Clone)]
pub enum SpmkitError {
    /// Invalid names or malformed generated structures.
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Filesystem, external command and author lookup failures.
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl SpmkitError {
    /// Things the user can try next.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Coarse classification used by front ends to pick an exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The request itself is wrong.
    Validation,
    /// The environment is missing something the user must set up.
    Configuration,
    /// I/O, external tools, or a bug.
    Internal,
}

pub type SpmkitResult<T> = Result<T, SpmkitError>;
