//! Categorized application errors
//!
//! Provides structured error types that enable:
//! - Categorized error handling (input vs network vs gateway vs storage)
//! - Appropriate alert routing
//! - Recovery hints for user-actionable errors

use std::fmt;
use thiserror::Error;

// ============================================================================
// Error Categories
// ============================================================================

/// High-level error categories for frontend error handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Local validation errors (correctable by user)
    Input,
    /// Configuration errors (correctable by modifying settings)
    Config,
    /// Authentication failures
    Auth,
    /// Resource not found
    NotFound,
    /// No response from the gateway (often transient)
    Network,
    /// Gateway answered with a non-success status
    Gateway,
    /// Local database failures
    Storage,
    /// General operation failures (catch-all)
    Internal,
}

impl ErrorCategory {
    /// Check if this error category is user-correctable.
    #[must_use]
    pub fn is_user_correctable(&self) -> bool {
        matches!(self, Self::Input | Self::Config | Self::Auth)
    }

    /// Check if this error category is likely transient.
    ///
    /// Transient errors may resolve on a manual retry; nothing retries
    /// automatically.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Network | Self::Gateway)
    }

    /// Get a short label for this category.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Input => "Input",
            Self::Config => "Config",
            Self::Auth => "Auth",
            Self::NotFound => "Not Found",
            Self::Network => "Network",
            Self::Gateway => "Gateway",
            Self::Storage => "Storage",
            Self::Internal => "Internal",
        }
    }

    /// Get a hint for the user on how to resolve this category of error.
    #[must_use]
    pub fn resolution_hint(&self) -> &'static str {
        match self {
            Self::Input => "Check your input and try again",
            Self::Config => "Review your configuration settings",
            Self::Auth => "Check your credentials and sign in again",
            Self::NotFound => "The requested record could not be found",
            Self::Network => "Check your network connection and retry",
            Self::Gateway => "The server rejected the request, retry later",
            Self::Storage => "The local database could not be opened",
            Self::Internal => "An unexpected error occurred",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ============================================================================
// VistoriaError
// ============================================================================

/// Shared error type for the headless core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VistoriaError {
    #[error("invalid input: {0}")]
    Input(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },

    #[error("network error: {0}")]
    Network(String),

    /// Non-success status; `message` is the gateway-supplied text when present.
    #[error("gateway returned {status}{}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Gateway { status: u16, message: Option<String> },

    #[error("storage error: {0}")]
    Storage(String),

    #[error("internal error: {0}")]
    Internal(String),
}

/// Result alias for fallible core operations.
pub type VistoriaResult<T> = Result<T, VistoriaError>;

impl VistoriaError {
    pub fn input(message: impl Into<String>) -> Self {
        Self::Input(message.into())
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn not_found(entity: &'static str, id: impl fmt::Display) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// Category of this error.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Input(_) => ErrorCategory::Input,
            Self::Config(_) => ErrorCategory::Config,
            Self::Auth(_) => ErrorCategory::Auth,
            Self::NotFound { .. } => ErrorCategory::NotFound,
            Self::Network(_) => ErrorCategory::Network,
            Self::Gateway { .. } => ErrorCategory::Gateway,
            Self::Storage(_) => ErrorCategory::Storage,
            Self::Internal(_) => ErrorCategory::Internal,
        }
    }

    /// Message supplied by the gateway in an error response body, if any.
    #[must_use]
    pub fn gateway_message(&self) -> Option<&str> {
        match self {
            Self::Gateway { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Whether the gateway produced a response at all.
    #[must_use]
    pub fn has_response(&self) -> bool {
        matches!(self, Self::Gateway { .. })
    }
}
