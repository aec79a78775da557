//! Gateway errors
//!
//! Distinguishes the outcomes the screens treat differently: no response at
//! all, a non-success status (optionally with a gateway-supplied `message`),
//! an undecodable body, and local failures preparing a photo upload.

use thiserror::Error;
use vistoria_core::VistoriaError;

/// Result alias for gateway calls.
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Failure of a single gateway request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The request never produced a response (DNS, TLS, timeout, refused).
    #[error("{method} {path} failed: {reason}")]
    Transport {
        method: &'static str,
        path: String,
        reason: String,
    },

    /// The gateway answered with a non-success status.
    #[error("{method} {path} returned {status}")]
    Status {
        method: &'static str,
        path: String,
        status: u16,
        message: Option<String>,
    },

    /// The response body did not match the expected shape.
    #[error("failed to decode response from {path}: {reason}")]
    Decode { path: String, reason: String },

    /// A photo could not be read or attached.
    #[error("failed to prepare photo {uri}: {reason}")]
    Photo { uri: String, reason: String },

    #[error("invalid gateway url: {0}")]
    InvalidUrl(String),
}

impl GatewayError {
    pub(crate) fn transport(method: &'static str, path: &str, err: &reqwest::Error) -> Self {
        Self::Transport {
            method,
            path: path.to_string(),
            reason: err.to_string(),
        }
    }

    /// Message supplied by the gateway in the error body, if any.
    #[must_use]
    pub fn gateway_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Whether the gateway produced a response.
    #[must_use]
    pub fn has_response(&self) -> bool {
        matches!(self, Self::Status { .. } | Self::Decode { .. })
    }

    /// Whether this failure came out of the HTTP exchange itself, as opposed
    /// to local preparation or configuration.
    #[must_use]
    pub fn is_http(&self) -> bool {
        matches!(
            self,
            Self::Transport { .. } | Self::Status { .. } | Self::Decode { .. }
        )
    }

    /// HTTP status, when the gateway answered.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<GatewayError> for VistoriaError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::Transport { .. } => VistoriaError::network(err.to_string()),
            GatewayError::Status {
                status, message, ..
            } => VistoriaError::Gateway { status, message },
            GatewayError::Decode { .. } | GatewayError::Photo { .. } => {
                VistoriaError::internal(err.to_string())
            }
            GatewayError::InvalidUrl(url) => VistoriaError::config(format!("invalid api url {url}")),
        }
    }
}
