//! # Workflows
//!
//! Multi-step operations shared by several screens. Workflows take the
//! shared [`SharedApp`](crate::SharedApp) handle, dispatch into the view
//! state and return gateway results; presenting failures is left to the
//! calling screen.

pub mod sync;

pub use sync::{check_connectivity, fetch_clients, fetch_vistorias, load_anomalias};

use vistoria_transport::GatewayError;

/// Fallback when the gateway gave no `message`.
pub const UNKNOWN_ERROR: &str = "Erro desconhecido";

/// Gateway-supplied message, or [`UNKNOWN_ERROR`].
#[must_use]
pub fn gateway_message_or_unknown(err: &GatewayError) -> &str {
    err.gateway_message().unwrap_or(UNKNOWN_ERROR)
}
