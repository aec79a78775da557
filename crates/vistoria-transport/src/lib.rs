//! # Vistoria Transport
//!
//! Client side of the remote data gateway: a plain HTTPS JSON API over a
//! fixed base URL, plus the reachability probe screens use to decide whether
//! to show the offline banner.
//!
//! The [`Gateway`] and [`Reachability`] traits are the seams the application
//! core depends on; [`HttpGateway`] and [`HttpReachability`] are the
//! production implementations over `reqwest`.

pub mod error;
pub mod gateway;
pub mod http;
pub mod reachability;

pub use error::{GatewayError, GatewayResult};
pub use gateway::{paths, Gateway};
pub use http::{GatewayConfig, HttpGateway};
pub use reachability::{HttpReachability, Reachability};
