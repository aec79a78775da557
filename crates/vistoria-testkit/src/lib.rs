//! Vistoria Testing Infrastructure
//!
//! Doubles for every seam the application core depends on, plus canned
//! gateway payloads.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! vistoria-testkit = { workspace = true }
//! ```
//!
//! ```rust,ignore
//! use vistoria_testkit::*;
//!
//! let gateway = MockGateway::new().with_clients(sample_clients());
//! let alerts = RecordingAlerts::default();
//! ```

pub mod effects;
pub mod fixtures;
pub mod gateway;

pub use effects::{ManualClock, NavEvent, RecordingAlerts, RecordingNavigator, StaticReachability};
pub use fixtures::*;
pub use gateway::{GatewayCall, MockGateway};
