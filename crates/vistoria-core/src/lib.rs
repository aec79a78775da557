//! # Vistoria Core
//!
//! Foundation types shared by every Vistoria crate:
//!
//! - [`model`]: clients, inspections ("vistorias"), anomalies and the
//!   request/response shapes exchanged with the gateway
//! - [`route`]: the navigation vocabulary used by screen controllers
//! - [`effects`]: platform capabilities (alerts, navigation, clock) that a
//!   frontend provides to the headless core
//! - [`errors`]: the categorized [`VistoriaError`]
//! - [`format`]: display helpers for timestamps, phones and photo counts
//!
//! This crate performs no I/O.

pub mod effects;
pub mod errors;
pub mod format;
pub mod model;
pub mod route;

pub use effects::{Alert, AlertEffects, AlertKind, ClockEffects, NavigationEffects, SystemClock};
pub use errors::{ErrorCategory, VistoriaError, VistoriaResult};
pub use model::{
    Anomalia, AuthUser, CategoriaInfo, CategoriaVistoria, Client, NewClient, Session, TipoInfo,
    TipoVistoria, Vistoria, VistoriaCreated, VistoriaRequest,
};
pub use route::Route;
