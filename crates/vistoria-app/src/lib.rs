//! # Vistoria App
//!
//! Headless application core for the field-inspection client. Frontends
//! render; this crate decides.
//!
//! ```text
//! Screen controller ──▶ workflow ──▶ Gateway / Reachability
//!        │                  │
//!        ▼                  ▼
//!  local form state    AppCore::dispatch_* ──▶ pure reducers ──▶ ViewState
//! ```
//!
//! - [`views`]: the auth, clients and inspections containers and their
//!   reducers
//! - [`core`]: [`AppCore`], the composition root owning state and services
//! - [`workflows`]: multi-step operations shared by screens
//! - [`forms`]: field errors, pickers and the transient success banner
//! - [`screens`]: one controller per screen
//!
//! All shared state lives behind `Arc<RwLock<AppCore>>`; locks are never
//! held across a gateway call.

pub mod auth;
pub mod config;
pub mod core;
pub mod filter;
pub mod forms;
pub mod screens;
pub mod views;
pub mod workflows;

pub use crate::auth::{CredentialVerifier, MockCredentialVerifier};
pub use crate::config::{AppConfig, ConfigSource};
pub use crate::core::{AppCore, AppEffects, AppServices, FetchTicket, Resource, SharedApp};
pub use crate::views::{
    AuthAction, AuthState, ClientsAction, ClientsState, FetchAction, FetchState, ViewState,
    VistoriasAction, VistoriasState,
};
