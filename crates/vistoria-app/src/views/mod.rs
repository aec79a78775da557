//! # View State Module
//!
//! The auth, clients and inspections containers. Each is a plain value
//! mutated only through its reducer.

mod state;

pub mod auth;
pub mod clients;
pub mod fetch;
pub mod vistorias;

pub use state::ViewState;

pub use auth::{reduce_auth, AuthAction, AuthState};
pub use clients::{reduce_clients, ClientsAction, ClientsState};
pub use fetch::{next_sync_stamp, reduce_fetch, FetchAction, FetchState};
pub use vistorias::{reduce_vistorias, VistoriasAction, VistoriasState};
