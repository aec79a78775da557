//! # Core Application Module
//!
//! - [`AppCore`]: the composition root
//! - [`AppServices`] / [`AppEffects`]: what a frontend injects
//! - [`FetchTicket`]: sequencing token for overlapping fetches

mod app;
mod tickets;

pub use app::{AppCore, AppEffects, AppServices, SharedApp};
pub use tickets::{FetchTicket, Resource};
