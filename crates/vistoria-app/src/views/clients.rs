//! # Clients View State

use super::fetch::{reduce_fetch, FetchAction, FetchState};
use vistoria_core::Client;

/// Clients container.
pub type ClientsState = FetchState<Client>;

/// Transitions of the clients container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientsAction {
    Fetch(FetchAction<Client>),
    /// Replace the collection without touching `is_loading`, `error` or
    /// `last_sync`.
    UpdateLocal(Vec<Client>),
}

impl From<FetchAction<Client>> for ClientsAction {
    fn from(action: FetchAction<Client>) -> Self {
        Self::Fetch(action)
    }
}

#[must_use]
pub fn reduce_clients(state: ClientsState, action: ClientsAction) -> ClientsState {
    match action {
        ClientsAction::Fetch(action) => reduce_fetch(state, action),
        ClientsAction::UpdateLocal(items) => ClientsState { items, ..state },
    }
}
