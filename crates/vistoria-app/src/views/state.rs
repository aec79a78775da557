//! Aggregate view state.

use super::auth::{reduce_auth, AuthAction, AuthState};
use super::clients::{reduce_clients, ClientsAction, ClientsState};
use super::vistorias::{reduce_vistorias, VistoriasAction, VistoriasState};
use serde::{Deserialize, Serialize};

/// The three containers, owned by `AppCore`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub auth: AuthState,
    pub clients: ClientsState,
    pub vistorias: VistoriasState,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply_auth(&mut self, action: AuthAction) {
        self.auth = reduce_auth(std::mem::take(&mut self.auth), action);
    }

    pub fn apply_clients(&mut self, action: ClientsAction) {
        self.clients = reduce_clients(std::mem::take(&mut self.clients), action);
    }

    pub fn apply_vistorias(&mut self, action: VistoriasAction) {
        self.vistorias = reduce_vistorias(std::mem::take(&mut self.vistorias), action);
    }
}
