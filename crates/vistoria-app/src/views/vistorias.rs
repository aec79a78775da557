//! # Inspections View State

use super::fetch::{reduce_fetch, FetchAction, FetchState};
use vistoria_core::Vistoria;

/// Inspections container.
pub type VistoriasState = FetchState<Vistoria>;

/// Transitions of the inspections container.
pub type VistoriasAction = FetchAction<Vistoria>;

#[must_use]
pub fn reduce_vistorias(state: VistoriasState, action: VistoriasAction) -> VistoriasState {
    reduce_fetch(state, action)
}

impl VistoriasState {
    /// Inspection with `id`, if fetched.
    #[must_use]
    pub fn find(&self, id: i64) -> Option<&Vistoria> {
        self.items.iter().find(|v| v.id == id)
    }
}
