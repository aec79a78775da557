//! Client-side list search.
//!
//! Case-insensitive substring match over already-fetched items. Clients match
//! on name, email and phone; inspections on observation, anomaly name and
//! category description. An empty query keeps everything.

use vistoria_core::{Client, Vistoria};

fn contains(haystack: &str, needle: &str) -> bool {
    !haystack.is_empty() && haystack.to_lowercase().contains(needle)
}

#[must_use]
pub fn client_matches(client: &Client, query: &str) -> bool {
    let needle = query.to_lowercase();
    client.nome.to_lowercase().contains(&needle)
        || contains(&client.email, &needle)
        || contains(&client.telefone, &needle)
}

#[must_use]
pub fn vistoria_matches(vistoria: &Vistoria, query: &str) -> bool {
    let needle = query.to_lowercase();
    contains(vistoria.observacao(), &needle)
        || vistoria
            .anomalia_nome()
            .is_some_and(|nome| contains(nome, &needle))
        || vistoria
            .categoria_descricao()
            .is_some_and(|descricao| contains(descricao, &needle))
}

/// Clients matching `query`, in their original order.
#[must_use]
pub fn filter_clients(clients: &[Client], query: &str) -> Vec<Client> {
    if query.is_empty() {
        return clients.to_vec();
    }
    clients
        .iter()
        .filter(|c| client_matches(c, query))
        .cloned()
        .collect()
}

/// Inspections matching `query`, in their original order.
#[must_use]
pub fn filter_vistorias(vistorias: &[Vistoria], query: &str) -> Vec<Vistoria> {
    if query.is_empty() {
        return vistorias.to_vec();
    }
    vistorias
        .iter()
        .filter(|v| vistoria_matches(v, query))
        .cloned()
        .collect()
}
