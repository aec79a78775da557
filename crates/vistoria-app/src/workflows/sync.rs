//! Sync Workflow - fetch lifecycle and connectivity
//!
//! Fetches dispatch `Start` under a ticket, release the lock while the
//! gateway call is in flight, then settle the container only if no newer
//! fetch for the same resource has started meanwhile.

use crate::core::{Resource, SharedApp};
use vistoria_core::{Anomalia, Client, Vistoria};
use vistoria_transport::GatewayResult;

/// Ask the reachability probe whether the gateway is reachable.
///
/// Advisory only: callers still attempt their requests when this is `false`.
pub async fn check_connectivity(app: &SharedApp) -> bool {
    let probe = app.read().await.reachability();
    let connected = probe.is_connected().await;
    if !connected {
        tracing::info!("gateway unreachable, showing offline banner");
    }
    connected
}

/// `GET /cliente/all` into the clients container.
pub async fn fetch_clients(app: &SharedApp) -> GatewayResult<Vec<Client>> {
    let (ticket, gateway) = {
        let mut core = app.write().await;
        (core.begin_fetch(Resource::Clients), core.gateway())
    };

    let result = gateway.list_clients().await;

    let mut core = app.write().await;
    match &result {
        Ok(items) => {
            tracing::info!(count = items.len(), "clients fetched");
            core.settle_clients(ticket, Ok(items.clone()));
        }
        Err(e) => {
            tracing::error!("failed to fetch clients: {e}");
            core.settle_clients(ticket, Err(e.to_string()));
        }
    }
    result
}

/// `GET /vistoria/all` into the inspections container.
pub async fn fetch_vistorias(app: &SharedApp) -> GatewayResult<Vec<Vistoria>> {
    let (ticket, gateway) = {
        let mut core = app.write().await;
        (core.begin_fetch(Resource::Vistorias), core.gateway())
    };

    let result = gateway.list_vistorias().await;

    let mut core = app.write().await;
    match &result {
        Ok(items) => {
            tracing::info!(count = items.len(), "vistorias fetched");
            core.settle_vistorias(ticket, Ok(items.clone()));
        }
        Err(e) => {
            tracing::error!("failed to fetch vistorias: {e}");
            core.settle_vistorias(ticket, Err(e.to_string()));
        }
    }
    result
}

/// Anomaly picker entries. A failure is logged and yields an empty list.
pub async fn load_anomalias(app: &SharedApp) -> Vec<Anomalia> {
    let gateway = app.read().await.gateway();
    match gateway.list_anomalias().await {
        Ok(anomalias) => anomalias,
        Err(e) => {
            tracing::warn!("failed to load anomalias: {e}");
            Vec::new()
        }
    }
}
