//! Overlapping fetches: only the newest start may settle a container.

mod common;

use common::Harness;
use vistoria_app::Resource;
use vistoria_testkit::{client, sample_clients, sample_vistorias, MockGateway};

#[tokio::test]
async fn test_stale_response_is_dropped() {
    let h = Harness::new(MockGateway::new());
    let mut core = h.app.write().await;

    let first = core.begin_fetch(Resource::Clients);
    let second = core.begin_fetch(Resource::Clients);
    assert!(!core.is_current(first));

    assert!(core.settle_clients(second, Ok(sample_clients())));
    assert!(!core.settle_clients(first, Ok(vec![client(9, "Stale", "", "")])));

    let clients = &core.views().clients;
    assert_eq!(clients.items, sample_clients());
    assert!(!clients.is_loading);
}

#[tokio::test]
async fn test_late_failure_does_not_clobber_success() {
    let h = Harness::new(MockGateway::new());
    let mut core = h.app.write().await;

    let first = core.begin_fetch(Resource::Vistorias);
    let second = core.begin_fetch(Resource::Vistorias);
    assert!(core.settle_vistorias(second, Ok(sample_vistorias())));
    assert!(!core.settle_vistorias(first, Err("timeout".to_string())));

    let vistorias = &core.views().vistorias;
    assert_eq!(vistorias.error, None);
    assert_eq!(vistorias.items.len(), 2);
}

#[tokio::test]
async fn test_tickets_are_per_resource() {
    let h = Harness::new(MockGateway::new());
    let mut core = h.app.write().await;

    let clients = core.begin_fetch(Resource::Clients);
    let vistorias = core.begin_fetch(Resource::Vistorias);
    assert!(core.is_current(clients));
    assert!(core.is_current(vistorias));
    assert!(!core.settle_vistorias(clients, Ok(sample_vistorias())));
    assert!(core.views().vistorias.is_loading);
}

#[tokio::test]
async fn test_failure_keeps_previous_items() {
    let h = Harness::new(MockGateway::new());
    let mut core = h.app.write().await;

    let ticket = core.begin_fetch(Resource::Clients);
    core.settle_clients(ticket, Ok(sample_clients()));
    let synced = core.views().clients.last_sync;

    let ticket = core.begin_fetch(Resource::Clients);
    core.settle_clients(ticket, Err("offline".to_string()));

    let clients = &core.views().clients;
    assert_eq!(clients.items.len(), 2);
    assert_eq!(clients.error.as_deref(), Some("offline"));
    assert_eq!(clients.last_sync, synced);
}
