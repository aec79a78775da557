//! Shared list: fetch, filter, offline banner and tab switching.

mod common;

use common::Harness;
use vistoria_app::screens::shared_list::OFFLINE_BANNER;
use vistoria_app::screens::{ListTab, SharedListScreen};
use vistoria_core::Route;
use vistoria_testkit::{sample_clients, sample_vistorias, GatewayCall, MockGateway};

fn seeded() -> MockGateway {
    MockGateway::new()
        .with_clients(sample_clients())
        .with_vistorias(sample_vistorias())
}

#[tokio::test]
async fn test_mount_loads_clients_tab() {
    let h = Harness::new(seeded());
    let mut screen = SharedListScreen::new(h.app.clone());
    screen.mount().await;

    assert_eq!(screen.tab(), ListTab::Clients);
    assert!(!screen.is_loading());
    assert_eq!(screen.offline_banner(), None);
    assert_eq!(screen.visible_clients().await.len(), 2);
    assert_eq!(h.gateway.calls(), vec![GatewayCall::ListClients]);

    let core = h.app.read().await;
    assert!(core.views().clients.last_sync.is_some());
    assert_eq!(core.views().clients.error, None);
}

#[tokio::test]
async fn test_search_filters_clients_case_insensitively() {
    let h = Harness::new(seeded());
    let mut screen = SharedListScreen::new(h.app.clone());
    screen.mount().await;

    screen.set_query("jane");
    let visible = screen.visible_clients().await;
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].nome, "Jane Smith");

    screen.set_query("");
    assert_eq!(screen.visible_clients().await.len(), 2);
}

#[tokio::test]
async fn test_query_typed_before_fetch_applies_to_results() {
    let h = Harness::new(seeded());
    let mut screen = SharedListScreen::new(h.app.clone());
    screen.set_query("987654321");
    screen.mount().await;

    let visible = screen.visible_clients().await;
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, 2);
}

#[tokio::test]
async fn test_no_match_shows_search_empty_text() {
    let h = Harness::new(seeded());
    let mut screen = SharedListScreen::new(h.app.clone());
    screen.mount().await;
    screen.set_query("zzz");

    assert!(screen.visible_clients().await.is_empty());
    assert_eq!(screen.empty_text(), "Nenhum cliente encontrado");
}

#[tokio::test]
async fn test_fetch_failure_alerts_and_records_error() {
    let gateway = seeded();
    gateway.fail_list_clients(Some(MockGateway::status_error(
        "GET",
        "/cliente/all",
        500,
        None,
    )));
    let h = Harness::new(gateway);
    let mut screen = SharedListScreen::new(h.app.clone());
    screen.mount().await;

    assert_eq!(
        h.alerts.messages(),
        vec!["Não foi possível carregar os clients".to_string()]
    );
    assert!(!screen.is_loading());
    let core = h.app.read().await;
    assert!(core.views().clients.error.is_some());
    assert!(!core.views().clients.is_loading);
    assert!(core.views().clients.items.is_empty());
}

#[tokio::test]
async fn test_offline_banner_is_advisory() {
    let h = Harness::new(seeded());
    h.reachability.set_connected(false);
    let mut screen = SharedListScreen::new(h.app.clone());
    screen.mount().await;

    assert!(screen.is_offline());
    assert_eq!(screen.offline_banner(), Some(OFFLINE_BANNER));
    // The fetch still runs while offline.
    assert_eq!(screen.visible_clients().await.len(), 2);
}

#[tokio::test]
async fn test_tab_switch_fetches_inspections_once() {
    let h = Harness::new(seeded());
    let mut screen = SharedListScreen::new(h.app.clone());
    screen.mount().await;

    screen.select_tab(ListTab::Vistorias).await;
    screen.select_tab(ListTab::Vistorias).await;

    assert_eq!(
        h.gateway.call_count(|c| matches!(c, GatewayCall::ListVistorias)),
        1
    );
    let rows = screen.vistoria_rows().await;
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].anomalia.as_deref(), Some("Fissura"));

    screen.set_query("norte");
    let visible = screen.visible_vistorias().await;
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, 124);
}

#[tokio::test]
async fn test_inspection_failure_names_the_tab() {
    let gateway = seeded();
    gateway.fail_list_vistorias(Some(MockGateway::transport_error("GET", "/vistoria/all")));
    let h = Harness::new(gateway);
    let mut screen = SharedListScreen::new(h.app.clone());
    screen.mount().await;
    screen.select_tab(ListTab::Vistorias).await;

    assert_eq!(
        h.alerts.messages(),
        vec!["Não foi possível carregar os vistorias".to_string()]
    );
    assert_eq!(screen.empty_text(), "Nenhuma vistoria cadastrada");
}

#[tokio::test]
async fn test_refresh_refetches_active_tab() {
    let h = Harness::new(seeded());
    let mut screen = SharedListScreen::new(h.app.clone());
    screen.mount().await;
    screen.refresh().await;

    assert!(!screen.is_refreshing());
    assert_eq!(h.gateway.call_count(|c| matches!(c, GatewayCall::ListClients)), 2);
}

#[tokio::test]
async fn test_open_actions_navigate() {
    let h = Harness::new(seeded());
    let screen = SharedListScreen::new(h.app.clone());
    screen.open_vistoria(123).await;
    screen.open_new_client().await;
    screen.open_new_vistoria().await;

    assert_eq!(
        h.navigator.routes(),
        vec![
            Route::DetalhesVistoria { vistoria_id: 123 },
            Route::NovoCliente,
            Route::NovaVistoria
        ]
    );
}
