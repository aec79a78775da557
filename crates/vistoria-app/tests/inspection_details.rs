//! Inspection details: load, edit, cancel, save and the success banner.

mod common;

use chrono::Duration;
use common::Harness;
use vistoria_app::screens::inspection_details::{LOAD_FAILED, UPDATE_SUCCEEDED};
use vistoria_app::screens::{DetailMode, InspectionDetailsScreen};
use vistoria_core::{AlertKind, CategoriaVistoria};
use vistoria_testkit::{sample_anomalias, sample_vistorias, GatewayCall, MockGateway, NavEvent};

fn seeded() -> MockGateway {
    MockGateway::new()
        .with_vistorias(sample_vistorias())
        .with_anomalias(sample_anomalias())
}

async fn mounted(h: &Harness, id: i64) -> InspectionDetailsScreen {
    let mut screen = InspectionDetailsScreen::new(h.app.clone(), id).await;
    screen.mount().await;
    screen
}

fn put_count(h: &Harness) -> usize {
    h.gateway
        .call_count(|c| matches!(c, GatewayCall::UpdateVistoria { .. }))
}

#[tokio::test]
async fn test_mount_shows_record() {
    let h = Harness::new(seeded());
    let screen = mounted(&h, 123).await;

    assert!(!screen.is_loading());
    assert_eq!(screen.mode(), DetailMode::Viewing);
    assert_eq!(screen.observacao(), "Teste");
    assert_eq!(screen.date_label().as_deref(), Some("17/03/24 10:00"));
    assert_eq!(screen.anomalias().len(), 3);
    assert!(h.alerts.is_empty());

    // The lookup goes through the shared inspections container.
    assert_eq!(h.app.read().await.views().vistorias.items.len(), 2);
}

#[tokio::test]
async fn test_unknown_id_alerts_and_goes_back() {
    let h = Harness::new(seeded());
    let screen = mounted(&h, 999).await;

    assert!(screen.vistoria().is_none());
    let last = h.alerts.last().unwrap();
    assert_eq!(last.kind, AlertKind::Error);
    assert_eq!(last.message, LOAD_FAILED);
    assert_eq!(h.navigator.events(), vec![NavEvent::Back]);
    assert!(screen.anomalias().is_empty());
    assert_eq!(h.gateway.call_count(|c| matches!(c, GatewayCall::ListAnomalias)), 0);
}

#[tokio::test]
async fn test_fetch_failure_alerts_and_goes_back() {
    let gateway = seeded();
    gateway.fail_list_vistorias(Some(MockGateway::transport_error("GET", "/vistoria/all")));
    let h = Harness::new(gateway);
    mounted(&h, 123).await;

    assert_eq!(h.alerts.messages(), vec![LOAD_FAILED.to_string()]);
    assert_eq!(h.navigator.back_count(), 1);
    assert_eq!(h.gateway.call_count(|c| matches!(c, GatewayCall::ListAnomalias)), 0);
}

#[tokio::test]
async fn test_cancel_restores_observation() {
    let h = Harness::new(seeded());
    let mut screen = mounted(&h, 123).await;

    screen.start_editing();
    screen.set_observacao("Rascunho");
    assert_eq!(screen.observacao(), "Rascunho");

    screen.cancel_editing();
    assert_eq!(screen.mode(), DetailMode::Viewing);
    assert_eq!(screen.observacao(), "Teste");
    assert_eq!(screen.buffer().map(|b| b.observacao.as_str()), Some("Teste"));
    assert_eq!(put_count(&h), 0);
}

#[tokio::test]
async fn test_edits_ignored_outside_editing() {
    let h = Harness::new(seeded());
    let mut screen = mounted(&h, 123).await;

    screen.set_observacao("ignored");
    assert_eq!(screen.observacao(), "Teste");
    assert!(!screen.save().await);
    assert_eq!(put_count(&h), 0);
}

#[tokio::test]
async fn test_save_puts_once_and_shows_banner() {
    let h = Harness::new(seeded());
    let mut screen = mounted(&h, 123).await;

    screen.start_editing();
    screen.set_observacao("Nova observação");
    screen.select_categoria(CategoriaVistoria::Alta);
    assert!(screen.save().await);

    assert_eq!(put_count(&h), 1);
    let request = h
        .gateway
        .calls()
        .into_iter()
        .find_map(|c| match c {
            GatewayCall::UpdateVistoria {
                vistoria_id,
                request,
            } => Some((vistoria_id, request)),
            _ => None,
        })
        .unwrap();
    assert_eq!(request.0, 123);
    assert_eq!(request.1.observacao, "Nova observação");
    assert_eq!(request.1.categoria, CategoriaVistoria::Alta);
    assert_eq!(request.1.data_hora, "2024-03-17T10:00:00");

    assert_eq!(screen.mode(), DetailMode::Viewing);
    assert_eq!(screen.observacao(), "Nova observação");
    assert_eq!(screen.success_banner().await, Some(UPDATE_SUCCEEDED));

    h.clock.advance(Duration::milliseconds(2999));
    assert_eq!(screen.success_banner().await, Some(UPDATE_SUCCEEDED));
    h.clock.advance(Duration::milliseconds(1));
    assert_eq!(screen.success_banner().await, None);
}

#[tokio::test]
async fn test_save_failure_stays_editing() {
    let gateway = seeded();
    gateway.fail_update(Some(MockGateway::status_error(
        "PUT",
        "/vistoria/123",
        422,
        Some("Observação muito longa"),
    )));
    let h = Harness::new(gateway);
    let mut screen = mounted(&h, 123).await;

    screen.start_editing();
    screen.set_observacao("Texto");
    assert!(!screen.save().await);

    assert_eq!(screen.mode(), DetailMode::Editing);
    assert_eq!(screen.observacao(), "Texto");
    assert_eq!(
        h.alerts.messages(),
        vec!["Não foi possível atualizar a vistoria: Observação muito longa".to_string()]
    );
    assert_eq!(screen.success_banner().await, None);
}

#[tokio::test]
async fn test_selecting_anomaly_flags_inspection() {
    let h = Harness::new(seeded());
    let mut screen = mounted(&h, 123).await;

    screen.start_editing();
    screen.select_anomalia(3);
    let buffer = screen.buffer().unwrap();
    assert!(buffer.contem_anomalia);
    assert_eq!(buffer.anomalia_id, Some(3));

    assert!(screen.save().await);
    let stored = h.gateway.vistorias().into_iter().find(|v| v.id == 123).unwrap();
    assert_eq!(stored.anomalia_nome(), Some("Corrosão"));
    assert!(screen.vistoria().unwrap().contem_anomalia);
}
