mod common;

use common::Harness;
use vistoria_app::screens::new_client::{CLIENT_CREATED, CLIENT_CREATE_FAILED, FORM_HAS_ERRORS};
use vistoria_app::screens::{ClientField, ClientSubmitOutcome, NewClientScreen};
use vistoria_core::{AlertKind, NewClient};
use vistoria_testkit::{GatewayCall, MockGateway, NavEvent};

#[tokio::test]
async fn test_empty_form_shows_three_errors_and_posts_nothing() {
    let h = Harness::new(MockGateway::new());
    let mut screen = NewClientScreen::new(h.app.clone());

    assert_eq!(screen.submit().await, ClientSubmitOutcome::Invalid);
    assert_eq!(screen.errors().len(), 3);
    assert_eq!(h.alerts.messages(), vec![FORM_HAS_ERRORS.to_string()]);
    assert!(h.gateway.calls().is_empty());
}

#[tokio::test]
async fn test_editing_a_field_clears_its_error() {
    let h = Harness::new(MockGateway::new());
    let mut screen = NewClientScreen::new(h.app.clone());
    screen.submit().await;

    screen.set_nome("Maria");
    assert_eq!(screen.errors().get(ClientField::Nome), None);
    assert_eq!(screen.errors().len(), 2);
}

#[tokio::test]
async fn test_phone_is_masked_while_typing() {
    let h = Harness::new(MockGateway::new());
    let mut screen = NewClientScreen::new(h.app.clone());
    screen.set_telefone("11987654321");
    assert_eq!(screen.telefone(), "(11) 98765-4321");
}

#[tokio::test]
async fn test_valid_client_posts_digits_and_goes_back() {
    let h = Harness::new(MockGateway::new());
    let mut screen = NewClientScreen::new(h.app.clone());
    screen.set_nome("Maria Silva");
    screen.set_email("maria@example.com");
    screen.set_telefone("(11) 98765-4321");

    assert_eq!(screen.submit().await, ClientSubmitOutcome::Created);
    assert!(!screen.is_submitting());
    assert_eq!(
        h.gateway.calls(),
        vec![GatewayCall::CreateClient(NewClient {
            nome: "Maria Silva".to_string(),
            email: "maria@example.com".to_string(),
            telefone: "11987654321".to_string(),
        })]
    );
    let last = h.alerts.last().unwrap();
    assert_eq!(last.kind, AlertKind::Success);
    assert_eq!(last.message, CLIENT_CREATED);
    assert_eq!(h.navigator.events(), vec![NavEvent::Back]);
}

#[tokio::test]
async fn test_gateway_failure_keeps_screen_open() {
    let gateway = MockGateway::new();
    gateway.fail_create_client(Some(MockGateway::status_error("POST", "/cliente", 400, Some("duplicado"))));
    let h = Harness::new(gateway);
    let mut screen = NewClientScreen::new(h.app.clone());
    screen.set_nome("Maria Silva");
    screen.set_email("maria@example.com");
    screen.set_telefone("1198765432");

    assert_eq!(screen.submit().await, ClientSubmitOutcome::Failed);
    assert_eq!(h.alerts.messages(), vec![CLIENT_CREATE_FAILED.to_string()]);
    assert!(h.navigator.events().is_empty());
    assert!(h.gateway.clients().is_empty());
}
