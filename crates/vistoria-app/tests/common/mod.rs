//! Shared harness wiring an `AppCore` to testkit doubles.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use vistoria_app::{
    AppConfig, AppCore, AppEffects, AppServices, CredentialVerifier, MockCredentialVerifier,
    SharedApp,
};
use vistoria_core::{ClockEffects, Session, VistoriaError, VistoriaResult};
use vistoria_testkit::{ManualClock, MockGateway, RecordingAlerts, RecordingNavigator, StaticReachability};

pub struct Harness {
    pub app: SharedApp,
    pub gateway: Arc<MockGateway>,
    pub reachability: Arc<StaticReachability>,
    pub alerts: Arc<RecordingAlerts>,
    pub navigator: Arc<RecordingNavigator>,
    pub clock: Arc<ManualClock>,
}

impl Harness {
    pub fn new(gateway: MockGateway) -> Self {
        Self::with_verifier(gateway, Arc::new(MockCredentialVerifier::instant()))
    }

    pub fn with_verifier(gateway: MockGateway, verifier: Arc<dyn CredentialVerifier>) -> Self {
        let gateway = Arc::new(gateway);
        let reachability = Arc::new(StaticReachability::online());
        let alerts = Arc::new(RecordingAlerts::default());
        let navigator = Arc::new(RecordingNavigator::default());
        let clock = Arc::new(ManualClock::default());

        let config = AppConfig {
            api_url: "http://gateway.test".to_string(),
            login_delay_ms: 0,
            ..AppConfig::default()
        };
        let app = AppCore::new(
            config,
            AppServices {
                gateway: gateway.clone(),
                reachability: reachability.clone(),
                verifier,
            },
            AppEffects {
                alerts: alerts.clone(),
                navigation: navigator.clone(),
                clock: clock.clone(),
            },
        )
        .into_shared();

        Self {
            app,
            gateway,
            reachability,
            alerts,
            navigator,
            clock,
        }
    }

    pub fn clock_now(&self) -> DateTime<Utc> {
        self.clock.now()
    }
}

/// Verifier whose check always errors.
pub struct BrokenVerifier;

#[async_trait]
impl CredentialVerifier for BrokenVerifier {
    async fn verify(&self, _email: &str, _password: &str) -> VistoriaResult<Option<Session>> {
        Err(VistoriaError::internal("keychain unavailable"))
    }
}

/// Delayed mock verifier that counts how often it was asked.
pub struct CountingVerifier {
    inner: MockCredentialVerifier,
    calls: AtomicUsize,
}

impl CountingVerifier {
    pub fn delayed(delay: Duration) -> Self {
        Self {
            inner: MockCredentialVerifier::new(delay),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CredentialVerifier for CountingVerifier {
    async fn verify(&self, email: &str, password: &str) -> VistoriaResult<Option<Session>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.verify(email, password).await
    }
}
