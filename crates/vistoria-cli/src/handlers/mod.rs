//! CLI Command Handlers
//!
//! Each handler builds the screen controller for its command, feeds it the
//! command-line arguments and prints what a frontend would render.

use crate::effects::{ConsoleAlerts, LoggedNavigator};
use anyhow::Result;
use std::sync::Arc;
use vistoria_app::{AppConfig, AppCore, AppEffects, AppServices, MockCredentialVerifier, SharedApp};
use vistoria_core::SystemClock;
use vistoria_transport::{HttpGateway, HttpReachability};

pub mod clients;
pub mod login;
pub mod migrate;
pub mod vistorias;

/// Wire the application core to the HTTP gateway and the terminal.
pub fn build_app(config: &AppConfig) -> Result<SharedApp> {
    let gateway = HttpGateway::new(&config.gateway_config())?;
    let reachability =
        HttpReachability::new(config.api_url.trim(), HttpReachability::DEFAULT_TIMEOUT)?;

    let services = AppServices {
        gateway: Arc::new(gateway),
        reachability: Arc::new(reachability),
        verifier: Arc::new(MockCredentialVerifier::new(config.login_delay())),
    };
    let effects = AppEffects {
        alerts: Arc::new(ConsoleAlerts),
        navigation: Arc::new(LoggedNavigator),
        clock: Arc::new(SystemClock),
    };

    tracing::debug!(api_url = %config.api_url, "application core ready");
    Ok(AppCore::new(config.clone(), services, effects).into_shared())
}
