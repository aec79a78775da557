//! # AppCore
//!
//! Composition root: owns the view state, the configuration and every
//! injected service. Frontends build one, wrap it with [`AppCore::into_shared`]
//! and hand the shared handle to screen controllers.

use super::tickets::{FetchTicket, FetchTickets, Resource};
use crate::auth::CredentialVerifier;
use crate::config::AppConfig;
use crate::views::{AuthAction, ClientsAction, FetchAction, ViewState, VistoriasAction};
use async_lock::RwLock;
use chrono::{DateTime, Utc};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use vistoria_core::{AlertEffects, Client, ClockEffects, NavigationEffects, Vistoria};
use vistoria_transport::{Gateway, Reachability};

/// Shared handle passed to workflows and screens.
pub type SharedApp = Arc<RwLock<AppCore>>;

/// Remote services.
#[derive(Clone)]
pub struct AppServices {
    pub gateway: Arc<dyn Gateway>,
    pub reachability: Arc<dyn Reachability>,
    pub verifier: Arc<dyn CredentialVerifier>,
}

/// Platform capabilities supplied by the frontend.
#[derive(Clone)]
pub struct AppEffects {
    pub alerts: Arc<dyn AlertEffects>,
    pub navigation: Arc<dyn NavigationEffects>,
    pub clock: Arc<dyn ClockEffects>,
}

/// Headless application core.
pub struct AppCore {
    config: AppConfig,
    views: ViewState,
    tickets: FetchTickets,
    services: AppServices,
    effects: AppEffects,
    /// Set while a credential check is outstanding.
    login_gate: Arc<AtomicBool>,
}

impl AppCore {
    pub fn new(config: AppConfig, services: AppServices, effects: AppEffects) -> Self {
        Self {
            config,
            views: ViewState::default(),
            tickets: FetchTickets::default(),
            services,
            effects,
            login_gate: Arc::new(AtomicBool::new(false)),
        }
    }

    #[must_use]
    pub fn into_shared(self) -> SharedApp {
        Arc::new(RwLock::new(self))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn views(&self) -> &ViewState {
        &self.views
    }

    pub fn gateway(&self) -> Arc<dyn Gateway> {
        self.services.gateway.clone()
    }

    pub fn reachability(&self) -> Arc<dyn Reachability> {
        self.services.reachability.clone()
    }

    pub fn verifier(&self) -> Arc<dyn CredentialVerifier> {
        self.services.verifier.clone()
    }

    pub fn alerts(&self) -> Arc<dyn AlertEffects> {
        self.effects.alerts.clone()
    }

    pub fn navigation(&self) -> Arc<dyn NavigationEffects> {
        self.effects.navigation.clone()
    }

    /// In-progress marker shared by every login screen on this core.
    pub fn login_gate(&self) -> Arc<AtomicBool> {
        self.login_gate.clone()
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.effects.clock.now()
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    pub fn dispatch_auth(&mut self, action: AuthAction) {
        self.views.apply_auth(action);
    }

    pub fn dispatch_clients(&mut self, action: ClientsAction) {
        self.views.apply_clients(action);
    }

    pub fn dispatch_vistorias(&mut self, action: VistoriasAction) {
        self.views.apply_vistorias(action);
    }

    /// Dispatch `Start` for `resource` and issue the ticket that may settle it.
    pub fn begin_fetch(&mut self, resource: Resource) -> FetchTicket {
        let ticket = self.tickets.issue(resource);
        match resource {
            Resource::Clients => self.dispatch_clients(ClientsAction::Fetch(FetchAction::Start)),
            Resource::Vistorias => self.dispatch_vistorias(FetchAction::Start),
        }
        tracing::debug!(%resource, seq = ticket.seq(), "fetch started");
        ticket
    }

    #[must_use]
    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        self.tickets.is_current(ticket)
    }

    /// Settle a clients fetch. Returns `false` when the ticket is stale and
    /// the outcome was dropped.
    pub fn settle_clients(&mut self, ticket: FetchTicket, outcome: Result<Vec<Client>, String>) -> bool {
        if !self.accepts(ticket, Resource::Clients) {
            return false;
        }
        let action = self.settle_action(outcome);
        self.dispatch_clients(action.into());
        true
    }

    /// Settle an inspections fetch. Returns `false` when the ticket is stale
    /// and the outcome was dropped.
    pub fn settle_vistorias(
        &mut self,
        ticket: FetchTicket,
        outcome: Result<Vec<Vistoria>, String>,
    ) -> bool {
        if !self.accepts(ticket, Resource::Vistorias) {
            return false;
        }
        let action = self.settle_action(outcome);
        self.dispatch_vistorias(action);
        true
    }

    fn accepts(&self, ticket: FetchTicket, resource: Resource) -> bool {
        if ticket.resource() != resource || !self.tickets.is_current(ticket) {
            tracing::warn!(
                %resource,
                seq = ticket.seq(),
                "dropping stale fetch response"
            );
            return false;
        }
        true
    }

    fn settle_action<T>(&self, outcome: Result<Vec<T>, String>) -> FetchAction<T> {
        match outcome {
            Ok(items) => FetchAction::Success {
                items,
                at: self.now(),
            },
            Err(message) => FetchAction::Failure(message),
        }
    }
}
