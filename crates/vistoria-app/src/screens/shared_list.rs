//! # Shared List Screen
//!
//! Two tabs over the clients and inspections containers, with a search box,
//! pull-to-refresh and the advisory offline banner. The visible list is
//! always `filter(container items, query)`, so a fetch that completes after
//! the user typed a query is shown already filtered.

use crate::core::SharedApp;
use crate::filter::{filter_clients, filter_vistorias};
use crate::workflows::{check_connectivity, fetch_clients, fetch_vistorias};
use vistoria_core::format::{format_list_timestamp, photo_count_label};
use vistoria_core::{Alert, CategoriaVistoria, Client, Route, Vistoria};

pub const OFFLINE_BANNER: &str = "Modo Offline - Dados podem estar desatualizados";
pub const NO_CATEGORY: &str = "Sem Categoria";

/// Active tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ListTab {
    #[default]
    Clients,
    Vistorias,
}

impl ListTab {
    /// Key used in the fetch-failure message.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Clients => "clients",
            Self::Vistorias => "vistorias",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Clients => "Clientes",
            Self::Vistorias => "Vistorias",
        }
    }
}

/// Display model of one inspection row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VistoriaRow {
    pub id: i64,
    pub date: String,
    pub badge_text: String,
    pub badge_color: &'static str,
    /// Shown only for inspections flagged with a named anomaly.
    pub anomalia: Option<String>,
    pub observacao: Option<String>,
    pub photos: Option<String>,
}

impl VistoriaRow {
    pub fn from_vistoria(vistoria: &Vistoria) -> Self {
        let observacao = vistoria.observacao();
        Self {
            id: vistoria.id,
            date: format_list_timestamp(&vistoria.data_hora),
            badge_text: vistoria
                .categoria_descricao()
                .filter(|d| !d.is_empty())
                .unwrap_or(NO_CATEGORY)
                .to_string(),
            badge_color: CategoriaVistoria::badge_color(vistoria.categoria_value()),
            anomalia: vistoria
                .anomalia_nome()
                .filter(|n| vistoria.contem_anomalia && !n.is_empty())
                .map(str::to_string),
            observacao: (!observacao.is_empty()).then(|| observacao.to_string()),
            photos: (!vistoria.fotos.is_empty()).then(|| photo_count_label(vistoria.fotos.len())),
        }
    }
}

pub struct SharedListScreen {
    app: SharedApp,
    tab: ListTab,
    query: String,
    is_loading: bool,
    is_offline: bool,
    refreshing: bool,
}

impl SharedListScreen {
    pub fn new(app: SharedApp) -> Self {
        Self {
            app,
            tab: ListTab::default(),
            query: String::new(),
            is_loading: false,
            is_offline: false,
            refreshing: false,
        }
    }

    /// Initial load: connectivity check, then the active tab's fetch.
    pub async fn mount(&mut self) {
        self.load().await;
    }

    /// Switch tabs; re-runs the connectivity check and the fetch.
    pub async fn select_tab(&mut self, tab: ListTab) {
        if tab == self.tab {
            return;
        }
        self.tab = tab;
        self.load().await;
    }

    /// Pull-to-refresh.
    pub async fn refresh(&mut self) {
        self.refreshing = true;
        self.fetch().await;
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    async fn load(&mut self) {
        self.is_offline = !check_connectivity(&self.app).await;
        self.fetch().await;
    }

    async fn fetch(&mut self) {
        self.is_loading = true;
        let failed = match self.tab {
            ListTab::Clients => fetch_clients(&self.app).await.is_err(),
            ListTab::Vistorias => fetch_vistorias(&self.app).await.is_err(),
        };
        if failed {
            let alerts = self.app.read().await.alerts();
            alerts.alert(Alert::error(format!(
                "Não foi possível carregar os {}",
                self.tab.key()
            )));
        }
        self.is_loading = false;
        self.refreshing = false;
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    pub fn tab(&self) -> ListTab {
        self.tab
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    pub fn is_offline(&self) -> bool {
        self.is_offline
    }

    pub fn offline_banner(&self) -> Option<&'static str> {
        self.is_offline.then_some(OFFLINE_BANNER)
    }

    pub async fn visible_clients(&self) -> Vec<Client> {
        filter_clients(&self.app.read().await.views().clients.items, &self.query)
    }

    pub async fn visible_vistorias(&self) -> Vec<Vistoria> {
        filter_vistorias(&self.app.read().await.views().vistorias.items, &self.query)
    }

    pub async fn vistoria_rows(&self) -> Vec<VistoriaRow> {
        self.visible_vistorias()
            .await
            .iter()
            .map(VistoriaRow::from_vistoria)
            .collect()
    }

    /// Placeholder text for an empty list on the active tab.
    pub fn empty_text(&self) -> &'static str {
        match (self.tab, self.query.is_empty()) {
            (ListTab::Clients, false) => "Nenhum cliente encontrado",
            (ListTab::Clients, true) => "Nenhum cliente cadastrado",
            (ListTab::Vistorias, false) => "Nenhuma vistoria encontrada",
            (ListTab::Vistorias, true) => "Nenhuma vistoria cadastrada",
        }
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    pub async fn open_vistoria(&self, vistoria_id: i64) {
        let navigation = self.app.read().await.navigation();
        navigation.navigate(Route::DetalhesVistoria { vistoria_id });
    }

    pub async fn open_new_client(&self) {
        let navigation = self.app.read().await.navigation();
        navigation.navigate(Route::NovoCliente);
    }

    pub async fn open_new_vistoria(&self) {
        let navigation = self.app.read().await.navigation();
        navigation.navigate(Route::NovaVistoria);
    }
}
