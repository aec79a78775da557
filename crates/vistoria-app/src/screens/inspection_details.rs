//! # Inspection Details Screen
//!
//! ```text
//! Viewing ──edit──▶ Editing ──save──▶ Saving ──ok──▶ Viewing (+ banner)
//!                     │  ▲               └──err──▶ Editing
//!                     └──┴─cancel──▶ Viewing (buffer restored from memory)
//! ```
//!
//! The record is read by filtering the bulk list, since the gateway offers no
//! single-inspection endpoint.

use crate::core::SharedApp;
use crate::forms::{InspectionPicker, PickerGroup, PickerState, SuccessBanner};
use crate::workflows::{fetch_vistorias, gateway_message_or_unknown, load_anomalias};
use vistoria_core::format::format_detail_timestamp;
use vistoria_core::{
    Alert, Anomalia, CategoriaVistoria, TipoVistoria, Vistoria, VistoriaError, VistoriaRequest,
};
use vistoria_transport::GatewayError;

pub const LOAD_FAILED: &str = "Não foi possível carregar os detalhes da vistoria";
pub const UPDATE_SUCCEEDED: &str = "Vistoria atualizada com sucesso";
pub const UPDATE_FAILED: &str = "Não foi possível atualizar a vistoria";

/// Screen mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DetailMode {
    #[default]
    Viewing,
    Editing,
    Saving,
}

/// Working copy of the record while editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditBuffer {
    pub area_vistoria_interna_id: i64,
    pub data_hora: String,
    pub contem_anomalia: bool,
    pub anomalia_id: Option<i64>,
    pub tipo: TipoVistoria,
    pub categoria: CategoriaVistoria,
    pub observacao: String,
    pub fotos: Vec<String>,
}

impl EditBuffer {
    /// Snapshot of `vistoria`; a missing tipo reads as `ENDOGENA` and a
    /// missing categoria as `BAIXA`.
    pub fn from_vistoria(vistoria: &Vistoria) -> Self {
        Self {
            area_vistoria_interna_id: vistoria.area_vistoria_interna_id,
            data_hora: vistoria.data_hora.clone(),
            contem_anomalia: vistoria.contem_anomalia,
            anomalia_id: vistoria.anomalia.as_ref().map(|a| a.id),
            tipo: vistoria.tipo_value().unwrap_or(TipoVistoria::Endogena),
            categoria: vistoria.categoria_value().unwrap_or(CategoriaVistoria::Baixa),
            observacao: vistoria.observacao().to_string(),
            fotos: vistoria.fotos.clone(),
        }
    }

    /// Full-record `PUT` body.
    pub fn to_request(&self) -> VistoriaRequest {
        VistoriaRequest {
            area_vistoria_interna_id: self.area_vistoria_interna_id,
            data_hora: self.data_hora.clone(),
            contem_anomalia: self.contem_anomalia,
            anomalia_id: self.anomalia_id,
            tipo: self.tipo,
            categoria: self.categoria,
            observacao: self.observacao.clone(),
        }
    }
}

fn update_failure_message(err: &GatewayError) -> String {
    if err.has_response() {
        format!("{UPDATE_FAILED}: {}", gateway_message_or_unknown(err))
    } else {
        UPDATE_FAILED.to_string()
    }
}

pub struct InspectionDetailsScreen {
    app: SharedApp,
    vistoria_id: i64,
    vistoria: Option<Vistoria>,
    buffer: Option<EditBuffer>,
    anomalias: Vec<Anomalia>,
    mode: DetailMode,
    pickers: PickerGroup<InspectionPicker>,
    banner: SuccessBanner,
    is_loading: bool,
}

impl InspectionDetailsScreen {
    pub async fn new(app: SharedApp, vistoria_id: i64) -> Self {
        let ttl = app.read().await.config().success_banner_ttl();
        Self {
            app,
            vistoria_id,
            vistoria: None,
            buffer: None,
            anomalias: Vec::new(),
            mode: DetailMode::Viewing,
            pickers: PickerGroup::default(),
            banner: SuccessBanner::new(UPDATE_SUCCEEDED, ttl),
            is_loading: true,
        }
    }

    /// Load the record, then the anomaly list. Nothing else is fetched once
    /// the record is missing and the screen has been popped.
    pub async fn mount(&mut self) {
        if self.load().await {
            self.anomalias = load_anomalias(&self.app).await;
        }
    }

    /// Fetch the list and pick this screen's record. On failure the user is
    /// alerted and the screen is popped.
    async fn load(&mut self) -> bool {
        self.is_loading = true;
        let found = match fetch_vistorias(&self.app).await {
            Ok(items) => items
                .into_iter()
                .find(|v| v.id == self.vistoria_id)
                .ok_or_else(|| VistoriaError::not_found("vistoria", self.vistoria_id)),
            Err(e) => Err(e.into()),
        };
        self.is_loading = false;

        match found {
            Ok(vistoria) => {
                self.vistoria = Some(vistoria);
                true
            }
            Err(e) => {
                tracing::error!(vistoria_id = self.vistoria_id, "failed to load vistoria: {e}");
                let (alerts, navigation) = {
                    let core = self.app.read().await;
                    (core.alerts(), core.navigation())
                };
                alerts.alert(Alert::error(LOAD_FAILED));
                navigation.go_back();
                false
            }
        }
    }

    // =========================================================================
    // Edit lifecycle
    // =========================================================================

    pub fn start_editing(&mut self) {
        if self.mode != DetailMode::Viewing {
            return;
        }
        if let Some(vistoria) = &self.vistoria {
            self.buffer = Some(EditBuffer::from_vistoria(vistoria));
            self.mode = DetailMode::Editing;
        }
    }

    /// Drop the edits and restore the last fetched values.
    pub fn cancel_editing(&mut self) {
        if self.mode != DetailMode::Editing {
            return;
        }
        self.buffer = self.vistoria.as_ref().map(EditBuffer::from_vistoria);
        self.pickers.close_all();
        self.mode = DetailMode::Viewing;
    }

    fn editing_buffer(&mut self) -> Option<&mut EditBuffer> {
        if self.mode == DetailMode::Editing {
            self.buffer.as_mut()
        } else {
            None
        }
    }

    pub fn set_observacao(&mut self, observacao: impl Into<String>) {
        if let Some(buffer) = self.editing_buffer() {
            buffer.observacao = observacao.into();
        }
    }

    pub fn select_tipo(&mut self, tipo: TipoVistoria) {
        if let Some(buffer) = self.editing_buffer() {
            buffer.tipo = tipo;
        }
        self.pickers.close(InspectionPicker::Tipo);
    }

    pub fn select_categoria(&mut self, categoria: CategoriaVistoria) {
        if let Some(buffer) = self.editing_buffer() {
            buffer.categoria = categoria;
        }
        self.pickers.close(InspectionPicker::Categoria);
    }

    /// Choosing an anomaly also flags the inspection.
    pub fn select_anomalia(&mut self, anomalia_id: i64) {
        if let Some(buffer) = self.editing_buffer() {
            buffer.anomalia_id = Some(anomalia_id);
            buffer.contem_anomalia = true;
        }
        self.pickers.close(InspectionPicker::Anomalia);
    }

    pub fn toggle_picker(&mut self, picker: InspectionPicker) {
        if self.mode == DetailMode::Editing {
            self.pickers.toggle(picker);
        }
    }

    /// `PUT` the buffer. On success the record is re-fetched, the screen
    /// returns to viewing and the banner is shown; on failure it stays in
    /// editing.
    pub async fn save(&mut self) -> bool {
        if self.mode != DetailMode::Editing {
            return false;
        }
        let Some(request) = self.buffer.as_ref().map(EditBuffer::to_request) else {
            return false;
        };

        self.mode = DetailMode::Saving;
        let (gateway, alerts) = {
            let core = self.app.read().await;
            (core.gateway(), core.alerts())
        };

        if let Err(e) = gateway.update_vistoria(self.vistoria_id, &request).await {
            tracing::error!(vistoria_id = self.vistoria_id, "failed to update vistoria: {e}");
            alerts.alert(Alert::error(update_failure_message(&e)));
            self.mode = DetailMode::Editing;
            return false;
        }
        tracing::info!(vistoria_id = self.vistoria_id, "vistoria updated");

        self.load().await;
        self.buffer = self.vistoria.as_ref().map(EditBuffer::from_vistoria);
        self.pickers.close_all();
        self.mode = DetailMode::Viewing;
        let now = self.app.read().await.now();
        self.banner.show(now);
        true
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    pub fn mode(&self) -> DetailMode {
        self.mode
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn vistoria(&self) -> Option<&Vistoria> {
        self.vistoria.as_ref()
    }

    pub fn buffer(&self) -> Option<&EditBuffer> {
        self.buffer.as_ref()
    }

    pub fn anomalias(&self) -> &[Anomalia] {
        &self.anomalias
    }

    pub fn picker_state(&self, picker: InspectionPicker) -> PickerState {
        self.pickers.state(picker)
    }

    /// Observation currently shown: the buffer while editing, else the record.
    pub fn observacao(&self) -> &str {
        match (&self.mode, &self.buffer, &self.vistoria) {
            (DetailMode::Editing | DetailMode::Saving, Some(buffer), _) => buffer.observacao.as_str(),
            (_, _, Some(vistoria)) => vistoria.observacao(),
            _ => "",
        }
    }

    /// Header date, `dd/MM/yy HH:mm`.
    pub fn date_label(&self) -> Option<String> {
        self.vistoria
            .as_ref()
            .map(|v| format_detail_timestamp(&v.data_hora))
    }

    /// Banner text while it is visible.
    pub async fn success_banner(&mut self) -> Option<&'static str> {
        let now = self.app.read().await.now();
        self.banner.tick(now);
        self.banner.is_visible(now).then(|| self.banner.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vistoria_testkit::{anomalia, vistoria, vistoria_with_anomalia};

    #[test]
    fn test_buffer_defaults_missing_enums() {
        let mut v = vistoria(1, "x");
        v.tipo = None;
        v.categoria = None;
        v.observacao = None;
        let buffer = EditBuffer::from_vistoria(&v);
        assert_eq!(buffer.tipo, TipoVistoria::Endogena);
        assert_eq!(buffer.categoria, CategoriaVistoria::Baixa);
        assert_eq!(buffer.observacao, "");
    }

    #[test]
    fn test_request_carries_full_record() {
        let v = vistoria_with_anomalia(9, "Trinca", anomalia(3, "Corrosão"));
        let request = EditBuffer::from_vistoria(&v).to_request();
        assert_eq!(request.anomalia_id, Some(3));
        assert!(request.contem_anomalia);
        assert_eq!(request.categoria, CategoriaVistoria::Alta);
        assert_eq!(request.data_hora, v.data_hora);
        assert_eq!(request.area_vistoria_interna_id, 1);
    }

    #[test]
    fn test_update_failure_messages() {
        let answered = GatewayError::Status {
            method: "PUT",
            path: "/vistoria/1".to_string(),
            status: 500,
            message: None,
        };
        assert_eq!(
            update_failure_message(&answered),
            "Não foi possível atualizar a vistoria: Erro desconhecido"
        );

        let silent = GatewayError::Transport {
            method: "PUT",
            path: "/vistoria/1".to_string(),
            reason: "refused".to_string(),
        };
        assert_eq!(update_failure_message(&silent), UPDATE_FAILED);
    }
}
