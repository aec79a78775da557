//! # New Inspection Screen
//!
//! Submission runs as a small state machine:
//!
//! ```text
//! Idle ──save (valid, online)──▶ Submitting ──▶ Success
//!                                     │──────▶ PartialFailure (saved, photos failed)
//!                                     └──────▶ Failure (form stays editable)
//! ```
//!
//! Metadata is posted first; photos follow as one multipart upload keyed by
//! the created id. A failed upload never rolls the inspection back.

use crate::core::SharedApp;
use crate::forms::{FieldErrors, InspectionPicker, PickerGroup, PickerState};
use crate::workflows::{check_connectivity, gateway_message_or_unknown, load_anomalias};
use vistoria_core::format::to_iso_timestamp;
use vistoria_core::{
    Alert, AlertKind, Anomalia, CategoriaVistoria, TipoVistoria, VistoriaRequest,
};
use vistoria_transport::GatewayError;

pub const FORM_HAS_ERRORS: &str = "Por favor, corrija os erros no formulário";
pub const OFFLINE_TITLE: &str = "Modo Offline";
pub const OFFLINE_MESSAGE: &str =
    "Os dados serão salvos localmente e sincronizados quando houver conexão";
pub const VISTORIA_CREATED: &str = "Vistoria cadastrada com sucesso!";
pub const PHOTOS_FAILED: &str = "Vistoria foi salva, mas houve um problema ao enviar as fotos.";
pub const CREATE_FAILED_RETRY: &str = "Não foi possível cadastrar a vistoria. Tente novamente.";

/// Fields of the inspection form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum InspectionField {
    Tipo,
    Categoria,
    Anomalia,
    Observacao,
}

/// Editable values of a new inspection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InspectionForm {
    pub tipo: Option<TipoVistoria>,
    pub categoria: Option<CategoriaVistoria>,
    pub contem_anomalia: bool,
    pub anomalia_id: Option<i64>,
    pub observacao: String,
}

#[must_use]
pub fn validate_inspection(form: &InspectionForm) -> FieldErrors<InspectionField> {
    let mut errors = FieldErrors::default();
    if form.tipo.is_none() {
        errors.set(InspectionField::Tipo, "Tipo é obrigatório");
    }
    if form.categoria.is_none() {
        errors.set(InspectionField::Categoria, "Categoria é obrigatória");
    }
    if form.contem_anomalia && form.anomalia_id.is_none() {
        errors.set(InspectionField::Anomalia, "Selecione uma anomalia");
    }
    if form.observacao.trim().is_empty() {
        errors.set(InspectionField::Observacao, "Observação é obrigatória");
    }
    errors
}

/// Where the current save attempt stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Success { vistoria_id: i64 },
    /// The inspection exists but its photos were not stored.
    PartialFailure { vistoria_id: i64 },
    Failure { message: String },
}

impl SubmissionState {
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }
}

fn create_failure_message(err: &GatewayError) -> String {
    if err.is_http() {
        format!(
            "Não foi possível cadastrar a vistoria: {}",
            gateway_message_or_unknown(err)
        )
    } else {
        CREATE_FAILED_RETRY.to_string()
    }
}

pub struct NewInspectionScreen {
    app: SharedApp,
    form: InspectionForm,
    errors: FieldErrors<InspectionField>,
    photos: Vec<String>,
    anomalias: Vec<Anomalia>,
    pickers: PickerGroup<InspectionPicker>,
    is_offline: bool,
    state: SubmissionState,
}

impl NewInspectionScreen {
    pub fn new(app: SharedApp) -> Self {
        Self {
            app,
            form: InspectionForm::default(),
            errors: FieldErrors::default(),
            photos: Vec::new(),
            anomalias: Vec::new(),
            pickers: PickerGroup::default(),
            is_offline: false,
            state: SubmissionState::Idle,
        }
    }

    /// Connectivity check and anomaly lookup.
    pub async fn mount(&mut self) {
        self.is_offline = !check_connectivity(&self.app).await;
        self.anomalias = load_anomalias(&self.app).await;
    }

    // =========================================================================
    // Editing
    // =========================================================================

    pub fn toggle_picker(&mut self, picker: InspectionPicker) {
        self.pickers.toggle(picker);
    }

    pub fn picker_state(&self, picker: InspectionPicker) -> PickerState {
        self.pickers.state(picker)
    }

    pub fn select_tipo(&mut self, tipo: TipoVistoria) {
        self.form.tipo = Some(tipo);
        self.pickers.close(InspectionPicker::Tipo);
        self.errors.clear(InspectionField::Tipo);
    }

    pub fn select_categoria(&mut self, categoria: CategoriaVistoria) {
        self.form.categoria = Some(categoria);
        self.pickers.close(InspectionPicker::Categoria);
        self.errors.clear(InspectionField::Categoria);
    }

    /// Flip the anomaly checkbox. Turning it on clears the chosen anomaly.
    pub fn toggle_contem_anomalia(&mut self) {
        self.form.contem_anomalia = !self.form.contem_anomalia;
        if self.form.contem_anomalia {
            self.form.anomalia_id = None;
        }
    }

    pub fn select_anomalia(&mut self, anomalia_id: i64) {
        self.form.anomalia_id = Some(anomalia_id);
        self.pickers.close(InspectionPicker::Anomalia);
        self.errors.clear(InspectionField::Anomalia);
    }

    pub fn set_observacao(&mut self, observacao: impl Into<String>) {
        self.form.observacao = observacao.into();
        self.errors.clear(InspectionField::Observacao);
    }

    /// Append picked or captured photo URIs.
    pub fn add_photos(&mut self, uris: impl IntoIterator<Item = String>) {
        self.photos.extend(uris);
    }

    /// Remove the photo at `index`; out-of-range indices are ignored.
    pub fn remove_photo(&mut self, index: usize) {
        if index < self.photos.len() {
            self.photos.remove(index);
        }
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    pub fn form(&self) -> &InspectionForm {
        &self.form
    }

    pub fn errors(&self) -> &FieldErrors<InspectionField> {
        &self.errors
    }

    pub fn photos(&self) -> &[String] {
        &self.photos
    }

    pub fn anomalias(&self) -> &[Anomalia] {
        &self.anomalias
    }

    pub fn is_offline(&self) -> bool {
        self.is_offline
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    // =========================================================================
    // Save
    // =========================================================================

    pub async fn save(&mut self) -> &SubmissionState {
        if self.state.is_submitting() {
            return &self.state;
        }

        let (gateway, alerts, navigation, area_id, now) = {
            let core = self.app.read().await;
            (
                core.gateway(),
                core.alerts(),
                core.navigation(),
                core.config().area_vistoria_interna_id,
                core.now(),
            )
        };

        self.errors = validate_inspection(&self.form);
        let (Some(tipo), Some(categoria), true) =
            (self.form.tipo, self.form.categoria, self.errors.is_empty())
        else {
            alerts.alert(Alert::error(FORM_HAS_ERRORS));
            return &self.state;
        };

        if self.is_offline {
            alerts.alert(Alert::titled(AlertKind::Warning, OFFLINE_TITLE, OFFLINE_MESSAGE));
            return &self.state;
        }

        let request = VistoriaRequest {
            area_vistoria_interna_id: area_id,
            data_hora: to_iso_timestamp(now),
            contem_anomalia: self.form.contem_anomalia,
            anomalia_id: if self.form.contem_anomalia {
                self.form.anomalia_id
            } else {
                None
            },
            tipo,
            categoria,
            observacao: self.form.observacao.clone(),
        };

        self.state = SubmissionState::Submitting;

        let created = match gateway.create_vistoria(&request).await {
            Ok(created) => created,
            Err(e) => {
                tracing::error!("failed to create vistoria: {e}");
                let message = create_failure_message(&e);
                alerts.alert(Alert::error(message.clone()));
                self.state = SubmissionState::Failure { message };
                return &self.state;
            }
        };
        tracing::info!(vistoria_id = created.id, "vistoria created");

        if !self.photos.is_empty() {
            if let Err(e) = gateway.upload_photos(created.id, &self.photos).await {
                tracing::error!(vistoria_id = created.id, "photo upload failed: {e}");
                alerts.alert(Alert::warning(PHOTOS_FAILED));
                navigation.go_back();
                self.state = SubmissionState::PartialFailure {
                    vistoria_id: created.id,
                };
                return &self.state;
            }
            tracing::info!(vistoria_id = created.id, count = self.photos.len(), "photos uploaded");
        }

        alerts.alert(Alert::success(VISTORIA_CREATED));
        navigation.go_back();
        self.state = SubmissionState::Success {
            vistoria_id: created.id,
        };
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_form_errors() {
        let errors = validate_inspection(&InspectionForm::default());
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get(InspectionField::Tipo), Some("Tipo é obrigatório"));
        assert_eq!(errors.get(InspectionField::Categoria), Some("Categoria é obrigatória"));
        assert_eq!(errors.get(InspectionField::Observacao), Some("Observação é obrigatória"));
        assert_eq!(errors.get(InspectionField::Anomalia), None);
    }

    #[test]
    fn test_flagged_form_requires_anomaly() {
        let form = InspectionForm {
            tipo: Some(TipoVistoria::Exogena),
            categoria: Some(CategoriaVistoria::Alta),
            contem_anomalia: true,
            anomalia_id: None,
            observacao: "Fissura".to_string(),
        };
        let errors = validate_inspection(&form);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(InspectionField::Anomalia), Some("Selecione uma anomalia"));

        let complete = InspectionForm {
            anomalia_id: Some(2),
            ..form
        };
        assert!(validate_inspection(&complete).is_empty());
    }

    #[test]
    fn test_failure_message_variants() {
        let with_message = GatewayError::Status {
            method: "POST",
            path: "/vistoria".to_string(),
            status: 400,
            message: Some("anomalia_id obrigatório".to_string()),
        };
        assert_eq!(
            create_failure_message(&with_message),
            "Não foi possível cadastrar a vistoria: anomalia_id obrigatório"
        );

        let no_response = GatewayError::Transport {
            method: "POST",
            path: "/vistoria".to_string(),
            reason: "timeout".to_string(),
        };
        assert_eq!(
            create_failure_message(&no_response),
            "Não foi possível cadastrar a vistoria: Erro desconhecido"
        );

        let local = GatewayError::InvalidUrl("x".to_string());
        assert_eq!(create_failure_message(&local), CREATE_FAILED_RETRY);
    }
}
