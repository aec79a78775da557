//! The `Gateway` trait: every endpoint the application consumes.

use crate::error::GatewayResult;
use async_trait::async_trait;
use vistoria_core::{Anomalia, Client, NewClient, Vistoria, VistoriaCreated, VistoriaRequest};

/// Endpoint paths relative to the gateway base URL.
pub mod paths {
    pub const CLIENTS: &str = "/cliente/all";
    pub const CLIENT_CREATE: &str = "/cliente";
    pub const VISTORIAS: &str = "/vistoria/all";
    pub const VISTORIA_CREATE: &str = "/vistoria";
    pub const VISTORIA_UPLOAD: &str = "/vistoria/upload";
    pub const ANOMALIAS: &str = "/anomalia/all";

    /// `PUT` target for one inspection.
    pub fn vistoria(id: i64) -> String {
        format!("/vistoria/{id}")
    }
}

/// Remote data gateway.
///
/// Calls are independent request/response exchanges: no retries, no
/// cancellation, no ordering between concurrent calls.
#[async_trait]
pub trait Gateway: Send + Sync {
    /// `GET /cliente/all`
    async fn list_clients(&self) -> GatewayResult<Vec<Client>>;

    /// `POST /cliente`. The created record is not needed by callers.
    async fn create_client(&self, client: &NewClient) -> GatewayResult<()>;

    /// `GET /vistoria/all`
    async fn list_vistorias(&self) -> GatewayResult<Vec<Vistoria>>;

    /// `POST /vistoria`
    async fn create_vistoria(&self, request: &VistoriaRequest) -> GatewayResult<VistoriaCreated>;

    /// `POST /vistoria/upload?id={id}` with one `file` part per photo URI.
    async fn upload_photos(&self, vistoria_id: i64, photos: &[String]) -> GatewayResult<()>;

    /// `PUT /vistoria/{id}` with the full record.
    async fn update_vistoria(&self, vistoria_id: i64, request: &VistoriaRequest)
        -> GatewayResult<()>;

    /// `GET /anomalia/all`
    async fn list_anomalias(&self) -> GatewayResult<Vec<Anomalia>>;
}
