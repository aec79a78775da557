//! HTTPS gateway implementation over `reqwest`.

use crate::error::{GatewayError, GatewayResult};
use crate::gateway::{paths, Gateway};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Method, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use vistoria_core::{Anomalia, Client, NewClient, Vistoria, VistoriaCreated, VistoriaRequest};

const PHOTO_MIME: &str = "image/jpeg";

/// Connection settings for [`HttpGateway`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Base URL without trailing slash, e.g. `https://suporte.zapto.org:3001`.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl GatewayConfig {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            timeout,
        }
    }
}

/// Error body shape used by the gateway (`{"message": "..."}`).
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// HTTPS JSON client for the remote data gateway
#[derive(Debug, Clone)]
pub struct HttpGateway {
    base_url: String,
    client: reqwest::Client,
}

impl HttpGateway {
    /// Create a gateway client.
    ///
    /// Fails when the base URL is not an absolute http(s) URL.
    pub fn new(config: &GatewayConfig) -> GatewayResult<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        let parsed = reqwest::Url::parse(&base_url)
            .map_err(|e| GatewayError::InvalidUrl(format!("{base_url}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(GatewayError::InvalidUrl(base_url));
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GatewayError::InvalidUrl(format!("{base_url}: {e}")))?;

        Ok(Self { base_url, client })
    }

    /// Base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> GatewayResult<T> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| GatewayError::transport("GET", path, &e))?;
        let response = check_status("GET", path, response).await?;
        decode(path, response).await
    }

    async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        label: &'static str,
        path: &str,
        body: &B,
    ) -> GatewayResult<Response> {
        let response = self
            .client
            .request(method, self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| GatewayError::transport(label, path, &e))?;
        check_status(label, path, response).await
    }

    async fn photo_form(photos: &[String]) -> GatewayResult<Form> {
        let mut form = Form::new();
        for (index, uri) in photos.iter().enumerate() {
            let local_path = uri.strip_prefix("file://").unwrap_or(uri);
            let bytes = tokio::fs::read(local_path)
                .await
                .map_err(|e| GatewayError::Photo {
                    uri: uri.clone(),
                    reason: e.to_string(),
                })?;
            let part = Part::bytes(bytes)
                .file_name(photo_file_name(uri, index))
                .mime_str(PHOTO_MIME)
                .map_err(|e| GatewayError::Photo {
                    uri: uri.clone(),
                    reason: e.to_string(),
                })?;
            form = form.part("file", part);
        }
        Ok(form)
    }
}

/// Last path segment of `uri`, or `foto{index}.jpg` when there is none.
pub(crate) fn photo_file_name(uri: &str, index: usize) -> String {
    uri.rsplit('/')
        .next()
        .filter(|name| !name.is_empty())
        .map_or_else(|| format!("foto{index}.jpg"), str::to_string)
}

async fn check_status(method: &'static str, path: &str, response: Response) -> GatewayResult<Response> {
    let status = response.status();
    tracing::debug!(method, path, status = status.as_u16(), "gateway response");
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .text()
        .await
        .ok()
        .and_then(|body| serde_json::from_str::<ErrorBody>(&body).ok())
        .and_then(|body| body.message)
        .filter(|m| !m.trim().is_empty());

    Err(GatewayError::Status {
        method,
        path: path.to_string(),
        status: status.as_u16(),
        message,
    })
}

async fn decode<T: DeserializeOwned>(path: &str, response: Response) -> GatewayResult<T> {
    response.json::<T>().await.map_err(|e| GatewayError::Decode {
        path: path.to_string(),
        reason: e.to_string(),
    })
}

#[async_trait]
impl Gateway for HttpGateway {
    async fn list_clients(&self) -> GatewayResult<Vec<Client>> {
        self.get_json(paths::CLIENTS).await
    }

    async fn create_client(&self, client: &NewClient) -> GatewayResult<()> {
        self.send_json(Method::POST, "POST", paths::CLIENT_CREATE, client)
            .await?;
        tracing::info!(nome = %client.nome, "client created");
        Ok(())
    }

    async fn list_vistorias(&self) -> GatewayResult<Vec<Vistoria>> {
        self.get_json(paths::VISTORIAS).await
    }

    async fn create_vistoria(&self, request: &VistoriaRequest) -> GatewayResult<VistoriaCreated> {
        let response = self
            .send_json(Method::POST, "POST", paths::VISTORIA_CREATE, request)
            .await?;
        let created: VistoriaCreated = decode(paths::VISTORIA_CREATE, response).await?;
        tracing::info!(id = created.id, "vistoria created");
        Ok(created)
    }

    async fn upload_photos(&self, vistoria_id: i64, photos: &[String]) -> GatewayResult<()> {
        let form = Self::photo_form(photos).await?;
        let path = paths::VISTORIA_UPLOAD;
        let response = self
            .client
            .post(self.url(path))
            .query(&[("id", vistoria_id)])
            .header(reqwest::header::ACCEPT, "application/json")
            .multipart(form)
            .send()
            .await
            .map_err(|e| GatewayError::transport("POST", path, &e))?;
        check_status("POST", path, response).await?;
        tracing::info!(vistoria_id, count = photos.len(), "photos uploaded");
        Ok(())
    }

    async fn update_vistoria(
        &self,
        vistoria_id: i64,
        request: &VistoriaRequest,
    ) -> GatewayResult<()> {
        let path = paths::vistoria(vistoria_id);
        self.send_json(Method::PUT, "PUT", &path, request).await?;
        tracing::info!(vistoria_id, "vistoria updated");
        Ok(())
    }

    async fn list_anomalias(&self) -> GatewayResult<Vec<Anomalia>> {
        self.get_json(paths::ANOMALIAS).await
    }
}
