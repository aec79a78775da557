//! Scripted in-memory gateway.
//!
//! Holds a small mutable dataset: successful creates append to it and
//! successful updates rewrite the stored record, so a re-fetch after a write
//! sees the change. Any endpoint can be switched to fail.

use async_trait::async_trait;
use std::sync::Mutex;
use vistoria_core::{
    Anomalia, CategoriaInfo, Client, NewClient, TipoInfo, Vistoria, VistoriaCreated,
    VistoriaRequest,
};
use vistoria_transport::{paths, Gateway, GatewayError, GatewayResult};

/// One request received by [`MockGateway`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayCall {
    ListClients,
    CreateClient(NewClient),
    ListVistorias,
    CreateVistoria(VistoriaRequest),
    UploadPhotos {
        vistoria_id: i64,
        photos: Vec<String>,
    },
    UpdateVistoria {
        vistoria_id: i64,
        request: VistoriaRequest,
    },
    ListAnomalias,
}

#[derive(Debug, Default)]
struct Failures {
    list_clients: Option<GatewayError>,
    create_client: Option<GatewayError>,
    list_vistorias: Option<GatewayError>,
    create_vistoria: Option<GatewayError>,
    upload: Option<GatewayError>,
    update: Option<GatewayError>,
    list_anomalias: Option<GatewayError>,
}

#[derive(Debug)]
struct Inner {
    clients: Vec<Client>,
    vistorias: Vec<Vistoria>,
    anomalias: Vec<Anomalia>,
    next_id: i64,
    failures: Failures,
    calls: Vec<GatewayCall>,
}

/// In-memory [`Gateway`] with failure injection and call recording.
#[derive(Debug)]
pub struct MockGateway {
    inner: Mutex<Inner>,
}

impl Default for MockGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl MockGateway {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                clients: Vec::new(),
                vistorias: Vec::new(),
                anomalias: Vec::new(),
                next_id: 1000,
                failures: Failures::default(),
                calls: Vec::new(),
            }),
        }
    }

    // =========================================================================
    // Builders
    // =========================================================================

    pub fn with_clients(self, clients: Vec<Client>) -> Self {
        self.inner.lock().unwrap().clients = clients;
        self
    }

    pub fn with_vistorias(self, vistorias: Vec<Vistoria>) -> Self {
        self.inner.lock().unwrap().vistorias = vistorias;
        self
    }

    pub fn with_anomalias(self, anomalias: Vec<Anomalia>) -> Self {
        self.inner.lock().unwrap().anomalias = anomalias;
        self
    }

    /// Id handed to the next created inspection.
    pub fn with_next_id(self, id: i64) -> Self {
        self.inner.lock().unwrap().next_id = id;
        self
    }

    // =========================================================================
    // Failure injection
    // =========================================================================

    pub fn fail_list_clients(&self, err: Option<GatewayError>) {
        self.inner.lock().unwrap().failures.list_clients = err;
    }

    pub fn fail_create_client(&self, err: Option<GatewayError>) {
        self.inner.lock().unwrap().failures.create_client = err;
    }

    pub fn fail_list_vistorias(&self, err: Option<GatewayError>) {
        self.inner.lock().unwrap().failures.list_vistorias = err;
    }

    pub fn fail_create_vistoria(&self, err: Option<GatewayError>) {
        self.inner.lock().unwrap().failures.create_vistoria = err;
    }

    pub fn fail_upload(&self, err: Option<GatewayError>) {
        self.inner.lock().unwrap().failures.upload = err;
    }

    pub fn fail_update(&self, err: Option<GatewayError>) {
        self.inner.lock().unwrap().failures.update = err;
    }

    pub fn fail_list_anomalias(&self, err: Option<GatewayError>) {
        self.inner.lock().unwrap().failures.list_anomalias = err;
    }

    /// A 4xx/5xx answer, optionally carrying a `message` body.
    pub fn status_error(
        method: &'static str,
        path: &str,
        status: u16,
        message: Option<&str>,
    ) -> GatewayError {
        GatewayError::Status {
            method,
            path: path.to_string(),
            status,
            message: message.map(str::to_string),
        }
    }

    /// A request that never got a response.
    pub fn transport_error(method: &'static str, path: &str) -> GatewayError {
        GatewayError::Transport {
            method,
            path: path.to_string(),
            reason: "connection refused".to_string(),
        }
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    pub fn calls(&self) -> Vec<GatewayCall> {
        self.inner.lock().unwrap().calls.clone()
    }

    pub fn call_count(&self, pred: impl Fn(&GatewayCall) -> bool) -> usize {
        self.inner.lock().unwrap().calls.iter().filter(|c| pred(c)).count()
    }

    pub fn clients(&self) -> Vec<Client> {
        self.inner.lock().unwrap().clients.clone()
    }

    pub fn vistorias(&self) -> Vec<Vistoria> {
        self.inner.lock().unwrap().vistorias.clone()
    }

    fn record(&self, call: GatewayCall) -> std::sync::MutexGuard<'_, Inner> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(call);
        inner
    }
}

fn check(failure: &Option<GatewayError>) -> GatewayResult<()> {
    match failure {
        Some(err) => Err(err.clone()),
        None => Ok(()),
    }
}

fn apply_request(target: &mut Vistoria, request: &VistoriaRequest, anomalias: &[Anomalia]) {
    target.area_vistoria_interna_id = request.area_vistoria_interna_id;
    target.data_hora = request.data_hora.clone();
    target.contem_anomalia = request.contem_anomalia;
    target.anomalia = request
        .anomalia_id
        .and_then(|id| anomalias.iter().find(|a| a.id == id).cloned());
    target.tipo = Some(TipoInfo {
        value: request.tipo,
        descricao: Some(request.tipo.label().to_string()),
    });
    target.categoria = Some(CategoriaInfo {
        value: request.categoria,
        descricao: Some(request.categoria.label().to_string()),
        prioridade: None,
    });
    target.observacao = Some(request.observacao.clone());
}

#[async_trait]
impl Gateway for MockGateway {
    async fn list_clients(&self) -> GatewayResult<Vec<Client>> {
        let inner = self.record(GatewayCall::ListClients);
        check(&inner.failures.list_clients)?;
        Ok(inner.clients.clone())
    }

    async fn create_client(&self, client: &NewClient) -> GatewayResult<()> {
        let mut inner = self.record(GatewayCall::CreateClient(client.clone()));
        check(&inner.failures.create_client)?;
        let id = inner.clients.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        inner.clients.push(Client {
            id,
            nome: client.nome.clone(),
            email: client.email.clone(),
            telefone: client.telefone.clone(),
        });
        Ok(())
    }

    async fn list_vistorias(&self) -> GatewayResult<Vec<Vistoria>> {
        let inner = self.record(GatewayCall::ListVistorias);
        check(&inner.failures.list_vistorias)?;
        Ok(inner.vistorias.clone())
    }

    async fn create_vistoria(&self, request: &VistoriaRequest) -> GatewayResult<VistoriaCreated> {
        let mut inner = self.record(GatewayCall::CreateVistoria(request.clone()));
        check(&inner.failures.create_vistoria)?;
        let id = inner.next_id;
        inner.next_id += 1;
        let mut created = Vistoria {
            id,
            area_vistoria_interna_id: 0,
            data_hora: String::new(),
            contem_anomalia: false,
            anomalia: None,
            tipo: None,
            categoria: None,
            observacao: None,
            fotos: Vec::new(),
        };
        apply_request(&mut created, request, &inner.anomalias);
        inner.vistorias.push(created);
        Ok(VistoriaCreated { id })
    }

    async fn upload_photos(&self, vistoria_id: i64, photos: &[String]) -> GatewayResult<()> {
        let mut inner = self.record(GatewayCall::UploadPhotos {
            vistoria_id,
            photos: photos.to_vec(),
        });
        check(&inner.failures.upload)?;
        if let Some(target) = inner.vistorias.iter_mut().find(|v| v.id == vistoria_id) {
            target.fotos.extend(photos.iter().cloned());
        }
        Ok(())
    }

    async fn update_vistoria(
        &self,
        vistoria_id: i64,
        request: &VistoriaRequest,
    ) -> GatewayResult<()> {
        let mut inner = self.record(GatewayCall::UpdateVistoria {
            vistoria_id,
            request: request.clone(),
        });
        check(&inner.failures.update)?;
        let anomalias = inner.anomalias.clone();
        match inner.vistorias.iter_mut().find(|v| v.id == vistoria_id) {
            Some(target) => {
                apply_request(target, request, &anomalias);
                Ok(())
            }
            None => Err(Self::status_error(
                "PUT",
                &paths::vistoria(vistoria_id),
                404,
                Some("Vistoria não encontrada"),
            )),
        }
    }

    async fn list_anomalias(&self) -> GatewayResult<Vec<Anomalia>> {
        let inner = self.record(GatewayCall::ListAnomalias);
        check(&inner.failures.list_anomalias)?;
        Ok(inner.anomalias.clone())
    }
}
