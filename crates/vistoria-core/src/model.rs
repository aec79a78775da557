//! # Domain Model
//!
//! Entities owned by the remote gateway, in the exact JSON shape the gateway
//! speaks. Field names on the wire are Portuguese and partially camelCase
//! (`dataHora`, `areaVistoriaInterna_id`); the Rust side uses snake_case and
//! maps each field explicitly.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Deserialize `null` as `T::default()`.
///
/// The gateway sends `"fotos": null` for inspections without photos.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// =============================================================================
// Clients
// =============================================================================

/// A registered client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: i64,
    pub nome: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub telefone: String,
}

/// Body of `POST /cliente`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewClient {
    pub nome: String,
    pub email: String,
    pub telefone: String,
}

// =============================================================================
// Anomalies
// =============================================================================

/// Anomaly reference entry used to populate pickers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anomalia {
    pub id: i64,
    pub nome: String,
}

// =============================================================================
// Inspection Enums
// =============================================================================

/// Inspection type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TipoVistoria {
    Endogena,
    Exogena,
    Funcional,
}

impl TipoVistoria {
    /// All types in picker order.
    pub const ALL: [Self; 3] = [Self::Endogena, Self::Exogena, Self::Funcional];

    /// Wire name (`ENDOGENA`, ...).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Endogena => "ENDOGENA",
            Self::Exogena => "EXOGENA",
            Self::Funcional => "FUNCIONAL",
        }
    }

    /// Picker label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Endogena => "Endógena",
            Self::Exogena => "Exógena",
            Self::Funcional => "Funcional",
        }
    }

    /// Parse a wire name, case-insensitively.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

impl fmt::Display for TipoVistoria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inspection priority category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CategoriaVistoria {
    Alta,
    Media,
    Baixa,
}

impl CategoriaVistoria {
    /// All categories in picker order.
    pub const ALL: [Self; 3] = [Self::Alta, Self::Media, Self::Baixa];

    /// Wire name (`ALTA`, ...).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Alta => "ALTA",
            Self::Media => "MEDIA",
            Self::Baixa => "BAIXA",
        }
    }

    /// Picker label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Alta => "Alta",
            Self::Media => "Média",
            Self::Baixa => "Baixa",
        }
    }

    /// Parse a wire name, case-insensitively.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
    }

    /// Status badge colour for a (possibly missing) category.
    #[must_use]
    pub fn badge_color(categoria: Option<Self>) -> &'static str {
        match categoria {
            Some(Self::Alta) => "#dc3545",
            Some(Self::Media) => "#ffc107",
            Some(Self::Baixa) => "#198754",
            None => "#6c757d",
        }
    }
}

impl fmt::Display for CategoriaVistoria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Nested `tipo` object returned by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipoInfo {
    #[serde(rename = "enum")]
    pub value: TipoVistoria,
    #[serde(default)]
    pub descricao: Option<String>,
}

/// Nested `categoria` object returned by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoriaInfo {
    #[serde(rename = "enum")]
    pub value: CategoriaVistoria,
    #[serde(default)]
    pub descricao: Option<String>,
    #[serde(default)]
    pub prioridade: Option<i32>,
}

// =============================================================================
// Inspections
// =============================================================================

/// An inspection as returned by `GET /vistoria/all`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vistoria {
    pub id: i64,
    #[serde(rename = "areaVistoriaInterna_id", default)]
    pub area_vistoria_interna_id: i64,
    /// ISO-8601 timestamp, kept verbatim so edits round-trip unchanged.
    #[serde(rename = "dataHora")]
    pub data_hora: String,
    #[serde(rename = "contemAnomalia", default)]
    pub contem_anomalia: bool,
    #[serde(default)]
    pub anomalia: Option<Anomalia>,
    #[serde(default)]
    pub tipo: Option<TipoInfo>,
    #[serde(default)]
    pub categoria: Option<CategoriaInfo>,
    #[serde(default)]
    pub observacao: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fotos: Vec<String>,
}

impl Vistoria {
    /// Observation text, empty when absent.
    #[must_use]
    pub fn observacao(&self) -> &str {
        self.observacao.as_deref().unwrap_or_default()
    }

    pub fn tipo_value(&self) -> Option<TipoVistoria> {
        self.tipo.as_ref().map(|t| t.value)
    }

    pub fn categoria_value(&self) -> Option<CategoriaVistoria> {
        self.categoria.as_ref().map(|c| c.value)
    }

    /// Category description as sent by the gateway, if any.
    pub fn categoria_descricao(&self) -> Option<&str> {
        self.categoria.as_ref().and_then(|c| c.descricao.as_deref())
    }

    pub fn anomalia_nome(&self) -> Option<&str> {
        self.anomalia.as_ref().map(|a| a.nome.as_str())
    }
}

/// Body of `POST /vistoria` and `PUT /vistoria/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VistoriaRequest {
    #[serde(rename = "areaVistoriaInterna_id")]
    pub area_vistoria_interna_id: i64,
    #[serde(rename = "dataHora")]
    pub data_hora: String,
    #[serde(rename = "contemAnomalia")]
    pub contem_anomalia: bool,
    pub anomalia_id: Option<i64>,
    pub tipo: TipoVistoria,
    pub categoria: CategoriaVistoria,
    pub observacao: String,
}

/// Response of `POST /vistoria`; only the id is consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VistoriaCreated {
    pub id: i64,
}

// =============================================================================
// Auth
// =============================================================================

/// Authenticated user profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// In-memory session produced by a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: AuthUser,
    pub token: String,
}
