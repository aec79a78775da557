//! Canned gateway payloads.

use vistoria_core::{
    Anomalia, CategoriaInfo, CategoriaVistoria, Client, TipoInfo, TipoVistoria, Vistoria,
};

pub fn client(id: i64, nome: &str, email: &str, telefone: &str) -> Client {
    Client {
        id,
        nome: nome.to_string(),
        email: email.to_string(),
        telefone: telefone.to_string(),
    }
}

/// John Doe and Jane Smith.
pub fn sample_clients() -> Vec<Client> {
    vec![
        client(1, "John Doe", "john@example.com", "123456789"),
        client(2, "Jane Smith", "jane@example.com", "987654321"),
    ]
}

pub fn anomalia(id: i64, nome: &str) -> Anomalia {
    Anomalia {
        id,
        nome: nome.to_string(),
    }
}

pub fn sample_anomalias() -> Vec<Anomalia> {
    vec![
        anomalia(1, "Fissura"),
        anomalia(2, "Infiltração"),
        anomalia(3, "Corrosão"),
    ]
}

/// Inspection without anomaly, tipo `ENDOGENA`, categoria `BAIXA`.
pub fn vistoria(id: i64, observacao: &str) -> Vistoria {
    Vistoria {
        id,
        area_vistoria_interna_id: 1,
        data_hora: "2024-03-17T10:00:00".to_string(),
        contem_anomalia: false,
        anomalia: None,
        tipo: Some(TipoInfo {
            value: TipoVistoria::Endogena,
            descricao: Some("Endógena".to_string()),
        }),
        categoria: Some(CategoriaInfo {
            value: CategoriaVistoria::Baixa,
            descricao: Some("Baixa".to_string()),
            prioridade: Some(3),
        }),
        observacao: Some(observacao.to_string()),
        fotos: Vec::new(),
    }
}

/// Inspection flagged with `anomalia`, categoria `ALTA`.
pub fn vistoria_with_anomalia(id: i64, observacao: &str, anomalia: Anomalia) -> Vistoria {
    Vistoria {
        contem_anomalia: true,
        anomalia: Some(anomalia),
        categoria: Some(CategoriaInfo {
            value: CategoriaVistoria::Alta,
            descricao: Some("Alta".to_string()),
            prioridade: Some(1),
        }),
        ..vistoria(id, observacao)
    }
}

pub fn sample_vistorias() -> Vec<Vistoria> {
    vec![
        vistoria(123, "Teste"),
        vistoria_with_anomalia(124, "Parede norte", anomalia(1, "Fissura")),
    ]
}
