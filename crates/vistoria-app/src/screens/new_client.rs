//! New client form.

use crate::core::SharedApp;
use crate::forms::FieldErrors;
use once_cell::sync::Lazy;
use regex::Regex;
use vistoria_core::format::{digits_only, format_phone};
use vistoria_core::{Alert, NewClient};

pub const FORM_HAS_ERRORS: &str = "Por favor, corrija os erros no formulário";
pub const CLIENT_CREATED: &str = "Cliente cadastrado com sucesso!";
pub const CLIENT_CREATE_FAILED: &str = "Não foi possível cadastrar o cliente. Tente novamente.";

#[allow(clippy::expect_used)]
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email regex is valid"));

/// Fields of the client form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ClientField {
    Nome,
    Email,
    Telefone,
}

/// Result of a save attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientSubmitOutcome {
    Invalid,
    Created,
    Failed,
}

/// Validate the three fields; the phone is checked on its digits.
#[must_use]
pub fn validate_client(nome: &str, email: &str, telefone: &str) -> FieldErrors<ClientField> {
    let mut errors = FieldErrors::default();

    if nome.trim().is_empty() {
        errors.set(ClientField::Nome, "Nome é obrigatório");
    }

    if email.trim().is_empty() {
        errors.set(ClientField::Email, "Email é obrigatório");
    } else if !EMAIL_PATTERN.is_match(email) {
        errors.set(ClientField::Email, "Email inválido");
    }

    if telefone.trim().is_empty() {
        errors.set(ClientField::Telefone, "Telefone é obrigatório");
    } else if !(8..=11).contains(&digits_only(telefone).len()) {
        errors.set(ClientField::Telefone, "Telefone inválido");
    }

    errors
}

pub struct NewClientScreen {
    app: SharedApp,
    nome: String,
    email: String,
    /// Masked as typed.
    telefone: String,
    errors: FieldErrors<ClientField>,
    submitting: bool,
}

impl NewClientScreen {
    pub fn new(app: SharedApp) -> Self {
        Self {
            app,
            nome: String::new(),
            email: String::new(),
            telefone: String::new(),
            errors: FieldErrors::default(),
            submitting: false,
        }
    }

    pub fn set_nome(&mut self, nome: impl Into<String>) {
        self.nome = nome.into();
        self.errors.clear(ClientField::Nome);
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
        self.errors.clear(ClientField::Email);
    }

    pub fn set_telefone(&mut self, telefone: &str) {
        self.telefone = format_phone(telefone);
        self.errors.clear(ClientField::Telefone);
    }

    pub fn telefone(&self) -> &str {
        &self.telefone
    }

    pub fn errors(&self) -> &FieldErrors<ClientField> {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub async fn submit(&mut self) -> ClientSubmitOutcome {
        let (gateway, alerts, navigation) = {
            let core = self.app.read().await;
            (core.gateway(), core.alerts(), core.navigation())
        };

        self.errors = validate_client(&self.nome, &self.email, &self.telefone);
        if !self.errors.is_empty() {
            alerts.alert(Alert::error(FORM_HAS_ERRORS));
            return ClientSubmitOutcome::Invalid;
        }

        let request = NewClient {
            nome: self.nome.clone(),
            email: self.email.clone(),
            telefone: digits_only(&self.telefone),
        };

        self.submitting = true;
        let result = gateway.create_client(&request).await;
        self.submitting = false;

        match result {
            Ok(()) => {
                tracing::info!(nome = %request.nome, "client created");
                alerts.alert(Alert::success(CLIENT_CREATED));
                navigation.go_back();
                ClientSubmitOutcome::Created
            }
            Err(e) => {
                tracing::error!("failed to create client: {e}");
                alerts.alert(Alert::error(CLIENT_CREATE_FAILED));
                ClientSubmitOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_empty_yields_three_required_errors() {
        let errors = validate_client("", "", "");
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get(ClientField::Nome), Some("Nome é obrigatório"));
        assert_eq!(errors.get(ClientField::Email), Some("Email é obrigatório"));
        assert_eq!(errors.get(ClientField::Telefone), Some("Telefone é obrigatório"));
    }

    #[test]
    fn test_bad_email_replaces_required_error() {
        let errors = validate_client("Maria", "maria.example.com", "(11) 98765-4321");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(ClientField::Email), Some("Email inválido"));
    }

    #[test]
    fn test_phone_digit_bounds() {
        assert!(validate_client("a", "a@b.co", "1234567").get(ClientField::Telefone).is_some());
        assert!(validate_client("a", "a@b.co", "12345678").is_empty());
        assert!(validate_client("a", "a@b.co", "(11) 98765-4321").is_empty());
        assert_eq!(
            validate_client("a", "a@b.co", "123456789012").get(ClientField::Telefone),
            Some("Telefone inválido")
        );
    }

    #[test]
    fn test_whitespace_only_is_missing() {
        let errors = validate_client("   ", "a@b.co", "12345678");
        assert_eq!(errors.get(ClientField::Nome), Some("Nome é obrigatório"));
    }
}
