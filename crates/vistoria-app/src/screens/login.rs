//! Login screen.

use crate::core::SharedApp;
use crate::views::AuthAction;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use vistoria_core::{Alert, Route};

pub const MISSING_FIELDS: &str = "Por favor, preencha todos os campos";
pub const INVALID_CREDENTIALS: &str = "Credenciais inválidas";
pub const INVALID_CREDENTIALS_ALERT: &str = "Email ou senha inválidos";
pub const LOGIN_ERROR: &str = "Erro ao realizar login";
pub const LOGIN_ERROR_ALERT: &str = "Ocorreu um erro ao realizar o login";

/// Result of a login submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    /// A field was empty; nothing was dispatched.
    MissingFields,
    /// A login was already in progress.
    Busy,
    Authenticated,
    Rejected,
    /// The verifier itself failed.
    Failed,
}

/// Email/password form in front of the mock credential check.
pub struct LoginScreen {
    app: SharedApp,
    email: String,
    password: String,
}

impl LoginScreen {
    pub fn new(app: SharedApp) -> Self {
        Self {
            app,
            email: String::new(),
            password: String::new(),
        }
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Whether the auth container reports a login in progress.
    pub async fn is_loading(&self) -> bool {
        self.app.read().await.views().auth.is_loading
    }

    pub async fn submit(&mut self) -> LoginOutcome {
        let (mut pending, verifier, alerts, navigation) = {
            let mut core = self.app.write().await;
            if self.email.is_empty() || self.password.is_empty() {
                core.alerts().alert(Alert::error(MISSING_FIELDS));
                return LoginOutcome::MissingFields;
            }
            let gate = core.login_gate();
            if gate.swap(true, Ordering::AcqRel) {
                return LoginOutcome::Busy;
            }
            core.dispatch_auth(AuthAction::LoginStart);
            let pending = PendingLogin {
                app: self.app.clone(),
                gate,
                settled: false,
            };
            (pending, core.verifier(), core.alerts(), core.navigation())
        };

        let verdict = verifier.verify(&self.email, &self.password).await;

        let mut core = self.app.write().await;
        pending.settled = true;
        match verdict {
            Ok(Some(session)) => {
                let at = core.now();
                tracing::info!(user = %session.user.email, "login succeeded");
                core.dispatch_auth(AuthAction::LoginSuccess { session, at });
                drop(core);
                navigation.navigate(Route::SharedList);
                LoginOutcome::Authenticated
            }
            Ok(None) => {
                tracing::info!(email = %self.email, "login rejected");
                core.dispatch_auth(AuthAction::LoginFailure(INVALID_CREDENTIALS.to_string()));
                drop(core);
                alerts.alert(Alert::error(INVALID_CREDENTIALS_ALERT));
                LoginOutcome::Rejected
            }
            Err(e) => {
                tracing::error!("credential check failed: {e}");
                core.dispatch_auth(AuthAction::LoginFailure(LOGIN_ERROR.to_string()));
                drop(core);
                alerts.alert(Alert::error(LOGIN_ERROR_ALERT));
                LoginOutcome::Failed
            }
        }
    }
}

/// Releases the login gate when a submission ends, including when the
/// submit future is dropped before the verifier answers.
struct PendingLogin {
    app: SharedApp,
    gate: Arc<AtomicBool>,
    settled: bool,
}

impl Drop for PendingLogin {
    fn drop(&mut self) {
        self.gate.store(false, Ordering::Release);
        if self.settled {
            return;
        }
        tracing::warn!("login abandoned before the credential check answered");
        // Contended lock: the next LoginStart overwrites the stale flag.
        if let Some(mut core) = self.app.try_write() {
            core.dispatch_auth(AuthAction::LoginCancelled);
        }
    }
}

/// End the session and return to the login screen.
pub async fn logout(app: &SharedApp) {
    let navigation = {
        let mut core = app.write().await;
        core.dispatch_auth(AuthAction::Logout);
        core.navigation()
    };
    tracing::info!("logged out");
    navigation.navigate(Route::Login);
}
