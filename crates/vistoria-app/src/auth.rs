//! Credential verification.
//!
//! Login goes through [`CredentialVerifier`] so a real identity provider can
//! replace the in-memory check without touching the login screen. The only
//! implementation today is [`MockCredentialVerifier`].

use async_trait::async_trait;
use std::time::Duration;
use vistoria_core::{AuthUser, Session, VistoriaResult};

/// Checks a credential pair.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// `Ok(Some(_))` on acceptance, `Ok(None)` on rejection, `Err` when the
    /// check itself could not be performed.
    async fn verify(&self, email: &str, password: &str) -> VistoriaResult<Option<Session>>;
}

/// Accepts a single hardcoded account after a fixed delay.
// TODO: replace with a verifier backed by the gateway once it exposes an auth endpoint.
#[derive(Debug, Clone)]
pub struct MockCredentialVerifier {
    delay: Duration,
}

impl MockCredentialVerifier {
    pub const EMAIL: &'static str = "admin@admin.com";
    pub const PASSWORD: &'static str = "123456";
    pub const TOKEN: &'static str = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.mock";

    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// No artificial latency.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    /// The session handed out on a successful check.
    pub fn session() -> Session {
        Session {
            user: AuthUser {
                id: 1,
                name: "Admin".to_string(),
                email: Self::EMAIL.to_string(),
            },
            token: Self::TOKEN.to_string(),
        }
    }
}

#[async_trait]
impl CredentialVerifier for MockCredentialVerifier {
    async fn verify(&self, email: &str, password: &str) -> VistoriaResult<Option<Session>> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if email == Self::EMAIL && password == Self::PASSWORD {
            Ok(Some(Self::session()))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_accepts_only_the_mock_account() {
        let verifier = MockCredentialVerifier::instant();
        let session = verifier.verify("admin@admin.com", "123456").await.unwrap();
        assert_eq!(session, Some(MockCredentialVerifier::session()));

        assert_eq!(verifier.verify("admin@admin.com", "654321").await.unwrap(), None);
        assert_eq!(verifier.verify("ADMIN@admin.com", "123456").await.unwrap(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_waits_for_configured_delay() {
        let verifier = MockCredentialVerifier::new(Duration::from_millis(1500));
        let started = tokio::time::Instant::now();
        verifier.verify("a@b.com", "x").await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(1500));
    }
}
