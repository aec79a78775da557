//! # Auth View State
//!
//! In-memory session. `authenticated_at` plays the role of the fetch
//! envelope's `last_sync`: set on success, never cleared except by logout.

use super::fetch::next_sync_stamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vistoria_core::{AuthUser, Session};

/// Auth container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthState {
    pub user: Option<AuthUser>,
    pub token: Option<String>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub authenticated_at: Option<DateTime<Utc>>,
}

impl AuthState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }
}

/// Transitions of the auth container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthAction {
    LoginStart,
    LoginSuccess { session: Session, at: DateTime<Utc> },
    LoginFailure(String),
    /// The submission was abandoned before the check answered.
    LoginCancelled,
    /// Back to the initial state.
    Logout,
}

#[must_use]
pub fn reduce_auth(state: AuthState, action: AuthAction) -> AuthState {
    match action {
        AuthAction::LoginStart => AuthState {
            is_loading: true,
            error: None,
            ..state
        },
        AuthAction::LoginSuccess { session, at } => AuthState {
            user: Some(session.user),
            token: Some(session.token),
            is_loading: false,
            error: None,
            authenticated_at: Some(next_sync_stamp(state.authenticated_at, at)),
        },
        AuthAction::LoginFailure(message) => AuthState {
            is_loading: false,
            error: Some(message),
            ..state
        },
        AuthAction::LoginCancelled => AuthState {
            is_loading: false,
            ..state
        },
        AuthAction::Logout => AuthState::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn session() -> Session {
        Session {
            user: AuthUser {
                id: 1,
                name: "John Doe".to_string(),
                email: "john@example.com".to_string(),
            },
            token: "fake-token".to_string(),
        }
    }

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let state = AuthState::default();
        assert!(!state.is_loading);
        assert_eq!(state.error, None);
        assert_eq!(state.user, None);
        assert_eq!(state.token, None);
        assert!(!state.is_authenticated());
    }

    #[test]
    fn test_login_start_clears_error() {
        let failed = reduce_auth(
            AuthState::default(),
            AuthAction::LoginFailure("Credenciais inválidas".to_string()),
        );
        let state = reduce_auth(failed, AuthAction::LoginStart);
        assert!(state.is_loading);
        assert_eq!(state.error, None);
        assert_eq!(state.user, None);
    }

    #[test]
    fn test_login_success_stores_session() {
        let state = reduce_auth(
            AuthState::default(),
            AuthAction::LoginSuccess {
                session: session(),
                at: at(100),
            },
        );
        assert!(state.is_authenticated());
        assert_eq!(state.token.as_deref(), Some("fake-token"));
        assert_eq!(state.authenticated_at, Some(at(100)));

        let again = reduce_auth(
            state,
            AuthAction::LoginSuccess {
                session: session(),
                at: at(100),
            },
        );
        assert!(again.authenticated_at > Some(at(100)));
    }

    #[test]
    fn test_login_failure_keeps_session_fields() {
        let state = reduce_auth(
            AuthState::default(),
            AuthAction::LoginFailure("Invalid credentials".to_string()),
        );
        assert!(!state.is_loading);
        assert_eq!(state.error.as_deref(), Some("Invalid credentials"));
        assert_eq!(state.user, None);
        assert_eq!(state.token, None);
    }

    #[test]
    fn test_login_cancelled_only_clears_loading() {
        let logged_in = reduce_auth(
            AuthState::default(),
            AuthAction::LoginSuccess {
                session: session(),
                at: at(5),
            },
        );
        let pending = reduce_auth(logged_in.clone(), AuthAction::LoginStart);
        let state = reduce_auth(pending, AuthAction::LoginCancelled);
        assert!(!state.is_loading);
        assert_eq!(state, logged_in);
    }

    #[test]
    fn test_logout_resets() {
        let logged_in = reduce_auth(
            AuthState::default(),
            AuthAction::LoginSuccess {
                session: session(),
                at: at(1),
            },
        );
        assert_eq!(reduce_auth(logged_in, AuthAction::Logout), AuthState::default());
    }
}
