//! # Session Commands
//!
//! Login, registration, logout and profile edits. Every command except
//! `logout` waits out the configured latency before answering.
//!
//! ## Login Form Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  login(email, password)                                                 │
//! │         │                                                               │
//! │         ├── empty field ──────────► INVALID_CREDENTIALS                 │
//! │         │                           "Invalid credentials"               │
//! │         │                                                               │
//! │         ├── admin@aura.com/admin123 ─► Admin User (isAdmin)             │
//! │         │                                                               │
//! │         └── anything else ────────► Customer with the given email       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::state::{SessionState, SessionStorage};
use aura_core::{User, UserUpdate};

/// Session snapshot for the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub is_admin: bool,
    pub is_loading: bool,
}

async fn snapshot<S: SessionStorage>(session: &SessionState<S>) -> SessionResponse {
    let user = session.current_user().await;
    SessionResponse {
        is_authenticated: user.is_some(),
        is_admin: user.as_ref().is_some_and(User::is_admin),
        is_loading: session.is_loading(),
        user,
    }
}

pub async fn get_session<S: SessionStorage>(session: &SessionState<S>) -> SessionResponse {
    debug!("get_session command");
    snapshot(session).await
}

/// Logs in.
///
/// ## Errors
/// `INVALID_CREDENTIALS` when email or password is empty
pub async fn login<S: SessionStorage>(
    session: &SessionState<S>,
    email: &str,
    password: &str,
) -> Result<SessionResponse, ApiError> {
    debug!(has_email = !email.is_empty(), "login command");
    session.login(email, password).await?;
    Ok(snapshot(session).await)
}

/// Registers a new customer account and logs it in.
pub async fn register<S: SessionStorage>(
    session: &SessionState<S>,
    name: &str,
    email: &str,
    password: &str,
) -> Result<SessionResponse, ApiError> {
    debug!(has_email = !email.is_empty(), "register command");
    session.register(name, email, password).await?;
    Ok(snapshot(session).await)
}

pub async fn logout<S: SessionStorage>(
    session: &SessionState<S>,
) -> Result<SessionResponse, ApiError> {
    debug!("logout command");
    session.logout().await?;
    Ok(snapshot(session).await)
}

/// Saves profile edits (name, phone, addresses, ...).
///
/// ## Errors
/// `NOT_AUTHENTICATED` when nobody is logged in
pub async fn update_profile<S: SessionStorage>(
    session: &SessionState<S>,
    update: UserUpdate,
) -> Result<SessionResponse, ApiError> {
    debug!(empty = update.is_empty(), "update_profile command");
    session.update_profile(update).await?;
    Ok(snapshot(session).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use crate::error::ErrorCode;
    use crate::state::MemorySessionStorage;

    fn session() -> SessionState<MemorySessionStorage> {
        SessionState::new(MemorySessionStorage::new(), Duration::ZERO)
    }

    #[tokio::test]
    async fn test_login_and_logout() {
        let session = session();

        let response = login(&session, "admin@aura.com", "admin123").await.unwrap();
        assert!(response.is_authenticated);
        assert!(response.is_admin);
        assert!(!response.is_loading);

        let response = logout(&session).await.unwrap();
        assert_eq!(response.user, None);
        assert!(!response.is_authenticated);
    }

    #[tokio::test]
    async fn test_empty_password_is_invalid_credentials() {
        let session = session();

        let err = login(&session, "jane@example.com", "").await.unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidCredentials);
        assert_eq!(err.message, "Invalid credentials");
        assert!(!get_session(&session).await.is_authenticated);
    }

    #[tokio::test]
    async fn test_register_then_update_profile() {
        let session = session();
        let registered = register(&session, "Ann", "ann@example.com", "pw")
            .await
            .unwrap()
            .user
            .unwrap();

        let response = update_profile(
            &session,
            UserUpdate {
                email: Some("ann@aura.com".to_string()),
                ..UserUpdate::default()
            },
        )
        .await
        .unwrap();

        let user = response.user.unwrap();
        assert_eq!(user.id, registered.id);
        assert_eq!(user.email, "ann@aura.com");
        assert!(!response.is_admin);
    }

    #[tokio::test]
    async fn test_update_profile_logged_out() {
        let err = update_profile(&session(), UserUpdate::default())
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::NotAuthenticated);
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_logs_do_not_contain_email() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let session = session();
        login(&session, "jane@example.com", "pw").await.unwrap();
        register(&session, "Ann", "ann@example.com", "pw").await.unwrap();

        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("login command"));
        assert!(!output.contains("jane@example.com"));
        assert!(!output.contains("ann@example.com"));
    }

    #[tokio::test]
    async fn test_response_is_camel_case() {
        let session = session();
        let json = serde_json::to_value(get_session(&session).await).unwrap();

        assert_eq!(json["isAuthenticated"], false);
        assert!(json["user"].is_null());
    }
}
