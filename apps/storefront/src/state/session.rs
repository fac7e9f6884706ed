//! # Session State
//!
//! Tracks the logged-in user and keeps the persisted copy in step.
//!
//! ## Session Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session Operations                                   │
//! │                                                                         │
//! │  login / register / update_profile                                     │
//! │         │                                                               │
//! │         ├── is_loading = true                                           │
//! │         ├── sleep(simulated latency)                                    │
//! │         ├── aura_core::auth (resolve / fabricate / merge)               │
//! │         ├── storage.save(&user)      ◄── overwrite wholesale            │
//! │         ├── user = Some(..)                                             │
//! │         └── is_loading = false                                          │
//! │                                                                         │
//! │  logout (no delay)                                                      │
//! │         ├── user = None                                                 │
//! │         └── storage.clear()                                             │
//! │                                                                         │
//! │  startup                                                                │
//! │         └── storage.load() ── unreadable? ──► warn!, logged out         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Storage
//! Persistence goes through [`SessionStorage`]. The application uses the
//! SQLite-backed [`SessionRepository`]; tests use [`MemorySessionStorage`].
//!
//! ## Thread Safety
//! The user sits behind a `tokio::sync::RwLock`. Writers hold the lock
//! across the storage call so the persisted record and the in-memory user
//! never disagree.

use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use aura_core::auth::{apply_update, register_customer, resolve_login};
use aura_core::{CoreError, User, UserUpdate};
use aura_db::{DbResult, SessionRepository};

// =============================================================================
// Errors
// =============================================================================

/// Session operation errors.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Session storage failed: {0}")]
    Storage(#[from] aura_db::DbError),
}

// =============================================================================
// Storage
// =============================================================================

/// Durable home of the one persisted session record.
pub trait SessionStorage: Send + Sync {
    /// `Ok(None)` when nobody is logged in.
    fn load(&self) -> impl Future<Output = DbResult<Option<User>>> + Send;

    /// Replaces the stored record.
    fn save(&self, user: &User) -> impl Future<Output = DbResult<()>> + Send;

    /// Removes the stored record. A no-op when nothing is stored.
    fn clear(&self) -> impl Future<Output = DbResult<()>> + Send;
}

impl SessionStorage for SessionRepository {
    fn load(&self) -> impl Future<Output = DbResult<Option<User>>> + Send {
        SessionRepository::load(self)
    }

    fn save(&self, user: &User) -> impl Future<Output = DbResult<()>> + Send {
        SessionRepository::save(self, user)
    }

    fn clear(&self) -> impl Future<Output = DbResult<()>> + Send {
        SessionRepository::clear(self)
    }
}

/// Process-local storage holding the record as JSON, the way a browser's
/// local storage would.
#[derive(Debug, Default)]
pub struct MemorySessionStorage {
    record: Mutex<Option<String>>,
}

impl MemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-filled with a raw record, readable or not.
    pub fn with_raw_record(json: impl Into<String>) -> Self {
        MemorySessionStorage {
            record: Mutex::new(Some(json.into())),
        }
    }

    /// The raw stored record, if any.
    pub fn raw_record(&self) -> Option<String> {
        self.record
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn read(&self) -> DbResult<Option<User>> {
        match self.raw_record() {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    fn write(&self, user: &User) -> DbResult<()> {
        let json = serde_json::to_string(user)?;
        *self.record.lock().unwrap_or_else(PoisonError::into_inner) = Some(json);
        Ok(())
    }

    fn remove(&self) {
        *self.record.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

impl SessionStorage for MemorySessionStorage {
    fn load(&self) -> impl Future<Output = DbResult<Option<User>>> + Send {
        let result = self.read();
        async move { result }
    }

    fn save(&self, user: &User) -> impl Future<Output = DbResult<()>> + Send {
        let result = self.write(user);
        async move { result }
    }

    fn clear(&self) -> impl Future<Output = DbResult<()>> + Send {
        self.remove();
        async { Ok(()) }
    }
}

// =============================================================================
// Session State
// =============================================================================

/// The session store.
#[derive(Debug)]
pub struct SessionState<S> {
    user: RwLock<Option<User>>,
    storage: S,
    latency: Duration,
    in_flight: AtomicUsize,
}

/// Marks a delayed operation as in flight until dropped.
struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn start(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        InFlight(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl<S: SessionStorage> SessionState<S> {
    /// A logged-out session.
    pub fn new(storage: S, latency: Duration) -> Self {
        SessionState {
            user: RwLock::new(None),
            storage,
            latency,
            in_flight: AtomicUsize::new(0),
        }
    }

    /// A session restored from `storage`.
    ///
    /// An unreadable record is logged and the session starts logged out.
    pub async fn restore(storage: S, latency: Duration) -> Self {
        let user = match storage.load().await {
            Ok(user) => user,
            Err(e) => {
                warn!("Discarding unreadable persisted session: {}", e);
                None
            }
        };

        if let Some(user) = &user {
            info!(user_id = %user.id, "Session restored");
        }

        SessionState {
            user: RwLock::new(user),
            ..Self::new(storage, latency)
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub async fn current_user(&self) -> Option<User> {
        self.user.read().await.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.user.read().await.is_some()
    }

    pub async fn is_admin(&self) -> bool {
        self.user.read().await.as_ref().is_some_and(User::is_admin)
    }

    /// `true` while a delayed operation is running.
    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    /// Logs in with the mock credential rules.
    ///
    /// ## Errors
    /// `CoreError::InvalidCredentials` when either field is empty; the
    /// session is left unchanged.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, SessionError> {
        let _loading = InFlight::start(&self.in_flight);
        self.simulate_latency().await;

        let user = resolve_login(email, password)?;

        let mut current = self.user.write().await;
        self.storage.save(&user).await?;
        *current = Some(user.clone());

        info!(user_id = %user.id, admin = user.is_admin(), "Logged in");
        Ok(user)
    }

    /// Registers a new customer and logs them in. The password is not kept.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        _password: &str,
    ) -> Result<User, SessionError> {
        let _loading = InFlight::start(&self.in_flight);
        self.simulate_latency().await;

        let user = register_customer(name, email);

        let mut current = self.user.write().await;
        self.storage.save(&user).await?;
        *current = Some(user.clone());

        info!(user_id = %user.id, "Registered new customer");
        Ok(user)
    }

    /// Logs out immediately.
    ///
    /// The in-memory session is cleared even when the storage call fails.
    pub async fn logout(&self) -> Result<(), SessionError> {
        let mut current = self.user.write().await;
        let previous = current.take();
        self.storage.clear().await?;

        if let Some(user) = previous {
            info!(user_id = %user.id, "Logged out");
        }
        Ok(())
    }

    /// Shallow-merges `update` into the current user.
    ///
    /// ## Errors
    /// `CoreError::NotAuthenticated` when nobody is logged in.
    pub async fn update_profile(&self, update: UserUpdate) -> Result<User, SessionError> {
        let _loading = InFlight::start(&self.in_flight);
        self.simulate_latency().await;

        let mut current = self.user.write().await;
        let mut user = current.clone().ok_or(CoreError::NotAuthenticated)?;

        apply_update(&mut user, update);
        self.storage.save(&user).await?;
        *current = Some(user.clone());

        debug!(user_id = %user.id, "Profile updated");
        Ok(user)
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
