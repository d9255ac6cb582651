//! Sign-in state and change notifications.
//!
//! An [`AuthProvider`] performs the actual sign-in. [`AuthService`] persists
//! the signed-in user in the local store and notifies listeners registered
//! through [`AuthService::on_auth_change`]. Registration returns a
//! [`Subscription`] that removes the listener when dropped.
//!
//! Provider failures carry a string code such as `auth/popup-blocked`.
//! [`describe_auth_error`] turns a code into a message for the user.

use crate::db::db::Db;
use crate::db::users::{UserRecord, Users};
use crate::libs::config::ProfileConfig;
use crate::libs::error::{AppError, AppResult};
use chrono::Utc;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::{Arc, Weak};
use thiserror::Error;

pub const CODE_POPUP_CLOSED: &str = "auth/popup-closed-by-user";
pub const CODE_POPUP_CANCELLED: &str = "auth/cancelled-popup-request";
pub const CODE_POPUP_BLOCKED: &str = "auth/popup-blocked";
pub const CODE_CONFIGURATION_NOT_FOUND: &str = "auth/configuration-not-found";
pub const CODE_UNAUTHORIZED_DOMAIN: &str = "auth/unauthorized-domain";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub uid: String,
    pub display_name: String,
    pub email: Option<String>,
    pub photo_url: Option<String>,
}

impl From<&UserRecord> for User {
    fn from(record: &UserRecord) -> Self {
        User {
            uid: record.uid.clone(),
            display_name: record.display_name.clone(),
            email: record.email.clone(),
            photo_url: record.photo_url.clone(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{code}")]
pub struct AuthFailure {
    pub code: String,
}

impl AuthFailure {
    pub fn new(code: impl Into<String>) -> Self {
        AuthFailure { code: code.into() }
    }
}

impl From<AuthFailure> for AppError {
    fn from(failure: AuthFailure) -> Self {
        AppError::UpstreamUnavailable(describe_auth_error(&failure.code))
    }
}

pub fn describe_auth_error(code: &str) -> String {
    match code {
        CODE_POPUP_CLOSED | CODE_POPUP_CANCELLED => "The sign-in process was cancelled. Please try again.".to_string(),
        CODE_POPUP_BLOCKED => "The sign-in window was blocked. Allow pop-ups and try again.".to_string(),
        CODE_CONFIGURATION_NOT_FOUND => {
            "Sign-in is not configured. Run `artikel init --config` and set up a profile.".to_string()
        }
        CODE_UNAUTHORIZED_DOMAIN => "This host is not authorized for sign-in.".to_string(),
        _ => "An unexpected error occurred. Please try again.".to_string(),
    }
}

#[allow(async_fn_in_trait)]
pub trait AuthProvider {
    async fn sign_in(&self) -> Result<User, AuthFailure>;
    async fn sign_out(&self) -> Result<(), AuthFailure>;
}

/// Signs in offline from the configured profile.
pub struct LocalProfileProvider {
    profile: Option<ProfileConfig>,
}

impl LocalProfileProvider {
    pub fn new(profile: Option<ProfileConfig>) -> Self {
        LocalProfileProvider { profile }
    }
}

impl AuthProvider for LocalProfileProvider {
    async fn sign_in(&self) -> Result<User, AuthFailure> {
        let profile = self
            .profile
            .as_ref()
            .filter(|p| p.is_configured())
            .ok_or_else(|| AuthFailure::new(CODE_CONFIGURATION_NOT_FOUND))?;

        let key = profile.email.as_deref().unwrap_or(&profile.display_name);
        Ok(User {
            uid: format!("local_{}", key.trim().to_lowercase().split_whitespace().collect::<Vec<_>>().join("_")),
            display_name: profile.display_name.trim().to_string(),
            email: profile.email.clone(),
            photo_url: profile.photo_url.clone(),
        })
    }

    async fn sign_out(&self) -> Result<(), AuthFailure> {
        Ok(())
    }
}

type Listener = Box<dyn Fn(Option<&User>) + Send>;

#[derive(Default)]
struct ListenerMap {
    next_id: u64,
    listeners: BTreeMap<u64, Listener>,
}

/// Registry of auth-change callbacks.
///
/// Listeners run while the registry is locked, so a listener must not
/// register or drop subscriptions itself.
#[derive(Default, Clone)]
pub struct AuthListeners {
    inner: Arc<Mutex<ListenerMap>>,
}

impl AuthListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(Option<&User>) + Send + 'static,
    {
        let mut map = self.inner.lock();
        let id = map.next_id;
        map.next_id += 1;
        map.listeners.insert(id, Box::new(listener));
        Subscription {
            id,
            registry: Arc::downgrade(&self.inner),
        }
    }

    pub fn notify(&self, user: Option<&User>) {
        let map = self.inner.lock();
        for listener in map.listeners.values() {
            listener(user);
        }
    }

    pub fn len(&self) -> usize {
        self.inner.lock().listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Keeps a listener registered until dropped.
#[must_use = "dropping a Subscription unregisters the listener"]
pub struct Subscription {
    id: u64,
    registry: Weak<Mutex<ListenerMap>>,
}

impl Subscription {
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.lock().listeners.remove(&self.id);
        }
    }
}

pub struct AuthService<'a, P: AuthProvider> {
    provider: P,
    users: Users<'a>,
    listeners: AuthListeners,
}

impl<'a, P: AuthProvider> AuthService<'a, P> {
    pub fn new(db: &'a Db, provider: P) -> Self {
        AuthService {
            provider,
            users: Users::new(db),
            listeners: AuthListeners::new(),
        }
    }

    pub fn current_user(&self) -> AppResult<Option<User>> {
        Ok(self.users.get()?.as_ref().map(User::from))
    }

    /// Registers `listener` and calls it once with the current user.
    pub fn on_auth_change<F>(&self, listener: F) -> AppResult<Subscription>
    where
        F: Fn(Option<&User>) + Send + 'static,
    {
        let current = self.current_user()?;
        listener(current.as_ref());
        Ok(self.listeners.subscribe(listener))
    }

    pub async fn sign_in(&self) -> AppResult<User> {
        let user = self.provider.sign_in().await.map_err(|failure| {
            tracing::warn!(code = %failure.code, "sign-in failed");
            AppError::from(failure)
        })?;

        let now = Utc::now();
        let created_at = match self.users.get()? {
            Some(existing) if existing.uid == user.uid => existing.created_at,
            _ => now,
        };
        self.users.save(&UserRecord {
            uid: user.uid.clone(),
            display_name: user.display_name.clone(),
            email: user.email.clone(),
            photo_url: user.photo_url.clone(),
            created_at,
            last_login: now,
        })?;

        tracing::info!(uid = %user.uid, "signed in");
        self.listeners.notify(Some(&user));
        Ok(user)
    }

    pub async fn sign_out(&self) -> AppResult<()> {
        self.provider.sign_out().await?;
        self.users.delete()?;
        tracing::info!("signed out");
        self.listeners.notify(None);
        Ok(())
    }
}
