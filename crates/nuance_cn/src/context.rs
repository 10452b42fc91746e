//! Capability bag for injected services
//!
//! Components that need app services (authentication, notifications) take a
//! [`Capabilities`] reference instead of reaching for globals. Services are
//! keyed by type; trait objects go in as `Arc<dyn Trait>`.
//!
//! ```rust,ignore
//! let mut caps = Capabilities::new();
//! caps.provide::<Arc<dyn AuthService>>(Arc::new(MyAuth::default()));
//!
//! let auth = caps.get::<Arc<dyn AuthService>>()?;
//! ```

use std::any::{type_name, Any, TypeId};
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::error::ContextError;

/// Typed map from service type to instance
#[derive(Clone, Default)]
pub struct Capabilities {
    services: FxHashMap<TypeId, Arc<dyn Any + Send + Sync>>,
}

impl Capabilities {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a service, replacing any previous one of the same type
    pub fn provide<T: Send + Sync + 'static>(&mut self, service: T) -> &mut Self {
        self.services.insert(TypeId::of::<T>(), Arc::new(service));
        self
    }

    pub fn with<T: Send + Sync + 'static>(mut self, service: T) -> Self {
        self.provide(service);
        self
    }

    pub fn get<T: Send + Sync + 'static>(&self) -> Result<&T, ContextError> {
        self.try_get::<T>()
            .ok_or(ContextError::Missing(type_name::<T>()))
    }

    pub fn try_get<T: Send + Sync + 'static>(&self) -> Option<&T> {
        self.services
            .get(&TypeId::of::<T>())
            .and_then(|service| service.downcast_ref::<T>())
    }

    pub fn contains<T: Send + Sync + 'static>(&self) -> bool {
        self.services.contains_key(&TypeId::of::<T>())
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

impl std::fmt::Debug for Capabilities {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Capabilities")
            .field("services", &self.services.len())
            .finish()
    }
}

/// Email/password pair submitted by sign-in and sign-up forms
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Authentication provider
pub trait AuthService: Send + Sync {
    /// `None` while the session is still being restored
    fn is_signed_in(&self) -> Option<bool>;

    fn sign_in(&self, credentials: &Credentials);

    fn sign_out(&self);

    fn sign_up(&self, credentials: &Credentials);
}

/// OS notification permission
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PermissionStatus {
    #[default]
    Undetermined,
    Granted,
    Denied,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Notification {
    pub id: String,
    pub title: Option<String>,
    pub body: Option<String>,
}

/// Notification state shared with the UI
pub trait NotificationCenter: Send + Sync {
    fn permission_status(&self) -> Option<PermissionStatus>;

    fn set_permission_status(&self, status: PermissionStatus);

    /// Most recent notification, received or tapped
    fn notification(&self) -> Option<Notification>;

    /// Most recent notification received while the app was in the foreground
    fn in_app_notification(&self) -> Option<Notification>;
}
