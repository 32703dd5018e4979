//! Admin session
//!
//! The bearer token and admin profile live in one persistent key/value
//! store under fixed keys. The token is written on a successful login,
//! read for every authenticated call, and removed on logout. Storage is
//! injected through [`SessionStore`] so the browser uses `localStorage`
//! and tests use memory.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;

use super::api::models::{AdminProfile, LoginSuccess};

pub const TOKEN_KEY: &str = "adminToken";
pub const PROFILE_KEY: &str = "adminData";

/// Opaque bearer token. Never printed in full.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header
    pub fn header_value(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(***)")
    }
}

/// Persistent string key/value storage
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove(&self, key: &str);
}

/// In-memory store, used by tests and during server rendering
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

/// Where the admin area may go on mount
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminGuard {
    Allow(AuthToken),
    RedirectToLogin,
}

#[derive(Debug)]
pub struct AdminSession<S> {
    store: S,
}

impl<S: SessionStore> AdminSession<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Stored token, if any. Blank values count as absent.
    pub fn token(&self) -> Option<AuthToken> {
        self.store
            .get(TOKEN_KEY)
            .filter(|t| !t.trim().is_empty())
            .map(AuthToken::new)
    }

    /// Stored profile. A corrupt blob is treated as missing.
    pub fn profile(&self) -> Option<AdminProfile> {
        self.store
            .get(PROFILE_KEY)
            .and_then(|json| serde_json::from_str(&json).ok())
    }

    pub fn is_signed_in(&self) -> bool {
        self.token().is_some()
    }

    pub fn guard(&self) -> AdminGuard {
        match self.token() {
            Some(token) => AdminGuard::Allow(token),
            None => AdminGuard::RedirectToLogin,
        }
    }

    /// Persist a successful login
    pub fn sign_in(&self, login: &LoginSuccess) -> Result<AuthToken, String> {
        if login.token.trim().is_empty() {
            return Err("Login response carried an empty token".to_string());
        }
        let profile = serde_json::to_string(&login.admin).map_err(|e| e.to_string())?;
        self.store.set(TOKEN_KEY, &login.token)?;
        if let Err(e) = self.store.set(PROFILE_KEY, &profile) {
            self.store.remove(TOKEN_KEY);
            return Err(e);
        }
        Ok(AuthToken::new(login.token.clone()))
    }

    pub fn sign_out(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(PROFILE_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login(token: &str) -> LoginSuccess {
        LoginSuccess {
            token: token.to_string(),
            admin: AdminProfile {
                id: Some(1),
                email: "admin@edutalks.in".to_string(),
                name: Some("Admin".to_string()),
            },
        }
    }

    #[test]
    fn test_empty_store_redirects() {
        let session = AdminSession::new(MemoryStore::new());
        assert!(!session.is_signed_in());
        assert_eq!(session.guard(), AdminGuard::RedirectToLogin);
        assert!(session.profile().is_none());
    }

    #[test]
    fn test_sign_in_then_out() {
        let session = AdminSession::new(MemoryStore::new());
        let token = session.sign_in(&login("abc")).unwrap();
        assert_eq!(session.guard(), AdminGuard::Allow(token.clone()));
        assert_eq!(token.header_value(), "Bearer abc");
        assert_eq!(session.profile().unwrap().display_name(), "Admin");

        session.sign_out();
        assert_eq!(session.guard(), AdminGuard::RedirectToLogin);
        assert!(session.profile().is_none());
    }

    #[test]
    fn test_empty_token_is_not_stored() {
        let session = AdminSession::new(MemoryStore::new());
        assert!(session.sign_in(&login("  ")).is_err());
        assert!(!session.is_signed_in());
    }

    #[test]
    fn test_blank_stored_token_counts_as_absent() {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "").unwrap();
        assert_eq!(AdminSession::new(store).guard(), AdminGuard::RedirectToLogin);
    }

    #[test]
    fn test_corrupt_profile_ignored() {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "t").unwrap();
        store.set(PROFILE_KEY, "{not json").unwrap();
        let session = AdminSession::new(store);
        assert!(session.is_signed_in());
        assert!(session.profile().is_none());
    }

    #[test]
    fn test_token_debug_is_redacted() {
        let token = AuthToken::new("secret-value");
        assert!(!format!("{token:?}").contains("secret"));
    }
}
