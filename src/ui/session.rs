//! Admin session context
//!
//! Wraps [`AdminSession`] over `localStorage` and mirrors its state into
//! signals so views react to sign in and sign out. Both server and client
//! start signed out to keep hydration stable; the client restores the
//! stored session right after hydrating.

use leptos::prelude::*;

use crate::core::api::models::{AdminProfile, LoginSuccess};
use crate::core::session::{AdminGuard, AdminSession, AuthToken, SessionStore};

/// `window.localStorage`. Inert during server rendering.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

#[cfg(not(feature = "ssr"))]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

impl SessionStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(not(feature = "ssr"))]
        {
            local_storage()?.get_item(key).ok()?
        }
        #[cfg(feature = "ssr")]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        #[cfg(not(feature = "ssr"))]
        {
            local_storage()
                .ok_or_else(|| "Local storage is unavailable".to_string())?
                .set_item(key, value)
                .map_err(|e| format!("{e:?}"))
        }
        #[cfg(feature = "ssr")]
        {
            let _ = (key, value);
            Err("Local storage is unavailable".to_string())
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(not(feature = "ssr"))]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(feature = "ssr")]
        {
            let _ = key;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Not yet read from storage
    Restoring,
    SignedOut,
    SignedIn,
}

#[derive(Clone, Copy)]
pub struct SessionContext {
    pub state: RwSignal<SessionState>,
    pub profile: RwSignal<Option<AdminProfile>>,
}

impl SessionContext {
    fn session(&self) -> AdminSession<LocalStorageStore> {
        AdminSession::new(LocalStorageStore)
    }

    /// Token for an authenticated call, read fresh from storage
    pub fn token(&self) -> Option<AuthToken> {
        self.session().token()
    }

    pub fn guard(&self) -> AdminGuard {
        self.session().guard()
    }

    pub fn is_signed_in(&self) -> bool {
        self.state.get() == SessionState::SignedIn
    }

    pub fn sign_in(&self, login: &LoginSuccess) -> Result<AuthToken, String> {
        let token = self.session().sign_in(login)?;
        self.profile.set(Some(login.admin.clone()));
        self.state.set(SessionState::SignedIn);
        Ok(token)
    }

    pub fn sign_out(&self) {
        self.session().sign_out();
        self.profile.set(None);
        self.state.set(SessionState::SignedOut);
    }

    #[cfg_attr(feature = "ssr", allow(dead_code))]
    fn restore(&self) {
        let session = self.session();
        if session.is_signed_in() {
            self.profile.set(session.profile());
            self.state.set(SessionState::SignedIn);
        } else {
            self.state.set(SessionState::SignedOut);
        }
    }
}

/// Provide session context to the component tree
pub fn provide_session_context() -> SessionContext {
    let ctx = SessionContext {
        state: RwSignal::new(SessionState::Restoring),
        profile: RwSignal::new(None),
    };

    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| ctx.restore());

    provide_context(ctx);
    ctx
}

pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}
