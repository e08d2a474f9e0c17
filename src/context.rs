//! Session Context
//!
//! Session flag handle provided via Leptos Context API.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::auth::{AuthError, Verifier};
use crate::store::{AppState, AppStateStoreFields, AppStore};

/// Handle to the tab-lifetime session flag.
/// `login` does no credential check; callers verify first.
#[derive(Clone, Copy)]
pub struct Session {
    store: AppStore,
}

impl Session {
    pub fn new() -> Self {
        Self {
            store: Store::new(AppState::default()),
        }
    }

    /// Reactive read of the session flag
    pub fn is_logged_in(&self) -> bool {
        self.store.is_logged_in().get()
    }

    pub fn login(&self) {
        log::info!("[AUTH] Session started");
        self.store.is_logged_in().set(true);
    }

    /// Verify credentials, then start the session. On failure the flag is
    /// left untouched.
    pub fn sign_in(&self, verifier: &Verifier, username: &str, password: &str) -> Result<(), AuthError> {
        match verifier.verify(username, password) {
            Ok(()) => {
                self.login();
                Ok(())
            }
            Err(e) => {
                log::warn!("[AUTH] Login rejected");
                Err(e)
            }
        }
    }

    pub fn logout(&self) {
        log::info!("[AUTH] Session ended");
        self.store.is_logged_in().set(false);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the session handle from context
pub fn use_session() -> Session {
    expect_context::<Session>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::StaticCredentials;
    use crate::config::AppConfig;

    fn verifier() -> Verifier {
        Verifier::new(StaticCredentials::from_config(&AppConfig::default()))
    }

    #[test]
    fn test_session_transitions() {
        let owner = Owner::new();
        owner.with(|| {
            let session = Session::new();
            assert!(!session.is_logged_in());

            session.login();
            assert!(session.is_logged_in());

            session.login();
            assert!(session.is_logged_in());

            session.logout();
            assert!(!session.is_logged_in());
        });
    }

    #[test]
    fn test_copies_share_state() {
        let owner = Owner::new();
        owner.with(|| {
            let session = Session::new();
            let copy = session;
            copy.login();
            assert!(session.is_logged_in());
        });
    }

    #[test]
    fn test_fresh_session_starts_logged_out() {
        let owner = Owner::new();
        owner.with(|| {
            let first = Session::new();
            first.login();
            let after_reload = Session::new();
            assert!(!after_reload.is_logged_in());
        });
    }

    #[test]
    fn test_sign_in_with_exact_pair() {
        let owner = Owner::new();
        owner.with(|| {
            let session = Session::new();
            assert_eq!(session.sign_in(&verifier(), "admin", "password123"), Ok(()));
            assert!(session.is_logged_in());
        });
    }

    #[test]
    fn test_sign_in_rejects_other_pairs() {
        let owner = Owner::new();
        owner.with(|| {
            let session = Session::new();
            for (u, p) in [("admin", "password"), ("ADMIN", "password123"), ("", "")] {
                assert_eq!(session.sign_in(&verifier(), u, p), Err(AuthError::InvalidCredentials));
                assert!(!session.is_logged_in());
            }
        });
    }
}
