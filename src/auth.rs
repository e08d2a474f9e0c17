//! Credential Verification
//!
//! Placeholder policy: one static username/password pair compared in the
//! browser. Not a security boundary. Swap the verifier in context to change
//! the scheme without touching the session gate or route guard.

use std::sync::Arc;

use leptos::prelude::*;
use thiserror::Error;

use crate::config::AppConfig;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AuthError {
    #[error("Invalid username or password")]
    InvalidCredentials,
}

pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> Result<(), AuthError>;
}

/// Exact, case-sensitive match against a single pair
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    username: String,
    password: String,
}

impl StaticCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.username.clone(), config.password.clone())
    }
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, username: &str, password: &str) -> Result<(), AuthError> {
        if username == self.username && password == self.password {
            Ok(())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}

/// Shared verifier handle provided via context
#[derive(Clone)]
pub struct Verifier(Arc<dyn CredentialVerifier>);

impl Verifier {
    pub fn new(inner: impl CredentialVerifier + 'static) -> Self {
        Self(Arc::new(inner))
    }

    pub fn verify(&self, username: &str, password: &str) -> Result<(), AuthError> {
        self.0.verify(username, password)
    }
}

pub fn use_verifier() -> Verifier {
    expect_context::<Verifier>()
}
