//! Application Config
//!
//! UI literals and the accepted credential pair, provided via context.

use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Heading on the login view
    pub login_title: String,
    /// Heading on the dashboard
    pub dashboard_title: String,
    /// Hint line under the login button
    pub login_hint: String,
    pub username: String,
    pub password: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let username = "admin".to_string();
        let password = "password123".to_string();
        Self {
            login_title: "Private Equity AI Agent".to_string(),
            dashboard_title: "Private Equity AI Assistant".to_string(),
            login_hint: format!("Use username: {}, password: {}", username, password),
            username,
            password,
        }
    }
}

pub fn use_config() -> AppConfig {
    expect_context::<AppConfig>()
}
