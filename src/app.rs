//! PE Agent Frontend App
//!
//! Router with one public route and two gated routes.

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::auth::{StaticCredentials, Verifier};
use crate::components::{Dashboard, FunctionPage, LoginPage, NotFound, RequireAuth};
use crate::config::AppConfig;
use crate::context::Session;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::default();

    // Provide context to all children
    provide_context(Verifier::new(StaticCredentials::from_config(&config)));
    provide_context(config);
    provide_context(Session::new());

    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/login") view=LoginPage />
                <Route
                    path=path!("/")
                    view=|| view! { <RequireAuth><Dashboard /></RequireAuth> }
                />
                <Route
                    path=path!("/function/:id")
                    view=|| view! { <RequireAuth><FunctionPage /></RequireAuth> }
                />
            </Routes>
        </Router>
    }
}
