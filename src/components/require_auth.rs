//! Route Guard Component
//!
//! Wraps gated views; redirects to the login view while logged out.
//! UI-only: there is no server to enforce anything.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::context::use_session;
use crate::routes::{gate, Access};

/// Renders children only while the session flag is set.
/// Reacts to later logout by redirecting.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let decision = Memo::new(move |_| gate(session.is_logged_in()));

    move || match decision.get() {
        Access::Render => children(),
        Access::Redirect(target) => {
            log::debug!("[ROUTE] Login required, redirecting");
            view! { <Redirect path=target /> }.into_any()
        }
    }
}
