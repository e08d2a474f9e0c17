//! Logout Button Component

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::context::use_session;

/// Clears the session flag. With `redirect`, also navigates there;
/// without it the route guard handles the redirect.
#[component]
pub fn LogoutButton(#[prop(optional)] redirect: Option<&'static str>) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    view! {
        <button
            class="bg-red-500 text-white px-4 py-2 rounded hover:bg-red-600"
            on:click=move |_| {
                session.logout();
                if let Some(path) = redirect {
                    navigate(path, Default::default());
                }
            }
        >
            "Logout"
        </button>
    }
}
