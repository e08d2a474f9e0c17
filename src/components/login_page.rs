//! Login Page Component
//!
//! Credential form. On success starts the session and navigates home.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::auth::use_verifier;
use crate::config::use_config;
use crate::context::use_session;
use crate::routes::HOME_PATH;

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = use_config();
    let session = use_session();
    let verifier = use_verifier();
    let navigate = use_navigate();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    // Fields keep their values on failure; only the error is reset
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);

        match session.sign_in(&verifier, &username.get(), &password.get()) {
            Ok(()) => navigate(HOME_PATH, Default::default()),
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    view! {
        <div class="min-h-screen bg-black text-white flex items-center justify-center">
            <form on:submit=on_submit class="bg-gray-800 p-8 rounded-lg shadow-lg w-full max-w-md">
                <h1 class="text-3xl font-bold mb-2 text-center text-blue-400">{config.login_title}</h1>
                <h2 class="text-xl font-semibold mb-6 text-center">"Login"</h2>
                {move || error.get().map(|msg| view! {
                    <p class="text-red-500 mb-4 text-center">{msg}</p>
                })}
                <div class="mb-4">
                    <label for="username" class="block mb-2">"Username"</label>
                    <input
                        type="text"
                        id="username"
                        class="w-full p-2 text-gray-800 rounded"
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />
                </div>
                <div class="mb-6">
                    <label for="password" class="block mb-2">"Password"</label>
                    <input
                        type="password"
                        id="password"
                        class="w-full p-2 text-gray-800 rounded"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </div>
                <button type="submit" class="w-full bg-blue-500 text-white p-2 rounded hover:bg-blue-600">
                    "Log In"
                </button>
                <p class="mt-4 text-sm text-gray-400 text-center">{config.login_hint}</p>
            </form>
        </div>
    }
}
