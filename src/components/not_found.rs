//! Not Found Component

use leptos::prelude::*;

use crate::routes::HOME_PATH;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-black text-white flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-500 mb-4">"404"</h1>
                <p class="text-xl text-gray-400 mb-8">"Page not found"</p>
                <a href=HOME_PATH class="px-6 py-3 bg-blue-500 hover:bg-blue-600 rounded-lg">
                    "Go Home"
                </a>
            </div>
        </div>
    }
}
