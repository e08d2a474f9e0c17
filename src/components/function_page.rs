//! Function Detail Page Component
//!
//! Resolves `/function/:id` against the catalog and shows the description
//! plus the stub assistant form.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::catalog::Catalog;
use crate::components::{LogoutButton, ParagraphList, QueryForm};
use crate::routes::{HOME_PATH, LOGIN_PATH};

#[component]
pub fn FunctionPage() -> impl IntoView {
    let params = use_params_map();
    let id = Memo::new(move |_| params.read().get("id").unwrap_or_default());
    let resolved = Memo::new(move |_| Catalog::builtin().resolve(&id.get()));

    view! {
        <div class="min-h-screen bg-black text-white">
            <div class="container mx-auto p-4">
                <div class="flex justify-between items-center mb-6">
                    <a href=HOME_PATH class="text-blue-400 hover:text-blue-300">"← Back to Dashboard"</a>
                    <LogoutButton redirect=LOGIN_PATH />
                </div>
                <h1 class="text-3xl font-bold mb-6 text-blue-400">{move || resolved.get().name}</h1>
                <div class="bg-gray-800 rounded-md p-6 mb-8">
                    <div class="text-gray-300 mb-4 leading-relaxed">
                        <ParagraphList text=Signal::derive(move || resolved.get().description) />
                    </div>
                </div>
                // Rebuilt per id so the query and echoed response reset on navigation
                {move || {
                    id.track();
                    let name = resolved.get().name;
                    view! { <QueryForm function_name=name /> }
                }}
            </div>
        </div>
    }
}
