//! Dashboard Component
//!
//! Grid of catalog entries, one card per function.

use leptos::prelude::*;

use crate::catalog::Catalog;
use crate::components::{FunctionCard, LogoutButton};
use crate::config::use_config;

#[component]
pub fn Dashboard() -> impl IntoView {
    let config = use_config();
    let entries = Catalog::builtin().entries().to_vec();

    view! {
        <div class="min-h-screen bg-black text-white">
            <div class="container mx-auto p-4">
                <div class="flex justify-between items-center mb-6">
                    <h1 class="text-3xl font-bold text-blue-400">{config.dashboard_title}</h1>
                    <LogoutButton />
                </div>
                <div class="grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 lg:grid-cols-5 gap-4">
                    <For
                        each=move || entries.clone()
                        key=|entry| entry.id.clone()
                        children=move |entry| view! { <FunctionCard entry=entry /> }
                    />
                </div>
            </div>
        </div>
    }
}
