//! Function Card Component
//!
//! Dashboard grid tile linking to a detail view.

use leptos::prelude::*;

use crate::models::FunctionEntry;
use crate::routes::function_path;

#[component]
pub fn FunctionCard(entry: FunctionEntry) -> impl IntoView {
    view! {
        <a
            href=function_path(&entry.id)
            class="block bg-gray-800 rounded-lg p-4 hover:bg-gray-700 transition-colors"
        >
            <h2 class="text-lg font-semibold text-blue-300 mb-2">{entry.name}</h2>
            <p class="text-sm text-gray-400">"Click to explore"</p>
        </a>
    }
}
