//! Query Form Component
//!
//! Stub assistant form: echoes the question, makes no requests.

use leptos::prelude::*;

use crate::assistant::{assistant_blurb, query_placeholder, submit_query};

#[component]
pub fn QueryForm(#[prop(into)] function_name: String) -> impl IntoView {
    let (query, set_query) = signal(String::new());
    let (response, set_response) = signal::<Option<String>>(None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Some(reply) = set_query.try_update(submit_query) {
            set_response.set(Some(reply));
        }
    };

    let placeholder = query_placeholder(&function_name);

    view! {
        <div class="bg-gray-800 rounded-md p-6 mb-8">
            <h2 class="text-2xl font-bold mb-4 text-blue-400">"AI Assistant"</h2>
            {assistant_blurb(&function_name)
                .into_iter()
                .map(|text| view! { <p class="text-gray-300 mb-4">{text}</p> })
                .collect_view()}

            <form class="mt-6" on:submit=on_submit>
                <textarea
                    class="w-full p-2 text-gray-800 bg-gray-200 rounded-md"
                    rows="4"
                    placeholder=placeholder
                    prop:value=move || query.get()
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                ></textarea>
                <button
                    type="submit"
                    class="mt-2 px-4 py-2 bg-blue-500 text-white rounded-md hover:bg-blue-600"
                >
                    "Submit"
                </button>
            </form>

            {move || response.get().map(|text| view! {
                <div class="mt-4 p-4 bg-gray-700 rounded-md">
                    <h3 class="text-xl font-semibold mb-2 text-blue-300">"AI Response:"</h3>
                    <p class="text-gray-300">{text}</p>
                </div>
            })}
        </div>
    }
}
