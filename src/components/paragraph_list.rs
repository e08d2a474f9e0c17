//! Paragraph List Component
//!
//! Renders blank-line separated text as one block per paragraph.

use leptos::prelude::*;

use crate::paragraphs::{has_separator_after, split_paragraphs};

#[component]
pub fn ParagraphList(#[prop(into)] text: Signal<String>) -> impl IntoView {
    move || {
        let text = text.get();
        let blocks = split_paragraphs(&text);
        let count = blocks.len();
        blocks
            .into_iter()
            .enumerate()
            .map(|(i, block)| {
                let block = block.to_string();
                view! {
                    <p>{block}</p>
                    {has_separator_after(i, count).then(|| view! { <br /> })}
                }
            })
            .collect_view()
    }
}
