//! Read More Component
//!
//! Collapsed/expanded review text. The truncation decision is a fixed
//! character threshold, so the toggle never flashes in after layout; short
//! text renders without any toggle at all.

use leptos::prelude::*;

use crate::format::{preview, REVIEW_PREVIEW_LIMIT};

#[component]
pub fn ReadMoreText(#[prop(into)] text: String) -> impl IntoView {
    match preview(&text, REVIEW_PREVIEW_LIMIT) {
        None => view! { <div class="review-text">{text}</div> }.into_any(),
        Some(short) => {
            let (expanded, set_expanded) = signal(false);
            let full = text;
            view! {
                <div class="review-text" class:collapsed=move || !expanded.get()>
                    {move || if expanded.get() { full.clone() } else { short.clone() }}
                </div>
                <button
                    class="read-more"
                    on:click=move |_| set_expanded.update(|e| *e = !*e)
                >
                    {move || if expanded.get() { "Свернуть" } else { "Читать полностью" }}
                </button>
            }
            .into_any()
        }
    }
}
