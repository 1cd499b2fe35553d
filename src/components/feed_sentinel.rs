//! Feed Sentinel Component
//!
//! The element below a list that doubles as the infinite-scroll trigger and
//! the status message slot (loading / empty / end-of-list / error).

use leptos::html::Div;
use leptos::prelude::*;
use leptos_pagefeed::SentinelStatus;

const LOADING_MESSAGE: &str = "Загрузка...";
const ERROR_MESSAGE: &str = "Ошибка загрузки: сервер недоступен";

/// Status display for one feed. An empty `end` message hides the sentinel
/// after a successful load instead of announcing the end of the list.
#[component]
pub fn FeedSentinel(
    status: RwSignal<SentinelStatus>,
    #[prop(optional)] node_ref: NodeRef<Div>,
    #[prop(into)] empty: String,
    #[prop(into, optional)] end: String,
) -> impl IntoView {
    let end_hidden = end.is_empty();
    let message = move || match status.get() {
        SentinelStatus::Hidden => String::new(),
        SentinelStatus::Loading => LOADING_MESSAGE.to_string(),
        SentinelStatus::Empty => empty.clone(),
        SentinelStatus::End => end.clone(),
        SentinelStatus::Error => ERROR_MESSAGE.to_string(),
    };
    let hidden = move || match status.get() {
        SentinelStatus::Hidden => true,
        SentinelStatus::End => end_hidden,
        _ => false,
    };

    view! {
        <div
            class="sentinel"
            node_ref=node_ref
            style:display=move || if hidden() { "none" } else { "block" }
        >
            {message}
        </div>
    }
}
