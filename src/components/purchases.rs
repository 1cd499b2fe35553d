//! Purchases Component
//!
//! The user's paid products with a detail modal carrying the description
//! and the download link.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_pagefeed::SentinelStatus;

use crate::api;
use crate::context::use_app_context;
use crate::format::{format_card_date, product_image};
use crate::models::Purchase;

use super::FeedSentinel;

#[component]
pub fn Purchases() -> impl IntoView {
    let ctx = use_app_context();
    let (purchases, set_purchases) = signal(Vec::<Purchase>::new());
    let status = RwSignal::new(SentinelStatus::Loading);
    let (selected, set_selected) = signal::<Option<Purchase>>(None);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::my_purchases().await {
                Ok(list) => {
                    status.set(if list.is_empty() {
                        SentinelStatus::Empty
                    } else {
                        SentinelStatus::Hidden
                    });
                    set_purchases.set(list);
                }
                Err(api::ApiError::NotFound) => status.set(SentinelStatus::Empty),
                Err(api::ApiError::Unauthorized) => ctx.redirect_login(),
                Err(err) => {
                    web_sys::console::error_1(&format!("загрузка покупок: {err}").into());
                    status.set(SentinelStatus::Error);
                }
            }
        });
    });

    view! {
        <section class="purchases">
            <h3>"Мои покупки"</h3>
            <div class="purchase-grid">
                <For
                    each=move || purchases.get().into_iter().enumerate()
                    key=|(index, _)| *index
                    children=move |(_, purchase)| {
                        let open = purchase.clone();
                        let date = format_card_date(&purchase.paid_at);
                        view! {
                            <div
                                class="purchase-card"
                                on:click=move |_| set_selected.set(Some(open.clone()))
                            >
                                <img src=product_image(&purchase.name) alt=purchase.name.clone() />
                                <div class="purchase-info">
                                    <div class="purchase-date">
                                        {format!("Дата покупки: {date}")}
                                    </div>
                                    <h3 class="purchase-title">{purchase.name.clone()}</h3>
                                </div>
                            </div>
                        }
                    }
                />
            </div>
            <FeedSentinel status=status empty="Покупок пока нет." />

            {move || selected.get().map(|purchase| view! {
                <div class="modal-overlay" on:click=move |_| set_selected.set(None)>
                    <div class="modal" on:click=|ev| ev.stop_propagation()>
                        <h3>{purchase.name.clone()}</h3>
                        <p>{purchase.description.clone()}</p>
                        <a class="download-link" href=purchase.download_link.clone() target="_blank">
                            "Скачать материалы"
                        </a>
                        <div class="modal-actions">
                            <button on:click=move |_| set_selected.set(None)>"Закрыть"</button>
                        </div>
                    </div>
                </div>
            })}
        </section>
    }
}
