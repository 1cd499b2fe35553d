//! Admin Products Component
//!
//! Superuser product management: grid of products with an edit modal that
//! patches name, price, description and download link by slug. Saving
//! triggers a full list reload.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_pagefeed::SentinelStatus;

use crate::api::{self, ProductUpdate};
use crate::context::{use_app_context, Route};
use crate::format::product_image;
use crate::models::Product;

use super::FeedSentinel;

#[component]
pub fn AdminProducts() -> impl IntoView {
    let ctx = use_app_context();
    let (products, set_products) = signal(Vec::<Product>::new());
    let status = RwSignal::new(SentinelStatus::Loading);
    let (reload, set_reload) = signal(0u32);

    // Superuser gate, rechecked against the backend on entry.
    Effect::new(move |_| {
        spawn_local(async move {
            match api::me_info().await {
                Ok(user) if !user.is_super_user => ctx.navigate(Route::Forbidden),
                Ok(user) => ctx.user.set(Some(user)),
                Err(api::ApiError::Unauthorized) => ctx.redirect_login(),
                Err(err) => {
                    web_sys::console::error_1(&format!("проверка прав: {err}").into());
                }
            }
        });
    });

    Effect::new(move |_| {
        let _ = reload.get();
        spawn_local(async move {
            match api::admin_products().await {
                Ok(list) => {
                    status.set(if list.is_empty() {
                        SentinelStatus::Empty
                    } else {
                        SentinelStatus::Hidden
                    });
                    set_products.set(list);
                }
                Err(api::ApiError::NotFound) => status.set(SentinelStatus::Empty),
                Err(api::ApiError::Unauthorized) => ctx.redirect_login(),
                Err(err) => {
                    web_sys::console::error_1(&format!("загрузка продуктов: {err}").into());
                    status.set(SentinelStatus::Error);
                }
            }
        });
    });

    // Edit modal state
    let (editing, set_editing) = signal::<Option<String>>(None);
    let (name, set_name) = signal(String::new());
    let (price, set_price) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (link, set_link) = signal(String::new());
    let (error, set_error) = signal(String::new());

    let open_editor = move |product: Product| {
        set_name.set(product.name);
        set_price.set(product.price.to_string());
        set_description.set(product.description);
        set_link.set(product.download_link);
        set_error.set(String::new());
        set_editing.set(Some(product.slug));
    };

    let save = move |_| {
        let Some(slug) = editing.get_untracked() else { return };
        let Ok(price) = price.get_untracked().trim().parse::<i64>() else {
            set_error.set("Введите корректную цену".to_string());
            return;
        };
        let name = name.get_untracked();
        let description = description.get_untracked();
        let link = link.get_untracked();

        spawn_local(async move {
            let request = ProductUpdate {
                name: &name,
                price,
                description: &description,
                download_link: &link,
            };
            match api::update_product(&slug, &request).await {
                Ok(()) => {
                    set_editing.set(None);
                    set_reload.update(|v| *v += 1);
                }
                Err(api::ApiError::Unauthorized) => ctx.redirect_login(),
                Err(err) => set_error.set(err.user_message()),
            }
        });
    };

    view! {
        <section class="admin-products">
            <h2>"Управление материалами"</h2>
            <div class="purchase-grid">
                <For
                    each=move || products.get()
                    key=|product| product.slug.clone()
                    children=move |product| {
                        let for_edit = product.clone();
                        view! {
                            <div
                                class="purchase-card"
                                data-product-id=product.id.to_string()
                                on:click=move |_| open_editor(for_edit.clone())
                            >
                                <img src=product_image(&product.name) alt=product.name.clone() />
                                <div class="purchase-info">
                                    <h3 class="purchase-title">{product.name.clone()}</h3>
                                    <p class="purchase-price">{format!("{} ₽", product.price)}</p>
                                </div>
                            </div>
                        }
                    }
                />
            </div>
            <FeedSentinel status=status empty="Материалов пока нет." />

            <Show when=move || editing.get().is_some()>
                <div class="modal-overlay" on:click=move |_| set_editing.set(None)>
                    <div class="modal" on:click=|ev| ev.stop_propagation()>
                        <h3>"Редактирование продукта"</h3>
                        <input
                            type="text"
                            placeholder="Название"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />
                        <input
                            type="number"
                            placeholder="Цена, ₽"
                            prop:value=move || price.get()
                            on:input=move |ev| set_price.set(event_target_value(&ev))
                        />
                        <textarea
                            placeholder="Описание"
                            prop:value=move || description.get()
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                        />
                        <input
                            type="text"
                            placeholder="Ссылка на материалы"
                            prop:value=move || link.get()
                            on:input=move |ev| set_link.set(event_target_value(&ev))
                        />
                        <div class="form-error">{move || error.get()}</div>
                        <div class="modal-actions">
                            <button on:click=move |_| set_editing.set(None)>"Отмена"</button>
                            <button class="primary" on:click=save>"Сохранить"</button>
                        </div>
                    </div>
                </div>
            </Show>
        </section>
    }
}
