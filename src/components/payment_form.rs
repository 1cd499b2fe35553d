//! Payment Form Component
//!
//! Email field plus the checkout button for one product. The payment call
//! runs under the shared abort timeout, and the button is disabled while a
//! request is in flight.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, PaymentRequest};
use crate::validate::is_valid_email;

#[component]
pub fn PaymentForm(#[prop(into)] product_slug: String) -> impl IntoView {
    let slug = StoredValue::new(product_slug);
    let (email, set_email) = signal(String::new());
    let (error, set_error) = signal(String::new());
    let (sending, set_sending) = signal(false);

    let submit = move |_| {
        if sending.get_untracked() {
            return;
        }
        let address = email.get_untracked().trim().to_string();
        if address.is_empty() {
            set_error.set("Введите email".to_string());
            return;
        }
        if !is_valid_email(&address) {
            set_error.set("Неверный формат email".to_string());
            return;
        }
        set_error.set(String::new());
        set_sending.set(true);

        spawn_local(async move {
            let product_slug = slug.get_value();
            let request = PaymentRequest {
                product_slug: &product_slug,
                email: &address,
            };
            match api::create_payment(&request).await {
                Ok(link) => match link.payment_url {
                    Some(url) => {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href(&url);
                        }
                    }
                    None => set_error.set("Не удалось получить ссылку для оплаты".to_string()),
                },
                Err(err) => {
                    web_sys::console::error_1(&format!("payment failed: {err}").into());
                    set_error.set(err.user_message());
                }
            }
            set_sending.set(false);
        });
    };

    view! {
        <div class="payment-form">
            <input
                type="email"
                placeholder="Email для чека и материалов"
                prop:value=move || email.get()
                class:error=move || !error.get().is_empty()
                on:input=move |ev| set_email.set(event_target_value(&ev))
            />
            <div class="field-error" style:display=move || {
                if error.get().is_empty() { "none" } else { "block" }
            }>
                {move || error.get()}
            </div>
            <button
                class="payment-button"
                prop:disabled=move || sending.get()
                on:click=submit
            >
                {move || if sending.get() { "Отправка..." } else { "Страница оплаты" }}
            </button>
        </div>
    }
}
