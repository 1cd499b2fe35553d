//! Password Recovery Form Component
//!
//! Same two-step shape as registration: an SMS code to the account phone,
//! then code verification before the password can be changed.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ResetVerify};
use crate::context::{use_app_context, Route};
use crate::validate::clean_phone;

#[component]
pub fn RecoveryForm() -> impl IntoView {
    let ctx = use_app_context();
    let (phone, set_phone) = signal(String::new());
    let (code, set_code) = signal(String::new());
    let (notice, set_notice) = signal((String::new(), true));

    let send_code = move |_| {
        match clean_phone(&phone.get_untracked()) {
            Ok(phone) => {
                spawn_local(async move {
                    match api::request_reset_code(&phone).await {
                        Ok(()) => set_notice.set((
                            "Код успешно отправлен на ваш номер телефона!".to_string(),
                            true,
                        )),
                        Err(e) => set_notice.set((e.user_message(), false)),
                    }
                });
            }
            Err(message) => set_notice.set((message.to_string(), false)),
        }
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let phone = match clean_phone(&phone.get_untracked()) {
            Ok(phone) => phone,
            Err(message) => {
                set_notice.set((message.to_string(), false));
                return;
            }
        };
        let code = code.get_untracked().trim().to_string();
        if code.is_empty() {
            set_notice.set(("Введите код из СМС.".to_string(), false));
            return;
        }

        spawn_local(async move {
            let request = ResetVerify { phone: &phone, code: &code };
            match api::verify_reset_code(&request).await {
                Ok(()) => {
                    set_notice.set(("Код подтвержден!".to_string(), true));
                    ctx.navigate(Route::Login);
                }
                Err(e) => set_notice.set((e.user_message(), false)),
            }
        });
    };

    view! {
        <form class="auth-form" on:submit=submit>
            <h2>"Восстановление пароля"</h2>
            <div class="field-row">
                <input
                    type="tel"
                    placeholder="+7 (XXX) XXX-XX-XX"
                    prop:value=move || phone.get()
                    on:input=move |ev| set_phone.set(event_target_value(&ev))
                />
                <button type="button" on:click=send_code>"Отправить код"</button>
            </div>
            <input
                type="text"
                placeholder="Код из СМС"
                prop:value=move || code.get()
                on:input=move |ev| set_code.set(event_target_value(&ev))
            />
            <div
                class="form-notice"
                class:success=move || notice.get().1
                class:failure=move || !notice.get().1
            >
                {move || notice.get().0}
            </div>
            <button type="submit">"Восстановить пароль"</button>
        </form>
    }
}
