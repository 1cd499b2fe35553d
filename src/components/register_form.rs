//! Registration Form Component
//!
//! Two-step registration: confirmation codes per channel (phone required,
//! email optional), then one verify call with codes and password.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, RegisterVerify};
use crate::context::{use_app_context, Route};
use crate::validate::{check_password, clean_phone, is_valid_email};

/// Field-level status line: message plus whether it is good news.
type Notice = (String, bool);

fn err(message: impl Into<String>) -> Notice {
    (message.into(), false)
}

fn ok(message: impl Into<String>) -> Notice {
    (message.into(), true)
}

#[component]
fn NoticeLine(notice: ReadSignal<Notice>) -> impl IntoView {
    view! {
        <div
            class="form-notice"
            class:success=move || notice.get().1
            class:failure=move || !notice.get().1 && !notice.get().0.is_empty()
        >
            {move || notice.get().0}
        </div>
    }
}

#[component]
pub fn RegisterForm() -> impl IntoView {
    let ctx = use_app_context();

    let (phone, set_phone) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (code_phone, set_code_phone) = signal(String::new());
    let (code_email, set_code_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (password_repeat, set_password_repeat) = signal(String::new());

    let (phone_notice, set_phone_notice) = signal::<Notice>((String::new(), true));
    let (email_notice, set_email_notice) = signal::<Notice>((String::new(), true));
    let (submit_notice, set_submit_notice) = signal::<Notice>((String::new(), true));

    let send_phone_code = move |_| {
        match clean_phone(&phone.get_untracked()) {
            Ok(phone) => {
                spawn_local(async move {
                    match api::send_phone_code(&phone).await {
                        Ok(()) => set_phone_notice.set(ok("Код отправлен!")),
                        Err(e) => set_phone_notice.set(err(e.user_message())),
                    }
                });
            }
            Err(_) => set_phone_notice.set(err("Формат: +7 (XXX) XXX-XX-XX")),
        }
    };

    let send_email_code = move |_| {
        let address = email.get_untracked().trim().to_string();
        if address.is_empty() {
            set_email_notice.set(err("Введите email."));
            return;
        }
        if !is_valid_email(&address) {
            set_email_notice.set(err("Неверный формат email."));
            return;
        }
        spawn_local(async move {
            match api::send_email_code(&address).await {
                Ok(()) => set_email_notice.set(ok("Код отправлен на email!")),
                Err(e) => set_email_notice.set(err(e.user_message())),
            }
        });
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_submit_notice.set(ok(""));

        let phone = match clean_phone(&phone.get_untracked()) {
            Ok(phone) => phone,
            Err(_) => {
                set_submit_notice.set(err("Введите корректный номер телефона."));
                return;
            }
        };
        let email = email.get_untracked().trim().to_string();
        if !email.is_empty() && !is_valid_email(&email) {
            set_submit_notice.set(err("Некорректный email."));
            return;
        }
        let code_phone = code_phone.get_untracked().trim().to_string();
        if code_phone.is_empty() {
            set_submit_notice.set(err("Введите код для телефона."));
            return;
        }
        let code_email = code_email.get_untracked().trim().to_string();
        if !email.is_empty() && code_email.is_empty() {
            set_submit_notice.set(err("Введите код для email."));
            return;
        }
        let password = password.get_untracked();
        let repeat = password_repeat.get_untracked();
        if let Err(message) = check_password(&password, &repeat) {
            set_submit_notice.set(err(message));
            return;
        }

        spawn_local(async move {
            let request = RegisterVerify {
                phone: &phone,
                code_phone: &code_phone,
                password: &password,
                password_repeat: &repeat,
                email: (!email.is_empty()).then_some(email.as_str()),
                code_email: (!email.is_empty()).then_some(code_email.as_str()),
            };
            match api::register_verify(&request).await {
                Ok(()) => ctx.navigate(Route::Login),
                Err(e) => set_submit_notice.set(err(e.user_message())),
            }
        });
    };

    view! {
        <form class="auth-form" on:submit=submit>
            <h2>"Регистрация"</h2>

            <div class="field-row">
                <input
                    type="tel"
                    placeholder="+7 (XXX) XXX-XX-XX"
                    prop:value=move || phone.get()
                    on:input=move |ev| set_phone.set(event_target_value(&ev))
                />
                <button type="button" on:click=send_phone_code>"Отправить код"</button>
            </div>
            <NoticeLine notice=phone_notice />
            <input
                type="text"
                placeholder="Код из СМС"
                prop:value=move || code_phone.get()
                on:input=move |ev| set_code_phone.set(event_target_value(&ev))
            />

            <div class="field-row">
                <input
                    type="email"
                    placeholder="Email (необязательно)"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <button type="button" on:click=send_email_code>"Отправить код"</button>
            </div>
            <NoticeLine notice=email_notice />
            <input
                type="text"
                placeholder="Код из письма"
                prop:value=move || code_email.get()
                on:input=move |ev| set_code_email.set(event_target_value(&ev))
            />

            <input
                type="password"
                placeholder="Пароль (минимум 8 символов)"
                prop:value=move || password.get()
                on:input=move |ev| set_password.set(event_target_value(&ev))
            />
            <input
                type="password"
                placeholder="Повторите пароль"
                prop:value=move || password_repeat.get()
                on:input=move |ev| set_password_repeat.set(event_target_value(&ev))
            />

            <NoticeLine notice=submit_notice />
            <button type="submit">"Зарегистрироваться"</button>
            <div class="auth-links">
                <a on:click=move |_| ctx.navigate(Route::Login)>"Уже есть аккаунт? Войти"</a>
            </div>
        </form>
    }
}
