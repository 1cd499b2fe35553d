//! Login Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, LoginRequest};
use crate::context::{use_app_context, Route};
use crate::validate::clean_phone;

#[component]
pub fn LoginForm() -> impl IntoView {
    let ctx = use_app_context();
    let (phone, set_phone) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (show_password, set_show_password) = signal(false);
    let (error, set_error) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(String::new());

        let phone = match clean_phone(&phone.get_untracked()) {
            Ok(phone) => phone,
            Err(message) => {
                set_error.set(message.to_string());
                return;
            }
        };
        let password = password.get_untracked();
        if password.is_empty() {
            set_error.set("Введите пароль".to_string());
            return;
        }

        spawn_local(async move {
            let request = LoginRequest { phone: &phone, password: &password };
            match api::login(&request).await {
                Ok(()) => {
                    // Cookie is set; pick up the profile for the nav state.
                    if let Ok(user) = api::me_info().await {
                        let admin = user.is_super_user;
                        ctx.user.set(Some(user));
                        ctx.navigate(if admin { Route::Admin } else { Route::Profile });
                    } else {
                        ctx.navigate(Route::Profile);
                    }
                }
                Err(err) => set_error.set(err.user_message()),
            }
        });
    };

    view! {
        <form class="auth-form" on:submit=submit>
            <h2>"Вход"</h2>
            <input
                type="tel"
                placeholder="+7 (XXX) XXX-XX-XX"
                prop:value=move || phone.get()
                on:input=move |ev| set_phone.set(event_target_value(&ev))
            />
            <div class="password-row">
                <input
                    type=move || if show_password.get() { "text" } else { "password" }
                    placeholder="Пароль"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <button
                    type="button"
                    class="toggle-password"
                    on:click=move |_| set_show_password.update(|v| *v = !*v)
                >
                    {move || if show_password.get() { "🔒" } else { "👁" }}
                </button>
            </div>
            <div class="form-error">{move || error.get()}</div>
            <button type="submit">"Войти"</button>
            <div class="auth-links">
                <a on:click=move |_| ctx.navigate(Route::Register)>"Регистрация"</a>
                <a on:click=move |_| ctx.navigate(Route::Recovery)>"Забыли пароль?"</a>
            </div>
        </form>
    }
}
