//! Profile Page Component
//!
//! The personal area: editable profile fields, purchase history and the
//! user's own reviews. Entry is gated by a session probe; a 401 anywhere
//! here redirects to login.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, UserUpdate};
use crate::context::{use_app_context, Route};
use crate::models::UserInfo;

use super::{Purchases, UserReviews};

#[component]
pub fn ProfilePage() -> impl IntoView {
    let ctx = use_app_context();
    let (info, set_info) = signal::<Option<UserInfo>>(None);
    let (editing, set_editing) = signal(false);
    let (name, set_name) = signal(String::new());
    let (surname, set_surname) = signal(String::new());

    let refresh = move || {
        spawn_local(async move {
            match api::me_info().await {
                Ok(user) => {
                    ctx.user.set(Some(user.clone()));
                    set_info.set(Some(user));
                }
                Err(api::ApiError::Unauthorized) => ctx.redirect_login(),
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("загрузка информации о пользователе: {err}").into(),
                    );
                }
            }
        });
    };

    Effect::new(move |_| refresh());

    let toggle_edit = move |_| {
        if !editing.get_untracked() {
            let current = info.get_untracked().unwrap_or_else(|| UserInfo {
                id: 0,
                name: None,
                surname: None,
                phone: None,
                email: None,
                is_super_user: false,
            });
            set_name.set(current.name.unwrap_or_default());
            set_surname.set(current.surname.unwrap_or_default());
            set_editing.set(true);
            return;
        }

        let name = name.get_untracked();
        let surname = surname.get_untracked();
        spawn_local(async move {
            let request = UserUpdate { name: &name, surname: &surname };
            match api::update_me(&request).await {
                Ok(()) => {
                    set_editing.set(false);
                    refresh();
                }
                Err(api::ApiError::Unauthorized) => ctx.redirect_login(),
                Err(err) => {
                    web_sys::console::error_1(&format!("сохранение профиля: {err}").into());
                    if let Some(window) = web_sys::window() {
                        let _ = window.alert_with_message(
                            "Не удалось сохранить изменения. Пожалуйста, попробуйте позже.",
                        );
                    }
                }
            }
        });
    };

    let logout = move |_| {
        spawn_local(async move {
            if let Err(err) = api::logout().await {
                web_sys::console::error_1(&format!("выход: {err}").into());
            }
            ctx.user.set(None);
            ctx.navigate(Route::Home);
        });
    };

    view! {
        <div class="profile-page">
            <section class="user-info">
                <h2>"Личный кабинет"</h2>
                <div class="fields">
                    <div class="field">
                        <span class="field-label">"Имя"</span>
                        <Show
                            when=move || editing.get()
                            fallback=move || view! {
                                <span class="field-value">
                                    {move || info.get().and_then(|u| u.name).unwrap_or_default()}
                                </span>
                            }
                        >
                            <input
                                type="text"
                                prop:value=move || name.get()
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                            />
                        </Show>
                    </div>
                    <div class="field">
                        <span class="field-label">"Фамилия"</span>
                        <Show
                            when=move || editing.get()
                            fallback=move || view! {
                                <span class="field-value">
                                    {move || info.get().and_then(|u| u.surname).unwrap_or_default()}
                                </span>
                            }
                        >
                            <input
                                type="text"
                                prop:value=move || surname.get()
                                on:input=move |ev| set_surname.set(event_target_value(&ev))
                            />
                        </Show>
                    </div>
                    <div class="field">
                        <span class="field-label">"Телефон"</span>
                        <span class="field-value">
                            {move || info.get().map(|u| u.display_phone()).unwrap_or_default()}
                        </span>
                    </div>
                    <div class="field">
                        <span class="field-label">"Email"</span>
                        <span class="field-value">
                            {move || info.get().and_then(|u| u.email).unwrap_or_default()}
                        </span>
                    </div>
                </div>
                <div class="profile-actions">
                    <button class="edit-button" on:click=toggle_edit>
                        {move || {
                            if editing.get() {
                                "Сохранить изменения"
                            } else {
                                "Редактировать профиль"
                            }
                        }}
                    </button>
                    <button class="logout-button" on:click=logout>"Выйти"</button>
                </div>
            </section>

            <Purchases />
            <UserReviews />
        </div>
    }
}
