//! Title Bar Component
//!
//! Site navigation. The auth link swaps between login and the personal
//! area depending on the session, and the review feed link routes
//! superusers to the moderation feed.

use leptos::prelude::*;

use crate::context::{use_app_context, Route};
use crate::models::Exam;

#[component]
pub fn TitleBar() -> impl IntoView {
    let ctx = use_app_context();

    let open_reviews = move |exam: Exam| {
        if ctx.is_super_user() {
            ctx.navigate(Route::AdminReviews);
        } else {
            ctx.navigate(Route::Reviews(exam));
        }
    };

    let open_account = move |_| {
        match ctx.user.get_untracked() {
            Some(user) if user.is_super_user => ctx.navigate(Route::Admin),
            Some(_) => ctx.navigate(Route::Profile),
            None => ctx.navigate(Route::Login),
        }
    };

    view! {
        <header class="title-bar">
            <a class="brand" on:click=move |_| ctx.navigate(Route::Home)>
                "Экзамен на отлично"
            </a>
            <nav>
                <a on:click=move |_| ctx.navigate(Route::Home)>"Главная"</a>
                <a on:click=move |_| open_reviews(Exam::Ege)>"Отзывы ЕГЭ"</a>
                <a on:click=move |_| open_reviews(Exam::Oge)>"Отзывы ОГЭ"</a>
                <a id="auth-link" on:click=open_account>
                    {move || {
                        if ctx.user.get().is_some() {
                            "личный кабинет"
                        } else {
                            "авторизация"
                        }
                    }}
                </a>
            </nav>
        </header>
    }
}
