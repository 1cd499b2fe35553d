//! Examstore Frontend App
//!
//! Root component: session probe, route signal and the page switch.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{
    AdminProducts, AdminReviewFeed, HomePage, LoginForm, ProfilePage, RecoveryForm, RegisterForm,
    ReviewFeed, TitleBar,
};
use crate::context::{AppContext, Route};

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(signal(Route::Home));
    provide_context(ctx);

    // Probe the session once so the nav shows the right auth link. A 401
    // here just means "not logged in" and is not an error.
    Effect::new(move |_| {
        spawn_local(async move {
            match api::me_info().await {
                Ok(user) => ctx.user.set(Some(user)),
                Err(api::ApiError::Unauthorized) => {}
                Err(err) => {
                    web_sys::console::error_1(&format!("проверка сессии: {err}").into());
                }
            }
        });
    });

    view! {
        <TitleBar />
        <main class="page">
            {move || match ctx.route.get() {
                Route::Home => view! { <HomePage /> }.into_any(),
                Route::Reviews(exam) => view! { <ReviewFeed exam=exam /> }.into_any(),
                Route::AdminReviews => view! { <AdminReviewFeed /> }.into_any(),
                Route::Login => view! { <LoginForm /> }.into_any(),
                Route::Register => view! { <RegisterForm /> }.into_any(),
                Route::Recovery => view! { <RecoveryForm /> }.into_any(),
                Route::Profile => view! { <ProfilePage /> }.into_any(),
                Route::Admin => view! { <AdminProducts /> }.into_any(),
                Route::Forbidden => view! {
                    <section class="error-page">
                        <h2>"403"</h2>
                        <p>"Доступ к этой странице ограничен."</p>
                    </section>
                }
                .into_any(),
            }}
        </main>
    }
}
