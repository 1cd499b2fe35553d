//! Review Feed Components
//!
//! Infinite-scroll review feeds over `leptos-pagefeed`: the public per-exam
//! feed and the moderation feed with per-card delete. First page loads 8
//! reviews, subsequent pages 4.

use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_pagefeed::{observe_sentinel, Feed, PagePolicy};

use crate::api;
use crate::context::use_app_context;
use crate::models::{Exam, Review};

use super::{FeedSentinel, ReviewCard};

const FEED_POLICY: PagePolicy = PagePolicy::new(8, 4);

/// Public review feed for one exam.
#[component]
pub fn ReviewFeed(exam: Exam) -> impl IntoView {
    let feed: Feed<Review> = Feed::new(FEED_POLICY);
    let load = move || {
        feed.load_next(move |req| async move {
            api::list_exam_reviews(exam, req.page, req.per_page)
                .await
                .map_err(Into::into)
        });
    };

    let sentinel = NodeRef::<Div>::new();
    observe_sentinel(sentinel, load);
    load();

    view! {
        <section class="reviews-page">
            <h2>{format!("Отзывы {}", exam.title())}</h2>
            <div class="cards">
                <For
                    each=move || feed.items.get().into_iter().enumerate()
                    key=|(index, _)| *index
                    children=move |(_, review)| {
                        view! { <ReviewCard review=review exam_label=exam.title() /> }
                    }
                />
            </div>
            <FeedSentinel
                status=feed.status
                node_ref=sentinel
                empty="Отзывов пока нет"
                end="Больше отзывов нет."
            />
        </section>
    }
}

/// Moderation feed: every review with author info, plus delete. A delete
/// starts a fresh load cycle instead of patching the list in place.
#[component]
pub fn AdminReviewFeed() -> impl IntoView {
    let ctx = use_app_context();
    let feed: Feed<Review> = Feed::new(FEED_POLICY);
    let load = move || {
        feed.load_next_with(
            move |req| async move {
                api::list_all_reviews(req.page, req.per_page)
                    .await
                    .map_err(Into::into)
            },
            move || ctx.redirect_login(),
        );
    };

    let sentinel = NodeRef::<Div>::new();
    observe_sentinel(sentinel, load);
    load();

    let on_delete = Callback::new(move |id: u32| {
        spawn_local(async move {
            match api::admin_delete_review(id).await {
                Ok(()) => {
                    feed.reset();
                    load();
                }
                Err(api::ApiError::Unauthorized) => ctx.redirect_login(),
                Err(err) => {
                    web_sys::console::error_1(&format!("delete review {id}: {err}").into());
                    if let Some(window) = web_sys::window() {
                        let _ = window.alert_with_message(
                            "Не удалось удалить отзыв. Пожалуйста, попробуйте позже.",
                        );
                    }
                }
            }
        });
    });

    view! {
        <section class="reviews-page admin">
            <h2>"Все отзывы"</h2>
            <div class="cards">
                <For
                    each=move || feed.items.get().into_iter().enumerate()
                    key=|(index, _)| *index
                    children=move |(_, review)| {
                        view! { <ReviewCard review=review on_delete=on_delete /> }
                    }
                />
            </div>
            <FeedSentinel
                status=feed.status
                node_ref=sentinel
                empty="Отзывов пока нет"
                end="Больше отзывов нет."
            />
        </section>
    }
}
