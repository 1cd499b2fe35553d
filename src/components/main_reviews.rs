//! Main Page Review Preview
//!
//! One ОГЭ and one ЕГЭ review on the landing page (`per_page=1` each).
//! A missing feed is not an error here; the sentinel only reports failure
//! when both requests fail.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_pagefeed::SentinelStatus;

use crate::api::{self, ApiError};
use crate::models::{Exam, Review};

use super::{FeedSentinel, ReviewCard};

async fn first_review(exam: Exam) -> Result<Option<Review>, ApiError> {
    match api::list_exam_reviews(exam, 1, 1).await {
        Ok(mut reviews) => Ok(reviews.pop()),
        Err(ApiError::NotFound) => Ok(None),
        Err(err) => Err(err),
    }
}

#[component]
pub fn MainReviews() -> impl IntoView {
    let (cards, set_cards) = signal(Vec::<(Exam, Review)>::new());
    let status = RwSignal::new(SentinelStatus::Loading);

    Effect::new(move |_| {
        spawn_local(async move {
            let oge = first_review(Exam::Oge).await;
            let ege = first_review(Exam::Ege).await;

            if oge.is_err() && ege.is_err() {
                web_sys::console::error_1(&"не удалось загрузить отзывы для главной".into());
                status.set(SentinelStatus::Error);
                return;
            }

            let mut loaded = Vec::new();
            for (exam, result) in [(Exam::Oge, oge), (Exam::Ege, ege)] {
                if let Ok(Some(review)) = result {
                    loaded.push((exam, review));
                }
            }
            status.set(if loaded.is_empty() {
                SentinelStatus::Empty
            } else {
                SentinelStatus::Hidden
            });
            set_cards.set(loaded);
        });
    });

    view! {
        <section class="main-reviews">
            <h2>"Отзывы наших учеников"</h2>
            <div class="cards">
                <For
                    each=move || cards.get()
                    key=|(exam, _)| *exam
                    children=|(exam, review)| {
                        view! { <ReviewCard review=review exam_label=exam.title() /> }
                    }
                />
            </div>
            <FeedSentinel status=status empty="Отзывов пока нет" />
        </section>
    }
}
