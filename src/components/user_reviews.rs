//! Own Reviews Component
//!
//! The user's reviews in the personal area: paginated list plus add and
//! edit modals. Every mutation ends with a fresh load cycle rather than an
//! in-place patch of the list.

use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_pagefeed::{observe_sentinel, Feed, PagePolicy};

use crate::api::{self, ReviewCreate, ReviewUpdate};
use crate::context::use_app_context;
use crate::models::{Exam, Review};
use crate::validate::check_score;

use super::{FeedSentinel, ReviewCard};

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Parse and range-check a score typed into a modal.
fn score_from_input(exam_label: &str, raw: &str) -> Result<i32, String> {
    let parsed = raw.trim().parse::<i32>().ok();
    match Exam::from_label(exam_label) {
        Some(exam) => check_score(exam, parsed),
        // Unknown exam label: fall back to a 1..=5 grade.
        None => match parsed {
            Some(score) if (1..=5).contains(&score) => Ok(score),
            _ => Err("Пожалуйста, введите корректную оценку от 1 до 5".to_string()),
        },
    }
}

#[component]
pub fn UserReviews() -> impl IntoView {
    let ctx = use_app_context();
    let feed: Feed<Review> = Feed::new(PagePolicy::fixed(10));
    let load = move || {
        feed.load_next_with(
            move |req| async move {
                api::my_reviews(req.page, req.per_page).await.map_err(Into::into)
            },
            move || ctx.redirect_login(),
        );
    };

    let sentinel = NodeRef::<Div>::new();
    observe_sentinel(sentinel, load);
    load();

    // Add modal state
    let (adding, set_adding) = signal(false);
    let (add_exam, set_add_exam) = signal(String::new());
    let (add_score, set_add_score) = signal(String::new());
    let (add_text, set_add_text) = signal(String::new());
    let (add_error, set_add_error) = signal(String::new());

    // Edit modal state
    let (editing, set_editing) = signal::<Option<u32>>(None);
    let (edit_exam, set_edit_exam) = signal(String::new());
    let (edit_score, set_edit_score) = signal(String::new());
    let (edit_text, set_edit_text) = signal(String::new());
    let (edit_error, set_edit_error) = signal(String::new());

    let open_add = move |_| {
        set_add_exam.set(String::new());
        set_add_score.set(String::new());
        set_add_text.set(String::new());
        set_add_error.set(String::new());
        set_adding.set(true);
    };

    let on_edit = Callback::new(move |review: Review| {
        set_edit_exam.set(review.exam.clone().unwrap_or_default());
        set_edit_score.set(review.result.map(|r| r.to_string()).unwrap_or_default());
        set_edit_text.set(review.review.clone());
        set_edit_error.set(String::new());
        set_editing.set(Some(review.id));
    });

    let on_delete = Callback::new(move |id: u32| {
        if !confirm("Вы уверены, что хотите удалить этот отзыв?") {
            return;
        }
        spawn_local(async move {
            match api::delete_review(id).await {
                Ok(()) => {
                    feed.reset();
                    load();
                }
                Err(api::ApiError::Unauthorized) => ctx.redirect_login(),
                Err(err) => {
                    web_sys::console::error_1(&format!("delete review {id}: {err}").into());
                    alert("Не удалось удалить отзыв. Пожалуйста, попробуйте позже.");
                }
            }
        });
    });

    let save_new = move |_| {
        let exam = add_exam.get_untracked();
        if exam.is_empty() {
            set_add_error.set("Пожалуйста, выберите тип экзамена".to_string());
            return;
        }
        let score = match score_from_input(&exam, &add_score.get_untracked()) {
            Ok(score) => score,
            Err(message) => {
                set_add_error.set(message);
                return;
            }
        };
        let text = add_text.get_untracked().trim().to_string();
        if text.is_empty() {
            set_add_error.set("Пожалуйста, напишите текст отзыва".to_string());
            return;
        }

        spawn_local(async move {
            let request = ReviewCreate { exam: &exam, result: score, review: &text };
            match api::create_review(&request).await {
                Ok(()) => {
                    set_adding.set(false);
                    feed.reset();
                    load();
                }
                Err(api::ApiError::Unauthorized) => ctx.redirect_login(),
                Err(err) => set_add_error.set(format!("Ошибка сервера: {}", err.user_message())),
            }
        });
    };

    let save_changes = move |_| {
        let Some(id) = editing.get_untracked() else { return };
        let score = match score_from_input(&edit_exam.get_untracked(), &edit_score.get_untracked()) {
            Ok(score) => score,
            Err(message) => {
                set_edit_error.set(message);
                return;
            }
        };
        let text = edit_text.get_untracked();

        spawn_local(async move {
            let request = ReviewUpdate { review: &text, result: score };
            match api::update_review(id, &request).await {
                Ok(()) => {
                    set_editing.set(None);
                    feed.reset();
                    load();
                }
                Err(api::ApiError::Unauthorized) => ctx.redirect_login(),
                Err(err) => set_edit_error.set(format!("Ошибка сервера: {}", err.user_message())),
            }
        });
    };

    let score_hint = move || match Exam::from_label(&add_exam.get()) {
        Some(exam) => exam.score_hint(),
        None => "",
    };

    view! {
        <section class="user-reviews">
            <div class="section-header">
                <h3>"Мои отзывы"</h3>
                <button class="add-review" on:click=open_add>"Оставить отзыв"</button>
            </div>
            <div class="cards">
                <For
                    each=move || feed.items.get().into_iter().enumerate()
                    key=|(index, _)| *index
                    children=move |(_, review)| {
                        view! {
                            <ReviewCard
                                review=review
                                on_edit=on_edit
                                on_delete=on_delete
                            />
                        }
                    }
                />
            </div>
            <FeedSentinel status=feed.status node_ref=sentinel empty="Отзывов пока нет." />

            <Show when=move || adding.get()>
                <div class="modal-overlay" on:click=move |_| set_adding.set(false)>
                    <div class="modal" on:click=|ev| ev.stop_propagation()>
                        <h3>"Новый отзыв"</h3>
                        <select on:change=move |ev| set_add_exam.set(event_target_value(&ev))>
                            <option value="">"Выберите экзамен"</option>
                            <option value="ЕГЭ">"ЕГЭ"</option>
                            <option value="ОГЭ">"ОГЭ"</option>
                        </select>
                        <input
                            type="number"
                            placeholder=move || {
                                if add_exam.get().is_empty() {
                                    "Сначала выберите экзамен"
                                } else {
                                    "Введите баллы"
                                }
                            }
                            prop:disabled=move || add_exam.get().is_empty()
                            prop:value=move || add_score.get()
                            on:input=move |ev| set_add_score.set(event_target_value(&ev))
                        />
                        <div class="score-hint">{score_hint}</div>
                        <textarea
                            placeholder="Текст отзыва"
                            prop:value=move || add_text.get()
                            on:input=move |ev| set_add_text.set(event_target_value(&ev))
                        />
                        <div class="form-error">{move || add_error.get()}</div>
                        <div class="modal-actions">
                            <button on:click=move |_| set_adding.set(false)>"Отмена"</button>
                            <button class="primary" on:click=save_new>"Сохранить"</button>
                        </div>
                    </div>
                </div>
            </Show>

            <Show when=move || editing.get().is_some()>
                <div class="modal-overlay" on:click=move |_| set_editing.set(None)>
                    <div class="modal" on:click=|ev| ev.stop_propagation()>
                        <h3>"Редактирование отзыва"</h3>
                        <input
                            type="number"
                            placeholder=move || match Exam::from_label(&edit_exam.get()) {
                                Some(exam) => exam.score_hint(),
                                None => "Оценка",
                            }
                            prop:value=move || edit_score.get()
                            on:input=move |ev| set_edit_score.set(event_target_value(&ev))
                        />
                        <textarea
                            prop:value=move || edit_text.get()
                            on:input=move |ev| set_edit_text.set(event_target_value(&ev))
                        />
                        <div class="form-error">{move || edit_error.get()}</div>
                        <div class="modal-actions">
                            <button on:click=move |_| set_editing.set(None)>"Отмена"</button>
                            <button class="primary" on:click=save_changes>"Сохранить"</button>
                        </div>
                    </div>
                </div>
            </Show>
        </section>
    }
}
