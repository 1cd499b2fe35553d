//! Review Card Component
//!
//! One review record rendered as a card. Missing optional fields fall back
//! to neutral display values; the timestamp is formatted before it reaches
//! the DOM.

use leptos::prelude::*;

use crate::format::format_card_date;
use crate::models::Review;

use super::ReadMoreText;

#[component]
pub fn ReviewCard(
    review: Review,
    /// Exam label used when the record itself carries none.
    #[prop(into, optional)]
    exam_label: String,
    #[prop(optional)] on_edit: Option<Callback<Review>>,
    #[prop(optional)] on_delete: Option<Callback<u32>>,
) -> impl IntoView {
    let label = review.exam.clone().unwrap_or(exam_label);
    let date = format_card_date(&review.created_at);
    let name = review.display_name().to_string();
    let result = review.display_result();
    let avatar = review.avatar().to_string();
    let id = review.id;
    let for_edit = review.clone();

    view! {
        <div class="card" data-review-id=id.to_string()>
            <div class="card-header">
                <div class="info">
                    <div class="name">{name}</div>
                    <div class="exam">{label}": " <strong>{result}</strong></div>
                    <div class="date">"Дата публикации: " <strong>{date}</strong></div>
                </div>
                <img src=avatar alt="Аватар" />
            </div>
            <div class="card-body">
                <div class="review-container">
                    <ReadMoreText text=review.review />
                    <div class="card-actions">
                        {on_edit.map(|edit| {
                            let review = for_edit.clone();
                            view! {
                                <button
                                    class="edit-review"
                                    on:click=move |_| edit.run(review.clone())
                                >
                                    "Редактировать"
                                </button>
                            }
                        })}
                        {on_delete.map(|delete| view! {
                            <button
                                class="delete-button"
                                on:click=move |_| delete.run(id)
                            >
                                "Удалить"
                            </button>
                        })}
                    </div>
                </div>
            </div>
        </div>
    }
}
