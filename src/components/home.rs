//! Landing Page
//!
//! Product cards for the two exam courses with their payment forms, plus
//! the review preview block.

use leptos::prelude::*;

use crate::models::Exam;

use super::{MainReviews, PaymentForm};

#[component]
fn ProductOffer(exam: Exam, #[prop(into)] pitch: String) -> impl IntoView {
    view! {
        <div class="product-card">
            <h3>{format!("Материалы {}", exam.title())}</h3>
            <p class="product-pitch">{pitch}</p>
            <PaymentForm product_slug=exam.endpoint() />
        </div>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <section class="hero">
                <h1>"Подготовка к ЕГЭ и ОГЭ"</h1>
                <p>"Авторские материалы для подготовки к государственным экзаменам"</p>
            </section>
            <section class="products">
                <ProductOffer
                    exam=Exam::Ege
                    pitch="Полный курс подготовки к ЕГЭ: теория, разборы и тренировочные варианты"
                />
                <ProductOffer
                    exam=Exam::Oge
                    pitch="Полный курс подготовки к ОГЭ: теория, разборы и тренировочные варианты"
                />
            </section>
            <MainReviews />
        </div>
    }
}
