//! Review Endpoints

use serde::Serialize;

use super::http::{self, ApiError};
use crate::models::{Exam, Review};

#[derive(Serialize)]
pub struct ReviewCreate<'a> {
    pub exam: &'a str,
    pub result: i32,
    pub review: &'a str,
}

#[derive(Serialize)]
pub struct ReviewUpdate<'a> {
    pub review: &'a str,
    pub result: i32,
}

/// Public per-exam review feed, paginated.
pub async fn list_exam_reviews(exam: Exam, page: u32, per_page: usize) -> Result<Vec<Review>, ApiError> {
    http::get_json(&format!(
        "/api/reviews/{}?page={page}&per_page={per_page}",
        exam.endpoint()
    ))
    .await
}

/// Moderation feed with author info, superusers only.
pub async fn list_all_reviews(page: u32, per_page: usize) -> Result<Vec<Review>, ApiError> {
    http::get_json(&format!("/admin/reviews?page={page}&per_page={per_page}")).await
}

pub async fn create_review(body: &ReviewCreate<'_>) -> Result<(), ApiError> {
    http::post_ok("/reviews", body).await
}

pub async fn update_review(id: u32, body: &ReviewUpdate<'_>) -> Result<(), ApiError> {
    http::patch_ok(&format!("/reviews/{id}"), body).await
}

pub async fn delete_review(id: u32) -> Result<(), ApiError> {
    http::delete_ok(&format!("/reviews/{id}")).await
}

/// Moderator delete, reaches reviews of any user.
pub async fn admin_delete_review(id: u32) -> Result<(), ApiError> {
    http::delete_ok(&format!("/admin/reviews/{id}")).await
}
