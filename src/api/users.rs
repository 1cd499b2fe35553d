//! Personal Area Endpoints

use serde::Serialize;

use super::http::{self, ApiError};
use crate::models::{Purchase, Review, UserInfo};

#[derive(Serialize)]
pub struct UserUpdate<'a> {
    pub name: &'a str,
    pub surname: &'a str,
}

pub async fn me_info() -> Result<UserInfo, ApiError> {
    http::get_json("/me/info").await
}

pub async fn update_me(body: &UserUpdate<'_>) -> Result<(), ApiError> {
    http::patch_ok("/me/info", body).await
}

pub async fn my_reviews(page: u32, per_page: usize) -> Result<Vec<Review>, ApiError> {
    http::get_json(&format!("/me/reviews?page={page}&per_page={per_page}")).await
}

pub async fn my_purchases() -> Result<Vec<Purchase>, ApiError> {
    http::get_json("/me/purchases").await
}
