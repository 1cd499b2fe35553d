//! Admin Product Endpoints

use serde::Serialize;

use super::http::{self, ApiError};
use crate::models::Product;

#[derive(Serialize)]
pub struct ProductUpdate<'a> {
    pub name: &'a str,
    pub price: i64,
    pub description: &'a str,
    pub download_link: &'a str,
}

pub async fn admin_products() -> Result<Vec<Product>, ApiError> {
    http::get_json("/admin/products").await
}

pub async fn update_product(slug: &str, body: &ProductUpdate<'_>) -> Result<(), ApiError> {
    http::patch_ok(&format!("/admin/products/{slug}"), body).await
}
