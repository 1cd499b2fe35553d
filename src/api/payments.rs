//! Payment Endpoints

use serde::Serialize;

use super::http::{self, ApiError};
use crate::models::PaymentLink;

#[derive(Serialize)]
pub struct PaymentRequest<'a> {
    pub product_slug: &'a str,
    pub email: &'a str,
}

/// Initiate a payment; the backend answers with the provider's checkout URL.
pub async fn create_payment(body: &PaymentRequest<'_>) -> Result<PaymentLink, ApiError> {
    http::post_json("/payments", body).await
}
