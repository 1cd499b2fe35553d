//! Authentication Endpoints
//!
//! Registration is two-step: per-channel confirmation codes first, then one
//! verify call with the codes and the chosen password. Password recovery
//! follows the same shape over `/auth/reset`.

use serde::Serialize;

use super::http::{self, ApiError};

#[derive(Serialize)]
pub struct LoginRequest<'a> {
    pub phone: &'a str,
    pub password: &'a str,
}

#[derive(Serialize)]
pub struct PhoneRequest<'a> {
    pub phone: &'a str,
}

#[derive(Serialize)]
pub struct EmailRequest<'a> {
    pub email: &'a str,
}

#[derive(Serialize)]
pub struct RegisterVerify<'a> {
    pub phone: &'a str,
    pub code_phone: &'a str,
    pub password: &'a str,
    pub password_repeat: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_email: Option<&'a str>,
}

#[derive(Serialize)]
pub struct ResetVerify<'a> {
    pub phone: &'a str,
    pub code: &'a str,
}

pub async fn login(body: &LoginRequest<'_>) -> Result<(), ApiError> {
    http::post_ok("/auth/login", body).await
}

pub async fn logout() -> Result<(), ApiError> {
    http::get_ok("/auth/logout").await
}

pub async fn send_phone_code(phone: &str) -> Result<(), ApiError> {
    http::post_ok("/auth/register/phone_code", &PhoneRequest { phone }).await
}

pub async fn send_email_code(email: &str) -> Result<(), ApiError> {
    http::post_ok("/auth/register/email_code", &EmailRequest { email }).await
}

pub async fn register_verify(body: &RegisterVerify<'_>) -> Result<(), ApiError> {
    http::post_ok("/auth/register/verify", body).await
}

pub async fn request_reset_code(phone: &str) -> Result<(), ApiError> {
    http::post_ok("/auth/reset", &PhoneRequest { phone }).await
}

pub async fn verify_reset_code(body: &ResetVerify<'_>) -> Result<(), ApiError> {
    http::post_ok("/auth/reset/verify", body).await
}
