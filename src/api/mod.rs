//! Backend API Client
//!
//! Typed wrappers over the REST backend, organized by domain. All calls go
//! through the shared fetch helper in `http`, so every endpoint inherits the
//! same credential, timeout and status-mapping behavior.

mod http;

mod auth;
mod payments;
mod products;
mod reviews;
mod users;

pub use http::ApiError;

pub use auth::*;
pub use payments::*;
pub use products::*;
pub use reviews::*;
pub use users::*;

use leptos_pagefeed::PageError;

impl From<ApiError> for PageError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::NotFound => PageError::Empty,
            ApiError::Unauthorized => PageError::Unauthorized,
            other => PageError::Failed(other.to_string()),
        }
    }
}
