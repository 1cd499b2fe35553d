//! Build-time Configuration

/// Backend base URL. Overridable at build time so the same bundle can point
/// at a staging or tunnelled backend.
pub fn api_base() -> &'static str {
    option_env!("EXAMSTORE_API_URL").unwrap_or("http://localhost:7777")
}

/// Abort timeout applied to every backend call.
pub const REQUEST_TIMEOUT_MS: u32 = 10_000;
