//! Fetch Plumbing
//!
//! One request path for every backend call: JSON headers, cookies included,
//! and an abort-after-timeout so a dead backend cannot leave the UI stuck
//! on "Загрузка...". Status codes are classified here once; callers match
//! on [`ApiError`] instead of numeric codes.

use std::fmt;

use gloo_timers::callback::Timeout;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, Headers, Request, RequestCredentials, RequestInit, Response};

use crate::config::{api_base, REQUEST_TIMEOUT_MS};

/// Client-side classification of a failed backend call.
#[derive(Clone, Debug, PartialEq)]
pub enum ApiError {
    /// 401: session missing or expired.
    Unauthorized,
    /// 404: the backend's "no data" signal.
    NotFound,
    /// The request hit the abort timeout.
    Timeout,
    /// fetch itself rejected: offline, DNS, CORS.
    Network(String),
    /// Any other non-2xx, with the backend's detail message when present.
    Status(u16, String),
    /// 2xx with a body that did not decode.
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Unauthorized => write!(f, "unauthorized"),
            ApiError::NotFound => write!(f, "not found"),
            ApiError::Timeout => write!(f, "request timed out"),
            ApiError::Network(reason) => write!(f, "network failure: {reason}"),
            ApiError::Status(code, detail) => write!(f, "server returned {code}: {detail}"),
            ApiError::Decode(reason) => write!(f, "bad response payload: {reason}"),
        }
    }
}

impl ApiError {
    /// Message fit for showing to the user, in the site's language.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Unauthorized => "Требуется авторизация".to_string(),
            ApiError::NotFound => "Данные не найдены".to_string(),
            ApiError::Timeout => "Превышено время ожидания ответа от сервера".to_string(),
            ApiError::Network(_) => "Нет соединения с сервером. Проверьте интернет-соединение.".to_string(),
            ApiError::Status(code, detail) if detail.is_empty() => format!("Ошибка сервера: {code}"),
            ApiError::Status(_, detail) => detail.clone(),
            ApiError::Decode(_) => "Ошибка обработки ответа сервера".to_string(),
        }
    }
}

fn js_reason(err: &JsValue) -> String {
    err.as_string()
        .or_else(|| js_sys::Reflect::get(err, &"message".into()).ok().and_then(|m| m.as_string()))
        .unwrap_or_else(|| format!("{err:?}"))
}

fn is_abort(err: &JsValue) -> bool {
    js_sys::Reflect::get(err, &"name".into())
        .ok()
        .and_then(|name| name.as_string())
        .is_some_and(|name| name == "AbortError")
}

async fn send(method: &str, path: &str, body: Option<String>) -> Result<Response, ApiError> {
    let headers = Headers::new().map_err(|e| ApiError::Network(js_reason(&e)))?;
    headers
        .append("Content-Type", "application/json")
        .map_err(|e| ApiError::Network(js_reason(&e)))?;
    headers
        .append("Accept", "application/json")
        .map_err(|e| ApiError::Network(js_reason(&e)))?;

    let controller = AbortController::new().map_err(|e| ApiError::Network(js_reason(&e)))?;

    let init = RequestInit::new();
    init.set_method(method);
    init.set_credentials(RequestCredentials::Include);
    init.set_headers(&headers);
    init.set_signal(Some(&controller.signal()));
    if let Some(body) = body {
        init.set_body(&JsValue::from_str(&body));
    }

    let url = format!("{}{}", api_base(), path);
    let request =
        Request::new_with_str_and_init(&url, &init).map_err(|e| ApiError::Network(js_reason(&e)))?;

    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;

    let aborter = controller.clone();
    let watchdog = Timeout::new(REQUEST_TIMEOUT_MS, move || aborter.abort());

    let result = JsFuture::from(window.fetch_with_request(&request)).await;
    watchdog.cancel();

    let response = match result {
        Ok(value) => value
            .dyn_into::<Response>()
            .map_err(|e| ApiError::Network(js_reason(&e)))?,
        Err(err) if is_abort(&err) => return Err(ApiError::Timeout),
        Err(err) => return Err(ApiError::Network(js_reason(&err))),
    };

    match response.status() {
        200..=299 => Ok(response),
        401 => Err(ApiError::Unauthorized),
        404 => Err(ApiError::NotFound),
        code => Err(ApiError::Status(code, error_detail(&response).await)),
    }
}

/// Pull the `detail`/`message` field out of an error body, if there is one.
async fn error_detail(response: &Response) -> String {
    let Ok(promise) = response.text() else {
        return String::new();
    };
    let Ok(value) = JsFuture::from(promise).await else {
        return String::new();
    };
    let Some(text) = value.as_string() else {
        return String::new();
    };
    if let Ok(body) = serde_json::from_str::<serde_json::Value>(&text) {
        for key in ["detail", "message"] {
            if let Some(detail) = body.get(key).and_then(|v| v.as_str()) {
                return detail.to_string();
            }
        }
    }
    text
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let promise = response.json().map_err(|e| ApiError::Decode(js_reason(&e)))?;
    let value = JsFuture::from(promise)
        .await
        .map_err(|e| ApiError::Decode(js_reason(&e)))?;
    serde_wasm_bindgen::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

fn encode<B: Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    decode(send("GET", path, None).await?).await
}

pub async fn get_ok(path: &str) -> Result<(), ApiError> {
    send("GET", path, None).await.map(|_| ())
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    decode(send("POST", path, Some(encode(body)?)).await?).await
}

pub async fn post_ok<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    send("POST", path, Some(encode(body)?)).await.map(|_| ())
}

pub async fn patch_ok<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    send("PATCH", path, Some(encode(body)?)).await.map(|_| ())
}

pub async fn delete_ok(path: &str) -> Result<(), ApiError> {
    send("DELETE", path, None).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_messages_cover_the_error_taxonomy() {
        assert_eq!(
            ApiError::Timeout.user_message(),
            "Превышено время ожидания ответа от сервера"
        );
        assert!(ApiError::Network("dns".into()).user_message().contains("соединения"));
        assert_eq!(ApiError::Status(500, String::new()).user_message(), "Ошибка сервера: 500");
        assert_eq!(
            ApiError::Status(422, "Неверный формат".into()).user_message(),
            "Неверный формат"
        );
    }
}
