//! HTTP client shared by every API call.
//!
//! All authenticated requests flow through the helpers here, so the 401
//! policy lives in exactly one place: a 401 response clears the stored token
//! and redirects to the login screen, and the caller still receives the
//! normalized [`ApiError`].

use leptos::use_context;
use reqwest::header::{HeaderMap, AUTHORIZATION};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::api::types::ApiError;
use crate::config;
use crate::state::session;
use crate::utils::nav;

pub const LOGIN_PATH: &str = "/login";

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// One multipart form field, already read into memory. File inputs are read
/// into bytes on the browser side before the request is assembled.
#[derive(Debug, Clone)]
pub enum FormField {
    Text {
        name: &'static str,
        value: String,
    },
    File {
        name: &'static str,
        filename: String,
        mime: String,
        data: Vec<u8>,
    },
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    /// Pins the base URL instead of resolving it from runtime config. Tests
    /// point this at a mock server.
    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        match &self.base_url {
            Some(base) => base.clone(),
            None => config::await_api_base_url().await,
        }
    }

    fn auth_headers(&self) -> Result<HeaderMap, ApiError> {
        let token = session::token().ok_or_else(|| ApiError::unauthorized("No session token"))?;
        let mut headers = HeaderMap::new();
        let value = format!("Bearer {token}")
            .parse()
            .map_err(|_| ApiError::unauthorized("Invalid token format"))?;
        headers.insert(AUTHORIZATION, value);
        Ok(headers)
    }

    /// The centralized 401 policy. Any other status is left to the caller.
    fn handle_unauthorized_status(status: StatusCode) {
        if status != StatusCode::UNAUTHORIZED {
            return;
        }
        log::warn!("session rejected by backend, clearing token");
        session::clear_token();
        if nav::current_path().as_deref() != Some(LOGIN_PATH) {
            nav::redirect_to(LOGIN_PATH);
        }
    }

    async fn parse_success<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        response
            .json::<T>()
            .await
            .map_err(|err| ApiError::unknown(format!("Failed to parse response: {err}")))
    }

    async fn parse_failure(response: reqwest::Response) -> ApiError {
        let status = response.status();
        let body = response.json::<Value>().await.ok();
        error_from_body(status, body)
    }

    async fn finish<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        Self::handle_unauthorized_status(status);
        if status.is_success() {
            Self::parse_success(response).await
        } else {
            Err(Self::parse_failure(response).await)
        }
    }

    /// Like [`finish`](Self::finish) but discards the success body. Several
    /// write endpoints answer with ad-hoc shapes the UI has no use for.
    async fn finish_unit(response: reqwest::Response) -> Result<(), ApiError> {
        let status = response.status();
        Self::handle_unauthorized_status(status);
        if status.is_success() {
            Ok(())
        } else {
            Err(Self::parse_failure(response).await)
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let base_url = self.resolved_base_url().await;
        let headers = self.auth_headers()?;
        let response = self
            .client
            .get(format!("{base_url}/{path}"))
            .headers(headers)
            .send()
            .await
            .map_err(|err| ApiError::request_failed(format!("Request failed: {err}")))?;
        Self::finish(response).await
    }

    pub(crate) async fn post_json<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let base_url = self.resolved_base_url().await;
        let headers = self.auth_headers()?;
        let response = self
            .client
            .post(format!("{base_url}/{path}"))
            .headers(headers)
            .json(body)
            .send()
            .await
            .map_err(|err| ApiError::request_failed(format!("Request failed: {err}")))?;
        Self::finish(response).await
    }

    pub(crate) async fn post_json_unit<B>(&self, path: &str, body: &B) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        let base_url = self.resolved_base_url().await;
        let headers = self.auth_headers()?;
        let response = self
            .client
            .post(format!("{base_url}/{path}"))
            .headers(headers)
            .json(body)
            .send()
            .await
            .map_err(|err| ApiError::request_failed(format!("Request failed: {err}")))?;
        Self::finish_unit(response).await
    }

    pub(crate) async fn put_json_unit<B>(&self, path: &str, body: &B) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        let base_url = self.resolved_base_url().await;
        let headers = self.auth_headers()?;
        let response = self
            .client
            .put(format!("{base_url}/{path}"))
            .headers(headers)
            .json(body)
            .send()
            .await
            .map_err(|err| ApiError::request_failed(format!("Request failed: {err}")))?;
        Self::finish_unit(response).await
    }

    pub(crate) async fn post_multipart_unit(
        &self,
        path: &str,
        fields: Vec<FormField>,
    ) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let headers = self.auth_headers()?;
        let form = build_form(fields)?;
        let response = self
            .client
            .post(format!("{base_url}/{path}"))
            .headers(headers)
            .multipart(form)
            .send()
            .await
            .map_err(|err| ApiError::request_failed(format!("Request failed: {err}")))?;
        Self::finish_unit(response).await
    }

    pub(crate) async fn put_multipart_unit(
        &self,
        path: &str,
        fields: Vec<FormField>,
    ) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let headers = self.auth_headers()?;
        let form = build_form(fields)?;
        let response = self
            .client
            .put(format!("{base_url}/{path}"))
            .headers(headers)
            .multipart(form)
            .send()
            .await
            .map_err(|err| ApiError::request_failed(format!("Request failed: {err}")))?;
        Self::finish_unit(response).await
    }

    pub(crate) async fn delete_unit(&self, path: &str) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let headers = self.auth_headers()?;
        let response = self
            .client
            .delete(format!("{base_url}/{path}"))
            .headers(headers)
            .send()
            .await
            .map_err(|err| ApiError::request_failed(format!("Request failed: {err}")))?;
        Self::finish_unit(response).await
    }
}

fn build_form(fields: Vec<FormField>) -> Result<reqwest::multipart::Form, ApiError> {
    let mut form = reqwest::multipart::Form::new();
    for field in fields {
        form = match field {
            FormField::Text { name, value } => form.text(name, value),
            FormField::File {
                name,
                filename,
                mime,
                data,
            } => {
                let part = reqwest::multipart::Part::bytes(data)
                    .file_name(filename)
                    .mime_str(&mime)
                    .map_err(|_| ApiError::validation("Unsupported file type"))?;
                form.part(name, part)
            }
        };
    }
    Ok(form)
}

/// Collapses the backend's error body shapes into one message. Recognized in
/// order: `{"error"}`, `{"errors": [{"msg"}]}`, `{"message"}`.
pub(crate) fn error_from_body(status: StatusCode, body: Option<Value>) -> ApiError {
    let code = if status == StatusCode::UNAUTHORIZED {
        "UNAUTHORIZED"
    } else {
        "REQUEST_FAILED"
    };
    if let Some(value) = body {
        let message = value
            .get("error")
            .and_then(Value::as_str)
            .map(str::to_string)
            .or_else(|| {
                value
                    .get("errors")
                    .and_then(Value::as_array)
                    .and_then(|errors| errors.first())
                    .and_then(|entry| entry.get("msg"))
                    .and_then(Value::as_str)
                    .map(str::to_string)
            })
            .or_else(|| value.get("message").and_then(Value::as_str).map(str::to_string));
        if let Some(message) = message {
            return ApiError {
                error: message,
                code: code.to_string(),
                details: Some(value),
            };
        }
    }
    ApiError {
        error: format!("Request failed with status {}", status.as_u16()),
        code: code.to_string(),
        details: None,
    }
}

/// Resolves the [`ApiClient`] provided at the app root, or a fresh one when
/// a view is rendered outside that tree.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::error_from_body;
    use reqwest::StatusCode;
    use serde_json::json;

    #[test]
    fn prefers_error_key() {
        let err = error_from_body(
            StatusCode::BAD_REQUEST,
            Some(json!({"error": "Name taken", "message": "other"})),
        );
        assert_eq!(err.error, "Name taken");
        assert_eq!(err.code, "REQUEST_FAILED");
    }

    #[test]
    fn falls_back_to_errors_array() {
        let err = error_from_body(
            StatusCode::UNPROCESSABLE_ENTITY,
            Some(json!({"errors": [{"msg": "Invalid value"}]})),
        );
        assert_eq!(err.error, "Invalid value");
    }

    #[test]
    fn falls_back_to_message_key() {
        let err = error_from_body(StatusCode::NOT_FOUND, Some(json!({"message": "Gone"})));
        assert_eq!(err.error, "Gone");
    }

    #[test]
    fn synthesizes_message_without_body() {
        let err = error_from_body(StatusCode::INTERNAL_SERVER_ERROR, None);
        assert_eq!(err.error, "Request failed with status 500");
    }

    #[test]
    fn tags_unauthorized_status() {
        let err = error_from_body(StatusCode::UNAUTHORIZED, Some(json!({"error": "Expired"})));
        assert_eq!(err.code, "UNAUTHORIZED");
    }
}
