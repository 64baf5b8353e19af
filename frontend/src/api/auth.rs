//! Authentication endpoint. Login is the only call made without a bearer
//! token; everything else in the crate assumes a stored session.

use crate::api::client::ApiClient;
use crate::api::types::{ApiError, LoginFailure, LoginRequest, LoginResponse};
use crate::state::session;

impl ApiClient {
    /// Exchanges credentials for a token and persists it on success. Failure
    /// surfaces the first backend validation message, or a generic one when
    /// the body is not in the expected shape.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{base_url}/auth/login"))
            .json(request)
            .send()
            .await
            .map_err(|err| ApiError::request_failed(format!("Request failed: {err}")))?;

        if response.status().is_success() {
            let login: LoginResponse = response
                .json()
                .await
                .map_err(|err| ApiError::unknown(format!("Failed to parse response: {err}")))?;
            session::store_token(&login.token);
            Ok(login)
        } else {
            let message = response
                .json::<LoginFailure>()
                .await
                .ok()
                .and_then(|failure| failure.errors.into_iter().next())
                .map(|field| field.msg)
                .unwrap_or_else(|| "Login failed".to_string());
            Err(ApiError::unauthorized(message))
        }
    }
}
