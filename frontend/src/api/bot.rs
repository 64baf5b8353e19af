//! Telegram bot admin management. These endpoints answer 200 even on
//! failure, with a `{success, error, message}` envelope, so the envelope is
//! checked here and collapsed into the usual [`ApiError`].

use serde_json::json;

use crate::api::client::ApiClient;
use crate::api::types::{AddBotAdminRequest, ApiError, BotResponse, TelegramAdmin};

fn check_envelope(response: BotResponse) -> Result<BotResponse, ApiError> {
    if response.success {
        Ok(response)
    } else {
        let message = response
            .error
            .or(response.message)
            .unwrap_or_else(|| "Bot request failed".to_string());
        Err(ApiError::request_failed(message))
    }
}

impl ApiClient {
    pub async fn list_bot_admins(&self) -> Result<Vec<TelegramAdmin>, ApiError> {
        self.get_json("admin/all").await
    }

    pub async fn add_bot_admin(&self, request: &AddBotAdminRequest) -> Result<BotResponse, ApiError> {
        let response: BotResponse = self.post_json("admin/add", request).await?;
        check_envelope(response)
    }

    pub async fn remove_bot_admin(&self, username: &str) -> Result<BotResponse, ApiError> {
        let response: BotResponse = self
            .post_json("admin/remove", &json!({ "username": username }))
            .await?;
        check_envelope(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_failure_prefers_error_field() {
        let err = check_envelope(BotResponse {
            success: false,
            error: Some("Already an admin".to_string()),
            message: Some("ignored".to_string()),
        })
        .unwrap_err();
        assert_eq!(err.error, "Already an admin");
    }

    #[test]
    fn envelope_success_passes_through() {
        let ok = check_envelope(BotResponse {
            success: true,
            error: None,
            message: Some("Added".to_string()),
        })
        .unwrap();
        assert_eq!(ok.message.as_deref(), Some("Added"));
    }
}
