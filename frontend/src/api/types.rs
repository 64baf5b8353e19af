use leptos::{view, IntoView, View};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Normalized API error. The backend answers with several body shapes
/// (`{"error": ...}`, `{"errors": [{"msg": ...}]}`, `{"message": ...}`);
/// they all collapse into this one struct before reaching a view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "VALIDATION_ERROR".to_string(),
            details: None,
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "UNAUTHORIZED".to_string(),
            details: None,
        }
    }

    pub fn request_failed(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }
}

impl From<ApiError> for String {
    fn from(err: ApiError) -> Self {
        err.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        view! { <span>{self.error}</span> }.into_view()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldError {
    pub msg: String,
}

/// Validation failure body the auth endpoint produces.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginFailure {
    #[serde(default)]
    pub errors: Vec<FieldError>,
}

/// Text bodies are optional on the wire; older records omit them or carry
/// an explicit `null`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AboutCard {
    pub id: i64,
    pub title_en: String,
    pub title_ru: String,
    #[serde(default)]
    pub text_en: Option<String>,
    #[serde(default)]
    pub text_ru: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AboutPayload {
    pub title_en: String,
    pub title_ru: String,
    pub text_en: String,
    pub text_ru: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Address {
    pub id: i64,
    pub address_en: String,
    pub address_ru: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AddressPayload {
    pub address_en: String,
    pub address_ru: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Contact {
    pub id: i64,
    pub address: String,
    pub phone: String,
    pub mail: String,
    #[serde(default)]
    pub map: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ContactPayload {
    pub address: String,
    pub phone: String,
    pub mail: String,
    pub map: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Phone {
    pub id: i64,
    pub phone: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhonePayload {
    pub phone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HeaderImage {
    pub id: i64,
    pub header_name: String,
    // The backend names the single stored path `images`.
    #[serde(default)]
    pub images: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Partner {
    pub id: i64,
    #[serde(default)]
    pub logo: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: i64,
    pub category_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name_en: String,
    pub name_ru: String,
    #[serde(default)]
    pub text_en: String,
    #[serde(default)]
    pub text_ru: String,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

/// `category_id` is serialized even when `None`; the backend treats an
/// explicit `null` as "uncategorized" and a missing key as "unchanged".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProductPayload {
    pub name_en: String,
    pub name_ru: String,
    pub text_en: String,
    pub text_ru: String,
    pub category_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SocialLink {
    pub id: i64,
    pub icon: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SocialLinkPayload {
    pub icon: String,
    pub url: String,
}

/// Icons the public site knows how to render.
pub const SOCIAL_ICONS: &[&str] = &[
    "facebook",
    "instagram",
    "twitter",
    "linkedin",
    "tiktok",
    "telegram",
    "whatsapp",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TelegramAdmin {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// The add endpoint alone wants the camelCase key; the roster replies in
/// snake_case.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddBotAdminRequest {
    pub username: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
}

/// Envelope the bot management endpoints reply with, for both outcomes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BotResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_payload_serializes_null_category() {
        let payload = ProductPayload {
            name_en: "Tea".to_string(),
            name_ru: "Чай".to_string(),
            text_en: String::new(),
            text_ru: String::new(),
            category_id: None,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("category_id").unwrap().is_null());
    }

    #[test]
    fn telegram_roster_uses_snake_case_full_name() {
        let admin: TelegramAdmin = serde_json::from_value(serde_json::json!({
            "id": 3,
            "username": "shopkeeper",
            "full_name": "Shop Keeper"
        }))
        .unwrap();
        assert_eq!(admin.full_name, "Shop Keeper");
        assert!(admin.created_at.is_none());
    }

    #[test]
    fn add_admin_request_sends_camel_case_full_name() {
        let request = AddBotAdminRequest {
            username: "shopkeeper".to_string(),
            full_name: "Shop Keeper".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json.get("fullName").and_then(Value::as_str),
            Some("Shop Keeper")
        );
        assert!(json.get("full_name").is_none());
    }

    #[test]
    fn category_reads_the_backend_field_name() {
        let category: Category = serde_json::from_value(serde_json::json!({
            "id": 1,
            "category_name": "Tea"
        }))
        .unwrap();
        assert_eq!(category.category_name, "Tea");
    }

    #[test]
    fn header_image_reads_the_images_field() {
        let header: HeaderImage = serde_json::from_value(serde_json::json!({
            "id": 2,
            "header_name": "Spring",
            "images": "headers\\spring.jpg"
        }))
        .unwrap();
        assert_eq!(header.images, "headers\\spring.jpg");
    }

    #[test]
    fn about_card_tolerates_absent_text_fields() {
        let card: AboutCard = serde_json::from_value(serde_json::json!({
            "id": 5,
            "title_en": "Our story",
            "title_ru": "История",
            "text_ru": null
        }))
        .unwrap();
        assert!(card.text_en.is_none());
        assert!(card.text_ru.is_none());
    }

    #[test]
    fn login_failure_tolerates_missing_errors() {
        let failure: LoginFailure = serde_json::from_str("{}").unwrap();
        assert!(failure.errors.is_empty());
    }

    #[test]
    fn bot_response_defaults_to_failure() {
        let response: BotResponse = serde_json::from_str("{}").unwrap();
        assert!(!response.success);
        assert!(response.error.is_none());
    }

    #[test]
    fn api_error_display_is_the_message() {
        let err = ApiError::validation("Name is required");
        assert_eq!(err.to_string(), "Name is required");
        assert_eq!(String::from(err), "Name is required");
    }
}
