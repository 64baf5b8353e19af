use httpmock::prelude::*;
use serde_json::json;

use crate::api::client::ApiClient;
use crate::api::types::{AddBotAdminRequest, LoginRequest, ProductPayload};
use crate::state::session;
use crate::utils::nav;

const TOKEN: &str = "test-token";

fn authed_client(server: &MockServer) -> ApiClient {
    session::store_token(TOKEN);
    nav::take_recorded_redirect();
    ApiClient::new_with_base_url(server.base_url())
}

#[tokio::test]
async fn login_success_stores_token() {
    session::clear_token();
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/auth/login")
            .json_body(json!({"username": "admin", "password": "secret"}));
        then.status(200).json_body(json!({"token": "issued-token"}));
    });

    let client = ApiClient::new_with_base_url(server.base_url());
    let response = client
        .login(&LoginRequest {
            username: "admin".to_string(),
            password: "secret".to_string(),
        })
        .await
        .unwrap();

    mock.assert();
    assert_eq!(response.token, "issued-token");
    assert_eq!(session::token().as_deref(), Some("issued-token"));
    session::clear_token();
}

#[tokio::test]
async fn login_failure_surfaces_backend_message() {
    session::clear_token();
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/auth/login");
        then.status(401)
            .json_body(json!({"errors": [{"msg": "Invalid credentials"}]}));
    });

    let client = ApiClient::new_with_base_url(server.base_url());
    let err = client
        .login(&LoginRequest {
            username: "admin".to_string(),
            password: "wrong".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.error, "Invalid credentials");
    assert!(session::token().is_none());
}

#[tokio::test]
async fn login_failure_defaults_to_generic_message() {
    session::clear_token();
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/auth/login");
        then.status(500).body("boom");
    });

    let client = ApiClient::new_with_base_url(server.base_url());
    let err = client
        .login(&LoginRequest {
            username: "admin".to_string(),
            password: "secret".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.error, "Login failed");
}

#[tokio::test]
async fn list_sends_bearer_token() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/about")
            .header("authorization", format!("Bearer {TOKEN}"));
        then.status(200).json_body(json!([
            {"id": 1, "title_en": "Our story", "title_ru": "История", "text_en": "", "text_ru": ""}
        ]));
    });

    let client = authed_client(&server);
    let cards = client.about_cards().list().await.unwrap();

    mock.assert();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].title_en, "Our story");
    session::clear_token();
}

#[tokio::test]
async fn missing_token_fails_before_any_request() {
    session::clear_token();
    let client = ApiClient::new_with_base_url("http://127.0.0.1:9");
    let err = client.about_cards().list().await.unwrap_err();
    assert_eq!(err.code, "UNAUTHORIZED");
}

#[tokio::test]
async fn unauthorized_response_clears_token_and_redirects() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/products");
        then.status(401).json_body(json!({"error": "Token expired"}));
    });

    let client = authed_client(&server);
    let err = client.products().list().await.unwrap_err();

    assert_eq!(err.code, "UNAUTHORIZED");
    assert_eq!(err.error, "Token expired");
    assert!(session::token().is_none());
    assert_eq!(nav::take_recorded_redirect().as_deref(), Some("/login"));
}

#[tokio::test]
async fn delete_targets_the_given_id() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(DELETE).path("/partners/7");
        then.status(200).json_body(json!({"message": "deleted"}));
    });

    let client = authed_client(&server);
    client.partners().delete(7).await.unwrap();

    mock.assert();
    session::clear_token();
}

#[tokio::test]
async fn create_posts_the_json_payload() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/products").json_body(json!({
            "name_en": "Tea",
            "name_ru": "Чай",
            "text_en": "",
            "text_ru": "",
            "category_id": null
        }));
        then.status(201).json_body(json!({"id": 12}));
    });

    let client = authed_client(&server);
    client
        .products()
        .create(&ProductPayload {
            name_en: "Tea".to_string(),
            name_ru: "Чай".to_string(),
            text_en: String::new(),
            text_ru: String::new(),
            category_id: None,
        })
        .await
        .unwrap();

    mock.assert();
    session::clear_token();
}

#[tokio::test]
async fn update_errors_surface_backend_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(PUT).path("/address/4");
        then.status(400).json_body(json!({"error": "Address is required"}));
    });

    let client = authed_client(&server);
    let err = client
        .addresses()
        .update(
            4,
            &crate::api::types::AddressPayload {
                address_en: String::new(),
                address_ru: String::new(),
            },
        )
        .await
        .unwrap_err();

    assert_eq!(err.error, "Address is required");
    assert_eq!(err.code, "REQUEST_FAILED");
    session::clear_token();
}

#[tokio::test]
async fn multipart_create_reaches_the_endpoint() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/partners");
        then.status(201).json_body(json!({"id": 3}));
    });

    let client = authed_client(&server);
    client
        .partners()
        .create_multipart(vec![crate::api::FormField::File {
            name: "logo",
            filename: "logo.png".to_string(),
            mime: "image/png".to_string(),
            data: vec![0x89, 0x50, 0x4e, 0x47],
        }])
        .await
        .unwrap();

    mock.assert();
    session::clear_token();
}

#[tokio::test]
async fn bot_add_rejects_failure_envelope() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST)
            .path("/admin/add")
            .json_body(json!({"username": "clerk", "fullName": "Clerk"}));
        then.status(200)
            .json_body(json!({"success": false, "error": "Already an admin"}));
    });

    let client = authed_client(&server);
    let err = client
        .add_bot_admin(&AddBotAdminRequest {
            username: "clerk".to_string(),
            full_name: "Clerk".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.error, "Already an admin");
    session::clear_token();
}

#[tokio::test]
async fn bot_remove_accepts_success_envelope() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/admin/remove")
            .json_body(json!({"username": "clerk"}));
        then.status(200)
            .json_body(json!({"success": true, "message": "Removed"}));
    });

    let client = authed_client(&server);
    let response = client.remove_bot_admin("clerk").await.unwrap();

    mock.assert();
    assert_eq!(response.message.as_deref(), Some("Removed"));
    session::clear_token();
}
