//! Login and logout against a mocked auth service.

use serde_json::json;
use storefront_auth::{AuthClient, AuthConfig};
use storefront_core::flags::feature;
use storefront_core::{AuthState, ValidationStatus};
use storefront_lib::{ApiError, ErrorCode, Store, StoreEvent};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const EMAIL: &str = "test@example.com";
const PASSWORD: &str = "securepassword123";

fn store_for(server: &MockServer) -> Store {
    let client = AuthClient::new(AuthConfig::new(server.uri())).unwrap();
    Store::with_client(client, "en")
}

async fn mount_accepting(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_json(json!({"email": EMAIL, "password": PASSWORD})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user_id": "4f1c2e",
            "email": EMAIL,
            "access_token": "eyJhbGciOi.payload.sig"
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn accepted_login_authenticates() {
    let server = MockServer::start().await;
    mount_accepting(&server).await;
    let store = store_for(&server);

    let session = store.login(EMAIL, PASSWORD).await.unwrap();

    assert_eq!(session.user.email, EMAIL);
    let auth = store.auth();
    assert!(auth.is_authenticated());
    assert_eq!(auth.user().unwrap().email, EMAIL);
    assert_eq!(auth.token(), Some("eyJhbGciOi.payload.sig"));
    assert!(auth.logged_in_at().is_some());

    let flag = store.validation_test(feature::API_INTEGRATION).unwrap();
    assert_eq!(flag.status, ValidationStatus::Success);
    assert_eq!(flag.message, "Login successful! API integration working.");
}

#[tokio::test]
async fn rejected_login_keeps_state() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "Invalid credentials"})))
        .expect(1)
        .mount(&server)
        .await;
    let store = store_for(&server);

    let err = store.login(EMAIL, "wrong").await.unwrap_err();

    assert_eq!(err.message(), "Invalid credentials");
    assert_eq!(store.auth(), AuthState::logged_out());

    let flag = store.validation_test(feature::API_INTEGRATION).unwrap();
    assert_eq!(flag.status, ValidationStatus::Failed);
    assert_eq!(flag.message, "Login failed: Invalid credentials");

    let api = ApiError::from(err);
    assert_eq!(api.code, ErrorCode::InvalidCredentials);
    assert_eq!(api.message, "Invalid credentials");
}

#[tokio::test]
async fn rejected_relogin_keeps_existing_session() {
    let server = MockServer::start().await;
    mount_accepting(&server).await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "Invalid credentials"})))
        .mount(&server)
        .await;
    let store = store_for(&server);

    store.login(EMAIL, PASSWORD).await.unwrap();
    let before = store.auth();

    assert!(store.login(EMAIL, "wrong").await.is_err());
    assert_eq!(store.auth(), before);
}

#[tokio::test]
async fn successful_relogin_replaces_session() {
    let server = MockServer::start().await;
    for (email, password, user_id, token) in [
        ("a@example.com", "pw-a", "u-a", "token-a"),
        ("b@example.com", "pw-b", "u-b", "token-b"),
    ] {
        Mock::given(method("POST"))
            .and(path("/login"))
            .and(body_json(json!({"email": email, "password": password})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "user_id": user_id,
                "email": email,
                "access_token": token
            })))
            .expect(1)
            .mount(&server)
            .await;
    }
    let store = store_for(&server);

    store.login("a@example.com", "pw-a").await.unwrap();
    assert_eq!(store.auth().token(), Some("token-a"));

    store.login("b@example.com", "pw-b").await.unwrap();

    let auth = store.auth();
    assert!(auth.is_authenticated());
    let user = auth.user().unwrap();
    assert_eq!(user.email, "b@example.com");
    assert_eq!(user.id, "u-b");
    assert_eq!(auth.token(), Some("token-b"));
}

#[tokio::test]
async fn unreachable_service_is_network_error() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let client = AuthClient::new(AuthConfig::new(uri)).unwrap();
    let store = Store::with_client(client, "en");

    let err = store.login(EMAIL, PASSWORD).await.unwrap_err();

    assert!(err.is_transport());
    assert!(!store.is_authenticated());
    let flag = store.validation_test(feature::API_INTEGRATION).unwrap();
    assert_eq!(flag.status, ValidationStatus::Failed);
    assert!(flag.message.starts_with("Network error: "));
    assert_eq!(ApiError::from(err).code, ErrorCode::NetworkError);
}

#[tokio::test]
async fn logout_restores_initial_auth() {
    let server = MockServer::start().await;
    mount_accepting(&server).await;
    let store = store_for(&server);

    store.login(EMAIL, PASSWORD).await.unwrap();
    store.logout();

    assert_eq!(store.auth(), AuthState::logged_out());
    let flag = store.validation_test(feature::API_INTEGRATION).unwrap();
    assert_eq!(flag.status, ValidationStatus::Testing);
    assert_eq!(flag.message, "Ready for API testing...");
}

#[tokio::test]
async fn login_publishes_flag_and_auth_events() {
    let server = MockServer::start().await;
    mount_accepting(&server).await;
    let store = store_for(&server);
    let mut rx = store.subscribe();

    store.login(EMAIL, PASSWORD).await.unwrap();

    let api_flag = StoreEvent::Validation {
        name: feature::API_INTEGRATION.to_string(),
    };
    assert_eq!(rx.try_recv().unwrap(), api_flag);
    assert_eq!(rx.try_recv().unwrap(), StoreEvent::Auth);
    assert_eq!(rx.try_recv().unwrap(), api_flag);
    assert!(rx.try_recv().is_err());
}
