//! Controller client integration tests
//!
//! Exercises login and guest authorization against a stub controller.

use unifi_guest::{Error, UnifiClient};

mod common;
use common::{MockController, MockData, TestUtils, client_for};

#[tokio::test]
async fn test_construction_performs_no_io() {
    let server = MockController::start().await;

    let client = client_for(&server);
    assert!(!client.is_logged_in());
    assert!(!client.has_session_cookie());

    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_login_success_sets_session() {
    TestUtils::init_logger();
    let server = MockController::start().await;
    MockController::login_ok(&server, 1).await;

    let mut client = client_for(&server);
    client.login().await.unwrap();

    assert!(client.is_logged_in());
    assert!(client.has_session_cookie());
}

#[tokio::test]
async fn test_repeated_login_short_circuits() {
    let server = MockController::start().await;
    MockController::login_ok(&server, 1).await;

    let mut client = client_for(&server);
    client.login().await.unwrap();
    client.login().await.unwrap();
    client.login().await.unwrap();

    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_login_bad_credentials() {
    let server = MockController::start().await;
    MockController::login_status(&server, 400).await;

    let mut client = client_for(&server);
    let err = client.login().await.unwrap_err();

    assert!(matches!(err, Error::BadCredentials));
    assert!(!client.is_logged_in());
}

#[tokio::test]
async fn test_login_server_error_is_unknown_failure() {
    let server = MockController::start().await;
    MockController::login_status(&server, 500).await;

    let mut client = client_for(&server);
    let err = client.login().await.unwrap_err();

    assert!(matches!(err, Error::UnknownLoginFailure { status: 500 }));
    assert!(!client.is_logged_in());
}

#[tokio::test]
async fn test_failed_login_is_retried_on_next_call() {
    let server = MockController::start().await;
    MockController::login_status(&server, 400).await;

    let mut client = client_for(&server);
    assert!(client.login().await.is_err());

    server.reset().await;
    MockController::login_ok(&server, 1).await;
    client.login().await.unwrap();
    assert!(client.is_logged_in());
}

#[tokio::test]
async fn test_authorize_before_login_is_not_logged_in() {
    let server = MockController::start().await;
    MockController::authorize_ok(&server, 0).await;

    let client = client_for(&server);
    let err = client
        .authorize_guest(&MockData::guest())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::NotLoggedIn));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_authorize_server_error_is_unknown_failure() {
    let server = MockController::start().await;
    MockController::login_ok(&server, 1).await;
    MockController::authorize_status(&server, 500).await;

    let mut client = client_for(&server);
    client.login().await.unwrap();
    let err = client
        .authorize_guest(&MockData::guest())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::UnknownAuthFailure { status: 500 }));
}

#[tokio::test]
async fn test_expired_session_surfaces_as_auth_failure() {
    let server = MockController::start().await;
    MockController::login_ok(&server, 1).await;
    MockController::authorize_status(&server, 401).await;

    let mut client = client_for(&server);
    client.login().await.unwrap();
    let err = client
        .authorize_guest(&MockData::guest())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::UnknownAuthFailure { status: 401 }));
    // The flag is not re-validated, so the client still believes it is logged in
    assert!(client.is_logged_in());
}

#[tokio::test]
async fn test_transport_error_is_distinct() {
    // Nothing listens on port 1
    let mut client = UnifiClient::new("alice", "pw", "http://127.0.0.1:1", "default", "5.12", false);

    let err = client.login().await.unwrap_err();
    assert!(matches!(err, Error::Http(_)));
    assert!(!err.is_controller_rejection());
}

#[tokio::test]
async fn test_end_to_end_authorize_guest() {
    TestUtils::init_logger();
    let server = MockController::start().await;
    MockController::login_ok(&server, 1).await;
    MockController::authorize_ok(&server, 1).await;

    let mut client = UnifiClient::new(
        common::USERNAME,
        common::PASSWORD,
        server.uri(),
        common::SITE,
        "5.12",
        true,
    );
    client.login().await.unwrap();
    client.authorize_guest(&MockData::guest()).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].url.path(), "/api/login");
    assert_eq!(requests[1].url.path(), "/api/s/default/cmd/stamgr");
}

#[tokio::test]
async fn test_authorize_multiple_guests_single_login() {
    let server = MockController::start().await;
    MockController::login_ok(&server, 1).await;
    MockController::authorize_ok(&server, 2).await;

    let mut client = client_for(&server);
    let guest = MockData::guest();

    client.login().await.unwrap();
    client.authorize_guest(&guest).await.unwrap();
    client.login().await.unwrap();
    client.authorize_guest(&guest).await.unwrap();
}
