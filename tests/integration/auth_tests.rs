use crate::common::*;
use mockito::Matcher;
use sedotmp_client::prelude::*;

#[tokio::test]
async fn get_access_token_authenticates_once() {
    let mut server = mock_server().await;
    let auth = mock_auth(&mut server, TOKEN).await;
    let client = test_client(&server);

    assert_eq!(client.get_access_token().await.unwrap(), TOKEN);
    assert_eq!(client.get_access_token().await.unwrap(), TOKEN);
    assert!(client.has_access_token().await);

    auth.assert_async().await;
}

#[tokio::test]
async fn concurrent_callers_share_one_exchange() {
    let mut server = mock_server().await;
    let auth = mock_auth(&mut server, TOKEN).await;
    let client = test_client(&server);

    let (a, b, c) = tokio::join!(
        client.get_access_token(),
        client.get_access_token(),
        client.get_access_token()
    );
    assert_eq!(a.unwrap(), TOKEN);
    assert_eq!(b.unwrap(), TOKEN);
    assert_eq!(c.unwrap(), TOKEN);

    auth.assert_async().await;
}

#[tokio::test]
async fn set_access_token_makes_no_network_call() {
    let mut server = mock_server().await;
    let auth = server
        .mock("POST", TOKEN_PATH)
        .expect(0)
        .create_async()
        .await;
    let client = test_client(&server);

    client.set_access_token("X").await;
    assert_eq!(client.get_access_token().await.unwrap(), "X");

    auth.assert_async().await;
}

#[tokio::test]
async fn empty_injected_token_triggers_authentication() {
    let mut server = mock_server().await;
    let auth = mock_auth(&mut server, TOKEN).await;
    let client = test_client(&server);

    client.set_access_token("").await;
    assert!(!client.has_access_token().await);
    assert_eq!(client.cached_access_token().await, None);

    assert_eq!(client.get_access_token().await.unwrap(), TOKEN);
    auth.assert_async().await;
}

#[tokio::test]
async fn empty_injected_token_replaces_a_cached_one() {
    let mut server = mock_server().await;
    let auth = mock_auth(&mut server, TOKEN).await;
    let client = test_client(&server);

    client.set_access_token("old-token").await;
    client.set_access_token("").await;

    assert!(!client.has_access_token().await);
    assert_eq!(client.get_access_token().await.unwrap(), TOKEN);
    auth.assert_async().await;
}

#[tokio::test]
async fn rejected_exchange_leaves_token_unset() {
    let mut server = mock_server().await;
    let auth = server
        .mock("POST", TOKEN_PATH)
        .with_status(401)
        .with_body(r#"{"error":"unauthorized"}"#)
        .expect(1)
        .create_async()
        .await;
    let client = test_client(&server);

    match client.get_access_token().await {
        Err(AppError::Authentication { message, .. }) => assert!(message.contains("401")),
        other => panic!("Expected Authentication error, got {other:?}"),
    }
    assert!(!client.has_access_token().await);

    auth.assert_async().await;
}

#[tokio::test]
async fn response_without_access_token_is_an_authentication_error() {
    let mut server = mock_server().await;
    let auth = server
        .mock("POST", TOKEN_PATH)
        .with_status(200)
        .with_body(r#"{"token_type":"Bearer"}"#)
        .expect(1)
        .create_async()
        .await;
    let client = test_client(&server);

    assert!(matches!(
        client.get_access_token().await,
        Err(AppError::Authentication { .. })
    ));
    assert_eq!(client.cached_access_token().await, None);

    auth.assert_async().await;
}

#[tokio::test]
async fn non_200_success_status_is_rejected() {
    let mut server = mock_server().await;
    let _auth = server
        .mock("POST", TOKEN_PATH)
        .with_status(201)
        .with_body(format!(r#"{{"access_token":"{TOKEN}"}}"#))
        .create_async()
        .await;
    let client = test_client(&server);

    assert!(matches!(
        client.get_access_token().await,
        Err(AppError::Authentication { .. })
    ));
}

#[tokio::test]
async fn failed_exchange_is_retried_on_next_call() {
    let mut server = mock_server().await;
    let failing = server
        .mock("POST", TOKEN_PATH)
        .with_status(500)
        .expect(1)
        .create_async()
        .await;
    let client = test_client(&server);

    assert!(client.get_access_token().await.is_err());
    failing.assert_async().await;
    failing.remove_async().await;

    let auth = mock_auth(&mut server, TOKEN).await;
    assert_eq!(client.get_access_token().await.unwrap(), TOKEN);
    auth.assert_async().await;
}

#[tokio::test]
async fn clear_access_token_forces_new_exchange() {
    let mut server = mock_server().await;
    let auth = server
        .mock("POST", TOKEN_PATH)
        .with_status(200)
        .with_body(format!(r#"{{"access_token":"{TOKEN}"}}"#))
        .expect(2)
        .create_async()
        .await;
    let client = test_client(&server);

    client.get_access_token().await.unwrap();
    client.clear_access_token().await;
    assert!(!client.has_access_token().await);
    client.get_access_token().await.unwrap();

    auth.assert_async().await;
}

#[tokio::test]
async fn authenticate_always_exchanges_and_overwrites() {
    let mut server = mock_server().await;
    let auth = server
        .mock("POST", TOKEN_PATH)
        .match_body(Matcher::PartialJson(json!({"grant_type": "client_credentials"})))
        .with_status(200)
        .with_body(r#"{"access_token":"fresh-token"}"#)
        .expect(1)
        .create_async()
        .await;
    let client = test_client(&server);

    client.set_access_token("stale-token").await;
    assert_eq!(client.authenticate().await.unwrap(), "fresh-token");
    assert_eq!(client.get_access_token().await.unwrap(), "fresh-token");

    auth.assert_async().await;
}

#[tokio::test]
async fn unreachable_identity_provider_is_an_authentication_error() {
    let config = Config::with_credentials(CLIENT_ID, CLIENT_SECRET)
        .with_auth_url("http://127.0.0.1:9/oauth/token");
    let client = SedoTmp::new(config).unwrap();

    match client.get_access_token().await {
        Err(AppError::Authentication { source, .. }) => assert!(source.is_some()),
        other => panic!("Expected Authentication error, got {other:?}"),
    }
}
