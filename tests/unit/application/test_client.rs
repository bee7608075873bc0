use sedotmp_client::config::Config;
use sedotmp_client::model::http::ApiSegment;
use sedotmp_client::model::requests::{Pagination, QueryParams, ReportQuery};
use sedotmp_client::prelude::SedoTmp;
use tokio_test::block_on;

fn client() -> SedoTmp {
    // Unroutable auth URL: any accidental token exchange fails instead of hitting the network
    let config = Config::with_credentials("test-client-id", "test-client-secret")
        .with_auth_url("http://127.0.0.1:9/oauth/token");
    SedoTmp::new(config).expect("client should build")
}

#[test]
fn exposes_configuration() {
    let client = client();
    assert_eq!(client.get_client_id(), "test-client-id");
    assert_eq!(client.get_client_secret(), "test-client-secret");
    assert_eq!(client.get_base_url(), "https://api.sedotmp.com");
    assert_eq!(client.get_auth_url(), "http://127.0.0.1:9/oauth/token");
    assert_eq!(client.get_api_version(), "v1");
}

#[tokio::test]
async fn fresh_client_has_no_token() {
    let client = client();
    assert!(!client.has_access_token().await);
    assert_eq!(client.cached_access_token().await, None);
}

#[tokio::test]
async fn set_access_token_skips_authentication() {
    let client = client();
    client.set_access_token("custom-token-789").await;

    assert!(client.has_access_token().await);
    assert_eq!(client.get_access_token().await.unwrap(), "custom-token-789");
}

#[tokio::test]
async fn set_access_token_overrides_and_clear_drops() {
    let client = client();
    client
        .set_access_token("first")
        .await
        .set_access_token("second")
        .await;
    assert_eq!(client.get_access_token().await.unwrap(), "second");

    client.clear_access_token().await;
    assert!(!client.has_access_token().await);
}

#[test]
fn clones_share_the_token_cache() {
    let client = client();
    let other = client.clone();
    block_on(client.set_access_token("shared"));
    assert_eq!(
        block_on(other.cached_access_token()).as_deref(),
        Some("shared")
    );
}

#[test]
fn endpoint_url_layout() {
    let client = client();
    let http = client.http_client();

    assert_eq!(
        http.endpoint_url(ApiSegment::Content, "categories", &QueryParams::new()),
        "https://api.sedotmp.com/content/v1/categories"
    );

    let params = ReportQuery::new()
        .with_dimensions(["DATE"])
        .with_pagination(Pagination::offset(0, 100))
        .to_query_params()
        .unwrap();
    assert_eq!(
        http.endpoint_url(ApiSegment::Platform, "campaign-report", &params),
        "https://api.sedotmp.com/platform/v1/campaign-report?dimensions=DATE&offset=0&limit=100"
    );
}

#[test]
fn endpoint_url_uses_configured_version() {
    let config = Config::with_credentials("id", "secret")
        .with_api_version("v2")
        .with_base_url("https://custom.api.com");
    let client = SedoTmp::new(config).unwrap();

    assert_eq!(
        client
            .http_client()
            .endpoint_url(ApiSegment::Platform, "content-campaigns/abc", &QueryParams::new()),
        "https://custom.api.com/platform/v2/content-campaigns/abc"
    );
}

#[test]
fn services_are_available() {
    let client = client();
    let _content = client.content();
    let _platform = client.platform();
}
