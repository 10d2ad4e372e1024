mod harness;

use harness::config::ConfigBuilder;
use harness::server::TestServer;

#[tokio::test]
async fn health_endpoint_returns_ok() {
    let server = TestServer::start(ConfigBuilder::new().build()).await.unwrap();

    let resp = server.client().get(server.url("/health")).send().await.unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "ok");
}

#[tokio::test]
async fn health_endpoint_moved() {
    let config = ConfigBuilder::new().with_health_path("/_status").build();
    let server = TestServer::start(config).await.unwrap();

    let resp = server.client().get(server.url("/_status")).send().await.unwrap();
    assert_eq!(resp.status(), 200);

    let (status, body) = server.get_json("/health").await;
    assert_eq!(status, 404);
    assert_eq!(body["error"]["name"], "NotFoundError");
}

#[tokio::test]
async fn health_endpoint_disabled() {
    let config = ConfigBuilder::new().without_health().build();
    let server = TestServer::start(config).await.unwrap();

    let resp = server.client().get(server.url("/health")).send().await.unwrap();

    assert_eq!(resp.status(), 404);
}
