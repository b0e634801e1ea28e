//! End-to-end tests: client → edge server → origin.

use std::time::Duration;

use edge_redirect::config::EdgeConfig;
use edge_redirect::lifecycle::Shutdown;

mod common;

fn config_for(origin: std::net::SocketAddr) -> EdgeConfig {
    let mut config = EdgeConfig::default();
    config.origin.address = origin.to_string();
    config
}

#[tokio::test]
async fn test_www_host_redirected_without_reaching_origin() {
    let origin = common::start_echo_origin().await;
    let shutdown = Shutdown::new();
    let (edge, _) = common::start_edge(config_for(origin), &shutdown).await;

    let res = common::client()
        .get(format!("http://{}/path?q=1", edge))
        .header("host", "www.example.com")
        .send()
        .await
        .expect("edge unreachable");

    assert_eq!(res.status(), 301);
    assert_eq!(
        res.headers()["location"].to_str().unwrap(),
        "https://example.com/path?q=1"
    );
    assert!(res.headers().contains_key("x-request-id"));
    assert!(res.text().await.unwrap().is_empty());

    shutdown.trigger();
}

#[tokio::test]
async fn test_bare_host_forwarded_to_origin() {
    let origin = common::start_echo_origin().await;
    let shutdown = Shutdown::new();
    let (edge, _) = common::start_edge(config_for(origin), &shutdown).await;

    let res = common::client()
        .get(format!("http://{}/docs/intro?lang=en", edge))
        .header("host", "example.com")
        .send()
        .await
        .expect("edge unreachable");

    assert_eq!(res.status(), 200);
    assert_eq!(res.text().await.unwrap(), "example.com /docs/intro?lang=en");

    shutdown.trigger();
}

#[tokio::test]
async fn test_double_prefix_takes_two_round_trips() {
    let origin = common::start_echo_origin().await;
    let shutdown = Shutdown::new();
    let (edge, _) = common::start_edge(config_for(origin), &shutdown).await;
    let client = common::client();

    let first = client
        .get(format!("http://{}/a", edge))
        .header("host", "www.www.example.com")
        .send()
        .await
        .unwrap();
    assert_eq!(first.status(), 301);
    assert_eq!(first.headers()["location"], "https://www.example.com/a");

    let second = client
        .get(format!("http://{}/a", edge))
        .header("host", "www.example.com")
        .send()
        .await
        .unwrap();
    assert_eq!(second.status(), 301);
    assert_eq!(second.headers()["location"], "https://example.com/a");

    shutdown.trigger();
}

#[tokio::test]
async fn test_origin_down_is_bad_gateway() {
    // Bind then drop to get a port nobody listens on.
    let dead = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead_addr = dead.local_addr().unwrap();
    drop(dead);

    let shutdown = Shutdown::new();
    let (edge, _) = common::start_edge(config_for(dead_addr), &shutdown).await;

    let res = common::client()
        .get(format!("http://{}/", edge))
        .header("host", "example.com")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 502);

    // Redirects do not depend on the origin at all.
    let res = common::client()
        .get(format!("http://{}/", edge))
        .header("host", "www.example.com")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 301);

    shutdown.trigger();
}

#[tokio::test]
async fn test_server_stops_on_shutdown() {
    let origin = common::start_echo_origin().await;
    let shutdown = Shutdown::new();
    let (_, handle) = common::start_edge(config_for(origin), &shutdown).await;

    shutdown.trigger();

    tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("server did not stop")
        .unwrap();
}
