//! End-to-end tests against a live redirect server.

use std::io::Write;

use reqwest::header::LOCATION;
use reqwest::StatusCode;
use urlshort::config::{parse_config, UrlshortConfig};
use urlshort::document::parse;
use urlshort::lifecycle::build_server;
use urlshort::routing::KeyPolicy;

mod common;

const GODOC_YAML: &str = "\
- path: /urlshort-godoc
  url: https://godoc.org/github.com/gophercises/urlshort
- path: /yaml-godoc
  url: https://godoc.org/gopkg.in/yaml.v2
";

#[tokio::test]
async fn test_mapped_path_redirects() {
    let mapping = parse(GODOC_YAML.as_bytes()).unwrap();
    let (addr, shutdown) = common::start_server(UrlshortConfig::default(), mapping).await;

    let res = common::client()
        .get(format!("http://{}/urlshort-godoc", addr))
        .send()
        .await
        .expect("Server unreachable");

    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(
        res.headers()[LOCATION],
        "https://godoc.org/github.com/gophercises/urlshort"
    );
    assert!(res.headers().contains_key("x-request-id"));

    shutdown.trigger();
}

#[tokio::test]
async fn test_unmapped_path_falls_back() {
    let mapping = parse(GODOC_YAML.as_bytes()).unwrap();
    let (addr, shutdown) = common::start_server(UrlshortConfig::default(), mapping).await;

    let res = common::client()
        .get(format!("http://{}/unknown", addr))
        .send()
        .await
        .expect("Server unreachable");

    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers().get(LOCATION).is_none());
    assert_eq!(res.text().await.unwrap(), "Hello, world!");

    shutdown.trigger();
}

#[tokio::test]
async fn test_query_string_distinguishes_keys() {
    let mapping = parse(GODOC_YAML.as_bytes()).unwrap();
    let (addr, shutdown) = common::start_server(UrlshortConfig::default(), mapping.clone()).await;

    let res = common::client()
        .get(format!("http://{}/yaml-godoc?lang=en", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    shutdown.trigger();

    let mut config = UrlshortConfig::default();
    config.redirects.key_policy = KeyPolicy::Path;
    let (addr, shutdown) = common::start_server(config, mapping).await;

    let res = common::client()
        .get(format!("http://{}/yaml-godoc?lang=en", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(res.headers()[LOCATION], "https://godoc.org/gopkg.in/yaml.v2");

    shutdown.trigger();
}

#[tokio::test]
async fn test_server_built_from_config_file() {
    let mut document = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(
        document,
        r#"[{{"path": "/docs", "url": "https://docs.example/from-json"}}]"#
    )
    .unwrap();

    let raw = format!(
        r#"
        [redirects]
        document = "{}"

        [[redirects.entries]]
        path = "/docs"
        url = "https://docs.example/inline"

        [[redirects.entries]]
        path = "/home"
        url = "https://home.example"

        [fallback]
        status = 404
        body = "no such link"
        "#,
        document.path().display()
    );
    let config = parse_config(&raw).unwrap();
    let server = build_server(config).unwrap();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let shutdown = urlshort::Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });
    tokio::time::sleep(std::time::Duration::from_millis(100)).await;

    let client = common::client();

    let res = client.get(format!("http://{}/docs", addr)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(res.headers()[LOCATION], "https://docs.example/from-json");

    let res = client.get(format!("http://{}/home", addr)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(res.headers()[LOCATION], "https://home.example");

    let res = client.get(format!("http://{}/other", addr)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.text().await.unwrap(), "no such link");

    shutdown.trigger();
}
