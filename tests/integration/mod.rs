//! Integration tests for the HTTP service.
//!
//! Each test binds a real listener on an ephemeral loopback port and talks to
//! it over TCP with reqwest.

use std::net::SocketAddr;

use gke_api::api::{serve_with_shutdown, AppState};
use gke_api::config::Config;
use pretty_assertions::assert_eq;
use reqwest::StatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::{JoinHandle, JoinSet};

/// A running server and the handle to stop it.
struct TestServer {
    addr: SocketAddr,
    shutdown: oneshot::Sender<()>,
    handle: JoinHandle<gke_api::Result<()>>,
}

impl TestServer {
    async fn start(config: Config) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (shutdown, rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(serve_with_shutdown(listener, AppState::new(config), async {
            let _ = rx.await;
        }));

        Self {
            addr,
            shutdown,
            handle,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    async fn stop(self) {
        self.shutdown.send(()).unwrap();
        self.handle.await.unwrap().unwrap();
    }
}

async fn get_json(client: &reqwest::Client, url: &str) -> (StatusCode, Value) {
    let response = client.get(url).send().await.unwrap();
    let status = response.status();
    (status, response.json().await.unwrap())
}

#[tokio::test]
async fn serves_all_endpoints_over_tcp() {
    let server = TestServer::start(Config::from_vars([("ENV", "staging")]).unwrap()).await;
    let client = reqwest::Client::new();

    let (status, body) = get_json(&client, &server.url("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));

    let (status, body) = get_json(&client, &server.url("/info")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"app": "gke-flask-api", "version": "1.0", "environment": "staging"})
    );

    let (status, body) = get_json(&client, &server.url("/echo/hello")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"you_said": "hello"}));

    server.stop().await;
}

#[tokio::test]
async fn responses_are_json() {
    let server = TestServer::start(Config::default()).await;

    let response = reqwest::get(server.url("/health")).await.unwrap();
    assert_eq!(
        response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok()),
        Some("application/json")
    );

    server.stop().await;
}

#[tokio::test]
async fn unknown_path_returns_404() {
    let server = TestServer::start(Config::default()).await;

    let response = reqwest::get(server.url("/unknown-path")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    server.stop().await;
}

#[tokio::test]
async fn echo_decodes_unicode_once() {
    let server = TestServer::start(Config::default()).await;
    let client = reqwest::Client::new();

    let (status, body) = get_json(&client, &server.url("/echo/%E4%BD%A0%E5%A5%BD%2520")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"you_said": "你好%20"}));

    server.stop().await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_requests_do_not_interfere() {
    let server = TestServer::start(Config::from_vars([("ENV", "production")]).unwrap()).await;
    let client = reqwest::Client::new();

    let mut tasks = JoinSet::new();
    for i in 0..64 {
        let client = client.clone();
        let (path, expected) = match i % 3 {
            0 => ("/health".to_string(), json!({"status": "ok"})),
            1 => (
                "/info".to_string(),
                json!({"app": "gke-flask-api", "version": "1.0", "environment": "production"}),
            ),
            _ => (format!("/echo/msg-{i}"), json!({"you_said": format!("msg-{i}")})),
        };
        let url = server.url(&path);

        tasks.spawn(async move {
            let (status, body) = get_json(&client, &url).await;
            (path, status, body, expected)
        });
    }

    while let Some(result) = tasks.join_next().await {
        let (path, status, body, expected) = result.unwrap();
        assert_eq!(status, StatusCode::OK, "{path}");
        assert_eq!(body, expected, "{path}");
    }

    server.stop().await;
}
