//! Router-level tests: every route through the logging middleware.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::Query,
    http::{Method, StatusCode},
    routing::get,
    Json, Router,
};
use axum_test::TestServer;
use serde_json::{json, Value};

use intro_api::http::types::{EchoResponse, MessageResponse, StatusResponse};
use intro_api::http::{build_router, AppState};
use intro_api::{LogEntry, MemoryLog};

/// Fake posts service: `/posts?_limit=N` returns N posts (at most 100),
/// `/broken/posts` returns an object instead of an array and
/// `/untitled/posts` returns posts without a title.
async fn start_upstream() -> SocketAddr {
    async fn list(Query(params): Query<HashMap<String, String>>) -> Json<Vec<Value>> {
        let limit = params.get("_limit").and_then(|l| l.parse::<usize>().ok()).unwrap_or(100);
        let posts = (1..=limit.min(100))
            .map(|id| {
                json!({
                    "userId": 1,
                    "id": id,
                    "title": format!("post {id}"),
                    "body": "lorem ipsum dolor sit amet ".repeat(4)
                })
            })
            .collect();
        Json(posts)
    }

    async fn broken() -> Json<Value> {
        Json(json!({ "error": "not a list" }))
    }

    async fn untitled() -> Json<Vec<Value>> {
        Json(vec![json!({ "userId": 1, "id": 1, "body": "no title here" })])
    }

    let app = Router::new()
        .route("/posts", get(list))
        .route("/broken/posts", get(broken))
        .route("/untitled/posts", get(untitled));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind upstream");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("upstream server");
    });
    addr
}

fn server_with_upstream(upstream: &str) -> (TestServer, Arc<MemoryLog>) {
    let log = Arc::new(MemoryLog::new());
    let state = AppState::builder()
        .with_upstream_url(upstream)
        .with_request_log(log.clone())
        .build()
        .expect("valid configuration");
    let server = TestServer::new(build_router(state)).expect("test server");
    (server, log)
}

fn server() -> (TestServer, Arc<MemoryLog>) {
    // Nothing listens here; only /posts would ever use it.
    server_with_upstream("http://127.0.0.1:9")
}

#[tokio::test]
async fn test_ping() {
    let (server, _) = server();

    let response = server.get("/ping").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({ "status": "ALIVE" }));
    assert_eq!(response.json::<StatusResponse>().status, "ALIVE");
}

#[tokio::test]
async fn test_home() {
    let (server, _) = server();

    let response = server.get("/").await;
    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["message"], "Welcome to FastAPI introduction!");
    assert_eq!(body["endpoints"]["/ping"], "Health check");
}

#[tokio::test]
async fn test_greeting() {
    let (server, _) = server();

    let response = server.get("/greeting/Alice").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({ "message": "Hello Alice" }));
}

/// Percent-encoded names are decoded before greeting.
#[tokio::test]
async fn test_greeting_special_characters() {
    let (server, _) = server();

    let cases = [("Zo%C3%AB", "Zoë"), ("a%20b", "a b"), ("100%25", "100%"), ("%3Cb%3E", "<b>")];
    for (encoded, decoded) in cases {
        let response = server.get(&format!("/greeting/{encoded}")).await;
        response.assert_status_ok();
        assert_eq!(response.json::<MessageResponse>().message, format!("Hello {decoded}"));
    }
}

#[tokio::test]
async fn test_greeting_without_name_is_not_found() {
    let (server, _) = server();

    let response = server.get("/greeting/").await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_methods_get_and_post() {
    let (server, _) = server();

    let response = server.get("/methods").await;
    response.assert_status_ok();
    assert_eq!(response.json::<MessageResponse>().message, "Hello");

    let response = server.post("/methods").await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json::<MessageResponse>().message, "Goodbye");
}

/// The request body has no effect on `/methods`.
#[tokio::test]
async fn test_methods_ignore_body() {
    let (server, _) = server();

    let response = server.post("/methods").json(&json!({ "anything": [1, 2, 3] })).await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let response = server.post("/methods").text("plain text").await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json::<MessageResponse>().message, "Goodbye");
}

#[tokio::test]
async fn test_echo() {
    let (server, _) = server();

    let response = server.post("/echo").json(&json!({ "a": 1 })).await;
    response.assert_status_ok();
    assert_eq!(response.text(), r#"{"received":{"a":1},"message":"Data received!"}"#);
}

#[tokio::test]
async fn test_echo_nested_object_round_trip() {
    let (server, _) = server();

    let sent = json!({
        "name": "Zoë",
        "tags": ["x", "y"],
        "nested": { "deep": { "n": 1.5, "none": null } },
        "ok": false
    });
    let response = server.post("/echo").json(&sent).await;
    response.assert_status_ok();

    let body = response.json::<EchoResponse>();
    assert_eq!(Value::Object(body.received), sent);
    assert_eq!(body.message, "Data received!");
}

#[tokio::test]
async fn test_echo_rejects_malformed_json() {
    let (server, _) = server();

    let response = server
        .post("/echo")
        .content_type("application/json")
        .bytes(Bytes::from_static(b"{\"a\": "))
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.json::<Value>()["detail"].is_string());
}

/// A JSON body with no content type at all is still echoed.
#[tokio::test]
async fn test_echo_without_content_type() {
    let (server, _) = server();

    let response = server.post("/echo").bytes(Bytes::from_static(br#"{"a":1}"#)).await;
    response.assert_status_ok();
    assert_eq!(response.text(), r#"{"received":{"a":1},"message":"Data received!"}"#);
}

#[tokio::test]
async fn test_echo_accepts_json_suffix_content_type() {
    let (server, _) = server();

    let response = server
        .post("/echo")
        .content_type("application/vnd.api+json")
        .bytes(Bytes::from_static(br#"{"b":[true]}"#))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<EchoResponse>().received["b"], json!([true]));
}

#[tokio::test]
async fn test_echo_rejects_text_content_type() {
    let (server, _) = server();

    let response = server.post("/echo").text(r#"{"a":1}"#).await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_echo_rejects_non_object() {
    let (server, _) = server();

    let response = server.post("/echo").json(&json!([1, 2, 3])).await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_posts_with_limit() {
    let upstream = start_upstream().await;
    let (server, _) = server_with_upstream(&format!("http://{upstream}"));

    let response = server.get("/posts").add_query_param("limit", 3).await;
    response.assert_status_ok();

    let posts = response.json::<Vec<Value>>();
    assert!(posts.len() <= 3);
    assert_eq!(posts.len(), 3);
    assert_eq!(posts[0]["title"], "post 1");
}

#[tokio::test]
async fn test_posts_default_limit() {
    let upstream = start_upstream().await;
    let (server, _) = server_with_upstream(&format!("http://{upstream}"));

    let response = server.get("/posts").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Vec<Value>>().len(), 5);
}

/// Posts come back exactly as the upstream sent them.
#[tokio::test]
async fn test_posts_pass_through_unchanged() {
    let upstream = start_upstream().await;
    let (server, _) = server_with_upstream(&format!("http://{upstream}"));

    let direct: Vec<Value> = reqwest::get(format!("http://{upstream}/posts?_limit=2"))
        .await
        .expect("upstream reachable")
        .json()
        .await
        .expect("upstream JSON");

    let response = server.get("/posts").add_query_param("limit", 2).await;
    assert_eq!(response.json::<Vec<Value>>(), direct);
}

#[tokio::test]
async fn test_posts_invalid_limit() {
    let (server, _) = server();

    let response = server.get("/posts").add_query_param("limit", "many").await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_posts_upstream_unreachable() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    let (server, log) = server_with_upstream(&format!("http://{addr}"));

    let response = server.get("/posts").await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.text(), "Internal Server Error");

    // The failure is still logged with its final status.
    let entries = log.entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1].status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
}

#[tokio::test]
async fn test_posts_upstream_returns_non_array() {
    let upstream = start_upstream().await;
    let (server, _) = server_with_upstream(&format!("http://{upstream}/broken"));

    let response = server.get("/posts").await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}

/// A post missing its title surfaces as a generic server error.
#[tokio::test]
async fn test_posts_upstream_post_without_title() {
    let upstream = start_upstream().await;
    let (server, log) = server_with_upstream(&format!("http://{upstream}/untitled"));

    let response = server.get("/posts").await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.text(), "Internal Server Error");
    assert_eq!(log.entries()[1].status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
}

#[tokio::test]
async fn test_docs_pages() {
    let (server, _) = server();

    let response = server.get("/openapi.json").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["openapi"], "3.1.0");

    let response = server.get("/docs").await;
    response.assert_status_ok();
    assert!(response.text().contains("swagger-ui"));

    let response = server.get("/redoc").await;
    response.assert_status_ok();
    assert!(response.text().contains("<redoc"));
}

#[tokio::test]
async fn test_unknown_path() {
    let (server, _) = server();

    let response = server.get("/nope").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>(), json!({ "detail": "Not Found" }));
}

/// One pre and one post entry per request, in order, with the status the
/// caller actually received.
#[tokio::test]
async fn test_logging_middleware_records_every_route() {
    let (server, log) = server();

    let calls = [
        (Method::GET, "/ping"),
        (Method::GET, "/"),
        (Method::GET, "/methods"),
        (Method::POST, "/methods"),
        (Method::GET, "/greeting/Alice"),
        (Method::GET, "/docs"),
        (Method::GET, "/missing"),
        (Method::POST, "/echo"),
    ];

    let mut statuses = Vec::new();
    for (method, path) in &calls {
        let request = server.method(method.clone(), path);
        let response = if *path == "/echo" {
            request.json(&json!({ "k": "v" })).await
        } else {
            request.await
        };
        statuses.push(response.status_code());
    }

    let entries = log.entries();
    assert_eq!(entries.len(), calls.len() * 2);

    for (i, ((method, path), status)) in calls.iter().zip(&statuses).enumerate() {
        match (&entries[2 * i], &entries[2 * i + 1]) {
            (
                LogEntry::Request { method: m1, url: u1 },
                LogEntry::Response { method: m2, url: u2, status: logged },
            ) => {
                assert_eq!(m1, method);
                assert_eq!(m2, method);
                assert!(u1.ends_with(path), "{u1} should end with {path}");
                assert_eq!(u1, u2);
                assert_eq!(logged, status);
            }
            other => panic!("unexpected entry order for {method} {path}: {other:?}"),
        }
    }
}

#[tokio::test]
async fn test_logging_middleware_keeps_query_in_url() {
    let (server, log) = server();

    server.get("/greeting/Bob").add_query_param("x", 1).await.assert_status_ok();

    let entries = log.entries();
    assert_eq!(entries.len(), 2);
    assert!(entries[0].url().ends_with("/greeting/Bob?x=1"));
}

/// The middleware passes the response through untouched.
#[tokio::test]
async fn test_logging_middleware_does_not_alter_response() {
    let (server, log) = server();

    let response = server.post("/methods").await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.text(), r#"{"message":"Goodbye"}"#);
    assert_eq!(log.entries()[1].status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
}
