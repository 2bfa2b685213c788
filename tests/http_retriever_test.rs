use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use encore::config::RetrievalConfig;
use encore::error::RetrievalError;
use encore::retrieval::http::HttpRetriever;
use encore::retrieval::{DocumentRetriever, Passage};
use serde_json::{json, Value};

/// Serve `router` on an ephemeral port and return its base URL.
async fn spawn_stub(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn config(endpoint: String) -> RetrievalConfig {
    RetrievalConfig {
        provider: "http".into(),
        endpoint,
        top_k: 2,
        ..RetrievalConfig::default()
    }
}

#[tokio::test]
async fn reads_bare_array_and_sends_query() {
    let router = Router::new().route(
        "/search",
        post(|Json(body): Json<Value>| async move {
            Json(json!([
                {"content": format!("echo: {}", body["query"].as_str().unwrap_or_default())},
                {"content": format!("top_k: {}", body["top_k"])},
            ]))
        }),
    );
    let base = spawn_stub(router).await;
    let retriever = HttpRetriever::new(&config(format!("{base}/search"))).unwrap();

    let passages = retriever.search("sunny day").await.unwrap();
    assert_eq!(
        passages,
        vec![Passage::new("echo: sunny day"), Passage::new("top_k: 2")]
    );
}

#[tokio::test]
async fn reads_wrapped_documents() {
    let router = Router::new().route(
        "/search",
        post(|| async { Json(json!({"documents": [{"content": "Song A"}]})) }),
    );
    let base = spawn_stub(router).await;
    let retriever = HttpRetriever::new(&config(format!("{base}/search"))).unwrap();

    let passages = retriever.search("anything").await.unwrap();
    assert_eq!(passages, vec![Passage::new("Song A")]);
}

#[tokio::test]
async fn non_success_status_is_reported() {
    let router = Router::new().route(
        "/search",
        post(|| async { (StatusCode::SERVICE_UNAVAILABLE, "index warming up") }),
    );
    let base = spawn_stub(router).await;
    let retriever = HttpRetriever::new(&config(format!("{base}/search"))).unwrap();

    let err = retriever.search("anything").await.unwrap_err();
    match err {
        RetrievalError::Status { status, body } => {
            assert_eq!(status, 503);
            assert_eq!(body, "index warming up");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let router = Router::new().route("/search", post(|| async { "not json" }));
    let base = spawn_stub(router).await;
    let retriever = HttpRetriever::new(&config(format!("{base}/search"))).unwrap();

    let err = retriever.search("anything").await.unwrap_err();
    assert!(matches!(err, RetrievalError::Decode(_)));
}

#[test]
fn empty_endpoint_is_rejected() {
    assert!(HttpRetriever::new(&config(String::new())).is_err());
}
