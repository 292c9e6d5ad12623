use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use seedscan_server::config::ServiceConfig;
use seedscan_server::http::router;
use seedscan_server::state::AppState;

fn test_state() -> AppState {
    let config = ServiceConfig {
        bind: "127.0.0.1".into(),
        port: 0,
        max_concurrent_searches: 4,
        log_filter: "error".into(),
    };
    AppState::new(&config)
}

#[tokio::test]
async fn rejects_malformed_search_body_with_400() {
    let app = router(test_state());

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/search")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"structures": []}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn lists_structures() {
    let app = router(test_state());

    let response = app
        .oneshot(Request::builder().uri("/structures").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.contains("village"));
    assert!(text.contains("bastion"));
}

#[tokio::test]
async fn lists_biomes() {
    let app = router(test_state());

    let response = app
        .oneshot(Request::builder().uri("/biomes").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.contains("plains"));
}
