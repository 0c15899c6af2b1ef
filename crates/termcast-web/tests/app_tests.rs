//! End-to-end tests for the axum application.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use pretty_assertions::assert_eq;
use tower::ServiceExt;

use termcast_web::app::build_app;
use termcast_web::routes::draw;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

#[tokio::test]
async fn known_path_answers_handler_identity() {
    let app = build_app(Arc::new(draw().unwrap()));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/a/42/raw")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["handler"], "asciicasts#raw");
    assert_eq!(json["resource"], "asciicasts");
    assert_eq!(json["action"], "raw");
    assert_eq!(json["params"]["id"], "42");
}

#[tokio::test]
async fn named_route_response_includes_canonical_url() {
    let app = build_app(Arc::new(draw().unwrap()));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/browse/comedy")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["handler"], "asciicasts#index");
    assert_eq!(json["url"], "/browse/comedy");
}

#[tokio::test]
async fn defaults_show_up_in_params() {
    let app = build_app(Arc::new(draw().unwrap()));

    let response = app
        .oneshot(Request::builder().uri("/docs").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let json = body_json(response).await;
    assert_eq!(json["handler"], "docs#show");
    assert_eq!(json["params"]["page"], "getting-started");
}

#[tokio::test]
async fn unknown_path_is_404() {
    let app = build_app(Arc::new(draw().unwrap()));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/nonexistent")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "not_found");
    assert_eq!(json["path"], "/nonexistent");
}

#[tokio::test]
async fn method_is_respected() {
    let app = build_app(Arc::new(draw().unwrap()));

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/a")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["handler"], "asciicasts#create");
}

#[tokio::test]
async fn query_string_does_not_affect_matching() {
    let app = build_app(Arc::new(draw().unwrap()));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/browse/comedy?order=popularity")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["params"]["category"], "comedy");
}
