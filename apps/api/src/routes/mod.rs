pub mod health;
pub mod index;

use axum::{
    routing::{get, post},
    Router,
};

use crate::evaluation::handlers;
use crate::questions;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index::index_handler))
        .route("/health", get(health::health_handler))
        .route("/questions/:role", get(questions::handle_get_questions))
        .route("/analyze", post(handlers::handle_analyze))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::evaluation::sampler::FixedSampler;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_router() -> Router {
        build_router(AppState {
            config: Config {
                port: 0,
                rust_log: "info".to_string(),
            },
            sampler: Arc::new(FixedSampler(0)),
        })
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should be readable");
        serde_json::from_slice(&bytes).expect("body should be JSON")
    }

    fn analyze_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/analyze")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request should build")
    }

    #[tokio::test]
    async fn test_analyze_returns_all_four_fields() {
        let response = test_router()
            .oneshot(analyze_request(
                r#"{"role":"Software Engineer","type":"Technical","answers":["a","b"]}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        for field in ["pitch", "confidence", "nervousness", "summary"] {
            assert!(json[field].is_string(), "{field} must be a string");
        }
    }

    #[tokio::test]
    async fn test_analyze_empty_body_uses_defaults() {
        let response = test_router().oneshot(analyze_request("{}")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(
            json["summary"],
            "You did well in your  interview (). \
             Focus on clarity and consistent tone. Overall performance is promising!"
        );
    }

    #[tokio::test]
    async fn test_analyze_exact_summary() {
        let response = test_router()
            .oneshot(analyze_request(
                r#"{"role":"Backend Engineer","type":"Technical"}"#,
            ))
            .await
            .unwrap();

        let json = body_json(response).await;
        assert_eq!(
            json["summary"],
            "You did well in your Backend Engineer interview (Technical). \
             Focus on clarity and consistent tone. Overall performance is promising!"
        );
        // FixedSampler(0) picks the first label of every set
        assert_eq!(json["pitch"], "Steady");
        assert_eq!(json["confidence"], "High");
        assert_eq!(json["nervousness"], "None");
    }

    #[tokio::test]
    async fn test_analyze_rejects_malformed_body() {
        let response = test_router()
            .oneshot(analyze_request("not json"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "MALFORMED_REQUEST");
    }

    #[tokio::test]
    async fn test_analyze_rejects_absent_body() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/analyze")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_ne!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let response = test_router()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn test_index_serves_html() {
        let response = test_router()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_questions_known_role() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/questions/Software%20Engineer")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["role"], "Software Engineer");
        assert!(!json["questions"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_questions_unknown_role_is_404() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/questions/Plumber")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "NOT_FOUND");
    }
}
