use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::adapter::PublicDataAdapter;
use crate::api::handlers;
use crate::tools::BrDataTool;

#[derive(Clone)]
pub struct AppState {
    pub adapter: Arc<PublicDataAdapter>,
    pub tool: Arc<BrDataTool>,
}

impl AppState {
    pub fn new(adapter: Arc<PublicDataAdapter>) -> Self {
        Self {
            tool: Arc::new(BrDataTool::new(adapter.clone())),
            adapter,
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/tool", get(handlers::get_tool_definition))
        .route("/invoke", post(handlers::invoke))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn serve(state: AppState, port: u16) -> Result<()> {
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    log::info!("brdata API server listening on port {}", port);

    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::config::Config;

    fn create_test_app() -> Router {
        let adapter = Arc::new(PublicDataAdapter::new(&Config::default()).unwrap());
        create_router(AppState::new(adapter))
    }

    async fn body_text(response: axum::response::Response) -> String {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(body.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["status"], "healthy");
    }

    #[tokio::test]
    async fn test_tool_definition() {
        let app = create_test_app();

        let response = app
            .oneshot(Request::builder().uri("/tool").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["name"], "br_data_agent");
        assert!(json["input_schema"]["properties"]["action"]["enum"].is_array());
    }

    #[tokio::test]
    async fn test_invoke_malformed_body() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/invoke")
                    .body(Body::from("{\"action\": "))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_text(response).await,
            "Erro de formato JSON na entrada do agente."
        );
    }

    #[tokio::test]
    async fn test_invoke_unknown_action() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/invoke")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"action": "get_moon_phase"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(body_text(response).await.starts_with("Ação não reconhecida."));
    }
}
