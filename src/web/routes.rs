use axum::http::{header, HeaderValue};
use axum::{routing::get, Router};
use tower_http::{
    limit::RequestBodyLimitLayer, set_header::SetResponseHeaderLayer, trace::TraceLayer,
};

use crate::config::Settings;
use crate::web::handlers::{self, AppState};

/// Create the router with all endpoints
pub fn create_router(state: AppState, settings: &Settings) -> Router {
    let page_routes = Router::new()
        .route("/", get(handlers::project_list).post(handlers::create_project))
        .route("/:project_id/", get(handlers::project_detail))
        .route("/:project_id", get(handlers::project_detail_redirect))
        .with_state(state.clone());

    let health_routes = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .with_state(state);

    Router::new()
        .merge(health_routes)
        .merge(page_routes)
        .layer(RequestBodyLimitLayer::new(
            settings.server.max_request_body_size,
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DatabaseConfig, ManifestConfig, ServerConfig};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    async fn create_test_state() -> AppState {
        let pool = crate::db::init_pool("sqlite::memory:").await.unwrap();
        crate::db::run_migrations(&pool).await.unwrap();

        let settings = Settings {
            database: DatabaseConfig {
                url: "sqlite::memory:".to_string(),
                max_connections: 5,
                min_connections: 1,
                connection_timeout_seconds: 30,
                idle_timeout_seconds: 600,
            },
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8000,
                max_request_body_size: 65536,
            },
            manifest: ManifestConfig::default(),
        };

        AppState { pool, settings }
    }

    #[tokio::test]
    async fn test_health_routes_exist() {
        let state = create_test_state().await;
        let app = create_router(state.clone(), &state.settings);

        for uri in ["/health", "/ready"] {
            let response = app
                .clone()
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }
    }

    #[tokio::test]
    async fn test_security_headers_present() {
        let state = create_test_state().await;
        let app = create_router(state.clone(), &state.settings);

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::X_CONTENT_TYPE_OPTIONS).unwrap(),
            "nosniff"
        );
        assert_eq!(response.headers().get(header::X_FRAME_OPTIONS).unwrap(), "DENY");
    }

    #[tokio::test]
    async fn test_detail_without_trailing_slash_redirects() {
        let state = create_test_state().await;
        let app = create_router(state.clone(), &state.settings);

        let response = app
            .oneshot(Request::builder().uri("/5").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/5/");
    }
}
