//! Route registration — collects module routes + system endpoints.

use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

/// Build the complete router with all routes.
pub fn build_router(module_routes: Vec<Router>, schema_json: serde_json::Value) -> Router {
    let schema_handler = get(move || {
        let schema = schema_json.clone();
        async move { Json(schema) }
    });

    let mut app = Router::new()
        .route("/health", get(health))
        .route("/version", get(version))
        .route("/meta/schema", schema_handler);

    // Module routes are already Router<()> (they called .with_state() internally).
    for router in module_routes {
        app = app.merge(router);
    }

    app
}

/// Aggregate per-module schema definitions for the documentation renderer.
/// `servers` lists the public base URLs (dev, prod) this API is reachable at.
pub fn build_schema(modules: Vec<serde_json::Value>, servers: &[String]) -> serde_json::Value {
    serde_json::json!({
        "name": "catalogd",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Este API expone endpoints para administrar productos",
        "license": "MIT",
        "servers": servers,
        "modules": modules,
    })
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
    }))
}

async fn version() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": "catalogd",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_aggregates_modules_and_servers() {
        let schema = build_schema(
            vec![serde_json::json!({"id": "products"})],
            &["http://localhost:8080".to_string()],
        );
        assert_eq!(schema["name"], "catalogd");
        assert_eq!(schema["modules"][0]["id"], "products");
        assert_eq!(schema["servers"][0], "http://localhost:8080");
    }

    #[tokio::test]
    async fn system_endpoints_respond() {
        let schema = build_schema(vec![products::schema_def()], &[]);
        let app = build_router(Vec::new(), schema);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let client = reqwest::Client::new();

        let health: serde_json::Value = client
            .get(format!("http://{}/health", addr))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(health["status"], "ok");

        let schema: serde_json::Value = client
            .get(format!("http://{}/meta/schema", addr))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(schema["modules"][0]["id"], "products");
        assert_eq!(schema["modules"][0]["routes"][0]["tag"], "reading");
    }
}
