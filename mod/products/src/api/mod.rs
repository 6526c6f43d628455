pub mod products;

use std::sync::Arc;

use axum::Router;

use crate::service::ProductService;

/// Shared application state.
pub type AppState = Arc<ProductService>;

/// Build the products API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", products::routes())
        .with_state(state)
}
