use axum::{
    Json, Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};

use catalog_core::ServiceError;

use super::AppState;
use crate::model::Product;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
}

async fn list_products(State(svc): State<AppState>) -> Result<Json<Vec<Product>>, ServiceError> {
    svc.find_all_products().map(Json)
}

async fn get_product(
    State(svc): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Product>, ServiceError> {
    svc.find_product_by_id(id).map(Json)
}

async fn create_product(
    State(svc): State<AppState>,
    Json(body): Json<Product>,
) -> Result<Response, ServiceError> {
    let saved = svc.save_product(&body)?;
    let id = saved
        .id
        .ok_or_else(|| ServiceError::Internal("saved product has no id".into()))?;
    let location = format!("/api/v1/products/{}", id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(saved)).into_response())
}

async fn update_product(
    State(svc): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<Product>,
) -> Result<Json<Product>, ServiceError> {
    svc.update_product(id, &body).map(Json)
}

async fn delete_product(
    State(svc): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ServiceError> {
    svc.delete_product_by_id(id)?;
    Ok(StatusCode::NO_CONTENT)
}
