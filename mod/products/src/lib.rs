pub mod api;
pub mod meta;
pub mod model;
pub mod repository;
pub mod service;


use std::sync::Arc;

use axum::Router;
use catalog_core::{Module, ServiceError};
use catalog_sql::SQLStore;

use service::ProductService;

pub use meta::schema_def;

/// Products module — CRUD over the product catalog.
pub struct ProductsModule {
    service: Arc<ProductService>,
}

impl ProductsModule {
    pub fn new(sql: Arc<dyn SQLStore>) -> Result<Self, ServiceError> {
        Ok(Self {
            service: Arc::new(ProductService::new(sql)?),
        })
    }
}

impl Module for ProductsModule {
    fn name(&self) -> &str {
        "products"
    }

    fn routes(&self) -> Router {
        api::router(self.service.clone())
    }
}
