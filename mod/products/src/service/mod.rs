pub mod product;
pub mod schema;

use std::sync::Arc;

use catalog_core::ServiceError;
use catalog_sql::SQLStore;

use crate::repository::ProductRepository;

/// Product service — business rules on top of the repository:
/// existence checks before update/delete, wholesale field replacement
/// on update. Stateless; one instance shared across all requests.
pub struct ProductService {
    pub(crate) repository: ProductRepository,
}

impl ProductService {
    pub fn new(sql: Arc<dyn SQLStore>) -> Result<Self, ServiceError> {
        schema::init_schema(sql.as_ref())?;
        Ok(Self {
            repository: ProductRepository::new(sql),
        })
    }
}
