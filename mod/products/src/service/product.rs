use catalog_core::ServiceError;

use crate::model::Product;
use super::ProductService;

impl ProductService {
    pub fn find_all_products(&self) -> Result<Vec<Product>, ServiceError> {
        self.repository.find_all()
    }

    pub fn find_product_by_id(&self, id: i64) -> Result<Product, ServiceError> {
        self.repository.find_by_id(id)?.ok_or_else(|| {
            ServiceError::NotFound(format!("No existe el producto con el id: {}", id))
        })
    }

    /// Unconditional save. No existence check: a product that already
    /// carries an id overwrites the row with that id (upsert).
    pub fn save_product(&self, product: &Product) -> Result<Product, ServiceError> {
        self.repository.save(product)
    }

    /// Replace every non-id field of the record at `id` with the
    /// incoming values. The incoming `product.id` is ignored; only the
    /// path-supplied id selects the record.
    pub fn update_product(&self, id: i64, product: &Product) -> Result<Product, ServiceError> {
        let existing = self.repository.find_by_id(id)?.ok_or_else(|| {
            ServiceError::NotFound(format!(
                "No existe el producto para actualizar con el id: {}",
                id
            ))
        })?;

        let replacement = Product {
            id: existing.id,
            name: product.name.clone(),
            quantity_available: product.quantity_available,
            price: product.price,
            available: product.available,
            creation_date: product.creation_date,
        };
        self.repository.save(&replacement)
    }

    /// Existence check, then delete, as two separate store calls.
    /// No atomicity guarantee against a concurrent delete.
    pub fn delete_product_by_id(&self, id: i64) -> Result<(), ServiceError> {
        self.repository.find_by_id(id)?.ok_or_else(|| {
            ServiceError::NotFound(format!(
                "No existe el producto para eliminar con el id: {}",
                id
            ))
        })?;
        self.repository.delete_by_id(id)
    }
}
