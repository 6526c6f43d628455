use std::sync::Arc;

use catalog_core::ServiceError;
use catalog_sql::{Row, SQLStore, Value};

use crate::model::Product;

const COLUMNS: &str = "id, name, quantity_available, price, available, creation_date";

/// Product repository — thin pass-through to the relational store.
///
/// Existence checks belong to the service layer; this layer reports
/// absence as `Ok(None)` and never raises NotFound itself.
pub struct ProductRepository {
    sql: Arc<dyn SQLStore>,
}

impl ProductRepository {
    pub fn new(sql: Arc<dyn SQLStore>) -> Self {
        Self { sql }
    }

    /// All rows, in the store's natural order.
    pub fn find_all(&self) -> Result<Vec<Product>, ServiceError> {
        let rows = self
            .sql
            .query(&format!("SELECT {} FROM products", COLUMNS), &[])
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        rows.iter().map(product_from_row).collect()
    }

    pub fn find_by_id(&self, id: i64) -> Result<Option<Product>, ServiceError> {
        let rows = self
            .sql
            .query(
                &format!("SELECT {} FROM products WHERE id = ?1", COLUMNS),
                &[Value::Integer(id)],
            )
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        rows.first().map(product_from_row).transpose()
    }

    /// Insert when `id` is unset, upsert by id otherwise. Returns the
    /// persisted state, with the store-assigned id populated on insert.
    pub fn save(&self, product: &Product) -> Result<Product, ServiceError> {
        let rows = match product.id {
            None => self.sql.query(
                &format!(
                    "INSERT INTO products (name, quantity_available, price, available, creation_date)
                     VALUES (?1, ?2, ?3, ?4, ?5) RETURNING {}",
                    COLUMNS
                ),
                &field_params(product),
            ),
            Some(id) => self.sql.query(
                &format!(
                    "INSERT INTO products (name, quantity_available, price, available, creation_date, id)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                     ON CONFLICT(id) DO UPDATE SET
                         name = excluded.name,
                         quantity_available = excluded.quantity_available,
                         price = excluded.price,
                         available = excluded.available,
                         creation_date = excluded.creation_date
                     RETURNING {}",
                    COLUMNS
                ),
                &{
                    let mut params = field_params(product).to_vec();
                    params.push(Value::Integer(id));
                    params
                },
            ),
        }
        .map_err(|e| ServiceError::Storage(e.to_string()))?;

        let row = rows
            .first()
            .ok_or_else(|| ServiceError::Internal("insert returned no row".into()))?;
        product_from_row(row)
    }

    /// Remove the row with this id. No-op when absent — the service is
    /// responsible for existence checks.
    pub fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
        self.sql
            .exec("DELETE FROM products WHERE id = ?1", &[Value::Integer(id)])
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        Ok(())
    }
}

/// Bind the five non-id fields in column order.
fn field_params(product: &Product) -> [Value; 5] {
    [
        Value::Text(product.name.clone()),
        Value::Integer(product.quantity_available),
        Value::Real(product.price),
        Value::Integer(product.available as i64),
        Value::Text(product.creation_date.to_string()),
    ]
}

fn product_from_row(row: &Row) -> Result<Product, ServiceError> {
    let creation_date = row
        .get_str("creation_date")
        .ok_or_else(|| ServiceError::Internal("missing creation_date column".into()))?
        .parse()
        .map_err(|e| ServiceError::Internal(format!("bad creation_date: {}", e)))?;

    Ok(Product {
        id: row.get_i64("id"),
        name: row
            .get_str("name")
            .ok_or_else(|| ServiceError::Internal("missing name column".into()))?
            .to_string(),
        quantity_available: row
            .get_i64("quantity_available")
            .ok_or_else(|| ServiceError::Internal("missing quantity_available column".into()))?,
        price: row
            .get_f64("price")
            .ok_or_else(|| ServiceError::Internal("missing price column".into()))?,
        available: row
            .get_bool("available")
            .ok_or_else(|| ServiceError::Internal("missing available column".into()))?,
        creation_date,
    })
}
