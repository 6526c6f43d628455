use catalog_core::ServiceError;
use catalog_sql::SQLStore;
use tracing::debug;

/// SQL DDL statements to initialize the products schema.
///
/// The id is assigned by the store on insert; all other columns hold
/// the product fields directly, typed.
const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS products (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        quantity_available INTEGER NOT NULL,
        price REAL NOT NULL,
        available INTEGER NOT NULL,
        creation_date TEXT NOT NULL
    )",
];

pub fn init_schema(sql: &dyn SQLStore) -> Result<(), ServiceError> {
    for stmt in SCHEMA {
        sql.exec(stmt, &[])
            .map_err(|e| ServiceError::Storage(format!("schema init failed: {}", e)))?;
    }
    debug!("products schema initialized");
    Ok(())
}
