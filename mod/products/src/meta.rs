//! Schema metadata for the external documentation renderer.
//!
//! Purely descriptive — nothing here affects request handling. Routes
//! are tagged `reading` (GET) or `modification` (POST/PUT/DELETE) so
//! the renderer can group them.

/// Schema definition for the products module.
pub fn schema_def() -> serde_json::Value {
    serde_json::json!({
        "id": "products",
        "label": "Products",
        "description": "API de gestión de productos",
        "resources": [
            {
                "name": "Product",
                "fields": [
                    {"name": "id", "type": "integer", "nullable": true, "readOnly": true},
                    {"name": "name", "type": "string"},
                    {"name": "quantityAvailable", "type": "integer"},
                    {"name": "price", "type": "number"},
                    {"name": "available", "type": "boolean"},
                    {"name": "creationDate", "type": "string", "format": "date"},
                ],
            }
        ],
        "routes": [
            {
                "method": "GET",
                "path": "/api/v1/products",
                "tag": "reading",
                "summary": "Lista todos los productos",
            },
            {
                "method": "GET",
                "path": "/api/v1/products/{id}",
                "tag": "reading",
                "summary": "Recupera un producto por su id",
                "responses": {
                    "200": "Product",
                    "404": "El producto con el id dado no fue encontrado",
                    "500": "Error interno",
                },
            },
            {
                "method": "POST",
                "path": "/api/v1/products",
                "tag": "modification",
                "summary": "Registra un nuevo producto",
            },
            {
                "method": "PUT",
                "path": "/api/v1/products/{id}",
                "tag": "modification",
                "summary": "Actualiza un producto existente",
            },
            {
                "method": "DELETE",
                "path": "/api/v1/products/{id}",
                "tag": "modification",
                "summary": "Elimina un producto por su id",
            },
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_is_tagged() {
        let schema = schema_def();
        let routes = schema["routes"].as_array().unwrap();
        assert_eq!(routes.len(), 5);
        for route in routes {
            let tag = route["tag"].as_str().unwrap();
            let method = route["method"].as_str().unwrap();
            if method == "GET" {
                assert_eq!(tag, "reading");
            } else {
                assert_eq!(tag, "modification");
            }
        }
    }

    #[test]
    fn resource_lists_all_product_fields() {
        let schema = schema_def();
        let fields = schema["resources"][0]["fields"].as_array().unwrap();
        let names: Vec<&str> = fields.iter().map(|f| f["name"].as_str().unwrap()).collect();
        assert_eq!(
            names,
            ["id", "name", "quantityAvailable", "price", "available", "creationDate"]
        );
    }
}
