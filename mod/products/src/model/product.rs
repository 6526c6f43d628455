use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Product — a single catalog entry. PK = id (store-assigned).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Store-assigned identifier, immutable once set. `None` only for a
    /// not-yet-persisted product submitted for creation.
    #[serde(default)]
    pub id: Option<i64>,

    pub name: String,

    pub quantity_available: i64,

    pub price: f64,

    pub available: bool,

    /// Serialized as `YYYY-MM-DD`.
    pub creation_date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laptop() -> Product {
        Product {
            id: Some(1),
            name: "Laptop".into(),
            quantity_available: 5,
            price: 999.99,
            available: true,
            creation_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
        }
    }

    #[test]
    fn product_json_shape() {
        let json = serde_json::to_value(laptop()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "name": "Laptop",
                "quantityAvailable": 5,
                "price": 999.99,
                "available": true,
                "creationDate": "2024-01-10",
            })
        );
    }

    #[test]
    fn product_json_roundtrip() {
        let p = laptop();
        let text = serde_json::to_string(&p).unwrap();
        let back: Product = serde_json::from_str(&text).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn absent_id_deserializes_as_none() {
        let p: Product = serde_json::from_str(
            r#"{"name":"Mouse","quantityAvailable":10,"price":19.5,"available":false,"creationDate":"2024-03-01"}"#,
        )
        .unwrap();
        assert_eq!(p.id, None);
        assert_eq!(p.name, "Mouse");
        assert!(!p.available);
    }

    #[test]
    fn null_id_deserializes_as_none() {
        let p: Product = serde_json::from_str(
            r#"{"id":null,"name":"Mouse","quantityAvailable":10,"price":19.5,"available":true,"creationDate":"2024-03-01"}"#,
        )
        .unwrap();
        assert_eq!(p.id, None);
    }
}
