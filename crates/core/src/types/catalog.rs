//! The catalog document: every product and category, persisted wholesale.

use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::product::{Category, Product};

/// The singleton store document.
///
/// Lookup is order-insensitive, but the sequences keep their persisted
/// order so successive rewrites of the document are stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(rename = "productos")]
    pub products: Vec<Product>,
    #[serde(rename = "categorias")]
    pub categories: Vec<Category>,
}

impl Catalog {
    /// Find a product by id. First match wins; duplicate ids are not
    /// expected and not deduplicated.
    #[must_use]
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Mutable variant of [`Catalog::product`].
    pub fn product_mut(&mut self, id: ProductId) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.id == id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::types::id::CategoryId;

    fn product(id: i32, price: Decimal, stock: u32) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Producto {id}"),
            price,
            stock,
            category_id: CategoryId::new(1),
            featured: false,
            image: String::new(),
        }
    }

    #[test]
    fn test_lookup_first_match_wins() {
        let catalog = Catalog {
            products: vec![
                product(1, Decimal::new(1000, 2), 5),
                product(1, Decimal::new(9999, 2), 0),
            ],
            categories: Vec::new(),
        };

        let found = catalog.product(ProductId::new(1)).unwrap();
        assert_eq!(found.price, Decimal::new(1000, 2));
        assert_eq!(found.stock, 5);
    }

    #[test]
    fn test_lookup_unknown_id() {
        let catalog = Catalog::default();
        assert!(catalog.product(ProductId::new(42)).is_none());
    }

    #[test]
    fn test_wire_format_uses_spanish_keys() {
        let catalog = Catalog {
            products: vec![product(1, Decimal::new(1999, 2), 3)],
            categories: vec![Category {
                id: CategoryId::new(1),
                name: "Hogar".to_string(),
            }],
        };

        let json = serde_json::to_value(&catalog).unwrap();
        assert!(json.get("productos").is_some());
        assert!(json.get("categorias").is_some());

        let p = &json["productos"][0];
        assert_eq!(p["nombre"], "Producto 1");
        assert_eq!(p["stock"], 3);
        assert_eq!(p["id_categoria"], 1);
        // Prices travel as JSON numbers, not strings
        assert!(p["precio"].is_number());
    }

    #[test]
    fn test_serde_round_trip_preserves_order_and_values() {
        let catalog = Catalog {
            products: vec![
                product(3, Decimal::new(500, 2), 10),
                product(1, Decimal::new(1999, 2), 2),
                product(2, Decimal::new(50, 2), 0),
            ],
            categories: vec![Category {
                id: CategoryId::new(7),
                name: "Ofertas".to_string(),
            }],
        };

        let json = serde_json::to_string_pretty(&catalog).unwrap();
        let restored: Catalog = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, catalog);
    }
}
