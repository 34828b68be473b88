//! File-backed catalog store.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;

use mercadito_core::Catalog;

use super::{CatalogStore, StoreError};

/// Catalog store persisting to a single pretty-printed JSON document.
///
/// Writes go to a sibling temp file first and are moved into place with a
/// rename, so a failed write leaves the previous document intact.
#[derive(Debug, Clone)]
pub struct JsonCatalogStore {
    path: PathBuf,
}

impl JsonCatalogStore {
    /// Create a store backed by the document at `path`.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }
}

#[async_trait]
impl CatalogStore for JsonCatalogStore {
    async fn load(&self) -> Result<Catalog, StoreError> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                StoreError::NotFound {
                    path: self.path.clone(),
                }
            } else {
                StoreError::Io {
                    path: self.path.clone(),
                    source: e,
                }
            }
        })?;

        serde_json::from_slice(&bytes).map_err(|e| StoreError::Malformed {
            path: self.path.clone(),
            source: e,
        })
    }

    async fn save(&self, catalog: &Catalog) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(catalog).map_err(|e| StoreError::Encode {
            path: self.path.clone(),
            source: e,
        })?;

        let temp = self.temp_path();
        tokio::fs::write(&temp, &bytes)
            .await
            .map_err(|e| StoreError::Io {
                path: temp.clone(),
                source: e,
            })?;
        tokio::fs::rename(&temp, &self.path)
            .await
            .map_err(|e| StoreError::Io {
                path: self.path.clone(),
                source: e,
            })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use mercadito_core::{Category, CategoryId, Product, ProductId};

    use super::*;

    fn sample_catalog() -> Catalog {
        Catalog {
            products: vec![
                Product {
                    id: ProductId::new(2),
                    name: "Taza".to_string(),
                    price: Decimal::new(599, 2),
                    stock: 12,
                    category_id: CategoryId::new(1),
                    featured: true,
                    image: "img/taza.jpg".to_string(),
                },
                Product {
                    id: ProductId::new(1),
                    name: "Camiseta".to_string(),
                    price: Decimal::new(1000, 2),
                    stock: 5,
                    category_id: CategoryId::new(2),
                    featured: false,
                    image: String::new(),
                },
            ],
            categories: vec![Category {
                id: CategoryId::new(1),
                name: "Hogar".to_string(),
            }],
        }
    }

    #[tokio::test]
    async fn test_round_trip_preserves_products_and_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonCatalogStore::new(dir.path().join("tienda.json"));

        let catalog = sample_catalog();
        store.save(&catalog).await.unwrap();
        let restored = store.load().await.unwrap();

        assert_eq!(restored, catalog);
        // Persisted order is stable, not sorted by id
        assert_eq!(restored.products[0].id, ProductId::new(2));
    }

    #[tokio::test]
    async fn test_save_overwrites_wholesale() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonCatalogStore::new(dir.path().join("tienda.json"));

        store.save(&sample_catalog()).await.unwrap();

        let mut reduced = sample_catalog();
        reduced.products.truncate(1);
        store.save(&reduced).await.unwrap();

        let restored = store.load().await.unwrap();
        assert_eq!(restored, reduced);
        assert_eq!(restored.products.len(), 1);
    }

    #[tokio::test]
    async fn test_repeated_saves_are_byte_stable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tienda.json");
        let store = JsonCatalogStore::new(path.clone());

        store.save(&sample_catalog()).await.unwrap();
        let first = tokio::fs::read(&path).await.unwrap();

        let reloaded = store.load().await.unwrap();
        store.save(&reloaded).await.unwrap();
        let second = tokio::fs::read(&path).await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_load_missing_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonCatalogStore::new(dir.path().join("missing.json"));

        let err = store.load().await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_load_malformed_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tienda.json");
        tokio::fs::write(&path, b"{ not json").await.unwrap();

        let store = JsonCatalogStore::new(path);
        let err = store.load().await.unwrap_err();
        assert!(matches!(err, StoreError::Malformed { .. }));
    }

    #[tokio::test]
    async fn test_no_temp_file_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonCatalogStore::new(dir.path().join("tienda.json"));

        store.save(&sample_catalog()).await.unwrap();

        let mut entries = tokio::fs::read_dir(dir.path()).await.unwrap();
        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await.unwrap() {
            names.push(entry.file_name());
        }
        assert_eq!(names, vec!["tienda.json"]);
    }
}
