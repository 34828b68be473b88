//! Seed the data directory with the demo shop dataset.

use std::path::Path;

use rust_decimal::Decimal;
use tracing::info;

use mercadito_core::{Catalog, Category, CategoryId, Product, ProductId};

/// The demo catalog: a handful of products across three categories.
fn demo_catalog() -> Catalog {
    let product = |id: i32, name: &str, cents: i64, stock: u32, category: i32, featured: bool| {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            price: Decimal::new(cents, 2),
            stock,
            category_id: CategoryId::new(category),
            featured,
            image: format!("img/producto-{id}.jpg"),
        }
    };

    Catalog {
        products: vec![
            product(1, "Camiseta Azul", 1000, 5, 1, true),
            product(2, "Sudadera con Capucha", 2450, 8, 1, false),
            product(3, "Taza de Café", 599, 20, 2, true),
            product(4, "Lámpara de Escritorio", 1875, 4, 2, false),
            product(5, "Gorra Negra", 850, 15, 3, false),
            product(6, "Mochila Urbana", 3200, 6, 3, true),
        ],
        categories: vec![
            Category {
                id: CategoryId::new(1),
                name: "Ropa".to_string(),
            },
            Category {
                id: CategoryId::new(2),
                name: "Hogar".to_string(),
            },
            Category {
                id: CategoryId::new(3),
                name: "Accesorios".to_string(),
            },
        ],
    }
}

/// Write `tienda.json` and `usuarios.json` into `data_dir`.
///
/// Refuses to overwrite existing files unless `force` is set.
///
/// # Errors
///
/// Returns an error if a target file already exists (without `force`) or
/// if writing fails.
pub async fn run(data_dir: &Path, force: bool) -> Result<(), Box<dyn std::error::Error>> {
    tokio::fs::create_dir_all(data_dir).await?;

    let catalog_path = data_dir.join("tienda.json");
    let users_path = data_dir.join("usuarios.json");

    if !force {
        for path in [&catalog_path, &users_path] {
            if path.exists() {
                return Err(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                )
                .into());
            }
        }
    }

    let catalog = demo_catalog();
    tokio::fs::write(&catalog_path, serde_json::to_vec_pretty(&catalog)?).await?;
    info!(path = %catalog_path.display(), products = catalog.products.len(), "catalog written");

    let users = serde_json::json!([
        {"user": "admin", "pass": "admin123"},
        {"user": "ana", "pass": "ana123"}
    ]);
    tokio::fs::write(&users_path, serde_json::to_vec_pretty(&users)?).await?;
    info!(path = %users_path.display(), "user directory written");

    Ok(())
}
