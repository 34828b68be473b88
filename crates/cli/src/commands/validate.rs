//! Check the data files for consistency problems.

use std::collections::HashSet;
use std::path::Path;

use rust_decimal::Decimal;
use tracing::{error, info};

use mercadito_core::Catalog;

/// Validate `tienda.json` and `usuarios.json` in `data_dir`.
///
/// Reports duplicate product ids, negative prices and dangling category
/// references, and checks that the user directory parses.
///
/// # Errors
///
/// Returns an error if a document cannot be read or parsed, or if any
/// consistency problem is found.
pub async fn run(data_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let catalog_path = data_dir.join("tienda.json");
    let bytes = tokio::fs::read(&catalog_path).await?;
    let catalog: Catalog = serde_json::from_slice(&bytes)?;

    let problems = catalog_problems(&catalog);
    for problem in &problems {
        error!("  - {problem}");
    }

    let users_path = data_dir.join("usuarios.json");
    let bytes = tokio::fs::read(&users_path).await?;
    let users: serde_json::Value = serde_json::from_slice(&bytes)?;
    let user_count = users.as_array().map_or(0, Vec::len);

    if problems.is_empty() {
        info!(
            products = catalog.products.len(),
            categories = catalog.categories.len(),
            users = user_count,
            "data files are consistent"
        );
        Ok(())
    } else {
        Err(format!("{} validation problems found", problems.len()).into())
    }
}

/// Collect consistency problems in a catalog.
fn catalog_problems(catalog: &Catalog) -> Vec<String> {
    let mut problems = Vec::new();

    let mut seen_products = HashSet::new();
    for product in &catalog.products {
        if !seen_products.insert(product.id) {
            problems.push(format!("duplicate product id {}", product.id));
        }
        if product.price < Decimal::ZERO {
            problems.push(format!(
                "product {} has a negative price ({})",
                product.id, product.price
            ));
        }
    }

    let category_ids: HashSet<_> = catalog.categories.iter().map(|c| c.id).collect();
    let mut seen_categories = HashSet::new();
    for category in &catalog.categories {
        if !seen_categories.insert(category.id) {
            problems.push(format!("duplicate category id {}", category.id));
        }
    }
    for product in &catalog.products {
        if !category_ids.contains(&product.category_id) {
            problems.push(format!(
                "product {} references unknown category {}",
                product.id, product.category_id
            ));
        }
    }

    problems
}
