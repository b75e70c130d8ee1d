use chrono::Utc;

use business::domain::product::model::{FALLBACK_IMAGE, image_url};
use business::domain::product::use_cases::browse::BrowseProductsParams;
use business::domain::product::use_cases::get_by_id::GetProductByIdParams;

use crate::render::{money, table};
use crate::setup::dependency_injection::DependencyContainer;

pub async fn list(
    container: &DependencyContainer,
    search: Option<String>,
) -> anyhow::Result<()> {
    match container
        .browse_products
        .execute(BrowseProductsParams { query: search })
        .await
    {
        Ok(products) => {
            let rows = products
                .into_iter()
                .map(|product| {
                    vec![
                        product.id,
                        product.name,
                        money(product.price),
                        product.category.unwrap_or_default(),
                        if product.in_stock { "yes" } else { "no" }.to_string(),
                    ]
                })
                .collect();
            println!("{}", table(&["ID", "NAME", "PRICE", "CATEGORY", "IN STOCK"], rows));
        }
        Err(err) => println!("{}", err.user_message("product.list_failed")),
    }
    Ok(())
}

pub async fn show(container: &DependencyContainer, id: String) -> anyhow::Result<()> {
    match container
        .get_product
        .execute(GetProductByIdParams { id: id.clone() })
        .await
    {
        Ok(product) => {
            println!("{} — {}", product.id, product.name);
            println!("Price: {}", money(product.price));
            if !product.description.is_empty() {
                println!("{}", product.description);
            }
            println!(
                "Image: {} (fallback: {})",
                image_url(
                    &container.backend_base_url,
                    &product.id,
                    Utc::now().timestamp_millis()
                ),
                FALLBACK_IMAGE
            );
        }
        Err(err) => println!("{}", err.user_message("product.not_found")),
    }
    Ok(())
}
