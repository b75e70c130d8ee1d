use std::path::Path;
use std::str::FromStr;

use rust_decimal::Decimal;

use business::domain::admin::gateway::{ProductImageUpload, ProductUpload};
use business::domain::admin::use_cases::dashboard_stats::DashboardStatsParams;
use business::domain::admin::use_cases::delete_product::DeleteProductParams;
use business::domain::admin::use_cases::update_product::UpdateProductParams;

use crate::cli::AdminAction;
use crate::render::{money, table};
use crate::setup::dependency_injection::DependencyContainer;

pub async fn run(container: &DependencyContainer, action: AdminAction) -> anyhow::Result<()> {
    match action {
        AdminAction::Stats { month, year } => stats(container, month, year).await,
        AdminAction::CreateProduct {
            name,
            price,
            description,
            category,
            in_stock,
            image,
        } => {
            let Some(upload) =
                build_upload(name, &price, description, category, in_stock, image.as_deref())?
            else {
                return Ok(());
            };
            match container.create_product.execute(upload).await {
                Ok(product) => println!("Created product {}", product.id),
                Err(err) => println!("{}", err.user_message("admin.product_create_failed")),
            }
            Ok(())
        }
        AdminAction::UpdateProduct {
            id,
            name,
            price,
            description,
            category,
            in_stock,
            image,
        } => {
            let Some(upload) =
                build_upload(name, &price, description, category, in_stock, image.as_deref())?
            else {
                return Ok(());
            };
            match container
                .update_product
                .execute(UpdateProductParams { id, upload })
                .await
            {
                Ok(product) => println!("Updated product {}", product.id),
                Err(err) => println!("{}", err.user_message("admin.product_update_failed")),
            }
            Ok(())
        }
        AdminAction::DeleteProduct { id } => {
            match container
                .delete_product
                .execute(DeleteProductParams { id: id.clone() })
                .await
            {
                Ok(()) => println!("Deleted product {id}"),
                Err(err) => println!("{}", err.user_message("admin.product_delete_failed")),
            }
            Ok(())
        }
    }
}

async fn stats(container: &DependencyContainer, month: u32, year: i32) -> anyhow::Result<()> {
    if !(1..=12).contains(&month) {
        println!("Month must be between 1 and 12");
        return Ok(());
    }

    match container
        .dashboard_stats
        .execute(DashboardStatsParams { month, year })
        .await
    {
        Ok(stats) => {
            println!("Sales for {year}-{month:02}");

            let sales_rows = stats
                .product_sales
                .iter()
                .map(|sales| vec![sales.product_name.clone(), sales.quantity.to_string()])
                .collect();
            println!("{}", table(&["PRODUCT", "UNITS"], sales_rows));

            let status_rows = stats
                .status_distribution
                .iter()
                .map(|count| vec![count.status.to_string(), count.orders.to_string()])
                .collect();
            println!("{}", table(&["STATUS", "ORDERS"], status_rows));

            println!("Delivered revenue: {}", money(stats.revenue));
        }
        Err(err) => println!("{}", err.user_message("admin.stats_failed")),
    }
    Ok(())
}

fn build_upload(
    name: String,
    price: &str,
    description: String,
    category: Option<String>,
    in_stock: bool,
    image: Option<&Path>,
) -> anyhow::Result<Option<ProductUpload>> {
    let Ok(price) = Decimal::from_str(price) else {
        println!("Price must be a decimal number, got {price:?}");
        return Ok(None);
    };

    let image = match image {
        Some(path) => {
            let bytes = std::fs::read(path)?;
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| "image".to_string());
            Some(ProductImageUpload {
                content_type: content_type_for(&file_name),
                file_name,
                bytes,
            })
        }
        None => None,
    };

    Ok(Some(ProductUpload {
        name,
        price,
        description,
        category,
        in_stock,
        image,
    }))
}

fn content_type_for(file_name: &str) -> String {
    let extension = file_name.rsplit('.').next().unwrap_or_default();
    match extension.to_ascii_lowercase().as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "webp" => "image/webp",
        "gif" => "image/gif",
        _ => "application/octet-stream",
    }
    .to_string()
}
