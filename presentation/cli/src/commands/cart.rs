use chrono::Utc;

use business::domain::cart::use_cases::add_item::AddItemParams;
use business::domain::cart::use_cases::apply_coupon::ApplyCouponParams;
use business::domain::cart::use_cases::remove_item::RemoveItemParams;
use business::domain::cart::use_cases::update_quantity::UpdateQuantityParams;
use business::domain::coupon::errors::CouponError;
use business::domain::product::model::image_url;
use business::domain::product::use_cases::get_by_id::GetProductByIdParams;

use crate::cli::CartAction;
use crate::render::{money, table};
use crate::setup::dependency_injection::DependencyContainer;

pub async fn run(container: &DependencyContainer, action: CartAction) -> anyhow::Result<()> {
    match action {
        CartAction::Show => show(container).await,
        CartAction::Add {
            product_id,
            quantity,
        } => add(container, product_id, quantity).await,
        CartAction::Update {
            product_id,
            quantity,
        } => {
            match container
                .update_quantity
                .execute(UpdateQuantityParams {
                    product_id,
                    quantity,
                })
                .await
            {
                Ok(_) => show(container).await,
                Err(err) => {
                    println!("{err}");
                    Ok(())
                }
            }
        }
        CartAction::Remove { product_id } => {
            match container
                .remove_item
                .execute(RemoveItemParams { product_id })
                .await
            {
                Ok(_) => show(container).await,
                Err(err) => {
                    println!("{err}");
                    Ok(())
                }
            }
        }
        CartAction::Coupon { code } => coupon(container, code).await,
    }
}

async fn show(container: &DependencyContainer) -> anyhow::Result<()> {
    let view = container.get_cart.execute().await;
    if view.items.is_empty() {
        println!("Cart is empty");
        return Ok(());
    }

    let rows = view
        .items
        .iter()
        .map(|item| {
            vec![
                item.product_id.clone(),
                item.name.clone(),
                money(item.unit_price),
                item.quantity.to_string(),
                money(item.line_total()),
            ]
        })
        .collect();
    println!("{}", table(&["ID", "NAME", "PRICE", "QTY", "LINE TOTAL"], rows));

    println!("Subtotal: {}", money(view.totals.subtotal));
    if let Some(coupon) = &view.coupon {
        println!("Coupon {}: -{}", coupon.code, money(view.totals.discount));
    }
    println!("Total: {}", money(view.totals.total));
    Ok(())
}

async fn add(
    container: &DependencyContainer,
    product_id: String,
    quantity: u32,
) -> anyhow::Result<()> {
    // Pull the product first so the cart line carries its name and price.
    let product = match container
        .get_product
        .execute(GetProductByIdParams {
            id: product_id.clone(),
        })
        .await
    {
        Ok(product) => product,
        Err(err) => {
            println!("{}", err.user_message("product.not_found"));
            return Ok(());
        }
    };

    let image = image_url(
        &container.backend_base_url,
        &product.id,
        Utc::now().timestamp_millis(),
    );
    match container
        .add_item
        .execute(AddItemParams {
            product_id: product.id,
            name: product.name,
            unit_price: product.price,
            image_url: Some(image),
            quantity,
        })
        .await
    {
        Ok(_) => show(container).await,
        Err(err) => {
            println!("{err}");
            Ok(())
        }
    }
}

async fn coupon(container: &DependencyContainer, code: String) -> anyhow::Result<()> {
    match container
        .apply_coupon
        .execute(ApplyCouponParams { code })
        .await
    {
        Ok(totals) => {
            println!("Coupon applied, you save {}", money(totals.discount));
            println!("New total: {}", money(totals.total));
        }
        Err(CouponError::Gateway(err)) => {
            println!("{}", err.user_message("coupon.verify_failed"));
        }
        Err(err) => println!("{err}"),
    }
    Ok(())
}
