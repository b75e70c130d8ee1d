use business::domain::wishlist::use_cases::add::AddToWishlistParams;
use business::domain::wishlist::use_cases::remove::RemoveFromWishlistParams;

use crate::cli::WishlistAction;
use crate::render::{money, table};
use crate::setup::dependency_injection::DependencyContainer;

pub async fn run(
    container: &DependencyContainer,
    action: Option<WishlistAction>,
) -> anyhow::Result<()> {
    match action.unwrap_or(WishlistAction::List) {
        WishlistAction::List => list(container).await,
        WishlistAction::Add { product_id } => {
            match container
                .add_to_wishlist
                .execute(AddToWishlistParams { product_id })
                .await
            {
                Ok(()) => println!("Added to wishlist"),
                Err(err) => println!("{}", err.user_message("wishlist.add_failed")),
            }
            Ok(())
        }
        WishlistAction::Remove { product_id } => {
            match container
                .remove_from_wishlist
                .execute(RemoveFromWishlistParams { product_id })
                .await
            {
                Ok(()) => println!("Removed from wishlist"),
                Err(err) => println!("{}", err.user_message("wishlist.remove_failed")),
            }
            Ok(())
        }
    }
}

async fn list(container: &DependencyContainer) -> anyhow::Result<()> {
    match container.get_wishlist.execute().await {
        Ok(products) => {
            if products.is_empty() {
                println!("Wishlist is empty");
                return Ok(());
            }
            let rows = products
                .into_iter()
                .map(|product| {
                    vec![
                        product.id,
                        product.name,
                        money(product.price),
                        if product.in_stock { "yes" } else { "no" }.to_string(),
                    ]
                })
                .collect();
            println!("{}", table(&["ID", "NAME", "PRICE", "IN STOCK"], rows));
        }
        Err(err) => println!("{}", err.user_message("wishlist.list_failed")),
    }
    Ok(())
}
