use rust_decimal::Decimal;

/// Local asset substituted by renderers when a product image fails to
/// load. No retry is attempted.
pub const FALLBACK_IMAGE: &str = "assets/product-placeholder.png";

/// Catalog entry as served by the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    pub description: String,
    pub category: Option<String>,
    pub in_stock: bool,
}

/// Templated image path for a product, with a cache-busting timestamp so
/// an admin image replacement shows up without waiting out HTTP caches.
pub fn image_url(base_url: &str, product_id: &str, cache_bust_millis: i64) -> String {
    format!(
        "{}/products/{}/image?ts={}",
        base_url.trim_end_matches('/'),
        product_id,
        cache_bust_millis
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_image_url_with_cache_buster() {
        assert_eq!(
            image_url("https://api.shop.test", "p42", 1700000000000),
            "https://api.shop.test/products/p42/image?ts=1700000000000"
        );
    }

    #[test]
    fn should_tolerate_trailing_slash_in_base_url() {
        assert_eq!(
            image_url("https://api.shop.test/", "p42", 1),
            "https://api.shop.test/products/p42/image?ts=1"
        );
    }
}
