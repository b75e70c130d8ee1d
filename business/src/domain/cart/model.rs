use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::errors::CartError;
use crate::domain::coupon::model::Coupon;

/// One line of the cart. Lives only in session memory; nothing about the
/// cart is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: String,
    pub name: String,
    pub unit_price: Decimal,
    pub image_url: Option<String>,
    pub quantity: u32,
}

impl CartItem {
    pub fn new(
        product_id: impl Into<String>,
        name: impl Into<String>,
        unit_price: Decimal,
        image_url: Option<String>,
        quantity: u32,
    ) -> Result<Self, CartError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CartError::NameEmpty);
        }
        if quantity == 0 {
            return Err(CartError::QuantityZero);
        }
        Ok(Self {
            product_id: product_id.into(),
            name,
            unit_price,
            image_url,
            quantity,
        })
    }

    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// The session cart: ordered lines plus the coupon applied during the
/// current checkout, if any. Insertion order is preserved across merges
/// and removals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
    coupon: Option<Coupon>,
}

impl Cart {
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn coupon(&self) -> Option<&Coupon> {
        self.coupon.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds a line; a duplicate product id accumulates quantity onto the
    /// existing line instead of creating a second one.
    pub fn add(&mut self, item: CartItem) {
        match self
            .items
            .iter_mut()
            .find(|existing| existing.product_id == item.product_id)
        {
            Some(existing) => existing.quantity += item.quantity,
            None => self.items.push(item),
        }
    }

    /// Sets the quantity of a line. Zero removes the line.
    pub fn update_quantity(&mut self, product_id: &str, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return self.remove(product_id);
        }
        let item = self
            .items
            .iter_mut()
            .find(|item| item.product_id == product_id)
            .ok_or(CartError::ItemNotFound)?;
        item.quantity = quantity;
        Ok(())
    }

    /// Removes exactly the matching line, leaving the others untouched.
    pub fn remove(&mut self, product_id: &str) -> Result<(), CartError> {
        let position = self
            .items
            .iter()
            .position(|item| item.product_id == product_id)
            .ok_or(CartError::ItemNotFound)?;
        self.items.remove(position);
        Ok(())
    }

    pub fn set_coupon(&mut self, coupon: Coupon) {
        self.coupon = Some(coupon);
    }

    pub fn clear_coupon(&mut self) {
        self.coupon = None;
    }

    /// Empties the cart and drops any applied coupon.
    pub fn clear(&mut self) {
        self.items.clear();
        self.coupon = None;
    }

    pub fn subtotal(&self) -> Decimal {
        self.items.iter().map(CartItem::line_total).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(product_id: &str, price: i64, quantity: u32) -> CartItem {
        CartItem::new(product_id, "Some product", Decimal::from(price), None, quantity).unwrap()
    }

    #[test]
    fn should_accumulate_quantity_for_duplicate_product_id() {
        let mut cart = Cart::default();
        cart.add(item("p1", 10, 2));
        cart.add(item("p1", 10, 3));

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 5);
    }

    #[test]
    fn should_keep_separate_lines_for_different_products() {
        let mut cart = Cart::default();
        cart.add(item("p1", 10, 1));
        cart.add(item("p2", 20, 1));

        assert_eq!(cart.items().len(), 2);
    }

    #[test]
    fn should_remove_only_the_matching_line() {
        let mut cart = Cart::default();
        cart.add(item("p1", 10, 2));
        cart.add(item("p2", 20, 1));
        cart.add(item("p3", 5, 4));

        cart.remove("p2").unwrap();

        let ids: Vec<&str> = cart.items().iter().map(|i| i.product_id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p3"]);
        assert_eq!(cart.items()[0].quantity, 2);
        assert_eq!(cart.items()[1].quantity, 4);
    }

    #[test]
    fn should_drop_line_when_quantity_set_to_zero() {
        let mut cart = Cart::default();
        cart.add(item("p1", 10, 2));

        cart.update_quantity("p1", 0).unwrap();

        assert!(cart.is_empty());
    }

    #[test]
    fn should_fail_updating_missing_line() {
        let mut cart = Cart::default();

        let result = cart.update_quantity("ghost", 3);

        assert!(matches!(result.unwrap_err(), CartError::ItemNotFound));
    }

    #[test]
    fn should_sum_subtotal_over_all_lines() {
        let mut cart = Cart::default();
        cart.add(item("p1", 10, 2));
        cart.add(item("p2", 7, 3));

        assert_eq!(cart.subtotal(), Decimal::from(41));
    }

    #[test]
    fn should_reject_item_with_empty_name() {
        let result = CartItem::new("p1", "   ", Decimal::ONE, None, 1);

        assert!(matches!(result.unwrap_err(), CartError::NameEmpty));
    }

    #[test]
    fn should_reject_item_with_zero_quantity() {
        let result = CartItem::new("p1", "Milk", Decimal::ONE, None, 0);

        assert!(matches!(result.unwrap_err(), CartError::QuantityZero));
    }

    #[test]
    fn should_clear_items_and_coupon() {
        let mut cart = Cart::default();
        cart.add(item("p1", 10, 1));
        cart.set_coupon(Coupon {
            code: "SAVE".to_string(),
            discount_type: crate::domain::coupon::model::DiscountType::Percentage,
            discount_value: Decimal::TEN,
            min_purchase_amount: Decimal::ZERO,
            expiry_date: chrono::Utc::now(),
        });

        cart.clear();

        assert!(cart.is_empty());
        assert!(cart.coupon().is_none());
    }
}
