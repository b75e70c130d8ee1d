use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::coupon::model::Coupon;

use super::model::Cart;

/// Derived checkout amounts. `discount` never exceeds `subtotal`, so
/// `total` is never negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CartTotals {
    pub subtotal: Decimal,
    pub discount: Decimal,
    pub total: Decimal,
}

impl CartTotals {
    pub fn compute(subtotal: Decimal, coupon: Option<&Coupon>) -> Self {
        let discount = coupon
            .map(|coupon| coupon.discount_for(subtotal))
            .unwrap_or(Decimal::ZERO);
        Self {
            subtotal,
            discount,
            total: subtotal - discount,
        }
    }

    pub fn of(cart: &Cart) -> Self {
        Self::compute(cart.subtotal(), cart.coupon())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::CartItem;
    use crate::domain::coupon::model::DiscountType;
    use chrono::{Duration, Utc};
    use proptest::prelude::*;

    fn coupon(discount_type: DiscountType, value: Decimal) -> Coupon {
        Coupon {
            code: "TEST".to_string(),
            discount_type,
            discount_value: value,
            min_purchase_amount: Decimal::ZERO,
            expiry_date: Utc::now() + Duration::days(1),
        }
    }

    #[test]
    fn should_have_zero_discount_without_coupon() {
        let totals = CartTotals::compute(Decimal::from(100), None);

        assert_eq!(totals.discount, Decimal::ZERO);
        assert_eq!(totals.total, Decimal::from(100));
    }

    #[test]
    fn should_apply_percentage_discount() {
        let coupon = coupon(DiscountType::Percentage, Decimal::from(25));

        let totals = CartTotals::compute(Decimal::from(200), Some(&coupon));

        assert_eq!(totals.discount, Decimal::from(50));
        assert_eq!(totals.total, Decimal::from(150));
    }

    #[test]
    fn should_floor_total_at_zero_for_oversized_fixed_discount() {
        let coupon = coupon(DiscountType::FixedAmount, Decimal::from(500));

        let totals = CartTotals::compute(Decimal::from(80), Some(&coupon));

        assert_eq!(totals.discount, Decimal::from(80));
        assert_eq!(totals.total, Decimal::ZERO);
    }

    #[test]
    fn should_match_cart_subtotal() {
        let mut cart = Cart::default();
        cart.add(CartItem::new("p1", "A", Decimal::new(1999, 2), None, 2).unwrap());
        cart.add(CartItem::new("p2", "B", Decimal::new(500, 2), None, 1).unwrap());

        let totals = CartTotals::of(&cart);

        assert_eq!(totals.subtotal, Decimal::new(4498, 2));
        assert_eq!(totals.total, totals.subtotal);
    }

    proptest! {
        #[test]
        fn discount_never_exceeds_subtotal_for_percentage(
            subtotal_cents in 0u64..10_000_000,
            value in 0u64..200,
        ) {
            let subtotal = Decimal::new(subtotal_cents as i64, 2);
            let coupon = coupon(DiscountType::Percentage, Decimal::from(value));

            let totals = CartTotals::compute(subtotal, Some(&coupon));

            prop_assert!(totals.discount <= totals.subtotal);
            prop_assert!(totals.total >= Decimal::ZERO);
            prop_assert_eq!(totals.total, totals.subtotal - totals.discount);
        }

        #[test]
        fn discount_is_min_of_value_and_subtotal_for_fixed(
            subtotal_cents in 0u64..10_000_000,
            value_cents in 0u64..10_000_000,
        ) {
            let subtotal = Decimal::new(subtotal_cents as i64, 2);
            let value = Decimal::new(value_cents as i64, 2);
            let coupon = coupon(DiscountType::FixedAmount, value);

            let totals = CartTotals::compute(subtotal, Some(&coupon));

            prop_assert_eq!(totals.discount, value.min(subtotal));
            prop_assert!(totals.total >= Decimal::ZERO);
        }
    }
}
