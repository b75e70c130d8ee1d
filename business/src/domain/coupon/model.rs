use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use super::errors::CouponError;

/// How a coupon reduces the cart subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountType {
    Percentage,
    FixedAmount,
}

/// Server-owned discount descriptor. The client never mutates a coupon;
/// it only derives a discount amount from one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coupon {
    pub code: String,
    pub discount_type: DiscountType,
    pub discount_value: Decimal,
    pub min_purchase_amount: Decimal,
    pub expiry_date: DateTime<Utc>,
}

impl Coupon {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expiry_date < now
    }

    /// Expiry and minimum-purchase checks run before any discount is computed.
    pub fn validate_for(&self, subtotal: Decimal, now: DateTime<Utc>) -> Result<(), CouponError> {
        if self.is_expired(now) {
            return Err(CouponError::Expired);
        }
        if subtotal < self.min_purchase_amount {
            return Err(CouponError::MinPurchaseNotMet);
        }
        Ok(())
    }

    /// Derived discount, clamped so it never exceeds the subtotal.
    pub fn discount_for(&self, subtotal: Decimal) -> Decimal {
        let raw = match self.discount_type {
            DiscountType::Percentage => subtotal * self.discount_value / Decimal::from(100),
            DiscountType::FixedAmount => self.discount_value,
        };
        raw.min(subtotal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn coupon(discount_type: DiscountType, value: i64) -> Coupon {
        Coupon {
            code: "SAVE10".to_string(),
            discount_type,
            discount_value: Decimal::from(value),
            min_purchase_amount: Decimal::ZERO,
            expiry_date: Utc::now() + Duration::days(7),
        }
    }

    #[test]
    fn should_compute_percentage_discount() {
        let coupon = coupon(DiscountType::Percentage, 10);
        assert_eq!(
            coupon.discount_for(Decimal::from(200)),
            Decimal::from(20)
        );
    }

    #[test]
    fn should_cap_fixed_discount_at_subtotal() {
        let coupon = coupon(DiscountType::FixedAmount, 50);
        assert_eq!(
            coupon.discount_for(Decimal::from(30)),
            Decimal::from(30)
        );
    }

    #[test]
    fn should_use_fixed_value_when_below_subtotal() {
        let coupon = coupon(DiscountType::FixedAmount, 50);
        assert_eq!(
            coupon.discount_for(Decimal::from(120)),
            Decimal::from(50)
        );
    }

    #[test]
    fn should_reject_expired_coupon() {
        let mut coupon = coupon(DiscountType::Percentage, 10);
        coupon.expiry_date = Utc::now() - Duration::days(1);

        let result = coupon.validate_for(Decimal::from(100), Utc::now());

        assert!(matches!(result.unwrap_err(), CouponError::Expired));
    }

    #[test]
    fn should_reject_when_below_minimum_purchase() {
        let mut coupon = coupon(DiscountType::Percentage, 10);
        coupon.min_purchase_amount = Decimal::from(100);

        let result = coupon.validate_for(Decimal::from(99), Utc::now());

        assert!(matches!(result.unwrap_err(), CouponError::MinPurchaseNotMet));
    }

    #[test]
    fn should_parse_wire_names() {
        assert_eq!(
            "PERCENTAGE".parse::<DiscountType>().unwrap(),
            DiscountType::Percentage
        );
        assert_eq!(
            "FIXED_AMOUNT".parse::<DiscountType>().unwrap(),
            DiscountType::FixedAmount
        );
    }
}
