use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::domain::cart::model::CartItem;
use crate::domain::cart::totals::CartTotals;
use crate::domain::checkout::model::{DeliveryInfo, PaymentMethod};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Shipping,
    Delivered,
    Cancelled,
    Refunded,
}

/// One line of a placed order, as reported by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: String,
    pub product_name: String,
    pub unit_price: Decimal,
    pub quantity: u32,
}

/// Read-only projection of a server-owned order. The only transitions the
/// client may initiate are cancel and refund.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: String,
    pub lines: Vec<OrderLine>,
    pub status: OrderStatus,
    pub total: Decimal,
    pub created_at: DateTime<Utc>,
    pub delivery: Option<DeliveryInfo>,
}

/// Payload for the single order-creation call at the end of checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOrder {
    pub items: Vec<CartItem>,
    pub delivery: DeliveryInfo,
    pub payment_method: PaymentMethod,
    pub coupon_code: Option<String>,
    pub totals: CartTotals,
}

/// Creation response. For the electronic payment method the backend hands
/// back a gateway URL to navigate to instead of a finished order.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedOrder {
    pub order_id: String,
    pub payment_redirect_url: Option<String>,
}

/// Aggregate counts for the account dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSummary {
    pub total_orders: u64,
    pub pending: u64,
    pub delivered: u64,
    pub cancelled: u64,
    pub total_spent: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_status_wire_names() {
        assert_eq!("PENDING".parse::<OrderStatus>().unwrap(), OrderStatus::Pending);
        assert_eq!(
            "DELIVERED".parse::<OrderStatus>().unwrap(),
            OrderStatus::Delivered
        );
        assert_eq!(OrderStatus::Cancelled.to_string(), "CANCELLED");
    }
}
