use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::domain::cart::model::CartItem;
use crate::domain::cart::totals::CartTotals;

/// Response code the payment gateway appends to the return URL on success.
pub const PAYMENT_SUCCESS_CODE: &str = "00";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    CashOnDelivery,
    Electronic,
}

/// Checkout form state. Discarded when the wizard exits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryInfo {
    pub full_name: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub note: Option<String>,
}

/// The order payload cached while the flow round-trips through the
/// external payment page. Serialized into the session store under the
/// pending-order key and read back after redirect-return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingOrder {
    pub items: Vec<CartItem>,
    pub delivery: DeliveryInfo,
    pub payment_method: PaymentMethod,
    pub coupon_code: Option<String>,
    pub totals: CartTotals,
}
