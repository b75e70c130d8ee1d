use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::domain::order::model::OrderStatus;

/// One line of the flat order export the admin dashboard works from.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLineRecord {
    pub order_id: String,
    pub product_name: String,
    pub quantity: u32,
    pub amount: Decimal,
    pub status: OrderStatus,
    pub date: DateTime<Utc>,
}

/// Units sold per product within the selected month.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductSales {
    pub product_name: String,
    pub quantity: u64,
}

/// Distinct orders per status within the selected month.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusCount {
    pub status: OrderStatus,
    pub orders: u64,
}

/// Everything the dashboard renders for one month.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    pub month: u32,
    pub year: i32,
    pub product_sales: Vec<ProductSales>,
    pub status_distribution: Vec<StatusCount>,
    /// Sum of amounts over Delivered lines only.
    pub revenue: Decimal,
}
