use std::collections::{HashMap, HashSet};

use chrono::Datelike;
use rust_decimal::Decimal;

use crate::domain::order::model::OrderStatus;

use super::model::{DashboardStats, OrderLineRecord, ProductSales, StatusCount};

const STATUS_ORDER: [OrderStatus; 6] = [
    OrderStatus::Pending,
    OrderStatus::Confirmed,
    OrderStatus::Shipping,
    OrderStatus::Delivered,
    OrderStatus::Cancelled,
    OrderStatus::Refunded,
];

/// Filter-group-sort pipeline over whatever page of records the backend
/// returned. The source is not paginated before aggregating.
pub fn stats_for_month(records: &[OrderLineRecord], month: u32, year: i32) -> DashboardStats {
    let filtered: Vec<&OrderLineRecord> = records
        .iter()
        .filter(|record| record.date.month() == month && record.date.year() == year)
        .collect();

    DashboardStats {
        month,
        year,
        product_sales: product_sales(&filtered),
        status_distribution: status_distribution(&filtered),
        revenue: revenue(&filtered),
    }
}

/// Units per product name, most sold first. Name breaks ties so the
/// ordering is stable for rendering.
fn product_sales(records: &[&OrderLineRecord]) -> Vec<ProductSales> {
    let mut by_name: HashMap<&str, u64> = HashMap::new();
    for record in records {
        *by_name.entry(record.product_name.as_str()).or_default() += u64::from(record.quantity);
    }

    let mut sales: Vec<ProductSales> = by_name
        .into_iter()
        .map(|(product_name, quantity)| ProductSales {
            product_name: product_name.to_string(),
            quantity,
        })
        .collect();
    sales.sort_by(|a, b| {
        b.quantity
            .cmp(&a.quantity)
            .then_with(|| a.product_name.cmp(&b.product_name))
    });
    sales
}

/// Distinct orders per status. Lines of the same order count once.
fn status_distribution(records: &[&OrderLineRecord]) -> Vec<StatusCount> {
    let mut orders_by_status: HashMap<OrderStatus, HashSet<&str>> = HashMap::new();
    for record in records {
        orders_by_status
            .entry(record.status)
            .or_default()
            .insert(record.order_id.as_str());
    }

    STATUS_ORDER
        .iter()
        .filter_map(|status| {
            orders_by_status.get(status).map(|orders| StatusCount {
                status: *status,
                orders: orders.len() as u64,
            })
        })
        .collect()
}

fn revenue(records: &[&OrderLineRecord]) -> Decimal {
    records
        .iter()
        .filter(|record| record.status == OrderStatus::Delivered)
        .map(|record| record.amount)
        .sum()
}
