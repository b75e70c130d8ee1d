use business::domain::order::errors::OrderError;
use business::domain::order::use_cases::cancel::CancelOrderParams;
use business::domain::order::use_cases::get_by_id::GetOrderByIdParams;
use business::domain::order::use_cases::refund::RefundOrderParams;

use crate::cli::OrdersAction;
use crate::render::{money, table};
use crate::setup::dependency_injection::DependencyContainer;

pub async fn run(
    container: &DependencyContainer,
    action: Option<OrdersAction>,
) -> anyhow::Result<()> {
    match action.unwrap_or(OrdersAction::List) {
        OrdersAction::List => list(container).await,
        OrdersAction::Show { id } => show(container, id).await,
        OrdersAction::Cancel { id } => {
            match container
                .cancel_order
                .execute(CancelOrderParams { id: id.clone() })
                .await
            {
                Ok(()) => println!("Order {id} cancelled"),
                Err(err) => println!("{}", display(err, "order.cancel_failed")),
            }
            Ok(())
        }
        OrdersAction::Refund { id } => {
            match container
                .refund_order
                .execute(RefundOrderParams { id: id.clone() })
                .await
            {
                Ok(()) => println!("Refund requested for order {id}"),
                Err(err) => println!("{}", display(err, "order.refund_failed")),
            }
            Ok(())
        }
    }
}

fn display(err: OrderError, fallback: &str) -> String {
    match err {
        OrderError::Gateway(inner) => inner.user_message(fallback),
        other => other.to_string(),
    }
}

async fn list(container: &DependencyContainer) -> anyhow::Result<()> {
    match container.get_all_orders.execute().await {
        Ok(orders) => {
            let rows = orders
                .into_iter()
                .map(|order| {
                    vec![
                        order.id,
                        order.status.to_string(),
                        money(order.total),
                        order.created_at.format("%Y-%m-%d %H:%M").to_string(),
                    ]
                })
                .collect();
            println!("{}", table(&["ID", "STATUS", "TOTAL", "PLACED"], rows));
        }
        Err(err) => println!("{}", display(err, "order.list_failed")),
    }
    Ok(())
}

async fn show(container: &DependencyContainer, id: String) -> anyhow::Result<()> {
    match container.get_order.execute(GetOrderByIdParams { id }).await {
        Ok(order) => {
            println!("Order {} — {}", order.id, order.status);
            let rows = order
                .lines
                .iter()
                .map(|line| {
                    vec![
                        line.product_name.clone(),
                        money(line.unit_price),
                        line.quantity.to_string(),
                    ]
                })
                .collect();
            println!("{}", table(&["PRODUCT", "PRICE", "QTY"], rows));
            println!("Total: {}", money(order.total));
            if let Some(delivery) = &order.delivery {
                println!(
                    "Deliver to {} — {}, {}",
                    delivery.full_name, delivery.address, delivery.city
                );
            }
        }
        Err(err) => println!("{}", display(err, "order.not_found")),
    }
    Ok(())
}

pub async fn summary(container: &DependencyContainer) -> anyhow::Result<()> {
    match container.order_summary.execute().await {
        Ok(summary) => {
            println!("Orders: {}", summary.total_orders);
            println!("  pending:   {}", summary.pending);
            println!("  delivered: {}", summary.delivered);
            println!("  cancelled: {}", summary.cancelled);
            println!("Total spent: {}", money(summary.total_spent));
        }
        Err(err) => println!("{}", display(err, "order.summary_failed")),
    }
    Ok(())
}
