use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::admin::gateway::AdminGateway;
use crate::domain::admin::use_cases::dashboard_stats::{DashboardStatsParams, DashboardStatsUseCase};
use crate::domain::dashboard::aggregation::stats_for_month;
use crate::domain::dashboard::model::DashboardStats;
use crate::domain::errors::GatewayError;
use crate::domain::logger::Logger;

/// Aggregates whatever page of the order export the backend returned;
/// the source is not paginated before aggregating.
pub struct DashboardStatsUseCaseImpl {
    pub admin: Arc<dyn AdminGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DashboardStatsUseCase for DashboardStatsUseCaseImpl {
    async fn execute(&self, params: DashboardStatsParams) -> Result<DashboardStats, GatewayError> {
        let records = self.admin.order_lines().await?;
        self.logger.debug(&format!(
            "Aggregating {} order line(s) for {}-{:02}",
            records.len(),
            params.year,
            params.month
        ));
        Ok(stats_for_month(&records, params.month, params.year))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::application::cart::add_item::tests::NullLogger;
    use crate::domain::admin::gateway::ProductUpload;
    use crate::domain::dashboard::model::OrderLineRecord;
    use crate::domain::order::model::OrderStatus;
    use crate::domain::product::model::Product;
    use chrono::{TimeZone, Utc};
    use mockall::mock;
    use rust_decimal::Decimal;

    mock! {
        pub Admin {}

        #[async_trait]
        impl AdminGateway for Admin {
            async fn order_lines(&self) -> Result<Vec<OrderLineRecord>, GatewayError>;
            async fn create_product(&self, upload: &ProductUpload) -> Result<Product, GatewayError>;
            async fn update_product(&self, id: &str, upload: &ProductUpload) -> Result<Product, GatewayError>;
            async fn delete_product(&self, id: &str) -> Result<(), GatewayError>;
        }
    }

    fn line(product: &str, quantity: u32, month: u32) -> OrderLineRecord {
        OrderLineRecord {
            order_id: format!("o-{product}-{month}"),
            product_name: product.to_string(),
            quantity,
            amount: Decimal::from(10),
            status: OrderStatus::Delivered,
            date: Utc.with_ymd_and_hms(2025, month, 5, 9, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn should_aggregate_only_the_selected_month() {
        let mut admin = MockAdmin::new();
        admin.expect_order_lines().returning(|| {
            Ok(vec![line("Mug", 2, 3), line("Mug", 3, 3), line("Mug", 9, 4)])
        });
        let use_case = DashboardStatsUseCaseImpl {
            admin: Arc::new(admin),
            logger: Arc::new(NullLogger),
        };

        let stats = use_case
            .execute(DashboardStatsParams { month: 3, year: 2025 })
            .await
            .unwrap();

        assert_eq!(stats.product_sales.len(), 1);
        assert_eq!(stats.product_sales[0].quantity, 5);
    }
}
