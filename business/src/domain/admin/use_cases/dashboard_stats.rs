use async_trait::async_trait;

use crate::domain::dashboard::model::DashboardStats;
use crate::domain::errors::GatewayError;

pub struct DashboardStatsParams {
    pub month: u32,
    pub year: i32,
}

#[async_trait]
pub trait DashboardStatsUseCase: Send + Sync {
    async fn execute(&self, params: DashboardStatsParams) -> Result<DashboardStats, GatewayError>;
}
