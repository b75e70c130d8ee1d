use crate::domain::errors::GatewayError;

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("order.not_found")]
    NotFound,
    #[error(transparent)]
    Gateway(GatewayError),
}

impl From<GatewayError> for OrderError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::NotFound => OrderError::NotFound,
            other => OrderError::Gateway(other),
        }
    }
}
