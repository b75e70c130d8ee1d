use crate::domain::errors::GatewayError;

#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("notification.not_found")]
    NotFound,
    #[error(transparent)]
    Gateway(GatewayError),
}

impl From<GatewayError> for NotificationError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::NotFound => NotificationError::NotFound,
            other => NotificationError::Gateway(other),
        }
    }
}
