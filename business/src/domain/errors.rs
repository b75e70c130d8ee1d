/// Gateway errors for the domain layer, raised by any backend port.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GatewayError {
    #[error("gateway.not_found")]
    NotFound,
    #[error("gateway.unauthorized")]
    Unauthorized,
    /// Human-readable message supplied by the backend error body.
    /// Preferred over the code identifier when presenting to the user.
    #[error("{message}")]
    Backend { message: String },
    #[error("gateway.network")]
    Network,
    #[error("gateway.decode")]
    Decode,
}

impl GatewayError {
    pub fn backend(message: impl Into<String>) -> Self {
        GatewayError::Backend {
            message: message.into(),
        }
    }

    /// The message to show the user: the backend's own wording when it sent
    /// one, otherwise the caller's fallback identifier.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            GatewayError::Backend { message } => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// Errors raised by session-local storage ports.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage.io")]
    Io,
    #[error("storage.corrupt")]
    Corrupt,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_prefer_backend_message_when_present() {
        let err = GatewayError::backend("Coupon has expired");
        assert_eq!(
            err.user_message("coupon.verify_failed"),
            "Coupon has expired"
        );
    }

    #[test]
    fn should_fall_back_to_identifier_when_no_backend_message() {
        let err = GatewayError::Network;
        assert_eq!(
            err.user_message("coupon.verify_failed"),
            "coupon.verify_failed"
        );
    }
}
