use crate::domain::errors::{GatewayError, StorageError};

#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error("checkout.full_name_required")]
    FullNameRequired,
    #[error("checkout.address_required")]
    AddressRequired,
    #[error("checkout.phone_invalid")]
    PhoneInvalid,
    #[error("checkout.wrong_step")]
    WrongStep,
    #[error("checkout.cart_empty")]
    CartEmpty,
    #[error("checkout.invalid_return_url")]
    InvalidReturnUrl,
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    #[error("checkout.session")]
    Session(#[from] StorageError),
}

impl CheckoutError {
    /// The delivery-form field a validation failure belongs to, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            CheckoutError::FullNameRequired => Some("fullName"),
            CheckoutError::AddressRequired => Some("address"),
            CheckoutError::PhoneInvalid => Some("phone"),
            _ => None,
        }
    }
}
