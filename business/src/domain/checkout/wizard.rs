use regex::Regex;

use super::errors::CheckoutError;
use super::model::{DeliveryInfo, PaymentMethod};

const PHONE_PATTERN: &str = r"^[0-9]{10,11}$";

fn phone_is_valid(phone: &str) -> bool {
    Regex::new(PHONE_PATTERN)
        .map(|pattern| pattern.is_match(phone))
        .unwrap_or(false)
}

/// Wizard position. Steps advance strictly Delivery → Payment → Confirm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Delivery,
    Payment,
    Confirm,
}

/// Result of pressing back: the first step exits the wizard entirely,
/// later steps move one step up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackOutcome {
    ExitedToCart,
    MovedTo(Step),
}

/// Three-step linear checkout flow. Each advancement is gated by
/// synchronous validation of the data entered so far; the wizard itself
/// never talks to the backend.
#[derive(Debug, Default)]
pub struct CheckoutWizard {
    step: Option<Step>,
    delivery: Option<DeliveryInfo>,
    payment_method: Option<PaymentMethod>,
}

impl CheckoutWizard {
    pub fn new() -> Self {
        Self {
            step: Some(Step::Delivery),
            delivery: None,
            payment_method: None,
        }
    }

    pub fn step(&self) -> Option<Step> {
        self.step
    }

    fn validate_delivery(info: &DeliveryInfo) -> Result<(), CheckoutError> {
        if info.full_name.trim().is_empty() {
            return Err(CheckoutError::FullNameRequired);
        }
        if info.address.trim().is_empty() {
            return Err(CheckoutError::AddressRequired);
        }
        if !phone_is_valid(&info.phone) {
            return Err(CheckoutError::PhoneInvalid);
        }
        Ok(())
    }

    /// Submits the delivery form. A validation failure reports the
    /// offending field and leaves the wizard on the Delivery step.
    pub fn submit_delivery(&mut self, info: DeliveryInfo) -> Result<(), CheckoutError> {
        if self.step != Some(Step::Delivery) {
            return Err(CheckoutError::WrongStep);
        }
        Self::validate_delivery(&info)?;
        self.delivery = Some(info);
        self.step = Some(Step::Payment);
        Ok(())
    }

    pub fn select_payment(&mut self, method: PaymentMethod) -> Result<(), CheckoutError> {
        if self.step != Some(Step::Payment) {
            return Err(CheckoutError::WrongStep);
        }
        self.payment_method = Some(method);
        self.step = Some(Step::Confirm);
        Ok(())
    }

    pub fn back(&mut self) -> BackOutcome {
        match self.step {
            Some(Step::Confirm) => {
                self.step = Some(Step::Payment);
                BackOutcome::MovedTo(Step::Payment)
            }
            Some(Step::Payment) => {
                self.step = Some(Step::Delivery);
                BackOutcome::MovedTo(Step::Delivery)
            }
            _ => {
                self.step = None;
                BackOutcome::ExitedToCart
            }
        }
    }

    /// Hands out the validated form data for the single order-creation
    /// call. Only legal on the Confirm step.
    pub fn confirm(&self) -> Result<(DeliveryInfo, PaymentMethod), CheckoutError> {
        if self.step != Some(Step::Confirm) {
            return Err(CheckoutError::WrongStep);
        }
        match (&self.delivery, self.payment_method) {
            (Some(delivery), Some(method)) => Ok((delivery.clone(), method)),
            _ => Err(CheckoutError::WrongStep),
        }
    }
}
