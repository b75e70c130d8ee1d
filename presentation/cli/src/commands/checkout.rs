use business::domain::checkout::errors::CheckoutError;
use business::domain::checkout::model::{DeliveryInfo, PaymentMethod};
use business::domain::checkout::use_cases::finalize_payment::{
    FinalizeOutcome, FinalizePaymentParams,
};
use business::domain::checkout::use_cases::place_order::{PlaceOrderOutcome, PlaceOrderParams};
use business::domain::checkout::wizard::CheckoutWizard;

use crate::cli::{CheckoutAction, PaymentArg};
use crate::setup::dependency_injection::DependencyContainer;

pub async fn run(container: &DependencyContainer, action: CheckoutAction) -> anyhow::Result<()> {
    match action {
        CheckoutAction::Place {
            name,
            phone,
            address,
            city,
            note,
            payment,
        } => {
            place(
                container,
                DeliveryInfo {
                    full_name: name,
                    phone,
                    address,
                    city,
                    note,
                },
                payment,
            )
            .await
        }
        CheckoutAction::Finalize { return_url } => finalize(container, return_url).await,
    }
}

async fn place(
    container: &DependencyContainer,
    delivery: DeliveryInfo,
    payment: PaymentArg,
) -> anyhow::Result<()> {
    let method = match payment {
        PaymentArg::Cod => PaymentMethod::CashOnDelivery,
        PaymentArg::Electronic => PaymentMethod::Electronic,
    };

    // The wizard gates each step on local validation before anything is
    // sent to the backend.
    let mut wizard = CheckoutWizard::new();
    if let Err(err) = wizard.submit_delivery(delivery) {
        match err.field() {
            Some(field) => println!("Invalid {field}: {err}"),
            None => println!("{err}"),
        }
        return Ok(());
    }
    if let Err(err) = wizard.select_payment(method) {
        println!("{err}");
        return Ok(());
    }
    let (delivery, payment_method) = match wizard.confirm() {
        Ok(confirmed) => confirmed,
        Err(err) => {
            println!("{err}");
            return Ok(());
        }
    };

    match container
        .place_order
        .execute(PlaceOrderParams {
            delivery,
            payment_method,
        })
        .await
    {
        Ok(PlaceOrderOutcome::Placed { order_id }) => {
            println!("Order {order_id} placed");
        }
        Ok(PlaceOrderOutcome::RedirectToPayment { url }) => {
            println!("Complete the payment at:");
            println!("  {url}");
            println!("then run: storefront checkout finalize <return-url>");
        }
        Err(CheckoutError::Gateway(err)) => {
            println!("{}", err.user_message("checkout.place_failed"));
        }
        Err(err) => println!("{err}"),
    }
    Ok(())
}

async fn finalize(container: &DependencyContainer, return_url: String) -> anyhow::Result<()> {
    match container
        .finalize_payment
        .execute(FinalizePaymentParams { return_url })
        .await
    {
        Ok(FinalizeOutcome::Created { order_id }) => {
            println!("Payment confirmed, order {order_id} created");
        }
        Ok(FinalizeOutcome::AlreadyProcessed) => {
            println!("This payment was already processed");
        }
        Ok(FinalizeOutcome::NothingPending) => {
            println!("No pending order to finalize");
        }
        Ok(FinalizeOutcome::PaymentFailed { code }) => {
            println!("Payment failed (gateway code {code})");
        }
        Err(CheckoutError::Gateway(err)) => {
            println!("{}", err.user_message("checkout.finalize_failed"));
        }
        Err(err) => println!("{err}"),
    }
    Ok(())
}
