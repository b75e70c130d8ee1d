use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::header::AUTHORIZATION;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use business::domain::checkout::model::DeliveryInfo;
use business::domain::errors::GatewayError;
use business::domain::order::gateway::OrderGateway;
use business::domain::order::model::{
    CreatedOrder, NewOrder, Order, OrderLine, OrderStatus, OrderSummary,
};

use crate::client::ApiClient;
use crate::error::{expect_success, read_json};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NewOrderLineDto {
    product_id: String,
    product_name: String,
    unit_price: f64,
    quantity: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DeliveryDto {
    full_name: String,
    phone: String,
    address: String,
    city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NewOrderDto {
    items: Vec<NewOrderLineDto>,
    delivery: DeliveryDto,
    payment_method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    coupon_code: Option<String>,
    subtotal: f64,
    discount: f64,
    total: f64,
}

impl From<&NewOrder> for NewOrderDto {
    fn from(order: &NewOrder) -> Self {
        Self {
            items: order
                .items
                .iter()
                .map(|item| NewOrderLineDto {
                    product_id: item.product_id.clone(),
                    product_name: item.name.clone(),
                    unit_price: item.unit_price.to_f64().unwrap_or_default(),
                    quantity: item.quantity,
                })
                .collect(),
            delivery: DeliveryDto {
                full_name: order.delivery.full_name.clone(),
                phone: order.delivery.phone.clone(),
                address: order.delivery.address.clone(),
                city: order.delivery.city.clone(),
                note: order.delivery.note.clone(),
            },
            payment_method: order.payment_method.to_string(),
            coupon_code: order.coupon_code.clone(),
            subtotal: order.totals.subtotal.to_f64().unwrap_or_default(),
            discount: order.totals.discount.to_f64().unwrap_or_default(),
            total: order.totals.total.to_f64().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreatedOrderDto {
    order_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PayRedirectDto {
    redirect_url: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrderLineDto {
    product_id: String,
    product_name: String,
    unit_price: f64,
    quantity: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrderDeliveryDto {
    full_name: String,
    phone: String,
    address: String,
    city: String,
    #[serde(default)]
    note: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrderDto {
    id: String,
    #[serde(default)]
    items: Vec<OrderLineDto>,
    status: String,
    total: f64,
    created_at: DateTime<Utc>,
    #[serde(default)]
    delivery: Option<OrderDeliveryDto>,
}

impl TryFrom<OrderDto> for Order {
    type Error = GatewayError;

    fn try_from(dto: OrderDto) -> Result<Self, Self::Error> {
        let lines = dto
            .items
            .into_iter()
            .map(|line| {
                Ok(OrderLine {
                    product_id: line.product_id,
                    product_name: line.product_name,
                    unit_price: Decimal::try_from(line.unit_price)
                        .map_err(|_| GatewayError::Decode)?,
                    quantity: line.quantity,
                })
            })
            .collect::<Result<Vec<_>, GatewayError>>()?;

        Ok(Order {
            id: dto.id,
            lines,
            status: dto
                .status
                .parse::<OrderStatus>()
                .map_err(|_| GatewayError::Decode)?,
            total: Decimal::try_from(dto.total).map_err(|_| GatewayError::Decode)?,
            created_at: dto.created_at,
            delivery: dto.delivery.map(|delivery| DeliveryInfo {
                full_name: delivery.full_name,
                phone: delivery.phone,
                address: delivery.address,
                city: delivery.city,
                note: delivery.note,
            }),
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrderSummaryDto {
    total_orders: u64,
    pending: u64,
    delivered: u64,
    cancelled: u64,
    total_spent: f64,
}

pub struct OrderGatewayHttp {
    api: ApiClient,
}

impl OrderGatewayHttp {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl OrderGateway for OrderGatewayHttp {
    async fn create(&self, order: &NewOrder) -> Result<CreatedOrder, GatewayError> {
        let response = self
            .api
            .client
            .post(self.api.url("/orders"))
            .header(AUTHORIZATION, self.api.auth_header())
            .json(&NewOrderDto::from(order))
            .send()
            .await;

        let dto: CreatedOrderDto = read_json(response).await?;
        Ok(CreatedOrder {
            order_id: dto.order_id,
            payment_redirect_url: None,
        })
    }

    async fn payment_redirect(&self, order: &NewOrder) -> Result<String, GatewayError> {
        let response = self
            .api
            .client
            .post(self.api.url("/orders/pay-redirect"))
            .header(AUTHORIZATION, self.api.auth_header())
            .json(&NewOrderDto::from(order))
            .send()
            .await;

        let dto: PayRedirectDto = read_json(response).await?;
        Ok(dto.redirect_url)
    }

    async fn get_all(&self) -> Result<Vec<Order>, GatewayError> {
        let response = self
            .api
            .client
            .get(self.api.url("/orders"))
            .header(AUTHORIZATION, self.api.auth_header())
            .send()
            .await;

        let dtos: Vec<OrderDto> = read_json(response).await?;
        dtos.into_iter().map(Order::try_from).collect()
    }

    async fn get_by_id(&self, id: &str) -> Result<Order, GatewayError> {
        let response = self
            .api
            .client
            .get(self.api.url(&format!("/orders/{id}")))
            .header(AUTHORIZATION, self.api.auth_header())
            .send()
            .await;

        let dto: OrderDto = read_json(response).await?;
        dto.try_into()
    }

    async fn cancel(&self, id: &str) -> Result<(), GatewayError> {
        let response = self
            .api
            .client
            .post(self.api.url(&format!("/orders/{id}/cancel")))
            .header(AUTHORIZATION, self.api.auth_header())
            .send()
            .await;

        expect_success(response).await
    }

    async fn refund(&self, id: &str) -> Result<(), GatewayError> {
        let response = self
            .api
            .client
            .post(self.api.url(&format!("/orders/{id}/refund")))
            .header(AUTHORIZATION, self.api.auth_header())
            .send()
            .await;

        expect_success(response).await
    }

    async fn summary(&self) -> Result<OrderSummary, GatewayError> {
        let response = self
            .api
            .client
            .get(self.api.url("/orders/summary"))
            .header(AUTHORIZATION, self.api.auth_header())
            .send()
            .await;

        let dto: OrderSummaryDto = read_json(response).await?;
        Ok(OrderSummary {
            total_orders: dto.total_orders,
            pending: dto.pending,
            delivered: dto.delivered,
            cancelled: dto.cancelled,
            total_spent: Decimal::try_from(dto.total_spent).map_err(|_| GatewayError::Decode)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::cart::model::CartItem;
    use business::domain::cart::totals::CartTotals;
    use business::domain::checkout::model::PaymentMethod;

    #[test]
    fn should_decode_order_projection() {
        let dto: OrderDto = serde_json::from_str(
            r#"{"id":"o-1","status":"SHIPPING","total":45.5,
                "createdAt":"2025-03-01T10:00:00Z",
                "items":[{"productId":"p1","productName":"Mug","unitPrice":22.75,"quantity":2}]}"#,
        )
        .unwrap();

        let order = Order::try_from(dto).unwrap();

        assert_eq!(order.status, OrderStatus::Shipping);
        assert_eq!(order.lines.len(), 1);
        assert_eq!(order.lines[0].unit_price, Decimal::new(2275, 2));
    }

    #[test]
    fn should_reject_unknown_status() {
        let dto: OrderDto = serde_json::from_str(
            r#"{"id":"o-1","status":"TELEPORTED","total":1.0,
                "createdAt":"2025-03-01T10:00:00Z"}"#,
        )
        .unwrap();

        assert!(matches!(Order::try_from(dto).unwrap_err(), GatewayError::Decode));
    }

    #[test]
    fn should_serialize_payment_method_wire_name() {
        let order = NewOrder {
            items: vec![CartItem::new("p1", "Mug", Decimal::from(10), None, 1).unwrap()],
            delivery: DeliveryInfo {
                full_name: "Ada".to_string(),
                phone: "0123456789".to_string(),
                address: "12 Market Street".to_string(),
                city: "Springfield".to_string(),
                note: None,
            },
            payment_method: PaymentMethod::CashOnDelivery,
            coupon_code: None,
            totals: CartTotals::compute(Decimal::from(10), None),
        };

        let body = serde_json::to_value(NewOrderDto::from(&order)).unwrap();

        assert_eq!(body["paymentMethod"], "CASH_ON_DELIVERY");
        assert_eq!(body["items"][0]["productId"], "p1");
        assert!(body.get("couponCode").is_none());
    }
}
