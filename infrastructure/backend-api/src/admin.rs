use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::header::AUTHORIZATION;
use reqwest::multipart::{Form, Part};
use rust_decimal::Decimal;
use serde::Deserialize;

use business::domain::admin::gateway::{AdminGateway, ProductUpload};
use business::domain::dashboard::model::OrderLineRecord;
use business::domain::errors::GatewayError;
use business::domain::order::model::OrderStatus;
use business::domain::product::model::Product;

use crate::client::ApiClient;
use crate::error::{expect_success, read_json};
use crate::products::ProductDto;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrderLineRecordDto {
    order_id: String,
    product_name: String,
    quantity: u32,
    amount: f64,
    status: String,
    date: DateTime<Utc>,
}

impl TryFrom<OrderLineRecordDto> for OrderLineRecord {
    type Error = GatewayError;

    fn try_from(dto: OrderLineRecordDto) -> Result<Self, Self::Error> {
        Ok(OrderLineRecord {
            order_id: dto.order_id,
            product_name: dto.product_name,
            quantity: dto.quantity,
            amount: Decimal::try_from(dto.amount).map_err(|_| GatewayError::Decode)?,
            status: dto
                .status
                .parse::<OrderStatus>()
                .map_err(|_| GatewayError::Decode)?,
            date: dto.date,
        })
    }
}

pub struct AdminGatewayHttp {
    api: ApiClient,
}

impl AdminGatewayHttp {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Product fields plus the optional image as one multipart form.
    fn upload_form(upload: &ProductUpload) -> Form {
        let mut form = Form::new()
            .text("name", upload.name.clone())
            .text("price", upload.price.to_string())
            .text("description", upload.description.clone())
            .text("inStock", upload.in_stock.to_string());
        if let Some(category) = &upload.category {
            form = form.text("category", category.clone());
        }
        if let Some(image) = &upload.image {
            let part = Part::bytes(image.bytes.clone())
                .file_name(image.file_name.clone())
                .mime_str(&image.content_type)
                .unwrap_or_else(|_| Part::bytes(image.bytes.clone()));
            form = form.part("image", part);
        }
        form
    }
}

#[async_trait]
impl AdminGateway for AdminGatewayHttp {
    async fn order_lines(&self) -> Result<Vec<OrderLineRecord>, GatewayError> {
        let response = self
            .api
            .client
            .get(self.api.url("/admin/dashboard/order-lines"))
            .header(AUTHORIZATION, self.api.auth_header())
            .send()
            .await;

        let dtos: Vec<OrderLineRecordDto> = read_json(response).await?;
        dtos.into_iter().map(OrderLineRecord::try_from).collect()
    }

    async fn create_product(&self, upload: &ProductUpload) -> Result<Product, GatewayError> {
        let response = self
            .api
            .client
            .post(self.api.url("/admin/products"))
            .header(AUTHORIZATION, self.api.auth_header())
            .multipart(Self::upload_form(upload))
            .send()
            .await;

        let dto: ProductDto = read_json(response).await?;
        dto.try_into()
    }

    async fn update_product(
        &self,
        id: &str,
        upload: &ProductUpload,
    ) -> Result<Product, GatewayError> {
        let response = self
            .api
            .client
            .put(self.api.url(&format!("/admin/products/{id}")))
            .header(AUTHORIZATION, self.api.auth_header())
            .multipart(Self::upload_form(upload))
            .send()
            .await;

        let dto: ProductDto = read_json(response).await?;
        dto.try_into()
    }

    async fn delete_product(&self, id: &str) -> Result<(), GatewayError> {
        let response = self
            .api
            .client
            .delete(self.api.url(&format!("/admin/products/{id}")))
            .header(AUTHORIZATION, self.api.auth_header())
            .send()
            .await;

        expect_success(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_decode_order_line_record() {
        let dto: OrderLineRecordDto = serde_json::from_str(
            r#"{"orderId":"o-1","productName":"Mug","quantity":2,"amount":25.0,
                "status":"DELIVERED","date":"2025-03-10T08:30:00Z"}"#,
        )
        .unwrap();

        let record = OrderLineRecord::try_from(dto).unwrap();

        assert_eq!(record.status, OrderStatus::Delivered);
        assert_eq!(record.amount, Decimal::from(25));
    }
}
