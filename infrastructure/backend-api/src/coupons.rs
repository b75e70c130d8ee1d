use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::header::AUTHORIZATION;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;

use business::domain::coupon::gateway::CouponGateway;
use business::domain::coupon::model::{Coupon, DiscountType};
use business::domain::errors::GatewayError;

use crate::client::ApiClient;
use crate::error::read_json;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CouponDto {
    code: String,
    discount_type: String,
    discount_value: f64,
    #[serde(default)]
    min_purchase_amount: f64,
    expiry_date: DateTime<Utc>,
}

impl TryFrom<CouponDto> for Coupon {
    type Error = GatewayError;

    fn try_from(dto: CouponDto) -> Result<Self, Self::Error> {
        Ok(Coupon {
            code: dto.code,
            discount_type: dto
                .discount_type
                .parse::<DiscountType>()
                .map_err(|_| GatewayError::Decode)?,
            discount_value: Decimal::try_from(dto.discount_value)
                .map_err(|_| GatewayError::Decode)?,
            min_purchase_amount: Decimal::try_from(dto.min_purchase_amount)
                .map_err(|_| GatewayError::Decode)?,
            expiry_date: dto.expiry_date,
        })
    }
}

pub struct CouponGatewayHttp {
    api: ApiClient,
}

impl CouponGatewayHttp {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl CouponGateway for CouponGatewayHttp {
    async fn verify(&self, code: &str) -> Result<Coupon, GatewayError> {
        let response = self
            .api
            .client
            .post(self.api.url("/coupons/verify"))
            .header(AUTHORIZATION, self.api.auth_header())
            .json(&json!({ "code": code }))
            .send()
            .await;

        let dto: CouponDto = read_json(response).await?;
        dto.try_into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_decode_percentage_coupon() {
        let dto: CouponDto = serde_json::from_str(
            r#"{"code":"SAVE10","discountType":"PERCENTAGE","discountValue":10.0,
                "minPurchaseAmount":50.0,"expiryDate":"2026-12-31T00:00:00Z"}"#,
        )
        .unwrap();

        let coupon = Coupon::try_from(dto).unwrap();

        assert_eq!(coupon.discount_type, DiscountType::Percentage);
        assert_eq!(coupon.min_purchase_amount, Decimal::from(50));
    }

    #[test]
    fn should_reject_unknown_discount_type() {
        let dto: CouponDto = serde_json::from_str(
            r#"{"code":"X","discountType":"BOGOF","discountValue":1.0,
                "expiryDate":"2026-12-31T00:00:00Z"}"#,
        )
        .unwrap();

        let result = Coupon::try_from(dto);

        assert!(matches!(result.unwrap_err(), GatewayError::Decode));
    }
}
