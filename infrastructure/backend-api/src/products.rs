use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use rust_decimal::Decimal;
use serde::Deserialize;

use business::domain::errors::GatewayError;
use business::domain::product::gateway::ProductGateway;
use business::domain::product::model::Product;

use crate::client::ApiClient;
use crate::error::read_json;

/// Canonical catalog payload. The backend historically wrapped lists in
/// assorted container fields; deviations from this shape are treated as
/// backend defects, not probed for.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductDto {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
}

fn default_in_stock() -> bool {
    true
}

impl TryFrom<ProductDto> for Product {
    type Error = GatewayError;

    fn try_from(dto: ProductDto) -> Result<Self, Self::Error> {
        Ok(Product {
            id: dto.id,
            name: dto.name,
            price: Decimal::try_from(dto.price).map_err(|_| GatewayError::Decode)?,
            description: dto.description.unwrap_or_default(),
            category: dto.category,
            in_stock: dto.in_stock,
        })
    }
}

pub struct ProductGatewayHttp {
    api: ApiClient,
}

impl ProductGatewayHttp {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ProductGateway for ProductGatewayHttp {
    async fn list(&self, query: Option<&str>) -> Result<Vec<Product>, GatewayError> {
        let mut request = self
            .api
            .client
            .get(self.api.url("/products"))
            .header(AUTHORIZATION, self.api.auth_header());
        if let Some(query) = query {
            request = request.query(&[("search", query)]);
        }

        let dtos: Vec<ProductDto> = read_json(request.send().await).await?;
        dtos.into_iter().map(Product::try_from).collect()
    }

    async fn get_by_id(&self, id: &str) -> Result<Product, GatewayError> {
        let response = self
            .api
            .client
            .get(self.api.url(&format!("/products/{id}")))
            .header(AUTHORIZATION, self.api.auth_header())
            .send()
            .await;

        let dto: ProductDto = read_json(response).await?;
        dto.try_into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_decode_canonical_product_payload() {
        let dto: ProductDto = serde_json::from_str(
            r#"{"id":"p1","name":"Mug","price":12.5,"description":"Ceramic","inStock":false}"#,
        )
        .unwrap();

        let product = Product::try_from(dto).unwrap();

        assert_eq!(product.price, Decimal::new(125, 1));
        assert!(!product.in_stock);
        assert_eq!(product.description, "Ceramic");
    }

    #[test]
    fn should_default_optional_fields() {
        let dto: ProductDto =
            serde_json::from_str(r#"{"id":"p1","name":"Mug","price":3.0}"#).unwrap();

        let product = Product::try_from(dto).unwrap();

        assert!(product.in_stock);
        assert!(product.category.is_none());
    }
}
