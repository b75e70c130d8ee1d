use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;

use business::domain::errors::GatewayError;
use business::domain::product::model::Product;
use business::domain::wishlist::gateway::WishlistGateway;

use crate::client::ApiClient;
use crate::error::{expect_success, read_json};
use crate::products::ProductDto;

pub struct WishlistGatewayHttp {
    api: ApiClient,
}

impl WishlistGatewayHttp {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl WishlistGateway for WishlistGatewayHttp {
    async fn list(&self) -> Result<Vec<Product>, GatewayError> {
        let response = self
            .api
            .client
            .get(self.api.url("/wishlist"))
            .header(AUTHORIZATION, self.api.auth_header())
            .send()
            .await;

        let dtos: Vec<ProductDto> = read_json(response).await?;
        dtos.into_iter().map(Product::try_from).collect()
    }

    async fn add(&self, product_id: &str) -> Result<(), GatewayError> {
        let response = self
            .api
            .client
            .post(self.api.url(&format!("/wishlist/{product_id}")))
            .header(AUTHORIZATION, self.api.auth_header())
            .send()
            .await;

        expect_success(response).await
    }

    async fn remove(&self, product_id: &str) -> Result<(), GatewayError> {
        let response = self
            .api
            .client
            .delete(self.api.url(&format!("/wishlist/{product_id}")))
            .header(AUTHORIZATION, self.api.auth_header())
            .send()
            .await;

        expect_success(response).await
    }
}
