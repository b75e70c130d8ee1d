use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::GatewayError;
use crate::domain::logger::Logger;
use crate::domain::product::gateway::ProductGateway;
use crate::domain::product::model::Product;
use crate::domain::product::use_cases::browse::{BrowseProductsParams, BrowseProductsUseCase};

pub struct BrowseProductsUseCaseImpl {
    pub products: Arc<dyn ProductGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl BrowseProductsUseCase for BrowseProductsUseCaseImpl {
    async fn execute(&self, params: BrowseProductsParams) -> Result<Vec<Product>, GatewayError> {
        let products = self.products.list(params.query.as_deref()).await?;
        self.logger
            .debug(&format!("Catalog returned {} product(s)", products.len()));
        Ok(products)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::application::cart::add_item::tests::NullLogger;
    use mockall::mock;
    use rust_decimal::Decimal;

    mock! {
        pub Products {}

        #[async_trait]
        impl ProductGateway for Products {
            #[mockall::concretize]
            async fn list(&self, query: Option<&str>) -> Result<Vec<Product>, GatewayError>;
            async fn get_by_id(&self, id: &str) -> Result<Product, GatewayError>;
        }
    }

    pub(crate) fn product(id: &str, name: &str) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            price: Decimal::from(20),
            description: String::new(),
            category: None,
            in_stock: true,
        }
    }

    #[tokio::test]
    async fn should_pass_search_query_through() {
        let mut products = MockProducts::new();
        products
            .expect_list()
            .withf(|query| *query == Some("mug"))
            .returning(|_| Ok(vec![product("p1", "Mug")]));
        let use_case = BrowseProductsUseCaseImpl {
            products: Arc::new(products),
            logger: Arc::new(NullLogger),
        };

        let result = use_case
            .execute(BrowseProductsParams {
                query: Some("mug".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(result.len(), 1);
    }
}
