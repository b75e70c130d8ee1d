use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::domain::dashboard::model::OrderLineRecord;
use crate::domain::errors::GatewayError;
use crate::domain::product::model::Product;

/// Product image attached to a create/update, sent as a multipart part.
#[derive(Debug, Clone)]
pub struct ProductImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Fields of an admin product create or update.
#[derive(Debug, Clone)]
pub struct ProductUpload {
    pub name: String,
    pub price: Decimal,
    pub description: String,
    pub category: Option<String>,
    pub in_stock: bool,
    pub image: Option<ProductImageUpload>,
}

/// Backend port for the admin surface: the flat order export feeding the
/// dashboard, and product CRUD with multipart image upload.
#[async_trait]
pub trait AdminGateway: Send + Sync {
    async fn order_lines(&self) -> Result<Vec<OrderLineRecord>, GatewayError>;
    async fn create_product(&self, upload: &ProductUpload) -> Result<Product, GatewayError>;
    async fn update_product(&self, id: &str, upload: &ProductUpload)
    -> Result<Product, GatewayError>;
    async fn delete_product(&self, id: &str) -> Result<(), GatewayError>;
}
