use crate::models::{Invoice, Order, OrderStatus};
use async_trait::async_trait;
use uuid::Uuid;

/// Repository trait for order persistence
#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn save(&self, order: &Order) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<Order>, Box<dyn std::error::Error + Send + Sync>>;

    async fn find_by_status(
        &self,
        status: OrderStatus,
    ) -> Result<Vec<Order>, Box<dyn std::error::Error + Send + Sync>>;
}

/// Repository trait for invoice persistence
#[async_trait]
pub trait InvoiceRepository: Send + Sync {
    async fn save(&self, invoice: &Invoice)
        -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
