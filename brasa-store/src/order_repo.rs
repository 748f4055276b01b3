use async_trait::async_trait;
use brasa_order::{Invoice, InvoiceRepository, Order, OrderRepository, OrderStatus};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory order store; `save` upserts, so creation and transitions share it
pub struct MemoryOrderRepository {
    orders: RwLock<HashMap<Uuid, Order>>,
}

impl MemoryOrderRepository {
    pub fn new() -> Self {
        Self {
            orders: RwLock::new(HashMap::new()),
        }
    }

    pub async fn count(&self) -> usize {
        self.orders.read().await.len()
    }
}

impl Default for MemoryOrderRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderRepository for MemoryOrderRepository {
    async fn save(&self, order: &Order) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.orders.write().await.insert(order.id, order.clone());
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<Order>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.orders.read().await.get(&id).cloned())
    }

    async fn find_by_status(
        &self,
        status: OrderStatus,
    ) -> Result<Vec<Order>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self
            .orders
            .read()
            .await
            .values()
            .filter(|o| o.status == status)
            .cloned()
            .collect())
    }
}

/// In-memory invoice store
pub struct MemoryInvoiceRepository {
    invoices: RwLock<HashMap<Uuid, Invoice>>,
}

impl MemoryInvoiceRepository {
    pub fn new() -> Self {
        Self {
            invoices: RwLock::new(HashMap::new()),
        }
    }

    pub async fn find_by_order(&self, order_id: Uuid) -> Option<Invoice> {
        self.invoices
            .read()
            .await
            .values()
            .find(|i| i.order_id == order_id)
            .cloned()
    }

    pub async fn count(&self) -> usize {
        self.invoices.read().await.len()
    }
}

impl Default for MemoryInvoiceRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InvoiceRepository for MemoryInvoiceRepository {
    async fn save(
        &self,
        invoice: &Invoice,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.invoices
            .write()
            .await
            .insert(invoice.id, invoice.clone());
        Ok(())
    }
}
