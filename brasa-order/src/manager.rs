use crate::billing::{InvoiceRenderer, Notifier};
use crate::estimator::{KitchenLoadEstimator, KitchenPolicy};
use crate::models::{Invoice, Order, OrderDraft, OrderStatus};
use crate::repository::{InvoiceRepository, OrderRepository};
use brasa_catalog::{ArticleRepository, InventoryChecker, InventoryError, PricingPolicy, StockDemand};
use brasa_core::StaffRoster;
use std::sync::Arc;
use uuid::Uuid;

/// Owns order creation and status transitions, and the side effects they
/// trigger: stock decrements, discount pricing, ready-time estimation,
/// invoice creation and customer notification
pub struct OrderManager {
    orders: Arc<dyn OrderRepository>,
    invoices: Arc<dyn InvoiceRepository>,
    articles: Arc<dyn ArticleRepository>,
    inventory: InventoryChecker,
    estimator: KitchenLoadEstimator,
    pricing: PricingPolicy,
    renderer: Arc<dyn InvoiceRenderer>,
    notifier: Arc<dyn Notifier>,
}

impl OrderManager {
    pub fn new(
        orders: Arc<dyn OrderRepository>,
        invoices: Arc<dyn InvoiceRepository>,
        articles: Arc<dyn ArticleRepository>,
        roster: Arc<dyn StaffRoster>,
        renderer: Arc<dyn InvoiceRenderer>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self::with_policies(
            orders,
            invoices,
            articles,
            roster,
            renderer,
            notifier,
            PricingPolicy::default(),
            KitchenPolicy::default(),
        )
    }

    #[allow(clippy::too_many_arguments)]
    pub fn with_policies(
        orders: Arc<dyn OrderRepository>,
        invoices: Arc<dyn InvoiceRepository>,
        articles: Arc<dyn ArticleRepository>,
        roster: Arc<dyn StaffRoster>,
        renderer: Arc<dyn InvoiceRenderer>,
        notifier: Arc<dyn Notifier>,
        pricing: PricingPolicy,
        kitchen: KitchenPolicy,
    ) -> Self {
        Self {
            inventory: InventoryChecker::new(articles.clone()),
            estimator: KitchenLoadEstimator::new(
                articles.clone(),
                orders.clone(),
                roster,
                kitchen,
            ),
            orders,
            invoices,
            articles,
            pricing,
            renderer,
            notifier,
        }
    }

    /// Create a new order: stamp it, derive its branch, reserve stock,
    /// apply the channel discount, estimate the ready time, persist.
    ///
    /// Creation is atomic as a unit: any failure after the stock is
    /// reserved, in the estimate or in the final persist, releases the
    /// stock taken for this order before the error surfaces.
    pub async fn create(&self, draft: OrderDraft) -> Result<Order, OrderError> {
        if draft.total < 0.0 {
            return Err(OrderError::Validation(
                "order total must be non-negative".to_string(),
            ));
        }

        let mut order = Order::from_draft(draft);

        // The first line's article decides the branch
        if let Some(line) = order.lines.first() {
            let article = self
                .articles
                .find(line.article_id)
                .await
                .map_err(OrderError::Storage)?
                .ok_or(InventoryError::UnknownArticle(line.article_id))?;
            order.branch_id = article.branch_id;
        }

        let demands: Vec<StockDemand> = order
            .lines
            .iter()
            .map(|line| StockDemand {
                article_id: line.article_id,
                quantity: line.quantity,
            })
            .collect();
        let taken = self.inventory.reserve(&demands).await?;

        let decision = self.pricing.decide(order.delivery_mode);
        order.total = decision.apply(order.total);

        // Any failure from here on must give the reserved stock back
        if let Err(err) = self.estimate_and_persist(&mut order).await {
            if let Err(release_err) = self.inventory.release(&taken).await {
                tracing::warn!(
                    order_id = %order.id,
                    "Could not restore stock after aborted creation: {}",
                    release_err
                );
            }
            return Err(err);
        }

        tracing::info!(
            order_id = %order.id,
            mode = ?order.delivery_mode,
            total = order.total,
            "Created order"
        );
        Ok(order)
    }

    /// Move an order to a new status.
    ///
    /// Entering PREPARATION creates the order's invoice, persisted only
    /// after the order save succeeds so a failed save cannot leave an
    /// orphaned invoice behind.
    /// Entering BILLED renders the invoice and mails it to the customer; a
    /// rendering or delivery failure aborts the transition before the order
    /// is persisted, so the stored status never advances past a failed
    /// notification and the caller may retry the whole transition.
    pub async fn transition(
        &self,
        id: Uuid,
        new_status: OrderStatus,
    ) -> Result<Order, OrderError> {
        let mut order = self
            .orders
            .find_by_id(id)
            .await
            .map_err(OrderError::Storage)?
            .ok_or(OrderError::NotFound(id))?;

        // Lifecycle only moves forward
        if new_status <= order.status {
            return Err(OrderError::InvalidTransition {
                from: order.status,
                to: new_status,
            });
        }
        order.update_status(new_status);

        if new_status == OrderStatus::Preparation {
            let decision = self.pricing.decide(order.delivery_mode);
            order.invoice = Some(Invoice::for_order(&order, &decision));
        }

        if new_status == OrderStatus::Billed {
            self.send_invoice(&order)
                .await
                .map_err(|source| OrderError::Notification {
                    order_id: order.id,
                    source,
                })?;
        }

        self.orders.save(&order).await.map_err(OrderError::Storage)?;

        // The invoice row goes in only once the order save has stuck; a
        // failed save leaves the stored status behind, so a retried
        // transition cannot mint a second invoice for the same order.
        if new_status == OrderStatus::Preparation {
            if let Some(invoice) = &order.invoice {
                self.invoices
                    .save(invoice)
                    .await
                    .map_err(OrderError::Storage)?;
            }
        }

        tracing::info!(order_id = %order.id, status = ?new_status, "Order transitioned");
        Ok(order)
    }

    /// All orders currently in the given status (the kitchen queue view)
    pub async fn find_by_status(&self, status: OrderStatus) -> Result<Vec<Order>, OrderError> {
        self.orders
            .find_by_status(status)
            .await
            .map_err(OrderError::Storage)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, OrderError> {
        self.orders.find_by_id(id).await.map_err(OrderError::Storage)
    }

    async fn estimate_and_persist(&self, order: &mut Order) -> Result<(), OrderError> {
        order.estimated_ready_at = Some(
            self.estimator
                .estimate(order)
                .await
                .map_err(OrderError::Storage)?,
        );
        self.orders.save(order).await.map_err(OrderError::Storage)
    }

    async fn send_invoice(
        &self,
        order: &Order,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let document = self.renderer.render(order).await?;
        self.notifier
            .send(
                &document,
                &order.customer.email,
                &format!("Invoice for order {}", order.id),
                "Please find attached the invoice for your order.",
                &format!("invoice_{}.pdf", order.id),
            )
            .await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(Uuid),

    #[error("Invalid state transition from {from:?} to {to:?}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    #[error(transparent)]
    Stock(#[from] InventoryError),

    #[error("Order validation failed: {0}")]
    Validation(String),

    #[error("Failed to deliver invoice for order {order_id}: {source}")]
    Notification {
        order_id: Uuid,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Order storage failed: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}
