use brasa_catalog::DiscountDecision;
use brasa_core::{DeliveryMode, PaymentMethod};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Order status in the lifecycle. Variant order is the lifecycle order:
/// transitions only ever move towards later variants.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Preparation,
    Billed,
}

/// The customer an order is billed and delivered to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

/// One article within an order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLine {
    pub article_id: Uuid,
    pub quantity: u32,
}

/// Input for creating an order; the lifecycle manager stamps the rest
#[derive(Debug, Clone)]
pub struct OrderDraft {
    pub customer: Customer,
    pub delivery_mode: DeliveryMode,
    pub payment_method: PaymentMethod,
    pub total: f64,
    pub lines: Vec<OrderLine>,
}

/// A customer's order, from creation through billing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub ordered_on: NaiveDate,
    pub status: OrderStatus,
    pub delivery_mode: DeliveryMode,
    pub payment_method: PaymentMethod,
    pub total: f64,
    pub estimated_ready_at: Option<DateTime<Utc>>,
    pub customer: Customer,
    pub branch_id: Option<Uuid>,
    pub lines: Vec<OrderLine>,
    pub invoice: Option<Invoice>,
}

impl Order {
    /// Stamp a draft into a pending order
    pub fn from_draft(draft: OrderDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            ordered_on: Utc::now().date_naive(),
            status: OrderStatus::Pending,
            delivery_mode: draft.delivery_mode,
            payment_method: draft.payment_method,
            total: draft.total,
            estimated_ready_at: None,
            customer: draft.customer,
            branch_id: None,
            lines: draft.lines,
            invoice: None,
        }
    }

    pub fn update_status(&mut self, new_status: OrderStatus) {
        self.status = new_status;
    }
}

/// Invoice for one order, created once on entering preparation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    pub id: Uuid,
    pub order_id: Uuid,
    pub billed_on: NaiveDate,
    pub discount_amount: f64,
    pub payment_method: PaymentMethod,
    pub total: f64,
}

impl Invoice {
    /// Build the invoice for an order, stamped with today's date.
    /// Payment method and total are copied from the order; the discount
    /// amount comes from the already-made discount decision.
    pub fn for_order(order: &Order, decision: &DiscountDecision) -> Self {
        Self {
            id: Uuid::new_v4(),
            order_id: order.id,
            billed_on: Utc::now().date_naive(),
            discount_amount: decision.invoice_amount(),
            payment_method: order.payment_method,
            total: order.total,
        }
    }
}
