use crate::models::Order;
use async_trait::async_trait;
use std::sync::Mutex;

/// Invoicing collaborator: renders an invoice document for an order
#[async_trait]
pub trait InvoiceRenderer: Send + Sync {
    async fn render(
        &self,
        order: &Order,
    ) -> Result<Vec<u8>, Box<dyn std::error::Error + Send + Sync>>;
}

/// Notification collaborator: delivers a document to a customer address
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(
        &self,
        document: &[u8],
        recipient: &str,
        subject: &str,
        body: &str,
        filename: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

/// Renders the invoice as a JSON document (stand-in for PDF rendering)
pub struct MockInvoiceRenderer;

#[async_trait]
impl InvoiceRenderer for MockInvoiceRenderer {
    async fn render(
        &self,
        order: &Order,
    ) -> Result<Vec<u8>, Box<dyn std::error::Error + Send + Sync>> {
        let invoice = order
            .invoice
            .as_ref()
            .ok_or("Order has no invoice to render")?;

        let document = serde_json::json!({
            "invoice_id": invoice.id,
            "order_id": order.id,
            "billed_on": invoice.billed_on,
            "customer": order.customer.name,
            "total": invoice.total,
            "discount_amount": invoice.discount_amount,
        });

        Ok(document.to_string().into_bytes())
    }
}

/// A notification the mock notifier recorded instead of sending
#[derive(Debug, Clone)]
pub struct SentNotification {
    pub recipient: String,
    pub subject: String,
    pub body: String,
    pub filename: String,
    pub document: Vec<u8>,
}

/// Records notifications; can simulate a delivery failure
pub struct MockNotifier {
    fail: bool,
    sent: Mutex<Vec<SentNotification>>,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self {
            fail: false,
            sent: Mutex::new(Vec::new()),
        }
    }

    /// A notifier whose every send fails
    pub fn failing() -> Self {
        Self {
            fail: true,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<SentNotification> {
        self.sent.lock().unwrap().clone()
    }
}

impl Default for MockNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for MockNotifier {
    async fn send(
        &self,
        document: &[u8],
        recipient: &str,
        subject: &str,
        body: &str,
        filename: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if self.fail {
            return Err("Simulated mail delivery failure".into());
        }

        self.sent.lock().unwrap().push(SentNotification {
            recipient: recipient.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
            filename: filename.to_string(),
            document: document.to_vec(),
        });

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Customer, Invoice, Order, OrderDraft};
    use brasa_catalog::PricingPolicy;
    use brasa_core::{DeliveryMode, PaymentMethod};
    use uuid::Uuid;

    fn billed_order() -> Order {
        let mut order = Order::from_draft(OrderDraft {
            customer: Customer {
                id: Uuid::new_v4(),
                name: "Ada Vargas".to_string(),
                email: "ada@example.com".to_string(),
            },
            delivery_mode: DeliveryMode::TakeAway,
            payment_method: PaymentMethod::Cash,
            total: 90.0,
            lines: vec![],
        });
        let decision = PricingPolicy::default().decide(order.delivery_mode);
        order.invoice = Some(Invoice::for_order(&order, &decision));
        order
    }

    #[tokio::test]
    async fn test_renderer_embeds_invoice_details() {
        let order = billed_order();

        let bytes = MockInvoiceRenderer.render(&order).await.unwrap();
        let document: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(document["order_id"], serde_json::json!(order.id));
        assert_eq!(document["discount_amount"], serde_json::json!(10.0));
    }

    #[tokio::test]
    async fn test_renderer_rejects_order_without_invoice() {
        let mut order = billed_order();
        order.invoice = None;

        assert!(MockInvoiceRenderer.render(&order).await.is_err());
    }

    #[tokio::test]
    async fn test_notifier_records_sends() {
        let notifier = MockNotifier::new();

        notifier
            .send(b"doc", "ada@example.com", "subject", "body", "invoice.pdf")
            .await
            .unwrap();

        let sent = notifier.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].recipient, "ada@example.com");
        assert_eq!(sent[0].filename, "invoice.pdf");
    }

    #[tokio::test]
    async fn test_failing_notifier_fails() {
        let notifier = MockNotifier::failing();

        let result = notifier
            .send(b"doc", "ada@example.com", "subject", "body", "invoice.pdf")
            .await;

        assert!(result.is_err());
        assert!(notifier.sent().is_empty());
    }
}
