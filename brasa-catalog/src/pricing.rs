use brasa_core::DeliveryMode;
use serde::{Deserialize, Serialize};

/// Channel discount rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingPolicy {
    /// Fraction taken off the total for take-away orders
    pub take_away_discount_rate: f64,

    /// Amount recorded on the invoice when the discount applies
    pub invoice_discount_amount: f64,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            take_away_discount_rate: 0.10,
            invoice_discount_amount: 10.0,
        }
    }
}

/// The discount decision for one order.
///
/// Computed once per order and consumed by both call sites: order pricing
/// applies `apply` exactly once, invoicing reads `invoice_amount`. Callers
/// must not apply the same decision to an already-discounted total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscountDecision {
    pub applied: bool,
    rate: f64,
    invoice_amount: f64,
}

impl DiscountDecision {
    /// Discounted total for the order
    pub fn apply(&self, total: f64) -> f64 {
        if self.applied {
            total * (1.0 - self.rate)
        } else {
            total
        }
    }

    /// Discount amount recorded on the invoice
    pub fn invoice_amount(&self) -> f64 {
        if self.applied {
            self.invoice_amount
        } else {
            0.0
        }
    }
}

impl PricingPolicy {
    /// Decide the discount for an order's delivery mode
    pub fn decide(&self, mode: DeliveryMode) -> DiscountDecision {
        DiscountDecision {
            applied: mode == DeliveryMode::TakeAway,
            rate: self.take_away_discount_rate,
            invoice_amount: self.invoice_discount_amount,
        }
    }
}
