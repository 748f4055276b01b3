use crate::models::{Order, OrderLine, OrderStatus};
use crate::repository::OrderRepository;
use brasa_catalog::ArticleRepository;
use brasa_core::{DeliveryMode, StaffRole, StaffRoster};
use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;

/// Kitchen scheduling rules
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct KitchenPolicy {
    /// Minutes added for delivery orders
    pub delivery_overhead_minutes: i64,
}

impl Default for KitchenPolicy {
    fn default() -> Self {
        Self {
            delivery_overhead_minutes: 10,
        }
    }
}

/// Estimates when an order will be ready from item prep time, the current
/// kitchen backlog, and cook headcount
pub struct KitchenLoadEstimator {
    articles: Arc<dyn ArticleRepository>,
    orders: Arc<dyn OrderRepository>,
    roster: Arc<dyn StaffRoster>,
    policy: KitchenPolicy,
}

impl KitchenLoadEstimator {
    pub fn new(
        articles: Arc<dyn ArticleRepository>,
        orders: Arc<dyn OrderRepository>,
        roster: Arc<dyn StaffRoster>,
        policy: KitchenPolicy,
    ) -> Self {
        Self {
            articles,
            orders,
            roster,
            policy,
        }
    }

    /// Estimated ready time for the order being created.
    ///
    /// now + own prep minutes + backlog minutes / cooks + delivery overhead.
    /// Zero cooks means no backlog wait is attributed, not an error. The
    /// backlog read is a snapshot; the estimate is approximate under
    /// concurrent transitions.
    pub async fn estimate(
        &self,
        order: &Order,
    ) -> Result<DateTime<Utc>, Box<dyn std::error::Error + Send + Sync>> {
        let item_minutes = self.prep_minutes(&order.lines).await?;

        let in_kitchen = self.orders.find_by_status(OrderStatus::Preparation).await?;
        let mut backlog_minutes: u32 = 0;
        for queued in &in_kitchen {
            backlog_minutes += self.prep_minutes(&queued.lines).await?;
        }

        let cooks = self.roster.count_by_role(StaffRole::Cook).await?;
        let queue_minutes = if cooks > 0 { backlog_minutes / cooks } else { 0 };

        let overhead_minutes = if order.delivery_mode == DeliveryMode::Delivery {
            self.policy.delivery_overhead_minutes
        } else {
            0
        };

        let total = item_minutes as i64 + queue_minutes as i64 + overhead_minutes;
        Ok(Utc::now() + Duration::minutes(total))
    }

    /// Prep minutes across lines: prepared articles count once per line,
    /// consumables contribute nothing
    async fn prep_minutes(
        &self,
        lines: &[OrderLine],
    ) -> Result<u32, Box<dyn std::error::Error + Send + Sync>> {
        let mut total = 0;
        for line in lines {
            if let Some(article) = self.articles.find(line.article_id).await? {
                total += article.prep_time_minutes();
            }
        }
        Ok(total)
    }
}
