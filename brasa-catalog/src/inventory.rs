use crate::article::Article;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

/// Stock drawn from one consumable article
#[derive(Debug, Clone, PartialEq)]
pub struct StockDemand {
    pub article_id: Uuid,
    pub quantity: u32,
}

/// A committed (or planned) stock decrement against one article
#[derive(Debug, Clone, PartialEq)]
pub struct StockDecrement {
    pub article_id: Uuid,
    pub amount: f64,
}

/// Article persistence collaborator.
///
/// `decrement_stock` is the serialization point for stock: implementations
/// must validate and apply the whole batch under a single guard (lock, row
/// lock, or transaction), so two racing orders cannot both pass the same
/// check. All-or-nothing: on failure no decrement in the batch is applied.
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    async fn find(
        &self,
        id: Uuid,
    ) -> Result<Option<Article>, Box<dyn std::error::Error + Send + Sync>>;

    async fn decrement_stock(&self, decrements: &[StockDecrement]) -> Result<(), InventoryError>;

    /// Add stock back, compensating a committed decrement. Never fails a check.
    async fn restore_stock(&self, decrements: &[StockDecrement]) -> Result<(), InventoryError>;
}

/// Verifies and decrements stock for the consumable articles of an order
pub struct InventoryChecker {
    articles: Arc<dyn ArticleRepository>,
}

impl InventoryChecker {
    pub fn new(articles: Arc<dyn ArticleRepository>) -> Self {
        Self { articles }
    }

    /// Resolve the demands into per-article decrements and commit them.
    ///
    /// Prepared articles are skipped: their own composition is not
    /// stock-tracked at this layer. Returns the decrements actually taken
    /// so the caller can `release` them if a later step fails.
    pub async fn reserve(
        &self,
        demands: &[StockDemand],
    ) -> Result<Vec<StockDecrement>, InventoryError> {
        let mut plan = Vec::new();

        for demand in demands {
            let article = self
                .articles
                .find(demand.article_id)
                .await
                .map_err(InventoryError::Storage)?
                .ok_or(InventoryError::UnknownArticle(demand.article_id))?;

            if article.is_consumable() {
                plan.push(StockDecrement {
                    article_id: article.id,
                    amount: article.stock_required(demand.quantity),
                });
            }
        }

        if !plan.is_empty() {
            self.articles.decrement_stock(&plan).await?;
        }

        Ok(plan)
    }

    /// Put previously reserved stock back
    pub async fn release(&self, decrements: &[StockDecrement]) -> Result<(), InventoryError> {
        if decrements.is_empty() {
            return Ok(());
        }
        self.articles.restore_stock(decrements).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("Insufficient stock for article {article}: requested {requested}, available {available}")]
    InsufficientStock {
        article: String,
        requested: f64,
        available: f64,
    },

    #[error("Article not found: {0}")]
    UnknownArticle(Uuid),

    #[error("Article storage failed: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}
