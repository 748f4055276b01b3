use async_trait::async_trait;
use brasa_catalog::{Article, ArticleKind, ArticleRepository, InventoryError, StockDecrement};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory article store.
///
/// The write lock around `decrement_stock` is the serialization point for
/// stock: the whole batch is validated and applied under one guard, so two
/// racing orders cannot both pass a check against the same quantity.
pub struct MemoryArticleRepository {
    articles: RwLock<HashMap<Uuid, Article>>,
}

impl MemoryArticleRepository {
    pub fn new() -> Self {
        Self {
            articles: RwLock::new(HashMap::new()),
        }
    }

    pub async fn seed(&self, article: Article) {
        self.articles.write().await.insert(article.id, article);
    }

    /// Current on-hand quantity (0 for prepared articles and unknown ids)
    pub async fn stock_of(&self, id: Uuid) -> f64 {
        match self.articles.read().await.get(&id).map(|a| a.kind.clone()) {
            Some(ArticleKind::Consumable { stock_on_hand, .. }) => stock_on_hand,
            _ => 0.0,
        }
    }
}

impl Default for MemoryArticleRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArticleRepository for MemoryArticleRepository {
    async fn find(
        &self,
        id: Uuid,
    ) -> Result<Option<Article>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.articles.read().await.get(&id).cloned())
    }

    async fn decrement_stock(&self, decrements: &[StockDecrement]) -> Result<(), InventoryError> {
        let mut articles = self.articles.write().await;

        // Validate the whole batch before touching anything
        for dec in decrements {
            let article = articles
                .get(&dec.article_id)
                .ok_or(InventoryError::UnknownArticle(dec.article_id))?;
            if let ArticleKind::Consumable { stock_on_hand, .. } = article.kind {
                if stock_on_hand < dec.amount {
                    return Err(InventoryError::InsufficientStock {
                        article: article.name.clone(),
                        requested: dec.amount,
                        available: stock_on_hand,
                    });
                }
            }
        }

        for dec in decrements {
            if let Some(article) = articles.get_mut(&dec.article_id) {
                if let ArticleKind::Consumable {
                    ref mut stock_on_hand,
                    ..
                } = article.kind
                {
                    *stock_on_hand -= dec.amount;
                }
            }
        }

        tracing::debug!("Committed {} stock decrement(s)", decrements.len());
        Ok(())
    }

    async fn restore_stock(&self, decrements: &[StockDecrement]) -> Result<(), InventoryError> {
        let mut articles = self.articles.write().await;
        for dec in decrements {
            if let Some(article) = articles.get_mut(&dec.article_id) {
                if let ArticleKind::Consumable {
                    ref mut stock_on_hand,
                    ..
                } = article.kind
                {
                    *stock_on_hand += dec.amount;
                }
            }
        }
        Ok(())
    }
}
