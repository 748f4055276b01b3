use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What kind of article this is, and the data that only that kind carries
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ArticleKind {
    /// Stock-tracked ingredient, decremented per order
    Consumable {
        /// Units currently on hand
        stock_on_hand: f64,
        /// Units consumed per ordered unit
        required_per_unit: f64,
    },
    /// Kitchen-prepared item with an estimated preparation time
    Prepared { prep_time_minutes: u32 },
}

/// A sellable article belonging to one branch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub branch_id: Option<Uuid>,
    pub kind: ArticleKind,
}

impl Article {
    pub fn consumable(name: &str, price: f64, stock_on_hand: f64, required_per_unit: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            price,
            branch_id: None,
            kind: ArticleKind::Consumable {
                stock_on_hand,
                required_per_unit,
            },
        }
    }

    pub fn prepared(name: &str, price: f64, prep_time_minutes: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            price,
            branch_id: None,
            kind: ArticleKind::Prepared { prep_time_minutes },
        }
    }

    pub fn with_branch(mut self, branch_id: Uuid) -> Self {
        self.branch_id = Some(branch_id);
        self
    }

    /// Preparation minutes for kitchen scheduling (0 for consumables)
    pub fn prep_time_minutes(&self) -> u32 {
        match self.kind {
            ArticleKind::Prepared { prep_time_minutes } => prep_time_minutes,
            ArticleKind::Consumable { .. } => 0,
        }
    }

    /// Stock needed to serve the given ordered quantity (0 for prepared items)
    pub fn stock_required(&self, quantity: u32) -> f64 {
        match self.kind {
            ArticleKind::Consumable {
                required_per_unit, ..
            } => quantity as f64 * required_per_unit,
            ArticleKind::Prepared { .. } => 0.0,
        }
    }

    pub fn is_consumable(&self) -> bool {
        matches!(self.kind, ArticleKind::Consumable { .. })
    }
}
