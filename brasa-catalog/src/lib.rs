pub mod article;
pub mod inventory;
pub mod pricing;

pub use article::{Article, ArticleKind};
pub use inventory::{ArticleRepository, InventoryChecker, InventoryError, StockDecrement, StockDemand};
pub use pricing::{DiscountDecision, PricingPolicy};
