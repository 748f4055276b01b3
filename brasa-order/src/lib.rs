pub mod billing;
pub mod estimator;
pub mod manager;
pub mod models;
pub mod repository;

pub use billing::{InvoiceRenderer, Notifier};
pub use estimator::{KitchenLoadEstimator, KitchenPolicy};
pub use manager::{OrderError, OrderManager};
pub use models::{Customer, Invoice, Order, OrderDraft, OrderLine, OrderStatus};
pub use repository::{InvoiceRepository, OrderRepository};
