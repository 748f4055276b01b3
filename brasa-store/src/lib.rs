pub mod app_config;
pub mod article_repo;
pub mod order_repo;
pub mod roster;

pub use article_repo::MemoryArticleRepository;
pub use order_repo::{MemoryInvoiceRepository, MemoryOrderRepository};
pub use roster::ShiftRoster;
