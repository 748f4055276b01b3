use serde::{Deserialize, Serialize};

/// Payment methods accepted at the counter and online
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Cash,
    Card,
    OnlineWallet,
}
