use serde::{Deserialize, Serialize};

/// How an order leaves the branch
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryMode {
    DineIn,
    TakeAway,
    Delivery,
}
