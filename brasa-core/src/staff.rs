use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Roles a staff member can hold at a branch
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StaffRole {
    Cook,
    Waiter,
    Cashier,
    Driver,
}

/// Staff roster collaborator, consumed in aggregate only
#[async_trait]
pub trait StaffRoster: Send + Sync {
    /// Count staff currently on shift with the given role
    async fn count_by_role(
        &self,
        role: StaffRole,
    ) -> Result<u32, Box<dyn std::error::Error + Send + Sync>>;
}

/// Fixed headcounts, for tests and single-branch deployments
pub struct FixedRoster {
    counts: HashMap<StaffRole, u32>,
}

impl FixedRoster {
    pub fn new(counts: HashMap<StaffRole, u32>) -> Self {
        Self { counts }
    }

    /// Roster with a single role staffed
    pub fn with_role(role: StaffRole, count: u32) -> Self {
        let mut counts = HashMap::new();
        counts.insert(role, count);
        Self { counts }
    }

    /// Roster with nobody on shift
    pub fn empty() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }
}

#[async_trait]
impl StaffRoster for FixedRoster {
    async fn count_by_role(
        &self,
        role: StaffRole,
    ) -> Result<u32, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.counts.get(&role).copied().unwrap_or(0))
    }
}
