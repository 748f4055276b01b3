use async_trait::async_trait;
use brasa_core::{StaffRole, StaffRoster};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Mutable on-shift headcounts by role
pub struct ShiftRoster {
    counts: RwLock<HashMap<StaffRole, u32>>,
}

impl ShiftRoster {
    pub fn new() -> Self {
        Self {
            counts: RwLock::new(HashMap::new()),
        }
    }

    /// Set how many staff with the role are currently on shift
    pub async fn set_on_shift(&self, role: StaffRole, count: u32) {
        self.counts.write().await.insert(role, count);
    }
}

impl Default for ShiftRoster {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StaffRoster for ShiftRoster {
    async fn count_by_role(
        &self,
        role: StaffRole,
    ) -> Result<u32, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.counts.read().await.get(&role).copied().unwrap_or(0))
    }
}
