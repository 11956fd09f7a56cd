//! Boat type lookup seam implemented by backend adapters.

use async_trait::async_trait;

use crate::options::BoatType;

/// Asynchronous source of boat type records.
///
/// The form calls this once per load and never retries; adapters that want
/// retries or caching do so behind this trait.
#[async_trait]
pub trait BoatTypeProvider: Send + Sync {
    /// Fetch every boat type the listing can be filtered by.
    async fn boat_types(&self) -> anyhow::Result<Vec<BoatType>>;
}

#[async_trait]
impl BoatTypeProvider for Vec<BoatType> {
    async fn boat_types(&self) -> anyhow::Result<Vec<BoatType>> {
        Ok(self.clone())
    }
}
