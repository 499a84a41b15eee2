pub mod in_memory;

pub use in_memory::*;

use crate::model::{GenericError, Points, RecordId};
use async_trait::async_trait;

/// Concurrency-safe mapping from generated identifier to score.
#[async_trait]
pub trait ScoreStorage: Send + Sync {
    /// Associates `points` with a freshly generated identifier and returns
    /// the identifier. Never overwrites an existing entry.
    async fn save_score(&self, points: Points) -> Result<RecordId, GenericError>;

    /// Returns the score stored under `id`, or `None` if the identifier was
    /// never issued.
    async fn get_score(&self, id: &str) -> Result<Option<Points>, GenericError>;
}
