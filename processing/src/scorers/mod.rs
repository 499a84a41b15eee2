pub mod rule_based;

pub use rule_based::*;

use crate::model::{Feature, ScorerResult};
use async_trait::async_trait;

#[async_trait]
pub trait Scorer: Send + Sync {
    async fn score(&self, features: Vec<Feature>) -> Vec<ScorerResult>;
}
