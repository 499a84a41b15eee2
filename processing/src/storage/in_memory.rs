use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

use super::ScoreStorage;
use crate::model::{GenericError, Points, RecordId};

// In-memory implementation
#[derive(Default)]
pub struct InMemoryScoreStore {
    scores: Arc<Mutex<HashMap<RecordId, Points>>>,
}

impl InMemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ScoreStorage for InMemoryScoreStore {
    async fn save_score(&self, points: Points) -> Result<RecordId, GenericError> {
        let mut scores = self.scores.lock().await;
        // v4 collisions are negligible; the re-roll keeps an existing entry
        // from ever being overwritten.
        loop {
            let id = Uuid::new_v4().to_string();
            if !scores.contains_key(&id) {
                scores.insert(id.clone(), points);
                return Ok(id);
            }
        }
    }

    async fn get_score(&self, id: &str) -> Result<Option<Points>, GenericError> {
        let scores = self.scores.lock().await;
        Ok(scores.get(id).copied())
    }
}
