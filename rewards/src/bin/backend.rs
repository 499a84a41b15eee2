use std::error::Error;
use std::sync::Arc;

use processing::executable_utils::{initialize_executable, initialize_tracing, run_backend};
use processing::scorers::Scorer;
use processing::storage::{InMemoryScoreStore, ScoreStorage};

use rewards::model::Receipt;
use rewards::rule_based_scorer::get_rule_based_scorer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    println!("Starting backend...");
    let config = initialize_executable()?;
    initialize_tracing(&config.backend.log_level);

    let scorer: Arc<dyn Scorer> = Arc::new(get_rule_based_scorer());
    let storage: Arc<dyn ScoreStorage> = Arc::new(InMemoryScoreStore::new());

    run_backend::<Receipt>(config.backend, scorer, storage).await
}
