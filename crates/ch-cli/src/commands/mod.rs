pub mod cards;
pub mod fortune;
pub mod reveal;
pub mod serve;

use std::sync::Arc;

use ch_oracle::{FortuneService, OracleConfig};

/// Build the in-process fortune service from the environment.
fn service_from_env(seed: Option<u64>) -> Result<Arc<FortuneService>, String> {
    let mut config = OracleConfig::from_env();
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    FortuneService::from_config(&config)
        .map(Arc::new)
        .map_err(|e| format!("failed to set up fortune service: {e}"))
}
