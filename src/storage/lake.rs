//! Store over the exported JSONL tables.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::{LeagueData, StandingsStore, StorageConfig, StorageError};

/// Reads every table once per snapshot. Nothing is cached between
/// requests, so each request sees what is on disk when it starts.
#[derive(Debug, Clone)]
pub struct JsonlStore {
    config: StorageConfig,
}

impl JsonlStore {
    pub fn new(config: StorageConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl StandingsStore for JsonlStore {
    fn name(&self) -> &'static str {
        "jsonl"
    }

    async fn snapshot(&self) -> Result<Arc<LeagueData>, StorageError> {
        debug!("Loading league tables from {:?}", self.config.tables_dir());
        Ok(Arc::new(LeagueData::load(&self.config)?))
    }
}
