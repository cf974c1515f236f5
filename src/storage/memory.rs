//! Store over a fixed in-memory snapshot.

use std::sync::Arc;

use async_trait::async_trait;

use super::{LeagueData, StandingsStore, StorageError};

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    data: Arc<LeagueData>,
}

impl MemoryStore {
    pub fn new(data: LeagueData) -> Self {
        Self {
            data: Arc::new(data),
        }
    }
}

#[async_trait]
impl StandingsStore for MemoryStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn snapshot(&self) -> Result<Arc<LeagueData>, StorageError> {
        Ok(Arc::clone(&self.data))
    }
}
