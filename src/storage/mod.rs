//! League data access.
//!
//! The standings engine only reads. Everything it needs comes from a
//! [`LeagueData`] snapshot handed out by a [`StandingsStore`]:
//! - [`JsonlStore`]: exported league tables on disk (JSONL)
//! - [`MemoryStore`]: a fixed in-memory snapshot

mod data;
mod demo;
mod jsonl;
mod lake;
mod memory;
mod validate;

pub use data::LeagueData;
pub use demo::demo_data;
pub use jsonl::{EntityType, JsonlReader, JsonlWriter};
pub use lake::JsonlStore;
pub use memory::MemoryStore;
pub use validate::{check_tables, validate, IntegrityIssue};

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::MatchStatus;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),

    #[error("Invalid row at {path:?} line {line}: {source}")]
    InvalidRow {
        path: PathBuf,
        line: usize,
        source: serde_json::Error,
    },
}

/// Configuration for storage paths.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

impl StorageConfig {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn tables_dir(&self) -> PathBuf {
        self.data_dir.join("tables")
    }

    pub fn entity_path(&self, entity: EntityType) -> PathBuf {
        self.tables_dir().join(entity.filename())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new(PathBuf::from("./data"))
    }
}

/// Filter for match listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchQuery {
    pub status: Option<MatchStatus>,
}

impl MatchQuery {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn finished() -> Self {
        Self {
            status: Some(MatchStatus::Finished),
        }
    }
}

/// Source of league data.
///
/// A request takes one snapshot up front and answers everything from it,
/// so navigation and match listings always agree with each other.
#[async_trait]
pub trait StandingsStore: Send + Sync {
    /// Store name for logging.
    fn name(&self) -> &'static str;

    /// The current state of every league table.
    async fn snapshot(&self) -> Result<Arc<LeagueData>, StorageError>;
}
