//! Mood log persistence.
//!
//! Every backend keeps one append-only log per user id and hands it back in
//! ascending timestamp order. Entries are never updated or deleted.

use async_trait::async_trait;

use crate::models::mood::MoodEntry;

pub mod file;
pub mod memory;
pub mod pool;
pub mod postgres;

pub use file::FileMoodLogStore;
pub use memory::InMemoryMoodLogStore;
pub use postgres::PgMoodLogStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[async_trait]
pub trait MoodLogStore: Send + Sync {
    /// Short backend name for logs and health output.
    fn name(&self) -> &'static str;

    async fn append(&self, entry: &MoodEntry) -> Result<(), StoreError>;

    async fn list_ordered(&self, user_id: &str) -> Result<Vec<MoodEntry>, StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;
}
