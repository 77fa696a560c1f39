//! Access to the content collections.
//!
//! Handlers never talk to the database directly: they receive a
//! [`ContentStore`] through the shared [`crate::State`], so the connection
//! pool is created once at startup and reused by every request.

use crate::schema::{SystemParameter, TagRecord};
use axum::async_trait;
use std::fmt::Debug;
use thiserror::Error;

#[cfg(test)]
pub mod memory;
pub mod postgres;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("table {0} does not exist")]
    MissingTable(&'static str),
}

#[async_trait]
pub trait ContentStore: Debug + Send + Sync {
    /// Succeeds when the store is reachable and its collections exist.
    async fn ping(&self) -> Result<(), StoreError>;

    // Text ordering is by bytes (`"Zebra" < "apple"`), never locale aware.

    /// Every system parameter, ordered by category then key.
    async fn system_parameters(&self) -> Result<Vec<SystemParameter>, StoreError>;

    /// Active tags ordered by post count (highest first) then name,
    /// truncated to `limit` records.
    async fn active_tags(&self, limit: i64) -> Result<Vec<TagRecord>, StoreError>;
}
