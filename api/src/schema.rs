use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A site-wide setting, unique by `key`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct SystemParameter {
    pub key: String,
    pub value: Value,
    pub category: String,
}

/// The projection of a tag document read by the listing endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct TagRecord {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub color: String,
    pub post_count: i64,
}
