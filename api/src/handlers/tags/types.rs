use crate::schema::TagRecord;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public shape of a tag. `usageCount` is the stored `post_count`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub color: String,
    pub usage_count: i64,
}

impl From<TagRecord> for Tag {
    fn from(record: TagRecord) -> Self {
        Tag {
            id: record.id,
            name: record.name,
            description: record.description,
            color: record.color,
            usage_count: record.post_count,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TagList {
    pub tags: Vec<Tag>,
}
