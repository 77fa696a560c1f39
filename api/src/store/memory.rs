use crate::schema::{SystemParameter, TagRecord};
use crate::store::{ContentStore, StoreError};
use axum::async_trait;
use std::cmp::Ordering;

/// A full tag document, as the authoring flows would persist it.
#[derive(Debug, Clone)]
pub struct Tag {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub color: String,
    pub post_count: i64,
    pub is_active: bool,
}

impl Tag {
    pub fn new(id: &str, name: &str, post_count: i64, is_active: bool) -> Self {
        Tag {
            id: id.to_string(),
            name: name.to_string(),
            description: None,
            color: "#6b7280".to_string(),
            post_count,
            is_active,
        }
    }
}

/// Same queries as the PostgreSQL store, evaluated over plain vectors.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub parameters: Vec<SystemParameter>,
    pub tags: Vec<Tag>,
    pub unavailable: bool,
}

impl MemoryStore {
    pub fn unavailable() -> Self {
        MemoryStore {
            unavailable: true,
            ..Default::default()
        }
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.unavailable {
            return Err(StoreError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn ping(&self) -> Result<(), StoreError> {
        self.check()
    }

    async fn system_parameters(&self) -> Result<Vec<SystemParameter>, StoreError> {
        self.check()?;
        let mut parameters = self.parameters.clone();
        parameters.sort_by(|a, b| a.category.cmp(&b.category).then_with(|| a.key.cmp(&b.key)));
        Ok(parameters)
    }

    async fn active_tags(&self, limit: i64) -> Result<Vec<TagRecord>, StoreError> {
        self.check()?;
        let mut tags: Vec<&Tag> = self.tags.iter().filter(|tag| tag.is_active).collect();
        tags.sort_by(|a, b| match b.post_count.cmp(&a.post_count) {
            Ordering::Equal => a.name.cmp(&b.name),
            ordering => ordering,
        });

        Ok(tags
            .into_iter()
            .take(usize::try_from(limit).unwrap_or(0))
            .map(|tag| TagRecord {
                id: tag.id.clone(),
                name: tag.name.clone(),
                description: tag.description.clone(),
                color: tag.color.clone(),
                post_count: tag.post_count,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::tags::MAX_TAGS;
    use serde_json::json;

    #[tokio::test]
    async fn name_ties_sort_by_bytes() {
        let store = MemoryStore {
            tags: vec![
                Tag::new("1", "banana", 7, true),
                Tag::new("2", "Apple", 7, true),
                Tag::new("3", "apple", 7, true),
                Tag::new("4", "Zebra", 7, true),
            ],
            ..Default::default()
        };

        let tags = store.active_tags(MAX_TAGS).await.unwrap();
        let names: Vec<&str> = tags.iter().map(|tag| tag.name.as_str()).collect();
        assert_eq!(names, vec!["Apple", "Zebra", "apple", "banana"]);
    }

    #[tokio::test]
    async fn categories_sort_by_bytes() {
        let parameter = |category: &str, key: &str| SystemParameter {
            key: key.to_string(),
            value: json!(null),
            category: category.to_string(),
        };
        let store = MemoryStore {
            parameters: vec![
                parameter("seo", "title"),
                parameter("general", "siteName"),
                parameter("general", "Locale"),
                parameter("Social", "twitter"),
            ],
            ..Default::default()
        };

        let parameters = store.system_parameters().await.unwrap();
        let keys: Vec<(&str, &str)> = parameters
            .iter()
            .map(|p| (p.category.as_str(), p.key.as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("Social", "twitter"),
                ("general", "Locale"),
                ("general", "siteName"),
                ("seo", "title"),
            ]
        );
    }
}
