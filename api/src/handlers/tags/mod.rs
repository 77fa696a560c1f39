use crate::State;
use crate::error::{ApiError, ErrorBody};
use axum::{Extension, Json};
use tracing::error;

pub mod types;

/// Most tags the listing returns; lower-usage tags past this are dropped.
pub const MAX_TAGS: i64 = 100;

const TAG: &str = "tags";

#[utoipa::path(
    get,
    path = "/api/tags",
    responses(
        (status = 200, description = "Active tags, most used first", body = types::TagList),
        (status = 500, description = "Failed to retrieve tags", body = ErrorBody),
    ),
    tag = TAG
)]
pub async fn get_tags(Extension(state): Extension<State>) -> Result<Json<types::TagList>, ApiError> {
    let tags = state.store.active_tags(MAX_TAGS).await.map_err(|err| {
        error!("Failed to get tags {err}");
        ApiError::Tags
    })?;

    Ok(Json(types::TagList {
        tags: tags.into_iter().map(types::Tag::from).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::{MemoryStore, Tag};
    use std::sync::Arc;

    fn state_with_tags(tags: Vec<Tag>) -> State {
        State::new(Arc::new(MemoryStore {
            tags,
            ..Default::default()
        }))
    }

    #[tokio::test]
    async fn inactive_tags_are_hidden_and_usage_orders_the_rest() {
        let state = state_with_tags(vec![
            Tag::new("a", "A", 5, true),
            Tag::new("b", "B", 10, true),
            Tag::new("c", "C", 20, false),
        ]);

        let Json(list) = get_tags(Extension(state)).await.unwrap();
        let ids: Vec<&str> = list.tags.iter().map(|tag| tag.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(list.tags[0].usage_count, 10);
    }

    #[tokio::test]
    async fn ties_are_broken_by_name() {
        let state = state_with_tags(vec![
            Tag::new("3", "rust", 7, true),
            Tag::new("1", "go", 7, true),
            Tag::new("2", "zig", 9, true),
        ]);

        let Json(list) = get_tags(Extension(state)).await.unwrap();
        let names: Vec<&str> = list.tags.iter().map(|tag| tag.name.as_str()).collect();
        assert_eq!(names, vec!["zig", "go", "rust"]);
    }

    #[tokio::test]
    async fn listing_is_capped_at_the_most_used_tags() {
        let tags = (0..150)
            .map(|i| Tag::new(&format!("t{i}"), &format!("tag-{i:03}"), i, i % 10 != 0))
            .collect();
        let state = state_with_tags(tags);

        let Json(list) = get_tags(Extension(state)).await.unwrap();
        assert_eq!(list.tags.len(), MAX_TAGS as usize);
        assert_eq!(list.tags[0].usage_count, 149);
        assert!(list.tags.iter().all(|tag| tag.usage_count % 10 != 0));
        assert!(
            list.tags
                .windows(2)
                .all(|pair| pair[0].usage_count >= pair[1].usage_count)
        );
    }

    #[tokio::test]
    async fn fewer_active_tags_than_the_cap_are_all_returned() {
        let state = state_with_tags(vec![
            Tag::new("a", "a", 1, true),
            Tag::new("b", "b", 2, false),
        ]);

        let Json(list) = get_tags(Extension(state)).await.unwrap();
        assert_eq!(list.tags.len(), 1);
    }

    #[tokio::test]
    async fn store_failure_is_reported_generically() {
        let state = State::new(Arc::new(MemoryStore::unavailable()));

        let err = get_tags(Extension(state)).await.unwrap_err();
        assert_eq!(err, ApiError::Tags);
    }

    #[test]
    fn projection_renames_fields() {
        let tag = types::Tag {
            id: "64f0c".to_string(),
            name: "rust".to_string(),
            description: None,
            color: "#dea584".to_string(),
            usage_count: 12,
        };

        assert_eq!(
            serde_json::to_value(&tag).unwrap(),
            serde_json::json!({
                "_id": "64f0c",
                "name": "rust",
                "color": "#dea584",
                "usageCount": 12
            })
        );
    }
}
