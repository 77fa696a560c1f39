use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SchedulerInitialization {
    pub success: bool,
    /// True when an earlier request already initialized the scheduler.
    pub already_initialized: bool,
    pub initialized_at: DateTime<Utc>,
}
