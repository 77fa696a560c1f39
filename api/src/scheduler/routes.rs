use crate::State;
use crate::scheduler::schema::SchedulerInitialization;
use axum::{Extension, Json};

const TAG: &str = "scheduler";

#[utoipa::path(
    post,
    path = "/api/admin/scheduler/init",
    responses(
        (status = 200, description = "Scheduler initialized, or was already running", body = SchedulerInitialization),
    ),
    tag = TAG
)]
pub async fn init_scheduler(Extension(state): Extension<State>) -> Json<SchedulerInitialization> {
    Json(state.scheduler.initialize())
}
