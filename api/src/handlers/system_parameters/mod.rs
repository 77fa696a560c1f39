use crate::State;
use crate::error::{ApiError, ErrorBody};
use axum::{Extension, Json};
use tracing::error;

pub mod types;

const TAG: &str = "system-parameters";

#[utoipa::path(
    get,
    path = "/api/system-parameters",
    responses(
        (status = 200, description = "All system parameters keyed by name", body = types::SystemParameters),
        (status = 500, description = "Failed to retrieve system parameters", body = ErrorBody),
    ),
    tag = TAG
)]
pub async fn get_system_parameters(
    Extension(state): Extension<State>,
) -> Result<Json<types::SystemParameters>, ApiError> {
    let parameters = state.store.system_parameters().await.map_err(|err| {
        error!("Failed to get system parameters {err}");
        ApiError::SystemParameters
    })?;

    Ok(Json(types::SystemParameters::from_ordered(parameters)))
}
