use crate::application::{
    commands::managers::RegisterManagerCommand,
    dto::{ManagerDto, ManagerSummaryDto},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::JsonBody;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct RegisterManagerRequest {
    #[schema(example = "Hery")]
    pub name: String,
    #[schema(example = "hery@example.com")]
    pub email: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/managers",
    responses(
        (status = 200, description = "Managers ordered by name.", body = [ManagerSummaryDto]),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Managers"
)]
pub async fn list_managers(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<ManagerSummaryDto>>> {
    state
        .services
        .manager_queries
        .list_managers()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/managers",
    request_body = RegisterManagerRequest,
    responses(
        (status = 201, description = "Manager registered.", body = ManagerDto),
        (status = 400, description = "Invalid input.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Email already registered.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Managers"
)]
pub async fn register_manager(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<RegisterManagerRequest>,
) -> HttpResult<(StatusCode, Json<ManagerDto>)> {
    let manager = state
        .services
        .manager_commands
        .register_manager(RegisterManagerCommand {
            name: payload.name,
            email: payload.email,
        })
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(manager)))
}
