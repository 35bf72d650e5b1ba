// src/presentation/http/controllers/promotions.rs
use crate::application::{
    commands::promotions::{
        CreatePromotionCommand, DeletePromotionCommand, UpdatePromotionCommand,
    },
    dto::PromotionDto,
    queries::promotions::{GetPromotionQuery, ListPromotionsQuery},
};
use crate::domain::promotion::{PromotionInput, PromotionStatus};
use crate::presentation::http::controllers::ListParams;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::JsonBody;
use crate::presentation::http::openapi::{PromotionListResponse, StatusResponse};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;

/// Full promotion form. Used for both create and update.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct PromotionRequest {
    #[schema(example = 1)]
    pub artist_id: i64,
    #[schema(example = 1)]
    pub manager_id: i64,
    #[schema(example = "Tsy Miala")]
    pub track_title: String,
    pub intermediary_name: Option<String>,
    pub intermediary_contact: String,
    #[schema(example = "WhatsApp")]
    pub intermediary_channel: String,
    #[schema(example = "Premium")]
    pub package_tier: String,
    /// Defaults to 0.
    pub boost_count: Option<i64>,
    /// JSON number or decimal string, at most two decimal places.
    #[schema(value_type = Option<String>, example = "150000.00")]
    pub amount_paid: Option<Decimal>,
    pub payment_method: String,
    pub receiver_number: String,
    pub transaction_id: Option<String>,
    /// `PENDING`, `ACTIVE` or `DONE`; defaults to `PENDING`.
    #[schema(example = "PENDING")]
    pub status: Option<String>,
}

impl From<PromotionRequest> for PromotionInput {
    fn from(request: PromotionRequest) -> Self {
        Self {
            artist_id: request.artist_id,
            manager_id: request.manager_id,
            track_title: request.track_title,
            intermediary_name: request.intermediary_name,
            intermediary_contact: request.intermediary_contact,
            intermediary_channel: request.intermediary_channel,
            package_tier: request.package_tier,
            boost_count: request.boost_count,
            amount_paid: request.amount_paid,
            payment_method: request.payment_method,
            receiver_number: request.receiver_number,
            transaction_id: request.transaction_id,
            status: request
                .status
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| PromotionStatus::default().as_str().to_string()),
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/promotions",
    params(ListParams),
    responses(
        (status = 200, description = "Promotions, newest first, with artist and manager.", body = PromotionListResponse),
        (status = 400, description = "Invalid cursor.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Promotions"
)]
pub async fn list_promotions(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ListParams>,
) -> HttpResult<Json<PromotionListResponse>> {
    let page = state
        .services
        .promotion_queries
        .list_promotions(ListPromotionsQuery {
            limit: params.limit,
            cursor: params.cursor,
        })
        .await
        .into_http()?;

    Ok(Json(page.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/promotions/{id}",
    params(("id" = i64, Path, description = "Promotion identifier")),
    responses(
        (status = 200, description = "Promotion found.", body = PromotionDto),
        (status = 404, description = "Promotion not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Promotions"
)]
pub async fn get_promotion(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<PromotionDto>> {
    state
        .services
        .promotion_queries
        .get_promotion(GetPromotionQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/promotions",
    request_body = PromotionRequest,
    responses(
        (status = 201, description = "Promotion created.", body = PromotionDto),
        (status = 400, description = "Invalid input or unknown artist/manager.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Transaction id already recorded.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Promotions"
)]
pub async fn create_promotion(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<PromotionRequest>,
) -> HttpResult<(StatusCode, Json<PromotionDto>)> {
    let promotion = state
        .services
        .promotion_commands
        .create_promotion(CreatePromotionCommand {
            fields: payload.into(),
        })
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(promotion)))
}

#[utoipa::path(
    put,
    path = "/api/v1/promotions/{id}",
    params(("id" = i64, Path, description = "Promotion identifier")),
    request_body = PromotionRequest,
    responses(
        (status = 200, description = "Promotion updated.", body = PromotionDto),
        (status = 400, description = "Invalid input or unknown artist/manager.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Promotion not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Transaction id already recorded.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Promotions"
)]
pub async fn update_promotion(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    JsonBody(payload): JsonBody<PromotionRequest>,
) -> HttpResult<Json<PromotionDto>> {
    state
        .services
        .promotion_commands
        .update_promotion(UpdatePromotionCommand {
            id,
            fields: payload.into(),
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/promotions/{id}",
    params(("id" = i64, Path, description = "Promotion identifier")),
    responses(
        (status = 200, description = "Promotion deleted.", body = StatusResponse),
        (status = 404, description = "Promotion not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Promotions"
)]
pub async fn delete_promotion(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .promotion_commands
        .delete_promotion(DeletePromotionCommand { id })
        .await
        .into_http()?;

    Ok(Json(StatusResponse::deleted()))
}
