// src/presentation/http/controllers/artists.rs
use crate::application::{
    commands::artists::{CreateArtistCommand, DeleteArtistCommand, UpdateArtistCommand},
    dto::{ArtistDto, ArtistSummaryDto},
    queries::artists::{GetArtistByIdQuery, GetArtistBySlugQuery, ListArtistsQuery},
};
use crate::domain::artist::ArtistProfileInput;
use crate::presentation::http::controllers::ListParams;
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::JsonBody;
use crate::presentation::http::openapi::{ArtistListResponse, StatusResponse};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;

/// Full artist form. Used for both create and update; an update replaces every field.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct ArtistRequest {
    #[schema(example = "DJ Lova")]
    pub name: String,
    /// Leave empty to derive the slug from the name.
    #[schema(example = "dj-lova")]
    pub slug: Option<String>,
    pub profile_photo: Option<String>,
    pub cover_photo: Option<String>,
    pub real_name: Option<String>,
    /// `YYYY-MM-DD`.
    #[schema(example = "1994-03-21")]
    pub birthdate: Option<String>,
    pub birthplace: Option<String>,
    pub biography: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl ArtistRequest {
    fn into_parts(self) -> HttpResult<(String, Option<String>, ArtistProfileInput)> {
        let birthdate = parse_birthdate(self.birthdate.as_deref())?;
        let profile = ArtistProfileInput {
            profile_photo: self.profile_photo,
            cover_photo: self.cover_photo,
            real_name: self.real_name,
            birthdate,
            birthplace: self.birthplace,
            biography: self.biography,
            description: self.description,
            keywords: self.keywords,
            email: self.email,
            phone: self.phone,
        };
        Ok((self.name, self.slug, profile))
    }
}

fn parse_birthdate(value: Option<&str>) -> HttpResult<Option<NaiveDate>> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| HttpError::bad_request("birthdate must be a date formatted YYYY-MM-DD")),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/artists",
    params(ListParams),
    responses(
        (status = 200, description = "Artists, newest first.", body = ArtistListResponse),
        (status = 400, description = "Invalid cursor.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Artists"
)]
pub async fn list_artists(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ListParams>,
) -> HttpResult<Json<ArtistListResponse>> {
    let page = state
        .services
        .artist_queries
        .list_artists(ListArtistsQuery {
            limit: params.limit,
            cursor: params.cursor,
        })
        .await
        .into_http()?;

    Ok(Json(page.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/artists/options",
    responses(
        (status = 200, description = "Every artist as an id/name/slug triple, ordered by name.", body = [ArtistSummaryDto]),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Artists"
)]
pub async fn list_artist_options(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<ArtistSummaryDto>>> {
    state
        .services
        .artist_queries
        .list_artist_options()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/artists/{id}",
    params(("id" = i64, Path, description = "Artist identifier")),
    responses(
        (status = 200, description = "Artist found.", body = ArtistDto),
        (status = 404, description = "Artist not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Artists"
)]
pub async fn get_artist(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArtistDto>> {
    state
        .services
        .artist_queries
        .get_artist_by_id(GetArtistByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/artists/by-slug/{slug}",
    params(("slug" = String, Path, description = "Artist slug")),
    responses(
        (status = 200, description = "Artist found.", body = ArtistDto),
        (status = 404, description = "Artist not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Artists"
)]
pub async fn get_artist_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArtistDto>> {
    state
        .services
        .artist_queries
        .get_artist_by_slug(GetArtistBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/artists",
    request_body = ArtistRequest,
    responses(
        (status = 201, description = "Artist created.", body = ArtistDto),
        (status = 400, description = "Invalid input.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Name or slug already taken.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Artists"
)]
pub async fn create_artist(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<ArtistRequest>,
) -> HttpResult<(StatusCode, Json<ArtistDto>)> {
    let (name, slug, profile) = payload.into_parts()?;
    let command = CreateArtistCommand {
        name,
        slug,
        profile,
    };

    let artist = state
        .services
        .artist_commands
        .create_artist(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(artist)))
}

#[utoipa::path(
    put,
    path = "/api/v1/artists/{id}",
    params(("id" = i64, Path, description = "Artist identifier")),
    request_body = ArtistRequest,
    responses(
        (status = 200, description = "Artist updated.", body = ArtistDto),
        (status = 400, description = "Invalid input.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Artist not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Name or slug already taken.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Artists"
)]
pub async fn update_artist(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    JsonBody(payload): JsonBody<ArtistRequest>,
) -> HttpResult<Json<ArtistDto>> {
    let (name, slug, profile) = payload.into_parts()?;
    let command = UpdateArtistCommand {
        id,
        name,
        slug,
        profile,
    };

    state
        .services
        .artist_commands
        .update_artist(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/artists/{id}",
    params(("id" = i64, Path, description = "Artist identifier")),
    responses(
        (status = 200, description = "Artist and its promotions deleted.", body = StatusResponse),
        (status = 404, description = "Artist not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Artists"
)]
pub async fn delete_artist(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .artist_commands
        .delete_artist(DeleteArtistCommand { id })
        .await
        .into_http()?;

    Ok(Json(StatusResponse::deleted()))
}
