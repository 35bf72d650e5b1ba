// src/presentation/http/openapi.rs
use crate::application::dto::{ArtistDto, CursorPage, PromotionDto};
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::server::Server;
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn deleted() -> Self {
        Self {
            status: "deleted".into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ArtistListResponse {
    pub items: Vec<ArtistDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
    pub has_more: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PromotionListResponse {
    pub items: Vec<PromotionDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
    pub has_more: bool,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::artists::list_artists,
        crate::presentation::http::controllers::artists::list_artist_options,
        crate::presentation::http::controllers::artists::get_artist,
        crate::presentation::http::controllers::artists::get_artist_by_slug,
        crate::presentation::http::controllers::artists::create_artist,
        crate::presentation::http::controllers::artists::update_artist,
        crate::presentation::http::controllers::artists::delete_artist,
        crate::presentation::http::controllers::promotions::list_promotions,
        crate::presentation::http::controllers::promotions::get_promotion,
        crate::presentation::http::controllers::promotions::create_promotion,
        crate::presentation::http::controllers::promotions::update_promotion,
        crate::presentation::http::controllers::promotions::delete_promotion,
        crate::presentation::http::controllers::managers::list_managers,
        crate::presentation::http::controllers::managers::register_manager,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            ArtistListResponse,
            PromotionListResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::artists::ArtistRequest,
            crate::presentation::http::controllers::promotions::PromotionRequest,
            crate::presentation::http::controllers::managers::RegisterManagerRequest,
            crate::application::dto::ArtistDto,
            crate::application::dto::ArtistSummaryDto,
            crate::application::dto::PromotionDto,
            crate::application::dto::ManagerDto,
            crate::application::dto::ManagerSummaryDto
        )
    ),
    tags(
        (name = "Artists", description = "Artist management with automatic slugs"),
        (name = "Promotions", description = "Paid promotion campaigns"),
        (name = "Managers", description = "Staff accounts that own promotions"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Promo Desk API",
        description = "Admin backend for artists and their paid promotions",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let mut urls: Vec<String> = env::var("PUBLIC_API_URLS")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| segment.trim_end_matches('/').to_string())
                    .collect()
            })
            .unwrap_or_default();

        if urls.is_empty() {
            urls.push("http://localhost:8080".to_string());
        }

        let mut seen = HashSet::new();
        for url in urls {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }
    }
}

pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

/// Writes the document to `OPENAPI_SNAPSHOT_PATH` (default `spec/openapi.json`)
/// and returns the path used.
pub fn write_openapi_snapshot() -> std::io::Result<String> {
    let spec = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| "spec/openapi.json".to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(output_path)
}

impl From<CursorPage<ArtistDto>> for ArtistListResponse {
    fn from(page: CursorPage<ArtistDto>) -> Self {
        Self {
            items: page.items,
            next_cursor: page.next_cursor,
            has_more: page.has_more,
        }
    }
}

impl From<CursorPage<PromotionDto>> for PromotionListResponse {
    fn from(page: CursorPage<PromotionDto>) -> Self {
        Self {
            items: page.items,
            next_cursor: page.next_cursor,
            has_more: page.has_more,
        }
    }
}
