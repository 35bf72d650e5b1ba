// src/presentation/http/controllers/mod.rs
use serde::Deserialize;
use utoipa::IntoParams;

pub mod artists;
pub mod managers;
pub mod promotions;

fn default_limit() -> u32 {
    15
}

/// Cursor paging shared by the list endpoints.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Page size, 1 to 100.
    #[serde(default = "default_limit")]
    #[param(default = 15, minimum = 1, maximum = 100)]
    pub limit: u32,
    /// `next_cursor` from the previous page.
    #[serde(default)]
    pub cursor: Option<String>,
}
