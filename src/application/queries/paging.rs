// src/application/queries/paging.rs
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{cursor::ListCursor, errors::DomainError},
};

pub const DEFAULT_LIMIT: u32 = 15;
pub const MAX_LIMIT: u32 = 100;

pub fn normalize_limit(limit: u32) -> u32 {
    if limit == 0 {
        DEFAULT_LIMIT
    } else {
        limit.min(MAX_LIMIT)
    }
}

pub fn decode_cursor(token: Option<&str>) -> ApplicationResult<Option<ListCursor>> {
    match token.map(str::trim).filter(|value| !value.is_empty()) {
        Some(value) => match ListCursor::decode(value) {
            Ok(cursor) => Ok(Some(cursor)),
            Err(DomainError::Validation(msg)) => Err(ApplicationError::validation(msg)),
            Err(other) => Err(ApplicationError::from(other)),
        },
        None => Ok(None),
    }
}
