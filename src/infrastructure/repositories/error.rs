use crate::domain::errors::DomainError;

const CNT_ARTIST_SLUG: &str = "artists_slug_key";
const CNT_ARTIST_NAME: &str = "artists_name_key";
const CNT_PROMOTION_TRANSACTION: &str = "promotions_transaction_id_key";
const CNT_PROMOTION_ARTIST: &str = "promotions_artist_id_fkey";
const CNT_PROMOTION_MANAGER: &str = "promotions_manager_id_fkey";
const CNT_USER_EMAIL: &str = "users_email_key";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return map_constraint(constraint);
            }

            if let Some(code) = db_err.code() {
                if let Some(mapped) = map_sqlstate(code.as_ref()) {
                    return mapped;
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

fn map_constraint(constraint: &str) -> DomainError {
    match constraint {
        CNT_ARTIST_SLUG => DomainError::Conflict("artist slug already exists".into()),
        CNT_ARTIST_NAME => DomainError::Conflict("artist name already exists".into()),
        CNT_PROMOTION_TRANSACTION => {
            DomainError::Conflict("transaction_id already recorded".into())
        }
        CNT_USER_EMAIL => DomainError::Conflict("email already registered".into()),
        CNT_PROMOTION_ARTIST => DomainError::NotFound("artist not found".into()),
        CNT_PROMOTION_MANAGER => DomainError::NotFound("manager not found".into()),
        other if other.ends_with("_chk") => {
            DomainError::Validation(format!("check constraint violated: {other}"))
        }
        other => DomainError::Persistence(format!("database constraint violation: {other}")),
    }
}

fn map_sqlstate(code: &str) -> Option<DomainError> {
    match code {
        "23505" => Some(DomainError::Conflict("unique constraint violated".into())),
        "23503" => Some(DomainError::NotFound("referenced record not found".into())),
        "23514" => Some(DomainError::Validation("check constraint violated".into())),
        _ => None,
    }
}
