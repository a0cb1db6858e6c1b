use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum HubError {
    #[error("Portfolio not found")]
    NotFound,

    #[error("public id {0} already exists")]
    PublicIdCollision(String),

    #[error("Database error: {0}")]
    DatabaseError(#[from] SqlxError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] figment::Error),
}

impl IntoResponse for HubError {
    fn into_response(self) -> Response {
        match self {
            HubError::NotFound => (StatusCode::NOT_FOUND, "Portfolio not found").into_response(),
            HubError::PublicIdCollision(ref id) => {
                error!(public_id = %id, "public id collision on insert");
                (
                    StatusCode::CONFLICT,
                    "A portfolio with this id already exists; please submit again.",
                )
                    .into_response()
            }
            other => {
                error!(error = %other, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_plain_404() {
        let resp = HubError::NotFound.into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let ct = resp.headers().get("content-type").unwrap().to_str().unwrap();
        assert!(ct.starts_with("text/plain"));
    }

    #[test]
    fn io_failure_is_500() {
        let err: HubError = std::io::Error::other("disk full").into();
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn collision_is_conflict() {
        let resp = HubError::PublicIdCollision("abc".into()).into_response();
        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }
}
