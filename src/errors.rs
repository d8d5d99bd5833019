use actix_web::HttpResponse;
use derive_more::Display;
use serde_json::json;

#[derive(Debug, Display, PartialEq, Eq)]
pub enum ServerError {
    #[display(fmt = "{}", _0)]
    Unauthenticated(&'static str),
    #[display(fmt = "Insufficient permissions")]
    Forbidden,
    #[display(fmt = "{}", _0)]
    NotFound(&'static str),
    ConnectionError,
    DieselError,
    EnvironmentError,
    R2D2Error,
}

impl From<r2d2::Error> for ServerError {
    fn from(_: r2d2::Error) -> ServerError {
        ServerError::R2D2Error
    }
}

impl From<std::env::VarError> for ServerError {
    fn from(_: std::env::VarError) -> ServerError {
        ServerError::EnvironmentError
    }
}

impl From<diesel::result::Error> for ServerError {
    fn from(_: diesel::result::Error) -> ServerError {
        ServerError::DieselError
    }
}

impl actix_web::error::ResponseError for ServerError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ServerError::Unauthenticated(detail) => {
                HttpResponse::Unauthorized().json(json!({ "detail": detail }))
            }
            ServerError::Forbidden => {
                HttpResponse::Forbidden().json(json!({ "detail": "Insufficient permissions" }))
            }
            ServerError::NotFound(detail) => {
                HttpResponse::NotFound().json(json!({ "detail": detail }))
            }
            ServerError::ConnectionError => HttpResponse::InternalServerError()
                .body("Server Error: Database connection failed."),
            ServerError::DieselError => {
                HttpResponse::InternalServerError().body("Library Error: Diesel Error.")
            }
            ServerError::EnvironmentError => HttpResponse::InternalServerError()
                .body("Server Error: Use of an uninitialized environment variable."),
            ServerError::R2D2Error => {
                HttpResponse::InternalServerError().body("Server Error: Pooling Error.")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{error::ResponseError, http::StatusCode};

    #[test]
    fn unauthenticated_maps_to_401() {
        let res = ServerError::Unauthenticated("X-Org-ID and X-User-ID headers required")
            .error_response();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn forbidden_maps_to_403() {
        assert_eq!(
            ServerError::Forbidden.error_response().status(),
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn not_found_maps_to_404() {
        assert_eq!(
            ServerError::NotFound("Note not found").error_response().status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn store_failures_map_to_500() {
        let err: ServerError = diesel::result::Error::NotFound.into();
        assert_eq!(
            err.error_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
