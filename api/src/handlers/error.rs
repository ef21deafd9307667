//! Mapping from domain errors to HTTP responses.

use actix_web::error::InternalError;
use actix_web::{Error, HttpResponse};
use folio_core::errors::{DomainError, ErrorResponse, TokenError};

/// Converts a domain error into its HTTP response
///
/// Authentication failures are mapped to generic bodies: a 401 never says
/// whether the username, password, or token was at fault.
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    log::error!("domain error: {:?}", error);

    match &error {
        DomainError::Unauthorized => HttpResponse::Unauthorized()
            .json(ErrorResponse::new(error.error_code(), "Authentication failed")),
        DomainError::Token(TokenError::Expired) => HttpResponse::Unauthorized()
            .json(ErrorResponse::new(error.error_code(), "Token expired")),
        DomainError::Token(_) => HttpResponse::Unauthorized()
            .json(ErrorResponse::new(error.error_code(), "Invalid token")),
        DomainError::Forbidden => HttpResponse::Forbidden()
            .json(ErrorResponse::new(error.error_code(), "Insufficient permissions")),
        DomainError::NotFound { resource } => HttpResponse::NotFound().json(ErrorResponse::new(
            error.error_code(),
            format!("{resource} not found"),
        )),
        // Storage and internal details are logged above, never leaked.
        DomainError::Storage { .. } | DomainError::Config { .. } | DomainError::Internal { .. } => {
            HttpResponse::InternalServerError()
                .json(ErrorResponse::new(error.error_code(), "An internal error occurred"))
        }
    }
}

/// Builds a validation failure response for a rejected request body
pub fn validation_error_response(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse::new(
        "validation_error",
        format!("Invalid request data: {errors}"),
    ))
}

/// An actix error carrying the canonical 401 body, for use in middleware
pub fn unauthorized_error(message: &str) -> Error {
    let response =
        HttpResponse::Unauthorized().json(ErrorResponse::new("unauthorized", message));
    InternalError::from_response(message.to_string(), response).into()
}

/// An actix error carrying the canonical 403 body, for use in middleware
pub fn forbidden_error() -> Error {
    let response = HttpResponse::Forbidden()
        .json(ErrorResponse::new("forbidden", "Insufficient permissions"));
    InternalError::from_response("forbidden", response).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn unauthorized_maps_to_401_without_detail() {
        let resp = handle_domain_error(DomainError::Unauthorized);
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn forbidden_maps_to_403() {
        let resp = handle_domain_error(DomainError::Forbidden);
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn storage_errors_map_to_500() {
        let resp = handle_domain_error(DomainError::Storage {
            message: "disk on fire".to_string(),
        });
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn expired_token_maps_to_401() {
        let resp = handle_domain_error(DomainError::Token(TokenError::Expired));
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
