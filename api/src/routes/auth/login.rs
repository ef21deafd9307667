use actix_web::{web, HttpResponse};
use validator::Validate;

use folio_core::repositories::{ContactRepository, UserRepository};

use crate::dto::auth_dto::{LoginRequest, LoginResponse};
use crate::handlers::error::{handle_domain_error, validation_error_response};
use crate::routes::AppState;

/// Handler for POST /auth/login
///
/// Exchanges a username/password pair for a signed access token. The 401
/// response is identical for unknown usernames and wrong passwords.
///
/// # Request Body
///
/// ```json
/// { "username": "admin", "password": "..." }
/// ```
///
/// # Responses
/// - 200 OK: `{ "token": "...", "expires_in": 3600 }`
/// - 400 Bad Request: malformed body
/// - 401 Unauthorized: bad credentials
pub async fn login<U, C>(
    state: web::Data<AppState<U, C>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: ContactRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(errors);
    }

    match state
        .auth_service
        .login(&request.username, &request.password)
        .await
    {
        Ok(outcome) => HttpResponse::Ok().json(LoginResponse {
            token: outcome.token,
            expires_in: outcome.expires_in,
        }),
        Err(error) => handle_domain_error(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_request_rejects_empty_fields() {
        let empty_user = LoginRequest {
            username: String::new(),
            password: "pw".to_string(),
        };
        assert!(empty_user.validate().is_err());

        let empty_password = LoginRequest {
            username: "admin".to_string(),
            password: String::new(),
        };
        assert!(empty_password.validate().is_err());

        let ok = LoginRequest {
            username: "admin".to_string(),
            password: "pw".to_string(),
        };
        assert!(ok.validate().is_ok());
    }
}
